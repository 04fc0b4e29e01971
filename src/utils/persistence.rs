//! Generic JSON persistence helpers for ~/.folio/ files.
//!
//! Best scores, the optional profile override, and the API cache all go
//! through these helpers so the on-disk layout stays in one place.

use std::fs;
use std::io;
use std::path::PathBuf;

/// Get the ~/.folio/ directory path, creating it if needed.
pub fn folio_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(".folio");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a file in ~/.folio/.
pub fn data_path(filename: &str) -> io::Result<PathBuf> {
    Ok(folio_dir()?.join(filename))
}

/// Load a JSON file from ~/.folio/, returning `T::default()` if missing or invalid.
pub fn load_json_or_default<T: Default + serde::de::DeserializeOwned>(filename: &str) -> T {
    let path = match data_path(filename) {
        Ok(p) => p,
        Err(_) => return T::default(),
    };
    match fs::read_to_string(&path) {
        Ok(json) => serde_json::from_str(&json).unwrap_or_default(),
        Err(_) => T::default(),
    }
}

/// Save a value as pretty-printed JSON to ~/.folio/.
pub fn save_json<T: serde::Serialize>(filename: &str, data: &T) -> io::Result<()> {
    let path = data_path(filename)?;
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)?;
    Ok(())
}
