//! Timestamped JSON cache under ~/.folio/cache/.
//!
//! Each entry wraps its payload in an envelope carrying the fetch time, so
//! loaders can distinguish "fresh enough" from "stale but better than
//! nothing" without touching the network.

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::utils::persistence::folio_dir;

#[derive(Serialize, Deserialize)]
struct Envelope<T> {
    fetched_at: i64,
    payload: T,
}

fn cache_dir() -> io::Result<PathBuf> {
    let dir = folio_dir()?.join("cache");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

fn entry_path(name: &str) -> io::Result<PathBuf> {
    Ok(cache_dir()?.join(format!("{name}.json")))
}

/// Store a payload stamped with the current time.
pub fn store<T: Serialize>(name: &str, payload: &T) -> io::Result<()> {
    let envelope = Envelope {
        fetched_at: Utc::now().timestamp(),
        payload,
    };
    let json = serde_json::to_string_pretty(&envelope)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(entry_path(name)?, json)
}

/// Load a payload no older than `max_age_secs`.
pub fn load_fresh<T: DeserializeOwned>(name: &str, max_age_secs: i64) -> Option<T> {
    let (age, payload) = load_envelope(name)?;
    if age <= max_age_secs {
        Some(payload)
    } else {
        None
    }
}

/// Load a payload of any age. Fallback for when the network is down.
pub fn load_any<T: DeserializeOwned>(name: &str) -> Option<T> {
    load_envelope(name).map(|(_, payload)| payload)
}

fn load_envelope<T: DeserializeOwned>(name: &str) -> Option<(i64, T)> {
    let text = fs::read_to_string(entry_path(name).ok()?).ok()?;
    let envelope: Envelope<T> = serde_json::from_str(&text).ok()?;
    // A file stamped in the future (clock change) counts as fresh now
    let age = (Utc::now().timestamp() - envelope.fetched_at).max(0);
    Some((age, envelope.payload))
}
