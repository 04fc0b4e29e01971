//! IP-based geolocation via ip-api.com.
//!
//! Anchors the dashboard: the weather loader needs the coordinates found
//! here. The service is HTTP-only on its free tier, hence the plain URL.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::time::Duration;

use crate::api::{cache, DataSource};
use crate::constants::{GEO_TTL_SECS, HTTP_TIMEOUT_SECS, USER_AGENT};

const CACHE_NAME: &str = "geo";

/// Where this machine appears to be.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoFix {
    pub city: String,
    pub country: String,
    pub lat: f64,
    pub lon: f64,
    pub timezone: String,
    pub ip: String,
}

#[derive(Debug, Deserialize)]
struct GeoDto {
    status: String,
    #[serde(default)]
    city: String,
    #[serde(default)]
    country: String,
    #[serde(default)]
    lat: f64,
    #[serde(default)]
    lon: f64,
    #[serde(default)]
    timezone: String,
    #[serde(default)]
    query: String,
}

fn fix_from(dto: GeoDto) -> Result<GeoFix, Box<dyn Error>> {
    if dto.status != "success" {
        return Err(format!("geolocation lookup failed: {}", dto.status).into());
    }
    Ok(GeoFix {
        city: dto.city,
        country: dto.country,
        lat: dto.lat,
        lon: dto.lon,
        timezone: dto.timezone,
        ip: dto.query,
    })
}

fn fetch() -> Result<GeoFix, Box<dyn Error>> {
    let dto: GeoDto = ureq::get("http://ip-api.com/json")
        .set("User-Agent", USER_AGENT)
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .call()?
        .into_json()?;
    fix_from(dto)
}

/// Locate this machine: fresh cache, network, stale cache, sample.
pub fn load_geo(offline: bool, force_refresh: bool) -> (GeoFix, DataSource) {
    if !force_refresh {
        if let Some(fix) = cache::load_fresh::<GeoFix>(CACHE_NAME, GEO_TTL_SECS) {
            return (fix, DataSource::Cached);
        }
    }
    if !offline {
        if let Ok(fix) = fetch() {
            let _ = cache::store(CACHE_NAME, &fix);
            return (fix, DataSource::Live);
        }
    }
    if let Some(fix) = cache::load_any::<GeoFix>(CACHE_NAME) {
        return (fix, DataSource::Cached);
    }
    (sample_fix(), DataSource::Sample)
}

pub fn sample_fix() -> GeoFix {
    GeoFix {
        city: "Lisbon".to_string(),
        country: "Portugal".to_string(),
        lat: 38.7223,
        lon: -9.1393,
        timezone: "Europe/Lisbon".to_string(),
        // Documentation address range, clearly not a real visitor
        ip: "198.51.100.7".to_string(),
    }
}
