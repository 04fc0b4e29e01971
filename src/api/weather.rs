//! Current conditions from the Open-Meteo forecast API.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::time::Duration;

use crate::api::{cache, DataSource};
use crate::constants::{HTTP_TIMEOUT_SECS, USER_AGENT, WEATHER_TTL_SECS};

const CACHE_NAME: &str = "weather";

/// Current conditions at the dashboard location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    pub temperature_c: f64,
    pub windspeed_kmh: f64,
    /// WMO weather interpretation code.
    pub code: u8,
    pub is_day: bool,
}

#[derive(Debug, Deserialize)]
struct ForecastDto {
    current_weather: CurrentWeatherDto,
}

#[derive(Debug, Deserialize)]
struct CurrentWeatherDto {
    temperature: f64,
    windspeed: f64,
    weathercode: u8,
    #[serde(default)]
    is_day: u8,
}

impl From<CurrentWeatherDto> for WeatherReport {
    fn from(dto: CurrentWeatherDto) -> Self {
        Self {
            temperature_c: dto.temperature,
            windspeed_kmh: dto.windspeed,
            code: dto.weathercode,
            is_day: dto.is_day != 0,
        }
    }
}

/// Human label for a WMO weather code.
pub fn describe(code: u8) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mostly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 | 48 => "Fog",
        51..=57 => "Drizzle",
        61..=67 => "Rain",
        71..=77 => "Snow",
        80..=82 => "Rain showers",
        85 | 86 => "Snow showers",
        95..=99 => "Thunderstorm",
        _ => "Unknown conditions",
    }
}

/// Single-cell glyph for a WMO weather code.
pub fn glyph(code: u8, is_day: bool) -> char {
    match code {
        0 | 1 => {
            if is_day {
                '☀'
            } else {
                '☾'
            }
        }
        2 => '⛅',
        3 => '☁',
        45 | 48 => '≡',
        51..=67 | 80..=82 => '☂',
        71..=77 | 85 | 86 => '❄',
        95..=99 => '⚡',
        _ => '?',
    }
}

fn fetch(lat: f64, lon: f64) -> Result<WeatherReport, Box<dyn Error>> {
    let url = format!(
        "https://api.open-meteo.com/v1/forecast?latitude={lat:.4}&longitude={lon:.4}&current_weather=true"
    );
    let dto: ForecastDto = ureq::get(&url)
        .set("User-Agent", USER_AGENT)
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .call()?
        .into_json()?;
    Ok(dto.current_weather.into())
}

/// Load current conditions for the given coordinates.
pub fn load_weather(lat: f64, lon: f64, offline: bool, force_refresh: bool) -> (WeatherReport, DataSource) {
    if !force_refresh {
        if let Some(report) = cache::load_fresh::<WeatherReport>(CACHE_NAME, WEATHER_TTL_SECS) {
            return (report, DataSource::Cached);
        }
    }
    if !offline {
        if let Ok(report) = fetch(lat, lon) {
            let _ = cache::store(CACHE_NAME, &report);
            return (report, DataSource::Live);
        }
    }
    if let Some(report) = cache::load_any::<WeatherReport>(CACHE_NAME) {
        return (report, DataSource::Cached);
    }
    (sample_report(), DataSource::Sample)
}

pub fn sample_report() -> WeatherReport {
    WeatherReport {
        temperature_c: 18.5,
        windspeed_kmh: 12.0,
        code: 1,
        is_day: true,
    }
}
