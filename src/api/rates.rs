//! USD exchange rates from the Frankfurter API.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::error::Error;
use std::time::Duration;

use crate::api::{cache, DataSource};
use crate::constants::{HTTP_TIMEOUT_SECS, RATES_TTL_SECS, USER_AGENT};

const CACHE_NAME: &str = "rates";

/// Currencies shown on the dashboard, in display order.
pub const TARGETS: [&str; 6] = ["EUR", "GBP", "JPY", "CHF", "CAD", "AUD"];

/// A dated table of USD exchange rates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateTable {
    pub base: String,
    pub date: String,
    /// `(currency, rate)` pairs in [`TARGETS`] order. Currencies the
    /// provider does not know are simply absent.
    pub rates: Vec<(String, f64)>,
}

#[derive(Debug, Deserialize)]
struct RatesDto {
    base: String,
    date: String,
    rates: HashMap<String, f64>,
}

impl From<RatesDto> for RateTable {
    fn from(dto: RatesDto) -> Self {
        let rates = TARGETS
            .iter()
            .filter_map(|code| dto.rates.get(*code).map(|rate| (code.to_string(), *rate)))
            .collect();
        Self {
            base: dto.base,
            date: dto.date,
            rates,
        }
    }
}

fn fetch() -> Result<RateTable, Box<dyn Error>> {
    let url = format!(
        "https://api.frankfurter.app/latest?from=USD&to={}",
        TARGETS.join(",")
    );
    let dto: RatesDto = ureq::get(&url)
        .set("User-Agent", USER_AGENT)
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .call()?
        .into_json()?;
    Ok(dto.into())
}

/// Load the rate table: fresh cache, network, stale cache, sample.
pub fn load_rates(offline: bool, force_refresh: bool) -> (RateTable, DataSource) {
    if !force_refresh {
        if let Some(table) = cache::load_fresh::<RateTable>(CACHE_NAME, RATES_TTL_SECS) {
            return (table, DataSource::Cached);
        }
    }
    if !offline {
        if let Ok(table) = fetch() {
            let _ = cache::store(CACHE_NAME, &table);
            return (table, DataSource::Live);
        }
    }
    if let Some(table) = cache::load_any::<RateTable>(CACHE_NAME) {
        return (table, DataSource::Cached);
    }
    (sample_table(), DataSource::Sample)
}

pub fn sample_table() -> RateTable {
    RateTable {
        base: "USD".to_string(),
        date: "2025-11-01".to_string(),
        rates: vec![
            ("EUR".to_string(), 0.92),
            ("GBP".to_string(), 0.79),
            ("JPY".to_string(), 148.20),
            ("CHF".to_string(), 0.88),
            ("CAD".to_string(), 1.36),
            ("AUD".to_string(), 1.52),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dto_maps_in_display_order() {
        let raw = r#"{
            "amount": 1.0,
            "base": "USD",
            "date": "2025-06-13",
            "rates": {"AUD": 1.5, "EUR": 0.9, "JPY": 150.0, "GBP": 0.8, "CHF": 0.85, "CAD": 1.3}
        }"#;
        let dto: RatesDto = serde_json::from_str(raw).unwrap();
        let table: RateTable = dto.into();

        let order: Vec<&str> = table.rates.iter().map(|(code, _)| code.as_str()).collect();
        assert_eq!(order, TARGETS.to_vec());
        assert_eq!(table.date, "2025-06-13");
    }

    #[test]
    fn test_unknown_currencies_are_skipped() {
        let raw = r#"{"base": "USD", "date": "2025-06-13", "rates": {"EUR": 0.9}}"#;
        let dto: RatesDto = serde_json::from_str(raw).unwrap();
        let table: RateTable = dto.into();

        assert_eq!(table.rates.len(), 1);
        assert_eq!(table.rates[0].0, "EUR");
    }

    #[test]
    fn test_sample_table_covers_all_targets() {
        let table = sample_table();
        assert_eq!(table.rates.len(), TARGETS.len());
        assert_eq!(table.base, "USD");
    }
}
