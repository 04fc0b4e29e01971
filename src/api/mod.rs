//! Remote data sources with on-disk caching and offline fallbacks.
//!
//! Every loader here follows the same chain: fresh cache, then the network,
//! then a stale cache, then built-in sample data. Nothing in this module
//! ever panics or blocks the UI thread; callers run loaders on background
//! threads and poll for the result.

pub mod cache;
pub mod geo;
pub mod github;
pub mod quotes;
pub mod rates;
pub mod weather;

/// Where a piece of data actually came from, surfaced in the UI so stale
/// panels are never mistaken for live ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    /// Fetched from the network this session.
    Live,
    /// Served from the on-disk cache.
    Cached,
    /// Built-in sample data, used offline or when everything else failed.
    Sample,
}

impl DataSource {
    pub fn label(&self) -> &'static str {
        match self {
            DataSource::Live => "live",
            DataSource::Cached => "cached",
            DataSource::Sample => "sample",
        }
    }
}
