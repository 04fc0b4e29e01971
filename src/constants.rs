// Tick and timing
pub const IDLE_POLL_MS: u64 = 50;
pub const ARCADE_POLL_MS: u64 = 16; // ~60 FPS input latency while a game runs
pub const SHOOTER_TICK_MS: u64 = 160;
// Cap on a single wall-clock delta fed to the arcade host. Long stalls
// (suspend, window drag) turn into at most one whole shooter tick of
// catch-up instead of a burst.
pub const MAX_FRAME_DT_MS: u64 = 250;

// Terminal session
pub const MAX_SCROLLBACK_LINES: usize = 400;
pub const MAX_HISTORY_ENTRIES: usize = 50;

// Cache freshness windows (seconds)
pub const PROJECTS_TTL_SECS: i64 = 60 * 60;
pub const GEO_TTL_SECS: i64 = 24 * 60 * 60;
pub const WEATHER_TTL_SECS: i64 = 30 * 60;
pub const RATES_TTL_SECS: i64 = 12 * 60 * 60;

// HTTP
pub const HTTP_TIMEOUT_SECS: u64 = 6;
pub const USER_AGENT: &str = "folio-terminal";
