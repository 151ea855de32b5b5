/// Number of most recent daily records served to the chart.
pub const HISTORY_LIMIT: u64 = 30;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://fii_data.sqlite?mode=rwc";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

// Placeholder open interest used until a real upstream is configured.
pub const PLACEHOLDER_LONG_CONTRACTS: i64 = 190_000;
pub const PLACEHOLDER_SHORT_CONTRACTS: i64 = 180_000;

pub const OPEN_INTEREST_PATH: &str = "open-interest";
