//! Time related utils.

/// The timestamp type used across this crate, UTC only.
pub type DateTime = chrono::DateTime<chrono::Utc>;

/// Return the current time in UTC.
pub fn now() -> DateTime {
    chrono::Utc::now()
}

/// Format a datetime as a scope date like `2023-11-14`.
///
/// Tencent Cloud credential scopes use the dashed form, unlike the compact
/// `20231114` that other vendors use.
pub fn format_date(t: DateTime) -> String {
    t.format("%Y-%m-%d").to_string()
}
