pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Render a timestamp the way article bylines show it.
pub fn format_date(date: &chrono::DateTime<chrono::Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}
