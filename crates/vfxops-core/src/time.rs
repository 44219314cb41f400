use chrono::{DateTime, SecondsFormat, Utc};

/// ISO-8601 UTC with microseconds and a `Z` suffix. Fixed width, so string
/// order is chronological order.
pub fn format_utc(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn now_utc_iso() -> String {
    format_utc(Utc::now())
}
