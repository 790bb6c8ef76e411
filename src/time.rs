use chrono::{DateTime, Utc};

pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// RFC 3339 timestamp → unix millis. `None` if it doesn't parse.
pub fn parse_timestamp_ms(date: &str) -> Option<i64> {
    DateTime::parse_from_rfc3339(date.trim())
        .ok()
        .map(|parsed| parsed.timestamp_millis())
}

/// Signed whole seconds from `now_ms` until `date`, rendered as `"{n}s"`.
///
/// Positive means `date` is in the future. When `negative_default` is given
/// and `date` is already past, that string is returned instead. Missing or
/// unparseable dates render as an empty string.
#[must_use]
pub fn to_time_difference(date: Option<&str>, now_ms: i64, negative_default: Option<&str>) -> String {
    let Some(scheduled_ms) = date.filter(|d| !d.is_empty()).and_then(parse_timestamp_ms) else {
        return String::new();
    };

    let diff_ms = scheduled_ms.saturating_sub(now_ms);
    if diff_ms < 0 {
        if let Some(fallback) = negative_default {
            return fallback.to_string();
        }
    }

    // Half away from zero on the magnitude; a past date keeps its sign even
    // when it rounds to zero.
    let secs = (diff_ms as f64 / 1000.0).round() as i64;
    if diff_ms < 0 && secs == 0 {
        return "-0s".to_string();
    }
    format!("{secs}s")
}
