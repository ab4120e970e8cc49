use chrono::{DateTime, Utc};

/// "42s ago", "5m ago", "1.2h ago", "3d ago". None for future timestamps
/// or unparsable input.
pub fn time_ago(iso: &str, now: DateTime<Utc>) -> Option<String> {
    let then = parse_iso(iso)?;
    let ms = (now - then).num_milliseconds();
    if ms < 0 {
        return None;
    }
    Some(format_span(ms, "", " ago"))
}

/// "in 42s", "in 5m", "in 1.2h", "in 3d". None for past timestamps or
/// unparsable input.
pub fn time_until(iso: &str, now: DateTime<Utc>) -> Option<String> {
    let then = parse_iso(iso)?;
    let ms = (then - now).num_milliseconds();
    if ms <= 0 {
        return None;
    }
    Some(format_span(ms, "in ", ""))
}

/// Parse an ISO-8601 timestamp, tolerating a missing offset (treated as UTC).
pub fn parse_iso(iso: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(iso) {
        return Some(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|dt| dt.and_utc())
}

fn format_span(ms: i64, prefix: &str, suffix: &str) -> String {
    let body = if ms < 60_000 {
        format!("{}s", round_div(ms, 1_000))
    } else if ms < 3_600_000 {
        format!("{}m", round_div(ms, 60_000))
    } else if ms < 86_400_000 {
        format!("{:.1}h", ms as f64 / 3_600_000.0)
    } else {
        format!("{}d", round_div(ms, 86_400_000))
    };
    format!("{prefix}{body}{suffix}")
}

fn round_div(ms: i64, unit: i64) -> i64 {
    (ms as f64 / unit as f64).round() as i64
}
