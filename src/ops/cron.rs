use regex::Regex;

/// Render a five-field cron expression as a short human phrase, e.g.
/// "Every 15 min, 9 AM–5 PM, Mon–Fri" or "Daily at 2 PM".
///
/// A trailing timezone suffix like " (Asia/Jerusalem)" is stripped first.
/// Returns None for an empty expression; anything with a day-of-month or
/// month constraint, or a shape not covered below, degrades to the generic
/// "Scheduled".
pub fn humanize(expr: &str) -> Option<String> {
    let clean = strip_timezone(expr);
    let clean = clean.trim();
    if clean.is_empty() {
        return None;
    }

    let fields: Vec<&str> = clean.split_whitespace().collect();
    if fields.len() < 5 {
        return Some("Scheduled".to_string());
    }
    let (min, hour, dom, mon, dow) = (fields[0], fields[1], fields[2], fields[3], fields[4]);

    if dom != "*" || mon != "*" {
        return Some("Scheduled".to_string());
    }

    let dow_label = fmt_dow(dow);

    // */N minutes
    if let Some(interval) = min.strip_prefix("*/").and_then(|n| n.parse::<u32>().ok()) {
        let mut parts = vec![format!("Every {} min", interval)];
        if let Some(range) = fmt_hour_range(hour) {
            parts.push(range);
        }
        if let Some(d) = dow_label {
            parts.push(d);
        }
        return Some(parts.join(", "));
    }

    let Ok(min_num) = min.parse::<u32>() else {
        return Some("Scheduled".to_string());
    };

    // Fixed hour, e.g. "0 14 * * *"
    if let Ok(h) = hour.parse::<u32>() {
        let time = fmt_time(h, min_num);
        return Some(match dow_label {
            Some(d) => format!("Daily at {}, {}", time, d),
            None => format!("Daily at {}", time),
        });
    }

    // Hour range with fixed minute, e.g. "20 6-22 * * *"
    if let Some((start, end)) = parse_range(hour) {
        let prefix = if min_num == 0 {
            "Hourly".to_string()
        } else {
            format!("Hourly at :{:02}", min_num)
        };
        let mut parts = vec![prefix, format!("{}–{}", fmt_hour(start), fmt_hour(end))];
        if let Some(d) = dow_label {
            parts.push(d);
        }
        return Some(parts.join(", "));
    }

    // Comma-separated hours
    if hour.contains(',') {
        let hours: Vec<u32> = hour.split(',').filter_map(|h| h.parse().ok()).collect();
        if hours.len() != hour.split(',').count() {
            return Some("Scheduled".to_string());
        }
        // More than two evenly-spaced hours reads as an interval
        if hours.len() > 2 {
            let gaps: Vec<i64> = hours.windows(2).map(|w| w[1] as i64 - w[0] as i64).collect();
            if let Some(&first) = gaps.first() {
                if first > 0 && gaps.iter().all(|&g| g == first) {
                    let span = format!(
                        "Every {}h, {}–{}",
                        first,
                        fmt_hour(hours[0]),
                        fmt_hour(hours[hours.len() - 1])
                    );
                    return Some(match dow_label {
                        Some(d) => format!("{}, {}", span, d),
                        None => span,
                    });
                }
            }
        }
        let times: Vec<String> = hours.iter().map(|&h| fmt_time(h, min_num)).collect();
        let list = format!("Daily at {}", times.join(" & "));
        return Some(match dow_label {
            Some(d) => format!("{}, {}", list, d),
            None => list,
        });
    }

    Some("Scheduled".to_string())
}

fn strip_timezone(expr: &str) -> String {
    match Regex::new(r"\s*\([^)]*\)\s*$") {
        Ok(re) => re.replace(expr, "").into_owned(),
        Err(_) => expr.to_string(),
    }
}

fn parse_range(field: &str) -> Option<(u32, u32)> {
    let (start, end) = field.split_once('-')?;
    Some((start.parse().ok()?, end.parse().ok()?))
}

fn fmt_hour_range(field: &str) -> Option<String> {
    let (start, end) = parse_range(field)?;
    Some(format!("{}–{}", fmt_hour(start), fmt_hour(end)))
}

fn fmt_hour(h: u32) -> String {
    match h {
        0 => "12 AM".to_string(),
        12 => "12 PM".to_string(),
        h if h < 12 => format!("{} AM", h),
        h => format!("{} PM", h - 12),
    }
}

fn fmt_time(h: u32, m: u32) -> String {
    let suffix = if h < 12 { "AM" } else { "PM" };
    let display = if h % 12 == 0 { 12 } else { h % 12 };
    if m == 0 {
        format!("{} {}", display, suffix)
    } else {
        format!("{}:{:02} {}", display, m, suffix)
    }
}

fn fmt_dow(dow: &str) -> Option<String> {
    const NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
    if dow == "*" {
        return None;
    }
    if let Some((s, e)) = parse_range(dow) {
        if s <= 9 && e <= 9 && dow.len() == 3 {
            return Some(match (s, e) {
                (0, 4) => "Sun–Thu".to_string(),
                (0, 5) => "Sun–Fri".to_string(),
                (1, 5) => "Mon–Fri".to_string(),
                _ => format!("{}–{}", day_name(s, &NAMES), day_name(e, &NAMES)),
            });
        }
        return None;
    }
    if dow.contains(',') {
        let names: Vec<String> = dow
            .split(',')
            .map(|d| match d.parse::<u32>() {
                Ok(n) => day_name(n, &NAMES),
                Err(_) => d.to_string(),
            })
            .collect();
        return Some(names.join(", "));
    }
    if let Ok(n) = dow.parse::<u32>() {
        if dow.len() == 1 {
            return Some(day_name(n, &NAMES));
        }
    }
    None
}

fn day_name(n: u32, names: &[&str; 7]) -> String {
    names
        .get(n as usize)
        .map(|s| s.to_string())
        .unwrap_or_else(|| n.to_string())
}
