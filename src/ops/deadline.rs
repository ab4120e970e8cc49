use chrono::{Datelike, Duration, NaiveDate};
use regex::Regex;

/// Extract a concrete date from free-form deadline text like "by Mar 14" or
/// "EOD jun 2". Takes the first "Mon DD" token found, case-insensitive.
///
/// The year is inferred: the current year unless that puts the date more
/// than 180 days in the past, in which case it rolls to next year. This
/// keeps a "Jan 5" deadline seen in December pointing forward.
///
/// Returns None when no month/day token is present or the day does not
/// exist in that month.
pub fn parse_deadline(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    let re = Regex::new(r"([A-Za-z]{3})\s+(\d{1,2})").ok()?;
    let caps = re.captures(text)?;
    let month = month_number(&caps[1])?;
    let day: u32 = caps[2].parse().ok()?;

    let date = NaiveDate::from_ymd_opt(today.year(), month, day)?;
    if date < today - Duration::days(180) {
        NaiveDate::from_ymd_opt(today.year() + 1, month, day)
    } else {
        Some(date)
    }
}

fn month_number(abbrev: &str) -> Option<u32> {
    match abbrev.to_ascii_lowercase().as_str() {
        "jan" => Some(1),
        "feb" => Some(2),
        "mar" => Some(3),
        "apr" => Some(4),
        "may" => Some(5),
        "jun" => Some(6),
        "jul" => Some(7),
        "aug" => Some(8),
        "sep" => Some(9),
        "oct" => Some(10),
        "nov" => Some(11),
        "dec" => Some(12),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 30).unwrap()
    }

    #[test]
    fn test_parse_basic() {
        assert_eq!(
            parse_deadline("by Mar 14", today()),
            NaiveDate::from_ymd_opt(2026, 3, 14)
        );
        assert_eq!(
            parse_deadline("Sep 2", today()),
            NaiveDate::from_ymd_opt(2026, 9, 2)
        );
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(
            parse_deadline("due OCT 1", today()),
            NaiveDate::from_ymd_opt(2026, 10, 1)
        );
        assert_eq!(
            parse_deadline("eod jun 2", today()),
            NaiveDate::from_ymd_opt(2026, 6, 2)
        );
    }

    #[test]
    fn test_recent_past_stays_this_year() {
        // Jun 2 is within 180 days behind Aug 30, so no rollover.
        assert_eq!(
            parse_deadline("Jun 2", today()),
            NaiveDate::from_ymd_opt(2026, 6, 2)
        );
    }

    #[test]
    fn test_old_date_rolls_to_next_year() {
        // Jan 5 is more than 180 days behind Aug 30.
        assert_eq!(
            parse_deadline("Jan 5", today()),
            NaiveDate::from_ymd_opt(2027, 1, 5)
        );
    }

    #[test]
    fn test_december_sees_january_forward() {
        let december = NaiveDate::from_ymd_opt(2026, 12, 20).unwrap();
        assert_eq!(
            parse_deadline("Jan 5", december),
            NaiveDate::from_ymd_opt(2027, 1, 5)
        );
    }

    #[test]
    fn test_unparsable() {
        assert_eq!(parse_deadline("soon", today()), None);
        assert_eq!(parse_deadline("next week", today()), None);
        assert_eq!(parse_deadline("", today()), None);
    }

    #[test]
    fn test_nonexistent_day() {
        assert_eq!(parse_deadline("Feb 31", today()), None);
    }

    #[test]
    fn test_not_a_month() {
        assert_eq!(parse_deadline("day 14", today()), None);
    }
}
