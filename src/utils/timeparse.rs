use std::sync::LazyLock;
use std::time::Duration as StdDuration;

use chrono::{Duration, NaiveDateTime, Timelike};
use regex::Regex;

/// Clock-time fragment: `7pm`, `7:15 pm`, or a bare `19:15`. The am/pm
/// branch is listed first so `7:15pm` never half-matches as a bare `7:15`.
static TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b\d{1,2}(:\d{2})?\s*(am|pm)\b|\b\d{1,2}:\d{2}\b").unwrap()
});

/// Resolve a natural-language time fragment against a reference instant.
///
/// Returns `None` when the text carries no recognizable time expression or
/// the numeric parts are out of range; callers treat that as a normal
/// outcome, not an error.
///
/// "tonight" past 19:00 resolves to `now + 1h`, not the next evening.
pub fn parse_when(text: &str, now: NaiveDateTime) -> Option<NaiveDateTime> {
    let low = text.to_lowercase();
    if low.contains("tonight") {
        let target = now.date().and_hms_opt(19, 0, 0)?;
        return Some(if now.hour() < 19 {
            target
        } else {
            now + Duration::hours(1)
        });
    }

    let m = TIME_RE.find(text)?;
    let raw: String = m
        .as_str()
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    let (clock, meridiem) = if let Some(stripped) = raw.strip_suffix("am") {
        (stripped, Some(false))
    } else if let Some(stripped) = raw.strip_suffix("pm") {
        (stripped, Some(true))
    } else {
        (raw.as_str(), None)
    };

    let (hh, mm) = match clock.split_once(':') {
        Some((h, m)) => (h, m),
        None => (clock, "00"),
    };
    let mut hour: u32 = hh.parse().ok()?;
    let minute: u32 = mm.parse().ok()?;
    if let Some(pm) = meridiem {
        hour %= 12;
        if pm {
            hour += 12;
        }
    }

    // Candidate on the reference date; a time already in the past means the
    // speaker's next occurrence, one day ahead.
    let candidate = now.date().and_hms_opt(hour, minute, 0)?;
    Some(if candidate >= now {
        candidate
    } else {
        candidate + Duration::days(1)
    })
}

/// Parse a human-friendly interval like `30s`, `5m`, `2h` into a duration.
/// A missing unit means seconds; an unrecognized unit falls back to seconds.
pub fn parse_duration(text: &str) -> anyhow::Result<StdDuration> {
    let t: String = text
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    let split = t
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(t.len());
    let (num, unit) = t.split_at(split);
    anyhow::ensure!(!num.is_empty(), "invalid duration: {text:?}");
    let n: u64 = num.parse()?;
    let mult = match unit {
        "" | "s" | "sec" | "secs" | "seconds" => 1,
        "m" | "min" | "mins" | "minutes" => 60,
        "h" | "hr" | "hrs" | "hour" | "hours" => 3600,
        _ => 1,
    };
    Ok(StdDuration::from_secs(n * mult))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 16)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn test_tonight_before_seven_pm() {
        let now = at(14, 30);
        assert_eq!(parse_when("line it up tonight", now), Some(at(19, 0)));
    }

    #[test]
    fn test_tonight_after_seven_pm_rolls_one_hour() {
        let now = at(21, 45);
        assert_eq!(parse_when("tonight please", now), Some(at(22, 45)));
    }

    #[test]
    fn test_tonight_exactly_seven_pm_rolls_one_hour() {
        let now = at(19, 0);
        assert_eq!(parse_when("tonight", now), Some(at(20, 0)));
    }

    #[test]
    fn test_pm_time_later_today() {
        let now = at(18, 0);
        assert_eq!(parse_when("schedule a post for 7:15pm", now), Some(at(19, 15)));
    }

    #[test]
    fn test_pm_time_already_past_rolls_to_tomorrow() {
        let now = at(20, 0);
        let expected = NaiveDate::from_ymd_opt(2025, 6, 17)
            .unwrap()
            .and_hms_opt(19, 15, 0)
            .unwrap();
        assert_eq!(parse_when("schedule a post for 7:15pm", now), Some(expected));
    }

    #[test]
    fn test_hour_only_with_meridiem() {
        let now = at(8, 0);
        assert_eq!(parse_when("post at 7pm", now), Some(at(19, 0)));
        assert_eq!(parse_when("post at 9am", now), Some(at(9, 0)));
    }

    #[test]
    fn test_twelve_am_and_pm() {
        let now = at(8, 0);
        assert_eq!(parse_when("12pm sharp", now), Some(at(12, 0)));
        // 12am is midnight, already past an 08:00 reference
        let midnight_tomorrow = NaiveDate::from_ymd_opt(2025, 6, 17)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(parse_when("12am works", now), Some(midnight_tomorrow));
    }

    #[test]
    fn test_whitespace_before_meridiem() {
        let now = at(8, 0);
        assert_eq!(parse_when("make it 7 pm", now), Some(at(19, 0)));
    }

    #[test]
    fn test_mixed_case() {
        let now = at(8, 0);
        assert_eq!(parse_when("7:15PM", now), Some(at(19, 15)));
    }

    #[test]
    fn test_bare_24h_clock_taken_literally() {
        let now = at(8, 0);
        assert_eq!(parse_when("go at 14:30", now), Some(at(14, 30)));
    }

    #[test]
    fn test_bare_clock_in_past_rolls_forward() {
        let now = at(15, 0);
        let expected = NaiveDate::from_ymd_opt(2025, 6, 17)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        assert_eq!(parse_when("14:30", now), Some(expected));
    }

    #[test]
    fn test_first_match_wins() {
        let now = at(8, 0);
        assert_eq!(parse_when("either 9am or 10am", now), Some(at(9, 0)));
    }

    #[test]
    fn test_out_of_range_hour_is_unresolvable() {
        let now = at(8, 0);
        assert_eq!(parse_when("25:30", now), None);
        assert_eq!(parse_when("14:99", now), None);
    }

    #[test]
    fn test_no_time_expression() {
        let now = at(8, 0);
        assert_eq!(parse_when("what are my metrics", now), None);
        assert_eq!(parse_when("", now), None);
    }

    #[test]
    fn test_parse_duration_units() {
        assert_eq!(parse_duration("30s").unwrap(), StdDuration::from_secs(30));
        assert_eq!(parse_duration("5m").unwrap(), StdDuration::from_secs(300));
        assert_eq!(parse_duration("2h").unwrap(), StdDuration::from_secs(7200));
        assert_eq!(parse_duration("10 mins").unwrap(), StdDuration::from_secs(600));
        assert_eq!(parse_duration("45").unwrap(), StdDuration::from_secs(45));
    }

    #[test]
    fn test_parse_duration_rejects_missing_digits() {
        assert!(parse_duration("fast").is_err());
        assert!(parse_duration("").is_err());
    }
}
