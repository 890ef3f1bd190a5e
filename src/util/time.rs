use chrono::{DateTime, Utc};

/// Formats how long ago `time` was, relative to the current instant.
///
/// Convenience wrapper over [`relative_time_at`] using `Utc::now()`.
pub fn relative_time(time: Option<DateTime<Utc>>) -> String {
    relative_time_at(time, Utc::now())
}

/// Formats how long ago `time` was, relative to an explicit `now`.
///
/// Labels are coarse on purpose; article lists only need enough precision
/// to scan by eye:
///
/// - under a minute: `"just now"`
/// - under an hour: `"42m ago"`
/// - under a day: `"7h ago"`
/// - under a week: `"3d ago"`
/// - a week or more: a short calendar date such as `"Jan 26, 2026"`
///
/// `None` (no usable timestamp) yields an empty string. Future instants
/// produce a negative difference and fall through the same ladder, reading
/// as `"just now"`.
pub fn relative_time_at(time: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(time) = time else {
        return String::new();
    };
    let secs = (now - time).num_seconds();

    if secs < 60 {
        "just now".to_string()
    } else if secs < 3_600 {
        format!("{}m ago", secs / 60)
    } else if secs < 86_400 {
        format!("{}h ago", secs / 3_600)
    } else if secs < 604_800 {
        format!("{}d ago", secs / 86_400)
    } else {
        time.format("%b %-d, %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn reference_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 9, 20, 0, 0).unwrap()
    }

    #[test]
    fn test_just_now_under_a_minute() {
        let now = reference_now();
        let label = relative_time_at(Some(now - Duration::seconds(30)), now);
        assert_eq!(label, "just now");
    }

    #[test]
    fn test_minutes_under_an_hour() {
        let now = reference_now();
        let label = relative_time_at(Some(now - Duration::minutes(45)), now);
        assert_eq!(label, "45m ago");
    }

    #[test]
    fn test_hours_under_a_day() {
        let now = reference_now();
        let label = relative_time_at(Some(now - Duration::hours(5)), now);
        assert_eq!(label, "5h ago");
    }

    #[test]
    fn test_days_under_a_week() {
        let now = reference_now();
        let label = relative_time_at(Some(now - Duration::days(3)), now);
        assert_eq!(label, "3d ago");
    }

    #[test]
    fn test_calendar_date_at_a_week_and_beyond() {
        let now = reference_now();
        let label = relative_time_at(Some(now - Duration::days(14)), now);
        assert!(!label.contains("ago"), "expected a date, got: {label}");
        assert!(label.contains("2026"));
    }

    #[test]
    fn test_threshold_boundaries() {
        let now = reference_now();
        assert_eq!(
            relative_time_at(Some(now - Duration::seconds(59)), now),
            "just now"
        );
        assert_eq!(
            relative_time_at(Some(now - Duration::seconds(60)), now),
            "1m ago"
        );
        assert_eq!(
            relative_time_at(Some(now - Duration::seconds(3_600)), now),
            "1h ago"
        );
        assert_eq!(
            relative_time_at(Some(now - Duration::seconds(86_400)), now),
            "1d ago"
        );
    }

    #[test]
    fn test_missing_time_is_empty() {
        assert_eq!(relative_time_at(None, reference_now()), "");
    }

    #[test]
    fn test_future_time_reads_just_now() {
        let now = reference_now();
        let label = relative_time_at(Some(now + Duration::hours(2)), now);
        assert_eq!(label, "just now");
    }
}
