use chrono::{DateTime, Datelike, Utc};

/// Format a repository timestamp relative to now:
/// - Relative under a week: "just now", "45m ago", "2h ago", "3d ago"
/// - Absolute otherwise: "Jan 15" this year, "Dec 3, 2023" before
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    format_relative_to(timestamp, &Utc::now())
}

pub fn format_relative_to(timestamp: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(*timestamp);

    // clock skew between GitHub and the local machine
    if elapsed.num_seconds() < 60 {
        return "just now".to_string();
    }

    if elapsed.num_days() >= 7 {
        return if timestamp.year() == now.year() {
            timestamp.format("%b %-d").to_string()
        } else {
            timestamp.format("%b %-d, %Y").to_string()
        };
    }

    match (elapsed.num_days(), elapsed.num_hours(), elapsed.num_minutes()) {
        (d, _, _) if d > 0 => format!("{}d ago", d),
        (_, h, _) if h > 0 => format!("{}h ago", h),
        (_, _, m) => format!("{}m ago", m),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_just_now_and_future() {
        assert_eq!(format_relative_to(&(now() - Duration::seconds(30)), &now()), "just now");
        assert_eq!(format_relative_to(&(now() + Duration::minutes(5)), &now()), "just now");
    }

    #[test]
    fn test_minutes_hours_days() {
        assert_eq!(format_relative_to(&(now() - Duration::minutes(45)), &now()), "45m ago");
        assert_eq!(format_relative_to(&(now() - Duration::hours(3)), &now()), "3h ago");
        assert_eq!(format_relative_to(&(now() - Duration::days(6)), &now()), "6d ago");
    }

    #[test]
    fn test_absolute_same_year() {
        let ts = Utc.with_ymd_and_hms(2025, 1, 15, 8, 0, 0).unwrap();
        assert_eq!(format_relative_to(&ts, &now()), "Jan 15");
    }

    #[test]
    fn test_absolute_other_year() {
        let ts = Utc.with_ymd_and_hms(2023, 12, 3, 8, 0, 0).unwrap();
        assert_eq!(format_relative_to(&ts, &now()), "Dec 3, 2023");
    }

    #[test]
    fn test_format_timestamp_uses_current_clock() {
        let recent = Utc::now() - Duration::hours(2);
        assert_eq!(format_timestamp(&recent), "2h ago");
    }
}
