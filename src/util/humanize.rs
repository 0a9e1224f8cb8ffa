//! Human-readable formatting of timestamps and durations.

use chrono::{DateTime, Utc};

/// Formats how long ago `then` happened relative to `now`.
///
/// Coarse buckets in the style of feed UIs: "just now", "5 minutes ago",
/// "3 hours ago", "2 days ago", then months and years. Future timestamps
/// (clock skew) render as "just now".
pub fn natural_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds();

    if seconds < 60 {
        return "just now".to_string();
    }

    let minutes = seconds / 60;
    if minutes < 60 {
        return plural(minutes, "minute");
    }

    let hours = minutes / 60;
    if hours < 24 {
        return plural(hours, "hour");
    }

    let days = hours / 24;
    if days < 30 {
        return plural(days, "day");
    }

    let months = days / 30;
    if months < 12 {
        return plural(months, "month");
    }

    plural(months / 12, "year")
}

/// Formats a flight duration in seconds as "2h 15m" (or "45m" under an hour).
pub fn duration_display(seconds: i64) -> String {
    let total_minutes = seconds.max(0) / 60;
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    if hours == 0 {
        format!("{}m", minutes)
    } else {
        format!("{}h {}m", hours, minutes)
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::Duration;

    #[test]
    fn recent_timestamps_are_just_now() {
        let now = Utc::now();
        assert_eq!(natural_time(now - Duration::seconds(5), now), "just now");
        assert_eq!(natural_time(now + Duration::seconds(30), now), "just now");
    }

    #[test]
    fn minute_and_hour_buckets() {
        let now = Utc::now();
        assert_eq!(
            natural_time(now - Duration::minutes(1), now),
            "1 minute ago"
        );
        assert_eq!(
            natural_time(now - Duration::minutes(42), now),
            "42 minutes ago"
        );
        assert_eq!(natural_time(now - Duration::hours(3), now), "3 hours ago");
    }

    #[test]
    fn day_month_year_buckets() {
        let now = Utc::now();
        assert_eq!(natural_time(now - Duration::days(2), now), "2 days ago");
        assert_eq!(natural_time(now - Duration::days(65), now), "2 months ago");
        assert_eq!(natural_time(now - Duration::days(800), now), "2 years ago");
    }

    #[test]
    fn durations_render_hours_and_minutes() {
        assert_eq!(duration_display(45 * 60), "45m");
        assert_eq!(duration_display(2 * 3600 + 15 * 60), "2h 15m");
        assert_eq!(duration_display(0), "0m");
        assert_eq!(duration_display(-30), "0m");
    }
}
