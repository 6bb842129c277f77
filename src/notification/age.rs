//! Issue age as whole days.

use chrono::{DateTime, Utc};

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Render the age of something created at `created`, as seen at `now`.
///
/// Elapsed hours are divided by 24 and rounded half away from zero, so 12 hours
/// is already "1 day".
pub fn format_age(created: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let hours = (now - created).num_milliseconds() as f64 / MILLIS_PER_HOUR;
    let days = (hours / 24.0).round() as i64;

    if days == 1 { format!("{days} day") } else { format!("{days} days") }
}

// Tests.

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap()
    }

    fn age_after(elapsed: Duration) -> String {
        format_age(now() - elapsed, now())
    }

    #[test]
    fn test_whole_days() {
        assert_eq!(age_after(Duration::hours(24)), "1 day");
        assert_eq!(age_after(Duration::days(2)), "2 days");
        assert_eq!(age_after(Duration::days(10)), "10 days");
    }

    #[test]
    fn test_rounds_half_up() {
        assert_eq!(age_after(Duration::hours(36)), "2 days");
        assert_eq!(age_after(Duration::hours(47)), "2 days");
        assert_eq!(age_after(Duration::hours(60)), "3 days");
    }

    #[test]
    fn test_half_day_boundary() {
        assert_eq!(age_after(Duration::hours(12)), "1 day");
        assert_eq!(age_after(Duration::minutes(11 * 60 + 54)), "0 days");
    }

    #[test]
    fn test_brand_new() {
        assert_eq!(age_after(Duration::zero()), "0 days");
        assert_eq!(age_after(Duration::minutes(5)), "0 days");
    }

    #[test]
    fn test_fixed_now_is_stable() {
        let created = now() - Duration::hours(30);

        assert_eq!(format_age(created, now()), format_age(created, now()));
    }
}
