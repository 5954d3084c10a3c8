//! Small text formatting helpers shared by the views

use chrono::Datelike;

use crate::api::Time;

const MINUTES_IN_DAY: i64 = 24 * 60;
const MINUTES_IN_MONTH: i64 = 30 * MINUTES_IN_DAY;

/// First letter of every word, eg. "Sarah Chen" -> "SC"
pub fn initials(name: &str) -> String {
    name.split(' ')
        .filter_map(|w| w.chars().next())
        .collect()
}

/// Approximate distance between `then` and `now`, in words, eg. "about 2 hours ago"
pub fn time_ago(then: Time, now: Time) -> String {
    let seconds = (now - then).num_seconds();
    let distance = match seconds < 0 {
        true => distance_in_words(now, then),
        false => distance_in_words(then, now),
    };
    if seconds < 0 {
        format!("in {}", distance)
    } else {
        format!("{} ago", distance)
    }
}

fn plural(n: i64, unit: &str) -> String {
    match n {
        1 => format!("1 {}", unit),
        n => format!("{} {}s", n, unit),
    }
}

/// Whole calendar months from `earlier` to `later`
fn months_between(earlier: Time, later: Time) -> i64 {
    let months = i64::from(later.year() - earlier.year()) * 12 + i64::from(later.month())
        - i64::from(earlier.month());
    if (later.day(), later.time()) < (earlier.day(), earlier.time()) {
        months - 1
    } else {
        months
    }
}

fn distance_in_words(earlier: Time, later: Time) -> String {
    let seconds = (later - earlier).num_seconds();
    let minutes = (seconds as f64 / 60.).round() as i64;
    if seconds < 30 {
        String::from("less than a minute")
    } else if minutes < 45 {
        plural(minutes.max(1), "minute")
    } else if minutes < 90 {
        String::from("about 1 hour")
    } else if minutes < MINUTES_IN_DAY {
        format!("about {}", plural((minutes as f64 / 60.).round() as i64, "hour"))
    } else if minutes < 42 * 60 {
        String::from("1 day")
    } else if minutes < MINUTES_IN_MONTH {
        plural((minutes as f64 / MINUTES_IN_DAY as f64).round() as i64, "day")
    } else if minutes < 45 * MINUTES_IN_DAY {
        String::from("about 1 month")
    } else if minutes < 60 * MINUTES_IN_DAY {
        String::from("about 2 months")
    } else {
        let months = months_between(earlier, later);
        if months < 12 {
            let nearest = (minutes as f64 / MINUTES_IN_MONTH as f64).round() as i64;
            return plural(nearest, "month");
        }
        let (years, rest) = (months / 12, months % 12);
        match rest {
            0..=2 => format!("about {}", plural(years, "year")),
            3..=8 => format!("over {}", plural(years, "year")),
            _ => format!("almost {}", plural(years + 1, "year")),
        }
    }
}

/// Groups digits by thousands, eg. 12345 -> "12,345"
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut res = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            res.push(',');
        }
        res.push(c);
    }
    res
}

pub fn reply_label(n: usize) -> String {
    match n {
        1 => String::from("1 reply"),
        n => format!("{} replies", n),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;

    #[test]
    fn initials_of_names() {
        assert_eq!(initials("Sarah Chen"), "SC");
        assert_eq!(initials("You"), "Y");
        assert_eq!(initials("Ana  Lima"), "AL");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn time_ago_in_words() {
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();
        let ago = |d: Duration| time_ago(now - d, now);
        assert_eq!(ago(Duration::seconds(5)), "less than a minute ago");
        assert_eq!(ago(Duration::seconds(50)), "1 minute ago");
        assert_eq!(ago(Duration::minutes(10)), "10 minutes ago");
        assert_eq!(ago(Duration::minutes(60)), "about 1 hour ago");
        assert_eq!(ago(Duration::hours(5)), "about 5 hours ago");
        assert_eq!(ago(Duration::hours(30)), "1 day ago");
        assert_eq!(ago(Duration::days(4)), "4 days ago");
        assert_eq!(ago(Duration::days(35)), "about 1 month ago");
        assert_eq!(ago(Duration::days(50)), "about 2 months ago");
        assert_eq!(ago(Duration::days(150)), "5 months ago");
        // one day short of a calendar year
        assert_eq!(ago(Duration::days(364)), "12 months ago");
        assert_eq!(ago(Duration::days(370)), "about 1 year ago");
        assert_eq!(ago(Duration::days(365 + 180)), "over 1 year ago");
        assert_eq!(ago(Duration::days(365 + 320)), "almost 2 years ago");
        assert_eq!(time_ago(now + Duration::days(2), now), "in 2 days");
    }

    #[test]
    fn years_count_calendar_months() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
        let then = Utc.with_ymd_and_hms(2024, 12, 2, 0, 0, 0).unwrap();
        assert_eq!(months_between(then, now), 14);
        assert_eq!(time_ago(then, now), "about 1 year ago");
        let then = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        assert_eq!(months_between(then, now), 24);
        assert_eq!(time_ago(then, now), "about 2 years ago");
        assert_eq!(time_ago(now, then), "in about 2 years");
    }

    #[test]
    fn thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(2847), "2,847");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn reply_labels() {
        assert_eq!(reply_label(1), "1 reply");
        assert_eq!(reply_label(3), "3 replies");
    }
}
