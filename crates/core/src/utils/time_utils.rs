use chrono::{Datelike, Local, Months, NaiveDate};

/// The user's calendar date, in the local timezone.
///
/// Validation ("date cannot be in the future") and range presets are always
/// evaluated against this date, never against UTC.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parses a backend date value.
///
/// Accepts `YYYY-MM-DD` as well as ISO date-times (`2024-05-01T00:00:00`,
/// `2024-05-01 10:30:00`), taking the calendar date part.
pub fn parse_flexible_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let date_part = trimmed
        .split(|c| c == 'T' || c == ' ')
        .next()
        .unwrap_or(trimmed);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// First day of the month `months_back` months before `date`'s month.
pub fn first_day_of_month_back(date: NaiveDate, months_back: u32) -> Option<NaiveDate> {
    date.with_day(1)?.checked_sub_months(Months::new(months_back))
}

/// Last day of the month that contains `date`.
pub fn last_day_of_month(date: NaiveDate) -> Option<NaiveDate> {
    date.with_day(1)?
        .checked_add_months(Months::new(1))?
        .pred_opt()
}

/// Number of days from `today` until `target`; negative once the target has passed.
pub fn days_until(today: NaiveDate, target: NaiveDate) -> i64 {
    (target - today).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_parse_flexible_date_variants() {
        assert_eq!(parse_flexible_date("2024-05-01"), Some(d(2024, 5, 1)));
        assert_eq!(parse_flexible_date("2024-05-01T00:00:00"), Some(d(2024, 5, 1)));
        assert_eq!(parse_flexible_date("2024-05-01 13:45:00"), Some(d(2024, 5, 1)));
        assert_eq!(parse_flexible_date(""), None);
        assert_eq!(parse_flexible_date("yesterday"), None);
    }

    #[test]
    fn test_month_helpers() {
        assert_eq!(first_day_of_month_back(d(2024, 3, 15), 1), Some(d(2024, 2, 1)));
        assert_eq!(first_day_of_month_back(d(2024, 1, 31), 1), Some(d(2023, 12, 1)));
        assert_eq!(last_day_of_month(d(2024, 2, 10)), Some(d(2024, 2, 29)));
        assert_eq!(last_day_of_month(d(2023, 12, 1)), Some(d(2023, 12, 31)));
    }

    #[test]
    fn test_days_until() {
        assert_eq!(days_until(d(2024, 1, 1), d(2024, 1, 11)), 10);
        assert_eq!(days_until(d(2024, 1, 11), d(2024, 1, 1)), -10);
    }
}
