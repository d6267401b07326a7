/// Recurring-chore date advancement
///
/// When a recurring chore is completed, its due date rolls forward by
/// `interval × pattern-unit` instead of the chore being marked completed,
/// as long as the next occurrence does not pass the recurrence end date.
///
/// Monthly and yearly advancement is calendar-aware: the day of month is
/// preserved where possible and clamped to the last day of shorter months
/// (Jan 31 + 1 month = Feb 28/29).
///
/// # Example
///
/// ```
/// use chorequest_shared::recurrence::{next_due_date, RecurrencePattern};
/// use chrono::{TimeZone, Utc};
///
/// let due = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
/// let next = next_due_date(due, RecurrencePattern::Daily, 3).unwrap();
/// assert_eq!(next, Utc.with_ymd_and_hms(2024, 1, 4, 0, 0, 0).unwrap());
/// ```

use chrono::{DateTime, Duration, Months, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit by which a completed recurring chore's due date advances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecurrencePattern {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl RecurrencePattern {
    /// Storage form, capitalized ("Daily", "Weekly", ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            RecurrencePattern::Daily => "Daily",
            RecurrencePattern::Weekly => "Weekly",
            RecurrencePattern::Monthly => "Monthly",
            RecurrencePattern::Yearly => "Yearly",
        }
    }
}

impl fmt::Display for RecurrencePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecurrencePattern {
    type Err = ();

    /// Case-insensitive parse of user input or the stored form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "daily" => Ok(RecurrencePattern::Daily),
            "weekly" => Ok(RecurrencePattern::Weekly),
            "monthly" => Ok(RecurrencePattern::Monthly),
            "yearly" => Ok(RecurrencePattern::Yearly),
            _ => Err(()),
        }
    }
}

/// Computes the next occurrence of a recurring chore
///
/// Returns `None` when the advanced date is not representable (interval
/// overflow or a date outside chrono's range); callers treat that the same
/// as the recurrence having ended.
pub fn next_due_date(
    current: DateTime<Utc>,
    pattern: RecurrencePattern,
    interval: i32,
) -> Option<DateTime<Utc>> {
    if interval < 1 {
        return None;
    }

    match pattern {
        RecurrencePattern::Daily => current.checked_add_signed(Duration::days(interval as i64)),
        RecurrencePattern::Weekly => current.checked_add_signed(Duration::weeks(interval as i64)),
        RecurrencePattern::Monthly => current.checked_add_months(Months::new(interval as u32)),
        RecurrencePattern::Yearly => {
            let months = (interval as u32).checked_mul(12)?;
            current.checked_add_months(Months::new(months))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_daily_advance() {
        let next = next_due_date(utc(2024, 1, 1), RecurrencePattern::Daily, 3).unwrap();
        assert_eq!(next, utc(2024, 1, 4));
    }

    #[test]
    fn test_weekly_advance() {
        let next = next_due_date(utc(2024, 1, 1), RecurrencePattern::Weekly, 2).unwrap();
        assert_eq!(next, utc(2024, 1, 15));
    }

    #[test]
    fn test_monthly_preserves_calendar_month() {
        let next = next_due_date(utc(2024, 1, 15), RecurrencePattern::Monthly, 1).unwrap();
        assert_eq!(next, utc(2024, 2, 15));
    }

    #[test]
    fn test_monthly_clamps_to_month_end() {
        // Jan 31 + 1 month lands on Feb 29 in a leap year
        let next = next_due_date(utc(2024, 1, 31), RecurrencePattern::Monthly, 1).unwrap();
        assert_eq!(next, utc(2024, 2, 29));

        let next = next_due_date(utc(2023, 1, 31), RecurrencePattern::Monthly, 1).unwrap();
        assert_eq!(next, utc(2023, 2, 28));
    }

    #[test]
    fn test_yearly_advance() {
        let next = next_due_date(utc(2024, 3, 10), RecurrencePattern::Yearly, 2).unwrap();
        assert_eq!(next, utc(2026, 3, 10));
    }

    #[test]
    fn test_yearly_from_leap_day() {
        let next = next_due_date(utc(2024, 2, 29), RecurrencePattern::Yearly, 1).unwrap();
        assert_eq!(next, utc(2025, 2, 28));
    }

    #[test]
    fn test_nonpositive_interval_is_not_computable() {
        assert!(next_due_date(utc(2024, 1, 1), RecurrencePattern::Daily, 0).is_none());
        assert!(next_due_date(utc(2024, 1, 1), RecurrencePattern::Daily, -1).is_none());
    }

    #[test]
    fn test_overflow_is_not_computable() {
        assert!(next_due_date(utc(2024, 1, 1), RecurrencePattern::Yearly, i32::MAX).is_none());
    }

    #[test]
    fn test_pattern_parse_case_insensitive() {
        assert_eq!("DAILY".parse(), Ok(RecurrencePattern::Daily));
        assert_eq!("Weekly".parse(), Ok(RecurrencePattern::Weekly));
        assert_eq!("monthly".parse(), Ok(RecurrencePattern::Monthly));
        assert_eq!("yEaRlY".parse(), Ok(RecurrencePattern::Yearly));
        assert_eq!("hourly".parse::<RecurrencePattern>(), Err(()));
        assert_eq!("".parse::<RecurrencePattern>(), Err(()));
    }

    #[test]
    fn test_pattern_storage_form_is_capitalized() {
        assert_eq!(RecurrencePattern::Daily.as_str(), "Daily");
        assert_eq!(RecurrencePattern::Yearly.to_string(), "Yearly");
    }
}
