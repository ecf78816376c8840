//! Client-side business rules for registration and profile updates.
//!
//! These checks run before any request is issued. They are advisory: the
//! backend remains authoritative, the client applies them to avoid round
//! trips that are certain to fail.

use chrono::{DateTime, Datelike, NaiveDate};
use thiserror::Error;

/// Minimum age accepted for a profile update.
pub const MIN_PROFILE_AGE: i32 = 20;

/// Why a profile edit was rejected before reaching the network.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileRuleError {
    /// The edited date of birth could not be read as a calendar date.
    #[error("Invalid date of birth")]
    UnparseableDate,

    /// Computed age is below [`MIN_PROFILE_AGE`].
    #[error("Ineligible age. You must be at least 20 years old.")]
    UnderAge {
        /// Age computed at submit time.
        age: i32,
    },
}

/// Whole years between `date_of_birth` and `today`, by calendar
/// year/month/day subtraction rather than elapsed-days division. Someone
/// whose birthday is tomorrow has not had it yet this year.
#[must_use]
pub fn age_on(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - date_of_birth.year();
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }
    age
}

/// Read a backend date value as a calendar date.
///
/// Accepts bare `YYYY-MM-DD` strings and RFC 3339 timestamps, which is what
/// the backend serves depending on how the record was written.
#[must_use]
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok().or_else(|| {
        DateTime::parse_from_rfc3339(trimmed)
            .ok()
            .map(|timestamp| timestamp.date_naive())
    })
}

/// Normalize a date-of-birth value to the `YYYY-MM-DD` form used for
/// display and editing. Returns `None` when the value is unreadable.
#[must_use]
pub fn normalize_date_of_birth(raw: &str) -> Option<String> {
    parse_calendar_date(raw).map(|date| date.format("%Y-%m-%d").to_string())
}

/// Gate a profile update on the edited date of birth.
///
/// An empty value passes; the backend treats the field as optional. A
/// non-empty value must parse and must yield an age of at least
/// [`MIN_PROFILE_AGE`] as of `today`.
///
/// # Errors
///
/// [`ProfileRuleError::UnparseableDate`] when a non-empty value is not a
/// calendar date, [`ProfileRuleError::UnderAge`] when the computed age is
/// below the threshold.
pub fn check_profile_update(date_of_birth: &str, today: NaiveDate) -> Result<(), ProfileRuleError> {
    let trimmed = date_of_birth.trim();
    if trimmed.is_empty() {
        return Ok(());
    }
    let date_of_birth =
        parse_calendar_date(trimmed).ok_or(ProfileRuleError::UnparseableDate)?;
    let age = age_on(date_of_birth, today);
    if age < MIN_PROFILE_AGE {
        return Err(ProfileRuleError::UnderAge { age });
    }
    Ok(())
}

/// Local check run before any registration request is sent.
#[must_use]
pub fn passwords_match(password: &str, confirmation: &str) -> bool {
    password == confirmation
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn age_counts_a_birthday_not_yet_reached_this_year() {
        // Birthday is tomorrow: still 19.
        assert_eq!(age_on(date(2004, 6, 16), date(2024, 6, 15)), 19);
    }

    #[test]
    fn age_counts_a_birthday_falling_today() {
        assert_eq!(age_on(date(2004, 6, 15), date(2024, 6, 15)), 20);
    }

    #[test]
    fn age_across_a_month_boundary() {
        assert_eq!(age_on(date(2000, 12, 31), date(2024, 1, 1)), 23);
        assert_eq!(age_on(date(2000, 1, 1), date(2024, 12, 31)), 24);
    }

    #[test]
    fn update_rejected_below_threshold() {
        let today = date(2024, 6, 15);
        assert_eq!(
            check_profile_update("2004-06-16", today),
            Err(ProfileRuleError::UnderAge { age: 19 })
        );
    }

    #[test]
    fn update_allowed_at_threshold() {
        let today = date(2024, 6, 15);
        assert_eq!(check_profile_update("2004-06-15", today), Ok(()));
    }

    #[test]
    fn update_allowed_with_empty_date() {
        let today = date(2024, 6, 15);
        assert_eq!(check_profile_update("", today), Ok(()));
        assert_eq!(check_profile_update("   ", today), Ok(()));
    }

    #[test]
    fn update_rejected_with_unreadable_date() {
        let today = date(2024, 6, 15);
        assert_eq!(
            check_profile_update("yesterday", today),
            Err(ProfileRuleError::UnparseableDate)
        );
    }

    #[test]
    fn under_age_message_matches_what_the_dialog_shows() {
        let error = ProfileRuleError::UnderAge { age: 19 };
        assert_eq!(
            error.to_string(),
            "Ineligible age. You must be at least 20 years old."
        );
    }

    #[test]
    fn bare_dates_normalize_unchanged() {
        assert_eq!(
            normalize_date_of_birth("2000-01-31").as_deref(),
            Some("2000-01-31")
        );
    }

    #[test]
    fn timestamps_normalize_to_their_calendar_date() {
        assert_eq!(
            normalize_date_of_birth("1999-04-02T00:00:00.000Z").as_deref(),
            Some("1999-04-02")
        );
    }

    #[test]
    fn unreadable_dates_do_not_normalize() {
        assert_eq!(normalize_date_of_birth("Starts Immediately"), None);
        assert_eq!(normalize_date_of_birth(""), None);
    }

    #[test]
    fn matching_passwords_pass() {
        assert!(passwords_match("hunter2hunter2", "hunter2hunter2"));
    }

    #[test]
    fn mismatched_passwords_fail() {
        assert!(!passwords_match("hunter2hunter2", "hunter2hunter3"));
    }
}
