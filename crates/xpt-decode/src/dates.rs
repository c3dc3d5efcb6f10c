//! SAS date conversion.
//!
//! SAS date values are day offsets from the epoch 1960-01-01. Only
//! DATE-formatted numerics are interpreted this way, and only at display
//! time.

use chrono::{Duration, NaiveDate};

/// Convert a SAS day-offset value to a calendar date.
///
/// Fractional offsets are floored. Returns `None` when the offset lands
/// outside chrono's representable range.
#[must_use]
pub fn as_date(days: f64) -> Option<NaiveDate> {
    let epoch = NaiveDate::from_ymd_opt(1960, 1, 1)?;
    let delta = Duration::try_days(days.floor() as i64)?;
    epoch.checked_add_signed(delta)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch() {
        assert_eq!(as_date(0.0), NaiveDate::from_ymd_opt(1960, 1, 1));
        assert_eq!(as_date(1.0), NaiveDate::from_ymd_opt(1960, 1, 2));
    }

    #[test]
    fn test_negative_offset() {
        assert_eq!(as_date(-1.0), NaiveDate::from_ymd_opt(1959, 12, 31));
    }

    #[test]
    fn test_fractional_floors() {
        assert_eq!(as_date(1.9), NaiveDate::from_ymd_opt(1960, 1, 2));
    }

    #[test]
    fn test_out_of_range_is_none() {
        assert_eq!(as_date(1e300), None);
        assert_eq!(as_date(-1e300), None);
    }

    #[test]
    fn test_known_date() {
        // 22645 days after the epoch
        assert_eq!(as_date(22645.0), NaiveDate::from_ymd_opt(2021, 12, 31));
    }
}
