//! Ordered-date lookup.
//!
//! `infimum` and `supremum` search a non-decreasing date sequence for the
//! latest date on or before a target, and the earliest date on or after it.
//! The scans stop early (`infimum` at the first date past the target,
//! `supremum` at the first date before it), so they are only meaningful
//! on sorted input; unsorted input is rejected with `InvalidInput`.

use crate::error::{HedgeError, HedgeResult};
use crate::types::Date;

fn ensure_sorted(dates: &[Date]) -> HedgeResult<()> {
    match dates.windows(2).position(|w| w[1] < w[0]) {
        Some(i) => Err(HedgeError::invalid_input(format!(
            "dates must be non-decreasing: {} follows {}",
            dates[i + 1],
            dates[i]
        ))),
        None => Ok(()),
    }
}

/// Index of the latest date `<= target`, or `None` if every date exceeds it.
pub fn infimum_index(dates: &[Date], target: Date) -> HedgeResult<Option<usize>> {
    ensure_sorted(dates)?;

    let mut found = None;
    for (i, date) in dates.iter().enumerate() {
        if *date > target {
            break;
        }
        found = Some(i);
    }
    Ok(found)
}

/// Index of the earliest date `>= target`, or `None` if every date is below it.
pub fn supremum_index(dates: &[Date], target: Date) -> HedgeResult<Option<usize>> {
    ensure_sorted(dates)?;

    let mut found = None;
    for (i, date) in dates.iter().enumerate().rev() {
        if *date < target {
            break;
        }
        found = Some(i);
    }
    Ok(found)
}

/// Latest date `<= target`.
///
/// ```rust
/// use cfhedge_core::lookup::infimum;
/// use cfhedge_core::types::Date;
///
/// let dates = [
///     Date::from_ymd(2023, 3, 31).unwrap(),
///     Date::from_ymd(2023, 6, 30).unwrap(),
/// ];
/// let target = Date::from_ymd(2023, 5, 1).unwrap();
/// assert_eq!(infimum(&dates, target).unwrap(), Some(dates[0]));
/// ```
pub fn infimum(dates: &[Date], target: Date) -> HedgeResult<Option<Date>> {
    Ok(infimum_index(dates, target)?.map(|i| dates[i]))
}

/// Earliest date `>= target`.
pub fn supremum(dates: &[Date], target: Date) -> HedgeResult<Option<Date>> {
    Ok(supremum_index(dates, target)?.map(|i| dates[i]))
}
