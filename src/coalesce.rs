//! Picking the first present of two optional values.

use thiserror::Error;

#[cfg(test)]
mod tests;

/// Error returned by [`coalesce`] when both candidate values are absent.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("no value to coalesce: both candidates were None")]
pub struct CoalesceError;

/// Return the first of two optional values that is present.
///
/// `first` wins when both are present. Values are moved out, never cloned,
/// so the function works for non-`Copy` types.
///
/// # Errors
///
/// Returns [`CoalesceError`] if both `first` and `second` are `None`.
///
/// # Examples
///
/// ```
/// use debrief::coalesce;
///
/// assert_eq!(coalesce(Some(1), None), Ok(1));
/// assert_eq!(coalesce(None, Some(2)), Ok(2));
/// assert_eq!(coalesce(Some(1), Some(2)), Ok(1));
/// assert!(coalesce::<i32>(None, None).is_err());
/// ```
pub fn coalesce<T>(first: Option<T>, second: Option<T>) -> Result<T, CoalesceError> {
    first.or(second).ok_or(CoalesceError)
}
