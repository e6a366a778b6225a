//! Run-counter to mirror-index mapping.

use crate::error::PromptError;

/// Wrap an unbounded run counter into the 1-based range `[1, max]`.
///
/// Computes `((run - 1) mod max) + 1` with a Euclidean remainder, so zero and
/// negative counters still land inside the range (`0` maps to `max`).
///
/// Returns [`PromptError::Configuration`] when `max` is zero.
pub fn cyclic_index(run: i64, max: u32) -> Result<u32, PromptError> {
    if max == 0 {
        return Err(PromptError::configuration(
            "cyclic index bound must be at least 1",
        ));
    }
    // i128 so that `i64::MIN - 1` cannot overflow.
    let wrapped = (i128::from(run) - 1).rem_euclid(i128::from(max)) + 1;
    u32::try_from(wrapped)
        .map_err(|_| PromptError::configuration(format!("cyclic index {wrapped} out of range")))
}
