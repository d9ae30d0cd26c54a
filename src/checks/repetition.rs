//! Repetition check - requires enough distinct characters.

use std::collections::HashSet;

use crate::report::CheckResult;

/// Passes when the distinct-character count is strictly greater than 70% of
/// the total character count.
///
/// The empty string fails: 0 > 0 does not hold.
pub fn repetition_check(password: &str) -> CheckResult {
    let total = password.chars().count();
    let distinct: HashSet<char> = password.chars().collect();

    CheckResult::from_passed(distinct.len() as f64 > total as f64 * 0.7)
}
