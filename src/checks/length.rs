//! Length check - requires a minimum character count.

use crate::report::CheckResult;

const MIN_LENGTH: usize = 12;

/// Passes when the password holds at least 12 characters.
///
/// Counts characters, not bytes, so multi-byte input is not penalized.
pub fn length_check(password: &str) -> CheckResult {
    CheckResult::from_passed(password.chars().count() >= MIN_LENGTH)
}
