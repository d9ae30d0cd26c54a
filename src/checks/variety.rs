//! Character-class check - requires uppercase, lowercase, digit and symbol.

use crate::report::CheckResult;

/// Symbols accepted by the character-class check.
///
/// A fixed table; symbols outside it (space, `-`, `[`, ...) do not count.
const SYMBOLS: &str = "!@#$%^&*()_+";

/// Passes when the password contains at least one ASCII uppercase letter,
/// one ASCII lowercase letter, one decimal digit and one symbol from the
/// fixed set. All four classes are required at once.
pub fn character_class_check(password: &str) -> CheckResult {
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| SYMBOLS.contains(c));

    CheckResult::from_passed(has_upper && has_lower && has_digit && has_symbol)
}
