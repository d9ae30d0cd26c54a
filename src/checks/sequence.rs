//! Sequential-run check - flags a fixed list of 3-character runs.

use crate::report::CheckResult;

/// The exact runs flagged by the check: eight digit triplets and the first
/// eight alphabet triplets. Only these are matched; this is not general
/// consecutive-run detection ("xyz" and "ijk" pass).
const SEQUENTIAL_TRIPLETS: [&str; 16] = [
    "123", "234", "345", "456", "567", "678", "789", "890", // digit runs
    "abc", "bcd", "cde", "def", "efg", "fgh", "ghi", "hij", // alphabet prefix
];

/// Passes when the password contains none of the flagged triplets,
/// case-insensitively.
///
/// This check's pass state means "no run found"; the UI shows its marker on
/// failure rather than on success, the reverse of the other three checks.
pub fn sequence_check(password: &str) -> CheckResult {
    let lowered = password.to_lowercase();
    let found = SEQUENTIAL_TRIPLETS
        .iter()
        .any(|triplet| lowered.contains(triplet));

    CheckResult::from_passed(!found)
}
