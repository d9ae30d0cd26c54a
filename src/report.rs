//! Report types produced by the evaluator.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Display fraction bound to a progress bar when a check passes.
pub const PASS_FRACTION: f64 = 1.0;

/// Display fraction bound to a progress bar when a check fails.
///
/// A fixed weak indicator, not a continuous score.
pub const FAIL_FRACTION: f64 = 0.2;

/// Outcome of a single heuristic check.
///
/// `passed` feeds the aggregate score; `display` drives the progress bar.
/// The two are kept as independent fields so the sequence check's inverted
/// bar coloring (red bar, marker shown on failure) can be rendered without
/// re-deriving one from the other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckResult {
    pub passed: bool,
    pub display: f64,
}

impl CheckResult {
    /// Builds a result with the fixed pass/fail display mapping.
    pub const fn from_passed(passed: bool) -> Self {
        Self {
            passed,
            display: if passed { PASS_FRACTION } else { FAIL_FRACTION },
        }
    }
}

/// Verdict bucket derived from the aggregate score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Weak,
    Medium,
    Strong,
}

impl Verdict {
    /// Maps a score to its verdict via `labels[min(score, 2)]`.
    ///
    /// A score of 3 lands in the same bucket as 2. The clamp is deliberate:
    /// the top bucket absorbs the fourth point rather than adding a label.
    pub const fn from_score(score: u8) -> Self {
        match score {
            0 => Verdict::Weak,
            1 => Verdict::Medium,
            _ => Verdict::Strong,
        }
    }

    /// The textual label shown next to the strength bars.
    pub const fn label(self) -> &'static str {
        match self {
            Verdict::Weak => "Weak",
            Verdict::Medium => "Medium",
            Verdict::Strong => "Strong",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown verdict label: {0}")]
pub struct ParseVerdictError(String);

impl FromStr for Verdict {
    type Err = ParseVerdictError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Weak" => Ok(Verdict::Weak),
            "Medium" => Ok(Verdict::Medium),
            "Strong" => Ok(Verdict::Strong),
            other => Err(ParseVerdictError(other.to_string())),
        }
    }
}

/// Full evaluation of one password: the four check outcomes, the aggregate
/// score and the verdict bucket.
///
/// The `sequence` result keeps the reference polarity: its bar renders red
/// and its marker appears when the check *fails* (a run was found), while the
/// numeric display mapping matches the other three bars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrengthReport {
    pub length: CheckResult,
    pub character_classes: CheckResult,
    pub repetition: CheckResult,
    pub sequence: CheckResult,
    pub score: u8,
    pub verdict: Verdict,
}

impl StrengthReport {
    /// Aggregates the four check outcomes.
    ///
    /// Every check contributes one point on pass, the repetition check
    /// included. The score saturates at 3: a fourth point cannot change the
    /// verdict (it clamps at 2 anyway), and the score field stays in the
    /// 0..=3 range the report promises.
    pub fn new(
        length: CheckResult,
        character_classes: CheckResult,
        repetition: CheckResult,
        sequence: CheckResult,
    ) -> Self {
        let passed = [length, character_classes, repetition, sequence]
            .iter()
            .filter(|check| check.passed)
            .count() as u8;
        let score = passed.min(3);

        Self {
            length,
            character_classes,
            repetition,
            sequence,
            score,
            verdict: Verdict::from_score(score),
        }
    }
}
