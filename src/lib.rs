//! Live password strength meter core
//!
//! This library provides the logic behind a password meter widget: four
//! heuristic checks aggregated into a [`StrengthReport`], a convenience
//! password generator and an immutable [`UiState`] for the shell to thread
//! through its event handlers.
//!
//! # Features
//!
//! - `async` (default): Enables debounced evaluation with cancellation
//!   support, so a newer keystroke supersedes an in-flight evaluation
//! - `tracing`: Enables logging via tracing crate (outcomes only, never the
//!   password text)
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::{evaluate, Verdict};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Abcdefghij1!".to_string().into());
//! let report = evaluate(&password);
//!
//! assert_eq!(report.score, 3);
//! assert_eq!(report.verdict, Verdict::Strong);
//! ```

// Internal modules
mod checks;
mod evaluator;
mod generator;
mod report;
mod state;

// Public API
pub use evaluator::evaluate;
pub use generator::{generate, generate_with, GENERATED_LENGTH};
pub use report::{
    CheckResult, ParseVerdictError, StrengthReport, Verdict, FAIL_FRACTION, PASS_FRACTION,
};
pub use state::UiState;

#[cfg(feature = "async")]
pub use evaluator::evaluate_tx;
