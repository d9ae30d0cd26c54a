//! Strength evaluator - runs the four checks and aggregates the report.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::checks::{character_class_check, length_check, repetition_check, sequence_check};
use crate::report::StrengthReport;

/// Delay between a keystroke and the evaluation it triggers (async only).
#[cfg(feature = "async")]
const DEBOUNCE: Duration = Duration::from_millis(300);

/// Evaluates password strength and returns a detailed report.
///
/// Leading and trailing whitespace is trimmed before the checks run; no
/// other normalization happens. Pure: the report depends only on the input
/// string, and every input (the empty string included) yields a defined
/// report.
///
/// Each of the four checks adds one point to the score on pass, the
/// repetition check included; the score saturates at 3.
pub fn evaluate(password: &SecretString) -> StrengthReport {
    let pwd = password.expose_secret().trim();

    let report = StrengthReport::new(
        length_check(pwd),
        character_class_check(pwd),
        repetition_check(pwd),
        sequence_check(pwd),
    );

    #[cfg(feature = "tracing")]
    tracing::debug!(score = report.score, verdict = %report.verdict, "password evaluated");

    report
}

/// Async version that debounces one keystroke interval, then sends the
/// report via channel.
///
/// Cancel the token to drop an in-flight evaluation when a newer keystroke
/// supersedes it; nothing is sent in that case.
#[cfg(feature = "async")]
pub async fn evaluate_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthReport>,
) {
    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation cancelled before it started");
            return;
        }
        _ = tokio::time::sleep(DEBOUNCE) => {}
    }

    let report = evaluate(password);

    if let Err(e) = tx.send(report).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send strength report: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}
