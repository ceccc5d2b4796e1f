//! Operations bounded by a deadline.
//!
//! The wrapped future is dropped when the deadline passes, which cancels any
//! in-flight work it owns (an HTTP request, an RPC call).

use std::{future::Future, time::Duration};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{operation} timed out after {timeout_ms}ms")]
pub struct DeadlineError {
    pub operation: String,
    pub timeout_ms: u64,
}

/// Runs `future` to completion or until `timeout` elapses.
///
/// The future is polled at least once, so an already-ready operation succeeds
/// even with a zero timeout.
pub async fn with_deadline<F>(
    operation: &str,
    timeout: Duration,
    future: F,
) -> Result<F::Output, DeadlineError>
where
    F: Future,
{
    tokio::time::timeout(timeout, future)
        .await
        .map_err(|_| DeadlineError {
            operation: operation.to_string(),
            timeout_ms: timeout.as_millis() as u64,
        })
}
