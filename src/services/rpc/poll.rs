//! Polling until a condition holds.

use crate::{config::PollConfig, utils::with_deadline};
use log::debug;
use std::{future::Future, time::Duration};
use thiserror::Error;
use tokio::time::Instant;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PollError<E> {
    #[error("Timed out waiting for {name} after {timeout_ms}ms")]
    Timeout { name: String, timeout_ms: u64 },
    #[error(transparent)]
    Operation(E),
}

/// Calls `func` until it yields `Some`, sleeping `interval` between attempts.
///
/// `func` runs at least once before the first sleep. The deadline is fixed on
/// entry and checked after every attempt. Each attempt may run until the
/// deadline or for one `interval`, whichever is longer, and is cancelled
/// after that. An error from `func` stops polling at once.
pub async fn wait_for<T, E, F, Fut>(
    name: &str,
    mut func: F,
    timeout: Duration,
    interval: Duration,
) -> Result<T, PollError<E>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Option<T>, E>>,
{
    let deadline = Instant::now() + timeout;
    let timed_out = || PollError::Timeout {
        name: name.to_string(),
        timeout_ms: timeout.as_millis() as u64,
    };

    let mut attempts = 0u32;
    loop {
        attempts += 1;
        let budget = deadline
            .saturating_duration_since(Instant::now())
            .max(interval);
        match with_deadline(name, budget, func()).await {
            Ok(Ok(Some(value))) => {
                debug!("{} ready after {} attempt(s)", name, attempts);
                return Ok(value);
            }
            Ok(Ok(None)) => {}
            Ok(Err(err)) => return Err(PollError::Operation(err)),
            Err(_) => return Err(timed_out()),
        }

        if Instant::now() >= deadline {
            return Err(timed_out());
        }
        tokio::time::sleep(interval).await;
    }
}

/// [`wait_for`] with the timing from a [`PollConfig`].
pub async fn wait_for_with_config<T, E, F, Fut>(
    name: &str,
    func: F,
    config: &PollConfig,
) -> Result<T, PollError<E>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Option<T>, E>>,
{
    wait_for(name, func, config.timeout(), config.interval()).await
}

/// [`wait_for`] with the default 10s timeout and 500ms interval.
pub async fn wait_for_default<T, E, F, Fut>(name: &str, func: F) -> Result<T, PollError<E>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Option<T>, E>>,
{
    wait_for_with_config(name, func, &PollConfig::default()).await
}
