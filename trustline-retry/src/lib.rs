#![warn(missing_docs)]

//! Retry, backoff, and mirror-rotation drivers over [`trustline`] errors.
//!
//! This crate builds on top of [`trustline`] to provide the
//! consumer-side recovery logic the taxonomy deliberately leaves to
//! callers:
//! - [`retry`]: bounded exponential backoff for time-budget failures
//! - [`try_mirrors`]: rotation across mirrors, aggregating every
//!   per-mirror failure into [`Error::NoWorkingMirror`]
//!
//! Both drivers are generic over caller-supplied async operations; they
//! contain no network code of their own and decide what to do purely
//! from each error's [`Recovery`] classification.
//!
//! # Example
//!
//! ```no_run
//! use trustline::Error;
//! use trustline_retry::{retry, try_mirrors, BackoffPolicy};
//!
//! # async fn fetch_metadata(mirror: &str) -> Result<Vec<u8>, Error> { todo!() }
//! # async fn example() -> Result<(), Error> {
//! let policy = BackoffPolicy::default();
//! let mirrors = vec![
//!     "https://updates.example".to_owned(),
//!     "https://mirror.example".to_owned(),
//! ];
//!
//! let metadata = try_mirrors(&mirrors, |mirror| {
//!     let policy = policy.clone();
//!     async move { retry(&policy, || fetch_metadata(&mirror)).await }
//! })
//! .await?;
//! # Ok(())
//! # }
//! ```

mod policy;

pub use policy::BackoffPolicy;

use std::future::Future;

use tracing::{debug, warn};
use trustline::{Error, MirrorFailure, Recovery};

/// Runs an operation, retrying time-budget failures with backoff.
///
/// Only errors classified [`Recovery::RetryBackoff`] are retried, up to
/// `policy.max_attempts` total attempts. Fatal errors and errors that
/// call for an alternate source are returned immediately; switching
/// sources is [`try_mirrors`]' job. On exhaustion the last error is
/// returned unchanged.
pub async fn retry<T, F, Fut>(policy: &BackoffPolicy, mut op: F) -> Result<T, Error>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, Error>>,
{
    let mut attempt: u32 = 1;
    loop {
        match op().await {
            Ok(value) => {
                if attempt > 1 {
                    debug!(attempt, "operation succeeded after retry");
                }
                return Ok(value);
            }
            Err(err) => {
                if err.recovery() != Recovery::RetryBackoff || attempt >= policy.max_attempts {
                    return Err(err);
                }
                let delay = policy.delay_for(attempt);
                warn!(
                    kind = %err.kind(),
                    error = %err,
                    attempt,
                    ?delay,
                    "retrying after backoff"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
        }
    }
}

/// Runs an operation against each mirror in order, returning the first
/// success.
///
/// Every mirror is tried regardless of how the previous one failed; a
/// mirror serving bad data says nothing about the next one. If all
/// mirrors fail, the result is [`Error::NoWorkingMirror`] carrying one
/// [`MirrorFailure`] per mirror in attempt order, so nothing about any
/// failure is lost.
pub async fn try_mirrors<T, F, Fut>(mirrors: &[String], mut op: F) -> Result<T, Error>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<T, Error>>,
{
    let mut failures = Vec::with_capacity(mirrors.len());
    for mirror in mirrors {
        match op(mirror.clone()).await {
            Ok(value) => {
                debug!(mirror = %mirror, "mirror supplied trusted data");
                return Ok(value);
            }
            Err(err) => {
                warn!(mirror = %mirror, kind = %err.kind(), error = %err, "mirror failed");
                failures.push(MirrorFailure::new(mirror.clone(), err));
            }
        }
    }
    Err(Error::NoWorkingMirror { failures })
}
