//! Retry-until-success primitive.
//!
//! The controller under test reconciles asynchronously, so there is a
//! window between mutating cluster state and the derived objects appearing
//! or disappearing. A [`RetryPolicy`] bounds how long a scenario tolerates
//! that window: a probe is re-run at a constant interval until it succeeds
//! or the attempt budget runs out.

use std::{future::Future, time::Duration};

use snafu::{ensure, Snafu};
use tracing::debug;

/// Invalid retry configuration, raised at construction before any probing
/// begins.
#[derive(Debug, Snafu)]
#[snafu(display("max_attempts must be greater than 0, got {max_attempts}"))]
pub struct ConfigError {
    max_attempts: u32,
}

/// The probe never succeeded within the attempt budget.
///
/// Carries the failure observed on the final attempt as its source, so the
/// surfaced test failure says what was actually still wrong, not just that
/// retries ran out.
#[derive(Debug, Snafu)]
#[snafu(display("probe did not succeed within {attempts} attempts: {source}"))]
pub struct Exhausted<E>
where
    E: std::error::Error + 'static,
{
    /// How many times the probe was invoked.
    pub attempts: u32,
    /// The failure observed on the final attempt.
    pub source: E,
}

/// How often and how many times to re-run a probe.
///
/// A policy is plain configuration: it holds no state across runs, and the
/// same policy value can drive any number of independent probe loops.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct RetryPolicy {
    max_attempts: u32,
    delay: Duration,
}

impl RetryPolicy {
    /// The attempt budget used when a scenario has no reason to deviate.
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

    /// The interval between attempts used when a scenario has no reason to
    /// deviate.
    pub const DEFAULT_DELAY: Duration = Duration::from_secs(10);

    /// Create a policy allowing up to `max_attempts` probe invocations with
    /// a constant `delay` between them.
    pub fn new(max_attempts: u32, delay: Duration) -> Result<Self, ConfigError> {
        ensure!(max_attempts >= 1, ConfigSnafu { max_attempts });
        Ok(Self {
            max_attempts,
            delay,
        })
    }

    /// The attempt budget.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// The interval between attempts.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Run `probe` until it succeeds, sleeping [`Self::delay`] between
    /// attempts.
    ///
    /// Returns on the first success without probing again. Every failure is
    /// retryable at this layer; after `max_attempts` consecutive failures
    /// the last one is surfaced as the source of [`Exhausted`]. There is no
    /// sleep after the final failed attempt, and attempts are strictly
    /// sequential.
    pub async fn run<P, Fut, E>(&self, probe_name: &str, mut probe: P) -> Result<(), Exhausted<E>>
    where
        P: FnMut() -> Fut,
        Fut: Future<Output = Result<(), E>>,
        E: std::error::Error + 'static,
    {
        let mut attempts = 0;
        loop {
            match probe().await {
                Ok(()) => return Ok(()),
                Err(error) => {
                    attempts += 1;
                    if attempts >= self.max_attempts {
                        return Err(Exhausted {
                            attempts,
                            source: error,
                        });
                    }
                    debug!(
                        message = "Probe failed, retrying after delay.",
                        probe = probe_name,
                        attempt = attempts,
                        %error,
                    );
                    tokio::time::sleep(self.delay).await;
                }
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            delay: Self::DEFAULT_DELAY,
        }
    }
}
