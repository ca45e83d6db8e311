use std::{future::Future, time::Duration};

use dioxus_logger::tracing;

use crate::client::{error::ClientError, util::time::sleep};

/// Strategy for handling a failed query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorRetryStrategy {
    /// Retry with exponential backoff (network errors, server errors)
    Retry,
    /// Failed permanently (client errors, bad data, local validation)
    Fail,
}

impl ClientError {
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            // No response at all, the backend may be restarting
            Self::Request(_) => ErrorRetryStrategy::Retry,
            Self::Status { status, .. } if *status >= 500 => ErrorRetryStrategy::Retry,
            _ => ErrorRetryStrategy::Fail,
        }
    }
}

/// Retry policy for idempotent queries. Mutations never go through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    initial_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            initial_backoff: Self::DEFAULT_INITIAL_BACKOFF,
        }
    }
}

impl RetryPolicy {
    const DEFAULT_MAX_ATTEMPTS: u32 = 3;
    const DEFAULT_INITIAL_BACKOFF: Duration = Duration::from_secs(1);

    pub fn new(max_attempts: u32, initial_backoff: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            initial_backoff,
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Delay before the attempt following `failed_attempts` failures.
    pub fn backoff(&self, failed_attempts: u32) -> Duration {
        self.initial_backoff * 2_u32.pow(failed_attempts.saturating_sub(1))
    }

    /// Run `operation` until it succeeds, fails permanently or runs out of attempts.
    pub async fn run<R, F, Fut>(&self, description: &str, mut operation: F) -> Result<R, ClientError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<R, ClientError>>,
    {
        let mut attempt_count = 0;

        loop {
            tracing::debug!(
                "Fetching {} (attempt {}/{})",
                description,
                attempt_count + 1,
                self.max_attempts
            );

            match operation().await {
                Ok(result) => return Ok(result),
                Err(e) => match e.to_retry_strategy() {
                    ErrorRetryStrategy::Fail => {
                        tracing::debug!("Permanent error for {}: {}", description, e);
                        return Err(e);
                    }
                    ErrorRetryStrategy::Retry => {
                        attempt_count += 1;
                        if attempt_count >= self.max_attempts {
                            tracing::error!(
                                "Max attempts ({}) exceeded for {}: {}",
                                self.max_attempts,
                                description,
                                e
                            );
                            return Err(e);
                        }

                        let backoff = self.backoff(attempt_count);
                        tracing::warn!(
                            "Retrying {} (attempt {}/{}) after {:?}: {}",
                            description,
                            attempt_count,
                            self.max_attempts,
                            backoff,
                            e
                        );

                        sleep(backoff).await;
                    }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_network_and_server_errors_are_retried() {
        let server = ClientError::Status {
            status: 503,
            message: None,
        };
        let client = ClientError::Status {
            status: 404,
            message: None,
        };

        assert_eq!(server.to_retry_strategy(), ErrorRetryStrategy::Retry);
        assert_eq!(
            ClientError::Request("connection reset".to_string()).to_retry_strategy(),
            ErrorRetryStrategy::Retry
        );
        assert_eq!(client.to_retry_strategy(), ErrorRetryStrategy::Fail);
        assert_eq!(
            ClientError::Parse("eof".to_string()).to_retry_strategy(),
            ErrorRetryStrategy::Fail
        );
    }

    #[test]
    fn backoff_doubles_from_one_second() {
        let policy = RetryPolicy::default();

        assert_eq!(policy.max_attempts(), 3);
        assert_eq!(policy.backoff(1), Duration::from_secs(1));
        assert_eq!(policy.backoff(2), Duration::from_secs(2));
        assert_eq!(policy.backoff(3), Duration::from_secs(4));
    }
}
