//! Per-request deadline threaded from the handler down to every store call.

use crate::errors::RepositoryError;
use std::{future::Future, time::Duration};
use tokio::time::{Instant, error::Elapsed, timeout_at};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    expires_at: Instant,
}

impl Deadline {
    pub fn after(duration: Duration) -> Self {
        Self {
            expires_at: Instant::now() + duration,
        }
    }

    pub fn at(expires_at: Instant) -> Self {
        Self { expires_at }
    }

    pub fn expires_at(&self) -> Instant {
        self.expires_at
    }

    pub fn remaining(&self) -> Duration {
        self.expires_at.saturating_duration_since(Instant::now())
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    /// Races `fut` against the deadline. The future is dropped when the
    /// deadline elapses first.
    pub async fn within<F>(&self, fut: F) -> Result<F::Output, Elapsed>
    where
        F: Future,
    {
        timeout_at(self.expires_at, fut).await
    }

    /// Runs a store call under the deadline. An expired deadline fails
    /// before the call is polled at all.
    pub async fn run<F, T>(&self, fut: F) -> Result<T, RepositoryError>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        if self.is_expired() {
            return Err(RepositoryError::DeadlineExceeded);
        }

        match self.within(fut).await {
            Ok(res) => res.map_err(RepositoryError::from),
            Err(_) => Err(RepositoryError::DeadlineExceeded),
        }
    }
}
