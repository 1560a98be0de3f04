//! Database connection bootstrap.
//!
//! The database and the service are usually started together by an
//! orchestrator, so the first connection attempts may hit a server that is
//! not listening yet. Connections are retried a fixed number of times with a
//! fixed delay. There is no pool: every caller gets its own connection.

use crate::config::DatabaseConfig;
use sqlx::{Connection, PgConnection};
use std::fmt::Display;
use std::future::Future;
use std::io::ErrorKind;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

/// Bounded retry with a fixed delay between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, the first one included.
    pub max_attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            delay: Duration::from_secs(2),
        }
    }
}

impl RetryPolicy {
    pub fn from_config(config: &DatabaseConfig) -> Self {
        Self {
            max_attempts: config.connect_attempts,
            delay: config.retry_delay(),
        }
    }
}

/// Run `op` until it succeeds, fails with a non-transient error, or the
/// attempt budget is spent. The last error is returned as-is.
pub async fn retry<T, E, F, Fut, P>(
    policy: RetryPolicy,
    mut op: F,
    is_transient: P,
) -> Result<T, E>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    P: Fn(&E) -> bool,
    E: Display,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        debug!(attempt, max_attempts, "Connecting to database");

        match op(attempt).await {
            Ok(value) => return Ok(value),
            Err(e) if attempt < max_attempts && is_transient(&e) => {
                warn!(
                    attempt,
                    max_attempts,
                    error = %e,
                    "Attempt {} failed, retrying in {:?}",
                    attempt,
                    policy.delay
                );
                sleep(policy.delay).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Whether a connect error is worth retrying.
pub fn is_transient(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Io(io) => !matches!(
            io.kind(),
            ErrorKind::InvalidInput | ErrorKind::PermissionDenied | ErrorKind::Unsupported
        ),
        sqlx::Error::Tls(_) | sqlx::Error::Protocol(_) | sqlx::Error::PoolTimedOut => true,
        sqlx::Error::Database(db) => db
            .code()
            .is_some_and(|code| code.starts_with("08") || code == "57P03" || code == "53300"),
        _ => false,
    }
}

/// Open a fresh connection, retrying transient failures.
pub async fn connect(config: &DatabaseConfig) -> Result<PgConnection, sqlx::Error> {
    let policy = RetryPolicy::from_config(config);
    retry(policy, |_| PgConnection::connect(&config.url), is_transient).await
}
