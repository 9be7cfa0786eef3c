//! Politeness throttle for outbound provider requests.
//!
//! A [`Throttle`] remembers when the last request was let through and makes
//! the next caller wait until the minimum delay (plus optional jitter) has
//! elapsed. The last-request instant sits behind an async mutex that is held
//! for the whole wait, so one throttle shared between tasks serialises them.

use std::time::Duration;

use rand::Rng;
use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::config::ClientConfig;

/// Enforces a minimum interval between consecutive requests.
#[derive(Debug)]
pub struct Throttle {
    min_delay: Duration,
    jitter_ms: u64,
    last_request: Mutex<Option<Instant>>,
}

impl Throttle {
    /// Create a throttle with the given minimum delay and jitter bound.
    pub fn new(min_delay: Duration, jitter_ms: u64) -> Self {
        Self {
            min_delay,
            jitter_ms,
            last_request: Mutex::new(None),
        }
    }

    /// Create a throttle from client configuration.
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(
            Duration::from_millis(config.min_request_delay_ms),
            config.request_jitter_ms,
        )
    }

    /// Wait until a request may be sent, then record it as sent.
    ///
    /// The first call never waits. If the returned future is dropped while
    /// waiting, the recorded instant is left unchanged.
    pub async fn acquire(&self) {
        let mut last = self.last_request.lock().await;
        if let Some(previous) = *last {
            let required = self.min_delay + self.jitter();
            let elapsed = previous.elapsed();
            if elapsed < required {
                let wait = required - elapsed;
                tracing::trace!(?wait, "throttling request");
                tokio::time::sleep(wait).await;
            }
        }
        *last = Some(Instant::now());
    }

    fn jitter(&self) -> Duration {
        if self.jitter_ms == 0 {
            return Duration::ZERO;
        }
        Duration::from_millis(rand::thread_rng().gen_range(0..=self.jitter_ms))
    }
}
