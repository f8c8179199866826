//! Voice call duration counter.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use nandi_core::config::CallConfig;
use nandi_core::error::{NandiError, Result};
use nandi_core::session::format_call_duration;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// Counts whole seconds while a call is active.
///
/// Each call gets its own counter, so a tick that races with [`VoiceCall::end`]
/// can only touch the counter of the call that already ended.
#[derive(Debug)]
pub struct VoiceCall {
    tick: Duration,
    elapsed: Arc<AtomicU64>,
    token: Option<CancellationToken>,
}

impl VoiceCall {
    pub fn new(config: &CallConfig) -> Result<Self> {
        Self::with_tick(config.tick_interval())
    }

    /// # Errors
    ///
    /// `NandiError::Config` for a zero tick.
    pub fn with_tick(tick: Duration) -> Result<Self> {
        if tick.is_zero() {
            return Err(NandiError::config("call tick interval must be positive"));
        }
        Ok(Self {
            tick,
            elapsed: Arc::new(AtomicU64::new(0)),
            token: None,
        })
    }

    /// Starts a call with the counter at zero.
    ///
    /// Starting while a call is active restarts it. Must be called within a
    /// Tokio runtime.
    pub fn start(&mut self) {
        self.stop_ticker();

        let elapsed = Arc::new(AtomicU64::new(0));
        let token = CancellationToken::new();
        self.elapsed = Arc::clone(&elapsed);
        self.token = Some(token.clone());

        let mut interval = tokio::time::interval_at(Instant::now() + self.tick, self.tick);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = interval.tick() => {
                        elapsed.fetch_add(1, Ordering::Relaxed);
                    }
                }
            }
            tracing::trace!("call ticker stopped");
        });

        tracing::info!(tick_ms = self.tick.as_millis() as u64, "voice call started");
    }

    /// Ends the call and resets the counter to zero. No-op when idle.
    pub fn end(&mut self) {
        if self.token.is_none() {
            return;
        }
        let secs = self.elapsed_secs();
        self.stop_ticker();
        self.elapsed = Arc::new(AtomicU64::new(0));
        tracing::info!(duration = %format_call_duration(secs), "voice call ended");
    }

    pub fn is_active(&self) -> bool {
        self.token.is_some()
    }

    /// Ticks counted in the current call; seconds at the default interval.
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed.load(Ordering::Relaxed)
    }

    /// Elapsed time as `MM:SS`.
    pub fn display(&self) -> String {
        format_call_duration(self.elapsed_secs())
    }

    fn stop_ticker(&mut self) {
        if let Some(token) = self.token.take() {
            token.cancel();
        }
    }
}

impl Drop for VoiceCall {
    fn drop(&mut self) {
        self.stop_ticker();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_counts_seconds_while_active() {
        let mut call = VoiceCall::new(&CallConfig::default()).unwrap();
        assert!(!call.is_active());
        assert_eq!(call.display(), "00:00");

        call.start();
        assert!(call.is_active());
        tokio::time::sleep(Duration::from_millis(3500)).await;
        assert_eq!(call.elapsed_secs(), 3);
        assert_eq!(call.display(), "00:03");
    }

    #[tokio::test(start_paused = true)]
    async fn test_end_resets_and_stops() {
        let mut call = VoiceCall::new(&CallConfig::default()).unwrap();
        call.start();
        tokio::time::sleep(Duration::from_millis(2500)).await;
        call.end();
        assert!(!call.is_active());
        assert_eq!(call.elapsed_secs(), 0);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(call.elapsed_secs(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_starts_from_zero() {
        let mut call = VoiceCall::with_tick(Duration::from_secs(1)).unwrap();
        call.start();
        tokio::time::sleep(Duration::from_millis(4500)).await;
        assert_eq!(call.elapsed_secs(), 4);

        call.start();
        assert_eq!(call.elapsed_secs(), 0);
        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert_eq!(call.elapsed_secs(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_end_when_idle_is_noop() {
        let mut call = VoiceCall::with_tick(Duration::from_secs(1)).unwrap();
        call.end();
        assert_eq!(call.elapsed_secs(), 0);
    }

    #[test]
    fn test_zero_tick_rejected() {
        let err = VoiceCall::with_tick(Duration::ZERO).unwrap_err();
        assert!(err.is_config());

        let config = CallConfig {
            tick_interval_ms: 0,
        };
        assert!(VoiceCall::new(&config).unwrap_err().is_config());
    }
}
