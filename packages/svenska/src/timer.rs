//! Artificial delays that stand in for network latency.
//!
//! Delayed work is an ordinary future. Dropping it (for example because the
//! Dioxus task that polls it belonged to a view that unmounted) cancels the
//! operation before it can report a result.

use std::future::Future;
use std::time::Duration;

pub trait Timer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// Real timer: `gloo-timers` in the browser, tokio everywhere else.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlatformTimer;

impl Timer for PlatformTimer {
    async fn sleep(&self, duration: Duration) {
        if duration.is_zero() {
            return;
        }
        #[cfg(target_arch = "wasm32")]
        gloo_timers::future::sleep(duration).await;
        #[cfg(not(target_arch = "wasm32"))]
        tokio::time::sleep(duration).await;
    }
}

/// Completes immediately. For tests and for a config with zero delays.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDelay;

impl Timer for NoDelay {
    async fn sleep(&self, _duration: Duration) {}
}
