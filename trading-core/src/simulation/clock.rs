// trading-core/src/simulation/clock.rs

use async_trait::async_trait;
use std::time::Duration;
use tokio::time::sleep;

/// Waits out the holding period of a simulated trade
#[async_trait]
pub trait HoldClock: Send + Sync {
    async fn hold(&self, period: Duration);
}

/// Wall clock backed by `tokio::time::sleep`
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

#[async_trait]
impl HoldClock for TokioClock {
    async fn hold(&self, period: Duration) {
        sleep(period).await;
    }
}

/// Returns immediately
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

#[async_trait]
impl HoldClock for NoDelay {
    async fn hold(&self, _period: Duration) {}
}
