use std::time::Duration;

use async_trait::async_trait;

/// 轮询间隔的等待方式。
#[async_trait]
pub trait Delay: Send + Sync {
    async fn wait(&self, duration: Duration);
}

/// 基于 `tokio::time::sleep` 的非阻塞等待。
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioDelay;

#[async_trait]
impl Delay for TokioDelay {
    async fn wait(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
