//! Trigger-related traits implemented by the hosting application.

use async_trait::async_trait;

use super::triggers_model::Trigger;
use crate::errors::Result;

/// Contract for launching backend jobs from their trigger.
#[async_trait]
pub trait JobLauncherTrait: Send + Sync {
    /// Asks the backend to run the job described by `trigger` now.
    async fn launch(&self, trigger: &Trigger) -> Result<()>;
}
