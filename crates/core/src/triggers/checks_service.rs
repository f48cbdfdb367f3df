//! Startup checks run once the user is logged in.
//!
//! Some maintenance services (e.g. the auto-grouping job) are installed as
//! event triggers that the backend never runs on its own. On startup the
//! client looks for such triggers and launches the ones that never ran.

use std::sync::Arc;

use log::{debug, info};

use super::triggers_model::Trigger;
use super::triggers_traits::JobLauncherTrait;
use crate::errors::Result;

/// When a launch trigger should be started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchPolicy {
    /// Launch only if the trigger has never been executed.
    NeverExecuted,
}

/// Describes a service trigger the client wants running.
#[derive(Debug, Clone)]
pub struct LaunchTriggerSpec {
    pub slug: String,
    pub name: String,
    pub trigger_type: String,
    pub policy: LaunchPolicy,
}

/// Startup checks over the trigger collection.
pub struct StartupChecks {
    launcher: Arc<dyn JobLauncherTrait>,
    launch_triggers: Vec<LaunchTriggerSpec>,
}

impl StartupChecks {
    pub fn new(launcher: Arc<dyn JobLauncherTrait>, launch_triggers: Vec<LaunchTriggerSpec>) -> Self {
        Self {
            launcher,
            launch_triggers,
        }
    }

    fn matches(spec: &LaunchTriggerSpec, trigger: &Trigger) -> bool {
        trigger.trigger_type == spec.trigger_type
            && trigger.message.slug.as_deref() == Some(spec.slug.as_str())
            && trigger.message.name.as_deref() == Some(spec.name.as_str())
    }

    /// Launches every wanted trigger whose policy allows it.
    pub async fn check(&self, triggers: &[Trigger]) -> Result<()> {
        for spec in &self.launch_triggers {
            let Some(trigger) = triggers.iter().find(|t| Self::matches(spec, t)) else {
                debug!("Startup checks: no trigger for {}/{}", spec.slug, spec.name);
                continue;
            };

            match spec.policy {
                LaunchPolicy::NeverExecuted => {
                    if trigger.last_execution.is_none() {
                        info!("Startup checks: launching {}/{}", spec.slug, spec.name);
                        self.launcher.launch(trigger).await?;
                    }
                }
            }
        }
        Ok(())
    }
}
