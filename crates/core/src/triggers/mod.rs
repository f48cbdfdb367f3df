//! Triggers module - connector trigger model and startup checks.

mod checks_service;
mod triggers_model;
mod triggers_traits;

// Re-export the public interface
pub use checks_service::{LaunchPolicy, LaunchTriggerSpec, StartupChecks};
pub use triggers_model::{konnector_slugs, Trigger, TriggerMessage};
pub use triggers_traits::JobLauncherTrait;
