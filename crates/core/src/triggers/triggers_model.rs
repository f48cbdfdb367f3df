//! Connector trigger domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::KONNECTOR_WORKER;

/// Job arguments carried by a trigger.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TriggerMessage {
    /// Slug of the bank connector the job runs, for konnector workers.
    #[serde(default)]
    pub konnector: Option<String>,
    /// Application slug, for service jobs.
    #[serde(default)]
    pub slug: Option<String>,
    /// Service name, for service jobs.
    #[serde(default)]
    pub name: Option<String>,
}

/// A backend job descriptor.
///
/// A bank trigger indicates a data connector is configured to run; its
/// presence while no account exists yet means an import is underway.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Trigger {
    pub id: String,
    /// Schedule kind ("@event", "@cron", ...).
    #[serde(rename = "type")]
    pub trigger_type: String,
    pub worker: String,
    #[serde(default)]
    pub message: TriggerMessage,
    #[serde(default)]
    pub last_execution: Option<DateTime<Utc>>,
}

impl Trigger {
    /// True for triggers that run a bank data connector.
    pub fn is_bank_trigger(&self) -> bool {
        self.worker == KONNECTOR_WORKER && self.message.konnector.is_some()
    }
}

/// Connector slugs of the bank triggers in the list.
pub fn konnector_slugs(triggers: &[Trigger]) -> Vec<String> {
    triggers
        .iter()
        .filter(|t| t.is_bank_trigger())
        .filter_map(|t| t.message.konnector.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn bank_trigger(id: &str, konnector: &str) -> Trigger {
        Trigger {
            id: id.to_string(),
            trigger_type: "@cron".to_string(),
            worker: KONNECTOR_WORKER.to_string(),
            message: TriggerMessage {
                konnector: Some(konnector.to_string()),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_bank_trigger_detection() {
        assert!(bank_trigger("1", "mybank").is_bank_trigger());

        let service = Trigger {
            worker: "service".to_string(),
            ..Default::default()
        };
        assert!(!service.is_bank_trigger());

        let konnector_without_slug = Trigger {
            worker: KONNECTOR_WORKER.to_string(),
            ..Default::default()
        };
        assert!(!konnector_without_slug.is_bank_trigger());
    }

    #[test]
    fn test_konnector_slugs() {
        let triggers = vec![
            bank_trigger("1", "mybank"),
            Trigger::default(),
            bank_trigger("2", "otherbank"),
        ];
        assert_eq!(konnector_slugs(&triggers), vec!["mybank", "otherbank"]);
    }
}
