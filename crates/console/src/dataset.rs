//! Console dataset
//!
//! The console owns its state explicitly: everything the views need is loaded
//! once into a `Dataset` and handed to the rule crates by reference.

use itsm_model::{Actor, Alert, Customer, MonitoredItem, ThresholdRule, Ticket};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::ConsoleError;

const SAMPLE_DATASET: &str = include_str!("../data/sample.json");

/// All entities known to the console
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    pub actors: Vec<Actor>,
    pub customers: Vec<Customer>,
    pub monitors: Vec<MonitoredItem>,
    pub thresholds: Vec<ThresholdRule>,
    pub alerts: Vec<Alert>,
    pub tickets: Vec<Ticket>,
}

impl Dataset {
    /// Built-in demo dataset
    pub fn sample() -> Result<Self, ConsoleError> {
        Ok(serde_json::from_str(SAMPLE_DATASET)?)
    }

    /// Read a JSON dataset from disk
    pub fn from_path(path: &Path) -> Result<Self, ConsoleError> {
        let raw = fs::read_to_string(path).map_err(|source| ConsoleError::DatasetIo {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset: Self = serde_json::from_str(&raw)?;
        info!(
            "Loaded dataset from {}: {} actors, {} alerts, {} tickets",
            path.display(),
            dataset.actors.len(),
            dataset.alerts.len(),
            dataset.tickets.len()
        );
        Ok(dataset)
    }

    /// Dataset at `path`, or the sample when no path is configured
    pub fn load(path: Option<&Path>) -> Result<Self, ConsoleError> {
        match path {
            Some(path) => Self::from_path(path),
            None => {
                info!("No dataset configured; using built-in sample");
                Self::sample()
            }
        }
    }

    pub fn actor(&self, id: &str) -> Result<&Actor, ConsoleError> {
        self.actors
            .iter()
            .find(|actor| actor.id == id)
            .ok_or_else(|| ConsoleError::UnknownActor(id.to_string()))
    }

    pub fn customer(&self, id: &str) -> Result<&Customer, ConsoleError> {
        self.customers
            .iter()
            .find(|customer| customer.id == id)
            .ok_or_else(|| ConsoleError::UnknownCustomer(id.to_string()))
    }

    pub fn monitor(&self, id: &str) -> Option<&MonitoredItem> {
        self.monitors.iter().find(|monitor| monitor.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_parses() {
        let dataset = Dataset::sample().unwrap();
        assert_eq!(dataset.actors.len(), 3);
        assert_eq!(dataset.customers.len(), 4);
        assert_eq!(dataset.monitors.len(), 5);
        assert_eq!(dataset.thresholds.len(), 4);
        assert_eq!(dataset.alerts.len(), 4);
        assert_eq!(dataset.tickets.len(), 4);
        assert_eq!(dataset.alerts[0].linked_ticket_id(), Some("INC-3541"));
    }

    #[test]
    fn test_lookups() {
        let dataset = Dataset::sample().unwrap();
        assert_eq!(dataset.actor("2").unwrap().name, "Super User");
        assert!(matches!(dataset.actor("99"), Err(ConsoleError::UnknownActor(_))));
        assert_eq!(dataset.customer("cust-3").unwrap().name, "Global Industries");
        assert!(dataset.monitor("res-9").is_none());
    }

    #[test]
    fn test_missing_file() {
        let err = Dataset::from_path(Path::new("/nonexistent/dataset.json")).unwrap_err();
        assert!(matches!(err, ConsoleError::DatasetIo { .. }));
    }
}
