//! Customers, monitored items and their threshold rules

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::Id;

/// Qualitative status token carried by customers and monitored items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemStatus {
    Up,
    Healthy,
    Warning,
    Critical,
    Down,
    #[serde(other)]
    Unknown,
}

impl ItemStatus {
    /// Parse a status token; unknown tokens map to `Unknown`
    pub fn from_token(token: &str) -> Self {
        match token {
            "up" => ItemStatus::Up,
            "healthy" => ItemStatus::Healthy,
            "warning" => ItemStatus::Warning,
            "critical" => ItemStatus::Critical,
            "down" => ItemStatus::Down,
            _ => ItemStatus::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Up => "up",
            ItemStatus::Healthy => "healthy",
            ItemStatus::Warning => "warning",
            ItemStatus::Critical => "critical",
            ItemStatus::Down => "down",
            ItemStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Customer at the top of the monitoring hierarchy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: Id,
    pub name: String,
    pub status: ItemStatus,
}

/// Infrastructure resource or monitor owned by a customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitoredItem {
    pub id: Id,
    pub name: String,
    /// Monitor type label ("HTTP", "MySQL", ...)
    #[serde(default)]
    pub kind: String,
    pub owner_customer_id: Id,
    pub current_status: ItemStatus,
    /// Actors assigned to this resource directly
    #[serde(default)]
    pub assigned_actor_ids: BTreeSet<Id>,
}

/// Warning/critical levels configured for one measured parameter of a monitor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdRule {
    pub id: Id,
    pub monitor_id: Id,
    /// Measured parameter ("Response Time", "CPU Usage", ...)
    pub parameter: String,
    pub warning_level: f64,
    pub critical_level: f64,
    pub current_value: f64,
    /// Display unit; has no effect on classification
    #[serde(default)]
    pub unit: String,
}

impl ThresholdRule {
    /// Create a rule with an empty parameter label and unit
    pub fn new(
        id: impl Into<Id>,
        monitor_id: impl Into<Id>,
        warning_level: f64,
        critical_level: f64,
        current_value: f64,
    ) -> Self {
        Self {
            id: id.into(),
            monitor_id: monitor_id.into(),
            parameter: String::new(),
            warning_level,
            critical_level,
            current_value,
            unit: String::new(),
        }
    }
}
