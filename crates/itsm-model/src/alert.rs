//! Alerts raised against monitored items

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::Id;

/// Alert severity, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlertSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AlertSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertSeverity::Low => "low",
            AlertSeverity::Medium => "medium",
            AlertSeverity::High => "high",
            AlertSeverity::Critical => "critical",
        }
    }
}

/// Triage state of an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlertStatus {
    Active,
    Acknowledged,
    Resolved,
}

impl AlertStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertStatus::Active => "active",
            AlertStatus::Acknowledged => "acknowledged",
            AlertStatus::Resolved => "resolved",
        }
    }
}

/// Alert referencing a monitored item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: Id,
    pub resource_id: Id,
    #[serde(default)]
    pub resource_name: String,
    pub severity: AlertSeverity,
    pub status: AlertStatus,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub assigned_actor_ids: BTreeSet<Id>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub resolved_at: Option<DateTime<Utc>>,
    #[serde(default)]
    linked_ticket_id: Option<Id>,
}

impl Alert {
    /// Create an active alert with no assignees and no linked ticket
    pub fn new(
        id: impl Into<Id>,
        resource_id: impl Into<Id>,
        severity: AlertSeverity,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            resource_id: resource_id.into(),
            resource_name: String::new(),
            severity,
            status: AlertStatus::Active,
            message: String::new(),
            assigned_actor_ids: BTreeSet::new(),
            created_at,
            resolved_at: None,
            linked_ticket_id: None,
        }
    }

    /// Ticket opened for this alert, if any
    pub fn linked_ticket_id(&self) -> Option<&str> {
        self.linked_ticket_id.as_deref()
    }

    /// Link a ticket to this alert.
    ///
    /// A link is permanent: returns `false` and leaves the existing link in
    /// place when a ticket is already linked.
    pub fn link_ticket(&mut self, ticket_id: impl Into<Id>) -> bool {
        if self.linked_ticket_id.is_some() {
            return false;
        }
        self.linked_ticket_id = Some(ticket_id.into());
        true
    }

    pub fn is_active(&self) -> bool {
        self.status == AlertStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_link_is_permanent() {
        let mut alert = Alert::new("a1", "res-1", AlertSeverity::High, Utc::now());
        assert_eq!(alert.linked_ticket_id(), None);

        assert!(alert.link_ticket("T-100"));
        assert!(!alert.link_ticket("T-200"));
        assert_eq!(alert.linked_ticket_id(), Some("T-100"));
    }

    #[test]
    fn test_severity_ordering() {
        assert!(AlertSeverity::Critical > AlertSeverity::High);
        assert!(AlertSeverity::Medium > AlertSeverity::Low);
    }

    #[test]
    fn test_linked_ticket_deserializes() {
        let alert: Alert = serde_json::from_str(
            r#"{"id": "a1", "resource_id": "res-1", "severity": "critical",
                "status": "acknowledged", "created_at": "2024-01-15T10:30:00Z",
                "linked_ticket_id": "T-001"}"#,
        )
        .unwrap();
        assert_eq!(alert.linked_ticket_id(), Some("T-001"));
        assert_eq!(alert.status, AlertStatus::Acknowledged);
    }
}
