//! Alerts view

use access_filter::{AccessFilter, Capabilities, Facet, FacetSelector, Refinement};
use itsm_model::{Actor, Alert};
use serde::Serialize;

use crate::config::ConsoleConfig;

/// Narrowing requested by the alerts panel
#[derive(Debug, Clone, Default)]
pub struct AlertQuery {
    pub search: String,
    pub status: FacetSelector,
    pub severity: FacetSelector,
}

impl AlertQuery {
    pub fn from_config(config: &ConsoleConfig) -> Self {
        Self {
            search: config.search.clone(),
            status: config.alert_status.clone(),
            severity: config.alert_severity.clone(),
        }
    }

    fn refinement(&self) -> Refinement {
        Refinement::new()
            .search(&self.search)
            .facet(Facet::Status, self.status.clone())
            .facet(Facet::Severity, self.severity.clone())
    }
}

/// One alert row with the actions offered on it
#[derive(Debug, Serialize)]
pub struct AlertRow<'a> {
    pub alert: &'a Alert,
    pub can_create_ticket: bool,
    pub can_acknowledge: bool,
}

#[derive(Debug, Serialize)]
pub struct AlertView<'a> {
    pub rows: Vec<AlertRow<'a>>,
    pub count: usize,
    /// Rows still active
    pub unacknowledged_count: usize,
}

/// Alerts visible to `actor`, narrowed by `query`
pub fn alert_view<'a>(actor: &Actor, alerts: &'a [Alert], query: &AlertQuery) -> AlertView<'a> {
    let visible = AccessFilter::new(actor).apply(alerts);
    let refined = query.refinement().apply(visible);
    let capabilities = Capabilities::for_actor(actor);

    let rows: Vec<_> = refined
        .into_iter()
        .map(|alert| AlertRow {
            alert,
            can_create_ticket: capabilities.can_create_ticket_from(alert),
            can_acknowledge: capabilities.can_acknowledge(alert),
        })
        .collect();

    AlertView {
        count: rows.len(),
        unacknowledged_count: rows.iter().filter(|row| row.alert.is_active()).count(),
        rows,
    }
}
