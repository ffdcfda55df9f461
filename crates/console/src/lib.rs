//! ITSM Console Driver
//!
//! Loads console state, evaluates every view for one actor and reports the
//! results through `tracing`.

use itsm_model::Actor;
use serde::Serialize;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

pub mod config;
pub mod dataset;
pub mod error;
pub mod views;

pub use crate::config::ConsoleConfig;
pub use crate::dataset::Dataset;
pub use crate::error::ConsoleError;

use access_filter::{AccessFilter, Capabilities};
use crate::views::{
    alert_view, customer_summaries, resource_view, ticket_view, AlertQuery, AlertView,
    CustomerTicketSummary, DashboardStats, HierarchyPage, Navigator, ResourceRow, TicketQuery,
    TicketView,
};

/// Console state: configuration plus the dataset it was loaded with
pub struct Console {
    pub config: ConsoleConfig,
    pub dataset: Dataset,
    pub version: String,
}

/// Everything the console shows to one actor
#[derive(Debug, Serialize)]
pub struct ConsoleReport<'a> {
    pub actor: &'a Actor,
    pub alerts: AlertView<'a>,
    pub tickets: TicketView<'a>,
    pub resources: Vec<ResourceRow<'a>>,
    pub dashboard: DashboardStats,
    pub customers: Vec<CustomerTicketSummary>,
    /// Every page of the drill-down, depth first
    pub hierarchy: Vec<HierarchyPage<'a>>,
    pub can_manage_users: bool,
    pub can_manage_integrations: bool,
}

impl Console {
    pub fn new(config: ConsoleConfig, dataset: Dataset) -> Self {
        Self {
            config,
            dataset,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Load the dataset named by the configuration
    pub fn from_config(config: ConsoleConfig) -> Result<Self, ConsoleError> {
        let dataset = Dataset::load(config.dataset_path.as_deref())?;
        Ok(Self::new(config, dataset))
    }

    /// Evaluate all views for the configured actor
    pub fn report(&self) -> Result<ConsoleReport<'_>, ConsoleError> {
        let actor = self.dataset.actor(&self.config.actor_id)?;
        let filter = AccessFilter::new(actor);
        let capabilities = Capabilities::for_actor(actor);

        let visible_tickets = filter.apply(&self.dataset.tickets);
        let dashboard = DashboardStats::compute(
            &filter.apply(&self.dataset.alerts),
            &visible_tickets,
            &filter.apply(&self.dataset.monitors),
        );

        Ok(ConsoleReport {
            actor,
            alerts: alert_view(actor, &self.dataset.alerts, &AlertQuery::from_config(&self.config)),
            tickets: ticket_view(actor, &self.dataset.tickets, &TicketQuery::from_config(&self.config)),
            resources: resource_view(actor, &self.dataset.monitors, &self.config.search),
            dashboard,
            customers: customer_summaries(visible_tickets),
            hierarchy: walk_hierarchy(&self.dataset, actor)?,
            can_manage_users: capabilities.can_manage_users(),
            can_manage_integrations: capabilities.can_manage_integrations(),
        })
    }
}

/// Render every level of the drill-down reachable by `actor`
fn walk_hierarchy<'d>(dataset: &'d Dataset, actor: &Actor) -> Result<Vec<HierarchyPage<'d>>, ConsoleError> {
    let mut nav = Navigator::new(dataset, actor);
    let mut pages = Vec::new();

    let top = nav.render()?;
    let customer_ids: Vec<&'d str> = match &top {
        HierarchyPage::Customers { rows } => rows.iter().map(|row| row.customer.id.as_str()).collect(),
        _ => Vec::new(),
    };
    pages.push(top);

    for customer_id in customer_ids {
        nav.select_customer(customer_id)?;
        let page = nav.render()?;
        let monitor_ids: Vec<&'d str> = match &page {
            HierarchyPage::Monitors { rows, .. } => rows.iter().map(|row| row.monitor.id.as_str()).collect(),
            _ => Vec::new(),
        };
        pages.push(page);

        for monitor_id in monitor_ids {
            nav.select_monitor(monitor_id)?;
            pages.push(nav.render()?);
            nav.back();
        }
        nav.back();
    }

    Ok(pages)
}

/// Initialize logging
pub fn init_logging(config: &ConsoleConfig) -> Result<(), ConsoleError> {
    let level = config.log_level.parse::<Level>().unwrap_or(Level::INFO);

    let installed = if config.json_logs {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .with_target(true)
            .json()
            .finish();
        tracing::subscriber::set_global_default(subscriber)
    } else {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
    };

    installed.map_err(|e| ConsoleError::Logging(e.to_string()))
}

/// Load state for the configured actor and log every view
pub fn run(config: ConsoleConfig) -> Result<(), ConsoleError> {
    let console = Console::from_config(config)?;
    let report = console.report()?;

    info!(
        active = report.actor.is_active,
        "Evaluating console v{} as {} ({})",
        console.version,
        report.actor.id,
        report.actor.role
    );
    info!(
        "Dashboard: {} critical alerts, {} open tickets, {} resolved tickets, {} healthy resources",
        report.dashboard.critical_alerts,
        report.dashboard.open_tickets,
        report.dashboard.resolved_tickets,
        report.dashboard.healthy_resources
    );

    info!(
        "Alerts: {} shown, {} unacknowledged",
        report.alerts.count, report.alerts.unacknowledged_count
    );
    for row in &report.alerts.rows {
        info!(
            alert = %row.alert.id,
            severity = row.alert.severity.as_str(),
            status = row.alert.status.as_str(),
            create_ticket = row.can_create_ticket,
            acknowledge = row.can_acknowledge,
            "{}: {}",
            row.alert.resource_name,
            row.alert.message
        );
    }

    info!("Tickets: {} shown", report.tickets.count);
    for row in &report.tickets.rows {
        info!(
            ticket = %row.ticket.id,
            status = row.ticket.status.as_str(),
            priority = row.ticket.priority.as_str(),
            update = row.can_update,
            "{}",
            row.ticket.title
        );
    }

    for summary in &report.customers {
        info!(
            customer = %summary.customer_id,
            tickets = summary.ticket_count,
            open = summary.open_tickets,
            overdue = summary.overdue_tickets,
            "{}",
            summary.customer_name
        );
    }

    for row in &report.resources {
        info!(resource = %row.item.id, tier = row.tier.as_str(), "{}", row.item.name);
    }

    for page in &report.hierarchy {
        match page {
            HierarchyPage::Customers { rows } => {
                info!("Customers: {}", rows.len());
            }
            HierarchyPage::Monitors { customer, rows } => {
                for row in rows {
                    info!(
                        customer = %customer.id,
                        monitor = %row.monitor.id,
                        tier = row.tier.as_str(),
                        worst_threshold = row.worst_threshold.as_str(),
                        "{}",
                        row.monitor.name
                    );
                }
            }
            HierarchyPage::Thresholds { monitor, rollup, .. } => {
                for reading in &rollup.readings {
                    info!(
                        monitor = %monitor.id,
                        tier = reading.tier.as_str(),
                        "{}: {}{} (warning {}, critical {})",
                        reading.rule.parameter,
                        reading.rule.current_value,
                        reading.rule.unit,
                        reading.rule.warning_level,
                        reading.rule.critical_level
                    );
                }
            }
        }
    }

    Ok(())
}
