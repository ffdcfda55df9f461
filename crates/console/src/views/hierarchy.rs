//! Customer → monitor → threshold drill-down
//!
//! Navigation is a small view stack: the customer list is always at the
//! bottom, selecting a customer pushes its monitors, selecting a monitor
//! pushes its thresholds, and `back` pops one level.

use access_filter::AccessFilter;
use itsm_model::{Actor, Customer, MonitoredItem, Role};
use serde::Serialize;
use status_classifier::{
    classify, rollup_monitor, worst_tier, MonitorRollup, SeverityTier, StatusSource, StatusTier,
};
use tracing::debug;

use crate::dataset::Dataset;
use crate::error::ConsoleError;

/// One level of the drill-down
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "kebab-case")]
pub enum HierarchyView {
    Customers,
    Monitors { customer_id: String },
    Thresholds { customer_id: String, monitor_id: String },
}

#[derive(Debug, Serialize)]
pub struct CustomerRow<'d> {
    pub customer: &'d Customer,
    pub tier: StatusTier,
    pub monitor_count: usize,
}

#[derive(Debug, Serialize)]
pub struct MonitorRow<'d> {
    pub monitor: &'d MonitoredItem,
    pub tier: StatusTier,
    /// Most severe threshold reading on this monitor
    pub worst_threshold: SeverityTier,
}

/// Rendered content of the current level
#[derive(Debug, Serialize)]
#[serde(tag = "view", rename_all = "kebab-case")]
pub enum HierarchyPage<'d> {
    Customers {
        rows: Vec<CustomerRow<'d>>,
    },
    Monitors {
        customer: &'d Customer,
        rows: Vec<MonitorRow<'d>>,
    },
    Thresholds {
        customer: &'d Customer,
        monitor: &'d MonitoredItem,
        rollup: MonitorRollup<'d>,
    },
}

static ROOT: HierarchyView = HierarchyView::Customers;

/// View stack over the monitoring hierarchy, scoped to one actor
pub struct Navigator<'d> {
    dataset: &'d Dataset,
    /// Monitors the actor may see, in dataset order
    monitors: Vec<&'d MonitoredItem>,
    show_all_customers: bool,
    stack: Vec<HierarchyView>,
}

impl<'d> Navigator<'d> {
    /// Start at the customer list.
    ///
    /// Administrators see every customer; other actors see the customers
    /// owning at least one monitor visible to them.
    pub fn new(dataset: &'d Dataset, actor: &Actor) -> Self {
        Self {
            dataset,
            monitors: AccessFilter::new(actor).apply(&dataset.monitors),
            show_all_customers: actor.role == Role::Administrator,
            stack: vec![HierarchyView::Customers],
        }
    }

    pub fn current(&self) -> &HierarchyView {
        self.stack.last().unwrap_or(&ROOT)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    fn monitors_of<'s>(&'s self, customer_id: &'s str) -> impl Iterator<Item = &'d MonitoredItem> + 's {
        self.monitors
            .iter()
            .copied()
            .filter(move |monitor| monitor.owner_customer_id == customer_id)
    }

    fn customer_visible(&self, customer_id: &str) -> bool {
        self.show_all_customers || self.monitors_of(customer_id).next().is_some()
    }

    fn current_customer_id(&self) -> Option<&str> {
        match self.current() {
            HierarchyView::Customers => None,
            HierarchyView::Monitors { customer_id }
            | HierarchyView::Thresholds { customer_id, .. } => Some(customer_id),
        }
    }

    /// Drill into a customer's monitors from any level
    pub fn select_customer(&mut self, customer_id: &str) -> Result<(), ConsoleError> {
        self.dataset.customer(customer_id)?;
        if !self.customer_visible(customer_id) {
            return Err(ConsoleError::UnknownCustomer(customer_id.to_string()));
        }

        self.stack.truncate(1);
        self.stack.push(HierarchyView::Monitors {
            customer_id: customer_id.to_string(),
        });
        debug!("Navigated to monitors of {}", customer_id);
        Ok(())
    }

    /// Drill into a monitor of the selected customer
    pub fn select_monitor(&mut self, monitor_id: &str) -> Result<(), ConsoleError> {
        let customer_id = self
            .current_customer_id()
            .ok_or(ConsoleError::NoCustomerSelected)?
            .to_string();

        if !self.monitors_of(&customer_id).any(|monitor| monitor.id == monitor_id) {
            return Err(ConsoleError::UnknownMonitor {
                customer: customer_id,
                monitor: monitor_id.to_string(),
            });
        }

        self.stack.truncate(2);
        self.stack.push(HierarchyView::Thresholds {
            customer_id,
            monitor_id: monitor_id.to_string(),
        });
        debug!("Navigated to thresholds of {}", monitor_id);
        Ok(())
    }

    /// Pop one level; returns `false` at the customer list
    pub fn back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    fn monitor_row(&self, monitor: &'d MonitoredItem) -> MonitorRow<'d> {
        MonitorRow {
            monitor,
            tier: classify(StatusSource::Token(monitor.current_status)),
            worst_threshold: worst_tier(
                self.dataset
                    .thresholds
                    .iter()
                    .filter(|rule| rule.monitor_id == monitor.id),
            ),
        }
    }

    /// Content of the current level
    pub fn render(&self) -> Result<HierarchyPage<'d>, ConsoleError> {
        let page = match self.current() {
            HierarchyView::Customers => HierarchyPage::Customers {
                rows: self
                    .dataset
                    .customers
                    .iter()
                    .filter(|customer| self.customer_visible(&customer.id))
                    .map(|customer| CustomerRow {
                        customer,
                        tier: classify(StatusSource::Token(customer.status)),
                        monitor_count: self.monitors_of(&customer.id).count(),
                    })
                    .collect(),
            },
            HierarchyView::Monitors { customer_id } => HierarchyPage::Monitors {
                customer: self.dataset.customer(customer_id)?,
                rows: self
                    .monitors_of(customer_id)
                    .map(|monitor| self.monitor_row(monitor))
                    .collect(),
            },
            HierarchyView::Thresholds {
                customer_id,
                monitor_id,
            } => {
                let monitor = self.dataset.monitor(monitor_id).ok_or_else(|| {
                    ConsoleError::UnknownMonitor {
                        customer: customer_id.clone(),
                        monitor: monitor_id.clone(),
                    }
                })?;
                HierarchyPage::Thresholds {
                    customer: self.dataset.customer(customer_id)?,
                    monitor,
                    rollup: rollup_monitor(&monitor.id, &self.dataset.thresholds),
                }
            }
        };
        Ok(page)
    }
}
