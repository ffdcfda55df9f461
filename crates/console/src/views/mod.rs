//! Console views
//!
//! Each view takes the actor and the entities it shows, runs them through the
//! access filter first and refinements second, and returns borrowed rows.

pub mod alerts;
pub mod dashboard;
pub mod hierarchy;
pub mod resources;
pub mod tickets;

pub use alerts::{alert_view, AlertQuery, AlertRow, AlertView};
pub use dashboard::DashboardStats;
pub use hierarchy::{HierarchyPage, HierarchyView, Navigator};
pub use resources::{resource_view, ResourceRow};
pub use tickets::{customer_summaries, ticket_view, CustomerTicketSummary, TicketQuery, TicketView};
