//! ITSM Domain Model
//!
//! Entity types shared by the status classifier, the access filter and the
//! console views. The rule crates never create or destroy these; they are
//! supplied by whoever owns the console state.

mod actor;
mod alert;
mod inventory;
mod ticket;

pub use actor::{Actor, Role};
pub use alert::{Alert, AlertSeverity, AlertStatus};
pub use inventory::{Customer, ItemStatus, MonitoredItem, ThresholdRule};
pub use ticket::{Ticket, TicketPriority, TicketState, TicketStatus};

/// Entity identifier as used across the console ("res-1", "cust-2", ...)
pub type Id = String;
