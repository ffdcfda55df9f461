//! What the access filter needs to know about an item

use itsm_model::{Alert, MonitoredItem, Ticket};

/// An item whose visibility depends on resource scope and assignment
pub trait Visible {
    /// Resource the item belongs to, if any
    fn resource_id(&self) -> Option<&str>;

    /// Whether the actor is assigned to this item itself
    fn is_assigned_to(&self, actor_id: &str) -> bool;
}

impl Visible for Alert {
    fn resource_id(&self) -> Option<&str> {
        Some(&self.resource_id)
    }

    fn is_assigned_to(&self, actor_id: &str) -> bool {
        self.assigned_actor_ids.contains(actor_id)
    }
}

impl Visible for Ticket {
    fn resource_id(&self) -> Option<&str> {
        self.resource_id.as_deref()
    }

    fn is_assigned_to(&self, actor_id: &str) -> bool {
        self.assigned_to == actor_id || self.assigned_by == actor_id
    }
}

impl Visible for MonitoredItem {
    fn resource_id(&self) -> Option<&str> {
        Some(&self.id)
    }

    fn is_assigned_to(&self, actor_id: &str) -> bool {
        self.assigned_actor_ids.contains(actor_id)
    }
}
