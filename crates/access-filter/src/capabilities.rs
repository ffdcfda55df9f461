//! Role gating of console actions

use itsm_model::{Actor, Alert, Role, Ticket};
use serde::Serialize;

/// Actions an actor may take, derived from its role and the item's state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Capabilities {
    role: Role,
}

impl Capabilities {
    pub fn for_actor(actor: &Actor) -> Self {
        Self { role: actor.role }
    }

    pub fn for_role(role: Role) -> Self {
        Self { role }
    }

    // Unrecognized roles never write
    fn can_write(&self) -> bool {
        matches!(self.role, Role::Administrator | Role::SuperUser)
    }

    fn is_admin(&self) -> bool {
        self.role == Role::Administrator
    }

    /// Open a ticket for an active alert that has none yet
    pub fn can_create_ticket_from(&self, alert: &Alert) -> bool {
        self.can_write() && alert.is_active() && alert.linked_ticket_id().is_none()
    }

    pub fn can_acknowledge(&self, alert: &Alert) -> bool {
        self.can_write() && alert.is_active()
    }

    /// Open a standalone ticket
    pub fn can_create_ticket(&self) -> bool {
        self.can_write()
    }

    /// Change status of a ticket that is not yet resolved or closed
    pub fn can_update_ticket(&self, ticket: &Ticket) -> bool {
        self.can_write() && !ticket.status.is_finished()
    }

    pub fn can_manage_resources(&self) -> bool {
        self.is_admin()
    }

    pub fn can_manage_users(&self) -> bool {
        self.is_admin()
    }

    pub fn can_manage_integrations(&self) -> bool {
        self.is_admin()
    }
}
