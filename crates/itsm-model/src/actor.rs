//! Console actors and their roles

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::Id;

/// Role carried by an actor
///
/// Any token outside the three known roles deserializes to `Unrecognized`
/// rather than failing, so a bad record degrades to "sees nothing".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Administrator,
    SuperUser,
    ReadOnly,
    #[serde(other)]
    Unrecognized,
}

impl Role {
    /// Parse a role token; unknown tokens map to `Unrecognized`
    pub fn from_token(token: &str) -> Self {
        match token {
            "administrator" => Role::Administrator,
            "super-user" => Role::SuperUser,
            "read-only" => Role::ReadOnly,
            _ => Role::Unrecognized,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Administrator => "administrator",
            Role::SuperUser => "super-user",
            Role::ReadOnly => "read-only",
            Role::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authenticated identity whose role and assignments drive visibility
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub id: Id,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub role: Role,
    /// Resources this actor is directly responsible for
    #[serde(default)]
    pub assigned_resource_ids: BTreeSet<Id>,
    /// Projects this actor belongs to
    #[serde(default)]
    pub assigned_project_ids: BTreeSet<Id>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Actor {
    /// Create an actor with no assignments
    pub fn new(id: impl Into<Id>, role: Role) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            email: String::new(),
            role,
            assigned_resource_ids: BTreeSet::new(),
            assigned_project_ids: BTreeSet::new(),
            is_active: true,
        }
    }

    /// Builder-style helper to assign resources
    pub fn with_resources<I, S>(mut self, resources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Id>,
    {
        self.assigned_resource_ids
            .extend(resources.into_iter().map(Into::into));
        self
    }

    /// Whether the given resource is in this actor's assignment set
    pub fn is_assigned_resource(&self, resource_id: &str) -> bool {
        self.assigned_resource_ids.contains(resource_id)
    }
}
