//! Role-based Access Filter

use itsm_model::{Actor, Role};
use tracing::{debug, warn};

use crate::visibility::Visible;

/// Visibility rule for one actor
///
/// - administrator: everything
/// - super-user: items assigned to the actor, or on one of its resources
/// - read-only: items on one of its resources
/// - anything else: nothing
pub struct AccessFilter<'a> {
    actor: &'a Actor,
}

impl<'a> AccessFilter<'a> {
    /// Create a filter for the given actor
    pub fn new(actor: &'a Actor) -> Self {
        Self { actor }
    }

    fn in_scope<T: Visible + ?Sized>(&self, item: &T) -> bool {
        item.resource_id()
            .map_or(false, |resource| self.actor.is_assigned_resource(resource))
    }

    /// Whether a single item is visible to the actor
    pub fn can_see<T: Visible + ?Sized>(&self, item: &T) -> bool {
        match self.actor.role {
            Role::Administrator => true,
            Role::SuperUser => item.is_assigned_to(&self.actor.id) || self.in_scope(item),
            Role::ReadOnly => self.in_scope(item),
            Role::Unrecognized => false,
        }
    }

    /// Visible subset of `items`, in input order
    pub fn apply<'i, T, I>(&self, items: I) -> Vec<&'i T>
    where
        T: Visible + 'i,
        I: IntoIterator<Item = &'i T>,
    {
        if self.actor.role == Role::Unrecognized {
            warn!("Actor {} has an unrecognized role; nothing is visible", self.actor.id);
            return Vec::new();
        }

        let mut total = 0usize;
        let visible: Vec<_> = items
            .into_iter()
            .inspect(|_| total += 1)
            .filter(|item| self.can_see(*item))
            .collect();

        debug!(
            "Access filter for {} ({}): {} of {} visible",
            self.actor.id,
            self.actor.role,
            visible.len(),
            total
        );
        visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use itsm_model::{
        Alert, AlertSeverity, ItemStatus, MonitoredItem, Ticket, TicketPriority, TicketState,
        TicketStatus,
    };
    use proptest::prelude::*;

    fn alert(id: &str, resource: &str, assignees: &[&str]) -> Alert {
        let mut alert = Alert::new(id, resource, AlertSeverity::High, Utc::now());
        alert
            .assigned_actor_ids
            .extend(assignees.iter().map(|a| a.to_string()));
        alert
    }

    fn five_alerts() -> Vec<Alert> {
        vec![
            alert("a1", "res-3", &[]),
            alert("a2", "res-1", &[]),
            alert("a3", "res-9", &["u1"]),
            alert("a4", "res-2", &["u7"]),
            alert("a5", "res-4", &[]),
        ]
    }

    fn ids<'a>(items: &[&'a Alert]) -> Vec<&'a str> {
        items.iter().map(|a| a.id.as_str()).collect()
    }

    #[test]
    fn test_administrator_sees_everything_in_order() {
        let actor = Actor::new("1", Role::Administrator);
        let alerts = five_alerts();
        let visible = AccessFilter::new(&actor).apply(&alerts);
        assert_eq!(ids(&visible), vec!["a1", "a2", "a3", "a4", "a5"]);
    }

    #[test]
    fn test_read_only_sees_assigned_resources_only() {
        let actor = Actor::new("u1", Role::ReadOnly).with_resources(["res-1"]);
        let alerts = five_alerts();
        let visible = AccessFilter::new(&actor).apply(&alerts);
        // a3 is assigned to u1 but that does not matter for read-only
        assert_eq!(ids(&visible), vec!["a2"]);
    }

    #[test]
    fn test_super_user_assignment_or_resource() {
        let actor = Actor::new("u1", Role::SuperUser);
        let alerts = five_alerts();
        let visible = AccessFilter::new(&actor).apply(&alerts);
        assert_eq!(ids(&visible), vec!["a3"]);

        let actor = Actor::new("u1", Role::SuperUser).with_resources(["res-2"]);
        let visible = AccessFilter::new(&actor).apply(&alerts);
        assert_eq!(ids(&visible), vec!["a3", "a4"]);
    }

    #[test]
    fn test_unrecognized_role_fails_closed() {
        let actor = Actor::new("u1", Role::from_token("guest"))
            .with_resources(["res-1", "res-2", "res-3", "res-4", "res-9"]);
        let alerts = five_alerts();
        assert!(AccessFilter::new(&actor).apply(&alerts).is_empty());
        assert!(!AccessFilter::new(&actor).can_see(&alerts[0]));
    }

    #[test]
    fn test_resources_use_their_own_id() {
        let mut web = MonitoredItem {
            id: "res-1".to_string(),
            name: "Production Web Server".to_string(),
            kind: "HTTP".to_string(),
            owner_customer_id: "cust-1".to_string(),
            current_status: ItemStatus::Down,
            assigned_actor_ids: Default::default(),
        };
        let reader = Actor::new("u3", Role::ReadOnly).with_resources(["res-1"]);
        let other = Actor::new("u4", Role::SuperUser);

        assert!(AccessFilter::new(&reader).can_see(&web));
        assert!(!AccessFilter::new(&other).can_see(&web));

        web.assigned_actor_ids.insert("u4".to_string());
        assert!(AccessFilter::new(&other).can_see(&web));
    }

    fn ticket(id: &str, resource: Option<&str>, assigned_to: &str, assigned_by: &str) -> Ticket {
        let now = Utc::now();
        Ticket {
            id: id.to_string(),
            title: format!("Ticket {id}"),
            description: String::new(),
            status: TicketStatus::Open,
            priority: TicketPriority::Medium,
            assigned_to: assigned_to.to_string(),
            assigned_by: assigned_by.to_string(),
            alert_id: None,
            resource_id: resource.map(str::to_string),
            customer_id: "cust-1".to_string(),
            customer_name: "Acme Corporation".to_string(),
            state: TicketState::OnTime,
            created_at: now,
            updated_at: now,
        }
    }

    fn ticket_ids<'a>(items: &[&'a Ticket]) -> Vec<&'a str> {
        items.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_super_user_sees_tickets_they_assigned() {
        let actor = Actor::new("u1", Role::SuperUser);
        let tickets = vec![
            ticket("t1", Some("res-5"), "u3", "u1"),
            ticket("t2", Some("res-5"), "u3", "system"),
            ticket("t3", Some("res-5"), "u1", "system"),
        ];
        let visible = AccessFilter::new(&actor).apply(&tickets);
        assert_eq!(ticket_ids(&visible), vec!["t1", "t3"]);
    }

    #[test]
    fn test_ticket_without_resource() {
        let tickets = vec![ticket("t1", None, "u1", "system"), ticket("t2", None, "u3", "u3")];

        // read-only scope needs a resource, even for the ticket owner
        let reader = Actor::new("u1", Role::ReadOnly).with_resources(["res-1"]);
        assert!(AccessFilter::new(&reader).apply(&tickets).is_empty());

        let superuser = Actor::new("u1", Role::SuperUser).with_resources(["res-1"]);
        let visible = AccessFilter::new(&superuser).apply(&tickets);
        assert_eq!(ticket_ids(&visible), vec!["t1"]);

        let admin = Actor::new("u9", Role::Administrator);
        assert_eq!(AccessFilter::new(&admin).apply(&tickets).len(), 2);
    }

    fn role_strategy() -> impl Strategy<Value = Role> {
        prop_oneof![
            Just(Role::Administrator),
            Just(Role::SuperUser),
            Just(Role::ReadOnly),
            Just(Role::Unrecognized),
        ]
    }

    proptest! {
        #[test]
        fn prop_filter_is_idempotent(
            role in role_strategy(),
            assigned in proptest::collection::btree_set(0u8..6, 0..4),
            cases in proptest::collection::vec((0u8..6, proptest::option::of(0u8..4)), 0..12),
        ) {
            let actor = Actor::new("u1", role)
                .with_resources(assigned.iter().map(|r| format!("res-{r}")));
            let alerts: Vec<Alert> = cases
                .iter()
                .enumerate()
                .map(|(i, (res, who))| {
                    let assignee = who.map(|w| format!("u{w}"));
                    let assignees: Vec<&str> = assignee.iter().map(String::as_str).collect();
                    alert(&format!("a{i}"), &format!("res-{res}"), &assignees)
                })
                .collect();

            let filter = AccessFilter::new(&actor);
            let once = filter.apply(&alerts);
            let twice = filter.apply(once.iter().copied());
            prop_assert_eq!(ids(&once), ids(&twice));
        }
    }
}
