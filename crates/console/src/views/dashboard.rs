//! Dashboard headline counts

use itsm_model::{Alert, AlertSeverity, MonitoredItem, Ticket, TicketStatus};
use serde::Serialize;
use status_classifier::{status_tier, StatusTier};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    /// Active alerts of critical severity
    pub critical_alerts: usize,
    /// Open or in-progress tickets
    pub open_tickets: usize,
    pub resolved_tickets: usize,
    /// Resources whose status token is in the ok tier
    pub healthy_resources: usize,
}

impl DashboardStats {
    /// Count over already access-filtered sets
    pub fn compute(alerts: &[&Alert], tickets: &[&Ticket], resources: &[&MonitoredItem]) -> Self {
        Self {
            critical_alerts: alerts
                .iter()
                .filter(|alert| alert.is_active() && alert.severity == AlertSeverity::Critical)
                .count(),
            open_tickets: tickets.iter().filter(|ticket| ticket.status.is_open()).count(),
            resolved_tickets: tickets
                .iter()
                .filter(|ticket| ticket.status == TicketStatus::Resolved)
                .count(),
            healthy_resources: resources
                .iter()
                .filter(|item| status_tier(item.current_status) == StatusTier::Ok)
                .count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use access_filter::AccessFilter;

    fn stats_for(dataset: &Dataset, actor_id: &str) -> DashboardStats {
        let filter = AccessFilter::new(dataset.actor(actor_id).unwrap());
        DashboardStats::compute(
            &filter.apply(&dataset.alerts),
            &filter.apply(&dataset.tickets),
            &filter.apply(&dataset.monitors),
        )
    }

    #[test]
    fn test_admin_stats() {
        let dataset = Dataset::sample().unwrap();
        assert_eq!(
            stats_for(&dataset, "1"),
            DashboardStats {
                critical_alerts: 1,
                open_tickets: 3,
                resolved_tickets: 1,
                healthy_resources: 2,
            }
        );
    }

    #[test]
    fn test_super_user_stats() {
        let dataset = Dataset::sample().unwrap();
        assert_eq!(
            stats_for(&dataset, "2"),
            DashboardStats {
                critical_alerts: 1,
                open_tickets: 1,
                resolved_tickets: 0,
                healthy_resources: 0,
            }
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(DashboardStats::compute(&[], &[], &[]), DashboardStats::default());
    }
}
