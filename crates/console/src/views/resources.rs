//! Resources view

use access_filter::{AccessFilter, Refinement};
use itsm_model::{Actor, MonitoredItem};
use serde::Serialize;
use status_classifier::{classify, StatusSource, StatusTier};

#[derive(Debug, Serialize)]
pub struct ResourceRow<'a> {
    pub item: &'a MonitoredItem,
    pub tier: StatusTier,
}

/// Monitored items visible to `actor` whose name or type matches `search`
pub fn resource_view<'a>(actor: &Actor, monitors: &'a [MonitoredItem], search: &str) -> Vec<ResourceRow<'a>> {
    let visible = AccessFilter::new(actor).apply(monitors);
    Refinement::new()
        .search(search)
        .apply(visible)
        .into_iter()
        .map(|item| ResourceRow {
            item,
            tier: classify(StatusSource::Token(item.current_status)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;

    #[test]
    fn test_rows_carry_tiers() {
        let dataset = Dataset::sample().unwrap();
        let rows = resource_view(dataset.actor("1").unwrap(), &dataset.monitors, "");
        let tiers: Vec<_> = rows.iter().map(|row| row.tier).collect();
        assert_eq!(
            tiers,
            vec![
                StatusTier::Critical,
                StatusTier::Warning,
                StatusTier::Ok,
                StatusTier::Ok,
                StatusTier::Warning,
            ]
        );
    }

    #[test]
    fn test_scoped_and_searched() {
        let dataset = Dataset::sample().unwrap();
        let rows = resource_view(dataset.actor("2").unwrap(), &dataset.monitors, "");
        let ids: Vec<_> = rows.iter().map(|row| row.item.id.as_str()).collect();
        assert_eq!(ids, vec!["res-1", "res-2"]);

        let rows = resource_view(dataset.actor("1").unwrap(), &dataset.monitors, "mysql");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].item.name, "Database Server");
    }
}
