//! Per-monitor rollup of threshold readings

use itsm_model::ThresholdRule;
use serde::Serialize;
use tracing::debug;

use crate::classifier::{classify_rule, SeverityTier};

/// A threshold rule together with its classified tier
#[derive(Debug, Clone, Serialize)]
pub struct ThresholdReading<'a> {
    pub rule: &'a ThresholdRule,
    pub tier: SeverityTier,
}

/// Readings for one monitor and the most severe tier among them
#[derive(Debug, Clone, Serialize)]
pub struct MonitorRollup<'a> {
    pub monitor_id: &'a str,
    pub readings: Vec<ThresholdReading<'a>>,
    pub worst: SeverityTier,
}

/// Most severe tier across a set of rules; `Normal` when there are none
pub fn worst_tier<'a, I>(rules: I) -> SeverityTier
where
    I: IntoIterator<Item = &'a ThresholdRule>,
{
    rules
        .into_iter()
        .map(classify_rule)
        .max()
        .unwrap_or(SeverityTier::Normal)
}

/// Classify every rule belonging to `monitor_id`, preserving input order
pub fn rollup_monitor<'a>(monitor_id: &'a str, rules: &'a [ThresholdRule]) -> MonitorRollup<'a> {
    let readings: Vec<_> = rules
        .iter()
        .filter(|rule| rule.monitor_id == monitor_id)
        .map(|rule| ThresholdReading {
            rule,
            tier: classify_rule(rule),
        })
        .collect();

    let worst = readings
        .iter()
        .map(|reading| reading.tier)
        .max()
        .unwrap_or(SeverityTier::Normal);

    debug!(
        "Monitor {} rollup: {} readings, worst {}",
        monitor_id,
        readings.len(),
        worst
    );

    MonitorRollup {
        monitor_id,
        readings,
        worst,
    }
}
