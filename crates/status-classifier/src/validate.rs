//! Configuration-time checks for threshold rules
//!
//! Classification never consults these; they exist for screens that let an
//! administrator edit levels.

use itsm_model::ThresholdRule;
use tracing::warn;

use crate::error::ThresholdError;

fn check_finite(rule: &ThresholdRule, field: &'static str, value: f64) -> Result<(), ThresholdError> {
    if value.is_finite() {
        Ok(())
    } else {
        warn!("Rejecting rule {}: {} is {}", rule.id, field, value);
        Err(ThresholdError::NonFinite {
            rule_id: rule.id.clone(),
            field,
            value,
        })
    }
}

/// Reject non-finite numbers and `warning_level >= critical_level`
pub fn validate_rule(rule: &ThresholdRule) -> Result<(), ThresholdError> {
    check_finite(rule, "warning_level", rule.warning_level)?;
    check_finite(rule, "critical_level", rule.critical_level)?;
    check_finite(rule, "current_value", rule.current_value)?;

    if rule.warning_level >= rule.critical_level {
        warn!(
            "Rejecting rule {}: warning level {} is not below critical level {}",
            rule.id, rule.warning_level, rule.critical_level
        );
        return Err(ThresholdError::InvertedLevels {
            rule_id: rule.id.clone(),
            warning: rule.warning_level,
            critical: rule.critical_level,
        });
    }

    Ok(())
}
