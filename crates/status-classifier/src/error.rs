//! Threshold Validation Errors

use thiserror::Error;

/// Reasons a threshold rule is rejected at configuration time
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ThresholdError {
    /// Level or current value is NaN or infinite
    #[error("{field} of rule {rule_id} is not a finite number: {value}")]
    NonFinite {
        rule_id: String,
        field: &'static str,
        value: f64,
    },

    /// Warning level is not strictly below critical level
    #[error("rule {rule_id}: warning level {warning} must be below critical level {critical}")]
    InvertedLevels {
        rule_id: String,
        warning: f64,
        critical: f64,
    },
}
