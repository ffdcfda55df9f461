//! Status Classifier
//!
//! Derives severity tiers from threshold readings and status tiers from
//! qualitative status tokens, rolls thresholds up per monitor, and offers a
//! configuration-time validity check for threshold rules.

mod classifier;
mod error;
mod rollup;
mod validate;

pub use classifier::{
    classify, classify_rule, classify_threshold, status_tier, tier_for_token, SeverityTier,
    StatusSource, StatusTier,
};
pub use error::ThresholdError;
pub use rollup::{rollup_monitor, worst_tier, MonitorRollup, ThresholdReading};
pub use validate::validate_rule;
