//! Threshold and token classification

use itsm_model::{ItemStatus, ThresholdRule};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tier derived from comparing a reading against its thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeverityTier {
    Normal,
    Warning,
    Critical,
}

impl SeverityTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityTier::Normal => "normal",
            SeverityTier::Warning => "warning",
            SeverityTier::Critical => "critical",
        }
    }
}

impl fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse tier for entities carrying a qualitative status token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusTier {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl StatusTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusTier::Ok => "ok",
            StatusTier::Warning => "warning",
            StatusTier::Critical => "critical",
            StatusTier::Unknown => "unknown",
        }
    }
}

impl fmt::Display for StatusTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<SeverityTier> for StatusTier {
    fn from(tier: SeverityTier) -> Self {
        match tier {
            SeverityTier::Normal => StatusTier::Ok,
            SeverityTier::Warning => StatusTier::Warning,
            SeverityTier::Critical => StatusTier::Critical,
        }
    }
}

/// Classify a reading against its warning and critical levels.
///
/// Comparisons are strict: a value equal to a level does not reach that
/// level's tier. Inverted or negative levels are not rejected; the same
/// three-branch rule applies.
pub fn classify_threshold(current_value: f64, warning_level: f64, critical_level: f64) -> SeverityTier {
    if current_value > critical_level {
        SeverityTier::Critical
    } else if current_value > warning_level {
        SeverityTier::Warning
    } else {
        SeverityTier::Normal
    }
}

/// Classify a configured threshold rule by its current value
pub fn classify_rule(rule: &ThresholdRule) -> SeverityTier {
    classify_threshold(rule.current_value, rule.warning_level, rule.critical_level)
}

/// Tier for a typed status token
pub fn status_tier(status: ItemStatus) -> StatusTier {
    match status {
        ItemStatus::Healthy | ItemStatus::Up => StatusTier::Ok,
        ItemStatus::Warning => StatusTier::Warning,
        ItemStatus::Critical | ItemStatus::Down => StatusTier::Critical,
        ItemStatus::Unknown => StatusTier::Unknown,
    }
}

/// Tier for a raw status token; unrecognized tokens are `Unknown`
pub fn tier_for_token(token: &str) -> StatusTier {
    status_tier(ItemStatus::from_token(token))
}

/// Input to the unified classifier
#[derive(Debug, Clone, Copy)]
pub enum StatusSource<'a> {
    /// Entity already carrying a qualitative status
    Token(ItemStatus),
    /// Raw token as received from a view or data feed
    RawToken(&'a str),
    /// Measured value against a threshold rule
    Reading(&'a ThresholdRule),
}

/// Single entry point for views that only need a display tier
pub fn classify(source: StatusSource<'_>) -> StatusTier {
    match source {
        StatusSource::Token(status) => status_tier(status),
        StatusSource::RawToken(token) => tier_for_token(token),
        StatusSource::Reading(rule) => classify_rule(rule).into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_boundaries_are_strict() {
        assert_eq!(classify_threshold(5000.0, 2000.0, 5000.0), SeverityTier::Warning);
        assert_eq!(classify_threshold(5001.0, 2000.0, 5000.0), SeverityTier::Critical);
        assert_eq!(classify_threshold(2000.0, 2000.0, 5000.0), SeverityTier::Normal);
        assert_eq!(classify_threshold(2000.5, 2000.0, 5000.0), SeverityTier::Warning);
    }

    #[test]
    fn test_response_time_over_critical() {
        let mut rule = ThresholdRule::new("thresh-1", "mon-1", 2000.0, 5000.0, 6500.0);
        rule.unit = "ms".to_string();
        assert_eq!(classify_rule(&rule), SeverityTier::Critical);
    }

    #[test]
    fn test_unit_does_not_matter() {
        let mut rule = ThresholdRule::new("thresh-3", "mon-1", 80.0, 95.0, 85.0);
        let before = classify_rule(&rule);
        rule.unit = "%".to_string();
        assert_eq!(classify_rule(&rule), before);
        assert_eq!(before, SeverityTier::Warning);
    }

    #[test]
    fn test_inverted_levels_pass_through() {
        // warning above critical: the critical branch is checked first
        assert_eq!(classify_threshold(60.0, 90.0, 50.0), SeverityTier::Critical);
        assert_eq!(classify_threshold(40.0, 90.0, 50.0), SeverityTier::Normal);
        assert_eq!(classify_threshold(-10.0, -20.0, -5.0), SeverityTier::Warning);
    }

    #[test]
    fn test_token_tiers() {
        assert_eq!(tier_for_token("healthy"), StatusTier::Ok);
        assert_eq!(tier_for_token("up"), StatusTier::Ok);
        assert_eq!(tier_for_token("warning"), StatusTier::Warning);
        assert_eq!(tier_for_token("critical"), StatusTier::Critical);
        assert_eq!(tier_for_token("down"), StatusTier::Critical);
        assert_eq!(tier_for_token("trouble"), StatusTier::Unknown);
        assert_eq!(tier_for_token(""), StatusTier::Unknown);
    }

    #[test]
    fn test_unified_sources() {
        let rule = ThresholdRule::new("thresh-2", "mon-1", 70.0, 90.0, 50.0);
        assert_eq!(classify(StatusSource::Reading(&rule)), StatusTier::Ok);
        assert_eq!(classify(StatusSource::Token(ItemStatus::Down)), StatusTier::Critical);
        assert_eq!(classify(StatusSource::RawToken("warning")), StatusTier::Warning);
    }

    proptest! {
        #[test]
        fn prop_monotonic_in_current_value(
            warning in 0.001f64..1.0e6,
            gap in 0.001f64..1.0e6,
            a in -1.0e7f64..1.0e7,
            b in -1.0e7f64..1.0e7,
        ) {
            let critical = warning + gap;
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(
                classify_threshold(lo, warning, critical) <= classify_threshold(hi, warning, critical)
            );
        }

        #[test]
        fn prop_matches_three_branch_rule(
            warning in 0.001f64..1.0e6,
            gap in 0.001f64..1.0e6,
            current in -1.0e7f64..1.0e7,
        ) {
            let critical = warning + gap;
            let expected = if current > critical {
                SeverityTier::Critical
            } else if current > warning {
                SeverityTier::Warning
            } else {
                SeverityTier::Normal
            };
            prop_assert_eq!(classify_threshold(current, warning, critical), expected);
        }
    }
}
