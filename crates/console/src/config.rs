//! Console configuration

use access_filter::FacetSelector;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

use crate::error::ConsoleError;

/// Environment variable naming the configuration file
pub const CONFIG_PATH_VAR: &str = "ITSM_CONSOLE_CONFIG";

/// Prefix for environment overrides (`ITSM_ACTOR_ID`, `ITSM_SEARCH`, ...)
pub const ENV_PREFIX: &str = "ITSM";

/// Console configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Actor the views are evaluated for
    pub actor_id: String,
    /// JSON dataset; the built-in sample is used when unset
    pub dataset_path: Option<PathBuf>,
    /// Free-text search applied to alerts and tickets
    pub search: String,
    pub alert_status: FacetSelector,
    pub alert_severity: FacetSelector,
    pub ticket_status: FacetSelector,
    pub ticket_priority: FacetSelector,
    /// Maximum log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Emit logs as JSON lines
    pub json_logs: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            actor_id: "1".to_string(),
            dataset_path: None,
            search: String::new(),
            alert_status: FacetSelector::All,
            alert_severity: FacetSelector::All,
            ticket_status: FacetSelector::All,
            ticket_priority: FacetSelector::All,
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

impl ConsoleConfig {
    /// Load from the file named by `ITSM_CONSOLE_CONFIG` (default
    /// `console.toml`), overridden by `ITSM_*` environment variables
    pub fn load() -> Result<Self, ConsoleError> {
        let path = std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| "console.toml".to_string());
        Self::load_from(&path)
    }

    /// Load from a specific file; a missing file yields the defaults
    pub fn load_from(path: &str) -> Result<Self, ConsoleError> {
        debug!("Loading console configuration from {}", path);
        let settings = ::config::Config::builder()
            .add_source(::config::File::with_name(path).required(false))
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
