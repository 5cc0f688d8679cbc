use std::collections::{HashMap, HashSet};

use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::domain::normalizer::RawAgent;

/// Process-wide configuration: layered `config/default` + `config/{RUN_ENV}`
/// + `APP__`-prefixed environment overrides, per the corpus's `config`
/// layering convention. Immutable once loaded and shared read-only across
/// requests via `AppState`.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub roster: RosterSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// Everything the roster-building "Configuration loader" collaborator
/// supplies: the agent roster, the shift durations (decimal hours, `Conge`
/// included for leave credit), and the holiday set.
#[derive(Debug, Deserialize, Clone)]
pub struct RosterSettings {
    pub agents: Vec<RawAgent>,
    pub durations: HashMap<String, f64>,
    /// (month, day) pairs.
    #[serde(default)]
    pub holidays: Vec<(u32, u32)>,
}

impl RosterSettings {
    pub fn holiday_set(&self) -> HashSet<(u32, u32)> {
        self.holidays.iter().copied().collect()
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".to_string());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{environment}")).required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
