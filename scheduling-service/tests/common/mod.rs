use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use scheduling_service::api::state::AppState;
use scheduling_service::domain::normalizer::RawAgent;
use scheduling_service::infrastructure::config::{RosterSettings, ServerSettings, Settings};

/// Flat durations matching `original_source`'s defaults: Day/Night 8h,
/// ControlDesk 7h, Conge (leave credit) 8h -- all in decimal hours, scaled
/// to tenths inside the scheduler.
pub fn flat_durations() -> HashMap<String, f64> {
    let mut durations = HashMap::new();
    durations.insert("Day".to_string(), 8.0);
    durations.insert("Night".to_string(), 10.0);
    durations.insert("ControlDesk".to_string(), 7.0);
    durations.insert("Conge".to_string(), 8.0);
    durations
}

pub fn plain_agent(name: &str) -> RawAgent {
    RawAgent {
        name: name.to_string(),
        ..Default::default()
    }
}

/// Build a test `AppState` from a roster of raw agents, no holidays.
pub fn test_state(agents: Vec<RawAgent>) -> AppState {
    let settings = Settings {
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        roster: RosterSettings {
            agents,
            durations: flat_durations(),
            holidays: Vec::new(),
        },
    };
    AppState::new(Arc::new(settings))
}

/// Feb 9 2026 is a Monday -- the fixed horizon start used across tests.
pub fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 9).unwrap()
}
