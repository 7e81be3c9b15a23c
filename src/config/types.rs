//! Configuration types for the attendance engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One store in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreEntry {
    /// Backend store identifier.
    pub id: u32,
    /// Display name.
    pub name: String,
}

/// Workday rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkdayConfig {
    /// The daily work-hour boundary beyond which hours count as overtime
    /// for legacy single-segment records.
    pub standard_daily_hours: Decimal,
}

/// The engine configuration: the store registry plus workday rules.
///
/// The deployment currently knows two stores, but the registry is an open
/// mapping — nothing in the engine assumes a fixed count.
///
/// # Example
///
/// ```
/// use attendance_engine::config::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.store_name(1), Some("我家"));
/// assert_eq!(config.store_name(2), Some("Ate"));
/// assert_eq!(config.store_name(9), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Known stores.
    pub stores: Vec<StoreEntry>,
    /// Workday rules.
    pub workday: WorkdayConfig,
}

impl EngineConfig {
    /// Looks up a store's display name by ID.
    pub fn store_name(&self, id: u32) -> Option<&str> {
        self.stores
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.name.as_str())
    }

    /// The store's display name, falling back to the raw ID for stores
    /// missing from the registry so rendering never fails.
    pub fn store_label(&self, id: u32) -> String {
        match self.store_name(id) {
            Some(name) => name.to_string(),
            None => id.to_string(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            stores: vec![
                StoreEntry {
                    id: 1,
                    name: "我家".to_string(),
                },
                StoreEntry {
                    id: 2,
                    name: "Ate".to_string(),
                },
            ],
            workday: WorkdayConfig {
                standard_daily_hours: Decimal::new(8, 0),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_two_seeded_stores() {
        let config = EngineConfig::default();
        assert_eq!(config.stores.len(), 2);
        assert_eq!(config.store_name(1), Some("我家"));
        assert_eq!(config.store_name(2), Some("Ate"));
    }

    #[test]
    fn test_store_label_falls_back_to_id() {
        let config = EngineConfig::default();
        assert_eq!(config.store_label(2), "Ate");
        assert_eq!(config.store_label(7), "7");
    }

    #[test]
    fn test_registry_is_open_ended() {
        let mut config = EngineConfig::default();
        config.stores.push(StoreEntry {
            id: 3,
            name: "新店".to_string(),
        });
        assert_eq!(config.store_name(3), Some("新店"));
    }

    #[test]
    fn test_default_standard_daily_hours_is_eight() {
        let config = EngineConfig::default();
        assert_eq!(config.workday.standard_daily_hours, Decimal::new(8, 0));
    }

    #[test]
    fn test_config_yaml_round_trip() {
        let config = EngineConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let back: EngineConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(config, back);
    }
}
