//! Configuration for FAQ service module

use crate::contract::StoreId;
use crate::domain::RewritePaths;
use serde::{Deserialize, Serialize};

/// FAQ service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// First segment of generated request paths
    #[serde(default = "default_question_path")]
    pub question_path: String,

    /// Suffix appended to generated request paths
    #[serde(default = "default_url_suffix")]
    pub url_suffix: String,

    /// Storefront views known to the store manager
    #[serde(default = "default_stores")]
    pub stores: Vec<StoreConfig>,

    /// Store serving requests; defaults to the first active store
    #[serde(default)]
    pub current_store: Option<StoreId>,
}

/// Storefront view definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    pub store_id: StoreId,
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            question_path: default_question_path(),
            url_suffix: default_url_suffix(),
            stores: default_stores(),
            current_store: None,
        }
    }
}

impl Config {
    pub fn rewrite_paths(&self) -> RewritePaths {
        RewritePaths {
            question_path: self.question_path.clone(),
            url_suffix: self.url_suffix.clone(),
        }
    }

    /// Check the question path and store definitions for clashes
    pub fn validate(&self) -> anyhow::Result<()> {
        self.rewrite_paths().check_question_path()?;

        for (index, store) in self.stores.iter().enumerate() {
            if store.store_id <= 0 {
                anyhow::bail!(
                    "store '{}' must have a positive store_id, got {}",
                    store.code,
                    store.store_id
                );
            }
            if self.stores[..index]
                .iter()
                .any(|other| other.store_id == store.store_id || other.code == store.code)
            {
                anyhow::bail!("store '{}' (id {}) is defined twice", store.code, store.store_id);
            }
        }

        if let Some(current) = self.current_store {
            if !self.stores.iter().any(|store| store.store_id == current) {
                anyhow::bail!("current_store {} is not a configured store", current);
            }
        }

        Ok(())
    }
}

fn default_question_path() -> String {
    "faq".to_string()
}

fn default_url_suffix() -> String {
    ".html".to_string()
}

fn default_stores() -> Vec<StoreConfig> {
    vec![StoreConfig {
        store_id: 1,
        code: "default".to_string(),
        name: "Default Store View".to_string(),
        is_active: true,
    }]
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_describe_single_store_install() {
        let config = Config::default();
        assert_eq!(config.question_path, "faq");
        assert_eq!(config.url_suffix, ".html");
        assert_eq!(config.stores.len(), 1);
        assert_eq!(config.stores[0].store_id, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = serde_json::from_value(serde_json::json!({
            "stores": [
                { "store_id": 1, "code": "en" },
                { "store_id": 2, "code": "fr", "is_active": false }
            ]
        }))
        .expect("config should deserialize");

        assert_eq!(config.url_suffix, ".html");
        assert!(config.stores[0].is_active);
        assert!(!config.stores[1].is_active);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: Result<Config, _> =
            serde_json::from_value(serde_json::json!({ "question_prefix": "help" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_bad_stores() {
        let mut config = Config::default();
        config.stores.push(StoreConfig {
            store_id: 1,
            code: "copy".to_string(),
            name: String::new(),
            is_active: true,
        });
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.stores[0].store_id = 0;
        assert!(config.validate().is_err());

        let config = Config {
            current_store: Some(9),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_question_path_on_api_routes() {
        let config = Config {
            question_path: "faqs".to_string(),
            ..Config::default()
        };
        let err = config.validate().expect_err("faqs is taken by the REST API");
        assert!(err.to_string().contains("/faqs"));

        let config = Config {
            question_path: "help".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }
}
