//! Configuration loading and management

pub mod seed;

pub use seed::SeedData;

use crate::core::error::ConfigError;
use crate::core::filter::ALL_SENTINEL;
use crate::core::query::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::core::stats::MannerBands;
use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

/// Tunables of the admin console
///
/// Every field has a default, so an empty YAML document is a valid
/// configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Select-box value meaning "no constraint"
    #[validate(length(min = 1))]
    pub all_sentinel: String,

    /// Rows per list page
    #[validate(range(min = 1, max = 100))]
    pub page_size: usize,

    /// Lifetime of a newly issued coupon
    #[validate(range(min = 1, max = 3650))]
    pub coupon_validity_days: i64,

    /// Days added by one expiry extension
    #[validate(range(min = 1, max = 3650))]
    pub coupon_extension_days: i64,

    /// Manner score band thresholds
    #[validate(nested)]
    pub manner_bands: MannerBands,

    /// Estimated recipients per customer for an all-customers push
    #[validate(range(min = 1, max = 10_000))]
    pub all_customers_push_multiplier: u64,

    /// Maximum suggestions returned by the customer/store pickers
    #[validate(range(min = 1))]
    pub picker_limit: usize,

    /// Rows shown in each dashboard preview list
    #[validate(range(min = 1))]
    pub dashboard_preview_limit: usize,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            all_sentinel: ALL_SENTINEL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            coupon_validity_days: 30,
            coupon_extension_days: 30,
            manner_bands: MannerBands::default(),
            all_customers_push_multiplier: 100,
            picker_limit: 5,
            dashboard_preview_limit: 5,
        }
    }
}

impl ConsoleConfig {
    /// Load and validate configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&content).map_err(|err| match err {
            ConfigError::Parse { message, .. } => ConfigError::Parse {
                file: Some(path.display().to_string()),
                message,
            },
            other => other,
        })
    }

    /// Load and validate configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        tracing::debug!(
            page_size = config.page_size,
            picker_limit = config.picker_limit,
            "console config loaded"
        );
        Ok(config)
    }

    /// Page size usable by [`PageRequest`](crate::core::query::PageRequest)
    pub fn page_size(&self) -> usize {
        self.page_size.clamp(1, MAX_PAGE_SIZE)
    }
}
