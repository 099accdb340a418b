//! Seed documents that pre-populate the console

use crate::core::error::ConfigError;
use crate::entities::{
    Banner, Cohort, Coupon, Customer, Order, PushNotification, Report, Review, Settlement, Store,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Every collection the console holds, as loaded from YAML or JSON
///
/// Keys use the camelCase field names of the records themselves; missing
/// collections default to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SeedData {
    pub stores: Vec<Store>,
    pub orders: Vec<Order>,
    pub customers: Vec<Customer>,
    pub settlements: Vec<Settlement>,
    pub reviews: Vec<Review>,
    pub reports: Vec<Report>,
    pub banners: Vec<Banner>,
    pub coupons: Vec<Coupon>,
    pub push_notifications: Vec<PushNotification>,
    pub cohorts: Vec<Cohort>,
}

impl SeedData {
    /// Load a seed document from a YAML file
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

    /// Load a seed document from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let seed: Self = serde_yaml::from_str(yaml)?;
        tracing::debug!(
            stores = seed.stores.len(),
            orders = seed.orders.len(),
            customers = seed.customers.len(),
            banners = seed.banners.len(),
            "seed document parsed"
        );
        Ok(seed)
    }

    /// Load a seed document from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Pretty JSON form of the whole document
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Number of records across all collections
    pub fn record_count(&self) -> usize {
        self.stores.len()
            + self.orders.len()
            + self.customers.len()
            + self.settlements.len()
            + self.reviews.len()
            + self.reports.len()
            + self.banners.len()
            + self.coupons.len()
            + self.push_notifications.len()
            + self.cohorts.len()
    }
}
