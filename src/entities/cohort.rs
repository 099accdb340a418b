//! Customer cohorts used as push targets

use serde::{Deserialize, Serialize};

/// A named customer segment
///
/// Cohorts are reference data for push targeting; they have no status and
/// are looked up by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cohort {
    pub id: String,
    pub name: String,
    pub member_count: u64,
}

/// Find a cohort by its display name
pub fn find_by_name<'a>(cohorts: &'a [Cohort], name: &str) -> Option<&'a Cohort> {
    cohorts.iter().find(|c| c.name == name)
}
