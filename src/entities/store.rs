//! Stores (seller shops)

use crate::closed_enum;
use crate::core::entity::{ClosedEnum, Data};
use crate::core::field::{Field, FieldValue};
use crate::core::filter::{Choice, Clause, FilterState};
use crate::impl_entity;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

closed_enum! {
    /// Review and operating state of a store
    pub enum StoreStatus: "store status" {
        Draft => "작성중",
        UnderReview => "심사중",
        Approved => "심사완료",
        TemporarilyClosed => "임시휴무",
        Withdrawn => "탈퇴",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: String,
    pub name: String,
    pub region: String,
    pub category: String,
    pub registered_at: NaiveDate,
    pub status: StoreStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl_entity!(Store, StoreStatus, "store", "stores");

impl Data for Store {
    fn field_value(&self, field: &str) -> Option<FieldValue<'_>> {
        match field {
            "id" => Some(FieldValue::text(&self.id)),
            "name" => Some(FieldValue::text(&self.name)),
            "region" => Some(FieldValue::text(&self.region)),
            "category" => Some(FieldValue::text(&self.category)),
            "registered_at" => Some(FieldValue::Date(self.registered_at)),
            "status" => Some(FieldValue::text(self.status.as_str())),
            "owner_name" => self.owner_name.as_deref().map(FieldValue::text),
            "owner_phone" => self.owner_phone.as_deref().map(FieldValue::text),
            "owner_email" => self.owner_email.as_deref().map(FieldValue::text),
            "address" => self.address.as_deref().map(FieldValue::text),
            _ => None,
        }
    }
}

impl Store {
    /// Fields searched by the free-text box of both store lists
    pub const SEARCH_FIELDS: &'static [Field] = &[
        Field::folded("name"),
        Field::folded("region"),
        Field::folded("category"),
        Field::folded("owner_name"),
        Field::verbatim("owner_phone"),
        Field::folded("address"),
    ];

    /// Fields searched by the store picker
    pub const PICKER_FIELDS: &'static [Field] =
        &[Field::folded("name"), Field::verbatim("owner_phone")];

    /// Listed on the operating stores page
    pub fn is_operating(&self) -> bool {
        self.status == StoreStatus::Approved
    }
}

/// Filters of the operating stores list (approved stores only)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreFilter {
    pub query: String,
    pub name: String,
    pub region: Choice<String>,
}

impl FilterState for StoreFilter {
    type Entity = Store;

    fn clauses(&self, all_sentinel: &str) -> Vec<Clause> {
        vec![
            Clause::exact("status", StoreStatus::Approved.as_str(), all_sentinel),
            Clause::free_text(Store::SEARCH_FIELDS, &self.query),
            Clause::substring("name", &self.name),
            self.region.to_clause("region", all_sentinel),
        ]
    }
}

/// Filters of the store settings list (every status)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreSettingsFilter {
    pub query: String,
    /// Selected status card, `None` for the total card
    pub status: Option<StoreStatus>,
    pub region: Choice<String>,
}

impl FilterState for StoreSettingsFilter {
    type Entity = Store;

    fn clauses(&self, all_sentinel: &str) -> Vec<Clause> {
        vec![
            Clause::free_text(Store::SEARCH_FIELDS, &self.query),
            Choice::from(self.status).to_clause("status", all_sentinel),
            self.region.to_clause("region", all_sentinel),
        ]
    }
}
