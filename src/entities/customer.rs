//! Customers

use crate::closed_enum;
use crate::core::entity::{ClosedEnum, Data};
use crate::core::field::{Field, FieldValue};
use crate::core::filter::{Choice, Clause, FilterState};
use crate::impl_entity;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

closed_enum! {
    pub enum CustomerStatus: "customer status" {
        Active => "활성",
        Withdrawn => "탈퇴",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub nickname: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub registered_at: NaiveDate,
    /// 0 to 100, new customers start at 80
    #[validate(range(max = 100))]
    pub manner_score: u8,
    pub order_count: u32,
    pub status: CustomerStatus,
}

impl_entity!(Customer, CustomerStatus, "customer", "customers");

impl Data for Customer {
    fn field_value(&self, field: &str) -> Option<FieldValue<'_>> {
        match field {
            "id" => Some(FieldValue::text(&self.id)),
            "nickname" => Some(FieldValue::text(&self.nickname)),
            "phone" => Some(FieldValue::text(&self.phone)),
            "email" => self.email.as_deref().map(FieldValue::text),
            "registered_at" => Some(FieldValue::Date(self.registered_at)),
            "manner_score" => Some(FieldValue::Integer(i64::from(self.manner_score))),
            "order_count" => Some(FieldValue::Integer(i64::from(self.order_count))),
            "status" => Some(FieldValue::text(self.status.as_str())),
            _ => None,
        }
    }
}

impl Customer {
    pub const SEARCH_FIELDS: &'static [Field] = &[
        Field::folded("nickname"),
        Field::verbatim("phone"),
        Field::folded("email"),
        Field::verbatim("id"),
    ];

    /// Fields searched by the customer picker
    pub const PICKER_FIELDS: &'static [Field] =
        &[Field::folded("nickname"), Field::verbatim("phone")];
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerFilter {
    pub query: String,
    pub phone: String,
    pub status: Choice<CustomerStatus>,
}

impl FilterState for CustomerFilter {
    type Entity = Customer;

    fn clauses(&self, all_sentinel: &str) -> Vec<Clause> {
        vec![
            Clause::free_text(Customer::SEARCH_FIELDS, &self.query),
            Clause::substring("phone", &self.phone),
            self.status.to_clause("status", all_sentinel),
        ]
    }
}
