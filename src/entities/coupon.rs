//! Discount coupons issued to customers

use crate::closed_enum;
use crate::core::entity::{ClosedEnum, Data};
use crate::core::error::ConsoleError;
use crate::core::field::{Field, FieldValue};
use crate::core::filter::{Choice, Clause, FilterState};
use crate::impl_entity;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

closed_enum! {
    pub enum CouponStatus: "coupon status" {
        Available => "사용가능",
        Used => "사용완료",
        Expired => "만료",
        Deleted => "삭제",
    }
}

impl CouponStatus {
    /// Only `사용가능` has outgoing edges, and never back to itself
    pub fn can_become(&self, next: CouponStatus) -> bool {
        *self == CouponStatus::Available && next != CouponStatus::Available
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    pub id: String,
    pub code: String,
    pub name: String,
    /// Discount in won
    pub discount: i64,
    pub customer_name: String,
    pub customer_phone: String,
    pub issued_at: NaiveDate,
    pub expires_at: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used_at: Option<NaiveDate>,
    pub status: CouponStatus,
}

impl_entity!(Coupon, CouponStatus, "coupon", "coupons");

impl Data for Coupon {
    fn field_value(&self, field: &str) -> Option<FieldValue<'_>> {
        match field {
            "id" => Some(FieldValue::text(&self.id)),
            "code" => Some(FieldValue::text(&self.code)),
            "name" => Some(FieldValue::text(&self.name)),
            "discount" => Some(FieldValue::Integer(self.discount)),
            "customer_name" => Some(FieldValue::text(&self.customer_name)),
            "customer_phone" => Some(FieldValue::text(&self.customer_phone)),
            "issued_at" => Some(FieldValue::Date(self.issued_at)),
            "expires_at" => Some(FieldValue::Date(self.expires_at)),
            "used_at" => self.used_at.map(FieldValue::Date),
            "status" => Some(FieldValue::text(self.status.as_str())),
            _ => None,
        }
    }
}

impl Coupon {
    pub const SEARCH_FIELDS: &'static [Field] = &[
        Field::folded("customer_name"),
        // phones are digits, so case folding would not change a match
        Field::verbatim("customer_phone"),
        Field::folded("code"),
        Field::folded("name"),
    ];

    /// Expiry date has passed; display only, the status is untouched
    pub fn is_past_expiry(&self, today: NaiveDate) -> bool {
        self.expires_at < today
    }

    fn transition(&mut self, next: CouponStatus) -> Result<(), ConsoleError> {
        if !self.status.can_become(next) {
            return Err(ConsoleError::invalid_transition(self, next));
        }
        self.status = next;
        Ok(())
    }

    pub fn mark_used(&mut self, on: NaiveDate) -> Result<(), ConsoleError> {
        self.transition(CouponStatus::Used)?;
        self.used_at = Some(on);
        Ok(())
    }

    pub fn mark_expired(&mut self) -> Result<(), ConsoleError> {
        self.transition(CouponStatus::Expired)
    }

    pub fn delete(&mut self) -> Result<(), ConsoleError> {
        self.transition(CouponStatus::Deleted)
    }

    /// Push the expiry date out; only usable coupons can be extended
    pub fn extend_to(&mut self, new_expiry: NaiveDate) -> Result<(), ConsoleError> {
        if self.status != CouponStatus::Available {
            return Err(ConsoleError::validation(
                "status",
                format!("only '{}' coupons can be extended", CouponStatus::Available),
            ));
        }
        if new_expiry <= self.expires_at {
            return Err(ConsoleError::validation(
                "expires_at",
                format!("new expiry must be after {}", self.expires_at),
            ));
        }
        self.expires_at = new_expiry;
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CouponFilter {
    pub query: String,
    pub status: Choice<CouponStatus>,
}

impl FilterState for CouponFilter {
    type Entity = Coupon;

    fn clauses(&self, all_sentinel: &str) -> Vec<Clause> {
        vec![
            Clause::free_text(Coupon::SEARCH_FIELDS, &self.query),
            self.status.to_clause("status", all_sentinel),
        ]
    }
}
