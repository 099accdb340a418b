//! Customer reviews of stores

use crate::closed_enum;
use crate::core::entity::{ClosedEnum, Data};
use crate::core::error::ConsoleError;
use crate::core::field::FieldValue;
use crate::core::filter::{Choice, Clause, FilterState};
use crate::impl_entity;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

closed_enum! {
    pub enum ReviewStatus: "review status" {
        Visible => "정상",
        Hidden => "숨김",
        Deleted => "삭제",
    }
}

impl ReviewStatus {
    /// Moderation edges: hide and unhide freely, delete is final
    pub fn can_become(&self, next: ReviewStatus) -> bool {
        matches!(
            (self, next),
            (ReviewStatus::Visible, ReviewStatus::Hidden)
                | (ReviewStatus::Hidden, ReviewStatus::Visible)
                | (ReviewStatus::Visible, ReviewStatus::Deleted)
                | (ReviewStatus::Hidden, ReviewStatus::Deleted)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub store_name: String,
    pub customer_phone: String,
    pub order_date: NaiveDate,
    pub review_date: NaiveDate,
    /// 1 to 5
    #[validate(range(min = 1, max = 5))]
    pub rating: u8,
    pub content: String,
    pub status: ReviewStatus,
}

impl_entity!(Review, ReviewStatus, "review", "reviews");

impl Data for Review {
    fn field_value(&self, field: &str) -> Option<FieldValue<'_>> {
        match field {
            "id" => Some(FieldValue::text(&self.id)),
            "store_name" => Some(FieldValue::text(&self.store_name)),
            "customer_phone" => Some(FieldValue::text(&self.customer_phone)),
            "order_date" => Some(FieldValue::Date(self.order_date)),
            "review_date" => Some(FieldValue::Date(self.review_date)),
            "rating" => Some(FieldValue::Integer(i64::from(self.rating))),
            "content" => Some(FieldValue::text(&self.content)),
            "status" => Some(FieldValue::text(self.status.as_str())),
            _ => None,
        }
    }
}

impl Review {
    pub fn moderate(&mut self, next: ReviewStatus) -> Result<(), ConsoleError> {
        if !self.status.can_become(next) {
            return Err(ConsoleError::invalid_transition(self, next));
        }
        self.status = next;
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewFilter {
    pub store_name: String,
    pub customer_phone: String,
    pub status: Choice<ReviewStatus>,
}

impl FilterState for ReviewFilter {
    type Entity = Review;

    fn clauses(&self, all_sentinel: &str) -> Vec<Clause> {
        vec![
            Clause::substring("store_name", &self.store_name),
            Clause::substring("customer_phone", &self.customer_phone),
            self.status.to_clause("status", all_sentinel),
        ]
    }
}
