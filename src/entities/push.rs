//! Push notifications

use crate::closed_enum;
use crate::core::entity::{ClosedEnum, Data};
use crate::core::error::ConsoleError;
use crate::core::field::FieldValue;
use crate::core::filter::{Choice, Clause, FilterState};
use crate::core::stats;
use crate::impl_entity;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

closed_enum! {
    /// Audience of a push notification
    pub enum PushTarget: "push target" {
        AllCustomers => "전체고객",
        AllSellers => "전체판매자",
        Cohort => "코호트",
        Customer => "특정고객",
        Seller => "특정판매자",
    }
}

impl PushTarget {
    /// Targets that name a cohort, customer or seller in `target_detail`
    pub fn needs_detail(&self) -> bool {
        matches!(
            self,
            PushTarget::Cohort | PushTarget::Customer | PushTarget::Seller
        )
    }
}

closed_enum! {
    pub enum PushStatus: "push status" {
        Scheduled => "발송예정",
        Sent => "발송완료",
        Failed => "발송실패",
        Cancelled => "취소",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushNotification {
    pub id: String,
    pub title: String,
    pub message: String,
    pub target_type: PushTarget,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_detail: Option<String>,
    #[serde(with = "crate::entities::timestamp")]
    pub scheduled_at: NaiveDateTime,
    pub target_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_count: Option<u64>,
    pub created_at: NaiveDate,
    pub status: PushStatus,
}

impl_entity!(PushNotification, PushStatus, "push notification", "push notifications");

impl Data for PushNotification {
    fn field_value(&self, field: &str) -> Option<FieldValue<'_>> {
        match field {
            "id" => Some(FieldValue::text(&self.id)),
            "title" => Some(FieldValue::text(&self.title)),
            "message" => Some(FieldValue::text(&self.message)),
            "target_type" => Some(FieldValue::text(self.target_type.as_str())),
            "target_detail" => self.target_detail.as_deref().map(FieldValue::text),
            "scheduled_at" => Some(FieldValue::DateTime(self.scheduled_at)),
            "created_at" => Some(FieldValue::Date(self.created_at)),
            "status" => Some(FieldValue::text(self.status.as_str())),
            _ => None,
        }
    }
}

impl PushNotification {
    /// Delivery rate in percent, only for sent notifications
    pub fn success_rate(&self) -> Option<f64> {
        if self.status != PushStatus::Sent {
            return None;
        }
        stats::success_rate(self.success_count, self.target_count)
    }

    /// `발송예정 → 취소`
    pub fn cancel(&mut self) -> Result<(), ConsoleError> {
        if self.status != PushStatus::Scheduled {
            return Err(ConsoleError::invalid_transition(self, PushStatus::Cancelled));
        }
        self.status = PushStatus::Cancelled;
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PushFilter {
    pub status: Choice<PushStatus>,
    pub target_type: Choice<PushTarget>,
}

impl FilterState for PushFilter {
    type Entity = PushNotification;

    fn clauses(&self, all_sentinel: &str) -> Vec<Clause> {
        vec![
            self.status.to_clause("status", all_sentinel),
            self.target_type.to_clause("target_type", all_sentinel),
        ]
    }
}
