//! Push notification page operations

use super::AdminConsole;
use crate::core::entity::ClosedEnum;
use crate::core::error::ConsoleError;
use crate::core::field::FieldFormat;
use crate::core::stats;
use crate::core::store::EntityStore;
use crate::entities::cohort;
use crate::entities::{PushNotification, PushStatus, PushTarget, StoreStatus};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Input of the push scheduling form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PushRequest {
    #[validate(length(min = 1, max = 50))]
    pub title: String,
    #[validate(length(min = 1))]
    pub message: String,
    pub target_type: PushTarget,
    /// Cohort name, customer phone or store name, depending on the target
    #[serde(default)]
    pub target_detail: Option<String>,
    #[serde(with = "crate::entities::timestamp")]
    pub scheduled_at: NaiveDateTime,
}

/// Header statistics of the push page
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PushSummary {
    pub sent_count: usize,
    pub scheduled_count: usize,
    /// Successful deliveries across sent notifications
    pub total_delivered: u64,
    /// Mean success rate of sent notifications, one decimal
    pub average_success_rate: Option<f64>,
}

impl AdminConsole {
    /// Schedule a push notification at the top of the list
    pub fn schedule_push(
        &mut self,
        request: PushRequest,
    ) -> Result<PushNotification, ConsoleError> {
        let result = self.try_schedule_push(request);
        self.settle_outcome(result, |_| "푸시 알림이 예약되었습니다.".to_string())
    }

    fn try_schedule_push(
        &mut self,
        request: PushRequest,
    ) -> Result<PushNotification, ConsoleError> {
        request
            .validate()
            .map_err(|errors| ConsoleError::validation("push", errors.to_string()))?;

        let target_count =
            self.push_target_count(request.target_type, request.target_detail.as_deref())?;

        let push = PushNotification {
            id: Uuid::new_v4().to_string(),
            title: request.title,
            message: request.message,
            target_type: request.target_type,
            target_detail: request.target_detail,
            scheduled_at: request.scheduled_at,
            target_count,
            success_count: None,
            created_at: self.today(),
            status: PushStatus::Scheduled,
        };
        let push = self.push_notifications.insert_first(push)?;

        tracing::info!(
            id = %push.id,
            target = push.target_type.as_str(),
            target_count = push.target_count,
            "push scheduled"
        );
        Ok(push)
    }

    /// Estimated recipients for a target
    ///
    /// All customers scale the customer count by the configured multiplier,
    /// all sellers count approved stores, a cohort contributes its member
    /// count and a specific customer or seller is one recipient.
    pub fn push_target_count(
        &self,
        target: PushTarget,
        detail: Option<&str>,
    ) -> Result<u64, ConsoleError> {
        let detail = detail.filter(|d| !d.is_empty());
        if target.needs_detail() && detail.is_none() {
            return Err(ConsoleError::validation(
                "target_detail",
                format!("'{}' requires a target", target),
            ));
        }

        match (target, detail) {
            (PushTarget::AllCustomers, _) => (self.customers.len() as u64)
                .checked_mul(self.config.all_customers_push_multiplier)
                .ok_or_else(|| {
                    ConsoleError::validation("target_count", "recipient estimate overflows")
                }),
            (PushTarget::AllSellers, _) => Ok(self
                .stores
                .iter()
                .filter(|s| s.status == StoreStatus::Approved)
                .count() as u64),
            (PushTarget::Cohort, Some(name)) => cohort::find_by_name(&self.cohorts, name)
                .map(|c| c.member_count)
                .ok_or_else(|| ConsoleError::not_found("cohort", name)),
            (PushTarget::Customer, Some(phone)) => {
                if FieldFormat::MobilePhone.validate(phone) {
                    Ok(1)
                } else {
                    Err(ConsoleError::validation(
                        "target_detail",
                        format!("'{}' is not a mobile number", phone),
                    ))
                }
            }
            (PushTarget::Seller, Some(_)) => Ok(1),
            (_, None) => Ok(0),
        }
    }

    /// Cancel a scheduled push
    pub fn cancel_push(&mut self, id: &str) -> Result<PushNotification, ConsoleError> {
        let result = self.push_notifications.modify(id, |push| push.cancel());
        if let Ok(push) = &result {
            tracing::info!(id = %push.id, "push cancelled");
        }
        self.settle_outcome(result, |_| "발송이 취소되었습니다.".to_string())
    }

    pub fn push_summary(&self) -> PushSummary {
        let sent: Vec<&PushNotification> = self
            .push_notifications
            .iter()
            .filter(|p| p.status == PushStatus::Sent)
            .collect();

        PushSummary {
            sent_count: sent.len(),
            scheduled_count: self
                .push_notifications
                .iter()
                .filter(|p| p.status == PushStatus::Scheduled)
                .count(),
            total_delivered: sent.iter().filter_map(|p| p.success_count).sum(),
            average_success_rate: stats::mean_present(sent.iter().map(|p| p.success_rate())),
        }
    }
}
