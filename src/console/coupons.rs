//! Coupon page operations

use super::AdminConsole;
use crate::core::entity::{ClosedEnum, Entity};
use crate::core::error::ConsoleError;
use crate::core::field::FieldFormat;
use crate::core::store::EntityStore;
use crate::entities::{Coupon, CouponStatus};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Input of the coupon issue form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CouponRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 1000))]
    pub discount: i64,
    #[validate(length(min = 1))]
    pub customer_name: String,
    #[validate(custom(function = "validate_mobile"))]
    pub customer_phone: String,
    /// Defaults to today plus the configured validity
    #[serde(default)]
    pub expires_at: Option<NaiveDate>,
}

fn validate_mobile(phone: &str) -> Result<(), ValidationError> {
    if FieldFormat::MobilePhone.validate(phone) {
        Ok(())
    } else {
        Err(ValidationError::new("mobile_phone"))
    }
}

/// `date` moved `days` ahead, refusing spans past the calendar's range
fn days_after(date: NaiveDate, days: i64) -> Result<NaiveDate, ConsoleError> {
    Duration::try_days(days)
        .and_then(|span| date.checked_add_signed(span))
        .ok_or_else(|| {
            ConsoleError::validation("expires_at", format!("{} days is out of range", days))
        })
}

/// Header statistics of the coupon page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponSummary {
    pub available: usize,
    pub used: usize,
    pub expired: usize,
    /// Sum of discounts of used coupons, in won
    pub total_discount: i64,
}

impl AdminConsole {
    /// Issue a new usable coupon at the top of the list
    pub fn issue_coupon(&mut self, request: CouponRequest) -> Result<Coupon, ConsoleError> {
        let result = self.try_issue_coupon(request);
        self.settle_outcome(result, |c| {
            format!("{}님에게 쿠폰이 발급되었습니다.", c.customer_name)
        })
    }

    fn try_issue_coupon(&mut self, request: CouponRequest) -> Result<Coupon, ConsoleError> {
        request.validate().map_err(|errors| {
            let field = errors
                .field_errors()
                .keys()
                .next()
                .map(|k| k.to_string())
                .unwrap_or_default();
            ConsoleError::validation(field, errors.to_string())
        })?;

        let today = self.today();
        let expires_at = match request.expires_at {
            Some(date) => date,
            None => days_after(today, self.config.coupon_validity_days)?,
        };
        if expires_at < today {
            return Err(ConsoleError::validation(
                "expires_at",
                "expiry must not be in the past",
            ));
        }

        let coupon = Coupon {
            id: Uuid::new_v4().to_string(),
            code: self.next_coupon_code(),
            name: request.name,
            discount: request.discount,
            customer_name: request.customer_name,
            customer_phone: request.customer_phone,
            issued_at: today,
            expires_at,
            used_at: None,
            status: CouponStatus::Available,
        };
        let coupon = self.coupons.insert_first(coupon)?;

        tracing::info!(
            id = %coupon.id,
            code = %coupon.code,
            customer_phone = %coupon.customer_phone,
            "coupon issued"
        );
        Ok(coupon)
    }

    /// `COUPON` plus six digits, unique among held coupons
    fn next_coupon_code(&self) -> String {
        loop {
            let digits = Uuid::new_v4().as_u128() % 1_000_000;
            let code = format!("COUPON{:06}", digits);
            if !self.coupons.iter().any(|c| c.code == code) {
                return code;
            }
        }
    }

    /// Extend the expiry of a usable coupon
    ///
    /// Without an explicit date the expiry moves out by the configured
    /// extension.
    pub fn extend_coupon(
        &mut self,
        id: &str,
        new_expiry: Option<NaiveDate>,
    ) -> Result<Coupon, ConsoleError> {
        let extension = self.config.coupon_extension_days;
        let result = self.coupons.modify(id, |coupon| {
            let target = match new_expiry {
                Some(date) => date,
                None => days_after(coupon.expires_at, extension)?,
            };
            coupon.extend_to(target)
        });
        if let Ok(coupon) = &result {
            tracing::info!(id = %coupon.id, expires_at = %coupon.expires_at, "coupon extended");
        }
        self.settle_outcome(result, |_| "유효기간이 연장되었습니다.".to_string())
    }

    pub fn delete_coupon(&mut self, id: &str) -> Result<Coupon, ConsoleError> {
        let result = self.transition_coupon(id, CouponStatus::Deleted);
        self.settle_outcome(result, |_| "쿠폰이 삭제되었습니다.".to_string())
    }

    pub fn mark_coupon_used(&mut self, id: &str) -> Result<Coupon, ConsoleError> {
        let result = self.transition_coupon(id, CouponStatus::Used);
        self.settle_outcome(result, |_| "쿠폰이 사용 처리되었습니다.".to_string())
    }

    pub fn mark_coupon_expired(&mut self, id: &str) -> Result<Coupon, ConsoleError> {
        let result = self.transition_coupon(id, CouponStatus::Expired);
        self.settle_outcome(result, |_| "쿠폰이 만료 처리되었습니다.".to_string())
    }

    fn transition_coupon(&mut self, id: &str, to: CouponStatus) -> Result<Coupon, ConsoleError> {
        let today = self.today();
        let coupon = self.coupons.modify(id, |coupon| match to {
            CouponStatus::Used => coupon.mark_used(today),
            CouponStatus::Expired => coupon.mark_expired(),
            CouponStatus::Deleted => coupon.delete(),
            CouponStatus::Available => Err(ConsoleError::invalid_transition(coupon, to)),
        })?;
        tracing::info!(
            entity = Coupon::resource_name_singular(),
            id = %coupon.id,
            to = to.as_str(),
            "coupon status changed"
        );
        Ok(coupon)
    }

    pub fn coupon_summary(&self) -> CouponSummary {
        self.coupons.iter().fold(
            CouponSummary {
                available: 0,
                used: 0,
                expired: 0,
                total_discount: 0,
            },
            |mut summary, coupon| {
                match coupon.status {
                    CouponStatus::Available => summary.available += 1,
                    CouponStatus::Used => {
                        summary.used += 1;
                        summary.total_discount += coupon.discount;
                    }
                    CouponStatus::Expired => summary.expired += 1,
                    CouponStatus::Deleted => {}
                }
                summary
            },
        )
    }

    /// Usable coupons whose expiry date has passed (display hint only)
    pub fn coupons_past_expiry(&self) -> Vec<Coupon> {
        let today = self.today();
        self.coupons
            .iter()
            .filter(|c| c.status == CouponStatus::Available && c.is_past_expiry(today))
            .cloned()
            .collect()
    }
}
