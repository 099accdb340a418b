//! Store settlements

use crate::closed_enum;
use crate::core::entity::{ClosedEnum, Data};
use crate::core::error::ConsoleError;
use crate::core::field::FieldValue;
use crate::core::filter::{Choice, Clause, FilterState};
use crate::impl_entity;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

closed_enum! {
    pub enum SettlementStatus: "settlement status" {
        Pending => "정산대기",
        Settled => "정산완료",
        OnHold => "정산보류",
        Cancelled => "정산취소",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settlement {
    pub id: String,
    pub store_name: String,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub order_count: u32,
    pub total_sales: i64,
    pub fee: i64,
    pub settlement_amount: i64,
    pub scheduled_date: NaiveDate,
    pub status: SettlementStatus,
}

impl_entity!(Settlement, SettlementStatus, "settlement", "settlements");

impl Data for Settlement {
    fn field_value(&self, field: &str) -> Option<FieldValue<'_>> {
        match field {
            "id" => Some(FieldValue::text(&self.id)),
            "store_name" => Some(FieldValue::text(&self.store_name)),
            "period_start" => Some(FieldValue::Date(self.period_start)),
            "period_end" => Some(FieldValue::Date(self.period_end)),
            "scheduled_date" => Some(FieldValue::Date(self.scheduled_date)),
            "settlement_amount" => Some(FieldValue::Integer(self.settlement_amount)),
            "status" => Some(FieldValue::text(self.status.as_str())),
            _ => None,
        }
    }
}

impl Settlement {
    /// `settlement_amount == total_sales - fee`
    pub fn is_consistent(&self) -> bool {
        self.settlement_amount == self.total_sales - self.fee
    }

    /// Only pending rows can be picked for bulk settlement
    pub fn is_selectable(&self) -> bool {
        self.status == SettlementStatus::Pending
    }

    /// `정산대기 → 정산완료`
    pub fn settle(&mut self) -> Result<(), ConsoleError> {
        if !self.is_selectable() {
            return Err(ConsoleError::invalid_transition(
                self,
                SettlementStatus::Settled,
            ));
        }
        self.status = SettlementStatus::Settled;
        Ok(())
    }
}

/// Settlement list, driven by the status cards
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettlementFilter {
    pub status: Option<SettlementStatus>,
}

impl FilterState for SettlementFilter {
    type Entity = Settlement;

    fn clauses(&self, all_sentinel: &str) -> Vec<Clause> {
        vec![Choice::from(self.status).to_clause("status", all_sentinel)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::ALL_SENTINEL;

    fn settlement(id: &str, status: SettlementStatus) -> Settlement {
        Settlement {
            id: id.to_string(),
            store_name: "행복베이커리".to_string(),
            period_start: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            period_end: NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
            order_count: 42,
            total_sales: 1_000_000,
            fee: 100_000,
            settlement_amount: 900_000,
            scheduled_date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            status,
        }
    }

    #[test]
    fn test_is_consistent() {
        let mut s = settlement("st-1", SettlementStatus::Pending);
        assert!(s.is_consistent());
        s.fee = 1;
        assert!(!s.is_consistent());
    }

    #[test]
    fn test_settle_only_from_pending() {
        let mut s = settlement("st-1", SettlementStatus::Pending);
        s.settle().unwrap();
        assert_eq!(s.status, SettlementStatus::Settled);

        let err = s.settle().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_TRANSITION");

        let mut held = settlement("st-2", SettlementStatus::OnHold);
        assert!(held.settle().is_err());
        assert_eq!(held.status, SettlementStatus::OnHold);
    }

    #[test]
    fn test_card_selection() {
        let data = vec![
            settlement("st-1", SettlementStatus::Pending),
            settlement("st-2", SettlementStatus::Settled),
        ];
        let all = SettlementFilter::default().evaluate(&data, ALL_SENTINEL);
        assert_eq!(all.len(), 2);

        let pending = SettlementFilter {
            status: Some(SettlementStatus::Pending),
        }
        .evaluate(&data, ALL_SENTINEL);
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, "st-1");
    }
}
