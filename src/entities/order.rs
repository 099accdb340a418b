//! Orders and their line items

use crate::closed_enum;
use crate::core::entity::{ClosedEnum, Data};
use crate::core::field::FieldValue;
use crate::core::filter::{Choice, Clause, FilterState};
use crate::impl_entity;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

closed_enum! {
    /// Lifecycle of a pickup order
    pub enum OrderStatus: "order status" {
        Attempted => "주문시도",
        Reserved => "예약완료",
        PickedUp => "픽업확정",
        CancelledByCustomer => "유저취소",
        CancelledByStore => "가게취소",
        CancelledByAdmin => "관리자취소",
    }
}

impl OrderStatus {
    /// Counted as a completed order
    pub fn is_completed(&self) -> bool {
        *self == OrderStatus::PickedUp
    }

    /// Any of the three cancellation states
    pub fn is_cancelled(&self) -> bool {
        matches!(
            self,
            OrderStatus::CancelledByCustomer
                | OrderStatus::CancelledByStore
                | OrderStatus::CancelledByAdmin
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    /// Unit price in won
    pub price: i64,
}

impl OrderItem {
    pub fn subtotal(&self) -> i64 {
        self.price * i64::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub order_number: String,
    #[serde(with = "crate::entities::timestamp")]
    pub ordered_at: NaiveDateTime,
    pub customer_name: String,
    pub customer_phone: String,
    pub store_name: String,
    pub items: Vec<OrderItem>,
    pub total_amount: i64,
    pub status: OrderStatus,
}

impl_entity!(Order, OrderStatus, "order", "orders");

impl Data for Order {
    fn field_value(&self, field: &str) -> Option<FieldValue<'_>> {
        match field {
            "id" => Some(FieldValue::text(&self.id)),
            "order_number" => Some(FieldValue::text(&self.order_number)),
            "ordered_at" => Some(FieldValue::DateTime(self.ordered_at)),
            "customer_name" => Some(FieldValue::text(&self.customer_name)),
            "customer_phone" => Some(FieldValue::text(&self.customer_phone)),
            "store_name" => Some(FieldValue::text(&self.store_name)),
            "total_amount" => Some(FieldValue::Integer(self.total_amount)),
            "status" => Some(FieldValue::text(self.status.as_str())),
            _ => None,
        }
    }
}

impl Order {
    /// Sum of the line item subtotals
    pub fn items_total(&self) -> i64 {
        self.items.iter().map(OrderItem::subtotal).sum()
    }

    pub fn ordered_on(&self) -> NaiveDate {
        self.ordered_at.date()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderFilter {
    pub customer_phone: String,
    pub store_name: String,
    pub status: Choice<OrderStatus>,
    /// Inclusive bounds on the order date
    pub ordered_from: Option<NaiveDate>,
    pub ordered_to: Option<NaiveDate>,
}

impl FilterState for OrderFilter {
    type Entity = Order;

    fn clauses(&self, all_sentinel: &str) -> Vec<Clause> {
        vec![
            Clause::substring("customer_phone", &self.customer_phone),
            Clause::substring("store_name", &self.store_name),
            self.status.to_clause("status", all_sentinel),
            Clause::DateRange {
                field: "ordered_at",
                from: self.ordered_from,
                to: self.ordered_to,
            },
        ]
    }
}
