//! Derived statistics, the dashboard and the record pickers

use super::AdminConsole;
use crate::core::entity::Data;
use crate::core::error::ConsoleError;
use crate::core::field::Field;
use crate::core::filter::{Clause, filter_iter};
use crate::core::stats::{self, MannerBand};
use crate::core::store::EntityStore;
use crate::entities::{
    Customer, Order, Report, ReportStatus, Review, SettlementStatus, Store, StoreStatus,
};
use serde::Serialize;

/// Order history of a customer, matched by phone
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerStats {
    pub total_spent: i64,
    pub order_count: usize,
    pub completed: usize,
    pub cancelled: usize,
    pub manner_band: MannerBand,
    pub related_reports: Vec<Report>,
}

/// Sales, reviews and settlements of a store, matched by name
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreStats {
    pub total_sales: i64,
    pub order_count: usize,
    pub completed: usize,
    pub cancelled: usize,
    /// One decimal; `None` without reviews
    pub average_rating: Option<f64>,
    pub review_count: usize,
    pub settlement_total: i64,
    pub pending_settlements: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    /// Stores waiting for approval, first few only
    pub stores_under_review: Vec<Store>,
    pub pending_reports: usize,
    pub today_orders: usize,
    pub today_reviews: usize,
    pub recent_reports: Vec<Report>,
}

struct OrderTally {
    amount: i64,
    count: usize,
    completed: usize,
    cancelled: usize,
}

fn tally<'a>(orders: impl Iterator<Item = &'a Order>) -> OrderTally {
    orders.fold(
        OrderTally {
            amount: 0,
            count: 0,
            completed: 0,
            cancelled: 0,
        },
        |mut acc, order| {
            acc.amount += order.total_amount;
            acc.count += 1;
            if order.status.is_completed() {
                acc.completed += 1;
            }
            if order.status.is_cancelled() {
                acc.cancelled += 1;
            }
            acc
        },
    )
}

impl AdminConsole {
    pub fn customer_stats(&self, id: &str) -> Result<CustomerStats, ConsoleError> {
        let customer = self
            .customers
            .get(id)
            .ok_or_else(|| ConsoleError::not_found("customer", id))?;

        let orders = tally(
            self.orders
                .iter()
                .filter(|o| o.customer_phone == customer.phone),
        );
        let related_reports = self
            .reports
            .iter()
            .filter(|r| r.involves(&customer.phone))
            .cloned()
            .collect();

        Ok(CustomerStats {
            total_spent: orders.amount,
            order_count: orders.count,
            completed: orders.completed,
            cancelled: orders.cancelled,
            manner_band: self.config.manner_bands.classify(customer.manner_score),
            related_reports,
        })
    }

    pub fn store_stats(&self, id: &str) -> Result<StoreStats, ConsoleError> {
        let store = self
            .stores
            .get(id)
            .ok_or_else(|| ConsoleError::not_found("store", id))?;

        let orders = tally(self.orders.iter().filter(|o| o.store_name == store.name));
        let reviews: Vec<&Review> = self
            .reviews
            .iter()
            .filter(|r| r.store_name == store.name)
            .collect();
        let (settlement_total, pending_settlements) = self
            .settlements
            .iter()
            .filter(|s| s.store_name == store.name)
            .fold((0i64, 0usize), |(sum, pending), s| {
                let pending = pending + usize::from(s.status == SettlementStatus::Pending);
                (sum + s.settlement_amount, pending)
            });

        Ok(StoreStats {
            total_sales: orders.amount,
            order_count: orders.count,
            completed: orders.completed,
            cancelled: orders.cancelled,
            average_rating: stats::average_rating(reviews.iter().map(|r| r.rating)),
            review_count: reviews.len(),
            settlement_total,
            pending_settlements,
        })
    }

    /// Landing page summary for the current day
    pub fn dashboard(&self) -> Dashboard {
        let today = self.today();
        let preview = self.config.dashboard_preview_limit;

        Dashboard {
            stores_under_review: self
                .stores
                .iter()
                .filter(|s| s.status == StoreStatus::UnderReview)
                .take(preview)
                .cloned()
                .collect(),
            pending_reports: self
                .reports
                .iter()
                .filter(|r| r.status == ReportStatus::Received)
                .count(),
            today_orders: self
                .orders
                .iter()
                .filter(|o| o.ordered_on() == today)
                .count(),
            today_reviews: self
                .reviews
                .iter()
                .filter(|r| r.review_date == today)
                .count(),
            recent_reports: self.reports.iter().take(preview).cloned().collect(),
        }
    }

    /// Customers whose nickname or phone contains `query`
    ///
    /// An empty query returns nothing.
    pub fn pick_customers(&self, query: &str) -> Vec<Customer> {
        self.pick(self.customers.iter(), Customer::PICKER_FIELDS, query)
    }

    /// Stores whose name or owner phone contains `query`, any status
    pub fn pick_stores(&self, query: &str) -> Vec<Store> {
        self.pick(self.stores.iter(), Store::PICKER_FIELDS, query)
    }

    fn pick<'a, T>(
        &self,
        items: impl Iterator<Item = &'a T>,
        fields: &[Field],
        query: &str,
    ) -> Vec<T>
    where
        T: Data + 'a,
    {
        if query.trim().is_empty() {
            return Vec::new();
        }
        let mut picked = filter_iter(items, &[Clause::free_text(fields, query.trim())]);
        picked.truncate(self.config.picker_limit);
        picked
    }
}
