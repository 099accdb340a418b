//! Order cancellation

use super::AdminConsole;
use crate::core::error::ConsoleError;
use crate::core::store::EntityStore;
use crate::entities::{Order, OrderStatus};

impl Order {
    fn ensure_cancellable(&self) -> Result<(), ConsoleError> {
        if self.status.is_cancelled() {
            return Err(ConsoleError::invalid_transition(
                self,
                OrderStatus::CancelledByAdmin,
            ));
        }
        Ok(())
    }

    /// Cancel the whole order as the operator
    pub fn cancel_all(&mut self) -> Result<(), ConsoleError> {
        self.ensure_cancellable()?;
        self.status = OrderStatus::CancelledByAdmin;
        Ok(())
    }

    /// Remove the given line items and recompute the total
    ///
    /// Removing every remaining item cancels the whole order.
    pub fn cancel_items(&mut self, item_ids: &[String]) -> Result<(), ConsoleError> {
        self.ensure_cancellable()?;
        if item_ids.is_empty() {
            return Err(ConsoleError::validation("items", "no items selected"));
        }
        if let Some(unknown) = item_ids
            .iter()
            .find(|id| !self.items.iter().any(|item| &item.id == *id))
        {
            return Err(ConsoleError::validation(
                "items",
                format!("order has no item '{}'", unknown),
            ));
        }

        self.items.retain(|item| !item_ids.contains(&item.id));
        if self.items.is_empty() {
            self.status = OrderStatus::CancelledByAdmin;
        }
        self.total_amount = self.items_total();
        Ok(())
    }
}

impl AdminConsole {
    /// Cancel an order entirely (`관리자취소`)
    pub fn cancel_order(&mut self, id: &str) -> Result<Order, ConsoleError> {
        let result = self.orders.modify(id, Order::cancel_all);
        if let Ok(order) = &result {
            tracing::info!(id = %order.id, order_number = %order.order_number, "order cancelled");
        }
        self.settle_outcome(result, |_| "전체 취소가 완료되었습니다.".to_string())
    }

    /// Cancel some items of an order
    pub fn cancel_order_items(
        &mut self,
        id: &str,
        item_ids: &[String],
    ) -> Result<Order, ConsoleError> {
        let result = self.orders.modify(id, |order| order.cancel_items(item_ids));
        if let Ok(order) = &result {
            tracing::info!(
                id = %order.id,
                removed = item_ids.len(),
                total_amount = order.total_amount,
                status = %order.status,
                "order partially cancelled"
            );
        }
        self.settle_outcome(result, |_| "부분 취소가 완료되었습니다.".to_string())
    }
}
