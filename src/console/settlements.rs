//! Settlement page operations

use super::AdminConsole;
use crate::core::error::ConsoleError;
use crate::core::store::EntityStore;
use crate::entities::Settlement;
use indexmap::IndexSet;
use serde::Serialize;

/// Count and sum of the rows currently ticked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionSummary {
    pub count: usize,
    /// Sum of settlement amounts, in won
    pub total_amount: i64,
}

impl AdminConsole {
    /// Summary of the selected settlements; unknown ids are ignored
    pub fn settlement_selection(&self, ids: &[String]) -> SelectionSummary {
        self.settlements
            .iter()
            .filter(|s| ids.contains(&s.id))
            .fold(
                SelectionSummary {
                    count: 0,
                    total_amount: 0,
                },
                |acc, s| SelectionSummary {
                    count: acc.count + 1,
                    total_amount: acc.total_amount + s.settlement_amount,
                },
            )
    }

    /// Settle every selected pending row at once
    ///
    /// The whole batch is refused if any id is unknown or not pending. An id
    /// ticked more than once is settled once.
    pub fn settle_batch(&mut self, ids: &[String]) -> Result<Vec<Settlement>, ConsoleError> {
        let ids: Vec<String> = ids
            .iter()
            .cloned()
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect();
        let summary = self.settlement_selection(&ids);
        let result = self.try_settle_batch(&ids);
        self.settle_outcome(result, |_| {
            format!(
                "{}건 ({}원) 일괄 정산 처리",
                summary.count, summary.total_amount
            )
        })
    }

    fn try_settle_batch(&mut self, ids: &[String]) -> Result<Vec<Settlement>, ConsoleError> {
        if ids.is_empty() {
            return Err(ConsoleError::validation(
                "settlements",
                "정산 항목을 선택해주세요.",
            ));
        }

        let mut staged = Vec::with_capacity(ids.len());
        for id in ids {
            let mut settlement = self
                .settlements
                .get(id)
                .ok_or_else(|| ConsoleError::not_found("settlement", id.as_str()))?;
            settlement.settle()?;
            staged.push(settlement);
        }

        for settlement in &staged {
            self.settlements.update(settlement.clone())?;
        }
        tracing::info!(count = staged.len(), "settlements settled");
        Ok(staged)
    }
}
