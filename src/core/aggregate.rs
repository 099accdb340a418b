//! Status aggregation for summary cards

use crate::core::entity::{ClosedEnum, Entity};
use crate::core::filter::ALL_SENTINEL;
use indexmap::IndexMap;
use serde::Serialize;

/// Reserved key holding the collection size in [`StatusCounts::to_map`]
pub const TOTAL_KEY: &str = "total";

/// Count of entities per status value, plus the total
///
/// Every variant of the vocabulary is present, in declaration order, even
/// when its count is zero. The counts always sum to `total`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusCounts<S: ClosedEnum> {
    counts: IndexMap<S, usize>,
    total: usize,
}

/// One summary card: its label, its count and the filter selection it makes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCard<S> {
    pub label: String,
    pub count: usize,
    /// `None` for the total card
    pub selection: Option<S>,
}

/// Tally `collection` by status
pub fn aggregate<T: Entity>(collection: &[T]) -> StatusCounts<T::Status> {
    StatusCounts::from_statuses(collection.iter().map(Entity::status))
}

impl<S: ClosedEnum> StatusCounts<S> {
    /// Tally an iterator of status values
    pub fn from_statuses(statuses: impl IntoIterator<Item = S>) -> Self {
        let mut counts: IndexMap<S, usize> = S::ALL.iter().map(|s| (*s, 0)).collect();
        let mut total = 0;
        for status in statuses {
            *counts.entry(status).or_insert(0) += 1;
            total += 1;
        }
        Self { counts, total }
    }

    /// Count for one status (zero when none)
    pub fn get(&self, status: S) -> usize {
        self.counts.get(&status).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Per-status counts in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (S, usize)> + '_ {
        self.counts.iter().map(|(s, n)| (*s, *n))
    }

    /// Label-keyed map with the reserved `total` key last
    pub fn to_map(&self) -> IndexMap<String, usize> {
        let mut map: IndexMap<String, usize> = self
            .counts
            .iter()
            .map(|(s, n)| (s.as_str().to_string(), *n))
            .collect();
        map.insert(TOTAL_KEY.to_string(), self.total);
        map
    }

    /// Summary cards, the total card first
    pub fn cards(&self) -> Vec<StatusCard<S>> {
        std::iter::once(StatusCard {
            label: ALL_SENTINEL.to_string(),
            count: self.total,
            selection: None,
        })
        .chain(self.counts.iter().map(|(s, n)| StatusCard {
            label: s.as_str().to_string(),
            count: *n,
            selection: Some(*s),
        }))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::closed_enum;

    closed_enum! {
        /// Ticket lifecycle
        pub enum TicketStatus: "ticket status" {
            Open => "열림",
            Pending => "대기",
            Closed => "닫힘",
        }
    }

    #[test]
    fn test_counts_include_zero_variants() {
        let counts = StatusCounts::from_statuses([TicketStatus::Open, TicketStatus::Open]);
        assert_eq!(counts.get(TicketStatus::Open), 2);
        assert_eq!(counts.get(TicketStatus::Pending), 0);
        assert_eq!(counts.get(TicketStatus::Closed), 0);
        assert_eq!(counts.total(), 2);
        assert_eq!(counts.iter().count(), 3);
    }

    #[test]
    fn test_counts_sum_to_total() {
        let counts = StatusCounts::from_statuses([
            TicketStatus::Open,
            TicketStatus::Closed,
            TicketStatus::Pending,
            TicketStatus::Closed,
        ]);
        let sum: usize = counts.iter().map(|(_, n)| n).sum();
        assert_eq!(sum, counts.total());
    }

    #[test]
    fn test_to_map_has_total_key() {
        let counts = StatusCounts::from_statuses([TicketStatus::Pending]);
        let map = counts.to_map();
        let keys: Vec<_> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["열림", "대기", "닫힘", "total"]);
        assert_eq!(map["total"], 1);
        assert_eq!(map["대기"], 1);
    }

    #[test]
    fn test_cards_start_with_total() {
        let counts = StatusCounts::from_statuses(Vec::<TicketStatus>::new());
        let cards = counts.cards();
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].label, "전체");
        assert_eq!(cards[0].selection, None);
        assert_eq!(cards[0].count, 0);
        assert_eq!(cards[3].selection, Some(TicketStatus::Closed));
    }
}
