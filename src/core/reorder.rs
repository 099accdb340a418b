//! Dense manual ordering (banner carousel order)
//!
//! Records implementing [`Ordered`] carry a 1-based position. Among the
//! records held, positions are always a permutation of `1..=N`; a move swaps
//! the positions of two adjacent records and nothing else.

use serde::{Deserialize, Serialize};

/// A record with a manual display position
pub trait Ordered {
    fn key(&self) -> &str;

    fn position(&self) -> u32;

    fn set_position(&mut self, position: u32);
}

/// Direction of a single-step move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

/// Sort ascending by position
pub fn sort_by_position<T: Ordered>(items: &mut [T]) {
    items.sort_by_key(|item| item.position());
}

/// Move the record `key` one step and return the list sorted by position
///
/// Moving the first record up, the last record down, or an unknown key
/// leaves every position unchanged.
pub fn move_item<T: Ordered>(mut items: Vec<T>, key: &str, direction: Direction) -> Vec<T> {
    sort_by_position(&mut items);

    let Some(index) = items.iter().position(|item| item.key() == key) else {
        tracing::debug!(key, "move ignored: unknown record");
        return items;
    };

    let neighbour = match direction {
        Direction::Up if index > 0 => index - 1,
        Direction::Down if index + 1 < items.len() => index + 1,
        _ => return items,
    };

    let here = items[index].position();
    let there = items[neighbour].position();
    items[index].set_position(there);
    items[neighbour].set_position(here);

    sort_by_position(&mut items);
    items
}

/// Reassign positions `1..=N` following the current relative order
pub fn renumber<T: Ordered>(items: &mut [T]) {
    sort_by_position(items);
    for (i, item) in items.iter_mut().enumerate() {
        item.set_position(i as u32 + 1);
    }
}

/// True when positions are exactly `1..=N`
pub fn is_dense<T: Ordered>(items: &[T]) -> bool {
    let mut positions: Vec<u32> = items.iter().map(Ordered::position).collect();
    positions.sort_unstable();
    positions
        .iter()
        .enumerate()
        .all(|(i, p)| *p == i as u32 + 1)
}
