//! Filter clauses and staged filter state
//!
//! A list page evaluates a set of [`Clause`]s over a collection in a single
//! pass. Clauses combine with AND; the fields of one free-text clause combine
//! with OR. Every clause has a vacuous form (empty query, the "all" sentinel,
//! an open date range) that keeps every entity.
//!
//! Pages never filter on keystrokes: they edit a draft [`FilterState`] and
//! only the applied copy inside a [`StagedFilter`] is evaluated.

use crate::core::entity::{ClosedEnum, Data};
use crate::core::field::Field;
use chrono::NaiveDate;
use std::fmt::Display;
use std::str::FromStr;

/// Sentinel filter value meaning "no constraint"
pub const ALL_SENTINEL: &str = "전체";

/// One filter condition
#[derive(Debug, Clone, PartialEq)]
pub enum Clause {
    /// Matches when any of `fields` contains `query`
    FreeText { fields: Vec<Field>, query: String },

    /// Matches when `field` equals `value`, or always when `value` is the sentinel
    Exact {
        field: &'static str,
        value: String,
        all_sentinel: String,
    },

    /// Matches when `field` contains `value`, or always when `value` is empty
    Substring { field: &'static str, value: String },

    /// Matches when the date of `field` lies within the inclusive bounds
    DateRange {
        field: &'static str,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    },
}

impl Clause {
    pub fn free_text(fields: &[Field], query: impl Into<String>) -> Self {
        Clause::FreeText {
            fields: fields.to_vec(),
            query: query.into(),
        }
    }

    pub fn exact(
        field: &'static str,
        value: impl Into<String>,
        all_sentinel: impl Into<String>,
    ) -> Self {
        Clause::Exact {
            field,
            value: value.into(),
            all_sentinel: all_sentinel.into(),
        }
    }

    pub fn substring(field: &'static str, value: impl Into<String>) -> Self {
        Clause::Substring {
            field,
            value: value.into(),
        }
    }

    /// True when this clause keeps every entity
    pub fn is_vacuous(&self) -> bool {
        match self {
            Clause::FreeText { query, .. } => query.is_empty(),
            Clause::Exact {
                value,
                all_sentinel,
                ..
            } => value == all_sentinel,
            Clause::Substring { value, .. } => value.is_empty(),
            Clause::DateRange { from, to, .. } => from.is_none() && to.is_none(),
        }
    }

    /// Test a single entity
    pub fn matches<T: Data>(&self, entity: &T) -> bool {
        if self.is_vacuous() {
            return true;
        }

        match self {
            Clause::FreeText { fields, query } => {
                let query_lower = query.to_lowercase();
                fields.iter().any(|field| {
                    entity
                        .field_value(field.name)
                        .is_some_and(|v| field.contains(&v.as_text(), query, &query_lower))
                })
            }
            Clause::Exact { field, value, .. } => entity
                .field_value(field)
                .is_some_and(|v| v.as_text() == value.as_str()),
            Clause::Substring { field, value } => entity
                .field_value(field)
                .is_some_and(|v| v.as_text().contains(value.as_str())),
            Clause::DateRange { field, from, to } => entity
                .field_value(field)
                .and_then(|v| v.as_date())
                .is_some_and(|d| from.is_none_or(|f| d >= f) && to.is_none_or(|t| d <= t)),
        }
    }
}

/// Keep the entities satisfying every clause, in their original order
pub fn filter<T: Data>(collection: &[T], clauses: &[Clause]) -> Vec<T> {
    filter_iter(collection, clauses)
}

/// [`filter`] over any iterator of borrowed entities
pub fn filter_iter<'a, T, I>(items: I, clauses: &[Clause]) -> Vec<T>
where
    T: Data,
    I: IntoIterator<Item = &'a T>,
{
    let active: Vec<&Clause> = clauses.iter().filter(|c| !c.is_vacuous()).collect();

    items
        .into_iter()
        .filter(|entity| active.iter().all(|clause| clause.matches(*entity)))
        .cloned()
        .collect()
}

/// An exact-match selection: either everything or one value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice<T> {
    All,
    Only(T),
}

impl<T> Default for Choice<T> {
    fn default() -> Self {
        Choice::All
    }
}

impl<T: Display> Choice<T> {
    /// Exact clause on `field`, using `all_sentinel` for [`Choice::All`]
    pub fn to_clause(&self, field: &'static str, all_sentinel: &str) -> Clause {
        let value = match self {
            Choice::All => all_sentinel.to_string(),
            Choice::Only(v) => v.to_string(),
        };
        Clause::exact(field, value, all_sentinel)
    }
}

impl<T: FromStr> Choice<T> {
    /// Parse a select-box value where `all_sentinel` means [`Choice::All`]
    pub fn parse(label: &str, all_sentinel: &str) -> Result<Self, T::Err> {
        if label == all_sentinel {
            Ok(Choice::All)
        } else {
            label.parse().map(Choice::Only)
        }
    }
}

impl<S: ClosedEnum> From<Option<S>> for Choice<S> {
    /// Status cards select `Some(status)`, the total card selects `None`
    fn from(selection: Option<S>) -> Self {
        match selection {
            Some(s) => Choice::Only(s),
            None => Choice::All,
        }
    }
}

/// Per-page filter inputs
pub trait FilterState: Clone + Default + PartialEq {
    /// The entity this page lists
    type Entity: Data;

    /// Clauses equivalent to this state
    fn clauses(&self, all_sentinel: &str) -> Vec<Clause>;

    /// Secondary ordering applied after filtering
    fn arrange(&self, rows: Vec<Self::Entity>) -> Vec<Self::Entity> {
        rows
    }

    /// Filter `collection` and apply the secondary ordering
    fn evaluate(&self, collection: &[Self::Entity], all_sentinel: &str) -> Vec<Self::Entity> {
        self.arrange(filter(collection, &self.clauses(all_sentinel)))
    }
}

/// Draft and applied filter state of one list page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StagedFilter<F> {
    draft: F,
    applied: F,
}

impl<F: FilterState> StagedFilter<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `initial` both drafted and applied
    pub fn with_applied(initial: F) -> Self {
        Self {
            draft: initial.clone(),
            applied: initial,
        }
    }

    pub fn draft(&self) -> &F {
        &self.draft
    }

    /// Editable inputs; edits are not evaluated until [`StagedFilter::apply`]
    pub fn draft_mut(&mut self) -> &mut F {
        &mut self.draft
    }

    pub fn applied(&self) -> &F {
        &self.applied
    }

    /// Promote the draft (search button or Enter)
    pub fn apply(&mut self) -> &F {
        self.applied = self.draft.clone();
        tracing::debug!(
            entity = <F::Entity as crate::core::entity::Entity>::resource_name(),
            "filter applied"
        );
        &self.applied
    }

    /// Restore both draft and applied state to defaults
    pub fn reset(&mut self) {
        self.draft = F::default();
        self.applied = F::default();
    }

    /// True when the draft holds edits not yet applied
    pub fn is_dirty(&self) -> bool {
        self.draft != self.applied
    }

    /// Evaluate the applied state only
    pub fn evaluate(&self, collection: &[F::Entity], all_sentinel: &str) -> Vec<F::Entity> {
        self.applied.evaluate(collection, all_sentinel)
    }
}
