//! Entity traits defining the core abstraction for all console records

use crate::core::field::FieldValue;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::str::FromStr;

/// A closed enumeration with a fixed display label per variant.
///
/// Every status domain (and the few other closed vocabularies such as report
/// types and push targets) implements this trait, usually through
/// [`closed_enum!`](crate::closed_enum). Labels are the exact strings the
/// operator sees and the values filter clauses compare against.
pub trait ClosedEnum:
    Copy + Eq + Hash + Debug + Display + FromStr + Send + Sync + 'static
{
    /// Human-readable name of the vocabulary (e.g., "order status")
    const KIND: &'static str;

    /// Every variant, in declaration order
    const ALL: &'static [Self];

    /// The label of this variant
    fn as_str(&self) -> &'static str;

    /// Look up a variant by its label
    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == label)
    }
}

/// Base trait for all entities held by the console.
///
/// Every entity has:
/// - id: Unique identifier (string; seeded records carry their own)
/// - status: Current value of its closed status enumeration
pub trait Entity: Clone + Debug + Send + Sync + 'static {
    /// The status vocabulary of this entity
    type Status: ClosedEnum;

    /// The plural resource name (e.g., "stores", "coupons")
    fn resource_name() -> &'static str;

    /// The singular resource name (e.g., "store", "coupon")
    fn resource_name_singular() -> &'static str;

    /// Get the unique identifier for this entity instance
    fn id(&self) -> &str;

    /// Get the entity status
    fn status(&self) -> Self::Status;
}

/// Trait for entities whose fields can be addressed by name.
///
/// Filter clauses reference fields by name; this is the single dynamic
/// lookup point. Unknown fields and absent optional fields return `None`,
/// which never matches a clause.
pub trait Data: Entity {
    /// Get the value of a specific field by name
    fn field_value(&self, field: &str) -> Option<FieldValue<'_>>;
}
