//! Generic building blocks of the console: entities, filtering, tallies,
//! statistics, ordering and outcome notification

pub mod aggregate;
pub mod entity;
pub mod error;
pub mod field;
pub mod filter;
pub mod notify;
pub mod query;
pub mod reorder;
pub mod stats;
pub mod store;

pub use aggregate::{StatusCard, StatusCounts, aggregate};
pub use entity::{ClosedEnum, Data, Entity};
pub use error::{ConfigError, ConsoleError};
pub use field::{Field, FieldFormat, FieldValue};
pub use filter::{ALL_SENTINEL, Choice, Clause, FilterState, StagedFilter, filter};
pub use notify::{Notification, Notifier, NotifyKind, RecordingNotifier, TracingNotifier};
pub use query::{Page, PageRequest, PaginationMeta};
pub use reorder::{Direction, Ordered};
pub use stats::{MannerBand, MannerBands};
pub use store::EntityStore;
