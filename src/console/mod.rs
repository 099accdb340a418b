//! The admin console: every collection plus the operations of its pages
//!
//! `AdminConsole` owns one [`InMemoryStore`] per entity type. Read-side
//! operations (list evaluation, aggregation, pagination) are generic over
//! the entity through [`Holds`]; mutations live in the per-page submodules
//! and report their outcome through the configured [`Notifier`].
//!
//! # Example
//!
//! ```rust,ignore
//! let seed = SeedData::from_yaml_file("seed.yaml")?;
//! let mut console = AdminConsole::from_seed(ConsoleConfig::default(), seed)?;
//!
//! let mut customers = StagedFilter::<CustomerFilter>::new();
//! customers.draft_mut().query = "1111".to_string();
//! customers.apply();
//!
//! let page = console.page(&customers, 1);
//! println!("{} customers", page.pagination.total);
//! ```

mod banners;
mod coupons;
mod insights;
mod moderation;
mod orders;
mod push;
mod settlements;

pub use coupons::{CouponRequest, CouponSummary};
pub use insights::{CustomerStats, Dashboard, StoreStats};
pub use push::{PushRequest, PushSummary};
pub use settlements::SelectionSummary;

use crate::config::{ConsoleConfig, SeedData};
use crate::core::aggregate::{StatusCounts, aggregate};
use crate::core::entity::{Data, Entity};
use crate::core::error::ConsoleError;
use crate::core::filter::{Clause, FilterState, StagedFilter, filter_iter};
use crate::core::notify::{Notifier, NotifyKind, TracingNotifier};
use crate::core::query::{Page, PageRequest};
use crate::core::reorder::{is_dense, renumber};
use crate::core::store::EntityStore;
use crate::entities::{
    Banner, Cohort, Coupon, Customer, Order, PushNotification, Report, Review, Settlement, Store,
};
use crate::storage::InMemoryStore;
use chrono::{Local, NaiveDate, NaiveDateTime};
use std::fmt;
use validator::Validate;

type Clock = Box<dyn Fn() -> NaiveDateTime>;

/// Reject the first seeded record that breaks its field ranges
fn check_records<T: Entity + Validate>(records: &[T]) -> Result<(), ConsoleError> {
    for record in records {
        record.validate().map_err(|errors| {
            let field = errors
                .field_errors()
                .keys()
                .next()
                .map(|k| k.to_string())
                .unwrap_or_else(|| T::resource_name_singular().to_string());
            tracing::warn!(
                entity = T::resource_name_singular(),
                id = record.id(),
                %field,
                "seed record out of range"
            );
            ConsoleError::validation(field, format!("{}: {}", record.id(), errors))
        })?;
    }
    Ok(())
}

/// Access to the store holding entities of type `T`
pub trait Holds<T: Entity> {
    fn collection(&self) -> &InMemoryStore<T>;

    fn collection_mut(&mut self) -> &mut InMemoryStore<T>;
}

macro_rules! holds {
    ($($type:ty => $field:ident),+ $(,)?) => {
        $(
            impl Holds<$type> for AdminConsole {
                fn collection(&self) -> &InMemoryStore<$type> {
                    &self.$field
                }

                fn collection_mut(&mut self) -> &mut InMemoryStore<$type> {
                    &mut self.$field
                }
            }
        )+
    };
}

pub struct AdminConsole {
    config: ConsoleConfig,
    notifier: Box<dyn Notifier>,
    clock: Clock,
    stores: InMemoryStore<Store>,
    orders: InMemoryStore<Order>,
    customers: InMemoryStore<Customer>,
    settlements: InMemoryStore<Settlement>,
    reviews: InMemoryStore<Review>,
    reports: InMemoryStore<Report>,
    banners: InMemoryStore<Banner>,
    coupons: InMemoryStore<Coupon>,
    push_notifications: InMemoryStore<PushNotification>,
    cohorts: Vec<Cohort>,
}

holds! {
    Store => stores,
    Order => orders,
    Customer => customers,
    Settlement => settlements,
    Review => reviews,
    Report => reports,
    Banner => banners,
    Coupon => coupons,
    PushNotification => push_notifications,
}

impl fmt::Debug for AdminConsole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminConsole")
            .field("config", &self.config)
            .field("stores", &self.stores.len())
            .field("orders", &self.orders.len())
            .field("customers", &self.customers.len())
            .field("settlements", &self.settlements.len())
            .field("reviews", &self.reviews.len())
            .field("reports", &self.reports.len())
            .field("banners", &self.banners.len())
            .field("coupons", &self.coupons.len())
            .field("push_notifications", &self.push_notifications.len())
            .field("cohorts", &self.cohorts.len())
            .finish_non_exhaustive()
    }
}

impl AdminConsole {
    /// An empty console
    pub fn new(config: ConsoleConfig) -> Self {
        Self {
            config,
            notifier: Box::new(TracingNotifier),
            clock: Box::new(|| Local::now().naive_local()),
            stores: InMemoryStore::new(),
            orders: InMemoryStore::new(),
            customers: InMemoryStore::new(),
            settlements: InMemoryStore::new(),
            reviews: InMemoryStore::new(),
            reports: InMemoryStore::new(),
            banners: InMemoryStore::new(),
            coupons: InMemoryStore::new(),
            push_notifications: InMemoryStore::new(),
            cohorts: Vec::new(),
        }
    }

    /// A console pre-populated from a seed document
    ///
    /// Duplicate ids within a collection are rejected, as are customers or
    /// reviews whose scores fall outside their ranges. Banners whose order
    /// is not `1..=N` are renumbered in their current relative order.
    pub fn from_seed(config: ConsoleConfig, seed: SeedData) -> Result<Self, ConsoleError> {
        check_records(&seed.customers)?;
        check_records(&seed.reviews)?;

        let mut banners = seed.banners;
        if !is_dense(&banners) {
            tracing::warn!(
                count = banners.len(),
                "seeded banner order is not dense, renumbering"
            );
            renumber(&mut banners);
        }

        let console = Self {
            stores: InMemoryStore::from_records(seed.stores)?,
            orders: InMemoryStore::from_records(seed.orders)?,
            customers: InMemoryStore::from_records(seed.customers)?,
            settlements: InMemoryStore::from_records(seed.settlements)?,
            reviews: InMemoryStore::from_records(seed.reviews)?,
            reports: InMemoryStore::from_records(seed.reports)?,
            banners: InMemoryStore::from_records(banners)?,
            coupons: InMemoryStore::from_records(seed.coupons)?,
            push_notifications: InMemoryStore::from_records(seed.push_notifications)?,
            cohorts: seed.cohorts,
            ..Self::new(config)
        };

        tracing::info!(
            stores = console.stores.len(),
            orders = console.orders.len(),
            customers = console.customers.len(),
            banners = console.banners.len(),
            "console seeded"
        );
        Ok(console)
    }

    /// Replace the notifier
    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    /// Replace the wall clock (tests pin "today" with this)
    pub fn with_clock(mut self, clock: impl Fn() -> NaiveDateTime + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    pub fn now(&self) -> NaiveDateTime {
        (self.clock)()
    }

    pub fn today(&self) -> NaiveDate {
        self.now().date()
    }

    pub fn cohorts(&self) -> &[Cohort] {
        &self.cohorts
    }

    /// Snapshot of every collection as a seed document
    pub fn export(&self) -> SeedData {
        SeedData {
            stores: self.stores.list(),
            orders: self.orders.list(),
            customers: self.customers.list(),
            settlements: self.settlements.list(),
            reviews: self.reviews.list(),
            reports: self.reports.list(),
            banners: self.banners.list(),
            coupons: self.coupons.list(),
            push_notifications: self.push_notifications.list(),
            cohorts: self.cohorts.clone(),
        }
    }

    // === Generic read side ===

    /// Every entity of type `T`, in collection order
    pub fn list<T: Entity>(&self) -> Vec<T>
    where
        Self: Holds<T>,
    {
        <Self as Holds<T>>::collection(self).list()
    }

    pub fn get<T: Entity>(&self, id: &str) -> Option<T>
    where
        Self: Holds<T>,
    {
        <Self as Holds<T>>::collection(self).get(id)
    }

    /// Entities of type `T` matching every clause
    pub fn filter<T: Data>(&self, clauses: &[Clause]) -> Vec<T>
    where
        Self: Holds<T>,
    {
        filter_iter(<Self as Holds<T>>::collection(self).iter(), clauses)
    }

    /// Status counts over the whole collection of `T`
    pub fn status_counts<T: Entity>(&self) -> StatusCounts<T::Status>
    where
        Self: Holds<T>,
    {
        aggregate(&<Self as Holds<T>>::collection(self).list())
    }

    /// Rows of a list page under its applied filter
    pub fn evaluate<F: FilterState>(&self, filter: &StagedFilter<F>) -> Vec<F::Entity>
    where
        Self: Holds<F::Entity>,
    {
        let rows = <Self as Holds<F::Entity>>::collection(self).list();
        filter.evaluate(&rows, &self.config.all_sentinel)
    }

    /// One page of a list under its applied filter, at the configured size
    pub fn page<F: FilterState>(&self, filter: &StagedFilter<F>, page: usize) -> Page<F::Entity>
    where
        Self: Holds<F::Entity>,
    {
        PageRequest::new(page, self.config.page_size()).paginate(self.evaluate(filter))
    }

    // === Mutation plumbing ===

    fn notify(&self, message: &str, kind: NotifyKind) {
        self.notifier.notify(message, kind);
    }

    /// Signal the outcome of a mutation and pass the result through
    fn settle_outcome<T>(
        &self,
        result: Result<T, ConsoleError>,
        success: impl FnOnce(&T) -> String,
    ) -> Result<T, ConsoleError> {
        match &result {
            Ok(value) => self.notify(&success(value), NotifyKind::Success),
            Err(err) => {
                tracing::warn!(code = err.error_code(), error = %err, "mutation rejected");
                self.notify(&err.to_string(), NotifyKind::Failure);
            }
        }
        result
    }
}
