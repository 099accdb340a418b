//! # market-admin
//!
//! The in-memory core of a food marketplace administration console.
//!
//! ## Features
//!
//! - **Typed entities**: stores, orders, customers, settlements, reviews,
//!   reports, banners, coupons and push notifications, each with a closed
//!   status vocabulary declared through macros
//! - **List filtering**: free-text, exact, substring and date-range clauses
//!   with a staged draft/applied filter per page
//! - **Status tallies**: counts per status plus a total, ready for cards
//! - **Derived statistics**: customer and store summaries, push success
//!   rates, manner-score bands
//! - **Banner ordering**: contiguous `1..=N` positions kept through moves
//!   and deletions
//! - **State machines**: coupon, report, review, settlement, push and order
//!   transitions with typed errors
//! - **YAML configuration and seed data**
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use market_admin::prelude::*;
//!
//! market_admin::logging::init_tracing();
//!
//! let config = ConsoleConfig::from_yaml_file("console.yaml")?;
//! let seed = SeedData::from_yaml_file("seed.yaml")?;
//! let mut console = AdminConsole::from_seed(config, seed)?;
//!
//! let mut orders = StagedFilter::<OrderFilter>::new();
//! orders.draft_mut().status = Choice::Only(OrderStatus::Reserved);
//! orders.apply();
//!
//! for order in console.evaluate(&orders) {
//!     println!("{} {}", order.order_number, order.total_amount);
//! }
//!
//! let counts = console.status_counts::<Order>();
//! println!("{} orders in total", counts.total());
//! ```

pub mod config;
pub mod console;
pub mod core;
pub mod entities;
pub mod logging;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Traits ===
    pub use crate::core::{
        entity::{ClosedEnum, Data, Entity},
        field::{Field, FieldFormat, FieldValue},
        notify::{Notifier, NotifyKind, RecordingNotifier, TracingNotifier},
        reorder::{Direction, Ordered},
        store::EntityStore,
    };

    // === Filtering and tallies ===
    pub use crate::core::{
        aggregate::{StatusCounts, aggregate},
        filter::{ALL_SENTINEL, Choice, Clause, FilterState, StagedFilter, filter},
        query::{Page, PageRequest},
        stats::{MannerBand, MannerBands},
    };

    // === Errors ===
    pub use crate::core::error::{ConfigError, ConsoleError};

    // === Entities ===
    pub use crate::entities::{
        Banner, BannerDraft, BannerFilter, BannerStatus, Cohort, Coupon, CouponFilter,
        CouponStatus, Customer, CustomerFilter, CustomerStatus, Order, OrderFilter, OrderItem,
        OrderStatus, PushFilter, PushNotification, PushStatus, PushTarget, Report, ReportFilter,
        ReportStatus, ReportType, Review, ReviewFilter, ReviewStatus, Settlement,
        SettlementFilter, SettlementStatus, Store, StoreFilter, StoreSettingsFilter, StoreStatus,
    };

    // === Console ===
    pub use crate::console::{
        AdminConsole, CouponRequest, CouponSummary, CustomerStats, Dashboard, Holds,
        PushRequest, PushSummary, SelectionSummary, StoreStats,
    };

    // === Storage ===
    pub use crate::storage::InMemoryStore;

    // === Config ===
    pub use crate::config::{ConsoleConfig, SeedData};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use chrono::{NaiveDate, NaiveDateTime};
    pub use serde::{Deserialize, Serialize};
}
