//! Console entities, their status vocabularies and list filters

#[macro_use]
pub mod macros;

pub mod banner;
pub mod cohort;
pub mod coupon;
pub mod customer;
pub mod order;
pub mod push;
pub mod report;
pub mod review;
pub mod settlement;
pub mod store;
pub mod timestamp;

pub use banner::{Banner, BannerDraft, BannerFilter, BannerStatus};
pub use cohort::Cohort;
pub use coupon::{Coupon, CouponFilter, CouponStatus};
pub use customer::{Customer, CustomerFilter, CustomerStatus};
pub use order::{Order, OrderFilter, OrderItem, OrderStatus};
pub use push::{PushFilter, PushNotification, PushStatus, PushTarget};
pub use report::{Report, ReportFilter, ReportStatus, ReportType};
pub use review::{Review, ReviewFilter, ReviewStatus};
pub use settlement::{Settlement, SettlementFilter, SettlementStatus};
pub use store::{Store, StoreFilter, StoreSettingsFilter, StoreStatus};
