//! Configuration and seed documents loaded from files on disk

mod common;

use common::*;
use market_admin::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_config_file_overrides_defaults() {
    let file = write_temp(
        r#"
page_size: 25
coupon_validity_days: 14
all_customers_push_multiplier: 50
manner_bands:
  excellent: 85
  good: 60
  caution: 40
"#,
    );
    let config = ConsoleConfig::from_yaml_file(file.path()).unwrap();
    assert_eq!(config.page_size(), 25);
    assert_eq!(config.coupon_validity_days, 14);
    assert_eq!(config.coupon_extension_days, 30);
    assert_eq!(config.manner_bands.classify(86), MannerBand::Excellent);
    assert_eq!(config.manner_bands.classify(45), MannerBand::Caution);
    assert_eq!(config.all_sentinel, ALL_SENTINEL);

    let console = AdminConsole::from_seed(config, fixture_seed()).unwrap();
    assert_eq!(
        console
            .push_target_count(PushTarget::AllCustomers, None)
            .unwrap(),
        150
    );
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = ConsoleConfig::from_yaml_file(dir.path().join("absent.yaml")).unwrap_err();
    assert_eq!(err.error_code(), "CONFIG_IO_ERROR");
}

#[test]
fn test_malformed_config_file() {
    let file = write_temp("page_size: [not, a, number]");
    let err = ConsoleConfig::from_yaml_file(file.path()).unwrap_err();
    assert_eq!(err.error_code(), "CONFIG_PARSE_ERROR");
}

#[test]
fn test_invalid_config_values() {
    let file = write_temp("page_size: 0");
    let err = ConsoleConfig::from_yaml_file(file.path()).unwrap_err();
    assert_eq!(err.error_code(), "CONFIG_INVALID");

    let err: ConsoleError = err.into();
    assert!(matches!(err, ConsoleError::Config(_)));
}

#[test]
fn test_fixture_seed_loads_every_collection() {
    let seed = fixture_seed();
    assert_eq!(seed.stores.len(), 4);
    assert_eq!(seed.customers.len(), 3);
    assert_eq!(seed.orders.len(), 3);
    assert_eq!(seed.settlements.len(), 3);
    assert_eq!(seed.reviews.len(), 3);
    assert_eq!(seed.reports.len(), 2);
    assert_eq!(seed.banners.len(), 3);
    assert_eq!(seed.coupons.len(), 2);
    assert_eq!(seed.push_notifications.len(), 2);
    assert_eq!(seed.cohorts.len(), 2);

    assert_eq!(seed.reports[0].report_type, ReportType::StoreToCustomer);
    assert_eq!(seed.orders[0].items.len(), 2);
    assert!(seed.settlements.iter().all(|s| s.is_consistent()));
}

#[test]
fn test_partial_seed_file() {
    let file = write_temp(
        r#"
cohorts:
  - id: ch1
    name: 신규가입
    memberCount: 12
"#,
    );
    let seed = SeedData::from_yaml_file(file.path()).unwrap();
    assert_eq!(seed.record_count(), 1);
    assert_eq!(seed.cohorts[0].member_count, 12);
}

#[test]
fn test_seed_with_unknown_status_label_fails() {
    let file = write_temp(
        r#"
customers:
  - id: c1
    nickname: 누군가
    phone: "01011112222"
    registeredAt: 2024-01-01
    mannerScore: 80
    orderCount: 0
    status: 휴면
"#,
    );
    let err = SeedData::from_yaml_file(file.path()).unwrap_err();
    assert_eq!(err.error_code(), "CONFIG_PARSE_ERROR");
    let path = file.path().display().to_string();
    assert!(matches!(err, ConfigError::Parse { file: Some(ref f), .. } if *f == path));
}

#[test]
fn test_missing_seed_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = SeedData::from_yaml_file(dir.path().join("absent.yaml")).unwrap_err();
    assert_eq!(err.error_code(), "CONFIG_IO_ERROR");
}

#[test]
fn test_seed_review_rating_out_of_range_is_rejected() {
    let file = write_temp(
        r#"
reviews:
  - id: r1
    storeName: 행복베이커리
    customerPhone: "01011112222"
    orderDate: 2024-03-01
    reviewDate: 2024-03-02
    rating: 9
    content: 최고
    status: 정상
"#,
    );
    let seed = SeedData::from_yaml_file(file.path()).unwrap();
    let err = AdminConsole::from_seed(ConsoleConfig::default(), seed).unwrap_err();
    assert_eq!(err.error_code(), "VALIDATION_ERROR");
}

#[test]
fn test_duplicate_ids_in_seed_are_rejected() {
    let mut seed = fixture_seed();
    let copy = seed.stores[0].clone();
    seed.stores.push(copy);
    let err = AdminConsole::from_seed(ConsoleConfig::default(), seed).unwrap_err();
    assert_eq!(err.error_code(), "ENTITY_ALREADY_EXISTS");
}
