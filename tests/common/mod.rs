//! Shared fixtures for the console integration tests
//!
//! ```rust,ignore
//! mod common;
//! use common::*;
//! ```

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use market_admin::prelude::*;
use std::path::PathBuf;

/// The day the fixture console believes it is
pub fn fixture_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 12).unwrap()
}

pub fn fixture_now() -> NaiveDateTime {
    fixture_today().and_hms_opt(14, 30, 0).unwrap()
}

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn fixture_seed() -> SeedData {
    SeedData::from_yaml_file(fixture_path("seed.yaml")).unwrap()
}

/// A console loaded with the fixture seed, a pinned clock and a recorder
pub fn fixture_console() -> (AdminConsole, RecordingNotifier) {
    let recorder = RecordingNotifier::new();
    let console = AdminConsole::from_seed(ConsoleConfig::default(), fixture_seed())
        .unwrap()
        .with_clock(fixture_now)
        .with_notifier(recorder.clone());
    (console, recorder)
}

pub fn ids<T: Entity>(rows: &[T]) -> Vec<String> {
    rows.iter().map(|r| r.id().to_string()).collect()
}

pub fn strings(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}
