//! Macro-generated test suite for `EntityStore<Lamp>` contract validation.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod store_harness;
//!
//! use store_harness::*;
//! use market_admin::storage::InMemoryStore;
//!
//! entity_store_tests!(InMemoryStore::<Lamp>::new());
//! ```
//!
//! # Generated Tests
//!
//! ## CRUD
//! - `test_insert_and_get`: insert then retrieve
//! - `test_get_nonexistent`: unknown id returns None
//! - `test_list_keeps_insertion_order`
//! - `test_insert_first_prepends`
//! - `test_insert_duplicate_id`: rejected with ENTITY_ALREADY_EXISTS
//! - `test_update_keeps_position`
//! - `test_update_nonexistent`
//! - `test_remove_existing` / `test_remove_nonexistent`
//!
//! ## Modify
//! - `test_modify_applies_change`
//! - `test_modify_rejected_change_is_not_stored`
//! - `test_modify_nonexistent`
//!
//! ## Filter
//! - `test_filter_free_text`, `test_filter_exact_status`, `test_filter_sentinel`

/// Generate a full `EntityStore<Lamp>` conformance test suite.
///
/// `$factory` must evaluate to an empty store; it is re-evaluated for each
/// test.
#[macro_export]
macro_rules! entity_store_tests {
    ($factory:expr) => {
        mod entity_store_contract_tests {
            use super::*;
            use market_admin::core::entity::Entity;
            use market_admin::core::error::ConsoleError;
            use market_admin::core::filter::{ALL_SENTINEL, Clause};
            use market_admin::core::store::EntityStore;

            fn filled() -> impl EntityStore<Lamp> {
                let mut store = $factory;
                for lamp in sample_lamps() {
                    store.insert(lamp).unwrap();
                }
                store
            }

            // ==================================================================
            // CRUD
            // ==================================================================

            #[test]
            fn test_insert_and_get() {
                let mut store = $factory;
                let created = store
                    .insert(lamp("l1", "Desk Lamp", None, LampStatus::On))
                    .unwrap();
                assert_eq!(created.id(), "l1");

                let fetched = store.get("l1").unwrap();
                assert_eq!(fetched, created);
                assert_eq!(store.len(), 1);
                assert!(!store.is_empty());
            }

            #[test]
            fn test_get_nonexistent() {
                let store = $factory;
                assert!(store.get("missing").is_none());
                assert!(store.is_empty());
            }

            #[test]
            fn test_list_keeps_insertion_order() {
                let store = filled();
                let ids: Vec<String> = store.list().iter().map(|l| l.id.clone()).collect();
                assert_eq!(ids, vec!["l1", "l2", "l3", "l4", "l5"]);
            }

            #[test]
            fn test_insert_first_prepends() {
                let mut store = filled();
                store
                    .insert_first(lamp("l0", "New Lamp", None, LampStatus::Off))
                    .unwrap();
                assert_eq!(store.list()[0].id, "l0");
                assert_eq!(store.len(), 6);
            }

            #[test]
            fn test_insert_duplicate_id() {
                let mut store = filled();
                let err = store
                    .insert(lamp("l3", "Duplicate", None, LampStatus::On))
                    .unwrap_err();
                assert_eq!(err.error_code(), "ENTITY_ALREADY_EXISTS");
                assert_eq!(store.get("l3").unwrap().name, "Night Light");

                assert!(store
                    .insert_first(lamp("l3", "Duplicate", None, LampStatus::On))
                    .is_err());
            }

            #[test]
            fn test_update_keeps_position() {
                let mut store = filled();
                let mut lamp = store.get("l2").unwrap();
                lamp.name = "Tall Lamp".to_string();
                store.update(lamp).unwrap();

                let listed = store.list();
                assert_eq!(listed[1].id, "l2");
                assert_eq!(listed[1].name, "Tall Lamp");
            }

            #[test]
            fn test_update_nonexistent() {
                let mut store = filled();
                let err = store
                    .update(lamp("l9", "Ghost", None, LampStatus::On))
                    .unwrap_err();
                assert_eq!(err.error_code(), "ENTITY_NOT_FOUND");
            }

            #[test]
            fn test_remove_existing() {
                let mut store = filled();
                let removed = store.remove("l2").unwrap();
                assert_eq!(removed.name, "Floor Lamp");
                assert!(store.get("l2").is_none());

                let ids: Vec<String> = store.list().iter().map(|l| l.id.clone()).collect();
                assert_eq!(ids, vec!["l1", "l3", "l4", "l5"]);
            }

            #[test]
            fn test_remove_nonexistent() {
                let mut store = filled();
                assert!(store.remove("missing").is_err());
                assert_eq!(store.len(), 5);
            }

            // ==================================================================
            // Modify
            // ==================================================================

            #[test]
            fn test_modify_applies_change() {
                let mut store = filled();
                let changed = store
                    .modify("l4", |lamp| {
                        lamp.status = LampStatus::On;
                        Ok(())
                    })
                    .unwrap();
                assert_eq!(changed.status, LampStatus::On);
                assert_eq!(store.get("l4").unwrap().status, LampStatus::On);
            }

            #[test]
            fn test_modify_rejected_change_is_not_stored() {
                let mut store = filled();
                let result = store.modify("l1", |lamp| {
                    lamp.name = "half-done".to_string();
                    Err(ConsoleError::validation("name", "rejected"))
                });
                assert!(result.is_err());
                assert_eq!(store.get("l1").unwrap().name, "Desk Lamp");
            }

            #[test]
            fn test_modify_nonexistent() {
                let mut store = filled();
                let err = store.modify("missing", |_| Ok(())).unwrap_err();
                assert!(matches!(
                    err,
                    ConsoleError::NotFound {
                        entity_type: "lamp",
                        ..
                    }
                ));
            }

            // ==================================================================
            // Filter
            // ==================================================================

            #[test]
            fn test_filter_free_text() {
                let store = filled();
                let rows = store.filter(&[Clause::free_text(Lamp::SEARCH_FIELDS, "STUDY")]);
                let ids: Vec<&str> = rows.iter().map(|l| l.id.as_str()).collect();
                assert_eq!(ids, vec!["l1", "l5"]);
            }

            #[test]
            fn test_filter_exact_status() {
                let store = filled();
                let rows = store.filter(&[Clause::exact("status", "꺼짐", ALL_SENTINEL)]);
                let ids: Vec<&str> = rows.iter().map(|l| l.id.as_str()).collect();
                assert_eq!(ids, vec!["l2", "l5"]);
            }

            #[test]
            fn test_filter_sentinel() {
                let store = filled();
                let rows = store.filter(&[Clause::exact("status", ALL_SENTINEL, ALL_SENTINEL)]);
                assert_eq!(rows, store.list());
            }
        }
    };
}
