//! Shared test harness for `EntityStore` implementations
//!
//! Provides `Lamp`, a small entity implementing `Entity + Data` with a
//! closed status vocabulary, plus helpers for building test records.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod store_harness;
//! use store_harness::*;
//! ```

#![allow(dead_code)]

#[macro_use]
pub mod entity_store_tests;

use market_admin::closed_enum;
use market_admin::core::entity::{ClosedEnum, Data};
use market_admin::core::field::{Field, FieldValue};
use market_admin::impl_entity;
use serde::{Deserialize, Serialize};

closed_enum! {
    pub enum LampStatus: "lamp status" {
        On => "켜짐",
        Off => "꺼짐",
        Broken => "고장",
    }
}

/// A test entity covering text, integer and optional fields
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lamp {
    pub id: String,
    pub name: String,
    pub room: Option<String>,
    pub watts: i64,
    pub status: LampStatus,
}

impl_entity!(Lamp, LampStatus, "lamp", "lamps");

impl Data for Lamp {
    fn field_value(&self, field: &str) -> Option<FieldValue<'_>> {
        match field {
            "id" => Some(FieldValue::text(&self.id)),
            "name" => Some(FieldValue::text(&self.name)),
            "room" => self.room.as_deref().map(FieldValue::text),
            "watts" => Some(FieldValue::Integer(self.watts)),
            "status" => Some(FieldValue::text(self.status.as_str())),
            _ => None,
        }
    }
}

impl Lamp {
    pub const SEARCH_FIELDS: &'static [Field] = &[Field::folded("name"), Field::folded("room")];
}

pub fn lamp(id: &str, name: &str, room: Option<&str>, status: LampStatus) -> Lamp {
    Lamp {
        id: id.to_string(),
        name: name.to_string(),
        room: room.map(String::from),
        watts: 60,
        status,
    }
}

/// Five lamps in a fixed order
pub fn sample_lamps() -> Vec<Lamp> {
    vec![
        lamp("l1", "Desk Lamp", Some("Study"), LampStatus::On),
        lamp("l2", "Floor Lamp", Some("Living"), LampStatus::Off),
        lamp("l3", "Night Light", None, LampStatus::On),
        lamp("l4", "Porch Light", Some("Outside"), LampStatus::Broken),
        lamp("l5", "Reading Lamp", Some("study"), LampStatus::Off),
    ]
}
