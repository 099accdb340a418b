//! Home carousel banners

use crate::closed_enum;
use crate::core::entity::{ClosedEnum, Data};
use crate::core::error::ConsoleError;
use crate::core::field::FieldValue;
use crate::core::filter::{Choice, Clause, FilterState};
use crate::core::reorder::{Direction, Ordered, move_item, sort_by_position};
use crate::impl_entity;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

closed_enum! {
    pub enum BannerStatus: "banner status" {
        Live => "노출중",
        Waiting => "대기",
        Ended => "종료",
        Disabled => "비활성",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub id: String,
    /// Carousel position, dense `1..=N` across all banners
    pub order: u32,
    pub title: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: NaiveDate,
    pub status: BannerStatus,
}

impl_entity!(Banner, BannerStatus, "banner", "banners");

impl Data for Banner {
    fn field_value(&self, field: &str) -> Option<FieldValue<'_>> {
        match field {
            "id" => Some(FieldValue::text(&self.id)),
            "order" => Some(FieldValue::Integer(i64::from(self.order))),
            "title" => Some(FieldValue::text(&self.title)),
            "image_url" => Some(FieldValue::text(&self.image_url)),
            "link_url" => self.link_url.as_deref().map(FieldValue::text),
            "start_date" => Some(FieldValue::Date(self.start_date)),
            "end_date" => Some(FieldValue::Date(self.end_date)),
            "created_at" => Some(FieldValue::Date(self.created_at)),
            "status" => Some(FieldValue::text(self.status.as_str())),
            _ => None,
        }
    }
}

impl Ordered for Banner {
    fn key(&self) -> &str {
        &self.id
    }

    fn position(&self) -> u32 {
        self.order
    }

    fn set_position(&mut self, position: u32) {
        self.order = position;
    }
}

/// Editable banner content; position is managed by the console
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_period"))]
pub struct BannerDraft {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub image_url: String,
    #[serde(default)]
    pub link_url: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: BannerStatus,
}

fn validate_period(draft: &BannerDraft) -> Result<(), validator::ValidationError> {
    if draft.start_date <= draft.end_date {
        Ok(())
    } else {
        Err(validator::ValidationError::new("period")
            .with_message("start date must not be after end date".into()))
    }
}

impl BannerDraft {
    /// Validate and map the first violation to a console error
    pub fn check(&self) -> Result<(), ConsoleError> {
        self.validate().map_err(|errors| {
            let field = errors
                .field_errors()
                .keys()
                .map(|k| k.to_string())
                .find(|k| k != "__all__")
                .unwrap_or_else(|| "period".to_string());
            ConsoleError::validation(field, errors.to_string())
        })
    }
}

impl Banner {
    /// Overwrite the content fields, keeping id, order and creation date
    pub fn apply_draft(&mut self, draft: BannerDraft) {
        self.title = draft.title;
        self.image_url = draft.image_url;
        self.link_url = draft.link_url;
        self.start_date = draft.start_date;
        self.end_date = draft.end_date;
        self.status = draft.status;
    }
}

/// Move banner `id` one step and return all banners sorted by order
pub fn move_banner(banners: Vec<Banner>, id: &str, direction: Direction) -> Vec<Banner> {
    move_item(banners, id, direction)
}

/// Banner list: status filter, then ascending carousel order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BannerFilter {
    pub status: Choice<BannerStatus>,
}

impl FilterState for BannerFilter {
    type Entity = Banner;

    fn clauses(&self, all_sentinel: &str) -> Vec<Clause> {
        vec![self.status.to_clause("status", all_sentinel)]
    }

    fn arrange(&self, mut rows: Vec<Banner>) -> Vec<Banner> {
        sort_by_position(&mut rows);
        rows
    }
}
