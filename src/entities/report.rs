//! Reports filed between stores and customers

use crate::closed_enum;
use crate::core::entity::{ClosedEnum, Data};
use crate::core::error::ConsoleError;
use crate::core::field::FieldValue;
use crate::core::filter::{Choice, Clause, FilterState};
use crate::impl_entity;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

closed_enum! {
    /// Who reported whom
    pub enum ReportType: "report type" {
        StoreToCustomer => "가게→고객",
        CustomerToStore => "고객→가게",
    }
}

closed_enum! {
    pub enum ReportStatus: "report status" {
        Received => "접수",
        InProgress => "처리중",
        Blacklisted => "블랙",
        Released => "해제",
    }
}

impl ReportStatus {
    /// The single next state, `None` once released
    pub fn next(&self) -> Option<ReportStatus> {
        match self {
            ReportStatus::Received => Some(ReportStatus::InProgress),
            ReportStatus::InProgress => Some(ReportStatus::Blacklisted),
            ReportStatus::Blacklisted => Some(ReportStatus::Released),
            ReportStatus::Released => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    pub reported_at: NaiveDate,
    #[serde(rename = "type")]
    pub report_type: ReportType,
    /// Reporter display text, contains the reporter's phone for customers
    pub reporter: String,
    pub reported: String,
    pub reason: String,
    pub status: ReportStatus,
}

impl_entity!(Report, ReportStatus, "report", "reports");

impl Data for Report {
    fn field_value(&self, field: &str) -> Option<FieldValue<'_>> {
        match field {
            "id" => Some(FieldValue::text(&self.id)),
            "reported_at" => Some(FieldValue::Date(self.reported_at)),
            "type" => Some(FieldValue::text(self.report_type.as_str())),
            "reporter" => Some(FieldValue::text(&self.reporter)),
            "reported" => Some(FieldValue::text(&self.reported)),
            "reason" => Some(FieldValue::text(&self.reason)),
            "status" => Some(FieldValue::text(self.status.as_str())),
            _ => None,
        }
    }
}

impl Report {
    /// Move `to` if it is the next step of the linear lifecycle
    pub fn transition(&mut self, to: ReportStatus) -> Result<(), ConsoleError> {
        if self.status.next() != Some(to) {
            return Err(ConsoleError::invalid_transition(self, to));
        }
        self.status = to;
        Ok(())
    }

    /// Either party mentions `needle` (e.g. a customer phone)
    pub fn involves(&self, needle: &str) -> bool {
        self.reporter.contains(needle) || self.reported.contains(needle)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportFilter {
    pub report_type: Choice<ReportType>,
    pub status: Choice<ReportStatus>,
}

impl FilterState for ReportFilter {
    type Entity = Report;

    fn clauses(&self, all_sentinel: &str) -> Vec<Clause> {
        vec![
            self.report_type.to_clause("type", all_sentinel),
            self.status.to_clause("status", all_sentinel),
        ]
    }
}
