//! Field values, field references and field formats

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

/// A borrowed view of one entity field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    Text(Cow<'a, str>),
    Integer(i64),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl<'a> FieldValue<'a> {
    /// Wrap a borrowed string
    pub fn text(s: &'a str) -> Self {
        FieldValue::Text(Cow::Borrowed(s))
    }

    /// Textual form used by exact and substring clauses
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Text(s) => Cow::Borrowed(s.as_ref()),
            FieldValue::Integer(i) => Cow::Owned(i.to_string()),
            FieldValue::Date(d) => Cow::Owned(d.format("%Y-%m-%d").to_string()),
            FieldValue::DateTime(dt) => Cow::Owned(dt.format("%Y-%m-%d %H:%M").to_string()),
        }
    }

    /// Calendar date of a date or date-time value
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FieldValue::Date(d) => Some(*d),
            FieldValue::DateTime(dt) => Some(dt.date()),
            _ => None,
        }
    }
}

/// How a free-text query is compared against a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Lowercase both sides before the substring test
    CaseInsensitive,
    /// Plain substring test (phone numbers, ids)
    Verbatim,
}

/// A named field reference with its free-text comparison mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub mode: MatchMode,
}

impl Field {
    /// A field searched case-insensitively
    pub const fn folded(name: &'static str) -> Self {
        Self {
            name,
            mode: MatchMode::CaseInsensitive,
        }
    }

    /// A field searched verbatim
    pub const fn verbatim(name: &'static str) -> Self {
        Self {
            name,
            mode: MatchMode::Verbatim,
        }
    }

    /// Substring test of `query` against `value` under this field's mode.
    ///
    /// `query_lower` is the pre-lowercased query so that a clause lowercases
    /// it once per evaluation rather than once per field.
    pub fn contains(&self, value: &str, query: &str, query_lower: &str) -> bool {
        match self.mode {
            MatchMode::CaseInsensitive => value.to_lowercase().contains(query_lower),
            MatchMode::Verbatim => value.contains(query),
        }
    }
}

/// Field format validators
#[derive(Debug, Clone)]
pub enum FieldFormat {
    /// Korean mobile number, hyphens optional (e.g. `010-1234-5678`)
    MobilePhone,
    /// Generated coupon code (`COUPON` followed by six digits)
    CouponCode,
    Custom(Regex),
}

impl FieldFormat {
    /// Validate a string against this format
    pub fn validate(&self, value: &str) -> bool {
        match self {
            FieldFormat::MobilePhone => Self::is_valid_mobile(value),
            FieldFormat::CouponCode => Self::is_valid_coupon_code(value),
            FieldFormat::Custom(regex) => regex.is_match(value),
        }
    }

    fn is_valid_mobile(phone: &str) -> bool {
        static MOBILE_REGEX: OnceLock<Regex> = OnceLock::new();
        MOBILE_REGEX
            .get_or_init(|| {
                Regex::new(r"^01[016789]-?\d{3,4}-?\d{4}$").expect("mobile pattern is valid")
            })
            .is_match(phone)
    }

    fn is_valid_coupon_code(code: &str) -> bool {
        static CODE_REGEX: OnceLock<Regex> = OnceLock::new();
        CODE_REGEX
            .get_or_init(|| Regex::new(r"^COUPON\d{6}$").expect("coupon pattern is valid"))
            .is_match(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_text() {
        let value = FieldValue::text("떡볶이");
        assert_eq!(value.as_text(), "떡볶이");
        assert_eq!(value.as_date(), None);
    }

    #[test]
    fn test_field_value_integer_as_text() {
        assert_eq!(FieldValue::Integer(42).as_text(), "42");
    }

    #[test]
    fn test_field_value_datetime_as_date() {
        let dt = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(18, 30, 0)
            .unwrap();
        let value = FieldValue::DateTime(dt);
        assert_eq!(value.as_date(), NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(value.as_text(), "2024-03-01 18:30");
    }

    #[test]
    fn test_folded_field_ignores_case() {
        let field = Field::folded("email");
        assert!(field.contains("Kim@Example.com", "KIM", "kim"));
    }

    #[test]
    fn test_verbatim_field_is_case_sensitive() {
        let field = Field::verbatim("id");
        assert!(field.contains("C-001", "C-0", "c-0"));
        assert!(!field.contains("C-001", "c-0", "c-0"));
    }

    #[test]
    fn test_mobile_phone_format() {
        assert!(FieldFormat::MobilePhone.validate("01011112222"));
        assert!(FieldFormat::MobilePhone.validate("010-1111-2222"));
        assert!(!FieldFormat::MobilePhone.validate("02-123-4567"));
        assert!(!FieldFormat::MobilePhone.validate("hello"));
    }

    #[test]
    fn test_coupon_code_format() {
        assert!(FieldFormat::CouponCode.validate("COUPON123456"));
        assert!(!FieldFormat::CouponCode.validate("COUPON12345"));
    }

    #[test]
    fn test_custom_format() {
        let format = FieldFormat::Custom(Regex::new(r"^ORD-\d+$").unwrap());
        assert!(format.validate("ORD-20240101"));
        assert!(!format.validate("20240101"));
    }
}
