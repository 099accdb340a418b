//! Derived statistics helpers
//!
//! Degenerate inputs (no reviews, zero targets) yield `None`, which is
//! displayed as a dash. No helper here ever produces NaN or infinity.

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Placeholder shown for an absent statistic
pub const ABSENT_DISPLAY: &str = "-";

/// Round to one decimal place
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Mean of `ratings`, one decimal, `None` when there are none
pub fn average_rating<I>(ratings: I) -> Option<f64>
where
    I: IntoIterator<Item = u8>,
{
    let (sum, count) = ratings
        .into_iter()
        .fold((0u64, 0u64), |(sum, count), r| (sum + u64::from(r), count + 1));
    if count == 0 {
        return None;
    }
    Some(round1(sum as f64 / count as f64))
}

/// `success / target * 100`, one decimal
///
/// `None` when there is no success count yet or nothing was targeted.
pub fn success_rate(success: Option<u64>, target: u64) -> Option<f64> {
    let success = success?;
    if target == 0 {
        return None;
    }
    Some(round1(success as f64 / target as f64 * 100.0))
}

/// Mean of the present values, one decimal
pub fn mean_present<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    let (sum, count) = values
        .into_iter()
        .flatten()
        .fold((0.0, 0u32), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        None
    } else {
        Some(round1(sum / f64::from(count)))
    }
}

/// Render an optional statistic, `-` when absent
pub fn display_or_dash<T: fmt::Display>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| ABSENT_DISPLAY.to_string())
}

/// Render a percentage with one decimal, `-` when absent
pub fn display_percent(rate: Option<f64>) -> String {
    rate.map(|r| format!("{:.1}%", r))
        .unwrap_or_else(|| ABSENT_DISPLAY.to_string())
}

/// Display band of a customer's manner score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MannerBand {
    #[serde(rename = "우수")]
    Excellent,
    #[serde(rename = "양호")]
    Good,
    #[serde(rename = "주의")]
    Caution,
    #[serde(rename = "낮음")]
    Low,
}

impl MannerBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            MannerBand::Excellent => "우수",
            MannerBand::Good => "양호",
            MannerBand::Caution => "주의",
            MannerBand::Low => "낮음",
        }
    }
}

impl fmt::Display for MannerBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lower bounds of the manner bands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
#[validate(schema(function = "validate_band_order"))]
pub struct MannerBands {
    #[validate(range(max = 100))]
    pub excellent: u8,
    #[validate(range(max = 100))]
    pub good: u8,
    #[validate(range(max = 100))]
    pub caution: u8,
}

impl Default for MannerBands {
    fn default() -> Self {
        Self {
            excellent: 90,
            good: 70,
            caution: 50,
        }
    }
}

impl MannerBands {
    /// Band for `score`
    pub fn classify(&self, score: u8) -> MannerBand {
        if score >= self.excellent {
            MannerBand::Excellent
        } else if score >= self.good {
            MannerBand::Good
        } else if score >= self.caution {
            MannerBand::Caution
        } else {
            MannerBand::Low
        }
    }
}

fn validate_band_order(bands: &MannerBands) -> Result<(), validator::ValidationError> {
    if bands.excellent > bands.good && bands.good > bands.caution {
        Ok(())
    } else {
        Err(validator::ValidationError::new("band_order")
            .with_message("manner bands must be strictly descending".into()))
    }
}
