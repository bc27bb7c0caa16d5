//! Body weight and circumference measurements

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::record::{Collection, RecordFields};

/// A dated measurement entry. Every measurement is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyMetrics {
    #[serde(rename = "datum")]
    pub date: NaiveDate,

    #[serde(rename = "gewicht_kg", default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,

    /// Estimated body fat percentage
    #[serde(rename = "kfa_geschaetzt", default, skip_serializing_if = "Option::is_none")]
    pub body_fat_pct: Option<f64>,

    #[serde(rename = "brustumfang", default, skip_serializing_if = "Option::is_none")]
    pub chest_cm: Option<f64>,

    #[serde(rename = "taillenumfang", default, skip_serializing_if = "Option::is_none")]
    pub waist_cm: Option<f64>,

    #[serde(rename = "hueftumfang", default, skip_serializing_if = "Option::is_none")]
    pub hip_cm: Option<f64>,

    #[serde(rename = "armumfang", default, skip_serializing_if = "Option::is_none")]
    pub arm_cm: Option<f64>,

    #[serde(rename = "beinumfang", default, skip_serializing_if = "Option::is_none")]
    pub leg_cm: Option<f64>,

    #[serde(rename = "notizen", default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl BodyMetrics {
    /// An entry holding only a date
    pub fn on(date: NaiveDate) -> Self {
        Self {
            date,
            weight_kg: None,
            body_fat_pct: None,
            chest_cm: None,
            waist_cm: None,
            hip_cm: None,
            arm_cm: None,
            leg_cm: None,
            notes: None,
        }
    }

    pub fn with_weight(mut self, weight_kg: f64) -> Self {
        self.weight_kg = Some(weight_kg);
        self
    }
}

impl RecordFields for BodyMetrics {
    const COLLECTION: Collection = Collection::BodyMetrics;
}
