//! Logged meals

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::record::{null_as_default, parse_wire_enum, Collection, RecordFields, WireEnum};
use crate::error::{FitlogError, Result};

/// One logged meal. Missing macro values are read as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionEntry {
    #[serde(rename = "datum")]
    pub date: NaiveDate,

    #[serde(rename = "mahlzeit_typ")]
    pub meal_type: MealType,

    #[serde(rename = "beschreibung", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "kalorien", default, deserialize_with = "null_as_default")]
    pub calories: f64,

    #[serde(rename = "protein", default, deserialize_with = "null_as_default")]
    pub protein_g: f64,

    #[serde(rename = "carbs", default, deserialize_with = "null_as_default")]
    pub carbs_g: f64,

    #[serde(rename = "fett", default, deserialize_with = "null_as_default")]
    pub fat_g: f64,
}

impl RecordFields for NutritionEntry {
    const COLLECTION: Collection = Collection::Nutrition;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealType {
    #[serde(rename = "fruehstueck")]
    Breakfast,
    #[serde(rename = "snack")]
    Snack,
    #[serde(rename = "mittagessen")]
    Lunch,
    #[serde(rename = "abendessen")]
    Dinner,
    #[serde(rename = "pre_workout")]
    PreWorkout,
    #[serde(rename = "post_workout")]
    PostWorkout,
    #[serde(rename = "sonstiges")]
    Other,
}

impl WireEnum for MealType {
    const ALL: &'static [Self] = &[
        Self::Breakfast,
        Self::Snack,
        Self::Lunch,
        Self::Dinner,
        Self::PreWorkout,
        Self::PostWorkout,
        Self::Other,
    ];

    fn wire(&self) -> &'static str {
        match self {
            Self::Breakfast => "fruehstueck",
            Self::Snack => "snack",
            Self::Lunch => "mittagessen",
            Self::Dinner => "abendessen",
            Self::PreWorkout => "pre_workout",
            Self::PostWorkout => "post_workout",
            Self::Other => "sonstiges",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Snack => "Snack",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
            Self::PreWorkout => "Pre workout",
            Self::PostWorkout => "Post workout",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MealType {
    type Err = FitlogError;

    fn from_str(s: &str) -> Result<Self> {
        parse_wire_enum("meal type", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_macros_default_to_zero() {
        let json = r#"{"datum": "2025-11-12", "mahlzeit_typ": "snack", "kalorien": 180}"#;

        let entry: NutritionEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.meal_type, MealType::Snack);
        assert_eq!(entry.calories, 180.0);
        assert_eq!(entry.protein_g, 0.0);
        assert_eq!(entry.carbs_g, 0.0);
        assert_eq!(entry.fat_g, 0.0);
        assert_eq!(entry.description, None);
    }

    #[test]
    fn test_null_macros_read_as_zero() {
        let json = r#"{"datum": "2025-11-13", "mahlzeit_typ": "snack",
                       "kalorien": 300, "protein": null, "carbs": 20, "fett": null}"#;

        let entry: NutritionEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.calories, 300.0);
        assert_eq!(entry.protein_g, 0.0);
        assert_eq!(entry.carbs_g, 20.0);
        assert_eq!(entry.fat_g, 0.0);
    }

    #[test]
    fn test_nutrition_wire_keys() {
        let entry = NutritionEntry {
            date: NaiveDate::from_ymd_opt(2025, 11, 12).unwrap(),
            meal_type: MealType::PostWorkout,
            description: Some("Shake".to_string()),
            calories: 320.0,
            protein_g: 40.0,
            carbs_g: 30.0,
            fat_g: 5.0,
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["mahlzeit_typ"], "post_workout");
        assert_eq!(json["beschreibung"], "Shake");
        assert_eq!(json["fett"], 5.0);
    }
}
