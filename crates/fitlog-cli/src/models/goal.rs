//! Daily and weekly targets

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::record::{parse_wire_enum, Collection, RecordFields, WireEnum};
use crate::error::{FitlogError, Result};

/// A set of targets. Several goals may be active at once; the store does not
/// enforce uniqueness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    #[serde(rename = "taeglich_kalorien", default, skip_serializing_if = "Option::is_none")]
    pub daily_calories: Option<f64>,

    #[serde(rename = "taeglich_protein", default, skip_serializing_if = "Option::is_none")]
    pub daily_protein_g: Option<f64>,

    #[serde(
        rename = "trainingstage_pro_woche",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub training_days_per_week: Option<f64>,

    #[serde(rename = "schlaf_ziel_stunden", default, skip_serializing_if = "Option::is_none")]
    pub sleep_goal_hours: Option<f64>,

    pub status: GoalStatus,

    #[serde(rename = "notizen", default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl RecordFields for Goal {
    const COLLECTION: Collection = Collection::Goals;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoalStatus {
    #[serde(rename = "aktiv")]
    Active,
    #[serde(rename = "erreicht")]
    Achieved,
    #[serde(rename = "verworfen")]
    Abandoned,
}

impl WireEnum for GoalStatus {
    const ALL: &'static [Self] = &[Self::Active, Self::Achieved, Self::Abandoned];

    fn wire(&self) -> &'static str {
        match self {
            Self::Active => "aktiv",
            Self::Achieved => "erreicht",
            Self::Abandoned => "verworfen",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Achieved => "Achieved",
            Self::Abandoned => "Abandoned",
        }
    }
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GoalStatus {
    type Err = FitlogError;

    fn from_str(s: &str) -> Result<Self> {
        parse_wire_enum("goal status", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_goal() {
        let json = r#"{"taeglich_kalorien": 2500, "status": "aktiv"}"#;

        let goal: Goal = serde_json::from_str(json).unwrap();
        assert_eq!(goal.daily_calories, Some(2500.0));
        assert_eq!(goal.daily_protein_g, None);
        assert_eq!(goal.status, GoalStatus::Active);

        let back = serde_json::to_value(&goal).unwrap();
        assert!(back.get("taeglich_protein").is_none());
        assert_eq!(back["status"], "aktiv");
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("achieved".parse::<GoalStatus>().unwrap(), GoalStatus::Achieved);
        assert_eq!("verworfen".parse::<GoalStatus>().unwrap(), GoalStatus::Abandoned);
    }
}
