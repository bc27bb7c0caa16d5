//! Individual sets performed during a workout

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::record::{
    null_as_default, parse_wire_enum, Collection, RecordFields, RecordRef, WireEnum,
};
use crate::error::{FitlogError, Result};

/// One performed set, referencing its workout and exercise by locator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutLogSet {
    #[serde(rename = "workout", default, skip_serializing_if = "Option::is_none")]
    pub workout_ref: Option<RecordRef>,

    #[serde(rename = "uebung", default, skip_serializing_if = "Option::is_none")]
    pub exercise_ref: Option<RecordRef>,

    #[serde(rename = "satz_nummer", default, deserialize_with = "null_as_default")]
    pub set_number: u32,

    #[serde(rename = "gewicht", default, deserialize_with = "null_as_default")]
    pub weight: f64,

    #[serde(rename = "wiederholungen", default, deserialize_with = "null_as_default")]
    pub reps: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpe: Option<Rpe>,
}

impl WorkoutLogSet {
    /// Id of the referenced exercise, if the reference is usable
    pub fn exercise_id(&self) -> Option<&str> {
        self.exercise_ref.as_ref().and_then(RecordRef::id)
    }

    /// Id of the referenced workout, if the reference is usable
    pub fn workout_id(&self) -> Option<&str> {
        self.workout_ref.as_ref().and_then(RecordRef::id)
    }

    /// Weight moved in this set
    pub fn volume(&self) -> f64 {
        self.weight * f64::from(self.reps)
    }
}

impl RecordFields for WorkoutLogSet {
    const COLLECTION: Collection = Collection::WorkoutLogs;
}

/// Rate of perceived exertion
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rpe {
    #[serde(rename = "rpe_1")]
    Rpe1,
    #[serde(rename = "rpe_2")]
    Rpe2,
    #[serde(rename = "rpe_3")]
    Rpe3,
    #[serde(rename = "rpe_4")]
    Rpe4,
    #[serde(rename = "rpe_5")]
    Rpe5,
    #[serde(rename = "rpe_6")]
    Rpe6,
    #[serde(rename = "rpe_7")]
    Rpe7,
    #[serde(rename = "rpe_8")]
    Rpe8,
    #[serde(rename = "rpe_9")]
    Rpe9,
    #[serde(rename = "rpe_10")]
    Rpe10,
}

impl Rpe {
    pub fn value(&self) -> u8 {
        match self {
            Self::Rpe1 => 1,
            Self::Rpe2 => 2,
            Self::Rpe3 => 3,
            Self::Rpe4 => 4,
            Self::Rpe5 => 5,
            Self::Rpe6 => 6,
            Self::Rpe7 => 7,
            Self::Rpe8 => 8,
            Self::Rpe9 => 9,
            Self::Rpe10 => 10,
        }
    }
}

impl WireEnum for Rpe {
    const ALL: &'static [Self] = &[
        Self::Rpe1,
        Self::Rpe2,
        Self::Rpe3,
        Self::Rpe4,
        Self::Rpe5,
        Self::Rpe6,
        Self::Rpe7,
        Self::Rpe8,
        Self::Rpe9,
        Self::Rpe10,
    ];

    fn wire(&self) -> &'static str {
        match self {
            Self::Rpe1 => "rpe_1",
            Self::Rpe2 => "rpe_2",
            Self::Rpe3 => "rpe_3",
            Self::Rpe4 => "rpe_4",
            Self::Rpe5 => "rpe_5",
            Self::Rpe6 => "rpe_6",
            Self::Rpe7 => "rpe_7",
            Self::Rpe8 => "rpe_8",
            Self::Rpe9 => "rpe_9",
            Self::Rpe10 => "rpe_10",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Rpe1 => "1",
            Self::Rpe2 => "2",
            Self::Rpe3 => "3",
            Self::Rpe4 => "4",
            Self::Rpe5 => "5",
            Self::Rpe6 => "6",
            Self::Rpe7 => "7",
            Self::Rpe8 => "8",
            Self::Rpe9 => "9",
            Self::Rpe10 => "10",
        }
    }
}

impl fmt::Display for Rpe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RPE {}", self.value())
    }
}

impl FromStr for Rpe {
    type Err = FitlogError;

    fn from_str(s: &str) -> Result<Self> {
        parse_wire_enum("rpe", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_set_references() {
        let json = r#"{
            "workout": "https://my.living-apps.de/rest/apps/w/records/wk1",
            "uebung": "https://my.living-apps.de/rest/apps/u/records/ex7",
            "satz_nummer": 2,
            "gewicht": 80.0,
            "wiederholungen": 8,
            "rpe": "rpe_8"
        }"#;

        let set: WorkoutLogSet = serde_json::from_str(json).unwrap();
        assert_eq!(set.workout_id(), Some("wk1"));
        assert_eq!(set.exercise_id(), Some("ex7"));
        assert_eq!(set.rpe, Some(Rpe::Rpe8));
        assert_eq!(set.volume(), 640.0);
    }

    #[test]
    fn test_missing_reference_is_unresolved() {
        let json = r#"{"satz_nummer": 1, "gewicht": 20, "wiederholungen": 10}"#;

        let set: WorkoutLogSet = serde_json::from_str(json).unwrap();
        assert_eq!(set.exercise_id(), None);
        assert_eq!(set.workout_id(), None);
    }

    #[test]
    fn test_null_numbers_read_as_zero() {
        let json = r#"{"workout": null, "uebung": null, "satz_nummer": null,
                       "gewicht": null, "wiederholungen": null, "rpe": null}"#;

        let set: WorkoutLogSet = serde_json::from_str(json).unwrap();
        assert_eq!(set.set_number, 0);
        assert_eq!(set.weight, 0.0);
        assert_eq!(set.reps, 0);
        assert_eq!(set.volume(), 0.0);
    }

    #[test]
    fn test_rpe_parse() {
        assert_eq!("rpe_10".parse::<Rpe>().unwrap(), Rpe::Rpe10);
        assert_eq!("7".parse::<Rpe>().unwrap(), Rpe::Rpe7);
        assert!("11".parse::<Rpe>().is_err());
    }
}
