//! Exercise catalogue entries

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::record::{parse_wire_enum, Collection, RecordFields, WireEnum};
use crate::error::{FitlogError, Result};

/// A lookup entry describing one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    #[serde(default)]
    pub name: String,

    #[serde(rename = "muskelgruppe")]
    pub muscle_group: MuscleGroup,

    pub equipment: Equipment,

    #[serde(rename = "schwierigkeitsgrad")]
    pub difficulty: Difficulty,
}

impl RecordFields for Exercise {
    const COLLECTION: Collection = Collection::Exercises;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MuscleGroup {
    #[serde(rename = "brust")]
    Chest,
    #[serde(rename = "ruecken")]
    Back,
    #[serde(rename = "beine")]
    Legs,
    #[serde(rename = "schultern")]
    Shoulders,
    #[serde(rename = "bizeps")]
    Biceps,
    #[serde(rename = "trizeps")]
    Triceps,
    #[serde(rename = "bauch")]
    Abs,
    #[serde(rename = "ganzkoerper")]
    FullBody,
}

impl WireEnum for MuscleGroup {
    const ALL: &'static [Self] = &[
        Self::Chest,
        Self::Back,
        Self::Legs,
        Self::Shoulders,
        Self::Biceps,
        Self::Triceps,
        Self::Abs,
        Self::FullBody,
    ];

    fn wire(&self) -> &'static str {
        match self {
            Self::Chest => "brust",
            Self::Back => "ruecken",
            Self::Legs => "beine",
            Self::Shoulders => "schultern",
            Self::Biceps => "bizeps",
            Self::Triceps => "trizeps",
            Self::Abs => "bauch",
            Self::FullBody => "ganzkoerper",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Chest => "Chest",
            Self::Back => "Back",
            Self::Legs => "Legs",
            Self::Shoulders => "Shoulders",
            Self::Biceps => "Biceps",
            Self::Triceps => "Triceps",
            Self::Abs => "Abs",
            Self::FullBody => "Full body",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Equipment {
    #[serde(rename = "langhantel")]
    Barbell,
    #[serde(rename = "kurzhantel")]
    Dumbbell,
    #[serde(rename = "maschine")]
    Machine,
    #[serde(rename = "kabelzug")]
    Cable,
    #[serde(rename = "bodyweight")]
    Bodyweight,
    #[serde(rename = "kettlebell")]
    Kettlebell,
    #[serde(rename = "resistance_band")]
    ResistanceBand,
    #[serde(rename = "sonstiges")]
    Other,
}

impl WireEnum for Equipment {
    const ALL: &'static [Self] = &[
        Self::Barbell,
        Self::Dumbbell,
        Self::Machine,
        Self::Cable,
        Self::Bodyweight,
        Self::Kettlebell,
        Self::ResistanceBand,
        Self::Other,
    ];

    fn wire(&self) -> &'static str {
        match self {
            Self::Barbell => "langhantel",
            Self::Dumbbell => "kurzhantel",
            Self::Machine => "maschine",
            Self::Cable => "kabelzug",
            Self::Bodyweight => "bodyweight",
            Self::Kettlebell => "kettlebell",
            Self::ResistanceBand => "resistance_band",
            Self::Other => "sonstiges",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Barbell => "Barbell",
            Self::Dumbbell => "Dumbbell",
            Self::Machine => "Machine",
            Self::Cable => "Cable",
            Self::Bodyweight => "Bodyweight",
            Self::Kettlebell => "Kettlebell",
            Self::ResistanceBand => "Resistance band",
            Self::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[serde(rename = "anfaenger")]
    Beginner,
    #[serde(rename = "fortgeschritten")]
    Intermediate,
    #[serde(rename = "experte")]
    Expert,
}

impl WireEnum for Difficulty {
    const ALL: &'static [Self] = &[Self::Beginner, Self::Intermediate, Self::Expert];

    fn wire(&self) -> &'static str {
        match self {
            Self::Beginner => "anfaenger",
            Self::Intermediate => "fortgeschritten",
            Self::Expert => "experte",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Expert => "Expert",
        }
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Equipment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MuscleGroup {
    type Err = FitlogError;

    fn from_str(s: &str) -> Result<Self> {
        parse_wire_enum("muscle group", s)
    }
}

impl FromStr for Equipment {
    type Err = FitlogError;

    fn from_str(s: &str) -> Result<Self> {
        parse_wire_enum("equipment", s)
    }
}

impl FromStr for Difficulty {
    type Err = FitlogError;

    fn from_str(s: &str) -> Result<Self> {
        parse_wire_enum("difficulty", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exercise_wire_format() {
        let json = r#"{
            "name": "Bench Press",
            "muskelgruppe": "brust",
            "equipment": "langhantel",
            "schwierigkeitsgrad": "fortgeschritten"
        }"#;

        let exercise: Exercise = serde_json::from_str(json).unwrap();
        assert_eq!(exercise.name, "Bench Press");
        assert_eq!(exercise.muscle_group, MuscleGroup::Chest);
        assert_eq!(exercise.equipment, Equipment::Barbell);
        assert_eq!(exercise.difficulty, Difficulty::Intermediate);
    }

    #[test]
    fn test_wire_values_match_serde() {
        for group in MuscleGroup::ALL {
            let json = serde_json::to_value(group).unwrap();
            assert_eq!(json, group.wire());
        }
        for equipment in Equipment::ALL {
            let json = serde_json::to_value(equipment).unwrap();
            assert_eq!(json, equipment.wire());
        }
    }

    #[test]
    fn test_parse_accepts_label_or_wire() {
        assert_eq!("ruecken".parse::<MuscleGroup>().unwrap(), MuscleGroup::Back);
        assert_eq!("Back".parse::<MuscleGroup>().unwrap(), MuscleGroup::Back);
        assert_eq!("resistance band".parse::<Equipment>().unwrap(), Equipment::ResistanceBand);
        assert!("wizard".parse::<Difficulty>().is_err());
    }
}
