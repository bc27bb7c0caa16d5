//! Training sessions and rest days

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::record::{null_as_default, parse_wire_enum, Collection, RecordFields, WireEnum};
use crate::error::{FitlogError, Result};

/// One training session or rest day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    #[serde(rename = "datum")]
    pub date: NaiveDate,

    #[serde(rename = "typ")]
    pub workout_type: WorkoutType,

    #[serde(rename = "dauer_minuten", default, deserialize_with = "null_as_default")]
    pub duration_minutes: u32,

    /// How the session felt; rest days often leave this empty
    #[serde(rename = "stimmung", default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,

    #[serde(rename = "rest_day", default, deserialize_with = "null_as_default")]
    pub is_rest_day: bool,
}

impl RecordFields for Workout {
    const COLLECTION: Collection = Collection::Workouts;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutType {
    #[serde(rename = "push")]
    Push,
    #[serde(rename = "pull")]
    Pull,
    #[serde(rename = "beine")]
    Legs,
    #[serde(rename = "ganzkoerper")]
    FullBody,
    #[serde(rename = "oberkoerper")]
    UpperBody,
    #[serde(rename = "unterkoerper")]
    LowerBody,
    #[serde(rename = "cardio")]
    Cardio,
    #[serde(rename = "sonstiges")]
    Other,
}

impl WireEnum for WorkoutType {
    const ALL: &'static [Self] = &[
        Self::Push,
        Self::Pull,
        Self::Legs,
        Self::FullBody,
        Self::UpperBody,
        Self::LowerBody,
        Self::Cardio,
        Self::Other,
    ];

    fn wire(&self) -> &'static str {
        match self {
            Self::Push => "push",
            Self::Pull => "pull",
            Self::Legs => "beine",
            Self::FullBody => "ganzkoerper",
            Self::UpperBody => "oberkoerper",
            Self::LowerBody => "unterkoerper",
            Self::Cardio => "cardio",
            Self::Other => "sonstiges",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Push => "Push",
            Self::Pull => "Pull",
            Self::Legs => "Legs",
            Self::FullBody => "Full body",
            Self::UpperBody => "Upper body",
            Self::LowerBody => "Lower body",
            Self::Cardio => "Cardio",
            Self::Other => "Other",
        }
    }
}

/// Post-session mood, ordered from worst to best
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    #[serde(rename = "schlecht")]
    Bad,
    #[serde(rename = "okay")]
    Okay,
    #[serde(rename = "gut")]
    Good,
    #[serde(rename = "brutal")]
    Brutal,
}

impl WireEnum for Mood {
    const ALL: &'static [Self] = &[Self::Bad, Self::Okay, Self::Good, Self::Brutal];

    fn wire(&self) -> &'static str {
        match self {
            Self::Bad => "schlecht",
            Self::Okay => "okay",
            Self::Good => "gut",
            Self::Brutal => "brutal",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Bad => "Bad",
            Self::Okay => "Okay",
            Self::Good => "Good",
            Self::Brutal => "Brutal",
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WorkoutType {
    type Err = FitlogError;

    fn from_str(s: &str) -> Result<Self> {
        parse_wire_enum("workout type", s)
    }
}

impl FromStr for Mood {
    type Err = FitlogError;

    fn from_str(s: &str) -> Result<Self> {
        parse_wire_enum("mood", s)
    }
}
