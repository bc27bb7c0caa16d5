//! Record types for the six collections held by the record store

pub mod body;
pub mod exercise;
pub mod goal;
pub mod nutrition;
pub mod record;
pub mod workout;
pub mod workout_log;

pub use body::BodyMetrics;
pub use exercise::{Difficulty, Equipment, Exercise, MuscleGroup};
pub use goal::{Goal, GoalStatus};
pub use nutrition::{MealType, NutritionEntry};
pub use record::{extract_id, Collection, Record, RecordFields, RecordRef, WireEnum};
pub use workout::{Mood, Workout, WorkoutType};
pub use workout_log::{Rpe, WorkoutLogSet};
