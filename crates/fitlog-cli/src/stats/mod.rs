//! Derived metrics over a snapshot of the record store
//!
//! Every function here is pure. Inputs are borrowed record slices plus an
//! injected date, and missing data degrades to a fallback value (zero, `None`
//! or a placeholder name) instead of an error.

pub mod summary;

pub use summary::{DashboardSummary, GoalProgress, MacroShare};

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::Serialize;
use std::collections::HashMap;

use crate::models::{
    BodyMetrics, Exercise, Goal, GoalStatus, Mood, NutritionEntry, Record, WireEnum, Workout,
    WorkoutLogSet, WorkoutType,
};

/// Display name for log sets whose exercise cannot be resolved
pub const UNKNOWN_EXERCISE: &str = "Unknown";

/// Weeks start on Monday
pub const WEEK_START: Weekday = Weekday::Mon;

/// Number of weigh-ins kept for the weight chart
pub const WEIGHT_CHART_POINTS: usize = 8;

/// Default length of the top exercise ranking
pub const TOP_EXERCISES: usize = 5;

/// Default length of the recent workout list
pub const RECENT_WORKOUTS: usize = 5;

/// Inclusive calendar bounds of a week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekBounds {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WeekBounds {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Summed nutrition values for a set of meals
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct NutritionTotals {
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

/// A single weigh-in on the weight chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightPoint {
    pub date: NaiveDate,
    /// Short `dd.MM` axis label
    pub label: String,
    pub weight_kg: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WeightTrend {
    /// Most recent weigh-ins, oldest first
    pub points: Vec<WeightPoint>,
    pub current_kg: Option<f64>,
    /// Latest minus previous weigh-in; `None` with fewer than two weigh-ins
    pub change_kg: Option<f64>,
}

/// Count of records falling into one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCount<K> {
    pub key: K,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExerciseRank {
    pub exercise_id: String,
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Macro {
    Protein,
    Carbs,
    Fat,
}

impl Macro {
    pub const ALL: [Macro; 3] = [Macro::Protein, Macro::Carbs, Macro::Fat];

    /// Energy content in kcal per gram
    pub fn kcal_per_gram(&self) -> f64 {
        match self {
            Macro::Protein | Macro::Carbs => 4.0,
            Macro::Fat => 9.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Macro::Protein => "Protein",
            Macro::Carbs => "Carbs",
            Macro::Fat => "Fat",
        }
    }

    /// Grams of this macro in a totals record
    pub fn grams(&self, totals: &NutritionTotals) -> f64 {
        match self {
            Macro::Protein => totals.protein_g,
            Macro::Carbs => totals.carbs_g,
            Macro::Fat => totals.fat_g,
        }
    }
}

/// Calories contributed by one macro
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MacroSlice {
    #[serde(rename = "macro")]
    pub macro_kind: Macro,
    pub calories: f64,
}

/// First goal with status active, in snapshot order
pub fn active_goal(goals: &[Record<Goal>]) -> Option<&Record<Goal>> {
    goals.iter().find(|g| g.fields.status == GoalStatus::Active)
}

/// Inclusive bounds of the week containing `today`
pub fn week_bounds(today: NaiveDate, week_start: Weekday) -> WeekBounds {
    let offset =
        (7 + today.weekday().num_days_from_monday() - week_start.num_days_from_monday()) % 7;
    let start = today - Duration::days(i64::from(offset));
    WeekBounds {
        start,
        end: start + Duration::days(6),
    }
}

/// Training sessions (rest days excluded) dated within `bounds`
pub fn workouts_this_week<'a>(
    workouts: &'a [Record<Workout>],
    bounds: WeekBounds,
) -> Vec<&'a Record<Workout>> {
    workouts
        .iter()
        .filter(|w| !w.fields.is_rest_day && bounds.contains(w.fields.date))
        .collect()
}

/// Meals logged on `today`, in snapshot order
pub fn today_meals(
    entries: &[Record<NutritionEntry>],
    today: NaiveDate,
) -> Vec<&Record<NutritionEntry>> {
    entries.iter().filter(|e| e.fields.date == today).collect()
}

/// Sum of the nutrition values logged on `today`
pub fn today_nutrition_totals(
    entries: &[Record<NutritionEntry>],
    today: NaiveDate,
) -> NutritionTotals {
    today_meals(entries, today)
        .into_iter()
        .fold(NutritionTotals::default(), |acc, e| NutritionTotals {
            calories: acc.calories + e.fields.calories,
            protein_g: acc.protein_g + e.fields.protein_g,
            carbs_g: acc.carbs_g + e.fields.carbs_g,
            fat_g: acc.fat_g + e.fields.fat_g,
        })
}

/// Percentage of `target` reached by `actual`.
///
/// Returns 0 when there is no usable target. The value is not clamped, so
/// overshooting a target yields more than 100.
pub fn progress_ratio(actual: f64, target: Option<f64>) -> f64 {
    match target {
        Some(t) if t != 0.0 && t.is_finite() => actual / t * 100.0,
        _ => 0.0,
    }
}

/// Weight history for charting plus the change between the last two weigh-ins
pub fn weight_trend(metrics: &[Record<BodyMetrics>]) -> WeightTrend {
    // A zero weight counts as not recorded
    let mut weighed: Vec<(NaiveDate, f64)> = metrics
        .iter()
        .filter_map(|m| {
            m.fields
                .weight_kg
                .filter(|w| *w != 0.0 && w.is_finite())
                .map(|w| (m.fields.date, w))
        })
        .collect();
    weighed.sort_by_key(|(date, _)| *date);

    let skip = weighed.len().saturating_sub(WEIGHT_CHART_POINTS);
    let points = weighed[skip..]
        .iter()
        .map(|(date, weight)| WeightPoint {
            date: *date,
            label: date.format("%d.%m").to_string(),
            weight_kg: *weight,
        })
        .collect();

    let current_kg = weighed.last().map(|(_, w)| *w);
    let previous_kg = weighed.len().checked_sub(2).map(|i| weighed[i].1);
    let change_kg = match (current_kg, previous_kg) {
        (Some(current), Some(previous)) => Some(current - previous),
        _ => None,
    };

    WeightTrend {
        points,
        current_kg,
        change_kg,
    }
}

/// Training sessions per workout type, in order of first occurrence
pub fn type_distribution(workouts: &[Record<Workout>]) -> Vec<CategoryCount<WorkoutType>> {
    let mut counts: Vec<CategoryCount<WorkoutType>> = Vec::new();
    for workout in workouts.iter().filter(|w| !w.fields.is_rest_day) {
        let key = workout.fields.workout_type;
        match counts.iter_mut().find(|c| c.key == key) {
            Some(entry) => entry.count += 1,
            None => counts.push(CategoryCount { key, count: 1 }),
        }
    }
    counts
}

/// The `n` most frequently logged exercises.
///
/// Ties keep the order in which exercises first appear in `log_sets`. Sets
/// without a usable reference are skipped; references to exercises missing
/// from `exercises` are named [`UNKNOWN_EXERCISE`].
pub fn top_exercises(
    log_sets: &[Record<WorkoutLogSet>],
    exercises: &[Record<Exercise>],
    n: usize,
) -> Vec<ExerciseRank> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for set in log_sets {
        let Some(id) = set.fields.exercise_id() else {
            continue;
        };
        match index.get(id) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(id, counts.len());
                counts.push((id, 1));
            }
        }
    }

    // Stable sort keeps first-seen order among equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .take(n)
        .map(|(id, count)| ExerciseRank {
            exercise_id: id.to_string(),
            name: exercise_name(exercises, id).to_string(),
            count,
        })
        .collect()
}

/// Resolve an exercise id to its name
pub fn exercise_name<'a>(exercises: &'a [Record<Exercise>], id: &str) -> &'a str {
    exercises
        .iter()
        .find(|e| e.id == id)
        .map(|e| e.fields.name.as_str())
        .filter(|name| !name.is_empty())
        .unwrap_or(UNKNOWN_EXERCISE)
}

/// Calories per macro; components without calories are left out
pub fn macro_breakdown(protein_g: f64, carbs_g: f64, fat_g: f64) -> Vec<MacroSlice> {
    [
        (Macro::Protein, protein_g),
        (Macro::Carbs, carbs_g),
        (Macro::Fat, fat_g),
    ]
    .into_iter()
    .map(|(macro_kind, grams)| MacroSlice {
        macro_kind,
        calories: grams * macro_kind.kcal_per_gram(),
    })
    .filter(|slice| slice.calories > 0.0)
    .collect()
}

/// Percentage of `total_calories` contributed by `grams` of a macro.
/// A zero total is treated as one so the result stays finite.
pub fn macro_share(grams: f64, macro_kind: Macro, total_calories: f64) -> f64 {
    let total = if total_calories == 0.0 { 1.0 } else { total_calories };
    grams * macro_kind.kcal_per_gram() * 100.0 / total
}

/// Mean duration over all workouts, rest days included; 0 for no workouts
pub fn average_duration(workouts: &[Record<Workout>]) -> f64 {
    if workouts.is_empty() {
        return 0.0;
    }
    let total: f64 = workouts
        .iter()
        .map(|w| f64::from(w.fields.duration_minutes))
        .sum();
    total / workouts.len() as f64
}

/// Training sessions per mood, worst to best, omitting moods never recorded
pub fn mood_distribution(workouts: &[Record<Workout>]) -> Vec<CategoryCount<Mood>> {
    Mood::ALL
        .iter()
        .map(|&mood| CategoryCount {
            key: mood,
            count: workouts
                .iter()
                .filter(|w| !w.fields.is_rest_day && w.fields.mood == Some(mood))
                .count(),
        })
        .filter(|c| c.count > 0)
        .collect()
}

/// Number of training sessions, rest days excluded
pub fn training_sessions(workouts: &[Record<Workout>]) -> usize {
    workouts.iter().filter(|w| !w.fields.is_rest_day).count()
}

/// Latest `n` training sessions, newest first
pub fn recent_workouts(workouts: &[Record<Workout>], n: usize) -> Vec<&Record<Workout>> {
    let mut sorted: Vec<&Record<Workout>> = workouts.iter().collect();
    sorted.sort_by(|a, b| b.fields.date.cmp(&a.fields.date));
    sorted
        .into_iter()
        .filter(|w| !w.fields.is_rest_day)
        .take(n)
        .collect()
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use crate::models::{Difficulty, Equipment, MealType, MuscleGroup, RecordRef};

    pub fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn record<F>(id: &str, fields: F) -> Record<F> {
        Record {
            id: id.to_string(),
            created_at: "2025-01-01T00:00:00".to_string(),
            updated_at: None,
            fields,
        }
    }

    pub fn workout(
        id: &str,
        day: &str,
        workout_type: WorkoutType,
        duration_minutes: u32,
        mood: Option<Mood>,
        is_rest_day: bool,
    ) -> Record<Workout> {
        record(
            id,
            Workout {
                date: date(day),
                workout_type,
                duration_minutes,
                mood,
                is_rest_day,
            },
        )
    }

    pub fn meal(
        id: &str,
        day: &str,
        calories: f64,
        protein: f64,
        carbs: f64,
        fat: f64,
    ) -> Record<NutritionEntry> {
        record(
            id,
            NutritionEntry {
                date: date(day),
                meal_type: MealType::Lunch,
                description: None,
                calories,
                protein_g: protein,
                carbs_g: carbs,
                fat_g: fat,
            },
        )
    }

    pub fn goal(id: &str, status: GoalStatus, calories: Option<f64>) -> Record<Goal> {
        record(
            id,
            Goal {
                daily_calories: calories,
                daily_protein_g: None,
                training_days_per_week: None,
                sleep_goal_hours: None,
                status,
                notes: None,
            },
        )
    }

    pub fn weigh_in(id: &str, day: &str, weight_kg: Option<f64>) -> Record<BodyMetrics> {
        let mut metrics = BodyMetrics::on(date(day));
        metrics.weight_kg = weight_kg;
        record(id, metrics)
    }

    pub fn exercise(id: &str, name: &str) -> Record<Exercise> {
        record(
            id,
            Exercise {
                name: name.to_string(),
                muscle_group: MuscleGroup::Chest,
                equipment: Equipment::Barbell,
                difficulty: Difficulty::Beginner,
            },
        )
    }

    pub fn log_set(id: &str, exercise_id: Option<&str>) -> Record<WorkoutLogSet> {
        record(
            id,
            WorkoutLogSet {
                workout_ref: Some(RecordRef::new(
                    "https://my.living-apps.de/rest/apps/w/records/wk1",
                )),
                exercise_ref: exercise_id.map(|ex| {
                    RecordRef::new(format!("https://my.living-apps.de/rest/apps/u/records/{}", ex))
                }),
                set_number: 1,
                weight: 60.0,
                reps: 10,
                rpe: None,
            },
        )
    }
}
