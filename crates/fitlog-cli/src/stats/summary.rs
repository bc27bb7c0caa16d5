//! Dashboard view model composed from the individual metrics

use chrono::NaiveDate;
use serde::Serialize;

use super::{
    active_goal, average_duration, macro_breakdown, macro_share, mood_distribution,
    recent_workouts, today_meals, today_nutrition_totals, top_exercises, training_sessions,
    type_distribution, week_bounds, weight_trend, workouts_this_week, CategoryCount,
    ExerciseRank, Macro, MacroSlice, NutritionTotals, WeekBounds, WeightTrend, RECENT_WORKOUTS,
    TOP_EXERCISES, WEEK_START,
};
use crate::models::{Goal, Mood, NutritionEntry, Record, Workout, WorkoutType};
use crate::snapshot::Snapshot;

/// Progress towards the active goal's targets, in uncapped percent
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct GoalProgress {
    pub calories_pct: f64,
    pub protein_pct: f64,
    pub training_days_pct: f64,
}

impl GoalProgress {
    pub fn compute(
        goal: Option<&Goal>,
        totals: &NutritionTotals,
        sessions_this_week: usize,
    ) -> Self {
        let Some(goal) = goal else {
            return Self::default();
        };
        Self {
            calories_pct: super::progress_ratio(totals.calories, goal.daily_calories),
            protein_pct: super::progress_ratio(totals.protein_g, goal.daily_protein_g),
            training_days_pct: super::progress_ratio(
                sessions_this_week as f64,
                goal.training_days_per_week,
            ),
        }
    }
}

/// One macro's grams and its share of the day's calories
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MacroShare {
    #[serde(rename = "macro")]
    pub macro_kind: Macro,
    pub grams: f64,
    pub pct: f64,
}

/// Everything the dashboard shows, computed from one snapshot
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub today: NaiveDate,
    pub week: WeekBounds,
    pub sessions_this_week: usize,
    pub training_sessions: usize,
    pub average_duration_minutes: f64,
    pub nutrition_today: NutritionTotals,
    pub meals_today: Vec<Record<NutritionEntry>>,
    pub macro_calories: Vec<MacroSlice>,
    pub macro_shares: Vec<MacroShare>,
    pub active_goal: Option<Record<Goal>>,
    pub goal_progress: GoalProgress,
    pub weight: WeightTrend,
    pub workout_types: Vec<CategoryCount<WorkoutType>>,
    pub moods: Vec<CategoryCount<Mood>>,
    pub top_exercises: Vec<ExerciseRank>,
    pub recent_workouts: Vec<Record<Workout>>,
}

impl DashboardSummary {
    pub fn compute(snapshot: &Snapshot, today: NaiveDate) -> Self {
        let week = week_bounds(today, WEEK_START);
        let sessions_this_week = workouts_this_week(&snapshot.workouts, week).len();
        let nutrition_today = today_nutrition_totals(&snapshot.nutrition, today);
        let goal = active_goal(&snapshot.goals);

        let macro_shares = Macro::ALL
            .into_iter()
            .map(|macro_kind| {
                let grams = macro_kind.grams(&nutrition_today);
                MacroShare {
                    macro_kind,
                    grams,
                    pct: macro_share(grams, macro_kind, nutrition_today.calories),
                }
            })
            .collect();

        Self {
            today,
            week,
            sessions_this_week,
            training_sessions: training_sessions(&snapshot.workouts),
            average_duration_minutes: average_duration(&snapshot.workouts),
            nutrition_today,
            meals_today: today_meals(&snapshot.nutrition, today)
                .into_iter()
                .cloned()
                .collect(),
            macro_calories: macro_breakdown(
                nutrition_today.protein_g,
                nutrition_today.carbs_g,
                nutrition_today.fat_g,
            ),
            macro_shares,
            active_goal: goal.cloned(),
            goal_progress: GoalProgress::compute(
                goal.map(|g| &g.fields),
                &nutrition_today,
                sessions_this_week,
            ),
            weight: weight_trend(&snapshot.body_metrics),
            workout_types: type_distribution(&snapshot.workouts),
            moods: mood_distribution(&snapshot.workouts),
            top_exercises: top_exercises(&snapshot.log_sets, &snapshot.exercises, TOP_EXERCISES),
            recent_workouts: recent_workouts(&snapshot.workouts, RECENT_WORKOUTS)
                .into_iter()
                .cloned()
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GoalStatus;
    use crate::stats::fixtures::*;

    fn snapshot() -> Snapshot {
        let mut active = goal("g1", GoalStatus::Active, Some(2000.0));
        active.fields.daily_protein_g = Some(100.0);
        active.fields.training_days_per_week = Some(4.0);

        Snapshot {
            exercises: vec![exercise("A", "Squat")],
            workouts: vec![
                workout("w1", "2025-11-10", WorkoutType::Legs, 60, Some(Mood::Good), false),
                workout("w2", "2025-11-11", WorkoutType::Other, 0, None, true),
                workout("w3", "2025-11-12", WorkoutType::Push, 90, Some(Mood::Brutal), false),
            ],
            nutrition: vec![
                meal("n1", "2025-11-13", 1000.0, 60.0, 100.0, 20.0),
                meal("n2", "2025-11-13", 500.0, 40.0, 0.0, 10.0),
            ],
            log_sets: vec![log_set("s1", Some("A")), log_set("s2", Some("Z"))],
            goals: vec![goal("g0", GoalStatus::Abandoned, Some(1500.0)), active],
            body_metrics: vec![
                weigh_in("b1", "2025-11-01", Some(81.0)),
                weigh_in("b2", "2025-11-08", Some(80.2)),
            ],
        }
    }

    #[test]
    fn test_summary_composes_metrics() {
        let summary = DashboardSummary::compute(&snapshot(), date("2025-11-13"));

        assert_eq!(summary.week.start, date("2025-11-10"));
        assert_eq!(summary.sessions_this_week, 2);
        assert_eq!(summary.training_sessions, 2);
        assert_eq!(summary.average_duration_minutes, 50.0);
        assert_eq!(summary.nutrition_today.calories, 1500.0);
        assert_eq!(summary.meals_today.len(), 2);
        assert_eq!(summary.active_goal.as_ref().map(|g| g.id.as_str()), Some("g1"));
        assert_eq!(summary.goal_progress.calories_pct, 75.0);
        assert_eq!(summary.goal_progress.protein_pct, 100.0);
        assert_eq!(summary.goal_progress.training_days_pct, 50.0);
        assert_eq!(summary.top_exercises[0].name, "Squat");
        assert_eq!(summary.top_exercises[1].name, "Unknown");
        assert_eq!(summary.recent_workouts[0].id, "w3");
        assert_eq!(summary.macro_calories.len(), 3);
    }

    #[test]
    fn test_macro_shares_against_logged_calories() {
        let summary = DashboardSummary::compute(&snapshot(), date("2025-11-13"));

        let protein = &summary.macro_shares[0];
        assert_eq!(protein.macro_kind, Macro::Protein);
        assert_eq!(protein.grams, 100.0);
        // 100 g * 4 kcal / 1500 kcal
        assert!((protein.pct - 26.666).abs() < 0.01);
    }

    #[test]
    fn test_goal_progress_without_goal() {
        let progress = GoalProgress::compute(None, &NutritionTotals::default(), 3);
        assert_eq!(progress, GoalProgress::default());
    }

    #[test]
    fn test_summary_of_empty_snapshot() {
        let summary = DashboardSummary::compute(&Snapshot::default(), date("2025-11-13"));

        assert_eq!(summary.sessions_this_week, 0);
        assert_eq!(summary.average_duration_minutes, 0.0);
        assert!(summary.active_goal.is_none());
        assert!(summary.weight.change_kg.is_none());
        assert!(summary.macro_calories.is_empty());
        assert!(summary.top_exercises.is_empty());

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["today"], "2025-11-13");
        assert!(json["weight"]["change_kg"].is_null());
    }
}
