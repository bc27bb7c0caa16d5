//! Immutable in-memory copy of all six collections
//!
//! A snapshot is taken by fetching every collection concurrently. There is no
//! partial success: the first failing fetch fails the whole load.

use serde::Serialize;

use crate::client::RecordStore;
use crate::error::{FitlogError, Result};
use crate::models::{BodyMetrics, Exercise, Goal, NutritionEntry, Record, Workout, WorkoutLogSet};

#[derive(Debug, Clone, Default, Serialize)]
pub struct Snapshot {
    pub exercises: Vec<Record<Exercise>>,
    pub workouts: Vec<Record<Workout>>,
    pub nutrition: Vec<Record<NutritionEntry>>,
    pub log_sets: Vec<Record<WorkoutLogSet>>,
    pub goals: Vec<Record<Goal>>,
    pub body_metrics: Vec<Record<BodyMetrics>>,
}

impl Snapshot {
    /// Fetch all six collections concurrently
    pub async fn load(store: &RecordStore) -> Result<Self> {
        let started = std::time::Instant::now();

        let (workouts, nutrition, goals, body_metrics, exercises, log_sets) = tokio::try_join!(
            store.list::<Workout>(),
            store.list::<NutritionEntry>(),
            store.list::<Goal>(),
            store.list::<BodyMetrics>(),
            store.list::<Exercise>(),
            store.list::<WorkoutLogSet>(),
        )
        .map_err(|e| {
            tracing::warn!(error = %e, "snapshot load failed");
            FitlogError::LoadFailed(Box::new(e))
        })?;

        let snapshot = Self {
            exercises,
            workouts,
            nutrition,
            log_sets,
            goals,
            body_metrics,
        };
        tracing::debug!(
            records = snapshot.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "snapshot loaded"
        );
        Ok(snapshot)
    }

    /// Total number of records across all collections
    pub fn len(&self) -> usize {
        self.exercises.len()
            + self.workouts.len()
            + self.nutrition.len()
            + self.log_sets.len()
            + self.goals.len()
            + self.body_metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_snapshot_is_empty() {
        let snapshot = Snapshot::default();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.len(), 0);
    }
}
