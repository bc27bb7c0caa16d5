//! Workout log set commands for fitlog

use crate::cli::output::{print_json, truncate};
use crate::cli::GlobalOpts;
use crate::dashboard::Dashboard;
use crate::error::Result;
use crate::models::{Exercise, Rpe, Workout, WorkoutLogSet};
use crate::stats;

/// Options for logging a set
#[derive(Debug, Clone, Default)]
pub struct NewSet {
    pub workout_id: String,
    pub exercise_id: String,
    pub set_number: u32,
    pub weight: f64,
    pub reps: u32,
    pub rpe: Option<String>,
}

/// List logged sets, optionally only those of one workout
pub async fn list(opts: &GlobalOpts, workout_id: Option<String>) -> Result<()> {
    let store = opts.open_store()?;
    let (sets, exercises) = tokio::try_join!(
        store.list::<WorkoutLogSet>(),
        store.list::<Exercise>(),
    )?;

    let shown: Vec<_> = sets
        .iter()
        .filter(|s| match &workout_id {
            Some(id) => s.fields.workout_id() == Some(id.as_str()),
            None => true,
        })
        .collect();

    if opts.json() {
        return print_json(&shown);
    }

    if shown.is_empty() {
        println!("No sets found.");
        return Ok(());
    }

    println!(
        "{:<20} {:<20} {:<28} {:>4} {:>8} {:>5} {:>7}",
        "ID", "Workout", "Exercise", "Set", "Weight", "Reps", "RPE"
    );
    println!("{}", "-".repeat(98));

    let mut volume = 0.0;
    for s in &shown {
        let f = &s.fields;
        let exercise = f
            .exercise_id()
            .map(|id| stats::exercise_name(&exercises, id))
            .unwrap_or(stats::UNKNOWN_EXERCISE);
        volume += f.volume();

        println!(
            "{:<20} {:<20} {:<28} {:>4} {:>8.1} {:>5} {:>7}",
            s.id,
            f.workout_id().unwrap_or("-"),
            truncate(exercise, 28),
            f.set_number,
            f.weight,
            f.reps,
            f.rpe.map(|r| r.to_string()).unwrap_or_else(|| "-".to_string())
        );
    }

    println!("\n{} sets, {:.0} kg total volume", shown.len(), volume);
    Ok(())
}

/// Log a set against an existing workout and exercise
pub async fn add(opts: &GlobalOpts, new: NewSet) -> Result<()> {
    let dashboard = Dashboard::new(opts.open_store()?);
    let store = dashboard.store();

    let (workout, exercise) = tokio::try_join!(
        store.get::<Workout>(&new.workout_id),
        store.get::<Exercise>(&new.exercise_id),
    )?;

    let fields = WorkoutLogSet {
        workout_ref: Some(store.reference::<Workout>(&workout.id)),
        exercise_ref: Some(store.reference::<Exercise>(&exercise.id)),
        set_number: new.set_number,
        weight: new.weight,
        reps: new.reps,
        rpe: new.rpe.as_deref().map(str::parse::<Rpe>).transpose()?,
    };

    let record = dashboard.create(&fields).await?;

    if opts.json() {
        return print_json(&record);
    }

    println!(
        "Logged set {} of {}: {:.1} x {} ({})",
        record.fields.set_number,
        exercise.fields.name,
        record.fields.weight,
        record.fields.reps,
        record.id
    );
    Ok(())
}

/// Delete a logged set
pub async fn delete(opts: &GlobalOpts, id: &str) -> Result<()> {
    let store = opts.open_store()?;
    store.delete::<WorkoutLogSet>(id).await?;
    println!("Deleted set {}", id);
    Ok(())
}
