//! Workout commands for fitlog

use crate::cli::output::{print_json, resolve_date};
use crate::cli::GlobalOpts;
use crate::dashboard::Dashboard;
use crate::error::Result;
use crate::models::{Mood, WireEnum, Workout, WorkoutType};
use crate::stats;

/// Options for logging a workout
#[derive(Debug, Clone, Default)]
pub struct NewWorkout {
    pub date: Option<String>,
    pub workout_type: String,
    pub duration: u32,
    pub mood: Option<String>,
    pub rest_day: bool,
}

impl NewWorkout {
    fn into_fields(self) -> Result<Workout> {
        Ok(Workout {
            date: resolve_date(self.date)?,
            workout_type: self.workout_type.parse::<WorkoutType>()?,
            duration_minutes: self.duration,
            mood: self.mood.as_deref().map(str::parse::<Mood>).transpose()?,
            is_rest_day: self.rest_day,
        })
    }
}

/// List workouts and rest days, newest first
pub async fn list(opts: &GlobalOpts, limit: usize) -> Result<()> {
    let store = opts.open_store()?;
    let workouts = store.list::<Workout>().await?;

    let mut recent: Vec<_> = workouts.iter().collect();
    recent.sort_by(|a, b| b.fields.date.cmp(&a.fields.date));
    recent.truncate(limit);

    if opts.json() {
        return print_json(&recent);
    }

    if recent.is_empty() {
        println!("No workouts found.");
        return Ok(());
    }

    println!(
        "{:<20} {:<12} {:<14} {:>8} {:<10} {:<5}",
        "ID", "Date", "Type", "Minutes", "Mood", "Rest"
    );
    println!("{}", "-".repeat(74));

    for w in &recent {
        println!(
            "{:<20} {:<12} {:<14} {:>8} {:<10} {:<5}",
            w.id,
            w.fields.date,
            w.fields.workout_type.label(),
            w.fields.duration_minutes,
            w.fields.mood.map(|m| m.label()).unwrap_or("-"),
            if w.fields.is_rest_day { "yes" } else { "" }
        );
    }

    println!("\nShowing {} of {} workouts", recent.len(), workouts.len());
    Ok(())
}

/// Log a workout and report the updated weekly count
pub async fn add(opts: &GlobalOpts, new: NewWorkout) -> Result<()> {
    let fields = new.into_fields()?;
    let dashboard = Dashboard::new(opts.open_store()?);

    let record = dashboard.create(&fields).await?;

    if opts.json() {
        return print_json(&record);
    }

    println!(
        "Logged {} on {} ({})",
        record.fields.workout_type.label(),
        record.fields.date,
        record.id
    );

    if let Some(snapshot) = dashboard.snapshot().await {
        let week = stats::week_bounds(record.fields.date, stats::WEEK_START);
        let sessions = stats::workouts_this_week(&snapshot.workouts, week).len();
        println!("Sessions in week of {}: {}", week.start, sessions);
    }

    Ok(())
}

/// Delete a workout
pub async fn delete(opts: &GlobalOpts, id: &str) -> Result<()> {
    let store = opts.open_store()?;
    store.delete::<Workout>(id).await?;
    println!("Deleted workout {}", id);
    Ok(())
}
