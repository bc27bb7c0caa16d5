//! Goal commands for fitlog

use serde_json::json;

use crate::cli::output::{opt_num, print_json, truncate};
use crate::cli::GlobalOpts;
use crate::dashboard::Dashboard;
use crate::error::Result;
use crate::models::{Goal, GoalStatus, WireEnum};
use crate::stats;

/// Options for setting new targets
#[derive(Debug, Clone, Default)]
pub struct NewGoal {
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub training_days: Option<f64>,
    pub sleep_hours: Option<f64>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

/// List goals and mark the one the dashboard uses
pub async fn list(opts: &GlobalOpts) -> Result<()> {
    let store = opts.open_store()?;
    let goals = store.list::<Goal>().await?;

    if opts.json() {
        return print_json(&goals);
    }

    if goals.is_empty() {
        println!("No goals found.");
        return Ok(());
    }

    let active_id = stats::active_goal(&goals).map(|g| g.id.clone());

    println!(
        "  {:<20} {:<10} {:>8} {:>8} {:>6} {:>6}  {}",
        "ID", "Status", "kcal", "Protein", "Days", "Sleep", "Notes"
    );
    println!("{}", "-".repeat(90));

    for g in &goals {
        let f = &g.fields;
        let marker = if Some(&g.id) == active_id.as_ref() { "*" } else { " " };
        println!(
            "{} {:<20} {:<10} {:>8} {:>8} {:>6} {:>6}  {}",
            marker,
            g.id,
            f.status.label(),
            opt_num(f.daily_calories, 0),
            opt_num(f.daily_protein_g, 0),
            opt_num(f.training_days_per_week, 0),
            opt_num(f.sleep_goal_hours, 1),
            truncate(f.notes.as_deref().unwrap_or(""), 30)
        );
    }

    if active_id.is_some() {
        println!("\n* used by the dashboard");
    }
    Ok(())
}

/// Create a goal
pub async fn add(opts: &GlobalOpts, new: NewGoal) -> Result<()> {
    let fields = Goal {
        daily_calories: new.calories,
        daily_protein_g: new.protein,
        training_days_per_week: new.training_days,
        sleep_goal_hours: new.sleep_hours,
        status: match new.status.as_deref() {
            Some(s) => s.parse::<GoalStatus>()?,
            None => GoalStatus::Active,
        },
        notes: new.notes,
    };

    let dashboard = Dashboard::new(opts.open_store()?);
    let record = dashboard.create(&fields).await?;

    if opts.json() {
        return print_json(&record);
    }

    println!("Created {} goal {}", record.fields.status.label(), record.id);
    Ok(())
}

/// Change only the status of a goal
pub async fn set_status(opts: &GlobalOpts, id: &str, status: &str) -> Result<()> {
    let status = status.parse::<GoalStatus>()?;
    let store = opts.open_store()?;

    let record = store.update::<Goal, _>(id, &json!({ "status": status })).await?;

    if opts.json() {
        return print_json(&record);
    }

    println!("Goal {} is now {}", record.id, record.fields.status.label());
    Ok(())
}

/// Delete a goal
pub async fn delete(opts: &GlobalOpts, id: &str) -> Result<()> {
    let store = opts.open_store()?;
    store.delete::<Goal>(id).await?;
    println!("Deleted goal {}", id);
    Ok(())
}
