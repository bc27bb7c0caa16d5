//! Exercise catalog commands for fitlog

use crate::cli::output::{print_json, truncate};
use crate::cli::GlobalOpts;
use crate::dashboard::Dashboard;
use crate::error::Result;
use crate::models::{Difficulty, Equipment, Exercise, MuscleGroup, WireEnum};

/// List the exercise catalog
pub async fn list(opts: &GlobalOpts) -> Result<()> {
    let store = opts.open_store()?;
    let exercises = store.list::<Exercise>().await?;

    if opts.json() {
        return print_json(&exercises);
    }

    if exercises.is_empty() {
        println!("No exercises found.");
        return Ok(());
    }

    println!(
        "{:<20} {:<30} {:<12} {:<16} {:<12}",
        "ID", "Name", "Muscle", "Equipment", "Level"
    );
    println!("{}", "-".repeat(92));

    for e in &exercises {
        println!(
            "{:<20} {:<30} {:<12} {:<16} {:<12}",
            e.id,
            truncate(&e.fields.name, 30),
            e.fields.muscle_group.label(),
            e.fields.equipment.label(),
            e.fields.difficulty.label()
        );
    }

    println!("\n{} exercises", exercises.len());
    Ok(())
}

/// Add an exercise to the catalog
pub async fn add(
    opts: &GlobalOpts,
    name: String,
    muscle_group: &str,
    equipment: &str,
    difficulty: &str,
) -> Result<()> {
    let fields = Exercise {
        name,
        muscle_group: muscle_group.parse::<MuscleGroup>()?,
        equipment: equipment.parse::<Equipment>()?,
        difficulty: difficulty.parse::<Difficulty>()?,
    };

    let dashboard = Dashboard::new(opts.open_store()?);
    let record = dashboard.create(&fields).await?;

    if opts.json() {
        return print_json(&record);
    }

    println!("Added exercise {} ({})", record.fields.name, record.id);
    Ok(())
}

/// Delete an exercise
pub async fn delete(opts: &GlobalOpts, id: &str) -> Result<()> {
    let store = opts.open_store()?;
    store.delete::<Exercise>(id).await?;
    println!("Deleted exercise {}", id);
    Ok(())
}
