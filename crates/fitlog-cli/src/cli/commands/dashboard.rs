//! Dashboard summary command for fitlog

use crate::cli::output::{opt_num, print_json, progress_bar, resolve_date, signed, truncate};
use crate::cli::GlobalOpts;
use crate::dashboard::Dashboard;
use crate::error::{FitlogError, Result};
use crate::models::WireEnum;
use crate::stats::DashboardSummary;

/// Load every collection and print the dashboard for a day
pub async fn show(opts: &GlobalOpts, date: Option<String>) -> Result<()> {
    let today = resolve_date(date)?;
    let dashboard = Dashboard::new(opts.open_store()?);

    dashboard.reload().await?;
    let summary = dashboard
        .summary(today)
        .await
        .ok_or_else(|| FitlogError::invalid_response("No data loaded"))?;

    if opts.json() {
        return print_json(&summary);
    }

    print_summary(&summary);
    Ok(())
}

fn print_summary(s: &DashboardSummary) {
    println!("Dashboard for {}", s.today);
    println!("{}", "=".repeat(50));

    println!();
    println!("Today");
    println!("{}", "-".repeat(50));
    let goal = s.active_goal.as_ref().map(|g| &g.fields);
    println!(
        "Calories:     {:>7.0} / {:<7} {} {:.0}%",
        s.nutrition_today.calories,
        opt_num(goal.and_then(|g| g.daily_calories), 0),
        progress_bar(s.goal_progress.calories_pct, 20),
        s.goal_progress.calories_pct
    );
    println!(
        "Protein:      {:>6.0}g / {:<7} {} {:.0}%",
        s.nutrition_today.protein_g,
        opt_num(goal.and_then(|g| g.daily_protein_g), 0),
        progress_bar(s.goal_progress.protein_pct, 20),
        s.goal_progress.protein_pct
    );
    for share in &s.macro_shares {
        println!(
            "  {:<10} {:>6.0}g ({:.0}%)",
            share.macro_kind.label(),
            share.grams,
            share.pct
        );
    }
    if !s.macro_calories.is_empty() {
        let parts: Vec<String> = s
            .macro_calories
            .iter()
            .map(|m| format!("{} {:.0} kcal", m.macro_kind.label(), m.calories))
            .collect();
        println!("  Calories by macro: {}", parts.join(" | "));
    }

    println!();
    println!("This week ({} to {})", s.week.start, s.week.end);
    println!("{}", "-".repeat(50));
    println!(
        "Sessions:     {:>7} / {:<7} {} {:.0}%",
        s.sessions_this_week,
        opt_num(goal.and_then(|g| g.training_days_per_week), 0),
        progress_bar(s.goal_progress.training_days_pct, 20),
        s.goal_progress.training_days_pct
    );
    println!("Total sessions:   {}", s.training_sessions);
    println!("Avg duration:     {:.0} min", s.average_duration_minutes);

    println!();
    println!("Weight");
    println!("{}", "-".repeat(50));
    match s.weight.current_kg {
        Some(current) => {
            let change = s
                .weight
                .change_kg
                .map(|c| format!("{} kg", signed(c, 1)))
                .unwrap_or_else(|| "n/a".to_string());
            println!("Current:      {:.1} kg (change {})", current, change);
            let points: Vec<String> = s
                .weight
                .points
                .iter()
                .map(|p| format!("{} {:.1}", p.label, p.weight_kg))
                .collect();
            println!("History:      {}", points.join("  "));
        }
        None => println!("Current:      n/a"),
    }

    if !s.workout_types.is_empty() {
        println!();
        println!("Workout types");
        println!("{}", "-".repeat(50));
        for entry in &s.workout_types {
            println!("{:<14} {:>4}", entry.key.label(), entry.count);
        }
    }

    if !s.moods.is_empty() {
        println!();
        println!("Mood");
        println!("{}", "-".repeat(50));
        for entry in &s.moods {
            println!("{:<14} {:>4}", entry.key.label(), entry.count);
        }
    }

    if !s.top_exercises.is_empty() {
        println!();
        println!("Top exercises");
        println!("{}", "-".repeat(50));
        for (rank, entry) in s.top_exercises.iter().enumerate() {
            println!("{}. {:<30} {:>4} sets", rank + 1, truncate(&entry.name, 30), entry.count);
        }
    }

    println!();
    println!("Recent workouts");
    println!("{}", "-".repeat(50));
    if s.recent_workouts.is_empty() {
        println!("No workouts yet.");
    }
    for w in &s.recent_workouts {
        println!(
            "{:<12} {:<14} {:>5} min  {}",
            w.fields.date,
            w.fields.workout_type.label(),
            w.fields.duration_minutes,
            w.fields.mood.map(|m| m.label()).unwrap_or("-")
        );
    }

    println!();
    println!("Meals today");
    println!("{}", "-".repeat(50));
    if s.meals_today.is_empty() {
        println!("No meals logged today.");
    }
    for meal in &s.meals_today {
        println!(
            "{:<14} {:>6.0} kcal  P {:.0}g | C {:.0}g | F {:.0}g  {}",
            meal.fields.meal_type.label(),
            meal.fields.calories,
            meal.fields.protein_g,
            meal.fields.carbs_g,
            meal.fields.fat_g,
            truncate(meal.fields.description.as_deref().unwrap_or(""), 30)
        );
    }

    if let Some(goal) = &s.active_goal {
        println!();
        println!("Active goal");
        println!("{}", "-".repeat(50));
        if let Some(hours) = goal.fields.sleep_goal_hours {
            println!("Sleep:        {:.1} h", hours);
        }
        if let Some(notes) = &goal.fields.notes {
            println!("Notes:        {}", notes);
        }
        println!("Status:       {}", goal.fields.status);
    }
}
