//! Nutrition log commands for fitlog

use crate::cli::output::{opt_num, parse_date, print_json, resolve_date, truncate};
use crate::cli::GlobalOpts;
use crate::dashboard::Dashboard;
use crate::error::Result;
use crate::models::{MealType, NutritionEntry, WireEnum};
use crate::stats;

/// Options for logging a meal
#[derive(Debug, Clone, Default)]
pub struct NewMeal {
    pub date: Option<String>,
    pub meal_type: String,
    pub description: Option<String>,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl NewMeal {
    fn into_fields(self) -> Result<NutritionEntry> {
        Ok(NutritionEntry {
            date: resolve_date(self.date)?,
            meal_type: self.meal_type.parse::<MealType>()?,
            description: self.description.filter(|d| !d.trim().is_empty()),
            calories: self.calories,
            protein_g: self.protein,
            carbs_g: self.carbs,
            fat_g: self.fat,
        })
    }
}

/// List meals, optionally restricted to one day
pub async fn list(opts: &GlobalOpts, date: Option<String>) -> Result<()> {
    let store = opts.open_store()?;
    let entries = store.list::<NutritionEntry>().await?;

    let day = date.as_deref().map(parse_date).transpose()?;
    let shown: Vec<_> = match day {
        Some(d) => stats::today_meals(&entries, d),
        None => entries.iter().collect(),
    };

    if opts.json() {
        return print_json(&shown);
    }

    if shown.is_empty() {
        println!("No meals found.");
        return Ok(());
    }

    println!(
        "{:<20} {:<12} {:<14} {:>8} {:>8} {:>8} {:>8}  {}",
        "ID", "Date", "Meal", "kcal", "Protein", "Carbs", "Fat", "Description"
    );
    println!("{}", "-".repeat(110));

    for e in &shown {
        println!(
            "{:<20} {:<12} {:<14} {:>8.0} {:>7.0}g {:>7.0}g {:>7.0}g  {}",
            e.id,
            e.fields.date,
            e.fields.meal_type.label(),
            e.fields.calories,
            e.fields.protein_g,
            e.fields.carbs_g,
            e.fields.fat_g,
            truncate(e.fields.description.as_deref().unwrap_or(""), 30)
        );
    }

    if let Some(d) = day {
        let totals = stats::today_nutrition_totals(&entries, d);
        println!("{}", "-".repeat(110));
        println!(
            "{:<48} {:>8.0} {:>7.0}g {:>7.0}g {:>7.0}g",
            "Total", totals.calories, totals.protein_g, totals.carbs_g, totals.fat_g
        );
    }

    Ok(())
}

/// Log a meal and show the day's totals against the active goal
pub async fn add(opts: &GlobalOpts, new: NewMeal) -> Result<()> {
    let fields = new.into_fields()?;
    let dashboard = Dashboard::new(opts.open_store()?);

    let record = dashboard.create(&fields).await?;

    if opts.json() {
        return print_json(&record);
    }

    println!(
        "Logged {} ({:.0} kcal) on {} ({})",
        record.fields.meal_type.label(),
        record.fields.calories,
        record.fields.date,
        record.id
    );

    if let Some(snapshot) = dashboard.snapshot().await {
        let totals = stats::today_nutrition_totals(&snapshot.nutrition, record.fields.date);
        let target = stats::active_goal(&snapshot.goals).and_then(|g| g.fields.daily_calories);
        println!(
            "Day total: {:.0} / {} kcal ({:.0}%)",
            totals.calories,
            opt_num(target, 0),
            stats::progress_ratio(totals.calories, target)
        );
    }

    Ok(())
}

/// Delete a nutrition entry
pub async fn delete(opts: &GlobalOpts, id: &str) -> Result<()> {
    let store = opts.open_store()?;
    store.delete::<NutritionEntry>(id).await?;
    println!("Deleted nutrition entry {}", id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_meal_drops_blank_description() {
        let new = NewMeal {
            date: Some("2025-11-13".to_string()),
            meal_type: "fruehstueck".to_string(),
            description: Some("  ".to_string()),
            calories: 520.0,
            protein: 32.0,
            ..Default::default()
        };

        let fields = new.into_fields().unwrap();
        assert_eq!(fields.meal_type, MealType::Breakfast);
        assert_eq!(fields.description, None);
        assert_eq!(fields.fat_g, 0.0);
    }
}
