//! Body measurement commands for fitlog

use crate::cli::output::{opt_num, print_json, resolve_date, signed};
use crate::cli::GlobalOpts;
use crate::dashboard::Dashboard;
use crate::error::{FitlogError, Result};
use crate::models::BodyMetrics;
use crate::stats;

/// Options for recording body measurements; every measurement is optional
#[derive(Debug, Clone, Default)]
pub struct NewMeasurement {
    pub date: Option<String>,
    pub weight: Option<f64>,
    pub body_fat: Option<f64>,
    pub chest: Option<f64>,
    pub waist: Option<f64>,
    pub hip: Option<f64>,
    pub arm: Option<f64>,
    pub leg: Option<f64>,
    pub notes: Option<String>,
}

impl NewMeasurement {
    fn into_fields(self) -> Result<BodyMetrics> {
        let fields = BodyMetrics {
            weight_kg: self.weight,
            body_fat_pct: self.body_fat,
            chest_cm: self.chest,
            waist_cm: self.waist,
            hip_cm: self.hip,
            arm_cm: self.arm,
            leg_cm: self.leg,
            notes: self.notes,
            ..BodyMetrics::on(resolve_date(self.date)?)
        };

        let measured = [
            fields.weight_kg,
            fields.body_fat_pct,
            fields.chest_cm,
            fields.waist_cm,
            fields.hip_cm,
            fields.arm_cm,
            fields.leg_cm,
        ];
        if measured.iter().all(Option::is_none) {
            return Err(FitlogError::invalid_param(
                "Provide at least one measurement",
            ));
        }

        Ok(fields)
    }
}

/// List body measurements, oldest first
pub async fn list(opts: &GlobalOpts) -> Result<()> {
    let store = opts.open_store()?;
    let mut metrics = store.list::<BodyMetrics>().await?;
    metrics.sort_by_key(|m| m.fields.date);

    if opts.json() {
        return print_json(&metrics);
    }

    if metrics.is_empty() {
        println!("No measurements found.");
        return Ok(());
    }

    println!(
        "{:<20} {:<12} {:>8} {:>6} {:>6} {:>6} {:>6} {:>6} {:>6}",
        "ID", "Date", "Weight", "Fat %", "Chest", "Waist", "Hip", "Arm", "Leg"
    );
    println!("{}", "-".repeat(84));

    for m in &metrics {
        let f = &m.fields;
        println!(
            "{:<20} {:<12} {:>8} {:>6} {:>6} {:>6} {:>6} {:>6} {:>6}",
            m.id,
            f.date,
            opt_num(f.weight_kg, 1),
            opt_num(f.body_fat_pct, 1),
            opt_num(f.chest_cm, 1),
            opt_num(f.waist_cm, 1),
            opt_num(f.hip_cm, 1),
            opt_num(f.arm_cm, 1),
            opt_num(f.leg_cm, 1)
        );
    }

    let trend = stats::weight_trend(&metrics);
    if let (Some(current), Some(change)) = (trend.current_kg, trend.change_kg) {
        println!("\nCurrent weight {:.1} kg ({} kg)", current, signed(change, 1));
    }

    Ok(())
}

/// Record body measurements
pub async fn add(opts: &GlobalOpts, new: NewMeasurement) -> Result<()> {
    let fields = new.into_fields()?;
    let dashboard = Dashboard::new(opts.open_store()?);

    let record = dashboard.create(&fields).await?;

    if opts.json() {
        return print_json(&record);
    }

    println!("Recorded measurements for {} ({})", record.fields.date, record.id);

    if let Some(snapshot) = dashboard.snapshot().await {
        let trend = stats::weight_trend(&snapshot.body_metrics);
        match (trend.current_kg, trend.change_kg) {
            (Some(current), Some(change)) => {
                println!("Current weight {:.1} kg ({} kg)", current, signed(change, 1))
            }
            (Some(current), None) => println!("Current weight {:.1} kg", current),
            _ => {}
        }
    }

    Ok(())
}

/// Delete a measurement
pub async fn delete(opts: &GlobalOpts, id: &str) -> Result<()> {
    let store = opts.open_store()?;
    store.delete::<BodyMetrics>(id).await?;
    println!("Deleted measurement {}", id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measurement_requires_a_value() {
        let new = NewMeasurement {
            date: Some("2025-11-13".to_string()),
            notes: Some("forgot the scale".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            new.into_fields(),
            Err(FitlogError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_measurement_keeps_partial_values() {
        let new = NewMeasurement {
            date: Some("2025-11-13".to_string()),
            waist: Some(84.5),
            ..Default::default()
        };

        let fields = new.into_fields().unwrap();
        assert_eq!(fields.waist_cm, Some(84.5));
        assert_eq!(fields.weight_kg, None);
    }
}
