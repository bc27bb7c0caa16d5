//! Formatting helpers shared by the command handlers

use chrono::{Local, NaiveDate};
use serde::Serialize;

use crate::error::{FitlogError, Result};

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Parse a YYYY-MM-DD date
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| FitlogError::InvalidDateFormat(s.to_string()))
}

/// The given date, or today in local time
pub fn resolve_date(date: Option<String>) -> Result<NaiveDate> {
    match date {
        Some(d) => parse_date(&d),
        None => Ok(Local::now().date_naive()),
    }
}

/// Format an optional number, or "-" when absent
pub fn opt_num(value: Option<f64>, decimals: usize) -> String {
    value
        .map(|v| format!("{:.*}", decimals, v))
        .unwrap_or_else(|| "-".to_string())
}

/// Signed change with an explicit plus sign
pub fn signed(value: f64, decimals: usize) -> String {
    if value > 0.0 {
        format!("+{:.*}", decimals, value)
    } else {
        format!("{:.*}", decimals, value)
    }
}

/// Text progress bar for a percentage; display is clamped to 100
pub fn progress_bar(pct: f64, width: usize) -> String {
    let clamped = pct.clamp(0.0, 100.0);
    let filled = ((clamped / 100.0) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), " ".repeat(width - filled))
}

/// Truncate string to max length
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("very long string here", 10), "very lo...");
        assert_eq!(truncate("Frühstück mit Müsli", 8), "Frühs...");
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-11-13").unwrap(),
            NaiveDate::from_ymd_opt(2025, 11, 13).unwrap()
        );
        assert!(matches!(
            parse_date("13.11.2025"),
            Err(FitlogError::InvalidDateFormat(_))
        ));
    }

    #[test]
    fn test_progress_bar_clamps() {
        assert_eq!(progress_bar(50.0, 10), "[#####     ]");
        assert_eq!(progress_bar(150.0, 4), "[####]");
        assert_eq!(progress_bar(-5.0, 4), "[    ]");
    }

    #[test]
    fn test_number_formatting() {
        assert_eq!(opt_num(Some(80.27), 1), "80.3");
        assert_eq!(opt_num(None, 1), "-");
        assert_eq!(signed(1.5, 1), "+1.5");
        assert_eq!(signed(-1.5, 1), "-1.5");
    }
}
