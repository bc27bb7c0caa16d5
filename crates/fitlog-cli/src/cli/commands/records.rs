//! Raw record access for any collection

use crate::cli::output::print_json;
use crate::cli::GlobalOpts;
use crate::error::{FitlogError, Result};
use crate::models::{Collection, Record};

type RawRecord = Record<serde_json::Map<String, serde_json::Value>>;

/// Print one record with its fields as stored
pub async fn get(opts: &GlobalOpts, collection: &str, id: &str) -> Result<()> {
    let collection = collection.parse::<Collection>()?;
    let store = opts.open_store()?;

    let record: RawRecord = store.get_in(collection, id).await?;

    if opts.json() {
        return print_json(&record);
    }

    print_record(collection, &record);
    Ok(())
}

/// Patch a record with a JSON object of wire field names to values
pub async fn update(opts: &GlobalOpts, collection: &str, id: &str, fields: &str) -> Result<()> {
    let collection = collection.parse::<Collection>()?;
    let patch = parse_patch(fields)?;
    let store = opts.open_store()?;

    let record: RawRecord = store.update_in(collection, id, &patch).await?;

    if opts.json() {
        return print_json(&record);
    }

    print_record(collection, &record);
    Ok(())
}

fn parse_patch(fields: &str) -> Result<serde_json::Map<String, serde_json::Value>> {
    match serde_json::from_str::<serde_json::Value>(fields)? {
        serde_json::Value::Object(map) if !map.is_empty() => Ok(map),
        _ => Err(FitlogError::invalid_param(
            "Fields must be a non-empty JSON object",
        )),
    }
}

fn print_record(collection: Collection, record: &RawRecord) {
    println!("{} record {}", collection, record.id);
    println!("{}", "-".repeat(50));
    println!("{:<26} {}", "created", record.created_at);
    println!(
        "{:<26} {}",
        "updated",
        record.updated_at.as_deref().unwrap_or("-")
    );
    for (key, value) in &record.fields {
        let shown = match value {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Null => "-".to_string(),
            other => other.to_string(),
        };
        println!("{:<26} {}", key, shown);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_patch_requires_object() {
        let patch = parse_patch(r#"{"status": "erreicht"}"#).unwrap();
        assert_eq!(patch["status"], "erreicht");

        assert!(parse_patch("[1, 2]").is_err());
        assert!(parse_patch("{}").is_err());
        assert!(matches!(parse_patch("{oops"), Err(FitlogError::Json(_))));
    }
}
