//! Typed CRUD over the six record collections
//!
//! The store answers list requests with an object keyed by record id, while
//! single-record, create and update responses carry the id inline. Both shapes
//! are normalized into [`Record`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::client::api::ApiClient;
use crate::config::{CollectionIds, Config};
use crate::error::{FitlogError, Result};
use crate::models::{Collection, Record, RecordFields, RecordRef};

/// Entry of a list response; the id is the map key
#[derive(Debug, Deserialize)]
struct ListedRecord<F> {
    fields: F,
    #[serde(default)]
    createdat: Option<String>,
    #[serde(default)]
    updatedat: Option<String>,
}

/// Single-record response
#[derive(Debug, Deserialize)]
struct SingleRecord<F> {
    id: String,
    #[serde(default)]
    createdat: Option<String>,
    #[serde(default)]
    updatedat: Option<String>,
    fields: F,
}

impl<F> From<SingleRecord<F>> for Record<F> {
    fn from(r: SingleRecord<F>) -> Self {
        Record {
            id: r.id,
            created_at: r.createdat.unwrap_or_default(),
            updated_at: r.updatedat,
            fields: r.fields,
        }
    }
}

/// Request body for create and update
#[derive(Serialize)]
struct FieldsBody<'a, T: ?Sized> {
    fields: &'a T,
}

/// Client for the record store's collections
#[derive(Clone)]
pub struct RecordStore {
    client: ApiClient,
    collections: CollectionIds,
    record_host: String,
}

impl RecordStore {
    /// Create a store client from validated configuration
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        let client = ApiClient::new(
            &config.base_url,
            &config.api_key,
            Duration::from_secs(config.timeout_secs),
        )?;
        Ok(Self::from_parts(
            client,
            config.collections.clone(),
            config.record_host.clone(),
        ))
    }

    pub fn from_parts(client: ApiClient, collections: CollectionIds, record_host: String) -> Self {
        Self {
            client,
            collections,
            record_host,
        }
    }

    /// Locator for a record of kind `F`, suitable for reference fields
    pub fn reference<F: RecordFields>(&self, id: &str) -> RecordRef {
        RecordRef::to(&self.record_host, self.collections.id(F::COLLECTION), id)
    }

    fn collection_path(&self, collection: Collection) -> String {
        format!("/apps/{}/records", self.collections.id(collection))
    }

    fn record_path(&self, collection: Collection, id: &str) -> Result<String> {
        if id.is_empty() || id.contains('/') {
            return Err(FitlogError::invalid_param(format!("Invalid record id '{}'", id)));
        }
        Ok(format!("{}/{}", self.collection_path(collection), id))
    }

    /// List every record of kind `F` in the store's map order
    pub async fn list<F: RecordFields>(&self) -> Result<Vec<Record<F>>> {
        self.list_in(F::COLLECTION).await
    }

    /// Fetch one record of kind `F`
    pub async fn get<F: RecordFields>(&self, id: &str) -> Result<Record<F>> {
        self.get_in(F::COLLECTION, id).await
    }

    /// Create a record and return it with its server-assigned id
    pub async fn create<F: RecordFields>(&self, fields: &F) -> Result<Record<F>> {
        let path = self.collection_path(F::COLLECTION);
        let created: SingleRecord<F> = self
            .client
            .post_json(&path, &FieldsBody { fields })
            .await?;
        tracing::info!(collection = %F::COLLECTION, id = %created.id, "record created");
        Ok(created.into())
    }

    /// Patch a subset of a record's fields
    pub async fn update<F, P>(&self, id: &str, patch: &P) -> Result<Record<F>>
    where
        F: RecordFields,
        P: Serialize + ?Sized,
    {
        self.update_in(F::COLLECTION, id, patch).await
    }

    /// Delete a record by id
    pub async fn delete<F: RecordFields>(&self, id: &str) -> Result<()> {
        self.delete_in(F::COLLECTION, id).await
    }

    /// List records of any collection with untyped fields
    pub async fn list_in<T: DeserializeOwned>(
        &self,
        collection: Collection,
    ) -> Result<Vec<Record<T>>> {
        let path = self.collection_path(collection);
        let payload: serde_json::Value = self.client.get_json(&path).await?;
        let records = records_from_map(collection, payload)?;
        tracing::debug!(%collection, count = records.len(), "listed records");
        Ok(records)
    }

    /// Fetch a record of any collection
    pub async fn get_in<T: DeserializeOwned>(
        &self,
        collection: Collection,
        id: &str,
    ) -> Result<Record<T>> {
        let path = self.record_path(collection, id)?;
        let record: SingleRecord<T> = self
            .client
            .get_json(&path)
            .await
            .map_err(|e| not_found_on_404(e, collection, id))?;
        Ok(record.into())
    }

    /// Patch a record of any collection
    pub async fn update_in<T, P>(
        &self,
        collection: Collection,
        id: &str,
        patch: &P,
    ) -> Result<Record<T>>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let path = self.record_path(collection, id)?;
        let updated: SingleRecord<T> = self
            .client
            .patch_json(&path, &FieldsBody { fields: patch })
            .await
            .map_err(|e| not_found_on_404(e, collection, id))?;
        tracing::info!(%collection, id, "record updated");
        Ok(updated.into())
    }

    /// Delete a record of any collection
    pub async fn delete_in(&self, collection: Collection, id: &str) -> Result<()> {
        let path = self.record_path(collection, id)?;
        self.client
            .delete(&path)
            .await
            .map_err(|e| not_found_on_404(e, collection, id))?;
        tracing::info!(%collection, id, "record deleted");
        Ok(())
    }
}

fn not_found_on_404(err: FitlogError, collection: Collection, id: &str) -> FitlogError {
    match err {
        FitlogError::Transport { status: 404, .. } => {
            FitlogError::NotFound(format!("{} record '{}'", collection, id))
        }
        other => other,
    }
}

/// Convert an id-keyed list payload into records, keeping map order
fn records_from_map<T: DeserializeOwned>(
    collection: Collection,
    payload: serde_json::Value,
) -> Result<Vec<Record<T>>> {
    let map = match payload {
        serde_json::Value::Object(map) => map,
        // An empty collection is sometimes returned as an empty array
        serde_json::Value::Array(items) if items.is_empty() => return Ok(Vec::new()),
        serde_json::Value::Null => return Ok(Vec::new()),
        other => {
            return Err(FitlogError::invalid_response(format!(
                "Expected an object keyed by record id for {}, got {}",
                collection,
                json_kind(&other)
            )))
        }
    };

    map.into_iter()
        .map(|(id, value)| {
            let listed: ListedRecord<T> = serde_json::from_value(value).map_err(|e| {
                FitlogError::invalid_response(format!(
                    "Malformed {} record '{}': {}",
                    collection, id, e
                ))
            })?;
            Ok(Record {
                id,
                created_at: listed.createdat.unwrap_or_default(),
                updated_at: listed.updatedat,
                fields: listed.fields,
            })
        })
        .collect()
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NutritionEntry, Workout};
    use serde_json::json;

    #[test]
    fn test_records_from_map_keeps_insertion_order() {
        let payload = json!({
            "zz9": {"fields": {"datum": "2025-11-10", "typ": "push",
                               "dauer_minuten": 60, "rest_day": false},
                    "createdat": "2025-11-10T08:00:00", "updatedat": null},
            "aa1": {"fields": {"datum": "2025-11-11", "typ": "pull",
                               "dauer_minuten": 45, "rest_day": false},
                    "createdat": "2025-11-11T08:00:00", "updatedat": "2025-11-11T09:00:00"}
        });

        let records: Vec<Record<Workout>> =
            records_from_map(Collection::Workouts, payload).unwrap();
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["zz9", "aa1"]);
        assert_eq!(records[1].updated_at.as_deref(), Some("2025-11-11T09:00:00"));
        assert_eq!(records[0].created_at, "2025-11-10T08:00:00");
    }

    #[test]
    fn test_records_from_empty_payloads() {
        let empty: Vec<Record<serde_json::Value>> =
            records_from_map(Collection::Goals, json!([])).unwrap();
        assert!(empty.is_empty());

        let empty: Vec<Record<serde_json::Value>> =
            records_from_map(Collection::Goals, json!({})).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_records_from_unexpected_payload() {
        let err =
            records_from_map::<serde_json::Value>(Collection::Goals, json!("nope")).unwrap_err();
        assert!(err.to_string().contains("a string"));
    }

    #[test]
    fn test_malformed_record_names_its_id() {
        let payload = json!({"bad1": {"fields": {"typ": "push"}}});
        let err = records_from_map::<Workout>(Collection::Workouts, payload).unwrap_err();
        assert!(err.to_string().contains("bad1"));
    }

    #[test]
    fn test_null_numbers_do_not_fail_the_list() {
        let payload = json!({
            "n1": {"fields": {"datum": "2025-11-13", "mahlzeit_typ": "snack",
                              "kalorien": 300, "protein": null, "carbs": 20, "fett": 5}}
        });

        let entries = records_from_map::<NutritionEntry>(Collection::Nutrition, payload).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].fields.protein_g, 0.0);
        assert_eq!(entries[0].fields.calories, 300.0);
    }

    #[test]
    fn test_not_found_mapping() {
        let err = not_found_on_404(FitlogError::transport(404, ""), Collection::Goals, "g1");
        assert!(matches!(err, FitlogError::NotFound(ref m) if m.contains("g1")));

        let err = not_found_on_404(FitlogError::transport(500, ""), Collection::Goals, "g1");
        assert!(matches!(err, FitlogError::Transport { status: 500, .. }));
    }
}
