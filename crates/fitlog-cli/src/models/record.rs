//! Shared record envelope, collection identities and weak references
//!
//! Every collection in the record store shares the same envelope: a server
//! assigned id, creation/update timestamps and a kind-specific `fields` object.

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{FitlogError, Result};

/// A record fetched from the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record<F> {
    /// Server-assigned identifier, unique per collection
    pub id: String,

    /// Creation timestamp as reported by the store
    #[serde(default)]
    pub created_at: String,

    /// Last update timestamp, absent for never-updated records
    #[serde(default)]
    pub updated_at: Option<String>,

    /// Kind-specific payload
    pub fields: F,
}

/// The six collections held by the record store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Exercises,
    Workouts,
    Nutrition,
    WorkoutLogs,
    Goals,
    BodyMetrics,
}

impl Collection {
    pub const ALL: [Collection; 6] = [
        Collection::Exercises,
        Collection::Workouts,
        Collection::Nutrition,
        Collection::WorkoutLogs,
        Collection::Goals,
        Collection::BodyMetrics,
    ];

    /// Name used on the command line and in logs
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Exercises => "exercises",
            Collection::Workouts => "workouts",
            Collection::Nutrition => "nutrition",
            Collection::WorkoutLogs => "workout-logs",
            Collection::Goals => "goals",
            Collection::BodyMetrics => "body-metrics",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Collection {
    type Err = FitlogError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        Collection::ALL
            .into_iter()
            .find(|c| c.name() == wanted)
            .ok_or_else(|| {
                let names: Vec<&str> = Collection::ALL.iter().map(|c| c.name()).collect();
                FitlogError::invalid_param(format!(
                    "Unknown collection '{}'. Expected one of: {}",
                    s,
                    names.join(", ")
                ))
            })
    }
}

/// Ties a fields struct to the collection it lives in
pub trait RecordFields: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    const COLLECTION: Collection;
}

/// Weak reference to a record in another collection.
///
/// The store encodes references as full locator URLs; only the trailing path
/// segment carries meaning. Resolution happens by explicit lookup and may fail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordRef(String);

impl RecordRef {
    /// Wrap an existing locator string
    pub fn new(locator: impl Into<String>) -> Self {
        Self(locator.into())
    }

    /// Build the locator the store expects for `id` in the given collection
    pub fn to(record_host: &str, collection_id: &str, id: &str) -> Self {
        Self(format!(
            "{}/rest/apps/{}/records/{}",
            record_host.trim_end_matches('/'),
            collection_id,
            id
        ))
    }

    /// The raw locator
    pub fn locator(&self) -> &str {
        &self.0
    }

    /// Id of the referenced record, if the locator carries one
    pub fn id(&self) -> Option<&str> {
        extract_id(Some(&self.0))
    }
}

/// Read an explicit `null` the same way as a missing key
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Return the last path segment of a locator, or `None` for empty input
pub fn extract_id(locator: Option<&str>) -> Option<&str> {
    let locator = locator?;
    if locator.is_empty() {
        return None;
    }
    locator.rsplit('/').next().filter(|id| !id.is_empty())
}

/// Enumerations stored as fixed string values on the wire
pub trait WireEnum: Sized + Copy + 'static {
    const ALL: &'static [Self];

    /// Value as stored by the record store
    fn wire(&self) -> &'static str;

    /// English display label
    fn label(&self) -> &'static str;
}

/// Parse a wire enum from either its stored value or its English label
pub fn parse_wire_enum<T: WireEnum>(kind: &str, s: &str) -> Result<T> {
    let wanted = s.trim().to_lowercase();
    T::ALL
        .iter()
        .copied()
        .find(|v| v.wire() == wanted || v.label().to_lowercase() == wanted)
        .ok_or_else(|| {
            let values: Vec<&str> = T::ALL.iter().map(|v| v.wire()).collect();
            FitlogError::invalid_param(format!(
                "Unknown {} '{}'. Expected one of: {}",
                kind,
                s,
                values.join(", ")
            ))
        })
}
