//! Application state behind the dashboard
//!
//! Holds the current snapshot and the submission flag. The statistics engine
//! never sees this type; it only receives the snapshot read-only.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::client::RecordStore;
use crate::error::{FitlogError, Result};
use crate::models::{Record, RecordFields};
use crate::snapshot::Snapshot;
use crate::stats::DashboardSummary;

pub struct Dashboard {
    store: RecordStore,
    snapshot: RwLock<Option<Arc<Snapshot>>>,
    submitting: AtomicBool,
}

/// Clears the submission flag when the create attempt ends
struct SubmissionGuard<'a>(&'a AtomicBool);

impl<'a> SubmissionGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| FitlogError::SubmissionInProgress)?;
        Ok(Self(flag))
    }
}

impl Drop for SubmissionGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Dashboard {
    pub fn new(store: RecordStore) -> Self {
        Self {
            store,
            snapshot: RwLock::new(None),
            submitting: AtomicBool::new(false),
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Replace the snapshot with a fresh load of all collections.
    /// On failure the previous snapshot is discarded.
    pub async fn reload(&self) -> Result<Arc<Snapshot>> {
        let result = Snapshot::load(&self.store).await.map(Arc::new);
        let mut current = self.snapshot.write().await;
        match result {
            Ok(snapshot) => {
                *current = Some(Arc::clone(&snapshot));
                Ok(snapshot)
            }
            Err(e) => {
                *current = None;
                Err(e)
            }
        }
    }

    /// The most recently loaded snapshot, if the last load succeeded
    pub async fn snapshot(&self) -> Option<Arc<Snapshot>> {
        self.snapshot.read().await.clone()
    }

    /// Dashboard view model for the current snapshot
    pub async fn summary(&self, today: NaiveDate) -> Option<DashboardSummary> {
        self.snapshot()
            .await
            .map(|snapshot| DashboardSummary::compute(&snapshot, today))
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }

    /// Create a record, then reload everything.
    ///
    /// Only one create may be in flight; a second attempt fails with
    /// [`FitlogError::SubmissionInProgress`]. A failed reload after a
    /// successful create is logged and leaves no snapshot behind.
    pub async fn create<F: RecordFields>(&self, fields: &F) -> Result<Record<F>> {
        let _guard = SubmissionGuard::acquire(&self.submitting)?;

        let record = self.store.create(fields).await?;

        if let Err(e) = self.reload().await {
            tracing::warn!(error = %e, "reload after create failed");
        }

        Ok(record)
    }
}
