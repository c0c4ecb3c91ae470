//! Persistence seam for finished calculations.
//!
//! The store only ever sees [`CalculationRecord`]s: the fields a finished
//! calculation produces on demand plus the identifier and timestamps the store
//! assigns. Database engines and table management live outside this crate.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use tracing::trace;
use uuid::Uuid;

use crate::calculation::{Calculation, CalculationType};
use crate::error::{CalcResult, CalculationError};

/// A calculation together with its computed result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(rename = "type")]
    pub kind: CalculationType,
    pub inputs: Vec<f64>,
    pub result: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CalculationRecord {
    /// Evaluates `calculation` and captures it under a fresh id.
    ///
    /// Fails with whatever `get_result()` reports, so a record always holds a
    /// full result.
    pub fn from_calculation(calculation: &dyn Calculation) -> CalcResult<Self> {
        let result = calculation.get_result()?;
        let kind = calculation.kind().ok_or(CalculationError::NotImplemented)?;
        let inputs = calculation.inputs().to_f64_vec().ok_or(CalculationError::InvalidInputType)?;
        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            user_id: calculation.user_id(),
            kind,
            inputs,
            result,
            created_at: now,
            updated_at: now,
        })
    }
}

/// Storage operations for calculation records
pub trait CalculationStore: Send + Sync {
    fn insert(&self, record: CalculationRecord) -> CalcResult<CalculationRecord>;

    fn get(&self, id: Uuid) -> CalcResult<Option<CalculationRecord>>;

    /// All records owned by `user_id`, oldest first.
    fn list_for_user(&self, user_id: Uuid) -> CalcResult<Vec<CalculationRecord>>;

    /// Replaces an existing record; fails with `NotFound` if `record.id` is unknown.
    fn update(&self, record: CalculationRecord) -> CalcResult<CalculationRecord>;

    /// Returns whether a record was removed.
    fn delete(&self, id: Uuid) -> CalcResult<bool>;
}

/// Process-local store backed by a concurrent map
#[derive(Debug, Default)]
pub struct InMemoryCalculationStore {
    records: DashMap<Uuid, CalculationRecord>,
}

impl InMemoryCalculationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl CalculationStore for InMemoryCalculationStore {
    fn insert(&self, record: CalculationRecord) -> CalcResult<CalculationRecord> {
        trace!(id = %record.id, "inserting calculation record");
        self.records.insert(record.id, record.clone());
        Ok(record)
    }

    fn get(&self, id: Uuid) -> CalcResult<Option<CalculationRecord>> {
        Ok(self.records.get(&id).map(|entry| entry.value().clone()))
    }

    fn list_for_user(&self, user_id: Uuid) -> CalcResult<Vec<CalculationRecord>> {
        let mut records: Vec<_> = self
            .records
            .iter()
            .filter(|entry| entry.user_id == user_id)
            .map(|entry| entry.value().clone())
            .collect();
        records.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(records)
    }

    fn update(&self, record: CalculationRecord) -> CalcResult<CalculationRecord> {
        let mut entry =
            self.records.get_mut(&record.id).ok_or(CalculationError::NotFound { id: record.id })?;
        *entry = record.clone();
        Ok(record)
    }

    fn delete(&self, id: Uuid) -> CalcResult<bool> {
        Ok(self.records.remove(&id).is_some())
    }
}
