//! Calculation service
//!
//! Runs a request through schema validation, the factory and evaluation, then
//! hands the finished record to a [`CalculationStore`].

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::error::{CalcResult, CalculationError};
use crate::factory::CalculationFactory;
use crate::schema::{CalculationCreate, CalculationRead, CalculationUpdate, validate_inputs};
use crate::store::{CalculationRecord, CalculationStore};

/// Limits applied to every request before any calculation is built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceLimits {
    #[serde(default = "default_max_inputs")]
    pub max_inputs: usize,
}

fn default_max_inputs() -> usize {
    1000
}

impl Default for ServiceLimits {
    fn default() -> Self {
        Self { max_inputs: default_max_inputs() }
    }
}

impl ServiceLimits {
    fn check(&self, count: usize) -> CalcResult<()> {
        if count > self.max_inputs {
            return Err(CalculationError::TooManyInputs { count, limit: self.max_inputs });
        }
        Ok(())
    }
}

pub struct CalculationService<S: CalculationStore> {
    store: S,
    limits: ServiceLimits,
}

impl<S: CalculationStore> CalculationService<S> {
    pub fn new(store: S) -> Self {
        Self::with_limits(store, ServiceLimits::default())
    }

    pub fn with_limits(store: S, limits: ServiceLimits) -> Self {
        Self { store, limits }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn limits(&self) -> ServiceLimits {
        self.limits
    }

    /// Validates, evaluates and stores a new calculation.
    #[instrument(skip(self, request), fields(user_id = %request.user_id, kind = %request.kind))]
    pub fn create(&self, request: &CalculationCreate) -> CalcResult<CalculationRead> {
        self.limits.check(request.inputs.len())?;
        request.validate().inspect_err(|e| warn!(error = %e, "request rejected"))?;

        let calculation = CalculationFactory::create(
            request.kind.as_str(),
            request.user_id,
            request.inputs.as_slice(),
        )?;
        let record = CalculationRecord::from_calculation(calculation.as_ref())?;
        let stored = self.store.insert(record)?;

        info!(id = %stored.id, result = stored.result, "calculation stored");
        Ok(stored.into())
    }

    pub fn get(&self, id: Uuid) -> CalcResult<CalculationRead> {
        self.store
            .get(id)?
            .map(CalculationRead::from)
            .ok_or(CalculationError::NotFound { id })
    }

    pub fn list_for_user(&self, user_id: Uuid) -> CalcResult<Vec<CalculationRead>> {
        let records = self.store.list_for_user(user_id)?;
        debug!(%user_id, count = records.len(), "listed calculations");
        Ok(records.into_iter().map(CalculationRead::from).collect())
    }

    /// Replaces the inputs of a stored calculation and recomputes its result.
    /// The type, owner, id and creation time are kept.
    #[instrument(skip(self, update))]
    pub fn update(&self, id: Uuid, update: &CalculationUpdate) -> CalcResult<CalculationRead> {
        let existing = self.store.get(id)?.ok_or(CalculationError::NotFound { id })?;
        self.limits.check(update.inputs.len())?;
        validate_inputs(existing.kind, &update.inputs)?;

        let calculation = CalculationFactory::create(
            existing.kind.as_str(),
            existing.user_id,
            update.inputs.as_slice(),
        )?;
        let result = calculation.get_result()?;
        let record = CalculationRecord {
            inputs: update.inputs.clone(),
            result,
            updated_at: Utc::now(),
            ..existing
        };
        let stored = self.store.update(record)?;

        info!(id = %stored.id, result = stored.result, "calculation updated");
        Ok(stored.into())
    }

    /// Removes a stored calculation; fails with `NotFound` if nothing was removed.
    pub fn delete(&self, id: Uuid) -> CalcResult<()> {
        if self.store.delete(id)? {
            info!(%id, "calculation deleted");
            Ok(())
        } else {
            Err(CalculationError::NotFound { id })
        }
    }
}
