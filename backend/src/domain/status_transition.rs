//! Status Transition Coordinator.
//!
//! A status change is two single-statement writes: append the log entry, then
//! overwrite the pet's status. When the second write fails, or matches no
//! row, the log entry is deleted again so the log never records a status the
//! pet did not take. The two writes are not isolated from concurrent requests
//! on the same pet.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde_json::json;
use tracing::{error, info};

use super::ports::{PetRepository, PetStatusCommand, PetStatusQuery, StatusLogRepository};
use super::store_failure::{StoreStep, store_failure};
use super::{Error, LogId, PetId, StatusChangeLogEntry, StatusChangeRequest};

/// A compensating delete that did not remove the orphaned log entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to remove status log entry {log_id}: {reason}")]
pub struct CompensationFailure {
    pub log_id: LogId,
    pub reason: String,
}

impl CompensationFailure {
    fn attach_to(&self, primary: Error) -> Error {
        primary.with_detail(
            "compensation",
            json!({ "logId": self.log_id, "error": self.reason }),
        )
    }
}

/// Coordinates status changes and serves the status history.
#[derive(Clone)]
pub struct StatusTransitionService<P, L> {
    pets: Arc<P>,
    status_log: Arc<L>,
    clock: Arc<dyn Clock>,
}

impl<P, L> StatusTransitionService<P, L> {
    pub fn new(pets: Arc<P>, status_log: Arc<L>, clock: Arc<dyn Clock>) -> Self {
        Self {
            pets,
            status_log,
            clock,
        }
    }
}

impl<P, L> StatusTransitionService<P, L>
where
    L: StatusLogRepository,
{
    async fn compensate(&self, entry: &StatusChangeLogEntry) -> Result<(), CompensationFailure> {
        match self.status_log.delete(entry.id).await {
            Ok(1) => Ok(()),
            Ok(removed) => Err(CompensationFailure {
                log_id: entry.id,
                reason: format!("expected to remove 1 entry, removed {removed}"),
            }),
            Err(err) => Err(CompensationFailure {
                log_id: entry.id,
                reason: err.to_string(),
            }),
        }
    }
}

#[async_trait]
impl<P, L> PetStatusCommand for StatusTransitionService<P, L>
where
    P: PetRepository,
    L: StatusLogRepository,
{
    async fn record_status_change(
        &self,
        request: StatusChangeRequest,
    ) -> Result<StatusChangeLogEntry, Error> {
        let pet_id = request.pet_id();
        let change = request.stamped(self.clock.utc());

        let entry = self
            .status_log
            .insert(&change)
            .await
            .map_err(|err| store_failure(StoreStep::InsertStatusLog, &err))?;

        let primary = match self.pets.update_status(pet_id, &entry.new_status).await {
            Ok(0) => {
                error!(
                    pet_id = %pet_id,
                    log_id = %entry.id,
                    step = StoreStep::UpdatePetStatus.as_str(),
                    "status update matched no pet"
                );
                Error::store_error(format!(
                    "{} matched no pet {pet_id}",
                    StoreStep::UpdatePetStatus
                ))
                .with_details(json!({
                    "step": StoreStep::UpdatePetStatus.as_str(),
                    "cause": "no_matching_row",
                }))
            }
            Ok(_) => {
                info!(
                    pet_id = %pet_id,
                    log_id = %entry.id,
                    status = %entry.new_status,
                    "pet status changed"
                );
                return Ok(entry);
            }
            Err(err) => store_failure(StoreStep::UpdatePetStatus, &err),
        };

        match self.compensate(&entry).await {
            Ok(()) => Err(primary),
            Err(failure) => {
                error!(
                    pet_id = %pet_id,
                    log_id = %failure.log_id,
                    step = StoreStep::CompensateStatusLog.as_str(),
                    error = %failure,
                    primary = %primary,
                    "status log compensation failed; entry left without a matching status write"
                );
                Err(failure.attach_to(primary))
            }
        }
    }
}

#[async_trait]
impl<P, L> PetStatusQuery for StatusTransitionService<P, L>
where
    P: PetRepository,
    L: StatusLogRepository,
{
    async fn list_status_changes(
        &self,
        pet_id: Option<PetId>,
    ) -> Result<Vec<StatusChangeLogEntry>, Error> {
        self.status_log
            .list(pet_id)
            .await
            .map_err(|err| store_failure(StoreStep::ListStatusLog, &err))
    }
}

#[cfg(test)]
#[path = "status_transition_tests.rs"]
mod tests;
