//! Cascading Deletion Coordinator.
//!
//! The store enforces no cascade, so dependents go first in a fixed order:
//! status log entries, then bookings, then the pet row. A failing step stops
//! the cascade; earlier deletions are not restored.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use super::ports::{BookingRepository, PetRemoval, PetRepository, StatusLogRepository};
use super::store_failure::{StoreStep, store_failure};
use super::{Error, PetId};

/// Deletes a pet and everything that refers to it.
#[derive(Clone)]
pub struct CascadingDeletionService<P, L, B> {
    pets: Arc<P>,
    status_log: Arc<L>,
    bookings: Arc<B>,
}

impl<P, L, B> CascadingDeletionService<P, L, B> {
    pub fn new(pets: Arc<P>, status_log: Arc<L>, bookings: Arc<B>) -> Self {
        Self {
            pets,
            status_log,
            bookings,
        }
    }
}

#[async_trait]
impl<P, L, B> PetRemoval for CascadingDeletionService<P, L, B>
where
    P: PetRepository,
    L: StatusLogRepository,
    B: BookingRepository,
{
    async fn delete_pet(&self, id: PetId) -> Result<(), Error> {
        let log_entries = self
            .status_log
            .delete_for_pet(id)
            .await
            .map_err(|err| store_failure(StoreStep::DeleteStatusLog, &err))?;
        debug!(pet_id = %id, removed = log_entries, "status log entries removed");

        let bookings = self
            .bookings
            .delete_for_pet(id)
            .await
            .map_err(|err| store_failure(StoreStep::DeleteBookings, &err))?;
        debug!(pet_id = %id, removed = bookings, "bookings removed");

        let pets = self
            .pets
            .delete(id)
            .await
            .map_err(|err| store_failure(StoreStep::DeletePet, &err))?;
        if pets == 0 {
            return Err(Error::not_found(format!("pet {id} not found")));
        }

        info!(pet_id = %id, log_entries, bookings, "pet deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{
        MockBookingRepository, MockPetRepository, MockStatusLogRepository,
        StatusLogRepositoryError,
    };
    use crate::domain::{
        BookingFields, ErrorCode, NewBooking, NewPet, PetFields, StatusChangeRequest,
    };
    use crate::test_support::{InMemoryStore, StoreOperation};
    use chrono::{DateTime, Utc};
    use mockall::Sequence;
    use rstest::{fixture, rstest};

    type StoreBacked = CascadingDeletionService<InMemoryStore, InMemoryStore, InMemoryStore>;

    #[fixture]
    fn store() -> Arc<InMemoryStore> {
        Arc::new(InMemoryStore::new())
    }

    fn service(store: &Arc<InMemoryStore>) -> StoreBacked {
        CascadingDeletionService::new(store.clone(), store.clone(), store.clone())
    }

    async fn seed_pet_with_history(
        store: &InMemoryStore,
        log_entries: usize,
        bookings: usize,
    ) -> PetId {
        let now = DateTime::<Utc>::UNIX_EPOCH;
        let pet = NewPet::try_from(PetFields {
            name: Some("Rex".to_owned()),
            category_name: Some("Dog".to_owned()),
            location: Some("Park".to_owned()),
            ..PetFields::default()
        })
        .expect("valid pet");
        let pet_id = PetRepository::insert(store, &pet, now)
            .await
            .expect("insert pet")
            .id;

        for _ in 0..log_entries {
            let change =
                StatusChangeRequest::try_from_parts(Some(pet_id), Some("Pending"), None, None)
                    .expect("valid change")
                    .stamped(now);
            StatusLogRepository::insert(store, &change)
                .await
                .expect("insert log");
        }
        for index in 0..bookings {
            let booking = NewBooking::try_from(BookingFields {
                pet_id: Some(pet_id),
                adopter_name: Some(format!("Adopter {index}")),
                adopter_email: Some("adopter@example.com".to_owned()),
                ..BookingFields::default()
            })
            .expect("valid booking");
            BookingRepository::insert(store, &booking, now)
                .await
                .expect("insert booking");
        }
        store.clear_journal();
        pet_id
    }

    #[rstest]
    #[tokio::test]
    async fn removes_dependents_before_the_pet(store: Arc<InMemoryStore>) {
        let pet_id = seed_pet_with_history(&store, 3, 2).await;
        let other = seed_pet_with_history(&store, 1, 1).await;

        service(&store).delete_pet(pet_id).await.expect("delete succeeds");

        assert!(store.pet(pet_id).is_none());
        assert!(store.status_log_for(pet_id).is_empty());
        assert!(store.bookings_for(pet_id).is_empty());
        assert_eq!(
            store.journal(),
            vec![
                StoreOperation::DeleteStatusLogForPet,
                StoreOperation::DeleteBookingsForPet,
                StoreOperation::DeletePet,
            ]
        );
        assert_eq!(store.status_log_for(other).len(), 1);
        assert_eq!(store.bookings_for(other).len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn missing_pet_is_not_found_and_changes_nothing(store: Arc<InMemoryStore>) {
        let existing = seed_pet_with_history(&store, 2, 1).await;

        let err = service(&store)
            .delete_pet(PetId::new(404))
            .await
            .expect_err("no such pet");

        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(store.pet_count(), 1);
        assert_eq!(store.status_log_for(existing).len(), 2);
        assert_eq!(store.bookings_for(existing).len(), 1);
    }

    #[rstest]
    #[case(StoreOperation::DeleteStatusLogForPet, "delete_status_log", 2, 1)]
    #[case(StoreOperation::DeleteBookingsForPet, "delete_bookings", 0, 1)]
    #[case(StoreOperation::DeletePet, "delete_pet", 0, 0)]
    #[tokio::test]
    async fn failing_step_aborts_without_rollback(
        store: Arc<InMemoryStore>,
        #[case] failing: StoreOperation,
        #[case] step: &str,
        #[case] remaining_log: usize,
        #[case] remaining_bookings: usize,
    ) {
        let pet_id = seed_pet_with_history(&store, 2, 1).await;
        store.fail_on(failing);

        let err = service(&store)
            .delete_pet(pet_id)
            .await
            .expect_err("step fails");

        assert_eq!(err.code(), ErrorCode::StoreError);
        assert_eq!(
            err.details().and_then(|d| d.get("step")),
            Some(&serde_json::json!(step))
        );
        assert_eq!(store.journal().last(), Some(&failing));
        assert!(store.pet(pet_id).is_some());
        assert_eq!(store.status_log_for(pet_id).len(), remaining_log);
        assert_eq!(store.bookings_for(pet_id).len(), remaining_bookings);
    }

    #[tokio::test]
    async fn first_step_failure_never_reaches_later_steps() {
        let mut seq = Sequence::new();
        let mut log = MockStatusLogRepository::new();
        log.expect_delete_for_pet()
            .times(1)
            .in_sequence(&mut seq)
            .return_once(|_| Err(StatusLogRepositoryError::query("deadlock")));
        let mut bookings = MockBookingRepository::new();
        bookings.expect_delete_for_pet().never();
        let mut pets = MockPetRepository::new();
        pets.expect_delete().never();

        let service =
            CascadingDeletionService::new(Arc::new(pets), Arc::new(log), Arc::new(bookings));
        let err = service
            .delete_pet(PetId::new(1))
            .await
            .expect_err("log step fails");

        assert_eq!(err.code(), ErrorCode::StoreError);
    }
}
