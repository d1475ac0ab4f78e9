//! Adoption booking service.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::info;

use super::ports::{AdoptionBookings, BookingRepository};
use super::store_failure::{StoreStep, store_failure};
use super::{AdoptionBooking, Error, NewBooking, PetId};

#[derive(Clone)]
pub struct BookingService<R> {
    bookings: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> BookingService<R> {
    pub fn new(bookings: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { bookings, clock }
    }
}

#[async_trait]
impl<R> AdoptionBookings for BookingService<R>
where
    R: BookingRepository,
{
    async fn list_bookings(&self) -> Result<Vec<AdoptionBooking>, Error> {
        self.bookings
            .list(None)
            .await
            .map_err(|err| store_failure(StoreStep::ListBookings, &err))
    }

    async fn create_booking(&self, booking: NewBooking) -> Result<AdoptionBooking, Error> {
        let created = self
            .bookings
            .insert(&booking, self.clock.utc())
            .await
            .map_err(|err| store_failure(StoreStep::InsertBooking, &err))?;
        info!(booking_id = %created.id, pet_id = %created.pet_id, "adoption booking created");
        Ok(created)
    }

    async fn bookings_for_pet(&self, pet_id: PetId) -> Result<Vec<AdoptionBooking>, Error> {
        let bookings = self
            .bookings
            .list(Some(pet_id))
            .await
            .map_err(|err| store_failure(StoreStep::ListBookings, &err))?;
        if bookings.is_empty() {
            return Err(Error::not_found(format!(
                "no adoption bookings found for pet {pet_id}"
            )));
        }
        Ok(bookings)
    }
}
