//! Driving port for adoption bookings.

use async_trait::async_trait;

use crate::domain::{AdoptionBooking, Error, NewBooking, PetId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdoptionBookings: Send + Sync {
    async fn list_bookings(&self) -> Result<Vec<AdoptionBooking>, Error>;

    async fn create_booking(&self, booking: NewBooking) -> Result<AdoptionBooking, Error>;

    /// Bookings for one pet; `not_found` when there are none.
    async fn bookings_for_pet(&self, pet_id: PetId) -> Result<Vec<AdoptionBooking>, Error>;
}
