//! Port abstraction for adoption booking persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{AdoptionBooking, NewBooking, PetId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by booking repository adapters.
    pub enum BookingRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "booking repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "booking repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Bookings ordered by id, optionally restricted to one pet.
    async fn list(
        &self,
        pet_id: Option<PetId>,
    ) -> Result<Vec<AdoptionBooking>, BookingRepositoryError>;

    async fn insert(
        &self,
        booking: &NewBooking,
        created_at: DateTime<Utc>,
    ) -> Result<AdoptionBooking, BookingRepositoryError>;

    /// Remove every booking for a pet. Returns the number removed.
    async fn delete_for_pet(&self, pet_id: PetId) -> Result<usize, BookingRepositoryError>;
}
