//! PostgreSQL-backed `BookingRepository` using Diesel.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{BookingRepository, BookingRepositoryError};
use crate::domain::{AdoptionBooking, NewBooking, PetId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{BookingRow, NewBookingRow};
use super::pool::{DbPool, PoolError};
use super::schema::adoption_bookings;

#[derive(Clone)]
pub struct DieselBookingRepository {
    pool: DbPool,
}

impl DieselBookingRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> BookingRepositoryError {
    map_basic_pool_error(error, BookingRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> BookingRepositoryError {
    map_basic_diesel_error(
        error,
        BookingRepositoryError::query,
        BookingRepositoryError::connection,
    )
}

#[async_trait]
impl BookingRepository for DieselBookingRepository {
    async fn list(
        &self,
        pet_id: Option<PetId>,
    ) -> Result<Vec<AdoptionBooking>, BookingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let mut query = adoption_bookings::table
            .select(BookingRow::as_select())
            .order(adoption_bookings::id.asc())
            .into_boxed();
        if let Some(pet_id) = pet_id {
            query = query.filter(adoption_bookings::pet_id.eq(pet_id.get()));
        }

        let rows: Vec<BookingRow> = query.load(&mut conn).await.map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(AdoptionBooking::from).collect())
    }

    async fn insert(
        &self,
        booking: &NewBooking,
        created_at: DateTime<Utc>,
    ) -> Result<AdoptionBooking, BookingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let new_row = NewBookingRow {
            pet_id: booking.pet_id().get(),
            adopter_name: booking.adopter_name(),
            adopter_email: booking.adopter_email(),
            adopter_phone: booking.adopter_phone(),
            preferred_date: booking.preferred_date(),
            message: booking.message(),
            created_at,
        };

        let row: BookingRow = diesel::insert_into(adoption_bookings::table)
            .values(&new_row)
            .returning(BookingRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(row.into())
    }

    async fn delete_for_pet(&self, pet_id: PetId) -> Result<usize, BookingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::delete(adoption_bookings::table.filter(adoption_bookings::pet_id.eq(pet_id.get())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)
    }
}
