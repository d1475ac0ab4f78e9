//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and never
//! reach the domain. Rows convert into domain entities through `TryFrom`, so a
//! value the domain would reject surfaces as a query error.

use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

use crate::domain::{
    AccountId, AdoptionBooking, BookingId, Category, CategoryId, CategoryName,
    FieldValidationError, LogId, Pet, PetId, PetStatus, StatusChangeLogEntry,
};

use super::schema::{adoption_bookings, categories, pet_status_change_log, pets};

// ---------------------------------------------------------------------------
// Pets
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = pets)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PetRow {
    pub id: i64,
    pub name: String,
    pub category_name: String,
    pub breed: Option<String>,
    pub age_months: Option<i32>,
    pub location: String,
    pub status: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub vendor_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<PetRow> for Pet {
    type Error = FieldValidationError;

    fn try_from(row: PetRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: PetId::new(row.id),
            name: row.name,
            category_name: CategoryName::new(row.category_name)?,
            breed: row.breed,
            age_months: row.age_months,
            location: row.location,
            status: PetStatus::new(row.status)?,
            description: row.description,
            image_url: row.image_url,
            vendor_id: row.vendor_id.map(AccountId::new),
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = pets)]
pub(crate) struct NewPetRow<'a> {
    pub name: &'a str,
    pub category_name: &'a str,
    pub breed: Option<&'a str>,
    pub age_months: Option<i32>,
    pub location: &'a str,
    pub status: &'a str,
    pub description: Option<&'a str>,
    pub image_url: Option<&'a str>,
    pub vendor_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

/// Partial update; `None` fields are left untouched.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = pets)]
pub(crate) struct PetChangeset<'a> {
    pub name: Option<&'a str>,
    pub category_name: Option<&'a str>,
    pub breed: Option<&'a str>,
    pub age_months: Option<i32>,
    pub location: Option<&'a str>,
    pub description: Option<&'a str>,
    pub image_url: Option<&'a str>,
    pub vendor_id: Option<i64>,
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CategoryRow {
    pub id: i64,
    pub category_name: String,
}

impl TryFrom<CategoryRow> for Category {
    type Error = FieldValidationError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CategoryId::new(row.id),
            category_name: CategoryName::new(row.category_name)?,
        })
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = categories)]
pub(crate) struct NewCategoryRow<'a> {
    pub category_name: &'a str,
}

// ---------------------------------------------------------------------------
// Accounts (users and vendors share one row shape)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable)]
pub(crate) struct AccountRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Adoption bookings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = adoption_bookings)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct BookingRow {
    pub id: i64,
    pub pet_id: i64,
    pub adopter_name: String,
    pub adopter_email: String,
    pub adopter_phone: Option<String>,
    pub preferred_date: Option<NaiveDate>,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<BookingRow> for AdoptionBooking {
    fn from(row: BookingRow) -> Self {
        Self {
            id: BookingId::new(row.id),
            pet_id: PetId::new(row.pet_id),
            adopter_name: row.adopter_name,
            adopter_email: row.adopter_email,
            adopter_phone: row.adopter_phone,
            preferred_date: row.preferred_date,
            message: row.message,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = adoption_bookings)]
pub(crate) struct NewBookingRow<'a> {
    pub pet_id: i64,
    pub adopter_name: &'a str,
    pub adopter_email: &'a str,
    pub adopter_phone: Option<&'a str>,
    pub preferred_date: Option<NaiveDate>,
    pub message: Option<&'a str>,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Status change log
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = pet_status_change_log)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct StatusLogRow {
    pub id: i64,
    pub pet_id: i64,
    pub new_status: String,
    pub changed_by: Option<String>,
    pub notes: Option<String>,
    pub changed_at: DateTime<Utc>,
}

impl TryFrom<StatusLogRow> for StatusChangeLogEntry {
    type Error = FieldValidationError;

    fn try_from(row: StatusLogRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: LogId::new(row.id),
            pet_id: PetId::new(row.pet_id),
            new_status: PetStatus::new(row.new_status)?,
            changed_by: row.changed_by,
            notes: row.notes,
            changed_at: row.changed_at,
        })
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = pet_status_change_log)]
pub(crate) struct NewStatusLogRow<'a> {
    pub pet_id: i64,
    pub new_status: &'a str,
    pub changed_by: Option<&'a str>,
    pub notes: Option<&'a str>,
    pub changed_at: DateTime<Utc>,
}
