//! Adoption bookings: a prospective adopter's request to meet a pet.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::validation::{FieldValidationError, optional_text, required_text};
use super::{BookingId, PetId};

const NAME_MAX: usize = 100;
const EMAIL_MAX: usize = 254;
const PHONE_MAX: usize = 32;
const MESSAGE_MAX: usize = 2000;

/// A stored adoption booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdoptionBooking {
    pub id: BookingId,
    pub pet_id: PetId,
    pub adopter_name: String,
    pub adopter_email: String,
    pub adopter_phone: Option<String>,
    pub preferred_date: Option<NaiveDate>,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Raw booking input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingFields {
    pub pet_id: Option<PetId>,
    pub adopter_name: Option<String>,
    pub adopter_email: Option<String>,
    pub adopter_phone: Option<String>,
    pub preferred_date: Option<NaiveDate>,
    pub message: Option<String>,
}

/// Validated booking ready to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pet_id: PetId,
    adopter_name: String,
    adopter_email: String,
    adopter_phone: Option<String>,
    preferred_date: Option<NaiveDate>,
    message: Option<String>,
}

impl TryFrom<BookingFields> for NewBooking {
    type Error = FieldValidationError;

    fn try_from(fields: BookingFields) -> Result<Self, Self::Error> {
        let pet_id = fields
            .pet_id
            .ok_or(FieldValidationError::Missing { field: "petId" })?;
        let adopter_name =
            required_text("adopterName", fields.adopter_name.as_deref(), NAME_MAX)?;
        let adopter_email =
            required_text("adopterEmail", fields.adopter_email.as_deref(), EMAIL_MAX)?;
        if !adopter_email.contains('@') {
            return Err(FieldValidationError::Invalid {
                field: "adopterEmail",
                reason: "must contain '@'",
            });
        }

        Ok(Self {
            pet_id,
            adopter_name,
            adopter_email,
            adopter_phone: optional_text(
                "adopterPhone",
                fields.adopter_phone.as_deref(),
                PHONE_MAX,
            )?,
            preferred_date: fields.preferred_date,
            message: optional_text("message", fields.message.as_deref(), MESSAGE_MAX)?,
        })
    }
}

impl NewBooking {
    pub fn pet_id(&self) -> PetId {
        self.pet_id
    }

    pub fn adopter_name(&self) -> &str {
        &self.adopter_name
    }

    pub fn adopter_email(&self) -> &str {
        &self.adopter_email
    }

    pub fn adopter_phone(&self) -> Option<&str> {
        self.adopter_phone.as_deref()
    }

    pub fn preferred_date(&self) -> Option<NaiveDate> {
        self.preferred_date
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn fields() -> BookingFields {
        BookingFields {
            pet_id: Some(PetId::new(7)),
            adopter_name: Some("Sam".to_owned()),
            adopter_email: Some("sam@example.com".to_owned()),
            message: Some("   ".to_owned()),
            ..BookingFields::default()
        }
    }

    #[rstest]
    fn blank_message_collapses_to_none() {
        let booking = NewBooking::try_from(fields()).expect("valid booking");
        assert_eq!(booking.message(), None);
        assert_eq!(booking.pet_id(), PetId::new(7));
    }

    #[rstest]
    fn pet_id_is_required() {
        let err = NewBooking::try_from(BookingFields {
            pet_id: None,
            ..fields()
        })
        .expect_err("pet id required");
        assert_eq!(err.field(), "petId");
    }

    #[rstest]
    fn adopter_email_must_look_like_an_address() {
        let err = NewBooking::try_from(BookingFields {
            adopter_email: Some("sam".to_owned()),
            ..fields()
        })
        .expect_err("bad email");
        assert_eq!(err.code(), "invalid_value");
    }
}
