//! Adoption booking handlers.
//!
//! Bookings reference pets by id only; nothing checks that the pet exists
//! when a booking is created. Deleting a pet removes its bookings.

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{AdoptionBooking, BookingFields, Error, NewBooking, PetId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_optional_date, parse_record_id};

/// Request body for `POST /api/adoptionBookings`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub pet_id: Option<i64>,
    pub adopter_name: Option<String>,
    pub adopter_email: Option<String>,
    pub adopter_phone: Option<String>,
    /// `YYYY-MM-DD` or an RFC 3339 timestamp.
    #[schema(example = "2026-03-01")]
    pub preferred_date: Option<String>,
    pub message: Option<String>,
}

impl TryFrom<BookingRequest> for NewBooking {
    type Error = Error;

    fn try_from(value: BookingRequest) -> Result<Self, Self::Error> {
        let preferred_date = parse_optional_date(
            value.preferred_date.as_deref(),
            FieldName::new("preferredDate"),
        )?;
        let fields = BookingFields {
            pet_id: value.pet_id.map(PetId::new),
            adopter_name: value.adopter_name,
            adopter_email: value.adopter_email,
            adopter_phone: value.adopter_phone,
            preferred_date,
            message: value.message,
        };
        Ok(NewBooking::try_from(fields)?)
    }
}

/// List every booking.
#[utoipa::path(
    get,
    path = "/api/adoptionBookings",
    responses(
        (status = 200, description = "Bookings", body = [AdoptionBooking]),
        (status = 500, description = "Store error", body = Error)
    ),
    tags = ["bookings"],
    operation_id = "listBookings"
)]
#[get("/adoptionBookings")]
pub async fn list_bookings(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<AdoptionBooking>>> {
    Ok(web::Json(state.bookings.list_bookings().await?))
}

/// Book an adoption visit.
#[utoipa::path(
    post,
    path = "/api/adoptionBookings",
    request_body = BookingRequest,
    responses(
        (status = 201, description = "Created booking", body = AdoptionBooking),
        (status = 400, description = "Invalid request", body = Error),
        (status = 500, description = "Store error", body = Error)
    ),
    tags = ["bookings"],
    operation_id = "createBooking"
)]
#[post("/adoptionBookings")]
pub async fn create_booking(
    state: web::Data<HttpState>,
    payload: web::Json<BookingRequest>,
) -> ApiResult<HttpResponse> {
    let booking = NewBooking::try_from(payload.into_inner())?;
    let created = state.bookings.create_booking(booking).await?;
    Ok(HttpResponse::Created().json(created))
}

/// Bookings for one pet; 404 when there are none.
#[utoipa::path(
    get,
    path = "/api/adoptionBookings/{petId}",
    params(("petId" = i64, Path, description = "Pet identity")),
    responses(
        (status = 200, description = "Bookings for the pet", body = [AdoptionBooking]),
        (status = 400, description = "Malformed petId", body = Error),
        (status = 404, description = "No bookings for the pet", body = Error),
        (status = 500, description = "Store error", body = Error)
    ),
    tags = ["bookings"],
    operation_id = "bookingsForPet"
)]
#[get("/adoptionBookings/{pet_id}")]
pub async fn bookings_for_pet(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<AdoptionBooking>>> {
    let pet_id: PetId = parse_record_id(Some(path.as_str()), FieldName::new("petId"))?;
    Ok(web::Json(state.bookings.bookings_for_pet(pet_id).await?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::test_utils::{memory_state, test_app};
    use crate::test_support::{InMemoryStore, StoreOperation};
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use chrono::NaiveDate;
    use serde_json::{Value, json};
    use std::sync::Arc;

    fn booking_body(pet_id: i64) -> Value {
        json!({
            "petId": pet_id,
            "adopterName": "Grace",
            "adopterEmail": "grace@example.com",
            "preferredDate": "2026-03-01"
        })
    }

    #[actix_web::test]
    async fn created_bookings_are_listed_per_pet() {
        let store = Arc::new(InMemoryStore::default());
        let app = actix_test::init_service(test_app(memory_state(&store))).await;

        let request = actix_test::TestRequest::post()
            .uri("/api/adoptionBookings")
            .set_json(booking_body(7))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let created: AdoptionBooking = actix_test::read_body_json(response).await;
        assert_eq!(
            created.preferred_date,
            NaiveDate::from_ymd_opt(2026, 3, 1)
        );

        let request = actix_test::TestRequest::get()
            .uri("/api/adoptionBookings/7")
            .to_request();
        let for_pet: Vec<AdoptionBooking> =
            actix_test::call_and_read_body_json(&app, request).await;
        assert_eq!(for_pet, vec![created]);
    }

    #[actix_web::test]
    async fn pet_without_bookings_is_404() {
        let store = Arc::new(InMemoryStore::default());
        let app = actix_test::init_service(test_app(memory_state(&store))).await;
        let request = actix_test::TestRequest::get()
            .uri("/api/adoptionBookings/3")
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn invalid_date_is_rejected_before_the_store() {
        let store = Arc::new(InMemoryStore::default());
        let app = actix_test::init_service(test_app(memory_state(&store))).await;
        let mut body = booking_body(1);
        body["preferredDate"] = json!("soon");
        let request = actix_test::TestRequest::post()
            .uri("/api/adoptionBookings")
            .set_json(body)
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(store.journal().is_empty());
    }

    #[actix_web::test]
    async fn store_failure_on_listing_is_500() {
        let store = Arc::new(InMemoryStore::default());
        store.fail_on(StoreOperation::ListBookings);
        let app = actix_test::init_service(test_app(memory_state(&store))).await;
        let request = actix_test::TestRequest::get()
            .uri("/api/adoptionBookings")
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body.pointer("/details/step"), Some(&json!("list_bookings")));
    }
}
