//! Tests for pet catalogue handlers.

use super::*;
use crate::domain::ports::{PetRepository, StatusLogRepository};
use crate::domain::{CategoryName, NewStatusChange, PetStatus};
use crate::inbound::http::test_utils::{memory_state, test_app};
use crate::test_support::{InMemoryStore, StoreOperation};
use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use chrono::Utc;
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use std::sync::Arc;

#[fixture]
fn store() -> Arc<InMemoryStore> {
    Arc::new(InMemoryStore::default())
}

async fn seed_pet(store: &InMemoryStore, name: &str, category: &str, location: &str) -> Pet {
    let fields = PetFields {
        name: Some(name.into()),
        category_name: Some(category.into()),
        location: Some(location.into()),
        ..PetFields::default()
    };
    let pet = NewPet::try_from(fields).expect("valid pet");
    PetRepository::insert(store, &pet, Utc::now())
        .await
        .expect("seed pet")
}

async fn send(store: &Arc<InMemoryStore>, request: actix_test::TestRequest) -> (StatusCode, Value) {
    let app = actix_test::init_service(test_app(memory_state(store))).await;
    let response = actix_test::call_service(&app, request.to_request()).await;
    let status = response.status();
    let body = actix_test::read_body(response).await;
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).expect("JSON body")
    };
    (status, value)
}

fn names(value: &Value) -> Vec<&str> {
    value
        .as_array()
        .expect("array body")
        .iter()
        .filter_map(|pet| pet.get("name").and_then(Value::as_str))
        .collect()
}

#[rstest]
#[actix_web::test]
async fn list_applies_category_and_location_filters(store: Arc<InMemoryStore>) {
    seed_pet(&store, "Rex", "Dogs", "Leeds").await;
    seed_pet(&store, "Tom", "Cats", "Leeds").await;
    seed_pet(&store, "Fido", "Dogs", "York").await;

    let (status, body) = send(
        &store,
        actix_test::TestRequest::get().uri("/api/pets?category=Dogs&location=lee"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), vec!["Rex"]);

    let (_, everything) = send(
        &store,
        actix_test::TestRequest::get().uri("/api/pets?category=&location="),
    )
    .await;
    assert_eq!(names(&everything), vec!["Rex", "Tom", "Fido"]);
}

#[rstest]
#[actix_web::test]
async fn create_returns_201_with_identity_and_default_status(store: Arc<InMemoryStore>) {
    let (status, body) = send(
        &store,
        actix_test::TestRequest::post().uri("/api/pets").set_json(json!({
            "name": "Biscuit",
            "categoryName": "Dogs",
            "location": "Leeds",
            "ageMonths": 14
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body.get("id").and_then(Value::as_i64).is_some());
    assert_eq!(body.get("status"), Some(&json!("Available")));
    assert_eq!(body.get("categoryName"), Some(&json!("Dogs")));
    assert_eq!(store.pet_count(), 1);
}

#[rstest]
#[actix_web::test]
async fn create_without_location_is_rejected_before_the_store(store: Arc<InMemoryStore>) {
    let (status, body) = send(
        &store,
        actix_test::TestRequest::post()
            .uri("/api/pets")
            .set_json(json!({"name": "Biscuit", "categoryName": "Dogs"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.pointer("/details/field"), Some(&json!("location")));
    assert!(store.journal().is_empty());
}

#[rstest]
#[case("/api/pet", "missing_field")]
#[case("/api/pet?id=", "missing_field")]
#[case("/api/pet?id=rex", "invalid_id")]
#[actix_web::test]
async fn get_requires_an_integer_id(
    store: Arc<InMemoryStore>,
    #[case] uri: &str,
    #[case] code: &str,
) {
    let (status, body) = send(&store, actix_test::TestRequest::get().uri(uri)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.get("code"), Some(&json!("invalid_request")));
    assert_eq!(body.pointer("/details/code"), Some(&json!(code)));
}

#[rstest]
#[actix_web::test]
async fn get_returns_pet_or_404(store: Arc<InMemoryStore>) {
    let pet = seed_pet(&store, "Rex", "Dogs", "Leeds").await;

    let (status, body) = send(
        &store,
        actix_test::TestRequest::get().uri(&format!("/api/pet?id={}", pet.id)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.get("name"), Some(&json!("Rex")));

    let (missing, _) = send(&store, actix_test::TestRequest::get().uri("/api/pet?id=999")).await;
    assert_eq!(missing, StatusCode::NOT_FOUND);
}

#[rstest]
#[actix_web::test]
async fn update_changes_fields_and_acknowledges(store: Arc<InMemoryStore>) {
    let pet = seed_pet(&store, "Rex", "Dogs", "Leeds").await;

    let (status, body) = send(
        &store,
        actix_test::TestRequest::put()
            .uri(&format!("/api/pet/{}", pet.id))
            .set_json(json!({"breed": "Collie", "location": "York"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Pet updated successfully."}));

    let stored = store.pet(pet.id).expect("pet kept");
    assert_eq!(stored.breed.as_deref(), Some("Collie"));
    assert_eq!(stored.location, "York");
}

#[rstest]
#[case(json!({}), "body")]
#[case(json!({"status": "Adopted"}), "status")]
#[actix_web::test]
async fn update_rejects_empty_or_status_changes(
    store: Arc<InMemoryStore>,
    #[case] payload: Value,
    #[case] field: &str,
) {
    let pet = seed_pet(&store, "Rex", "Dogs", "Leeds").await;
    let (status, body) = send(
        &store,
        actix_test::TestRequest::put()
            .uri(&format!("/api/pet/{}", pet.id))
            .set_json(payload),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.pointer("/details/field"), Some(&json!(field)));
    assert_eq!(
        store.pet(pet.id).map(|p| p.status),
        Some(PetStatus::available())
    );
}

#[rstest]
#[actix_web::test]
async fn update_of_missing_pet_is_404(store: Arc<InMemoryStore>) {
    let (status, _) = send(
        &store,
        actix_test::TestRequest::put()
            .uri("/api/pet/404")
            .set_json(json!({"breed": "Collie"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[rstest]
#[actix_web::test]
async fn delete_cascades_and_acknowledges(store: Arc<InMemoryStore>) {
    let pet = seed_pet(&store, "Rex", "Dogs", "Leeds").await;
    StatusLogRepository::insert(
        &*store,
        &NewStatusChange {
            pet_id: pet.id,
            new_status: PetStatus::pending(),
            changed_by: None,
            notes: None,
            changed_at: Utc::now(),
        },
    )
    .await
    .expect("seed log");
    store.clear_journal();

    let (status, body) = send(
        &store,
        actix_test::TestRequest::delete().uri(&format!("/api/pet/{}", pet.id)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Pet deleted successfully."}));
    assert_eq!(
        store.journal(),
        vec![
            StoreOperation::DeleteStatusLogForPet,
            StoreOperation::DeleteBookingsForPet,
            StoreOperation::DeletePet,
        ]
    );
    assert!(store.pet(pet.id).is_none());
    assert!(store.status_log_for(pet.id).is_empty());
}

#[rstest]
#[actix_web::test]
async fn delete_failure_names_the_failing_step(store: Arc<InMemoryStore>) {
    let pet = seed_pet(&store, "Rex", "Dogs", "Leeds").await;
    store.fail_on(StoreOperation::DeleteBookingsForPet);

    let (status, body) = send(
        &store,
        actix_test::TestRequest::delete().uri(&format!("/api/pet/{}", pet.id)),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body.get("code"), Some(&json!("store_error")));
    assert_eq!(body.pointer("/details/step"), Some(&json!("delete_bookings")));
    assert!(store.pet(pet.id).is_some());
}

#[rstest]
#[actix_web::test]
async fn malformed_json_is_a_client_error(store: Arc<InMemoryStore>) {
    let (status, body) = send(
        &store,
        actix_test::TestRequest::post()
            .uri("/api/pets")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.pointer("/details/code"), Some(&json!("malformed_body")));
}

#[test]
fn category_names_in_requests_are_trimmed() {
    let pet = NewPet::try_from(PetFields::from(PetRequest {
        name: Some("Rex".into()),
        category_name: Some("  Dogs ".into()),
        location: Some("Leeds".into()),
        ..PetRequest::default()
    }))
    .expect("valid pet");
    assert_eq!(pet.category_name(), &CategoryName::new("Dogs").expect("name"));
}
