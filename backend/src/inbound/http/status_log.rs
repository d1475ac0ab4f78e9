//! Pet status change handlers.
//!
//! A status change is never a plain pet update: `POST /api/petStatusChangeLog`
//! runs the status transition coordinator, which writes the history entry
//! first and removes it again if the pet's status could not be moved.

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Error, PetId, StatusChangeLogEntry, StatusChangeRequest};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_optional_record_id};

/// Request body for `POST /api/petStatusChangeLog`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusChangeBody {
    pub pet_id: Option<i64>,
    #[schema(example = "Adopted")]
    pub new_status: Option<String>,
    pub changed_by: Option<String>,
    pub notes: Option<String>,
}

impl TryFrom<StatusChangeBody> for StatusChangeRequest {
    type Error = Error;

    fn try_from(value: StatusChangeBody) -> Result<Self, Self::Error> {
        Ok(Self::try_from_parts(
            value.pet_id.map(PetId::new),
            value.new_status.as_deref(),
            value.changed_by.as_deref(),
            value.notes.as_deref(),
        )?)
    }
}

/// Optional `petId` filter for the history listing.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct StatusLogQuery {
    pub pet_id: Option<String>,
}

/// List status changes, newest first.
#[utoipa::path(
    get,
    path = "/api/petStatusChangeLog",
    params(StatusLogQuery),
    responses(
        (status = 200, description = "Status history", body = [StatusChangeLogEntry]),
        (status = 400, description = "Malformed petId", body = Error),
        (status = 500, description = "Store error", body = Error)
    ),
    tags = ["status"],
    operation_id = "listStatusChanges"
)]
#[get("/petStatusChangeLog")]
pub async fn list_status_changes(
    state: web::Data<HttpState>,
    query: web::Query<StatusLogQuery>,
) -> ApiResult<web::Json<Vec<StatusChangeLogEntry>>> {
    let pet_id = parse_optional_record_id(query.pet_id.as_deref(), FieldName::new("petId"))?;
    let entries = state.status_query.list_status_changes(pet_id).await?;
    Ok(web::Json(entries))
}

/// Record a status change and move the pet to the new status.
///
/// A failure after the history entry was written is compensated; the error
/// details name the failing step, and a failed compensation is attached under
/// `compensation`.
#[utoipa::path(
    post,
    path = "/api/petStatusChangeLog",
    request_body = StatusChangeBody,
    responses(
        (status = 201, description = "Recorded entry", body = StatusChangeLogEntry),
        (status = 400, description = "Invalid request", body = Error),
        (status = 500, description = "Store error at insert_status_log or update_pet_status, including a pet that does not exist", body = Error)
    ),
    tags = ["status"],
    operation_id = "recordStatusChange"
)]
#[post("/petStatusChangeLog")]
pub async fn record_status_change(
    state: web::Data<HttpState>,
    payload: web::Json<StatusChangeBody>,
) -> ApiResult<HttpResponse> {
    let request = StatusChangeRequest::try_from(payload.into_inner())?;
    let entry = state.status_command.record_status_change(request).await?;
    Ok(HttpResponse::Created().json(entry))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::PetRepository;
    use crate::domain::{NewPet, PetFields, PetStatus};
    use crate::inbound::http::test_utils::{memory_state, test_app};
    use crate::test_support::{InMemoryStore, StoreOperation};
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use chrono::Utc;
    use rstest::rstest;
    use serde_json::{Value, json};
    use std::sync::Arc;

    async fn seeded() -> (Arc<InMemoryStore>, PetId) {
        let store = Arc::new(InMemoryStore::default());
        let pet = NewPet::try_from(PetFields {
            name: Some("Rex".into()),
            category_name: Some("Dogs".into()),
            location: Some("Leeds".into()),
            ..PetFields::default()
        })
        .expect("valid pet");
        let id = PetRepository::insert(&*store, &pet, Utc::now())
            .await
            .expect("seed pet")
            .id;
        store.clear_journal();
        (store, id)
    }

    async fn post_change(store: &Arc<InMemoryStore>, body: Value) -> (StatusCode, Value) {
        let app = actix_test::init_service(test_app(memory_state(store))).await;
        let request = actix_test::TestRequest::post()
            .uri("/api/petStatusChangeLog")
            .set_json(body)
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        let status = response.status();
        (status, actix_test::read_body_json(response).await)
    }

    #[actix_web::test]
    async fn successful_change_logs_and_moves_status() {
        let (store, id) = seeded().await;
        let (status, body) = post_change(
            &store,
            json!({"petId": id.get(), "newStatus": "Adopted", "changedBy": "vet"}),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body.get("newStatus"), Some(&json!("Adopted")));
        assert_eq!(body.get("changedBy"), Some(&json!("vet")));
        assert_eq!(store.pet(id).map(|p| p.status), Some(PetStatus::adopted()));
        assert_eq!(store.status_log_for(id).len(), 1);
    }

    #[actix_web::test]
    async fn failed_status_update_leaves_no_history() {
        let (store, id) = seeded().await;
        store.fail_on(StoreOperation::UpdatePetStatus);

        let (status, body) =
            post_change(&store, json!({"petId": id.get(), "newStatus": "Adopted"})).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.pointer("/details/step"), Some(&json!("update_pet_status")));
        assert!(body.pointer("/details/compensation").is_none());
        assert!(store.status_log_for(id).is_empty());
        assert_eq!(store.pet(id).map(|p| p.status), Some(PetStatus::available()));
    }

    #[actix_web::test]
    async fn unknown_pet_is_a_store_error_after_compensation() {
        let (store, _) = seeded().await;
        let (status, body) =
            post_change(&store, json!({"petId": 9_999, "newStatus": "Adopted"})).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.get("code"), Some(&json!("store_error")));
        assert_eq!(body.pointer("/details/step"), Some(&json!("update_pet_status")));
        assert_eq!(body.pointer("/details/cause"), Some(&json!("no_matching_row")));
        assert_eq!(
            store.journal(),
            vec![
                StoreOperation::InsertStatusLog,
                StoreOperation::UpdatePetStatus,
                StoreOperation::DeleteStatusLog,
            ]
        );
    }

    #[actix_web::test]
    async fn failed_compensation_is_reported_in_details() {
        let (store, id) = seeded().await;
        store.fail_on(StoreOperation::UpdatePetStatus);
        store.fail_on(StoreOperation::DeleteStatusLog);

        let (status, body) =
            post_change(&store, json!({"petId": id.get(), "newStatus": "Adopted"})).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.get("code"), Some(&json!("store_error")));
        assert!(body.pointer("/details/compensation/logId").is_some());
    }

    #[rstest]
    #[case(json!({"newStatus": "Adopted"}), "petId")]
    #[case(json!({"petId": 1}), "newStatus")]
    #[case(json!({"petId": 1, "newStatus": "  "}), "newStatus")]
    #[actix_web::test]
    async fn incomplete_requests_never_reach_the_store(#[case] body: Value, #[case] field: &str) {
        let (store, _) = seeded().await;
        let (status, payload) = post_change(&store, body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(payload.pointer("/details/field"), Some(&json!(field)));
        assert!(store.journal().is_empty());
    }

    #[actix_web::test]
    async fn listing_filters_by_pet_and_rejects_bad_ids() {
        let (store, id) = seeded().await;
        post_change(&store, json!({"petId": id.get(), "newStatus": "Pending"})).await;
        post_change(&store, json!({"petId": id.get(), "newStatus": "Adopted"})).await;

        let app = actix_test::init_service(test_app(memory_state(&store))).await;
        let request = actix_test::TestRequest::get()
            .uri(&format!("/api/petStatusChangeLog?petId={id}"))
            .to_request();
        let entries: Vec<Value> = actix_test::call_and_read_body_json(&app, request).await;
        let statuses: Vec<_> = entries
            .iter()
            .filter_map(|entry| entry.get("newStatus").and_then(Value::as_str))
            .collect();
        assert_eq!(statuses, vec!["Adopted", "Pending"]);

        let bad = actix_test::TestRequest::get()
            .uri("/api/petStatusChangeLog?petId=rex")
            .to_request();
        let response = actix_test::call_service(&app, bad).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
