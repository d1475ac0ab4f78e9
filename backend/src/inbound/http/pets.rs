//! Pet catalogue handlers.
//!
//! ```text
//! GET    /api/pets?category=Dogs&location=leeds
//! POST   /api/pets {"name":"Rex","categoryName":"Dogs","location":"Leeds"}
//! GET    /api/pet?id=7
//! PUT    /api/pet/7 {"breed":"Collie"}
//! DELETE /api/pet/7
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{AccountId, Error, NewPet, Pet, PetChanges, PetFields, PetId, PetSearchFilter};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_record_id};

/// Pet attributes accepted by create and update.
///
/// Create requires `name`, `categoryName` and `location`. Update accepts any
/// non-empty subset except `status`, which only moves through
/// `POST /api/petStatusChangeLog`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PetRequest {
    pub name: Option<String>,
    pub category_name: Option<String>,
    pub breed: Option<String>,
    pub age_months: Option<i32>,
    pub location: Option<String>,
    #[schema(example = "Available")]
    pub status: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub vendor_id: Option<i64>,
}

impl From<PetRequest> for PetFields {
    fn from(value: PetRequest) -> Self {
        Self {
            name: value.name,
            category_name: value.category_name,
            breed: value.breed,
            age_months: value.age_months,
            location: value.location,
            status: value.status,
            description: value.description,
            image_url: value.image_url,
            vendor_id: value.vendor_id.map(AccountId::new),
        }
    }
}

/// Optional search criteria for `GET /api/pets`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PetListQuery {
    /// Exact category name.
    pub category: Option<String>,
    /// Case-insensitive substring of the pet's location.
    pub location: Option<String>,
}

/// Raw `id` query parameter; parsed by the handler so a missing id is a 400.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PetIdQuery {
    pub id: Option<String>,
}

/// Acknowledgement body for writes that return no record.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct Acknowledgement {
    pub message: String,
}

impl Acknowledgement {
    fn new(message: &str) -> Self {
        Self {
            message: message.to_owned(),
        }
    }
}

const PET_ID: FieldName = FieldName::new("id");

/// List pets, optionally filtered by category and location.
#[utoipa::path(
    get,
    path = "/api/pets",
    params(PetListQuery),
    responses(
        (status = 200, description = "Matching pets", body = [Pet]),
        (status = 500, description = "Store error", body = Error)
    ),
    tags = ["pets"],
    operation_id = "listPets"
)]
#[get("/pets")]
pub async fn list_pets(
    state: web::Data<HttpState>,
    query: web::Query<PetListQuery>,
) -> ApiResult<web::Json<Vec<Pet>>> {
    let filter = PetSearchFilter::new(query.category.as_deref(), query.location.as_deref());
    let pets = state.pet_query.list_pets(&filter).await?;
    Ok(web::Json(pets))
}

/// Create a pet listing.
#[utoipa::path(
    post,
    path = "/api/pets",
    request_body = PetRequest,
    responses(
        (status = 201, description = "Created pet", body = Pet),
        (status = 400, description = "Invalid request", body = Error),
        (status = 500, description = "Store error", body = Error)
    ),
    tags = ["pets"],
    operation_id = "createPet"
)]
#[post("/pets")]
pub async fn create_pet(
    state: web::Data<HttpState>,
    payload: web::Json<PetRequest>,
) -> ApiResult<HttpResponse> {
    let pet = NewPet::try_from(PetFields::from(payload.into_inner()))?;
    let created = state.pet_command.create_pet(pet).await?;
    Ok(HttpResponse::Created().json(created))
}

/// Fetch a single pet by `?id=`.
#[utoipa::path(
    get,
    path = "/api/pet",
    params(PetIdQuery),
    responses(
        (status = 200, description = "Pet", body = Pet),
        (status = 400, description = "Missing or malformed id", body = Error),
        (status = 404, description = "Pet not found", body = Error),
        (status = 500, description = "Store error", body = Error)
    ),
    tags = ["pets"],
    operation_id = "getPet"
)]
#[get("/pet")]
pub async fn get_pet(
    state: web::Data<HttpState>,
    query: web::Query<PetIdQuery>,
) -> ApiResult<web::Json<Pet>> {
    let id: PetId = parse_record_id(query.id.as_deref(), PET_ID)?;
    let pet = state.pet_query.get_pet(id).await?;
    Ok(web::Json(pet))
}

/// Apply a partial update to a pet's descriptive fields.
#[utoipa::path(
    put,
    path = "/api/pet/{id}",
    params(("id" = i64, Path, description = "Pet identity")),
    request_body = PetRequest,
    responses(
        (status = 200, description = "Pet updated", body = Acknowledgement),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "Pet not found", body = Error),
        (status = 500, description = "Store error", body = Error)
    ),
    tags = ["pets"],
    operation_id = "updatePet"
)]
#[put("/pet/{id}")]
pub async fn update_pet(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<PetRequest>,
) -> ApiResult<web::Json<Acknowledgement>> {
    let id: PetId = parse_record_id(Some(path.as_str()), PET_ID)?;
    let changes = PetChanges::try_from(PetFields::from(payload.into_inner()))?;
    state.pet_command.update_pet(id, changes).await?;
    Ok(web::Json(Acknowledgement::new("Pet updated successfully.")))
}

/// Delete a pet together with its status history and bookings.
#[utoipa::path(
    delete,
    path = "/api/pet/{id}",
    params(("id" = i64, Path, description = "Pet identity")),
    responses(
        (status = 200, description = "Pet deleted", body = Acknowledgement),
        (status = 400, description = "Malformed id", body = Error),
        (status = 404, description = "Pet not found", body = Error),
        (status = 500, description = "Store error from one of the cascade steps", body = Error)
    ),
    tags = ["pets"],
    operation_id = "deletePet"
)]
#[delete("/pet/{id}")]
pub async fn delete_pet(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Acknowledgement>> {
    let id: PetId = parse_record_id(Some(path.as_str()), PET_ID)?;
    state.pet_removal.delete_pet(id).await?;
    Ok(web::Json(Acknowledgement::new("Pet deleted successfully.")))
}

#[cfg(test)]
mod tests;
