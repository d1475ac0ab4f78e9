//! Category handlers.

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Category, CategoryName, Error, FieldValidationError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Request body for `POST /api/categories`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRequest {
    #[schema(example = "Rabbits")]
    pub category_name: Option<String>,
}

impl TryFrom<CategoryRequest> for CategoryName {
    type Error = FieldValidationError;

    fn try_from(value: CategoryRequest) -> Result<Self, Self::Error> {
        let raw = value.category_name.ok_or(FieldValidationError::Missing {
            field: "categoryName",
        })?;
        CategoryName::new(raw)
    }
}

/// List all categories.
#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "Categories", body = [Category]),
        (status = 500, description = "Store error", body = Error)
    ),
    tags = ["categories"],
    operation_id = "listCategories"
)]
#[get("/categories")]
pub async fn list_categories(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Category>>> {
    Ok(web::Json(state.categories.list_categories().await?))
}

/// Create a category; names are unique.
#[utoipa::path(
    post,
    path = "/api/categories",
    request_body = CategoryRequest,
    responses(
        (status = 201, description = "Created category", body = Category),
        (status = 400, description = "Invalid name", body = Error),
        (status = 409, description = "Duplicate name", body = Error),
        (status = 500, description = "Store error", body = Error)
    ),
    tags = ["categories"],
    operation_id = "createCategory"
)]
#[post("/categories")]
pub async fn create_category(
    state: web::Data<HttpState>,
    payload: web::Json<CategoryRequest>,
) -> ApiResult<HttpResponse> {
    let name = CategoryName::try_from(payload.into_inner())?;
    let category = state.categories.create_category(name).await?;
    Ok(HttpResponse::Created().json(category))
}
