//! HTTP inbound adapter exposing the `/api` REST endpoints.

pub mod accounts;
pub mod bookings;
pub mod categories;
pub mod error;
pub mod health;
pub mod pets;
pub mod state;
pub mod status_log;
#[cfg(test)]
pub mod test_utils;
pub mod validation;
pub mod welcome;

pub use error::ApiResult;

use actix_web::{Scope, web};

/// Every `/api` route, with extractor errors mapped to `invalid_request`.
///
/// Handlers expect `web::Data<HttpState>` in the application data.
///
/// # Examples
/// ```no_run
/// use actix_web::{App, web};
/// use petfinder::inbound::http::api_scope;
/// use petfinder::inbound::http::state::HttpState;
///
/// fn app(state: HttpState) -> App<
///     impl actix_web::dev::ServiceFactory<
///         actix_web::dev::ServiceRequest,
///         Config = (),
///         Response = actix_web::dev::ServiceResponse,
///         Error = actix_web::Error,
///         InitError = (),
///     >,
/// > {
///     App::new().app_data(web::Data::new(state)).service(api_scope())
/// }
/// ```
pub fn api_scope() -> Scope {
    web::scope("/api")
        .app_data(validation::json_config())
        .app_data(validation::query_config())
        .app_data(validation::path_config())
        .service(welcome::welcome)
        .service(pets::list_pets)
        .service(pets::create_pet)
        .service(pets::get_pet)
        .service(pets::update_pet)
        .service(pets::delete_pet)
        .service(status_log::list_status_changes)
        .service(status_log::record_status_change)
        .service(categories::list_categories)
        .service(categories::create_category)
        .service(bookings::list_bookings)
        .service(bookings::create_booking)
        .service(bookings::bookings_for_pet)
        .service(accounts::list_users)
        .service(accounts::create_user)
        .service(accounts::user_login)
        .service(accounts::list_vendors)
        .service(accounts::create_vendor)
        .service(accounts::vendor_login)
}
