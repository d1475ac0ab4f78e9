//! Pet adoption coordination service.
//!
//! Keeps a pet's status and its status history consistent, removes a pet's
//! dependent records before the pet itself, and exposes the catalogue over a
//! JSON HTTP API backed by PostgreSQL.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
