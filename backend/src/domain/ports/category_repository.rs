//! Port abstraction for pet categories.

use async_trait::async_trait;

use crate::domain::{Category, CategoryName};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by category repository adapters.
    pub enum CategoryRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "category repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "category repository query failed: {message}",
        /// The unique constraint on the category name rejected the insert.
        DuplicateName { name: String } => "category {name} already exists",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories ordered by id.
    async fn list(&self) -> Result<Vec<Category>, CategoryRepositoryError>;

    async fn insert(&self, name: &CategoryName) -> Result<Category, CategoryRepositoryError>;
}
