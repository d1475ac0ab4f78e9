//! Driving port for pet categories.

use async_trait::async_trait;

use crate::domain::{Category, CategoryName, Error};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryCatalogue: Send + Sync {
    async fn list_categories(&self) -> Result<Vec<Category>, Error>;

    /// Create a category; `conflict` when the name is taken.
    async fn create_category(&self, name: CategoryName) -> Result<Category, Error>;
}
