//! Category catalogue service.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::info;

use super::ports::{CategoryCatalogue, CategoryRepository, CategoryRepositoryError};
use super::store_failure::{StoreStep, store_failure};
use super::{Category, CategoryName, Error};

#[derive(Clone)]
pub struct CategoryService<R> {
    categories: Arc<R>,
}

impl<R> CategoryService<R> {
    pub fn new(categories: Arc<R>) -> Self {
        Self { categories }
    }
}

#[async_trait]
impl<R> CategoryCatalogue for CategoryService<R>
where
    R: CategoryRepository,
{
    async fn list_categories(&self) -> Result<Vec<Category>, Error> {
        self.categories
            .list()
            .await
            .map_err(|err| store_failure(StoreStep::ListCategories, &err))
    }

    async fn create_category(&self, name: CategoryName) -> Result<Category, Error> {
        match self.categories.insert(&name).await {
            Ok(category) => {
                info!(category_id = %category.id, name = %category.category_name, "category created");
                Ok(category)
            }
            Err(CategoryRepositoryError::DuplicateName { name }) => {
                Err(Error::conflict(format!("category {name} already exists"))
                    .with_details(json!({ "field": "categoryName", "code": "duplicate" })))
            }
            Err(err) => Err(store_failure(StoreStep::InsertCategory, &err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::MockCategoryRepository;
    use crate::test_support::InMemoryStore;

    fn name(raw: &str) -> CategoryName {
        CategoryName::new(raw).expect("valid category name")
    }

    #[tokio::test]
    async fn duplicate_name_is_a_conflict_and_keeps_one_row() {
        let store = Arc::new(InMemoryStore::new());
        let service = CategoryService::new(store.clone());

        service.create_category(name("Cats")).await.expect("first insert");
        let err = service
            .create_category(name("Cats"))
            .await
            .expect_err("second insert conflicts");

        assert_eq!(err.code(), ErrorCode::Conflict);
        assert_eq!(store.category_count(), 1);
        let listed = service.list_categories().await.expect("list");
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].category_name.as_ref(), "Cats");
    }

    #[tokio::test]
    async fn other_insert_failures_are_store_errors() {
        let mut repo = MockCategoryRepository::new();
        repo.expect_insert()
            .times(1)
            .return_once(|_| Err(CategoryRepositoryError::query("syntax error")));

        let err = CategoryService::new(Arc::new(repo))
            .create_category(name("Birds"))
            .await
            .expect_err("query fails");
        assert_eq!(err.code(), ErrorCode::StoreError);
    }
}
