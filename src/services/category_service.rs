use sqlx::PgPool;
use tracing::info;

use super::crud;
use crate::error::DataResult;
use crate::models::{Category, CategoryField, CreateCategory, Patch};

#[derive(Clone)]
pub struct CategoryService {
    db: PgPool,
}

impl CategoryService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn create_category(&self, request: CreateCategory) -> DataResult<i32> {
        request.validate()?;

        let mut tx = self.db.begin().await?;
        let category_id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO categories (name) VALUES ($1) RETURNING category_id",
        )
        .bind(&request.name)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;

        info!(category_id, name = %request.name, "Category created");
        Ok(category_id)
    }

    pub async fn get_category(&self, category_id: i32) -> DataResult<Category> {
        crud::fetch_one(&self.db, category_id).await
    }

    pub async fn list_categories(&self) -> DataResult<Vec<Category>> {
        crud::fetch_all(&self.db).await
    }

    pub async fn update_category(
        &self,
        category_id: i32,
        patch: Patch<CategoryField>,
    ) -> DataResult<i32> {
        crud::update::<Category>(&self.db, category_id, patch).await
    }

    /// Exercises in the category are removed by the store.
    pub async fn delete_category(&self, category_id: i32) -> DataResult<i32> {
        crud::delete::<Category>(&self.db, category_id).await
    }
}
