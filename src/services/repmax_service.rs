use sqlx::PgPool;
use tracing::info;

use super::crud;
use crate::error::DataResult;
use crate::models::{CreateRepmax, Patch, Repmax, RepmaxField};

#[derive(Clone)]
pub struct RepmaxService {
    db: PgPool,
}

impl RepmaxService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn create_repmax(&self, request: CreateRepmax) -> DataResult<i32> {
        request.validate()?;

        let mut tx = self.db.begin().await?;
        let repmax_id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO repmax (exercise_id, user_id, weight)
            VALUES ($1, $2, $3)
            RETURNING repmax_id
            "#,
        )
        .bind(request.exercise_id)
        .bind(request.user_id)
        .bind(request.weight)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;

        info!(repmax_id, exercise_id = request.exercise_id, "Repmax created");
        Ok(repmax_id)
    }

    pub async fn get_repmax(&self, repmax_id: i32) -> DataResult<Repmax> {
        crud::fetch_one(&self.db, repmax_id).await
    }

    pub async fn list_repmaxes(&self) -> DataResult<Vec<Repmax>> {
        crud::fetch_all(&self.db).await
    }

    pub async fn update_repmax(&self, repmax_id: i32, patch: Patch<RepmaxField>) -> DataResult<i32> {
        crud::update::<Repmax>(&self.db, repmax_id, patch).await
    }

    pub async fn delete_repmax(&self, repmax_id: i32) -> DataResult<i32> {
        crud::delete::<Repmax>(&self.db, repmax_id).await
    }
}
