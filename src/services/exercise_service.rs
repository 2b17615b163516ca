use sqlx::PgPool;
use tracing::info;

use super::crud;
use crate::error::DataResult;
use crate::models::{CreateExercise, Exercise, ExerciseField, Patch};

#[derive(Clone)]
pub struct ExerciseService {
    db: PgPool,
}

impl ExerciseService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Fails with `InvalidReference` when the category does not exist; no row is kept.
    pub async fn create_exercise(&self, request: CreateExercise) -> DataResult<i32> {
        request.validate()?;

        let mut tx = self.db.begin().await?;
        let exercise_id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO exercises
                (name, weight, repmax_id, primary_muscle, secondary_muscle, category_id, base_exercise)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING exercise_id
            "#,
        )
        .bind(&request.name)
        .bind(request.weight)
        .bind(request.repmax_id)
        .bind(&request.primary_muscle)
        .bind(&request.secondary_muscle)
        .bind(request.category_id)
        .bind(request.base_exercise)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;

        info!(exercise_id, name = %request.name, "Exercise created");
        Ok(exercise_id)
    }

    pub async fn get_exercise(&self, exercise_id: i32) -> DataResult<Exercise> {
        crud::fetch_one(&self.db, exercise_id).await
    }

    pub async fn list_exercises(&self) -> DataResult<Vec<Exercise>> {
        crud::fetch_all(&self.db).await
    }

    pub async fn update_exercise(
        &self,
        exercise_id: i32,
        patch: Patch<ExerciseField>,
    ) -> DataResult<i32> {
        crud::update::<Exercise>(&self.db, exercise_id, patch).await
    }

    pub async fn delete_exercise(&self, exercise_id: i32) -> DataResult<i32> {
        crud::delete::<Exercise>(&self.db, exercise_id).await
    }
}
