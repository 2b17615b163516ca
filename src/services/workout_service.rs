use sqlx::PgPool;
use tracing::info;

use super::crud;
use crate::error::DataResult;
use crate::models::{CreateWorkout, Patch, Workout, WorkoutField};

#[derive(Clone)]
pub struct WorkoutService {
    db: PgPool,
}

impl WorkoutService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn create_workout(&self, request: CreateWorkout) -> DataResult<i32> {
        request.validate()?;

        let mut tx = self.db.begin().await?;
        let workout_id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO workouts (workout_name, timecap, record_id, exercise_id, for_kids)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING workout_id
            "#,
        )
        .bind(&request.workout_name)
        .bind(request.timecap)
        .bind(request.record_id)
        .bind(request.exercise_id)
        .bind(request.for_kids)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;

        info!(workout_id, name = %request.workout_name, "Workout created");
        Ok(workout_id)
    }

    pub async fn get_workout(&self, workout_id: i32) -> DataResult<Workout> {
        crud::fetch_one(&self.db, workout_id).await
    }

    pub async fn list_workouts(&self) -> DataResult<Vec<Workout>> {
        crud::fetch_all(&self.db).await
    }

    pub async fn update_workout(
        &self,
        workout_id: i32,
        patch: Patch<WorkoutField>,
    ) -> DataResult<i32> {
        crud::update::<Workout>(&self.db, workout_id, patch).await
    }

    /// Records and exercise links of the workout are removed by the store.
    pub async fn delete_workout(&self, workout_id: i32) -> DataResult<i32> {
        crud::delete::<Workout>(&self.db, workout_id).await
    }
}
