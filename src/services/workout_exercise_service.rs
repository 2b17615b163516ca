use sqlx::PgPool;
use tracing::info;

use super::crud;
use crate::error::DataResult;
use crate::models::{CreateWorkoutExercise, Patch, WorkoutExercise, WorkoutExerciseField};

#[derive(Clone)]
pub struct WorkoutExerciseService {
    db: PgPool,
}

impl WorkoutExerciseService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Both the workout and the exercise must exist.
    pub async fn create_workout_exercise(&self, request: CreateWorkoutExercise) -> DataResult<i32> {
        request.validate()?;

        let mut tx = self.db.begin().await?;
        let workout_exercise_id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO workout_exercises (workout_id, exercise_id, sets, reps, rest_time)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING workout_exercise_id
            "#,
        )
        .bind(request.workout_id)
        .bind(request.exercise_id)
        .bind(request.sets)
        .bind(request.reps)
        .bind(request.rest_time)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;

        info!(
            workout_exercise_id,
            workout_id = request.workout_id,
            exercise_id = request.exercise_id,
            "Exercise added to workout"
        );
        Ok(workout_exercise_id)
    }

    pub async fn get_workout_exercise(&self, workout_exercise_id: i32) -> DataResult<WorkoutExercise> {
        crud::fetch_one(&self.db, workout_exercise_id).await
    }

    pub async fn list_workout_exercises(&self) -> DataResult<Vec<WorkoutExercise>> {
        crud::fetch_all(&self.db).await
    }

    pub async fn list_for_workout(&self, workout_id: i32) -> DataResult<Vec<WorkoutExercise>> {
        crud::fetch_by_parent(&self.db, "workout_id", workout_id).await
    }

    pub async fn update_workout_exercise(
        &self,
        workout_exercise_id: i32,
        patch: Patch<WorkoutExerciseField>,
    ) -> DataResult<i32> {
        crud::update::<WorkoutExercise>(&self.db, workout_exercise_id, patch).await
    }

    pub async fn delete_workout_exercise(&self, workout_exercise_id: i32) -> DataResult<i32> {
        crud::delete::<WorkoutExercise>(&self.db, workout_exercise_id).await
    }
}
