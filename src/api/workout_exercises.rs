use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use axum_extra::extract::WithRejection;
use serde_json::{Map, Value};

use super::{ApiError, AppState, MessageResponse};
use crate::models::{CreateWorkoutExercise, Patch, WorkoutExercise, WorkoutExerciseField};

pub fn workout_exercise_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_workout_exercises).post(create_workout_exercise))
        .route(
            "/:workout_exercise_id",
            get(get_workout_exercise)
                .patch(update_workout_exercise)
                .delete(delete_workout_exercise),
        )
}

pub async fn get_workout_exercise(
    State(state): State<AppState>,
    WithRejection(Path(workout_exercise_id), _): WithRejection<Path<i32>, ApiError>,
) -> Result<Json<WorkoutExercise>, ApiError> {
    Ok(Json(
        state
            .workout_exercises
            .get_workout_exercise(workout_exercise_id)
            .await?,
    ))
}

pub async fn list_workout_exercises(
    State(state): State<AppState>,
) -> Result<Json<Vec<WorkoutExercise>>, ApiError> {
    Ok(Json(state.workout_exercises.list_workout_exercises().await?))
}

/// Add an exercise to a workout; both ids must exist
pub async fn create_workout_exercise(
    State(state): State<AppState>,
    WithRejection(Json(request), _): WithRejection<Json<CreateWorkoutExercise>, ApiError>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let workout_exercise_id = state
        .workout_exercises
        .create_workout_exercise(request)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::created("WorkoutExercise", workout_exercise_id)),
    ))
}

/// Only `sets`, `reps` and `rest_time` can change
pub async fn update_workout_exercise(
    State(state): State<AppState>,
    WithRejection(Path(workout_exercise_id), _): WithRejection<Path<i32>, ApiError>,
    WithRejection(Json(body), _): WithRejection<Json<Map<String, Value>>, ApiError>,
) -> Result<Json<MessageResponse>, ApiError> {
    let patch = Patch::<WorkoutExerciseField>::from_json(body)?;
    let workout_exercise_id = state
        .workout_exercises
        .update_workout_exercise(workout_exercise_id, patch)
        .await?;
    Ok(Json(MessageResponse::updated("WorkoutExercise", workout_exercise_id)))
}

pub async fn delete_workout_exercise(
    State(state): State<AppState>,
    WithRejection(Path(workout_exercise_id), _): WithRejection<Path<i32>, ApiError>,
) -> Result<Json<MessageResponse>, ApiError> {
    let workout_exercise_id = state
        .workout_exercises
        .delete_workout_exercise(workout_exercise_id)
        .await?;
    Ok(Json(MessageResponse::deleted("WorkoutExercise", workout_exercise_id)))
}
