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
use crate::models::{CreateWorkout, Patch, Workout, WorkoutExercise, WorkoutField};

pub fn workout_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_workouts).post(create_workout))
        .route(
            "/:workout_id",
            get(get_workout).patch(update_workout).delete(delete_workout),
        )
        .route("/:workout_id/exercises", get(list_workout_exercises))
}

pub async fn get_workout(
    State(state): State<AppState>,
    WithRejection(Path(workout_id), _): WithRejection<Path<i32>, ApiError>,
) -> Result<Json<Workout>, ApiError> {
    Ok(Json(state.workouts.get_workout(workout_id).await?))
}

pub async fn list_workouts(State(state): State<AppState>) -> Result<Json<Vec<Workout>>, ApiError> {
    Ok(Json(state.workouts.list_workouts().await?))
}

pub async fn create_workout(
    State(state): State<AppState>,
    WithRejection(Json(request), _): WithRejection<Json<CreateWorkout>, ApiError>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let workout_id = state.workouts.create_workout(request).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::created("Workout", workout_id)),
    ))
}

pub async fn update_workout(
    State(state): State<AppState>,
    WithRejection(Path(workout_id), _): WithRejection<Path<i32>, ApiError>,
    WithRejection(Json(body), _): WithRejection<Json<Map<String, Value>>, ApiError>,
) -> Result<Json<MessageResponse>, ApiError> {
    let patch = Patch::<WorkoutField>::from_json(body)?;
    let workout_id = state.workouts.update_workout(workout_id, patch).await?;
    Ok(Json(MessageResponse::updated("Workout", workout_id)))
}

pub async fn delete_workout(
    State(state): State<AppState>,
    WithRejection(Path(workout_id), _): WithRejection<Path<i32>, ApiError>,
) -> Result<Json<MessageResponse>, ApiError> {
    let workout_id = state.workouts.delete_workout(workout_id).await?;
    Ok(Json(MessageResponse::deleted("Workout", workout_id)))
}

/// Exercises planned in one workout, with their counters
pub async fn list_workout_exercises(
    State(state): State<AppState>,
    WithRejection(Path(workout_id), _): WithRejection<Path<i32>, ApiError>,
) -> Result<Json<Vec<WorkoutExercise>>, ApiError> {
    state.workouts.get_workout(workout_id).await?;
    Ok(Json(state.workout_exercises.list_for_workout(workout_id).await?))
}
