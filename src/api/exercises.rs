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
use crate::models::{CreateExercise, Exercise, ExerciseField, Patch};

pub fn exercise_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_exercises).post(create_exercise))
        .route(
            "/:exercise_id",
            get(get_exercise).patch(update_exercise).delete(delete_exercise),
        )
}

pub async fn get_exercise(
    State(state): State<AppState>,
    WithRejection(Path(exercise_id), _): WithRejection<Path<i32>, ApiError>,
) -> Result<Json<Exercise>, ApiError> {
    Ok(Json(state.exercises.get_exercise(exercise_id).await?))
}

pub async fn list_exercises(
    State(state): State<AppState>,
) -> Result<Json<Vec<Exercise>>, ApiError> {
    Ok(Json(state.exercises.list_exercises().await?))
}

/// Create an exercise; `category_id` must reference an existing category
pub async fn create_exercise(
    State(state): State<AppState>,
    WithRejection(Json(request), _): WithRejection<Json<CreateExercise>, ApiError>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let exercise_id = state.exercises.create_exercise(request).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::created("Exercise", exercise_id)),
    ))
}

pub async fn update_exercise(
    State(state): State<AppState>,
    WithRejection(Path(exercise_id), _): WithRejection<Path<i32>, ApiError>,
    WithRejection(Json(body), _): WithRejection<Json<Map<String, Value>>, ApiError>,
) -> Result<Json<MessageResponse>, ApiError> {
    let patch = Patch::<ExerciseField>::from_json(body)?;
    let exercise_id = state.exercises.update_exercise(exercise_id, patch).await?;
    Ok(Json(MessageResponse::updated("Exercise", exercise_id)))
}

pub async fn delete_exercise(
    State(state): State<AppState>,
    WithRejection(Path(exercise_id), _): WithRejection<Path<i32>, ApiError>,
) -> Result<Json<MessageResponse>, ApiError> {
    let exercise_id = state.exercises.delete_exercise(exercise_id).await?;
    Ok(Json(MessageResponse::deleted("Exercise", exercise_id)))
}
