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
use crate::models::{CreateUser, Patch, Record, User, UserField};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:user_id", get(get_user).patch(update_user).delete(delete_user))
        .route("/:user_id/records", get(list_user_records))
}

/// Get a user by ID
pub async fn get_user(
    State(state): State<AppState>,
    WithRejection(Path(user_id), _): WithRejection<Path<i32>, ApiError>,
) -> Result<Json<User>, ApiError> {
    Ok(Json(state.users.get_user(user_id).await?))
}

/// List all users
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    Ok(Json(state.users.list_users().await?))
}

/// Create a user; the name must be unique
pub async fn create_user(
    State(state): State<AppState>,
    WithRejection(Json(request), _): WithRejection<Json<CreateUser>, ApiError>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let user_id = state.users.create_user(request).await?;
    Ok((StatusCode::CREATED, Json(MessageResponse::created("User", user_id))))
}

/// Update one or more fields of a user
pub async fn update_user(
    State(state): State<AppState>,
    WithRejection(Path(user_id), _): WithRejection<Path<i32>, ApiError>,
    WithRejection(Json(body), _): WithRejection<Json<Map<String, Value>>, ApiError>,
) -> Result<Json<MessageResponse>, ApiError> {
    let patch = Patch::<UserField>::from_json(body)?;
    let user_id = state.users.update_user(user_id, patch).await?;
    Ok(Json(MessageResponse::updated("User", user_id)))
}

/// Delete a user together with their records and repmaxes
pub async fn delete_user(
    State(state): State<AppState>,
    WithRejection(Path(user_id), _): WithRejection<Path<i32>, ApiError>,
) -> Result<Json<MessageResponse>, ApiError> {
    let user_id = state.users.delete_user(user_id).await?;
    Ok(Json(MessageResponse::deleted("User", user_id)))
}

/// Records achieved by one user
pub async fn list_user_records(
    State(state): State<AppState>,
    WithRejection(Path(user_id), _): WithRejection<Path<i32>, ApiError>,
) -> Result<Json<Vec<Record>>, ApiError> {
    state.users.get_user(user_id).await?;
    Ok(Json(state.records.list_records_for_user(user_id).await?))
}
