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
use crate::models::{Category, CategoryField, CreateCategory, Patch};

pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route(
            "/:category_id",
            get(get_category).patch(update_category).delete(delete_category),
        )
}

pub async fn get_category(
    State(state): State<AppState>,
    WithRejection(Path(category_id), _): WithRejection<Path<i32>, ApiError>,
) -> Result<Json<Category>, ApiError> {
    Ok(Json(state.categories.get_category(category_id).await?))
}

pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<Category>>, ApiError> {
    Ok(Json(state.categories.list_categories().await?))
}

pub async fn create_category(
    State(state): State<AppState>,
    WithRejection(Json(request), _): WithRejection<Json<CreateCategory>, ApiError>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let category_id = state.categories.create_category(request).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::created("Category", category_id)),
    ))
}

pub async fn update_category(
    State(state): State<AppState>,
    WithRejection(Path(category_id), _): WithRejection<Path<i32>, ApiError>,
    WithRejection(Json(body), _): WithRejection<Json<Map<String, Value>>, ApiError>,
) -> Result<Json<MessageResponse>, ApiError> {
    let patch = Patch::<CategoryField>::from_json(body)?;
    let category_id = state.categories.update_category(category_id, patch).await?;
    Ok(Json(MessageResponse::updated("Category", category_id)))
}

/// Deleting a category also deletes its exercises
pub async fn delete_category(
    State(state): State<AppState>,
    WithRejection(Path(category_id), _): WithRejection<Path<i32>, ApiError>,
) -> Result<Json<MessageResponse>, ApiError> {
    let category_id = state.categories.delete_category(category_id).await?;
    Ok(Json(MessageResponse::deleted("Category", category_id)))
}
