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
use crate::models::{CreateRepmax, Patch, Repmax, RepmaxField};

pub fn repmax_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_repmaxes).post(create_repmax))
        .route(
            "/:repmax_id",
            get(get_repmax).patch(update_repmax).delete(delete_repmax),
        )
}

pub async fn get_repmax(
    State(state): State<AppState>,
    WithRejection(Path(repmax_id), _): WithRejection<Path<i32>, ApiError>,
) -> Result<Json<Repmax>, ApiError> {
    Ok(Json(state.repmaxes.get_repmax(repmax_id).await?))
}

pub async fn list_repmaxes(State(state): State<AppState>) -> Result<Json<Vec<Repmax>>, ApiError> {
    Ok(Json(state.repmaxes.list_repmaxes().await?))
}

pub async fn create_repmax(
    State(state): State<AppState>,
    WithRejection(Json(request), _): WithRejection<Json<CreateRepmax>, ApiError>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let repmax_id = state.repmaxes.create_repmax(request).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::created("Repmax", repmax_id)),
    ))
}

pub async fn update_repmax(
    State(state): State<AppState>,
    WithRejection(Path(repmax_id), _): WithRejection<Path<i32>, ApiError>,
    WithRejection(Json(body), _): WithRejection<Json<Map<String, Value>>, ApiError>,
) -> Result<Json<MessageResponse>, ApiError> {
    let patch = Patch::<RepmaxField>::from_json(body)?;
    let repmax_id = state.repmaxes.update_repmax(repmax_id, patch).await?;
    Ok(Json(MessageResponse::updated("Repmax", repmax_id)))
}

pub async fn delete_repmax(
    State(state): State<AppState>,
    WithRejection(Path(repmax_id), _): WithRejection<Path<i32>, ApiError>,
) -> Result<Json<MessageResponse>, ApiError> {
    let repmax_id = state.repmaxes.delete_repmax(repmax_id).await?;
    Ok(Json(MessageResponse::deleted("Repmax", repmax_id)))
}
