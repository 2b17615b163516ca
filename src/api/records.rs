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
use crate::models::{CreateRecord, Patch, Record, RecordField};

pub fn record_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_records).post(create_record))
        .route(
            "/:record_id",
            get(get_record).patch(update_record).delete(delete_record),
        )
}

pub async fn get_record(
    State(state): State<AppState>,
    WithRejection(Path(record_id), _): WithRejection<Path<i32>, ApiError>,
) -> Result<Json<Record>, ApiError> {
    Ok(Json(state.records.get_record(record_id).await?))
}

pub async fn list_records(State(state): State<AppState>) -> Result<Json<Vec<Record>>, ApiError> {
    Ok(Json(state.records.list_records().await?))
}

pub async fn create_record(
    State(state): State<AppState>,
    WithRejection(Json(request), _): WithRejection<Json<CreateRecord>, ApiError>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let record_id = state.records.create_record(request).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::created("Record", record_id)),
    ))
}

/// A new `record_time` also moves `record_date` to now unless one is given
pub async fn update_record(
    State(state): State<AppState>,
    WithRejection(Path(record_id), _): WithRejection<Path<i32>, ApiError>,
    WithRejection(Json(body), _): WithRejection<Json<Map<String, Value>>, ApiError>,
) -> Result<Json<MessageResponse>, ApiError> {
    let patch = Patch::<RecordField>::from_json(body)?;
    let record_id = state.records.update_record(record_id, patch).await?;
    Ok(Json(MessageResponse::updated("Record", record_id)))
}

pub async fn delete_record(
    State(state): State<AppState>,
    WithRejection(Path(record_id), _): WithRejection<Path<i32>, ApiError>,
) -> Result<Json<MessageResponse>, ApiError> {
    let record_id = state.records.delete_record(record_id).await?;
    Ok(Json(MessageResponse::deleted("Record", record_id)))
}
