use axum::{routing::get, Router};
use sqlx::PgPool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::categories::category_routes;
use super::exercises::exercise_routes;
use super::health::{health_check, root};
use super::records::record_routes;
use super::repmaxes::repmax_routes;
use super::users::user_routes;
use super::workout_exercises::workout_exercise_routes;
use super::workouts::workout_routes;
use super::AppState;

pub fn create_routes(db: PgPool) -> Router {
    let state = AppState::new(db);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/users", user_routes())
        .nest("/categories", category_routes())
        .nest("/exercises", exercise_routes())
        .nest("/records", record_routes())
        .nest("/repmaxes", repmax_routes())
        .nest("/workouts", workout_routes())
        .nest("/workout-exercises", workout_exercise_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
