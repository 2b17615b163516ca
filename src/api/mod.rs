// API routes and handlers

pub mod error;
pub mod health;
pub mod routes;
pub mod users;
pub mod categories;
pub mod exercises;
pub mod records;
pub mod repmaxes;
pub mod workouts;
pub mod workout_exercises;

pub use error::ApiError;

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::services::{
    CategoryService, ExerciseService, RecordService, RepmaxService, UserService,
    WorkoutExerciseService, WorkoutService,
};

/// Shared by every router; each service holds a clone of the same pool.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub users: UserService,
    pub categories: CategoryService,
    pub exercises: ExerciseService,
    pub records: RecordService,
    pub repmaxes: RepmaxService,
    pub workouts: WorkoutService,
    pub workout_exercises: WorkoutExerciseService,
}

impl AppState {
    pub fn new(db: PgPool) -> Self {
        Self {
            users: UserService::new(db.clone()),
            categories: CategoryService::new(db.clone()),
            exercises: ExerciseService::new(db.clone()),
            records: RecordService::new(db.clone()),
            repmaxes: RepmaxService::new(db.clone()),
            workouts: WorkoutService::new(db.clone()),
            workout_exercises: WorkoutExerciseService::new(db.clone()),
            db,
        }
    }
}

/// Confirmation body for create, update and delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
    pub id: i32,
}

impl MessageResponse {
    pub fn created(entity: &str, id: i32) -> Self {
        Self {
            message: format!("{} created successfully with id: {}", entity, id),
            id,
        }
    }

    pub fn updated(entity: &str, id: i32) -> Self {
        Self {
            message: format!("{} updated successfully", entity),
            id,
        }
    }

    pub fn deleted(entity: &str, id: i32) -> Self {
        Self {
            message: format!("{} with id {} deleted", entity, id),
            id,
        }
    }
}
