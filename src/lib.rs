//! Fitness tracker REST API: users, categories, exercises, workouts, records,
//! repmaxes and workout/exercise links stored in PostgreSQL.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
