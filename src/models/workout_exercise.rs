use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::{FromRow, Postgres, QueryBuilder};

use super::patch::{self, PatchField};
use super::Table;
use crate::error::InputError;

/// Join row placing an exercise in a workout with its own counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct WorkoutExercise {
    pub workout_exercise_id: i32,
    pub workout_id: i32,
    pub exercise_id: i32,
    pub sets: i32,
    pub reps: i32,
    /// Seconds.
    pub rest_time: i32,
}

impl Table for WorkoutExercise {
    const NAME: &'static str = "workout_exercises";
    const PRIMARY_KEY: &'static str = "workout_exercise_id";
    const ENTITY: &'static str = "WorkoutExercise";
    type Field = WorkoutExerciseField;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWorkoutExercise {
    pub workout_id: i32,
    pub exercise_id: i32,
    pub sets: i32,
    pub reps: i32,
    pub rest_time: i32,
}

impl CreateWorkoutExercise {
    pub fn validate(&self) -> Result<(), InputError> {
        patch::check_non_negative("sets", i64::from(self.sets))?;
        patch::check_non_negative("reps", i64::from(self.reps))?;
        patch::check_non_negative("rest_time", i64::from(self.rest_time))
    }
}

/// Only the counters are mutable; moving a row to another workout or
/// exercise means deleting and recreating it.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkoutExerciseField {
    Sets(i32),
    Reps(i32),
    RestTime(i32),
}

impl PatchField for WorkoutExerciseField {
    fn parse(column: &str, value: Value) -> Result<Self, InputError> {
        match column {
            "sets" => Ok(Self::Sets(patch::integer(column, value)?)),
            "reps" => Ok(Self::Reps(patch::integer(column, value)?)),
            "rest_time" => Ok(Self::RestTime(patch::integer(column, value)?)),
            other => Err(InputError::InvalidColumn(other.to_string())),
        }
    }

    fn column(&self) -> &'static str {
        match self {
            Self::Sets(_) => "sets",
            Self::Reps(_) => "reps",
            Self::RestTime(_) => "rest_time",
        }
    }

    fn push_bind(self, builder: &mut QueryBuilder<'_, Postgres>) {
        match self {
            Self::Sets(v) | Self::Reps(v) | Self::RestTime(v) => builder.push_bind(v),
        };
    }
}
