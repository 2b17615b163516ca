use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::{FromRow, Postgres, QueryBuilder};

use super::patch::{self, PatchField};
use super::Table;
use crate::error::InputError;

pub const MAX_WORKOUT_NAME_LEN: usize = 250;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Workout {
    pub workout_id: i32,
    pub workout_name: String,
    /// Minutes.
    pub timecap: i32,
    pub record_id: Option<i32>,
    pub exercise_id: Option<i32>,
    pub for_kids: Option<bool>,
}

impl Table for Workout {
    const NAME: &'static str = "workouts";
    const PRIMARY_KEY: &'static str = "workout_id";
    const ENTITY: &'static str = "Workout";
    type Field = WorkoutField;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWorkout {
    #[serde(alias = "name")]
    pub workout_name: String,
    pub timecap: i32,
    pub record_id: Option<i32>,
    pub exercise_id: Option<i32>,
    pub for_kids: Option<bool>,
}

impl CreateWorkout {
    pub fn validate(&self) -> Result<(), InputError> {
        patch::check_text("workout_name", &self.workout_name, MAX_WORKOUT_NAME_LEN)?;
        patch::check_non_negative("timecap", i64::from(self.timecap))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WorkoutField {
    WorkoutName(String),
    Timecap(i32),
    RecordId(i32),
    ExerciseId(i32),
    ForKids(bool),
}

impl PatchField for WorkoutField {
    fn parse(column: &str, value: Value) -> Result<Self, InputError> {
        match column {
            "workout_name" => Ok(Self::WorkoutName(patch::text(column, value, MAX_WORKOUT_NAME_LEN)?)),
            "timecap" => Ok(Self::Timecap(patch::integer(column, value)?)),
            "record_id" => Ok(Self::RecordId(patch::integer(column, value)?)),
            "exercise_id" => Ok(Self::ExerciseId(patch::integer(column, value)?)),
            "for_kids" => Ok(Self::ForKids(patch::boolean(column, value)?)),
            other => Err(InputError::InvalidColumn(other.to_string())),
        }
    }

    fn column(&self) -> &'static str {
        match self {
            Self::WorkoutName(_) => "workout_name",
            Self::Timecap(_) => "timecap",
            Self::RecordId(_) => "record_id",
            Self::ExerciseId(_) => "exercise_id",
            Self::ForKids(_) => "for_kids",
        }
    }

    fn push_bind(self, builder: &mut QueryBuilder<'_, Postgres>) {
        match self {
            Self::WorkoutName(v) => builder.push_bind(v),
            Self::Timecap(v) | Self::RecordId(v) | Self::ExerciseId(v) => builder.push_bind(v),
            Self::ForKids(v) => builder.push_bind(v),
        };
    }
}
