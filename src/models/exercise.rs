use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::{FromRow, Postgres, QueryBuilder};

use super::patch::{self, PatchField};
use super::Table;
use crate::error::InputError;

pub const MAX_EXERCISE_NAME_LEN: usize = 250;
pub const MAX_MUSCLE_LEN: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Exercise {
    pub exercise_id: i32,
    pub name: String,
    pub weight: i64,
    pub repmax_id: Option<i32>,
    pub primary_muscle: Option<String>,
    pub secondary_muscle: Option<String>,
    pub category_id: i32,
    pub base_exercise: bool,
}

impl Table for Exercise {
    const NAME: &'static str = "exercises";
    const PRIMARY_KEY: &'static str = "exercise_id";
    const ENTITY: &'static str = "Exercise";
    type Field = ExerciseField;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateExercise {
    pub name: String,
    pub weight: i64,
    pub repmax_id: Option<i32>,
    pub primary_muscle: Option<String>,
    pub secondary_muscle: Option<String>,
    pub category_id: i32,
    #[serde(default)]
    pub base_exercise: bool,
}

impl CreateExercise {
    pub fn validate(&self) -> Result<(), InputError> {
        patch::check_text("name", &self.name, MAX_EXERCISE_NAME_LEN)?;
        patch::check_non_negative("weight", self.weight)?;
        if let Some(muscle) = &self.primary_muscle {
            patch::check_text("primary_muscle", muscle, MAX_MUSCLE_LEN)?;
        }
        if let Some(muscle) = &self.secondary_muscle {
            patch::check_text("secondary_muscle", muscle, MAX_MUSCLE_LEN)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExerciseField {
    Name(String),
    Weight(i64),
    RepmaxId(i32),
    PrimaryMuscle(String),
    SecondaryMuscle(String),
    CategoryId(i32),
    BaseExercise(bool),
}

impl PatchField for ExerciseField {
    fn parse(column: &str, value: Value) -> Result<Self, InputError> {
        match column {
            "name" => Ok(Self::Name(patch::text(column, value, MAX_EXERCISE_NAME_LEN)?)),
            "weight" => Ok(Self::Weight(patch::integer(column, value)?)),
            "repmax_id" => Ok(Self::RepmaxId(patch::integer(column, value)?)),
            "primary_muscle" => Ok(Self::PrimaryMuscle(patch::text(column, value, MAX_MUSCLE_LEN)?)),
            "secondary_muscle" => {
                Ok(Self::SecondaryMuscle(patch::text(column, value, MAX_MUSCLE_LEN)?))
            }
            "category_id" => Ok(Self::CategoryId(patch::integer(column, value)?)),
            "base_exercise" => Ok(Self::BaseExercise(patch::boolean(column, value)?)),
            other => Err(InputError::InvalidColumn(other.to_string())),
        }
    }

    fn column(&self) -> &'static str {
        match self {
            Self::Name(_) => "name",
            Self::Weight(_) => "weight",
            Self::RepmaxId(_) => "repmax_id",
            Self::PrimaryMuscle(_) => "primary_muscle",
            Self::SecondaryMuscle(_) => "secondary_muscle",
            Self::CategoryId(_) => "category_id",
            Self::BaseExercise(_) => "base_exercise",
        }
    }

    fn push_bind(self, builder: &mut QueryBuilder<'_, Postgres>) {
        match self {
            Self::Name(v) | Self::PrimaryMuscle(v) | Self::SecondaryMuscle(v) => {
                builder.push_bind(v)
            }
            Self::Weight(v) => builder.push_bind(v),
            Self::RepmaxId(v) | Self::CategoryId(v) => builder.push_bind(v),
            Self::BaseExercise(v) => builder.push_bind(v),
        };
    }
}
