use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::{FromRow, Postgres, QueryBuilder};

use super::patch::{self, PatchField};
use super::Table;
use crate::error::InputError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Repmax {
    pub repmax_id: i32,
    pub exercise_id: i32,
    pub user_id: i32,
    pub weight: i64,
}

impl Table for Repmax {
    const NAME: &'static str = "repmax";
    const PRIMARY_KEY: &'static str = "repmax_id";
    const ENTITY: &'static str = "Repmax";
    type Field = RepmaxField;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRepmax {
    pub exercise_id: i32,
    pub user_id: i32,
    pub weight: i64,
}

impl CreateRepmax {
    pub fn validate(&self) -> Result<(), InputError> {
        patch::check_non_negative("weight", self.weight)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RepmaxField {
    Weight(i64),
}

impl PatchField for RepmaxField {
    fn parse(column: &str, value: Value) -> Result<Self, InputError> {
        match column {
            "weight" => Ok(Self::Weight(patch::integer(column, value)?)),
            other => Err(InputError::InvalidColumn(other.to_string())),
        }
    }

    fn column(&self) -> &'static str {
        match self {
            Self::Weight(_) => "weight",
        }
    }

    fn push_bind(self, builder: &mut QueryBuilder<'_, Postgres>) {
        match self {
            Self::Weight(v) => builder.push_bind(v),
        };
    }
}
