use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::{FromRow, Postgres, QueryBuilder};

use super::patch::{self, Patch, PatchField};
use super::Table;
use crate::error::InputError;

pub const MAX_RECORD_TIME_LEN: usize = 50;

/// A user's result on a workout.
///
/// `record_time` is the achieved result as entered (e.g. `"12:45"`),
/// `record_date` is when it was achieved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Record {
    pub record_id: i32,
    pub workout_id: i32,
    pub user_id: i32,
    pub record_date: NaiveDateTime,
    pub record_time: String,
}

impl Table for Record {
    const NAME: &'static str = "records";
    const PRIMARY_KEY: &'static str = "record_id";
    const ENTITY: &'static str = "Record";
    type Field = RecordField;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRecord {
    pub workout_id: i32,
    pub user_id: i32,
    pub record_time: String,
    /// Defaults to the current time.
    #[serde(default, deserialize_with = "patch::optional_timestamp")]
    pub record_date: Option<NaiveDateTime>,
}

impl CreateRecord {
    pub fn validate(&self) -> Result<(), InputError> {
        patch::check_text("record_time", &self.record_time, MAX_RECORD_TIME_LEN)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RecordField {
    RecordTime(String),
    RecordDate(NaiveDateTime),
}

impl PatchField for RecordField {
    fn parse(column: &str, value: Value) -> Result<Self, InputError> {
        match column {
            "record_time" => Ok(Self::RecordTime(patch::text(column, value, MAX_RECORD_TIME_LEN)?)),
            "record_date" => Ok(Self::RecordDate(patch::timestamp(column, value)?)),
            other => Err(InputError::InvalidColumn(other.to_string())),
        }
    }

    fn column(&self) -> &'static str {
        match self {
            Self::RecordTime(_) => "record_time",
            Self::RecordDate(_) => "record_date",
        }
    }

    fn push_bind(self, builder: &mut QueryBuilder<'_, Postgres>) {
        match self {
            Self::RecordTime(v) => builder.push_bind(v),
            Self::RecordDate(v) => builder.push_bind(v),
        };
    }
}

/// A new result restamps the record unless the caller dated it explicitly.
pub fn stamp_record_date(patch: &mut Patch<RecordField>) {
    if patch.contains("record_time") {
        patch.push(RecordField::RecordDate(Utc::now().naive_utc()));
    }
}
