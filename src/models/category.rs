use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::{FromRow, Postgres, QueryBuilder};

use super::patch::{self, PatchField};
use super::Table;
use crate::error::InputError;

pub const MAX_CATEGORY_NAME_LEN: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub category_id: i32,
    pub name: String,
}

impl Table for Category {
    const NAME: &'static str = "categories";
    const PRIMARY_KEY: &'static str = "category_id";
    const ENTITY: &'static str = "Category";
    type Field = CategoryField;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategory {
    pub name: String,
}

impl CreateCategory {
    pub fn validate(&self) -> Result<(), InputError> {
        patch::check_text("name", &self.name, MAX_CATEGORY_NAME_LEN)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CategoryField {
    Name(String),
}

impl PatchField for CategoryField {
    fn parse(column: &str, value: Value) -> Result<Self, InputError> {
        match column {
            "name" => Ok(Self::Name(patch::text(column, value, MAX_CATEGORY_NAME_LEN)?)),
            other => Err(InputError::InvalidColumn(other.to_string())),
        }
    }

    fn column(&self) -> &'static str {
        match self {
            Self::Name(_) => "name",
        }
    }

    fn push_bind(self, builder: &mut QueryBuilder<'_, Postgres>) {
        match self {
            Self::Name(v) => builder.push_bind(v),
        };
    }
}
