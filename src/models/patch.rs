use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use sqlx::{Postgres, QueryBuilder};

use crate::error::InputError;

/// A single updatable column of an entity together with its new value.
///
/// Implementors are closed enums: the column name is produced by a `match`
/// over the variants, so caller-supplied text never reaches the SQL string.
pub trait PatchField: Sized + Send {
    /// Map a request key and its JSON value onto a variant.
    fn parse(column: &str, value: Value) -> Result<Self, InputError>;

    fn column(&self) -> &'static str;

    /// Bind the value as the next statement parameter.
    fn push_bind(self, builder: &mut QueryBuilder<'_, Postgres>);
}

/// A validated, non-empty set of column changes for one row.
#[derive(Debug, Clone, PartialEq)]
pub struct Patch<F> {
    fields: Vec<F>,
}

impl<F: PatchField> Patch<F> {
    /// Build a patch from the keys the caller actually sent.
    ///
    /// Every pair is validated before anything is returned, so a single bad
    /// key rejects the whole request.
    pub fn from_json(body: Map<String, Value>) -> Result<Self, InputError> {
        if body.is_empty() {
            return Err(InputError::NoFieldsProvided);
        }

        let fields = body
            .into_iter()
            .map(|(column, value)| F::parse(&column, value))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { fields })
    }

    pub fn from_fields(fields: Vec<F>) -> Result<Self, InputError> {
        if fields.is_empty() {
            return Err(InputError::NoFieldsProvided);
        }
        Ok(Self { fields })
    }

    pub fn columns(&self) -> Vec<&'static str> {
        self.fields.iter().map(PatchField::column).collect()
    }

    pub fn contains(&self, column: &str) -> bool {
        self.fields.iter().any(|field| field.column() == column)
    }

    /// Add a field unless its column is already present.
    pub fn push(&mut self, field: F) {
        if !self.contains(field.column()) {
            self.fields.push(field);
        }
    }

    pub fn into_fields(self) -> Vec<F> {
        self.fields
    }
}

// Value coercion shared by the field enums. Null and blank strings count as
// "no value" regardless of the column type.

fn present(column: &str, value: Value) -> Result<Value, InputError> {
    match value {
        Value::Null => Err(InputError::NoValueProvided(column.to_string())),
        Value::String(ref s) if s.trim().is_empty() => {
            Err(InputError::NoValueProvided(column.to_string()))
        }
        other => Ok(other),
    }
}

pub fn text(column: &str, value: Value, max_len: usize) -> Result<String, InputError> {
    match present(column, value)? {
        Value::String(s) => {
            check_text(column, &s, max_len)?;
            Ok(s)
        }
        _ => Err(InputError::invalid_value(column, "expected a string")),
    }
}

/// Non-negative integer of the column's width.
pub fn integer<T: TryFrom<i64>>(column: &str, value: Value) -> Result<T, InputError> {
    let number = match present(column, value)? {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| InputError::invalid_value(column, "expected an integer"))?,
        _ => return Err(InputError::invalid_value(column, "expected an integer")),
    };
    check_non_negative(column, number)?;
    T::try_from(number).map_err(|_| InputError::invalid_value(column, "value out of range"))
}

pub fn boolean(column: &str, value: Value) -> Result<bool, InputError> {
    match present(column, value)? {
        Value::Bool(b) => Ok(b),
        _ => Err(InputError::invalid_value(column, "expected a boolean")),
    }
}

pub fn timestamp(column: &str, value: Value) -> Result<NaiveDateTime, InputError> {
    match present(column, value)? {
        Value::String(s) => parse_timestamp(&s).ok_or_else(|| {
            InputError::invalid_value(column, "expected a timestamp like 2025-01-01 10:00:00")
        }),
        _ => Err(InputError::invalid_value(column, "expected a timestamp string")),
    }
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    raw.parse::<NaiveDateTime>()
        .ok()
        .or_else(|| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").ok())
        .or_else(|| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M").ok())
}

/// `deserialize_with` helper so request bodies accept the same timestamp
/// formats as patches.
pub fn optional_timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| {
            parse_timestamp(&raw).ok_or_else(|| {
                <D::Error as serde::de::Error>::custom(format!("invalid timestamp: {}", raw))
            })
        })
        .transpose()
}

/// Length and emptiness rules for text columns, also used by create requests.
pub fn check_text(column: &str, value: &str, max_len: usize) -> Result<(), InputError> {
    if value.trim().is_empty() {
        return Err(InputError::NoValueProvided(column.to_string()));
    }
    // Postgres text cannot store NUL
    if value.contains('\0') {
        return Err(InputError::invalid_value(column, "must not contain NUL characters"));
    }
    if value.chars().count() > max_len {
        return Err(InputError::invalid_value(
            column,
            format!("must be at most {} characters", max_len),
        ));
    }
    Ok(())
}

pub fn check_non_negative(column: &str, value: i64) -> Result<(), InputError> {
    if value < 0 {
        return Err(InputError::invalid_value(column, "must not be negative"));
    }
    Ok(())
}
