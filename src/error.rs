use sqlx::error::ErrorKind;
use thiserror::Error;

/// Caller input rejected before any SQL is executed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("No fields provided for update")]
    NoFieldsProvided,
    #[error("Invalid column name: {0}")]
    InvalidColumn(String),
    #[error("No value was passed for {0}")]
    NoValueProvided(String),
    #[error("Invalid value for {column}: {reason}")]
    InvalidValue { column: String, reason: String },
}

impl InputError {
    pub fn invalid_value(column: &str, reason: impl Into<String>) -> Self {
        InputError::InvalidValue {
            column: column.to_string(),
            reason: reason.into(),
        }
    }
}

/// Failures of a data access operation.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i32 },
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Invalid reference: {0}")]
    InvalidReference(String),
    #[error("Rejected by database: {0}")]
    Rejected(String),
    #[error(transparent)]
    Invalid(#[from] InputError),
    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

impl DataError {
    pub fn not_found(entity: &'static str, id: i32) -> Self {
        DataError::NotFound { entity, id }
    }
}

impl From<sqlx::Error> for DataError {
    fn from(err: sqlx::Error) -> Self {
        let classified = err
            .as_database_error()
            .map(|db_err| (db_err.kind(), db_err.message().to_string()));

        match classified {
            Some((ErrorKind::UniqueViolation, message)) => DataError::Conflict(message),
            Some((ErrorKind::ForeignKeyViolation, message)) => DataError::InvalidReference(message),
            Some((ErrorKind::NotNullViolation, message))
            | Some((ErrorKind::CheckViolation, message)) => DataError::Rejected(message),
            _ => DataError::Database(err),
        }
    }
}

pub type DataResult<T> = Result<T, DataError>;

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_non_database_errors_stay_unclassified() {
        let err = DataError::from(sqlx::Error::RowNotFound);
        assert_matches!(err, DataError::Database(sqlx::Error::RowNotFound));

        let err = DataError::from(sqlx::Error::PoolTimedOut);
        assert_matches!(err, DataError::Database(_));
    }

    #[test]
    fn test_input_error_messages() {
        assert_eq!(
            InputError::InvalidColumn("email".into()).to_string(),
            "Invalid column name: email"
        );
        assert_eq!(
            InputError::invalid_value("weight", "expected an integer").to_string(),
            "Invalid value for weight: expected an integer"
        );
        assert_eq!(
            DataError::from(InputError::NoFieldsProvided).to_string(),
            "No fields provided for update"
        );
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(
            DataError::not_found("Category", 7).to_string(),
            "Category with id 7 not found"
        );
    }
}
