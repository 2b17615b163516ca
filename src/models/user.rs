use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::{FromRow, Postgres, QueryBuilder};

use super::patch::{self, PatchField};
use super::Table;
use crate::error::InputError;

pub const MAX_PASSWORD_LEN: usize = 100;
pub const MAX_NAME_LEN: usize = 250;

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct User {
    pub user_id: i32,
    #[serde(skip_serializing)]
    pub password: String,
    pub name: String,
    pub weight: i64,
    pub user_record_id: Option<i32>,
    pub height: Option<i64>,
}

impl Table for User {
    const NAME: &'static str = "users";
    const PRIMARY_KEY: &'static str = "user_id";
    const ENTITY: &'static str = "User";
    type Field = UserField;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    pub password: String,
    pub name: String,
    pub weight: i64,
    pub user_record_id: Option<i32>,
    pub height: Option<i64>,
}

impl CreateUser {
    pub fn validate(&self) -> Result<(), InputError> {
        patch::check_text("password", &self.password, MAX_PASSWORD_LEN)?;
        patch::check_text("name", &self.name, MAX_NAME_LEN)?;
        patch::check_non_negative("weight", self.weight)?;
        if let Some(height) = self.height {
            patch::check_non_negative("height", height)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UserField {
    Password(String),
    Name(String),
    Weight(i64),
    UserRecordId(i32),
    Height(i64),
}

impl PatchField for UserField {
    fn parse(column: &str, value: Value) -> Result<Self, InputError> {
        match column {
            "password" => Ok(Self::Password(patch::text(column, value, MAX_PASSWORD_LEN)?)),
            "name" => Ok(Self::Name(patch::text(column, value, MAX_NAME_LEN)?)),
            "weight" => Ok(Self::Weight(patch::integer(column, value)?)),
            "user_record_id" => Ok(Self::UserRecordId(patch::integer(column, value)?)),
            "height" => Ok(Self::Height(patch::integer(column, value)?)),
            other => Err(InputError::InvalidColumn(other.to_string())),
        }
    }

    fn column(&self) -> &'static str {
        match self {
            Self::Password(_) => "password",
            Self::Name(_) => "name",
            Self::Weight(_) => "weight",
            Self::UserRecordId(_) => "user_record_id",
            Self::Height(_) => "height",
        }
    }

    fn push_bind(self, builder: &mut QueryBuilder<'_, Postgres>) {
        match self {
            Self::Password(v) | Self::Name(v) => builder.push_bind(v),
            Self::Weight(v) | Self::Height(v) => builder.push_bind(v),
            Self::UserRecordId(v) => builder.push_bind(v),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Patch;
    use serde_json::json;

    #[test]
    fn test_user_patch_keeps_only_sent_fields() {
        let body = json!({ "weight": 82, "height": 181 });
        let patch = Patch::<UserField>::from_json(body.as_object().unwrap().clone()).unwrap();

        assert_eq!(patch.columns(), vec!["height", "weight"]);
        assert_eq!(
            patch.into_fields(),
            vec![UserField::Height(181), UserField::Weight(82)]
        );
    }

    #[test]
    fn test_user_patch_rejects_unknown_column() {
        let body = json!({ "weight": 82, "email": "john@example.com" });
        let err = Patch::<UserField>::from_json(body.as_object().unwrap().clone()).unwrap_err();
        assert_eq!(err, InputError::InvalidColumn("email".into()));
    }

    #[test]
    fn test_user_patch_rejects_primary_key() {
        let body = json!({ "user_id": 5 });
        let err = Patch::<UserField>::from_json(body.as_object().unwrap().clone()).unwrap_err();
        assert_eq!(err, InputError::InvalidColumn("user_id".into()));
    }

    #[test]
    fn test_create_user_validation() {
        let mut request = CreateUser {
            password: "password123".into(),
            name: "john_doe".into(),
            weight: 75,
            user_record_id: None,
            height: Some(180),
        };
        assert!(request.validate().is_ok());

        request.name = String::new();
        assert_eq!(
            request.validate(),
            Err(InputError::NoValueProvided("name".into()))
        );

        request.name = "x".repeat(MAX_NAME_LEN + 1);
        assert!(matches!(request.validate(), Err(InputError::InvalidValue { .. })));
    }

    #[test]
    fn test_password_is_not_serialized() {
        let user = User {
            user_id: 1,
            password: "secret".into(),
            name: "john_doe".into(),
            weight: 75,
            user_record_id: None,
            height: Some(180),
        };
        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("password").is_none());
        assert_eq!(value["name"], "john_doe");
    }
}
