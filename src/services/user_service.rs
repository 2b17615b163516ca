use sqlx::PgPool;
use tracing::info;

use super::crud;
use crate::error::DataResult;
use crate::models::{CreateUser, Patch, User, UserField};

#[derive(Clone)]
pub struct UserService {
    db: PgPool,
}

impl UserService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Fails with `Conflict` when the name is taken.
    pub async fn create_user(&self, user_data: CreateUser) -> DataResult<i32> {
        user_data.validate()?;

        let mut tx = self.db.begin().await?;
        let user_id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO users (password, name, weight, user_record_id, height)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING user_id
            "#,
        )
        .bind(&user_data.password)
        .bind(&user_data.name)
        .bind(user_data.weight)
        .bind(user_data.user_record_id)
        .bind(user_data.height)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;

        info!(user_id, name = %user_data.name, "User created");
        Ok(user_id)
    }

    pub async fn get_user(&self, user_id: i32) -> DataResult<User> {
        crud::fetch_one(&self.db, user_id).await
    }

    pub async fn list_users(&self) -> DataResult<Vec<User>> {
        crud::fetch_all(&self.db).await
    }

    pub async fn update_user(&self, user_id: i32, patch: Patch<UserField>) -> DataResult<i32> {
        crud::update::<User>(&self.db, user_id, patch).await
    }

    /// Records and repmaxes of the user go with it.
    pub async fn delete_user(&self, user_id: i32) -> DataResult<i32> {
        crud::delete::<User>(&self.db, user_id).await
    }
}
