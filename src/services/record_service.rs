use chrono::Utc;
use sqlx::PgPool;
use tracing::info;

use super::crud;
use crate::error::DataResult;
use crate::models::{stamp_record_date, CreateRecord, Patch, Record, RecordField};

#[derive(Clone)]
pub struct RecordService {
    db: PgPool,
}

impl RecordService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn create_record(&self, request: CreateRecord) -> DataResult<i32> {
        request.validate()?;
        let record_date = request
            .record_date
            .unwrap_or_else(|| Utc::now().naive_utc());

        let mut tx = self.db.begin().await?;
        let record_id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO records (workout_id, user_id, record_date, record_time)
            VALUES ($1, $2, $3, $4)
            RETURNING record_id
            "#,
        )
        .bind(request.workout_id)
        .bind(request.user_id)
        .bind(record_date)
        .bind(&request.record_time)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;

        info!(record_id, workout_id = request.workout_id, "Record created");
        Ok(record_id)
    }

    pub async fn get_record(&self, record_id: i32) -> DataResult<Record> {
        crud::fetch_one(&self.db, record_id).await
    }

    pub async fn list_records(&self) -> DataResult<Vec<Record>> {
        crud::fetch_all(&self.db).await
    }

    pub async fn list_records_for_user(&self, user_id: i32) -> DataResult<Vec<Record>> {
        crud::fetch_by_parent(&self.db, "user_id", user_id).await
    }

    pub async fn update_record(
        &self,
        record_id: i32,
        mut patch: Patch<RecordField>,
    ) -> DataResult<i32> {
        stamp_record_date(&mut patch);
        crud::update::<Record>(&self.db, record_id, patch).await
    }

    pub async fn delete_record(&self, record_id: i32) -> DataResult<i32> {
        crud::delete::<Record>(&self.db, record_id).await
    }
}
