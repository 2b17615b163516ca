//! Statement builders and executors shared by every entity service.
//!
//! Table and column names only ever come from [`Table`] constants and
//! [`PatchField::column`]; caller values are always bound parameters.

use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::{debug, info};

use crate::error::{DataError, DataResult};
use crate::models::{Patch, PatchField, Table};

pub async fn fetch_one<T: Table>(db: &PgPool, id: i32) -> DataResult<T> {
    let sql = format!("SELECT * FROM {} WHERE {} = $1", T::NAME, T::PRIMARY_KEY);

    let row = sqlx::query_as::<_, T>(&sql)
        .bind(id)
        .fetch_optional(db)
        .await?;

    row.ok_or_else(|| DataError::not_found(T::ENTITY, id))
}

pub async fn fetch_all<T: Table>(db: &PgPool) -> DataResult<Vec<T>> {
    let sql = format!("SELECT * FROM {} ORDER BY {}", T::NAME, T::PRIMARY_KEY);

    let rows = sqlx::query_as::<_, T>(&sql).fetch_all(db).await?;
    debug!(table = T::NAME, count = rows.len(), "Fetched rows");
    Ok(rows)
}

/// Rows of `T` whose `column` equals `value`, for child tables keyed by a parent.
pub async fn fetch_by_parent<T: Table>(
    db: &PgPool,
    column: &'static str,
    value: i32,
) -> DataResult<Vec<T>> {
    let sql = format!(
        "SELECT * FROM {} WHERE {} = $1 ORDER BY {}",
        T::NAME,
        column,
        T::PRIMARY_KEY
    );

    let rows = sqlx::query_as::<_, T>(&sql).bind(value).fetch_all(db).await?;
    Ok(rows)
}

/// `UPDATE <table> SET c1 = $1, c2 = $2 ... WHERE <pk> = $n RETURNING <pk>`
pub fn build_update<T: Table>(id: i32, patch: Patch<T::Field>) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("UPDATE ");
    builder.push(T::NAME).push(" SET ");

    for (index, field) in patch.into_fields().into_iter().enumerate() {
        if index > 0 {
            builder.push(", ");
        }
        builder.push(field.column()).push(" = ");
        field.push_bind(&mut builder);
    }

    builder
        .push(" WHERE ")
        .push(T::PRIMARY_KEY)
        .push(" = ")
        .push_bind(id)
        .push(" RETURNING ")
        .push(T::PRIMARY_KEY);

    builder
}

/// Apply every column of `patch` in one statement and one transaction.
pub async fn update<T: Table>(db: &PgPool, id: i32, patch: Patch<T::Field>) -> DataResult<i32> {
    let columns = patch.columns();
    let mut builder = build_update::<T>(id, patch);

    let mut tx = db.begin().await?;
    let updated = builder
        .build_query_scalar::<i32>()
        .fetch_optional(&mut *tx)
        .await?;

    // Dropping `tx` on the early return rolls it back.
    let updated = updated.ok_or_else(|| DataError::not_found(T::ENTITY, id))?;
    tx.commit().await?;

    info!(table = T::NAME, id = updated, ?columns, "Updated row");
    Ok(updated)
}

pub async fn delete<T: Table>(db: &PgPool, id: i32) -> DataResult<i32> {
    let sql = format!(
        "DELETE FROM {} WHERE {} = $1 RETURNING {}",
        T::NAME,
        T::PRIMARY_KEY,
        T::PRIMARY_KEY
    );

    let mut tx = db.begin().await?;
    let deleted = sqlx::query_scalar::<_, i32>(&sql)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| DataError::not_found(T::ENTITY, id))?;
    tx.commit().await?;

    info!(table = T::NAME, id = deleted, "Deleted row");
    Ok(deleted)
}
