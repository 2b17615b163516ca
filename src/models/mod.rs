// Row types, create requests and updatable field sets

pub mod patch;
pub mod user;
pub mod category;
pub mod exercise;
pub mod record;
pub mod repmax;
pub mod workout;
pub mod workout_exercise;

pub use patch::{Patch, PatchField};
pub use user::*;
pub use category::*;
pub use exercise::*;
pub use record::*;
pub use repmax::*;
pub use workout::*;
pub use workout_exercise::*;

use sqlx::{postgres::PgRow, FromRow};

/// A table with an integer surrogate key.
pub trait Table: for<'r> FromRow<'r, PgRow> + Send + Unpin {
    const NAME: &'static str;
    const PRIMARY_KEY: &'static str;
    /// Singular name used in messages.
    const ENTITY: &'static str;

    type Field: PatchField;
}
