use marquee_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from `genre_type_lkup`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Genre {
    pub id: DbId,
    pub name: String,
}
