use sqlx::PgPool;

use crate::models::genre::Genre;

/// Read access to the genre lookup table.
pub struct GenreRepo;

impl GenreRepo {
    /// All genres, ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Genre>, sqlx::Error> {
        sqlx::query_as::<_, Genre>("SELECT id, name FROM genre_type_lkup ORDER BY name, id")
            .fetch_all(pool)
            .await
    }
}
