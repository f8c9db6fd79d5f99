//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async read methods
//! that accept `&PgPool` as the first argument.

pub mod browse_repo;
pub mod contributor_repo;
pub mod genre_repo;
pub mod title_repo;

pub use browse_repo::BrowseRepo;
pub use contributor_repo::ContributorRepo;
pub use genre_repo::GenreRepo;
pub use title_repo::TitleRepo;

/// Title columns with the media type resolved to its name.
///
/// Expects `title t` joined to `media_type_lkup mt`.
pub(crate) const TITLE_COLUMNS: &str =
    "t.id, t.imdb_reference_id, t.title, t.release_year, mt.name AS media_type";
