//! Filtered, paginated title listing.

use marquee_core::browse::BrowseParams;
use sqlx::PgPool;

use super::TITLE_COLUMNS;
use crate::models::title::Title;

/// Builds and runs the browse query.
pub struct BrowseRepo;

impl BrowseRepo {
    /// Fetch one page of titles matching `params`, ordered by title then id.
    ///
    /// Every search word must match, case-insensitively as a substring, at
    /// least one of: the title, a credited contributor's name, a linked
    /// genre's name, or the release year as text. `release_year` is an exact
    /// match and `genre` requires a link to that genre id.
    pub async fn fetch_page(pool: &PgPool, params: &BrowseParams) -> Result<Vec<Title>, sqlx::Error> {
        let (query, patterns) = build_query(params);

        let mut q = sqlx::query_as::<_, Title>(&query);

        // Bind dynamic parameters in the order `build_query` numbered them.
        for pattern in patterns {
            q = q.bind(pattern);
        }
        if let Some(year) = params.release_year {
            q = q.bind(year);
        }
        if let Some(genre_id) = params.genre {
            q = q.bind(genre_id);
        }

        q = q.bind(params.page_size).bind(params.offset);
        q.fetch_all(pool).await
    }
}

/// Assemble the SQL text and the ILIKE patterns for each search word.
///
/// Placeholders are numbered: one per word, then release year, then genre,
/// then LIMIT and OFFSET.
fn build_query(params: &BrowseParams) -> (String, Vec<String>) {
    let mut conditions = Vec::new();
    let mut patterns = Vec::with_capacity(params.search_words.len());
    let mut bind_idx = 1u32;

    for word in &params.search_words {
        conditions.push(format!(
            "(t.title ILIKE ${bind_idx} \
              OR CAST(t.release_year AS TEXT) ILIKE ${bind_idx} \
              OR EXISTS (SELECT 1 FROM contributor_title_mapping ctm \
                         JOIN contributor c ON c.id = ctm.contributor_id \
                         WHERE ctm.title_id = t.id AND c.name ILIKE ${bind_idx}) \
              OR EXISTS (SELECT 1 FROM title_genre tg \
                         JOIN genre_type_lkup g ON g.id = tg.genre_id \
                         WHERE tg.title_id = t.id AND g.name ILIKE ${bind_idx}))"
        ));
        patterns.push(contains_pattern(word));
        bind_idx += 1;
    }
    if params.release_year.is_some() {
        conditions.push(format!("t.release_year = ${bind_idx}"));
        bind_idx += 1;
    }
    if params.genre.is_some() {
        conditions.push(format!(
            "EXISTS (SELECT 1 FROM title_genre tg2 \
                     WHERE tg2.title_id = t.id AND tg2.genre_id = ${bind_idx})"
        ));
        bind_idx += 1;
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };

    let query = format!(
        "SELECT {TITLE_COLUMNS} \
         FROM title t \
         JOIN media_type_lkup mt ON mt.id = t.media_type \
         {where_clause} \
         ORDER BY t.title, t.id \
         LIMIT ${bind_idx} OFFSET ${next_idx}",
        next_idx = bind_idx + 1,
    );

    (query, patterns)
}

/// Wrap a word as an ILIKE substring pattern, escaping LIKE metacharacters.
fn contains_pattern(word: &str) -> String {
    let mut pattern = String::with_capacity(word.len() + 2);
    pattern.push('%');
    for ch in word.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
