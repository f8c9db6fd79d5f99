#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use marquee_api::app::build_app;
use marquee_api::config::ServerConfig;
use marquee_api::state::AppState;
use marquee_core::browse::BrowseParams;
use marquee_core::error::CoreError;
use marquee_core::types::DbId;
use marquee_db::models::contributor::{Contributor, ContributorRoleRow};
use marquee_db::models::genre::Genre;
use marquee_db::models::title::{Title, TitleRoleRow};
use marquee_db::store::CatalogStore;
use marquee_db::PoolSettings;

/// How the fake store should fail, if at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    None,
    DataProvider,
    PoolNotReady,
    Panic,
    /// Never answers within any reasonable request timeout.
    Stall,
}

/// In-memory catalog with call counting.
pub struct FakeCatalog {
    pub titles: Vec<Title>,
    pub genres: Vec<Genre>,
    pub title_genres: HashMap<DbId, Vec<String>>,
    pub title_contributors: HashMap<DbId, Vec<ContributorRoleRow>>,
    pub contributors: Vec<Contributor>,
    pub contributor_titles: HashMap<DbId, Vec<TitleRoleRow>>,
    pub failure: Failure,
    pub calls: AtomicUsize,
    pub last_browse: Mutex<Option<BrowseParams>>,
}

impl Default for FakeCatalog {
    fn default() -> Self {
        Self {
            titles: Vec::new(),
            genres: Vec::new(),
            title_genres: HashMap::new(),
            title_contributors: HashMap::new(),
            contributors: Vec::new(),
            contributor_titles: HashMap::new(),
            failure: Failure::None,
            calls: AtomicUsize::new(0),
            last_browse: Mutex::new(None),
        }
    }
}

impl FakeCatalog {
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_browse(&self) -> Option<BrowseParams> {
        self.last_browse.lock().unwrap().clone()
    }

    async fn enter(&self) -> Result<(), CoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.failure {
            Failure::None => Ok(()),
            Failure::Stall => {
                tokio::time::sleep(Duration::from_secs(300)).await;
                Ok(())
            }
            Failure::DataProvider => Err(CoreError::DataProvider),
            Failure::PoolNotReady => Err(CoreError::PoolNotReady),
            Failure::Panic => panic!("store exploded"),
        }
    }
}

#[async_trait]
impl CatalogStore for FakeCatalog {
    async fn browse_titles(&self, params: &BrowseParams) -> Result<Vec<Title>, CoreError> {
        self.enter().await?;
        *self.last_browse.lock().unwrap() = Some(params.clone());
        Ok(self
            .titles
            .iter()
            .skip(params.offset as usize)
            .take(params.page_size as usize)
            .cloned()
            .collect())
    }

    async fn list_genres(&self) -> Result<Vec<Genre>, CoreError> {
        self.enter().await?;
        Ok(self.genres.clone())
    }

    async fn find_title(&self, id: DbId) -> Result<Option<Title>, CoreError> {
        self.enter().await?;
        Ok(self.titles.iter().find(|t| t.id == id).cloned())
    }

    async fn title_genres(&self, title_id: DbId) -> Result<Vec<String>, CoreError> {
        self.enter().await?;
        Ok(self.title_genres.get(&title_id).cloned().unwrap_or_default())
    }

    async fn title_contributors(
        &self,
        title_id: DbId,
    ) -> Result<Vec<ContributorRoleRow>, CoreError> {
        self.enter().await?;
        Ok(self
            .title_contributors
            .get(&title_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn find_contributor(&self, id: DbId) -> Result<Option<Contributor>, CoreError> {
        self.enter().await?;
        Ok(self.contributors.iter().find(|c| c.id == id).cloned())
    }

    async fn contributor_titles(
        &self,
        contributor_id: DbId,
    ) -> Result<Vec<TitleRoleRow>, CoreError> {
        self.enter().await?;
        Ok(self
            .contributor_titles
            .get(&contributor_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn health_check(&self) -> Result<(), CoreError> {
        self.enter().await
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn title(id: DbId, imdb: &str, name: &str, year: Option<i32>) -> Title {
    Title {
        id,
        imdb_reference_id: Some(imdb.to_string()),
        title: name.to_string(),
        release_year: year,
        media_type: "movie".to_string(),
    }
}

pub fn contributor(id: DbId, imdb: &str, name: &str) -> Contributor {
    Contributor {
        id,
        imdb_reference_id: Some(imdb.to_string()),
        name: name.to_string(),
    }
}

pub fn contributor_row(c: &Contributor, role: &str) -> ContributorRoleRow {
    ContributorRoleRow {
        contributor: c.clone(),
        role: role.to_string(),
    }
}

pub fn title_row(t: &Title, role: &str) -> TitleRoleRow {
    TitleRoleRow {
        title: t.clone(),
        role: role.to_string(),
    }
}

/// The Matrix (id 10) with Keanu Reeves (1) and Lana Wachowski (2).
pub fn matrix_catalog() -> FakeCatalog {
    let matrix = title(10, "tt0133093", "The Matrix", Some(1999));
    let john_wick = title(11, "tt2911666", "John Wick", Some(2014));
    let keanu = contributor(1, "nm0000206", "Keanu Reeves");
    let lana = contributor(2, "nm0905154", "Lana Wachowski");

    let mut catalog = FakeCatalog {
        titles: vec![john_wick.clone(), matrix.clone()],
        genres: vec![
            Genre {
                id: 1,
                name: "Action".to_string(),
            },
            Genre {
                id: 2,
                name: "Sci-Fi".to_string(),
            },
        ],
        contributors: vec![keanu.clone(), lana.clone()],
        ..FakeCatalog::default()
    };

    catalog
        .title_genres
        .insert(10, vec!["Action".to_string(), "Sci-Fi".to_string()]);
    catalog.title_contributors.insert(
        10,
        vec![
            contributor_row(&keanu, "Actor"),
            contributor_row(&keanu, "Actor"),
            contributor_row(&lana, "Director"),
            contributor_row(&lana, "Writer"),
        ],
    );
    catalog.contributor_titles.insert(
        1,
        vec![
            title_row(&john_wick, "actor"),
            title_row(&matrix, "actor"),
            title_row(&matrix, "actor"),
        ],
    );

    catalog
}

/// `count` titles with ids 1..=count, already in browse order.
pub fn numbered_catalog(count: i64) -> FakeCatalog {
    FakeCatalog {
        titles: (1..=count)
            .map(|i| title(i, &format!("tt{i:07}"), &format!("Movie {i:03}"), Some(2000)))
            .collect(),
        ..FakeCatalog::default()
    }
}

// ---------------------------------------------------------------------------
// App + request helpers
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "postgres://unused".to_string(),
        pool: PoolSettings {
            min_connections: 1,
            max_connections: 1,
            acquire_timeout: Duration::from_secs(1),
        },
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        run_migrations: false,
        log_json: false,
    }
}

/// Build the full application router over the given fake store.
///
/// Uses the same `build_app` as the binary so tests exercise the real
/// middleware stack.
pub fn build_test_app(catalog: Arc<FakeCatalog>) -> Router {
    build_test_app_with_config(catalog, test_config())
}

pub fn build_test_app_with_config(catalog: Arc<FakeCatalog>, config: ServerConfig) -> Router {
    let state = AppState {
        catalog,
        config: Arc::new(config),
    };
    build_app(state)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri).await
}

pub async fn send(app: Router, method: Method, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert the error body shape and return its message.
pub fn assert_error_body(json: &serde_json::Value, status: u16, error_code: u16) -> String {
    assert_eq!(json["status_code"], status, "status_code in body: {json}");
    assert_eq!(json["error_code"], error_code, "error_code in body: {json}");
    json["message"]
        .as_str()
        .expect("message should be a string")
        .to_string()
}
