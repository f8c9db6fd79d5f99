//! HTTP-level tests for `/title/{title_id}`.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{assert_error_body, body_json, build_test_app, get, matrix_catalog, FakeCatalog, Failure};
use serde_json::json;

#[tokio::test]
async fn title_detail_groups_contributor_roles() {
    let response = get(build_test_app(Arc::new(matrix_catalog())), "/title/10").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        json,
        json!({
            "id": 10,
            "imdb_reference_id": "tt0133093",
            "title": "The Matrix",
            "release_year": 1999,
            "media_type": "movie",
            "genres": ["Action", "Sci-Fi"],
            "contributors": [
                {
                    "id": 1,
                    "imdb_reference_id": "nm0000206",
                    "name": "Keanu Reeves",
                    "roles": ["Actor"],
                },
                {
                    "id": 2,
                    "imdb_reference_id": "nm0905154",
                    "name": "Lana Wachowski",
                    "roles": ["Director", "Writer"],
                },
            ],
        })
    );
}

#[tokio::test]
async fn title_without_links_has_empty_lists() {
    let response = get(build_test_app(Arc::new(matrix_catalog())), "/title/11").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["title"], "John Wick");
    assert_eq!(json["genres"], json!([]));
    assert_eq!(json["contributors"], json!([]));
}

#[tokio::test]
async fn missing_title_is_404_with_id_in_message() {
    let catalog = Arc::new(matrix_catalog());
    let response = get(build_test_app(catalog.clone()), "/title/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    let message = assert_error_body(&json, 404, 1001);
    assert_eq!(message, "Movie with ID 999 not found");

    // Only the root lookup ran.
    assert_eq!(catalog.call_count(), 1);
}

#[tokio::test]
async fn invalid_title_id_is_rejected_before_data_access() {
    for uri in ["/title/0", "/title/-4", "/title/matrix"] {
        let catalog = Arc::new(matrix_catalog());
        let response = get(build_test_app(catalog.clone()), uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");

        let json = body_json(response).await;
        let message = assert_error_body(&json, 400, 1000);
        assert_eq!(message, "Invalid input: title ID is invalid");
        assert_eq!(catalog.call_count(), 0, "{uri}");
    }
}

#[tokio::test]
async fn non_utf8_title_id_is_invalid_input() {
    let catalog = Arc::new(matrix_catalog());
    let response = get(build_test_app(catalog.clone()), "/title/%FF").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    let message = assert_error_body(&json, 400, 1000);
    assert_eq!(message, "Invalid input: title ID is invalid");
    assert_eq!(catalog.call_count(), 0);
}

#[tokio::test]
async fn title_store_failure_is_500() {
    let catalog = Arc::new(FakeCatalog {
        failure: Failure::DataProvider,
        ..matrix_catalog()
    });
    let response = get(build_test_app(catalog), "/title/10").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(assert_error_body(&json, 500, 501), "Internal Server Error");
}
