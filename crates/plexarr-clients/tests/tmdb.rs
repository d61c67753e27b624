use plexarr_clients::{MetadataLookup, TmdbClient};
use plexarr_models::MediaType;
use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> TmdbClient {
    TmdbClient::new("tmdb-key", &server.uri(), None).unwrap()
}

#[tokio::test]
async fn test_movie_search_returns_first_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/movie"))
        .and(query_param("api_key", "tmdb-key"))
        .and(query_param("query", "Dune "))
        .and(query_param("year", "2021"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "page": 1,
            "results": [{"id": 438631, "title": "Dune"}, {"id": 841, "title": "Dune"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let id = client(&server)
        .search_id("Dune ", &MediaType::Movie, Some(2021))
        .await
        .unwrap();
    assert_eq!(id, Some(438631));
}

#[tokio::test]
async fn test_show_search_uses_tv_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/tv"))
        .and(query_param("query", "Severance"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": [{"id": 95396}]})))
        .expect(1)
        .mount(&server)
        .await;

    let id = client(&server)
        .search_id("Severance", &MediaType::Show, Some(2022))
        .await
        .unwrap();
    assert_eq!(id, Some(95396));
}

#[tokio::test]
async fn test_empty_results_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/movie"))
        .and(query_param("query", "Nothing Like This"))
        .and(query_param_is_missing("year"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"page": 1, "results": []})))
        .expect(1)
        .mount(&server)
        .await;

    let id = client(&server)
        .search_id("Nothing Like This", &MediaType::Movie, None)
        .await
        .unwrap();
    assert_eq!(id, None);
}

#[tokio::test]
async fn test_failed_search_is_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/movie"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"status_code": 7})))
        .mount(&server)
        .await;

    let err = client(&server)
        .search_id("Dune", &MediaType::Movie, Some(2021))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(401));
}

#[tokio::test]
async fn test_connection_error_does_not_expose_api_key() {
    let tmdb = TmdbClient::new("SUPERSECRETKEY", "http://127.0.0.1:1", None).unwrap();

    let err = tmdb
        .search_id("Dune ", &MediaType::Movie, Some(2021))
        .await
        .unwrap_err();

    assert!(!err.to_string().contains("SUPERSECRETKEY"), "{}", err);
    assert!(!format!("{:?}", err).contains("SUPERSECRETKEY"));
}

#[tokio::test]
async fn test_decode_error_does_not_expose_api_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/movie"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = TmdbClient::new("SUPERSECRETKEY", &server.uri(), None)
        .unwrap()
        .search_id("Dune ", &MediaType::Movie, Some(2021))
        .await
        .unwrap_err();

    assert!(!err.to_string().contains("SUPERSECRETKEY"), "{}", err);
    assert!(!format!("{:?}", err).contains("SUPERSECRETKEY"));
}
