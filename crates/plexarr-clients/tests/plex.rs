use plexarr_clients::{ClientError, PlexHttpClient, WatchlistSource};
use plexarr_models::MediaType;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const WATCHLIST_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<MediaContainer size="2">
  <Video type="movie" title="Dune (2021)" year="2021" guid="plex://movie/ratingKey=12345"/>
  <Directory type="show" title="Severance" year="2022" guid="plex://show/ratingKey=67890"/>
</MediaContainer>"#;

fn client(server: &MockServer) -> PlexHttpClient {
    PlexHttpClient::new("plex-token", &server.uri(), None).unwrap()
}

#[tokio::test]
async fn test_fetch_watchlist_sends_token_and_parses_xml() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/library/sections/watchlist/all"))
        .and(header("X-Plex-Token", "plex-token"))
        .respond_with(ResponseTemplate::new(200).set_body_string(WATCHLIST_XML))
        .expect(1)
        .mount(&server)
        .await;

    let entries = client(&server).fetch_watchlist().await.unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].title, "Severance");
    assert_eq!(entries[0].media_type, MediaType::Show);
    assert_eq!(entries[1].title, "Dune (2021)");
    assert_eq!(entries[1].rating_key(), Some("12345"));
}

#[tokio::test]
async fn test_fetch_watchlist_rejects_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/library/sections/watchlist/all"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<MediaContainer><Video>"))
        .mount(&server)
        .await;

    let err = client(&server).fetch_watchlist().await.unwrap_err();
    assert!(matches!(err, ClientError::Xml(_)));
}

#[tokio::test]
async fn test_fetch_watchlist_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/library/sections/watchlist/all"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = client(&server).fetch_watchlist().await.unwrap_err();
    assert_eq!(err.status(), Some(401));
}

#[tokio::test]
async fn test_remove_from_watchlist_uses_put_with_rating_key() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/actions/removeFromWatchlist"))
        .and(query_param("ratingKey", "12345"))
        .and(header("X-Plex-Token", "plex-token"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client(&server).remove_from_watchlist("12345").await.unwrap();
}

#[tokio::test]
async fn test_remove_from_watchlist_non_200_is_error() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/actions/removeFromWatchlist"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let err = client(&server).remove_from_watchlist("12345").await.unwrap_err();
    assert!(matches!(err, ClientError::Status { service: "plex", status: 204 }));
}
