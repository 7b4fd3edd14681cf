//! Tests for the catalog client against a mock content API.

use podcaster_catalog::{CatalogClient, CatalogConfig, CatalogError};
use podcaster_playback::PlaybackManager;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// =============================================================================
// Helpers
// =============================================================================

fn api_episode(id: &str, published_at: &str, duration: u64) -> Value {
    json!({
        "id": id,
        "title": format!("Episode {}", id),
        "members": "Diego Fernandes, Mayk Brito",
        "published_at": published_at,
        "thumbnail": format!("https://cdn.example.com/{}.jpg", id),
        "description": "<p>Show notes</p>",
        "file": {
            "url": format!("https://cdn.example.com/{}.m4a", id),
            "type": "audio/x-m4a",
            "duration": duration
        }
    })
}

fn client_for(server: &MockServer) -> CatalogClient {
    CatalogClient::new(CatalogConfig::new(server.uri())).unwrap()
}

// =============================================================================
// Episode list
// =============================================================================

mod latest_episodes {
    use super::*;

    #[tokio::test]
    async fn test_sends_limit_and_sort_params() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/episodes"))
            .and(query_param("_limit", "12"))
            .and(query_param("sort", "published_at"))
            .and(query_param("order", "desc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                api_episode("a", "2021-01-22 07:33:00", 3981),
                api_episode("b", "2021-01-15 09:00:00", 1200),
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let episodes = client_for(&server).latest_episodes().await.unwrap();

        assert_eq!(episodes.len(), 2);
        assert_eq!(episodes[0].id, "a");
        assert_eq!(episodes[0].published_at, "22 jan 21");
        assert_eq!(episodes[0].duration_as_string, "01:06:21");
        assert_eq!(episodes[1].duration_as_string, "00:20:00");
    }

    #[tokio::test]
    async fn test_custom_limit() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/episodes"))
            .and(query_param("_limit", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let config = CatalogConfig {
            limit: 3,
            ..CatalogConfig::new(server.uri())
        };
        let episodes = CatalogClient::new(config)
            .unwrap()
            .latest_episodes()
            .await
            .unwrap();

        assert!(episodes.is_empty());
    }

    #[tokio::test]
    async fn test_server_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/episodes"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let result = client_for(&server).latest_episodes().await;

        match result.unwrap_err() {
            CatalogError::Server { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("Expected Server error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/episodes"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let result = client_for(&server).latest_episodes().await;
        assert!(matches!(result, Err(CatalogError::Parse(msg)) if msg.contains("episode list")));
    }

    #[tokio::test]
    async fn test_bad_date_fails_mapping() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/episodes"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([api_episode("a", "last tuesday", 60)])),
            )
            .mount(&server)
            .await;

        let result = client_for(&server).latest_episodes().await;
        assert!(matches!(result, Err(CatalogError::InvalidDate(_))));
    }
}

// =============================================================================
// Single episode
// =============================================================================

mod single_episode {
    use super::*;

    #[tokio::test]
    async fn test_fetch_by_id() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/episodes/faladev-30"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(api_episode("faladev-30", "2021-02-01 10:00:00", 59)),
            )
            .mount(&server)
            .await;

        let episode = client_for(&server).episode("faladev-30").await.unwrap();

        assert_eq!(episode.title, "Episode faladev-30");
        assert_eq!(episode.published_at, "1 fev 21");
        assert_eq!(episode.duration_as_string, "00:00:59");
    }

    #[tokio::test]
    async fn test_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/episodes/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_string("{}"))
            .mount(&server)
            .await;

        let result = client_for(&server).episode("missing").await;
        assert!(matches!(
            result,
            Err(CatalogError::Server { status: 404, .. })
        ));
    }
}

// =============================================================================
// Home listing into the player
// =============================================================================

mod home_listing {
    use super::*;

    #[tokio::test]
    async fn test_split_and_play_from_all_section() {
        let server = MockServer::start().await;

        let body: Vec<Value> = (0..5)
            .map(|i| api_episode(&format!("ep{}", i), "2021-01-22 07:33:00", 600))
            .collect();

        Mock::given(method("GET"))
            .and(path("/episodes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let listing = client_for(&server).home_listing().await.unwrap();
        assert_eq!(listing.latest.len(), 2);
        assert_eq!(listing.all.len(), 3);

        let mut player = PlaybackManager::default();
        let index = listing.all_index(1).unwrap();
        player.play_list(listing.playlist(), index).unwrap();

        assert_eq!(player.len(), 5);
        assert_eq!(player.current_index(), 3);
        assert_eq!(player.current_episode().unwrap().title, "Episode ep3");
        assert!(player.is_playing());
    }
}

// =============================================================================
// Connectivity
// =============================================================================

#[tokio::test]
async fn test_unreachable_server() {
    let config = CatalogConfig {
        timeout_secs: 2,
        ..CatalogConfig::new("http://127.0.0.1:1")
    };
    let result = CatalogClient::new(config)
        .unwrap()
        .latest_episodes()
        .await;

    assert!(matches!(result, Err(CatalogError::Unreachable(_))));
}
