use httpmock::prelude::*;
use nonzero_ext::nonzero;
use opendota_api::{
    ApiClient, MatchesApi, OpenDotaError, ProMatchesApi, StatusCode, client::DEFAULT_BASE_URL,
};
use serde_json::json;

fn client_for(server: &MockServer, key: Option<&str>) -> ApiClient {
    ApiClient::new(server.base_url(), key.map(str::to_string), nonzero!(600_u32))
}

#[tokio::test]
async fn pro_matches_page_is_fetched_with_cursor() {
    let server = MockServer::start_async().await;
    let page = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/proMatches")
                .query_param("less_than_match_id", "7700");
            then.status(200).json_body(json!([
                {"match_id": 7699, "leagueid": 16935, "start_time": 1717000000, "duration": 2000},
                {"match_id": 7650, "leagueid": 1, "start_time": 1716900000, "duration": 1800}
            ]));
        })
        .await;

    let client = client_for(&server, None);
    let matches = client.get_pro_matches(Some(7700)).await.unwrap();

    page.assert_async().await;
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].match_id, 7699);
    assert_eq!(matches[1].league_id, 1);
}

#[tokio::test]
async fn api_key_is_sent_as_query_parameter() {
    let server = MockServer::start_async().await;
    let detail = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/matches/42")
                .query_param("api_key", "SECRET");
            then.status(200).json_body(json!({
                "match_id": 42, "leagueid": 16935, "radiant_win": true,
                "dire_team_id": 2, "radiant_team_id": 3, "duration": 2100,
                "radiant_score": 30, "dire_score": 20,
                "tower_status_radiant": 2047, "tower_status_dire": 0,
                "barracks_status_radiant": 63, "barracks_status_dire": 0,
                "objectives": []
            }));
        })
        .await;

    let client = client_for(&server, Some("SECRET"));
    let match_data = client.get_match(42).await.unwrap();

    detail.assert_async().await;
    assert_eq!(match_data.radiant_score, 30);
    assert!(match_data.objectives.unwrap().is_empty());
}

#[tokio::test]
async fn non_success_status_is_reported_without_parsing() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/matches/13");
            then.status(429).json_body(json!({"error": "rate limit exceeded"}));
        })
        .await;

    let client = client_for(&server, None);
    let res = client.get_match(13).await;

    assert!(matches!(
        res,
        Err(OpenDotaError::Status(StatusCode::TOO_MANY_REQUESTS))
    ));
}

#[tokio::test]
#[ignore = "network required"]
async fn live_pro_matches_feed_is_descending() {
    let client = ApiClient::new(DEFAULT_BASE_URL, None, nonzero!(60_u32));

    let page = client.get_pro_matches(None).await.unwrap();

    assert!(!page.is_empty());
    assert!(page.windows(2).all(|w| w[0].match_id > w[1].match_id));
}
