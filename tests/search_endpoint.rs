//! End-to-end tests for `GET /sites/MLA/search`.

use axum::http::StatusCode;
use marketplace_proxy::http::HttpServer;
use serde_json::json;

mod common;
use common::{Behaviour, Recorded};

#[tokio::test]
async fn test_search_maps_upstream_response() {
    let recorded = Recorded::default();
    let upstream =
        common::start_mock_upstream(common::mock_marketplace(Behaviour::default(), recorded.clone()))
            .await;
    let server = HttpServer::new(common::proxy_config(upstream)).unwrap();

    let (status, body) =
        common::get_json(server.router(), "/sites/MLA/search?limit=4&q=ipod").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "author": { "name": "Hermes", "lastname": "Echavarría" },
            "categories": ["Celulares y Smartphones", "MLA9999"],
            "items": [
                {
                    "id": "MLA100",
                    "title": "Apple iPod",
                    "price": { "currency": "ARS", "amount": 10, "decimals": "50" },
                    "picture": "http://thumb/100",
                    "condition": "new",
                    "free_shipping": true
                },
                {
                    "id": "MLA200",
                    "title": "iPod case",
                    "price": { "currency": "ARS", "amount": 10, "decimals": "00" },
                    "picture": "http://thumb/200",
                    "condition": "used",
                    "free_shipping": false
                }
            ]
        })
    );

    let queries = recorded.search_queries.lock().unwrap().clone();
    assert_eq!(queries, vec![Some("limit=4&q=ipod".to_string())]);
}

#[tokio::test]
async fn test_search_forwards_parameters_verbatim() {
    let recorded = Recorded::default();
    let upstream =
        common::start_mock_upstream(common::mock_marketplace(Behaviour::default(), recorded.clone()))
            .await;
    let server = HttpServer::new(common::proxy_config(upstream)).unwrap();

    let (status, _) = common::send_get(server.router(), "/sites/MLA/search?limit=abc").await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = common::send_get(server.router(), "/sites/MLA/search").await;
    assert_eq!(status, StatusCode::OK);

    let queries = recorded.search_queries.lock().unwrap().clone();
    assert_eq!(queries, vec![Some("limit=abc".to_string()), None]);
}

#[tokio::test]
async fn test_search_repeated_parameter_is_joined() {
    let recorded = Recorded::default();
    let upstream =
        common::start_mock_upstream(common::mock_marketplace(Behaviour::default(), recorded.clone()))
            .await;
    let server = HttpServer::new(common::proxy_config(upstream)).unwrap();

    let (status, _) = common::send_get(server.router(), "/sites/MLA/search?q=a&q=b").await;
    assert_eq!(status, StatusCode::OK);

    let queries = recorded.search_queries.lock().unwrap().clone();
    assert_eq!(queries, vec![Some("q=a%2Cb".to_string())]);
}

#[tokio::test]
async fn test_search_upstream_error_status_is_500() {
    let upstream = common::start_mock_upstream(common::mock_marketplace(
        Behaviour {
            fail_search: true,
            ..Behaviour::default()
        },
        Recorded::default(),
    ))
    .await;
    let server = HttpServer::new(common::proxy_config(upstream)).unwrap();

    let (status, body) = common::send_get(server.router(), "/sites/MLA/search?q=ipod").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, br#"{"error":"Internal Server Error"}"#.to_vec());
}

#[tokio::test]
async fn test_search_connection_failure_is_500() {
    let server = HttpServer::new(common::proxy_config(common::closed_addr().await)).unwrap();

    let (status, body) = common::send_get(server.router(), "/sites/MLA/search?q=ipod").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, br#"{"error":"Internal Server Error"}"#.to_vec());
}
