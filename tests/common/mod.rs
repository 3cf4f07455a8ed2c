//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    body::Body,
    extract::{Path, RawQuery, State},
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use marketplace_proxy::config::ProxyConfig;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower::ServiceExt;

/// Serve `router` on an ephemeral local port.
pub async fn start_mock_upstream(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

/// An address nothing is listening on.
#[allow(dead_code)]
pub async fn closed_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

pub fn proxy_config(upstream: SocketAddr) -> ProxyConfig {
    let mut config = ProxyConfig::default();
    config.listener.host = "127.0.0.1".into();
    config.upstream.base_url = format!("http://{upstream}");
    config.upstream.system_proxy = false;
    config
}

/// Issue a GET against `router` in-process and return status and body bytes.
pub async fn send_get(router: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = router
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

#[allow(dead_code)]
pub async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = send_get(router, uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}

/// What the mock upstream saw.
#[derive(Clone, Default)]
pub struct Recorded {
    pub search_queries: Arc<Mutex<Vec<Option<String>>>>,
    pub item_ids: Arc<Mutex<Vec<String>>>,
    pub description_ids: Arc<Mutex<Vec<String>>>,
}

/// How the mock upstream should behave.
#[derive(Clone, Copy, Default)]
pub struct Behaviour {
    pub fail_search: bool,
    pub fail_item: bool,
    pub fail_description: bool,
}

pub fn search_payload() -> Value {
    json!({
        "site_id": "MLA",
        "results": [
            {
                "id": "MLA100",
                "title": "Apple iPod",
                "price": 10.5,
                "currency_id": "ARS",
                "thumbnail": "http://thumb/100",
                "condition": "new",
                "shipping": { "free_shipping": true },
                "category_id": "MLA1055",
                "seller": { "id": 1 }
            },
            {
                "id": "MLA200",
                "title": "iPod case",
                "price": 10,
                "currency_id": "ARS",
                "thumbnail": "http://thumb/200",
                "condition": "used",
                "shipping": { "free_shipping": false },
                "category_id": "MLA9999"
            }
        ],
        "filters": [],
        "available_filters": [
            {
                "id": "category",
                "name": "Categorías",
                "values": [
                    { "id": "MLA1055", "name": "Celulares y Smartphones", "results": 12 }
                ]
            }
        ]
    })
}

pub fn item_payload(id: &str) -> Value {
    json!({
        "id": id,
        "title": "Apple iPod",
        "price": 1999.99,
        "currency_id": "ARS",
        "thumbnail": "http://thumb/100",
        "pictures": [
            { "id": "p1", "secure_url": "https://pic/1" },
            { "id": "p2", "secure_url": "https://pic/2" }
        ],
        "condition": "new",
        "shipping": { "free_shipping": true },
        "initial_quantity": 10,
        "available_quantity": 4,
        "category_id": "MLA1055"
    })
}

fn failure() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").into_response()
}

/// Mock marketplace API with the three consumed endpoints.
pub fn mock_marketplace(behaviour: Behaviour, recorded: Recorded) -> Router {
    Router::new()
        .route(
            "/sites/MLA/search",
            get(
                |State((behaviour, recorded)): State<(Behaviour, Recorded)>,
                 RawQuery(query): RawQuery| async move {
                    recorded.search_queries.lock().unwrap().push(query);
                    if behaviour.fail_search {
                        return failure();
                    }
                    Json(search_payload()).into_response()
                },
            ),
        )
        .route(
            "/items/{id}",
            get(
                |State((behaviour, recorded)): State<(Behaviour, Recorded)>,
                 Path(id): Path<String>| async move {
                    recorded.item_ids.lock().unwrap().push(id.clone());
                    if behaviour.fail_item {
                        return failure();
                    }
                    Json(item_payload(&id)).into_response()
                },
            ),
        )
        .route(
            "/items/{id}/description",
            get(
                |State((behaviour, recorded)): State<(Behaviour, Recorded)>,
                 Path(id): Path<String>| async move {
                    recorded.description_ids.lock().unwrap().push(id);
                    if behaviour.fail_description {
                        return failure();
                    }
                    Json(json!({ "plain_text": "Great condition.", "text": "" })).into_response()
                },
            ),
        )
        .with_state((behaviour, recorded))
}
