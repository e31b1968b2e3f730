// SPDX-License-Identifier: MPL-2.0
//! REST and live-channel behavior against an in-process mock server.

use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{delete, get, put};
use axum::{Json, Router};
use futures_util::StreamExt;
use iced_bell::api::{live_events, ApiClient, Endpoint, StreamEvent};
use iced_bell::domain::notification::{NotificationId, NotificationKind};
use iced_bell::error::ApiError;
use iced_bell::state::Filter;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

const SESSION: &str = "SESSION=valid";

#[derive(Clone, Default)]
struct Recorder {
    calls: Arc<Mutex<Vec<String>>>,
}

impl Recorder {
    fn record(&self, call: impl Into<String>) {
        self.calls.lock().expect("recorder lock").push(call.into());
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("recorder lock").clone()
    }
}

fn signed_in(headers: &HeaderMap) -> bool {
    headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == SESSION)
}

fn records() -> Vec<Value> {
    vec![
        json!({
            "id": 2,
            "type": "MATCH_COMPLETED",
            "title": "Match completed",
            "message": "Your study match is complete",
            "isRead": false,
            "createdAt": "2025-03-01T10:15:30Z",
            "relatedEntityId": "m-7"
        }),
        json!({
            "id": 1,
            "type": "USER_PROMOTED",
            "title": "Promoted",
            "message": null,
            "isRead": true,
            "createdAt": "2025-02-28T08:00:00"
        }),
    ]
}

async fn unread_count(headers: HeaderMap) -> impl IntoResponse {
    if !signed_in(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    Json(json!({ "unreadCount": 3 })).into_response()
}

async fn list(
    State(recorder): State<Recorder>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    if !signed_in(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    let unread_only = query.get("unread").is_some_and(|v| v == "true");
    recorder.record(format!("list unread={unread_only}"));
    let body: Vec<Value> = records()
        .into_iter()
        .filter(|r| !unread_only || r["isRead"] == json!(false))
        .collect();
    Json(body).into_response()
}

async fn mark_read(State(recorder): State<Recorder>, Path(id): Path<String>) -> StatusCode {
    if id == "missing" {
        return StatusCode::NOT_FOUND;
    }
    recorder.record(format!("read {id}"));
    StatusCode::OK
}

async fn read_all(State(recorder): State<Recorder>) -> StatusCode {
    recorder.record("read-all");
    StatusCode::NO_CONTENT
}

async fn remove(State(recorder): State<Recorder>, Path(id): Path<String>) -> StatusCode {
    recorder.record(format!("delete {id}"));
    StatusCode::NO_CONTENT
}

async fn stream(headers: HeaderMap) -> impl IntoResponse {
    if !signed_in(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    let body = concat!(
        ": connected\n\n",
        "id: 10\nevent: notification\n",
        "data: {\"id\":\"n10\",\"type\":\"MATCH_REQUEST_RECEIVED\",\"title\":\"Request\",",
        "\"message\":\"New match request\",\"isRead\":false,",
        "\"createdAt\":\"2025-03-01T10:15:30Z\"}\n\n",
        "event:heartbeat\n:keep-alive\n\n",
        "event: heartbeat\ndata: ping\n\n",
        "id: 11\nevent: notification\ndata: {broken\n\n",
        "event: presence\ndata: {}\n\n",
    );
    ([(header::CONTENT_TYPE, "text/event-stream")], body).into_response()
}

async fn broken_list() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], "{\"not\": \"a list\"}")
}

async fn spawn_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock server");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("mock server");
    });
    format!("http://{addr}")
}

async fn mock_server(recorder: Recorder) -> String {
    let router = Router::new()
        .route("/api/v1/notifications", get(list))
        .route("/api/v1/notifications/unread-count", get(unread_count))
        .route("/api/v1/notifications/read-all", put(read_all))
        .route("/api/v1/notifications/stream", get(stream))
        .route("/api/v1/notifications/{id}/read", put(mark_read))
        .route("/api/v1/notifications/{id}", delete(remove))
        .with_state(recorder);
    spawn_server(router).await
}

fn client(base_url: &str, session: Option<&str>) -> ApiClient {
    ApiClient::new(&Endpoint::new(base_url, session.map(String::from))).expect("client")
}

#[tokio::test]
async fn unread_count_is_fetched_with_session() {
    let base = mock_server(Recorder::default()).await;
    let count = client(&base, Some(SESSION)).unread_count().await;
    assert_eq!(count, Ok(3));
}

#[tokio::test]
async fn missing_session_is_unauthorized() {
    let base = mock_server(Recorder::default()).await;
    let anonymous = client(&base, None);
    assert_eq!(anonymous.unread_count().await, Err(ApiError::Unauthorized));
    assert_eq!(
        anonymous.list(Filter::All).await.map(|l| l.len()),
        Err(ApiError::Unauthorized)
    );
}

#[tokio::test]
async fn list_decodes_records_in_server_order() {
    let recorder = Recorder::default();
    let base = mock_server(recorder.clone()).await;

    let all = client(&base, Some(SESSION))
        .list(Filter::All)
        .await
        .expect("list");
    let ids: Vec<&str> = all.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "1"]);
    assert_eq!(all[0].kind, NotificationKind::MatchCompleted);
    assert_eq!(all[0].related_entity_id.as_deref(), Some("m-7"));
    assert_eq!(all[1].message, "");
    assert!(all[1].is_read);
    assert_eq!(recorder.calls(), vec!["list unread=false".to_string()]);
}

#[tokio::test]
async fn unread_filter_adds_query_parameter() {
    let recorder = Recorder::default();
    let base = mock_server(recorder.clone()).await;

    let unread = client(&base, Some(SESSION))
        .list(Filter::UnreadOnly)
        .await
        .expect("list");
    assert_eq!(unread.len(), 1);
    assert!(unread.iter().all(|n| n.is_unread()));
    assert_eq!(recorder.calls(), vec!["list unread=true".to_string()]);
}

#[tokio::test]
async fn mutations_hit_their_routes() {
    let recorder = Recorder::default();
    let base = mock_server(recorder.clone()).await;
    let client = client(&base, Some(SESSION));

    client
        .mark_read(&NotificationId::new("2"))
        .await
        .expect("mark read");
    client.mark_all_read().await.expect("read all");
    client
        .delete(&NotificationId::new("1"))
        .await
        .expect("delete");

    assert_eq!(
        recorder.calls(),
        vec![
            "read 2".to_string(),
            "read-all".to_string(),
            "delete 1".to_string()
        ]
    );
}

#[tokio::test]
async fn error_status_keeps_code_and_path() {
    let base = mock_server(Recorder::default()).await;
    let err = client(&base, Some(SESSION))
        .mark_read(&NotificationId::new("missing"))
        .await
        .expect_err("404");
    assert_eq!(
        err,
        ApiError::Status {
            status: 404,
            path: "/api/v1/notifications/missing/read".into(),
        }
    );
}

#[tokio::test]
async fn unexpected_body_is_a_decode_error() {
    let base = spawn_server(Router::new().route("/api/v1/notifications", get(broken_list))).await;
    let err = client(&base, None)
        .list(Filter::All)
        .await
        .expect_err("decode failure");
    assert!(matches!(err, ApiError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let err = client(&format!("http://{addr}"), None)
        .unread_count()
        .await
        .expect_err("connection refused");
    assert!(matches!(err, ApiError::Network(_)), "got {err:?}");
}

#[tokio::test]
async fn live_events_follow_the_stream() {
    let base = mock_server(Recorder::default()).await;
    let endpoint = Endpoint::new(base, Some(SESSION.to_string()));
    let events: Vec<StreamEvent> = live_events(&endpoint).collect().await;

    assert_eq!(events.len(), 5, "got {events:?}");
    assert!(matches!(events[0], StreamEvent::Connected));
    match &events[1] {
        StreamEvent::Delivered(n) => {
            assert_eq!(n.id.as_str(), "n10");
            assert_eq!(n.kind, NotificationKind::MatchRequestReceived);
            assert!(n.is_unread());
        }
        other => panic!("expected Delivered, got {other:?}"),
    }
    assert!(matches!(events[2], StreamEvent::Heartbeat));
    match &events[3] {
        StreamEvent::Malformed { event_id, .. } => assert_eq!(event_id.as_deref(), Some("11")),
        other => panic!("expected Malformed, got {other:?}"),
    }
    assert!(matches!(events[4], StreamEvent::Closed(None)));
}

#[tokio::test]
async fn live_events_report_rejected_session() {
    let base = mock_server(Recorder::default()).await;
    let events: Vec<StreamEvent> = live_events(&Endpoint::new(base, None)).collect().await;

    assert_eq!(events.len(), 1, "got {events:?}");
    assert!(matches!(
        events[0],
        StreamEvent::Closed(Some(ApiError::Unauthorized))
    ));
}

#[tokio::test]
async fn live_events_close_on_unusable_endpoint() {
    let endpoint = Endpoint::new("http://localhost", Some("bad\ncookie".to_string()));
    let events: Vec<StreamEvent> = live_events(&endpoint).collect().await;

    assert_eq!(events.len(), 1, "got {events:?}");
    assert!(matches!(
        events[0],
        StreamEvent::Closed(Some(ApiError::Setup(_)))
    ));
}
