use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use http_body_util::BodyExt;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;
use turfbook_api::{app, AppState};
use turfbook_catalog::Catalog;
use turfbook_core::{AuthStore, InMemoryStore, KeyValueStore, MockIdentity};

async fn test_app() -> (Router, Arc<InMemoryStore>) {
    let storage = Arc::new(InMemoryStore::new());
    let auth = AuthStore::initialize(storage.clone(), "user", MockIdentity::default())
        .await
        .unwrap();
    let state = AppState::new(Catalog::bundled().unwrap(), auth);
    (app(state), storage)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

async fn login(app: &Router) -> Value {
    let (status, user) = send(
        app,
        "POST",
        "/auth/login",
        Some(json!({ "email": "anyone@example.com", "password": "whatever" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    user
}

#[tokio::test]
async fn test_listing_returns_whole_catalog() {
    let (app, _) = test_app().await;
    let catalog = Catalog::bundled().unwrap();

    let (status, body) = send(&app, "GET", "/turfs", None).await;
    assert_eq!(status, StatusCode::OK);

    let turfs = body["turfs"].as_array().unwrap();
    assert_eq!(turfs.len(), catalog.len());
    assert_eq!(turfs[0]["id"], catalog.turfs()[0].id.as_str());
    assert_eq!(turfs[0]["isFavorite"], false);
    assert!(body.get("emptyMessage").is_none());
}

#[tokio::test]
async fn test_listing_filters_by_location_and_sport() {
    let (app, _) = test_app().await;

    let (_, body) = send(&app, "GET", "/turfs?location=PUNE&sport=Cricket&date=", None).await;
    let turfs = body["turfs"].as_array().unwrap();
    assert!(!turfs.is_empty());
    for turf in turfs {
        assert!(turf["location"].as_str().unwrap().to_lowercase().contains("pune"));
        assert_eq!(turf["sport"], "Cricket");
    }

    let (status, body) = send(&app, "GET", "/turfs?location=Atlantis", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["turfs"].as_array().unwrap().is_empty());
    assert_eq!(body["emptyMessage"], "No turfs found matching your search.");
}

#[tokio::test]
async fn test_unparseable_search_extras_are_ignored() {
    let (app, _) = test_app().await;

    for uri in [
        "/turfs?location=pune&date=garbage&isIndoor=",
        "/turfs?location=pune&date=12/25/2024&hasLighting=on",
        "/turfs?location=pune&isIndoor=sometimes",
    ] {
        let (status, body) = send(&app, "GET", uri, None).await;
        assert_eq!(status, StatusCode::OK, "{}", uri);

        let ids: Vec<&str> = body["turfs"].as_array().unwrap().iter().map(|t| t["id"].as_str().unwrap()).collect();
        assert_eq!(ids, vec!["2", "4"], "{}", uri);
    }
}

#[tokio::test]
async fn test_details_open_on_today() {
    let (app, _) = test_app().await;

    let (status, body) = send(&app, "GET", "/turfs/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["turf"]["id"], "1");
    assert_eq!(body["booking"]["timeSlots"].as_array().unwrap().len(), 17);
    assert_eq!(body["booking"]["selectedTime"], Value::Null);

    let (status, _) = send(&app, "GET", "/turfs/unknown", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_anonymous_favorite_requires_login() {
    let (app, storage) = test_app().await;

    let (status, body) = send(&app, "POST", "/favorites/1/toggle", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Please login to add to favorites");
    assert_eq!(body["redirect"], "/login");
    assert_eq!(storage.get("user").await.unwrap(), None);

    let (status, body) = send(&app, "GET", "/favorites", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn test_favorite_flow() {
    let (app, storage) = test_app().await;
    login(&app).await;

    let (_, body) = send(&app, "GET", "/favorites", None).await;
    assert_eq!(body["emptyMessage"], "You haven't added any turfs to your favorites yet.");

    let (status, body) = send(&app, "POST", "/favorites/3", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isFavorite"], true);

    // Adding again does not duplicate
    send(&app, "POST", "/favorites/3", None).await;
    let (_, body) = send(&app, "POST", "/favorites/1/toggle", None).await;
    assert_eq!(body["favorites"], json!(["3", "1"]));

    // Favorites page follows catalog order
    let (_, body) = send(&app, "GET", "/favorites", None).await;
    let ids: Vec<&str> = body["turfs"].as_array().unwrap().iter().map(|t| t["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["1", "3"]);

    let (_, body) = send(&app, "GET", "/turfs?location=bengaluru", None).await;
    assert_eq!(body["turfs"][0]["isFavorite"], true);

    let (_, body) = send(&app, "DELETE", "/favorites/3", None).await;
    assert_eq!(body["isFavorite"], false);

    let raw = storage.get("user").await.unwrap().unwrap();
    let persisted: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(persisted["favorites"], json!(["1"]));

    let (status, _) = send(&app, "POST", "/favorites/unknown", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_booking_flow() {
    let (app, storage) = test_app().await;

    let (status, body) = send(&app, "POST", "/turfs/1/bookings", Some(json!({ "timeSlot": "18:00" }))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Please login to book a turf");

    login(&app).await;
    let before = storage.get("user").await.unwrap();

    let (status, body) = send(&app, "POST", "/turfs/1/bookings", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Please select a time slot");

    let (status, _) = send(&app, "POST", "/turfs/1/bookings", Some(json!({ "timeSlot": "23:00" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let today = chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string();

    // An untouched date field books for today
    let (status, body) = send(&app, "POST", "/turfs/1/bookings", Some(json!({ "date": "", "timeSlot": "07:00" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["date"], today.as_str());
    assert_eq!(body["message"], format!("Booking confirmed for {} at 07:00", today));

    let (status, body) = send(&app, "POST", "/turfs/1/bookings", Some(json!({ "timeSlot": "18:00" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["outcome"], "CONFIRMED");
    assert_eq!(body["persisted"], false);
    assert_eq!(body["message"], format!("Booking confirmed for {} at 18:00", today));

    // No booking record is written
    assert_eq!(storage.get("user").await.unwrap(), before);
}

#[tokio::test]
async fn test_session_lifecycle() {
    let (app, storage) = test_app().await;

    let (_, body) = send(&app, "GET", "/auth/session", None).await;
    assert_eq!(body["status"], "ANONYMOUS");
    let (_, body) = send(&app, "GET", "/nav", None).await;
    assert_eq!(body, json!([{ "kind": "LINK", "label": "Login", "path": "/login" }]));
    let (status, _) = send(&app, "GET", "/profile", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, user) = send(
        &app,
        "POST",
        "/auth/register",
        Some(json!({ "name": "Asha", "email": "asha@example.com", "password": "pw" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["name"], "Asha");

    let (_, body) = send(&app, "GET", "/auth/session", None).await;
    assert_eq!(body["status"], "AUTHENTICATED");
    assert_eq!(body["user"]["email"], "asha@example.com");

    let (_, body) = send(&app, "GET", "/profile", None).await;
    assert_eq!(body["name"], "Asha");
    assert_eq!(body["recentBookings"].as_array().unwrap().len(), 2);

    let (_, body) = send(&app, "GET", "/nav", None).await;
    assert_eq!(body.as_array().unwrap().len(), 3);

    let (status, _) = send(&app, "POST", "/auth/logout", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, "POST", "/auth/logout", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(storage.get("user").await.unwrap(), None);

    let (status, _) = send(&app, "GET", "/favorites", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_sports_options() {
    let (app, _) = test_app().await;
    let (_, body) = send(&app, "GET", "/sports", None).await;
    assert_eq!(body, json!(["Football", "Cricket", "Basketball"]));
}

// Appends body frames to `buf` until it contains `needle`
async fn read_until(body: &mut Body, buf: &mut String, needle: &str) {
    tokio::time::timeout(Duration::from_secs(5), async {
        while !buf.contains(needle) {
            let frame = body.frame().await.expect("stream ended").unwrap();
            if let Ok(data) = frame.into_data() {
                buf.push_str(std::str::from_utf8(&data).unwrap());
            }
        }
    })
    .await
    .expect("timed out waiting for session event");
}

#[tokio::test]
async fn test_session_stream_emits_snapshots() {
    let (app, _) = test_app().await;

    let request = Request::builder().uri("/auth/session/stream").body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()["content-type"].to_str().unwrap().starts_with("text/event-stream"));

    let mut body = response.into_body();
    let mut buf = String::new();

    // The current snapshot arrives before any change
    read_until(&mut body, &mut buf, "ANONYMOUS").await;
    assert!(buf.contains("event: session"));
    assert!(!buf.contains("AUTHENTICATED"));

    login(&app).await;

    read_until(&mut body, &mut buf, "AUTHENTICATED").await;
    assert_eq!(buf.matches("event: session").count(), 2);
    assert!(buf.find("ANONYMOUS").unwrap() < buf.find("AUTHENTICATED").unwrap());
    assert!(buf.contains("john@example.com"));
}
