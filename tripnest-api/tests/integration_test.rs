use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;
use tripnest_api::{app, AppState, HttpLimits};
use tripnest_store::{seed, JsonStore};

async fn seeded_app() -> (Router, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStore::new(dir.path());
    seed::seed_missing(&store).await.unwrap();
    (app(AppState::from_store(store, HttpLimits::default())), dir)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn ids(body: &Value) -> Vec<&str> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn test_health() {
    let (app, _dir) = seeded_app().await;
    let (status, body) = send(&app, get("/api/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_list_packages_returns_seed_catalogue() {
    let (app, _dir) = seeded_app().await;
    let (status, body) = send(&app, get("/api/packages")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 15);
    assert_eq!(body[0]["title"], "Goa Beach Paradise");
}

#[tokio::test]
async fn test_search_under_10k_keeps_on_request() {
    let (app, _dir) = seeded_app().await;
    let (status, body) = send(&app, get("/api/packages/search?priceRange=under-10k&sortBy=price-low")).await;

    assert_eq!(status, StatusCode::OK);
    // Priced packages first, on-request packages last.
    assert_eq!(ids(&body), vec!["1", "2"]);
}

#[tokio::test]
async fn test_search_by_rating_is_stable() {
    let (app, _dir) = seeded_app().await;
    let (_, body) = send(&app, get("/api/packages/search?sortBy=rating")).await;

    let ids = ids(&body);
    assert_eq!(&ids[..3], &["2", "5", "6"]);
}

#[tokio::test]
async fn test_search_text_and_category() {
    let (app, _dir) = seeded_app().await;
    let (_, body) = send(&app, get("/api/packages/search?q=GOA")).await;
    assert_eq!(ids(&body), vec!["1"]);

    let (_, body) = send(&app, get("/api/packages/search?category=spiritual")).await;
    assert_eq!(ids(&body), vec!["2"]);
}

#[tokio::test]
async fn test_search_rejects_unknown_sort() {
    let (app, _dir) = seeded_app().await;
    let (status, body) = send(&app, get("/api/packages/search?sortBy=random")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("random"));
}

#[tokio::test]
async fn test_get_package_by_id() {
    let (app, _dir) = seeded_app().await;

    let (status, body) = send(&app, get("/api/packages/3")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Kerala Backwaters Cruise");

    let (status, body) = send(&app, get("/api/packages/missing")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Package not found");
}

#[tokio::test]
async fn test_agent_package_is_listed_and_search_is_capped() {
    let (app, _dir) = seeded_app().await;

    let (status, created) = send(
        &app,
        post_json(
            "/api/packages",
            json!({
                "title": "Ladakh Bike Expedition",
                "description": "Ride the highest passes",
                "cities": "Leh, Nubra, Pangong",
                "price": "24,500",
                "duration": "9D/8N",
                "category": "adventure",
                "highlights": ["Khardung La"]
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["cities"], json!(["Leh", "Nubra", "Pangong"]));
    let id = created["id"].as_str().unwrap().to_string();

    let (_, listed) = send(&app, get("/api/packages")).await;
    assert_eq!(listed.as_array().unwrap().len(), 16);

    let (status, found) = send(&app, get(&format!("/api/packages/{}", id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found["title"], "Ladakh Bike Expedition");

    let (_, searched) = send(&app, get("/api/packages/search")).await;
    assert_eq!(searched.as_array().unwrap().len(), 15);
}

#[tokio::test]
async fn test_agent_package_requires_fields() {
    let (app, _dir) = seeded_app().await;
    let (status, body) = send(&app, post_json("/api/packages", json!({ "title": "Half a form" }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Missing field"));
}

#[tokio::test]
async fn test_contact_submission() {
    let (app, dir) = seeded_app().await;

    let (status, _) = send(&app, post_json("/api/contact", json!({ "name": "Asha" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        post_json(
            "/api/contact",
            json!({ "name": "Asha", "email": "asha@example.com", "message": "Family trip in May" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "ok": true }));

    let raw = std::fs::read_to_string(dir.path().join("contacts.json")).unwrap();
    let contacts: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(contacts[0]["email"], "asha@example.com");
}

#[tokio::test]
async fn test_register_and_login() {
    let (app, _dir) = seeded_app().await;
    let account = json!({ "name": "Ravi", "email": "ravi@example.com", "password": "s3cret" });

    let (status, body) = send(&app, post_json("/api/auth/register", account.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    assert_eq!(body["user"]["email"], "ravi@example.com");
    assert!(body["user"].get("password").is_none());

    let (status, body) = send(&app, post_json("/api/auth/register", account)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Email exists");

    let (status, body) = send(
        &app,
        post_json("/api/auth/login", json!({ "email": "ravi@example.com", "password": "wrong" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid credentials");

    let (status, body) = send(
        &app,
        post_json("/api/auth/login", json!({ "email": "ravi@example.com", "password": "s3cret" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["name"], "Ravi");
    assert!(body["user"].get("password").is_none());
}

#[tokio::test]
async fn test_seeded_user_can_log_in() {
    let (app, _dir) = seeded_app().await;
    let (status, body) = send(
        &app,
        post_json("/api/auth/login", json!({ "email": "test@example.com", "password": "test123" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["id"], "u1");
}

#[tokio::test]
async fn test_directory_collections() {
    let (app, _dir) = seeded_app().await;

    let (status, agents) = send(&app, get("/api/agents")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(agents.as_array().unwrap().len(), 3);

    let first = agents[0]["id"].as_str().unwrap();
    let (status, agent) = send(&app, get(&format!("/api/agents/{}", first))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(agent["id"], first);

    let (status, body) = send(&app, get("/api/agents/nobody")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Agent not found");

    for uri in ["/api/testimonials", "/api/destinations", "/api/hotels"] {
        let (status, body) = send(&app, get(uri)).await;
        assert_eq!(status, StatusCode::OK, "{}", uri);
        assert!(!body.as_array().unwrap().is_empty(), "{}", uri);
    }
}

#[tokio::test]
async fn test_agent_package_rating_sent_as_text() {
    let (app, _dir) = seeded_app().await;
    let (status, created) = send(
        &app,
        post_json(
            "/api/packages",
            json!({
                "title": "Coorg Coffee Trails",
                "description": "Plantation stays in the hills",
                "cities": "Madikeri",
                "price": "14,999",
                "duration": "3D/2N",
                "category": "heritage",
                "rating": "4.5"
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["rating"], 4.5);
    assert_eq!(created["price"], "₹14,999");
}

#[tokio::test]
async fn test_agent_package_rating_out_of_range() {
    let (app, _dir) = seeded_app().await;
    let (status, body) = send(
        &app,
        post_json(
            "/api/packages",
            json!({
                "title": "Coorg Coffee Trails",
                "description": "Plantation stays in the hills",
                "cities": "Madikeri",
                "price": "14,999",
                "duration": "3D/2N",
                "category": "heritage",
                "rating": "9"
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("rating"));
}

#[tokio::test]
async fn test_body_without_json_content_type_is_bad_request() {
    let (app, _dir) = seeded_app().await;
    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/register")
        .body(Body::from("{}"))
        .unwrap();

    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing fields");
}

#[tokio::test]
async fn test_mistyped_body_is_bad_request() {
    let (app, _dir) = seeded_app().await;

    let (status, body) = send(&app, post_json("/api/contact", json!({ "name": 1 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}
