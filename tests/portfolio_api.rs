mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{register, request, test_app};

#[tokio::test]
async fn public_reads_need_no_token() {
    let app = test_app();

    let (status, body) = request(&app, Method::GET, "/api/portfolio", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["profile"]["name"], "John Doe");
    assert_eq!(body["projects"].as_array().unwrap().len(), 3);
    assert!(body["socialLinks"]["github"].is_string());

    let (status, body) = request(&app, Method::GET, "/api/portfolio/skills", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().iter().any(|s| s == "Docker"));

    let (status, body) = request(
        &app,
        Method::GET,
        "/api/portfolio/projects/2",
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Task Management App");

    let (status, body) = request(
        &app,
        Method::GET,
        "/api/portfolio/projects/99",
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Project not found");

    let (status, body) = request(&app, Method::GET, "/api/preferences", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["theme"], "light");

    let (status, body) = request(&app, Method::GET, "/api/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "OK");
}

#[tokio::test]
async fn writes_are_gated() {
    let app = test_app();

    let (status, _) = request(
        &app,
        Method::PATCH,
        "/api/portfolio/profile",
        None,
        Some(json!({ "name": "Mallory" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = request(
        &app,
        Method::PATCH,
        "/api/portfolio/profile",
        Some("garbage"),
        Some(json!({ "name": "Mallory" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn profile_patch_updates_only_given_fields() {
    let app = test_app();
    let token = register(&app, "a@x.com", "secret1", "Ann").await;

    let (status, body) = request(
        &app,
        Method::PATCH,
        "/api/portfolio/profile",
        Some(&token),
        Some(json!({ "name": "Jane Doe", "quickFacts": ["Ships on Fridays"] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["profile"]["name"], "Jane Doe");
    assert_eq!(body["profile"]["quickFacts"], json!(["Ships on Fridays"]));
    // Untouched fields keep their seeded values.
    assert_eq!(
        body["profile"]["title"],
        "Full Stack Developer & UI/UX Designer"
    );
}

#[tokio::test]
async fn project_put_replaces_and_requires_all_fields() {
    let app = test_app();
    let token = register(&app, "a@x.com", "secret1", "Ann").await;

    let (status, body) = request(
        &app,
        Method::PUT,
        "/api/portfolio/projects/1",
        Some(&token),
        Some(json!({ "title": "Rewritten" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Title, description, and tech are required");

    let (status, body) = request(
        &app,
        Method::PUT,
        "/api/portfolio/projects/1",
        Some(&token),
        Some(json!({ "title": "Rewritten", "description": "New take.", "tech": "Rust" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    // A bare string for tech becomes a one-element list.
    assert_eq!(body["project"]["tech"], json!(["Rust"]));
    assert_eq!(body["project"]["id"], 1);
}

#[tokio::test]
async fn project_patch_and_delete() {
    let app = test_app();
    let token = register(&app, "a@x.com", "secret1", "Ann").await;

    let (status, body) = request(
        &app,
        Method::PATCH,
        "/api/portfolio/projects/3",
        Some(&token),
        Some(json!({ "description": "Now with radar maps." })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["project"]["description"], "Now with radar maps.");
    assert_eq!(body["project"]["title"], "Weather Dashboard");

    let (status, body) = request(
        &app,
        Method::DELETE,
        "/api/portfolio/projects/3",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["project"]["id"], 3);

    let (status, _) = request(
        &app,
        Method::GET,
        "/api/portfolio/projects/3",
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = request(
        &app,
        Method::DELETE,
        "/api/portfolio/projects/3",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
