use actix_web::{http::StatusCode, test, web, App};
use serde_json::{json, Value};

use urban_telegraph::services::{article, Service};
use urban_telegraph::storage::Storage;

macro_rules! test_app {
  ($storage:expr) => {
    test::init_service(
      App::new()
        .data($storage.clone())
        .service(web::scope("/api").configure(|web| article::new_factory().api_config(web))),
    )
    .await
  };
}

fn minimal_article() -> Value {
  json!({
    "title": "Rooftop gardens",
    "content": "Green space above the gridlock.",
    "category": "environment",
  })
}

macro_rules! create_article {
  ($app:expr, $body:expr) => {{
    let req = test::TestRequest::post()
      .uri("/api/articles")
      .set_json($body)
      .to_request();
    let resp = test::call_service($app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let article: Value = test::read_body_json(resp).await;
    article
  }};
}

#[actix_rt::test]
async fn create_minimal_defaults_to_draft() {
  let storage = Storage::new();
  let mut app = test_app!(storage);

  let article = create_article!(&mut app, &minimal_article());

  assert_eq!(article["status"], "draft");
  assert_eq!(article["publishedAt"], Value::Null);
  assert_eq!(article["createdAt"], article["updatedAt"]);
  assert_eq!(article["author"], "Urban-Telegraph Team");
  assert!(article["id"].as_str().unwrap().len() > 0);
}

#[actix_rt::test]
async fn create_published_stamps_published_at() {
  let storage = Storage::new();
  let mut app = test_app!(storage);

  let mut body = minimal_article();
  body["status"] = json!("published");
  let article = create_article!(&mut app, &body);

  assert_eq!(article["status"], "published");
  assert_eq!(article["publishedAt"], article["createdAt"]);
}

#[actix_rt::test]
async fn create_missing_title_is_400_naming_title() {
  let storage = Storage::new();
  let mut app = test_app!(storage);

  let req = test::TestRequest::post()
    .uri("/api/articles")
    .set_json(&json!({
      "content": "No headline on this one.",
      "category": "culture",
    }))
    .to_request();
  let resp = test::call_service(&mut app, req).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["message"], "Validation error");
  let fields: Vec<&str> = body["errors"]
    .as_array()
    .unwrap()
    .iter()
    .map(|e| e["field"].as_str().unwrap())
    .collect();
  assert_eq!(fields, vec!["title"]);
}

#[actix_rt::test]
async fn get_by_id_and_unknown_404() {
  let storage = Storage::new();
  let mut app = test_app!(storage);

  let article = create_article!(&mut app, &minimal_article());
  let id = article["id"].as_str().unwrap();

  let req = test::TestRequest::get()
    .uri(&format!("/api/articles/{}", id))
    .to_request();
  let resp = test::call_service(&mut app, req).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let fetched: Value = test::read_body_json(resp).await;
  assert_eq!(fetched, article);

  let req = test::TestRequest::get()
    .uri("/api/articles/no-such-id")
    .to_request();
  let resp = test::call_service(&mut app, req).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["message"], "Article not found");
}

#[actix_rt::test]
async fn round_trip_partial_update() {
  let storage = Storage::new();
  let mut app = test_app!(storage);

  let article = create_article!(&mut app, &minimal_article());
  let id = article["id"].as_str().unwrap();

  let req = test::TestRequest::put()
    .uri(&format!("/api/articles/{}", id))
    .set_json(&json!({ "excerpt": "A short summary." }))
    .to_request();
  let resp = test::call_service(&mut app, req).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let updated: Value = test::read_body_json(resp).await;

  assert_eq!(updated["title"], article["title"]);
  assert_eq!(updated["content"], article["content"]);
  assert_eq!(updated["excerpt"], "A short summary.");
  // ISO-formatted timestamps order lexicographically
  assert!(updated["updatedAt"].as_str().unwrap() >= article["createdAt"].as_str().unwrap());
}

#[actix_rt::test]
async fn update_unknown_id_is_404() {
  let storage = Storage::new();
  let mut app = test_app!(storage);

  let req = test::TestRequest::put()
    .uri("/api/articles/no-such-id")
    .set_json(&json!({ "title": "New title" }))
    .to_request();
  let resp = test::call_service(&mut app, req).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn update_invalid_status_is_400() {
  let storage = Storage::new();
  let mut app = test_app!(storage);

  let article = create_article!(&mut app, &minimal_article());
  let id = article["id"].as_str().unwrap();

  let req = test::TestRequest::put()
    .uri(&format!("/api/articles/{}", id))
    .set_json(&json!({ "status": "archived" }))
    .to_request();
  let resp = test::call_service(&mut app, req).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["errors"][0]["field"], "status");
}

#[actix_rt::test]
async fn publish_once_via_api() {
  let storage = Storage::new();
  let mut app = test_app!(storage);

  let article = create_article!(&mut app, &minimal_article());
  let id = article["id"].as_str().unwrap();

  let req = test::TestRequest::put()
    .uri(&format!("/api/articles/{}", id))
    .set_json(&json!({ "status": "published" }))
    .to_request();
  let resp = test::call_service(&mut app, req).await;
  let first: Value = test::read_body_json(resp).await;
  assert!(first["publishedAt"].is_string());

  let req = test::TestRequest::put()
    .uri(&format!("/api/articles/{}", id))
    .set_json(&json!({ "status": "published", "title": "Second pass" }))
    .to_request();
  let resp = test::call_service(&mut app, req).await;
  let second: Value = test::read_body_json(resp).await;

  assert_eq!(second["publishedAt"], first["publishedAt"]);
  assert_eq!(second["title"], "Second pass");
}

#[actix_rt::test]
async fn published_listing_excludes_drafts() {
  let storage = Storage::new();
  let mut app = test_app!(storage);

  create_article!(&mut app, &minimal_article());
  let mut body = minimal_article();
  body["title"] = json!("Live story");
  body["status"] = json!("published");
  create_article!(&mut app, &body);

  // "published" must route to the listing, not the {id} handler
  let req = test::TestRequest::get()
    .uri("/api/articles/published")
    .to_request();
  let resp = test::call_service(&mut app, req).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let listed: Value = test::read_body_json(resp).await;

  let listed = listed.as_array().unwrap();
  assert_eq!(listed.len(), 1);
  assert_eq!(listed[0]["title"], "Live story");

  let req = test::TestRequest::get().uri("/api/articles").to_request();
  let resp = test::call_service(&mut app, req).await;
  let all: Value = test::read_body_json(resp).await;
  assert_eq!(all.as_array().unwrap().len(), 2);
}

#[actix_rt::test]
async fn delete_article_then_404() {
  let storage = Storage::new();
  let mut app = test_app!(storage);

  let article = create_article!(&mut app, &minimal_article());
  let id = article["id"].as_str().unwrap();

  let req = test::TestRequest::delete()
    .uri(&format!("/api/articles/{}", id))
    .to_request();
  let resp = test::call_service(&mut app, req).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["message"], "Article deleted successfully");

  let req = test::TestRequest::get()
    .uri(&format!("/api/articles/{}", id))
    .to_request();
  let resp = test::call_service(&mut app, req).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);

  let req = test::TestRequest::delete()
    .uri(&format!("/api/articles/{}", id))
    .to_request();
  let resp = test::call_service(&mut app, req).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
