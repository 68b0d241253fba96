#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use classroom_crud::{product_app, student_app, AppConfig, AppState, Db, ProductService, StudentService};
use serde_json::Value;
use tower::ServiceExt;

pub async fn memory_db() -> (Db, AppConfig) {
    let config = AppConfig::new("sqlite::memory:");
    let db = Db::connect(&config).await.expect("in-memory sqlite");
    (db, config)
}

pub async fn students() -> (Router, Db) {
    let (db, config) = memory_db().await;
    StudentService::init(&db).await.expect("students table");
    (student_app(AppState::new(db.clone(), &config)), db)
}

pub async fn products() -> (Router, Db) {
    let (db, config) = memory_db().await;
    ProductService::init(&db).await.expect("products table");
    (product_app(AppState::new(db.clone(), &config)), db)
}

pub async fn send(app: &Router, req: Request<Body>) -> Response<Body> {
    app.clone().oneshot(req).await.expect("router is infallible")
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut req = Request::builder().method("GET").uri(uri);
    if let Some(c) = cookie {
        req = req.header(header::COOKIE, c);
    }
    req.body(Body::empty()).unwrap()
}

pub fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn json(resp: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).expect("json body")
}

/// Asserts a redirect-after-post and returns its target.
pub fn location(resp: &Response<Body>) -> String {
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .expect("location header")
        .to_string()
}

/// `name=value` of the flash cookie set by `resp`, ready to send back in a `Cookie` header.
pub fn flash_cookie(resp: &Response<Body>) -> Option<String> {
    resp.headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with("_flash="))
        .and_then(|v| v.split(';').next())
        .map(str::to_string)
}

/// `(level, message)` pairs from a page's `meta.flashes`.
pub fn flashes(page: &Value) -> Vec<(String, String)> {
    page["meta"]["flashes"]
        .as_array()
        .expect("flashes array")
        .iter()
        .map(|f| {
            (
                f["level"].as_str().unwrap().to_string(),
                f["message"].as_str().unwrap().to_string(),
            )
        })
        .collect()
}

/// Follow a redirect with the flash cookie it set and return the resulting page.
pub async fn follow(app: &Router, resp: Response<Body>) -> Value {
    let target = location(&resp);
    let cookie = flash_cookie(&resp);
    json(send(app, get(&target, cookie.as_deref())).await).await
}

pub fn student_form(name: &str, email: &str, course: &str, mobile: &str) -> String {
    format!(
        "name={}&email={}&course={}&mobile={}",
        encode(name),
        encode(email),
        encode(course),
        encode(mobile)
    )
}

fn encode(s: &str) -> String {
    s.bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => (b as char).to_string(),
            b' ' => "+".to_string(),
            _ => format!("%{:02X}", b),
        })
        .collect()
}
