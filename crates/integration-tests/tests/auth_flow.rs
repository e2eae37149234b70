//! End-to-end authentication flow tests.
//!
//! Require a running api server; see the crate docs for setup.

#![allow(clippy::unwrap_used)]

use ironrail_integration_tests::{TestContext, require_ctx};
use serde_json::{Value, json};

async fn register(
    ctx: &TestContext,
    name: &str,
    email: &str,
    password: &str,
) -> reqwest::Response {
    ctx.client
        .post(ctx.url("/register"))
        .json(&json!({ "name": name, "email": email, "password": password }))
        .send()
        .await
        .unwrap()
}

async fn login(ctx: &TestContext, email: &str, password: &str) -> reqwest::Response {
    ctx.client
        .post(ctx.url("/login"))
        .json(&json!({ "email": email, "password": password }))
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn health_endpoints_respond() {
    let ctx = require_ctx!();

    let resp = ctx.client.get(ctx.url("/health")).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    let resp = ctx
        .client
        .get(ctx.url("/health/ready"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn register_then_login_then_wrong_password() {
    let ctx = require_ctx!();
    let email = TestContext::unique_email("ada");

    // Register
    let resp = register(&ctx, "Ada", &email, "pw123456").await;
    assert_eq!(resp.status(), 201);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["email"], email.as_str());
    assert_eq!(body["role"], "customer");
    // The response never carries password material
    assert!(body.get("password").is_none());
    assert!(body.get("passwordHash").is_none());

    // Login with the right password
    let resp = login(&ctx, &email, "pw123456").await;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    let token = body["token"].as_str().unwrap();
    assert!(!token.is_empty());
    assert_eq!(body["user"]["email"], email.as_str());

    // Login with the wrong password
    let resp = login(&ctx, &email, "wrong-password").await;
    assert_eq!(resp.status(), 401);
}

#[tokio::test]
async fn duplicate_registration_conflicts() {
    let ctx = require_ctx!();
    let email = TestContext::unique_email("dup");

    let resp = register(&ctx, "First", &email, "pw123456").await;
    assert_eq!(resp.status(), 201);

    let resp = register(&ctx, "Second", &email, "pw123456").await;
    assert_eq!(resp.status(), 409);

    // Exactly one record: logging in yields the first account's name
    let resp = login(&ctx, &email, "pw123456").await;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["user"]["name"], "First");
}

#[tokio::test]
async fn unknown_email_and_wrong_password_are_indistinguishable() {
    let ctx = require_ctx!();
    let email = TestContext::unique_email("enum");

    register(&ctx, "Target", &email, "pw123456").await;

    let unknown = login(&ctx, &TestContext::unique_email("ghost"), "pw123456").await;
    let wrong = login(&ctx, &email, "not-the-password").await;

    assert_eq!(unknown.status(), 401);
    assert_eq!(wrong.status(), 401);

    // Same classified outcome, same body: no account enumeration
    let unknown_body: Value = unknown.json().await.unwrap();
    let wrong_body: Value = wrong.json().await.unwrap();
    assert_eq!(unknown_body, wrong_body);
}

#[tokio::test]
async fn registration_validates_fields() {
    let ctx = require_ctx!();

    // Missing password
    let resp = ctx
        .client
        .post(ctx.url("/register"))
        .json(&json!({ "name": "A", "email": TestContext::unique_email("v") }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    // Malformed email
    let resp = register(&ctx, "A", "not-an-email", "pw123456").await;
    assert_eq!(resp.status(), 400);

    // Short password
    let resp = register(&ctx, "A", &TestContext::unique_email("v"), "short").await;
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn me_returns_current_user() {
    let ctx = require_ctx!();
    let email = TestContext::unique_email("me");

    register(&ctx, "Me", &email, "pw123456").await;
    let body: Value = login(&ctx, &email, "pw123456").await.json().await.unwrap();
    let token = body["token"].as_str().unwrap();

    let resp = ctx
        .client
        .get(ctx.url("/me"))
        .bearer_auth(token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["email"], email.as_str());

    // No token
    let resp = ctx.client.get(ctx.url("/me")).send().await.unwrap();
    assert_eq!(resp.status(), 401);

    // Garbage token
    let resp = ctx
        .client
        .get(ctx.url("/me"))
        .bearer_auth("not.a.token")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);
}
