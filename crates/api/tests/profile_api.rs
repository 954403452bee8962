//! Profile endpoints: name, password and avatar changes.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, get_with_cookie, post_json, put_json_with_cookie, session_cookie, signup,
    TEST_PASSWORD,
};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_profile_returns_account(pool: PgPool) {
    let app = common::build_test_app(pool);
    let cookie = signup(app.router(), "me@example.com").await;

    let response = get_with_cookie(app.router(), "/api/v1/profile", &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["email"], "me@example.com");
    assert_eq!(json["data"]["avatar"], serde_json::Value::Null);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_name_reissues_session(pool: PgPool) {
    let app = common::build_test_app(pool);
    let cookie = signup(app.router(), "rename@example.com").await;

    let body = json!({ "fullName": "  New Name  " });
    let response = put_json_with_cookie(app.router(), "/api/v1/profile", &cookie, body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let new_cookie = session_cookie(&response);
    assert_eq!(body_json(response).await["data"]["fullName"], "New Name");

    let response = get_with_cookie(app.router(), "/api/v1/auth/session", &new_cookie).await;
    assert_eq!(body_json(response).await["data"]["fullName"], "New Name");

    let body = json!({ "fullName": "" });
    let response = put_json_with_cookie(app.router(), "/api/v1/profile", &cookie, body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn change_password_flow(pool: PgPool) {
    let app = common::build_test_app(pool);
    let cookie = signup(app.router(), "pw@example.com").await;
    let uri = "/api/v1/profile/password";

    let wrong = json!({ "currentPassword": "not-it-at-all", "newPassword": "brand-new-pass" });
    let response = put_json_with_cookie(app.router(), uri, &cookie, wrong).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await["code"], "INVALID_CREDENTIALS");

    let short = json!({ "currentPassword": TEST_PASSWORD, "newPassword": "short" });
    let response = put_json_with_cookie(app.router(), uri, &cookie, short).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let ok = json!({ "currentPassword": TEST_PASSWORD, "newPassword": "brand-new-pass" });
    let response = put_json_with_cookie(app.router(), uri, &cookie, ok).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let old = json!({ "email": "pw@example.com", "password": TEST_PASSWORD });
    let response = post_json(app.router(), "/api/v1/auth/login", old).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let new = json!({ "email": "pw@example.com", "password": "brand-new-pass" });
    let response = post_json(app.router(), "/api/v1/auth/login", new).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_avatar(pool: PgPool) {
    let app = common::build_test_app(pool);
    let cookie = signup(app.router(), "face@example.com").await;

    let avatar = "data:image/png;base64,iVBORw0KGgo=";
    let body = json!({ "avatar": avatar });
    let response = put_json_with_cookie(app.router(), "/api/v1/profile/avatar", &cookie, body).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["avatar"], avatar);

    let body = json!({ "avatar": "  " });
    let response = put_json_with_cookie(app.router(), "/api/v1/profile/avatar", &cookie, body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
