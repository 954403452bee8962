//! Route guard behaviour for page requests.

mod common;

use axum::http::{header, StatusCode};
use axum::response::Response;
use common::{body_text, get, get_with_cookie, session_set_cookie, signup, INDEX_HTML};
use sqlx::PgPool;

fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .expect("redirect must carry a Location header")
        .to_str()
        .unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn protected_page_without_session_redirects_to_login(pool: PgPool) {
    let app = common::build_test_app(pool);

    for path in ["/dashboard", "/income", "/expenses", "/budget", "/reports/monthly", "/profile"] {
        let response = get(app.router(), path).await;
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT, "{path}");
        assert_eq!(location(&response), "/login", "{path}");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn protected_page_with_session_is_served_without_touching_cookie(pool: PgPool) {
    let app = common::build_test_app(pool);
    let cookie = signup(app.router(), "pages@example.com").await;

    for path in ["/dashboard", "/reports/monthly", "/"] {
        let response = get_with_cookie(app.router(), path, &cookie).await;
        assert_eq!(response.status(), StatusCode::OK, "{path}");
        assert!(
            session_set_cookie(&response).is_none(),
            "{path}: the guard only decides, it never writes the cookie"
        );
        assert!(response.headers().get(header::SET_COOKIE).is_none(), "{path}");
        assert_eq!(body_text(response).await, INDEX_HTML);
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn redirect_for_signed_in_user_leaves_cookie_alone(pool: PgPool) {
    let app = common::build_test_app(pool);
    let cookie = signup(app.router(), "bounce@example.com").await;

    let response = get_with_cookie(app.router(), "/login", &cookie).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert!(response.headers().get(header::SET_COOKIE).is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn auth_pages_redirect_signed_in_users(pool: PgPool) {
    let app = common::build_test_app(pool);
    let cookie = signup(app.router(), "signedin@example.com").await;

    for path in ["/login", "/signup"] {
        let response = get_with_cookie(app.router(), path, &cookie).await;
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT, "{path}");
        assert_eq!(location(&response), "/dashboard");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn auth_and_public_pages_allowed_without_session(pool: PgPool) {
    let app = common::build_test_app(pool);

    for path in ["/login", "/signup", "/", "/about"] {
        let response = get(app.router(), path).await;
        assert_eq!(response.status(), StatusCode::OK, "{path}");
        assert!(session_set_cookie(&response).is_none());
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn prefix_match_stops_at_segment_boundary(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app.router(), "/dashboardx").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_cookie_counts_as_no_session(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get_with_cookie(app.router(), "/dashboard", "session=not-a-token").await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/login");

    let response = get_with_cookie(app.router(), "/login", "session=not-a-token").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn assets_and_api_bypass_the_guard(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app.router(), "/logo.png").await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(app.router(), "/api/v1/dashboard").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "API answers 401, never redirects");
}
