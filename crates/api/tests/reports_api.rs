//! Aggregation endpoints: summary, per-category, monthly series, dashboard.

mod common;

use axum::http::StatusCode;
use chrono::Utc;
use common::{body_json, get_with_cookie, post_json_with_cookie, signup};
use fintrack_core::reporting::{month_window, MonthBucket};
use serde_json::json;
use sqlx::PgPool;

async fn category_id(app: axum::Router, cookie: &str, name: &str) -> i64 {
    let response = get_with_cookie(app, "/api/v1/categories", cookie).await;
    body_json(response).await["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["name"] == name)
        .and_then(|c| c["id"].as_i64())
        .unwrap()
}

async fn book(app: axum::Router, cookie: &str, category_id: i64, amount: f64, kind: &str) {
    let today = Utc::now().date_naive().format("%Y-%m-%d").to_string();
    let body = json!({
        "categoryId": category_id,
        "amount": amount,
        "date": today,
        "type": kind,
    });
    let response = post_json_with_cookie(app, "/api/v1/transactions", cookie, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

/// Food 100 + 250, Transport 50 (expenses); Salary 2000 (income).
async fn seed(app: &common::TestApp, cookie: &str) {
    let food = category_id(app.router(), cookie, "Food").await;
    let transport = category_id(app.router(), cookie, "Transport").await;
    let salary = category_id(app.router(), cookie, "Salary").await;

    book(app.router(), cookie, food, 100.0, "expense").await;
    book(app.router(), cookie, food, 250.0, "expense").await;
    book(app.router(), cookie, transport, 50.0, "expense").await;
    book(app.router(), cookie, salary, 2000.0, "income").await;
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn summary_is_zero_for_new_account(pool: PgPool) {
    let app = common::build_test_app(pool);
    let cookie = signup(app.router(), "empty@example.com").await;

    let response = get_with_cookie(app.router(), "/api/v1/reports/summary", &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(
        json["data"],
        json!({ "totalIncome": 0.0, "totalExpenses": 0.0, "balance": 0.0 })
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn summary_sums_by_type(pool: PgPool) {
    let app = common::build_test_app(pool);
    let cookie = signup(app.router(), "sum@example.com").await;
    seed(&app, &cookie).await;

    let response = get_with_cookie(app.router(), "/api/v1/reports/summary", &cookie).await;
    let json = body_json(response).await;
    assert_eq!(
        json["data"],
        json!({ "totalIncome": 2000.0, "totalExpenses": 400.0, "balance": 1600.0 })
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn by_category_omits_empty_categories(pool: PgPool) {
    let app = common::build_test_app(pool);
    let cookie = signup(app.router(), "group@example.com").await;
    seed(&app, &cookie).await;

    let response =
        get_with_cookie(app.router(), "/api/v1/reports/by-category?type=expense", &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(
        json["data"],
        json!([
            { "name": "Food", "value": 350.0, "color": "#F44336" },
            { "name": "Transport", "value": 50.0, "color": "#3F51B5" },
        ])
    );

    let response = get_with_cookie(app.router(), "/api/v1/reports/by-category", &cookie).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST, "type is required");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn monthly_series_ends_at_current_month(pool: PgPool) {
    let app = common::build_test_app(pool);
    let cookie = signup(app.router(), "monthly@example.com").await;
    seed(&app, &cookie).await;

    let response =
        get_with_cookie(app.router(), "/api/v1/reports/monthly?type=income", &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let series = json["data"].as_array().unwrap();

    let today = Utc::now().date_naive();
    let expected: Vec<String> = month_window(today, 6).iter().map(|m| m.label()).collect();
    let labels: Vec<String> = series
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(labels, expected);
    assert_eq!(labels.last().unwrap(), &MonthBucket::containing(today).label());

    let amounts: Vec<f64> = series.iter().map(|p| p["amount"].as_f64().unwrap()).collect();
    assert_eq!(amounts, vec![0.0, 0.0, 0.0, 0.0, 0.0, 2000.0]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn monthly_series_month_count_is_clamped(pool: PgPool) {
    let app = common::build_test_app(pool);
    let cookie = signup(app.router(), "clamp@example.com").await;

    let response = get_with_cookie(
        app.router(),
        "/api/v1/reports/monthly?type=expense&months=100",
        &cookie,
    )
    .await;
    assert_eq!(body_json(response).await["data"].as_array().unwrap().len(), 24);

    let response = get_with_cookie(
        app.router(),
        "/api/v1/reports/monthly?type=expense&months=0",
        &cookie,
    )
    .await;
    assert_eq!(body_json(response).await["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn reports_are_scoped_to_the_session_account(pool: PgPool) {
    let app = common::build_test_app(pool);
    let alice = signup(app.router(), "alice@example.com").await;
    let bob = signup(app.router(), "bob@example.com").await;
    seed(&app, &alice).await;

    let response = get_with_cookie(app.router(), "/api/v1/reports/summary", &bob).await;
    assert_eq!(body_json(response).await["data"]["totalExpenses"], 0.0);

    let response =
        get_with_cookie(app.router(), "/api/v1/reports/by-category?type=expense", &bob).await;
    assert!(body_json(response).await["data"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn dashboard_combines_sections(pool: PgPool) {
    let app = common::build_test_app(pool);
    let cookie = signup(app.router(), "dash@example.com").await;
    seed(&app, &cookie).await;

    let response = get_with_cookie(app.router(), "/api/v1/dashboard", &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let data = &json["data"];

    assert_eq!(data["summary"]["balance"], 1600.0);
    assert_eq!(data["recentTransactions"].as_array().unwrap().len(), 4);
    assert_eq!(data["monthlyIncome"].as_array().unwrap().len(), 6);
    assert_eq!(data["monthlyExpenses"].as_array().unwrap().len(), 6);
    assert_eq!(data["monthlyExpenses"][5]["amount"], 400.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn monthly_rejects_malformed_month_count(pool: PgPool) {
    let app = common::build_test_app(pool);
    let cookie = signup(app.router(), "badmonths@example.com").await;

    for months in ["abc", "-1", "2.5"] {
        let uri = format!("/api/v1/reports/monthly?type=income&months={months}");
        let response = get_with_cookie(app.router(), &uri, &cookie).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{months}");
        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR", "{months}");
        assert!(json["error"].as_str().unwrap().contains(months));
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn aggregates_degrade_to_empty_when_storage_fails(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let cookie = signup(app.router(), "outage@example.com").await;
    seed(&app, &cookie).await;

    pool.close().await;

    let response = get_with_cookie(app.router(), "/api/v1/reports/summary", &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["data"],
        json!({ "totalIncome": 0.0, "totalExpenses": 0.0, "balance": 0.0 })
    );

    let response =
        get_with_cookie(app.router(), "/api/v1/reports/by-category?type=expense", &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"], json!([]));

    let response =
        get_with_cookie(app.router(), "/api/v1/reports/monthly?type=income", &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let series = json["data"].as_array().unwrap();
    assert_eq!(series.len(), 6);
    assert!(series.iter().all(|p| p["amount"] == 0.0));

    let response = get_with_cookie(app.router(), "/api/v1/dashboard", &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["summary"]["balance"], 0.0);
    assert_eq!(data["recentTransactions"], json!([]));
    for key in ["monthlyIncome", "monthlyExpenses"] {
        let series = data[key].as_array().unwrap();
        assert_eq!(series.len(), 6, "{key}");
        assert!(series.iter().all(|p| p["amount"] == 0.0), "{key}");
    }
}
