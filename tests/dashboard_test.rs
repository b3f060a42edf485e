//! 대시보드 API 테스트
//!
//! - GET /api/v1/dashboard

mod common;

use axum::http::{Method, StatusCode};
use chrono::NaiveDate;
use sea_orm::{DatabaseBackend, MockDatabase};
use serde_json::json;

use common::{authed, get, question_model, router_with_db, router_without_db, send_json, survey_model};
use tableside::domain::survey::entity::survey::SurveyStatus;
use tableside::domain::survey::entity::survey_response;

#[tokio::test]
async fn dashboard_should_require_authentication() {
    let (status, json) = send_json(router_without_db(), get("/api/v1/dashboard")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["code"], "AUTH4001");
}

#[tokio::test]
async fn dashboard_should_reject_inverted_range() {
    // Act
    let (status, json) = send_json(
        router_without_db(),
        authed(
            Method::GET,
            "/api/v1/dashboard?surveyId=1&from=2026-03-10&to=2026-03-01",
            None,
        ),
    )
    .await;

    // Assert
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "DASHBOARD4001");
}

#[tokio::test]
async fn dashboard_should_reject_range_over_limit() {
    let (status, json) = send_json(
        router_without_db(),
        authed(
            Method::GET,
            "/api/v1/dashboard?from=2024-01-01&to=2025-06-01",
            None,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "DASHBOARD4001");
}

#[tokio::test]
async fn dashboard_should_reject_malformed_date() {
    let (status, json) = send_json(
        router_without_db(),
        authed(Method::GET, "/api/v1/dashboard?from=03-01-2026", None),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "DASHBOARD4001");
}

#[tokio::test]
async fn dashboard_should_reject_non_numeric_survey_id_with_envelope() {
    let (status, json) = send_json(
        router_without_db(),
        authed(Method::GET, "/api/v1/dashboard?surveyId=abc", None),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "COMMON400");
    assert_eq!(json["isSuccess"], false);
}

#[tokio::test]
async fn dashboard_should_reject_dates_outside_supported_years() {
    let (status, json) = send_json(
        router_without_db(),
        authed(
            Method::GET,
            "/api/v1/dashboard?from=-262143-01-01&to=-262143-01-01",
            None,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "DASHBOARD4001");
}

#[tokio::test]
async fn dashboard_should_aggregate_responses_in_range() {
    // Arrange
    let at = |d: u32, h: u32| {
        NaiveDate::from_ymd_opt(2026, 3, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    };
    let responses = vec![
        // 직전 기간 (2/27 ~ 2/28)
        survey_response::Model {
            response_id: 1,
            survey_id: 5,
            submitted_at: NaiveDate::from_ymd_opt(2026, 2, 28)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
            answers: json!({ "맛은 어땠나요?": "RIGHT", "친절했나요?": "RIGHT" }),
        },
        survey_response::Model {
            response_id: 2,
            survey_id: 5,
            submitted_at: at(1, 10),
            answers: json!({ "맛은 어땠나요?": "LEFT", "친절했나요?": "LEFT" }),
        },
        survey_response::Model {
            response_id: 3,
            survey_id: 5,
            submitted_at: at(2, 18),
            answers: json!({ "맛은 어땠나요?": "LEFT", "친절했나요?": "RIGHT" }),
        },
    ];
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_query_results([vec![survey_model(5, SurveyStatus::Active)]])
        .append_query_results([vec![
            question_model(5, "맛은 어땠나요?", 1),
            question_model(5, "친절했나요?", 2),
        ]])
        .append_query_results([responses])
        .into_connection();

    // Act
    let (status, json) = send_json(
        router_with_db(db),
        authed(
            Method::GET,
            "/api/v1/dashboard?surveyId=5&from=2026-03-01&to=2026-03-02",
            None,
        ),
    )
    .await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    let summary = &json["result"]["summary"];
    assert_eq!(json["result"]["surveyTitle"], "점심 만족도");
    assert_eq!(summary["totalResponses"], 2);
    assert_eq!(summary["overallSatisfaction"], 75.0);
    assert_eq!(summary["daily"].as_array().unwrap().len(), 2);
    assert_eq!(summary["byQuestion"][1]["leftPercentage"], 50.0);
    assert_eq!(summary["trend"]["previousResponses"], 1);
    assert_eq!(summary["trend"]["previousSatisfaction"], 0.0);
    assert_eq!(summary["trend"]["responseDelta"], 1);
    assert_eq!(summary["trend"]["satisfactionDelta"], 75.0);
}
