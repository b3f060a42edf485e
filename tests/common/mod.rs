#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, Response, StatusCode},
    Router,
};
use chrono::{NaiveDate, NaiveDateTime};
use http_body_util::BodyExt;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tower::util::ServiceExt;

use tableside::config::AppConfig;
use tableside::domain::restaurant::entity::restaurant;
use tableside::domain::survey::entity::survey::{self, SurveyStatus, SurveyType};
use tableside::domain::survey::entity::survey_question;
use tableside::utils::jwt::encode_token;
use tableside::{app, AppState};

pub const OWNER_ID: i64 = 7;

/// DB 연결 없이 라우터 생성 (DB까지 가지 않는 경로 검증용)
pub fn router_without_db() -> Router {
    router_with_db(DatabaseConnection::Disconnected)
}

pub fn router_with_db(db: DatabaseConnection) -> Router {
    app(AppState {
        db: Arc::new(db),
        config: AppConfig::default(),
    })
}

pub fn owner_token() -> String {
    encode_token(OWNER_ID.to_string(), &AppConfig::default().jwt_secret, 3600).unwrap()
}

pub fn fixed_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

pub fn restaurant_model(code: &str) -> restaurant::Model {
    restaurant::Model {
        restaurant_id: 3,
        owner_id: OWNER_ID,
        name: "테이블사이드 강남점".to_string(),
        code: code.to_string(),
        qr_url: format!("http://localhost:8080/api/v1/public/restaurants/{}/qr.svg", code),
        created_at: fixed_time(),
        updated_at: fixed_time(),
    }
}

pub fn survey_model(survey_id: i64, status: SurveyStatus) -> survey::Model {
    survey::Model {
        survey_id,
        owner_id: OWNER_ID,
        restaurant_id: 3,
        title: "점심 만족도".to_string(),
        location: None,
        status,
        survey_type: SurveyType::Custom,
        created_at: fixed_time(),
        updated_at: fixed_time(),
    }
}

pub fn question_model(survey_id: i64, text: &str, order_index: i32) -> survey_question::Model {
    survey_question::Model {
        question_id: i64::from(order_index),
        survey_id,
        question: text.to_string(),
        option_left: "좋아요".to_string(),
        option_right: "별로예요".to_string(),
        category: "GENERAL".to_string(),
        order_index,
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn authed(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", owner_token()));
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn send(router: Router, request: Request<Body>) -> Response<Body> {
    router.oneshot(request).await.unwrap()
}

/// 요청을 보내고 (상태 코드, JSON 본문)을 반환
pub async fn send_json(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = send(router, request).await;
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}
