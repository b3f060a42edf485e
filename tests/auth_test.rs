//! 인증 / 점주 API 테스트
//!
//! - POST /api/v1/auth/login (요청 검증)
//! - POST /api/v1/auth/logout
//! - GET /api/v1/owners/me (인증 가드)

mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use sea_orm::{DatabaseBackend, MockDatabase};
use serde_json::json;

use common::{
    fixed_time, get, json_request, owner_token, restaurant_model, router_with_db,
    router_without_db, send, send_json, OWNER_ID,
};
use tableside::domain::owner::entity::owner::{self, SocialType};
use tableside::domain::restaurant::entity::restaurant;
use tableside::utils::jwt::encode_token;

fn owner_model() -> owner::Model {
    owner::Model {
        owner_id: OWNER_ID,
        email: "owner@example.com".to_string(),
        nickname: Some("owner".to_string()),
        social_type: SocialType::Kakao,
        created_at: fixed_time(),
        updated_at: fixed_time(),
    }
}

// ============== 로그인 / 로그아웃 ==============

#[tokio::test]
async fn login_should_fail_for_unknown_provider() {
    // Arrange
    let request = json_request(
        Method::POST,
        "/api/v1/auth/login",
        json!({ "provider": "NAVER", "accessToken": "token" }),
    );

    // Act
    let (status, json) = send_json(router_without_db(), request).await;

    // Assert
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["isSuccess"], false);
    assert_eq!(json["code"], "COMMON400");
}

#[tokio::test]
async fn login_should_fail_for_empty_access_token() {
    // Arrange
    let request = json_request(
        Method::POST,
        "/api/v1/auth/login",
        json!({ "provider": "KAKAO", "accessToken": "" }),
    );

    // Act
    let (status, json) = send_json(router_without_db(), request).await;

    // Assert
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "accessToken은 필수입니다");
}

#[tokio::test]
async fn logout_should_expire_access_token_cookie() {
    // Arrange
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/auth/logout")
        .body(Body::empty())
        .unwrap();

    // Act
    let response = send(router_without_db(), request).await;

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(cookie.starts_with("access_token="));
    assert!(cookie.contains("Max-Age=0"));
}

// ============== 인증 가드 ==============

#[tokio::test]
async fn protected_route_should_require_token() {
    // Act
    let (status, json) = send_json(router_without_db(), get("/api/v1/owners/me")).await;

    // Assert
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["code"], "AUTH4001");
    assert!(json["result"].is_null());
}

#[tokio::test]
async fn protected_route_should_reject_non_bearer_header() {
    // Arrange
    let request = Request::builder()
        .uri("/api/v1/owners/me")
        .header(header::AUTHORIZATION, format!("Token {}", owner_token()))
        .body(Body::empty())
        .unwrap();

    // Act
    let (status, json) = send_json(router_without_db(), request).await;

    // Assert
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["message"], "토큰 형식이 올바르지 않습니다.");
}

#[tokio::test]
async fn protected_route_should_reject_token_signed_with_other_secret() {
    // Arrange
    let forged = encode_token(OWNER_ID.to_string(), "another-secret", 3600).unwrap();
    let request = Request::builder()
        .uri("/api/v1/owners/me")
        .header(header::AUTHORIZATION, format!("Bearer {}", forged))
        .body(Body::empty())
        .unwrap();

    // Act
    let (status, json) = send_json(router_without_db(), request).await;

    // Assert
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["message"], "유효하지 않은 토큰입니다.");
}

#[tokio::test]
async fn profile_should_accept_cookie_token() {
    // Arrange
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_query_results([vec![owner_model()]])
        .append_query_results([vec![restaurant_model("ABC234")]])
        .into_connection();
    let request = Request::builder()
        .uri("/api/v1/owners/me")
        .header(header::COOKIE, format!("access_token={}", owner_token()))
        .body(Body::empty())
        .unwrap();

    // Act
    let (status, json) = send_json(router_with_db(db), request).await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["isSuccess"], true);
    assert_eq!(json["result"]["ownerId"], OWNER_ID);
    assert_eq!(json["result"]["socialType"], "KAKAO");
    assert_eq!(json["result"]["restaurant"]["code"], "ABC234");
}

#[tokio::test]
async fn profile_should_omit_restaurant_when_not_registered() {
    // Arrange
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_query_results([vec![owner_model()]])
        .append_query_results([Vec::<restaurant::Model>::new()])
        .into_connection();
    let request = Request::builder()
        .uri("/api/v1/owners/me")
        .header(header::AUTHORIZATION, format!("Bearer {}", owner_token()))
        .body(Body::empty())
        .unwrap();

    // Act
    let (status, json) = send_json(router_with_db(db), request).await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert!(json["result"]["restaurant"].is_null());
}

#[tokio::test]
async fn profile_should_return_404_for_deleted_owner() {
    // Arrange
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_query_results([Vec::<owner::Model>::new()])
        .into_connection();
    let request = Request::builder()
        .uri("/api/v1/owners/me")
        .header(header::AUTHORIZATION, format!("Bearer {}", owner_token()))
        .body(Body::empty())
        .unwrap();

    // Act
    let (status, json) = send_json(router_with_db(db), request).await;

    // Assert
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "OWNER4041");
}
