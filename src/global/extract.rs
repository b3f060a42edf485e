use axum::{
    async_trait,
    extract::{FromRequestParts, Path, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::utils::error::AppError;

/// 경로 파라미터 Extractor
///
/// 파싱 실패 시 axum 기본 text 응답 대신 공통 에러 응답(COMMON400)을 반환합니다.
pub struct ApiPath<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await?;
        Ok(ApiPath(value))
    }
}

/// 쿼리 스트링 Extractor (실패 시 COMMON400)
pub struct ApiQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        Ok(ApiQuery(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::response::IntoResponse;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct PageQuery {
        page: Option<u64>,
    }

    fn parts(uri: &str) -> Parts {
        let (parts, _) = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap()
            .into_parts();
        parts
    }

    #[tokio::test]
    async fn should_extract_valid_query() {
        // Arrange
        let mut parts = parts("/surveys?page=3");

        // Act
        let ApiQuery(query) = ApiQuery::<PageQuery>::from_request_parts(&mut parts, &())
            .await
            .unwrap();

        // Assert
        assert_eq!(query.page, Some(3));
    }

    #[tokio::test]
    async fn should_map_query_rejection_to_bad_request() {
        // Arrange
        let mut parts = parts("/surveys?page=abc");

        // Act
        let err = ApiQuery::<PageQuery>::from_request_parts(&mut parts, &())
            .await
            .err()
            .unwrap();

        // Assert
        assert_eq!(err.error_code(), "COMMON400");
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
