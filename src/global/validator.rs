use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationError};

use crate::utils::error::AppError;

/// JSON 본문을 역직렬화한 뒤 `validator` 규칙까지 검사하는 Extractor
///
/// 파싱 실패와 검증 실패 모두 공통 에러 응답(COMMON400)으로 변환됩니다.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

/// 공백만으로 이루어진 문자열 거부 (`length` 검사는 trim 전 길이를 보므로 함께 사용)
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("공백만 입력할 수 없습니다.".into()));
    }
    Ok(())
}
