use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;
use validator::{ValidationErrors, ValidationErrorsKind};

use super::response::ErrorResponse;

/// 애플리케이션 전역 에러 타입
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    Unauthorized(String),
    InternalError(String),
    ValidationError(String),
    JsonParseFailed(String),

    /// 소셜 제공자 토큰 검증 실패
    SocialAuthFailed(String),
    OwnerNotFound(String),
    RestaurantNotFound(String),
    RestaurantAlreadyExists(String),
    /// 설문이 없거나 본인 소유가 아닌 경우 (두 경우를 구분하지 않음)
    SurveyNotFound(String),
    SurveyQuestionsInvalid(String),
    SurveyStatusConflict(String),
    SurveyNotEditable(String),
    /// 활성 상태가 아닌 설문에 응답 제출
    SurveyClosed(String),
    ResponseAnswersInvalid(String),
    DashboardRangeInvalid(String),
}

impl AppError {
    /// 에러 메시지 반환
    ///
    /// 내부 에러의 상세 내용은 로그에만 남기고 클라이언트에는 노출하지 않습니다.
    pub fn message(&self) -> String {
        match self {
            AppError::InternalError(_) => "서버 내부 오류가 발생했습니다.".to_string(),
            AppError::JsonParseFailed(msg) => format!("잘못된 요청 형식입니다: {}", msg),
            AppError::BadRequest(msg)
            | AppError::NotFound(msg)
            | AppError::Unauthorized(msg)
            | AppError::ValidationError(msg)
            | AppError::SocialAuthFailed(msg)
            | AppError::OwnerNotFound(msg)
            | AppError::RestaurantNotFound(msg)
            | AppError::RestaurantAlreadyExists(msg)
            | AppError::SurveyNotFound(msg)
            | AppError::SurveyQuestionsInvalid(msg)
            | AppError::SurveyStatusConflict(msg)
            | AppError::SurveyNotEditable(msg)
            | AppError::SurveyClosed(msg)
            | AppError::ResponseAnswersInvalid(msg)
            | AppError::DashboardRangeInvalid(msg) => msg.clone(),
        }
    }

    /// 에러 코드 반환
    pub fn error_code(&self) -> String {
        match self {
            AppError::BadRequest(_) => "COMMON400",
            AppError::NotFound(_) => "COMMON404",
            AppError::Unauthorized(_) => "AUTH4001",
            AppError::InternalError(_) => "COMMON500",
            AppError::ValidationError(_) => "COMMON400",
            AppError::JsonParseFailed(_) => "COMMON400",
            AppError::SocialAuthFailed(_) => "AUTH4002",
            AppError::OwnerNotFound(_) => "OWNER4041",
            AppError::RestaurantNotFound(_) => "RESTAURANT4041",
            AppError::RestaurantAlreadyExists(_) => "RESTAURANT4091",
            AppError::SurveyNotFound(_) => "SURVEY4041",
            AppError::SurveyQuestionsInvalid(_) => "SURVEY4001",
            AppError::SurveyStatusConflict(_) => "SURVEY4091",
            AppError::SurveyNotEditable(_) => "SURVEY4092",
            AppError::SurveyClosed(_) => "SURVEY4031",
            AppError::ResponseAnswersInvalid(_) => "RESPONSE4001",
            AppError::DashboardRangeInvalid(_) => "DASHBOARD4001",
        }
        .to_string()
    }

    /// HTTP 상태 코드 반환
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_)
            | AppError::ValidationError(_)
            | AppError::JsonParseFailed(_)
            | AppError::SurveyQuestionsInvalid(_)
            | AppError::ResponseAnswersInvalid(_)
            | AppError::DashboardRangeInvalid(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) | AppError::SocialAuthFailed(_) => StatusCode::UNAUTHORIZED,
            AppError::SurveyClosed(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_)
            | AppError::OwnerNotFound(_)
            | AppError::RestaurantNotFound(_)
            | AppError::SurveyNotFound(_) => StatusCode::NOT_FOUND,
            AppError::RestaurantAlreadyExists(_)
            | AppError::SurveyStatusConflict(_)
            | AppError::SurveyNotEditable(_) => StatusCode::CONFLICT,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();
        let message = self.message();

        // 에러 로깅
        match &self {
            AppError::InternalError(detail) => {
                error!("Internal Server Error: {}", detail);
            }
            _ => {
                error!("Error [{}]: {}", error_code, message);
            }
        }

        let error_response = ErrorResponse::new(error_code, message);

        (status, Json(error_response)).into_response()
    }
}

/// JsonRejection을 AppError로 변환
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::JsonParseFailed(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(format!("잘못된 경로 값입니다: {}", rejection.body_text()))
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(format!("잘못된 쿼리 파라미터입니다: {}", rejection.body_text()))
    }
}

/// validator 검증 실패를 AppError로 변환 (첫 번째 메시지 사용)
impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let message = first_validation_message(&errors)
            .unwrap_or_else(|| "요청 값이 올바르지 않습니다.".to_string());
        AppError::ValidationError(message)
    }
}

fn first_validation_message(errors: &ValidationErrors) -> Option<String> {
    for kind in errors.errors().values() {
        let found = match kind {
            ValidationErrorsKind::Field(field_errors) => field_errors
                .iter()
                .find_map(|e| e.message.as_ref().map(|m| m.to_string())),
            ValidationErrorsKind::Struct(inner) => first_validation_message(inner),
            ValidationErrorsKind::List(items) => {
                items.values().find_map(|inner| first_validation_message(inner))
            }
        };
        if found.is_some() {
            return found;
        }
    }
    None
}

/// 편의 함수들
impl AppError {
    pub fn unauthorized(msg: impl Into<String>) -> Self {
        AppError::Unauthorized(msg.into())
    }

    pub fn internal_error(msg: impl Into<String>) -> Self {
        AppError::InternalError(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "이름은 필수입니다."))]
        name: String,
    }

    #[test]
    fn should_map_survey_errors_to_expected_status() {
        assert_eq!(
            AppError::SurveyNotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::SurveyStatusConflict("x".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::SurveyClosed("x".into()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::ResponseAnswersInvalid("x".into()).error_code(),
            "RESPONSE4001"
        );
    }

    #[test]
    fn should_hide_internal_error_detail() {
        // Arrange
        let err = AppError::InternalError("Connection refused (os error 111)".into());

        // Act
        let message = err.message();

        // Assert
        assert!(!message.contains("os error"));
        assert_eq!(err.error_code(), "COMMON500");
    }

    #[test]
    fn should_convert_validation_errors_with_field_message() {
        // Arrange
        let sample = Sample {
            name: String::new(),
        };

        // Act
        let err: AppError = sample.validate().unwrap_err().into();

        // Assert
        assert!(matches!(err, AppError::ValidationError(_)));
        assert_eq!(err.message(), "이름은 필수입니다.");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
