use serde::Serialize;
use utoipa::ToSchema;

/// API 공통 응답 구조체
///
/// 형식:
/// ```json
/// {
///   "isSuccess": true,
///   "code": "COMMON200",
///   "message": "성공입니다.",
///   "result": { ... }
/// }
/// ```
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseResponse<T: Serialize> {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: Option<T>,
}

impl<T: Serialize> BaseResponse<T> {
    /// 성공 응답 생성
    pub fn success(result: T) -> Self {
        Self::success_with_message(result, "성공입니다.")
    }

    /// 메시지를 지정한 성공 응답 생성
    pub fn success_with_message(result: T, message: impl Into<String>) -> Self {
        Self {
            is_success: true,
            code: "COMMON200".to_string(),
            message: message.into(),
            result: Some(result),
        }
    }
}

/// 에러 응답 구조체
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: Option<()>,
}

impl ErrorResponse {
    /// 에러 응답 생성
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            is_success: false,
            code: code.into(),
            message: message.into(),
            result: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_response_should_serialize_in_camel_case() {
        let body = serde_json::to_value(BaseResponse::success(42)).unwrap();

        assert_eq!(body["isSuccess"], true);
        assert_eq!(body["code"], "COMMON200");
        assert_eq!(body["result"], 42);
    }

    #[test]
    fn error_response_should_have_null_result() {
        let body = serde_json::to_value(ErrorResponse::new("SURVEY4041", "없음")).unwrap();

        assert_eq!(body["isSuccess"], false);
        assert_eq!(body["code"], "SURVEY4041");
        assert!(body["result"].is_null());
    }
}
