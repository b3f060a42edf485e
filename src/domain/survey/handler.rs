use axum::{
    extract::State,
    Json,
};

use super::dto::{
    CreateSurveyRequest, CreateSurveyResponse, DeleteSurveyResponse, PublicSurveyResponse,
    QuestionBankItem, QuestionBankQuery, SubmitResponseRequest, SubmitResponseResponse,
    SurveyDetailResponse, SurveyListQuery, SurveyListResponse, UpdateSurveyRequest,
    UpdateSurveyStatusRequest, UpdateSurveyStatusResponse,
};
use super::service::SurveyService;
use crate::global::extract::{ApiPath, ApiQuery};
use crate::global::validator::ValidatedJson;
use crate::state::AppState;
use crate::utils::auth::AuthUser;
use crate::utils::error::AppError;
use crate::utils::BaseResponse;

fn validate_survey_id(survey_id: i64) -> Result<(), AppError> {
    if survey_id < 1 {
        return Err(AppError::BadRequest(
            "surveyId는 1 이상의 양수여야 합니다.".to_string(),
        ));
    }
    Ok(())
}

/// 설문 생성 API
///
/// CUSTOM 설문은 1~8개의 질문을 직접 구성하고, OPERATIONAL 설문은 고정 8문항을 사용합니다.
#[utoipa::path(
    post,
    path = "/api/v1/surveys",
    request_body = CreateSurveyRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "설문 생성 성공", body = CreateSurveyResponse),
        (status = 400, description = "잘못된 요청 또는 질문 구성 오류", body = ErrorResponse),
        (status = 401, description = "인증 실패", body = ErrorResponse),
        (status = 404, description = "등록된 식당 없음", body = ErrorResponse)
    ),
    tag = "Survey"
)]
pub async fn create_survey(
    State(state): State<AppState>,
    user: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateSurveyRequest>,
) -> Result<Json<BaseResponse<CreateSurveyResponse>>, AppError> {
    let owner_id = user.owner_id()?;

    let result = SurveyService::create_survey(state, owner_id, req).await?;

    Ok(Json(BaseResponse::success_with_message(
        result,
        "설문이 생성되었습니다.",
    )))
}

/// 내 설문 목록 API
#[utoipa::path(
    get,
    path = "/api/v1/surveys",
    params(SurveyListQuery),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "조회 성공", body = SurveyListResponse),
        (status = 401, description = "인증 실패", body = ErrorResponse)
    ),
    tag = "Survey"
)]
pub async fn list_surveys(
    State(state): State<AppState>,
    user: AuthUser,
    ApiQuery(query): ApiQuery<SurveyListQuery>,
) -> Result<Json<BaseResponse<SurveyListResponse>>, AppError> {
    let owner_id = user.owner_id()?;

    let result = SurveyService::list_surveys(&state, owner_id, query).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 설문 상세 조회 API
#[utoipa::path(
    get,
    path = "/api/v1/surveys/{survey_id}",
    params(
        ("survey_id" = i64, Path, description = "설문 ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "조회 성공", body = SurveyDetailResponse),
        (status = 401, description = "인증 실패", body = ErrorResponse),
        (status = 404, description = "존재하지 않는 설문", body = ErrorResponse)
    ),
    tag = "Survey"
)]
pub async fn get_survey(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(survey_id): ApiPath<i64>,
) -> Result<Json<BaseResponse<SurveyDetailResponse>>, AppError> {
    validate_survey_id(survey_id)?;
    let owner_id = user.owner_id()?;

    let result = SurveyService::get_survey_detail(&state, owner_id, survey_id).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 설문 수정 API
///
/// DRAFT 상태의 설문만 수정할 수 있습니다. questions를 보내면 기존 질문 전체를 교체합니다.
#[utoipa::path(
    put,
    path = "/api/v1/surveys/{survey_id}",
    params(
        ("survey_id" = i64, Path, description = "설문 ID")
    ),
    request_body = UpdateSurveyRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "수정 성공", body = SurveyDetailResponse),
        (status = 400, description = "잘못된 요청", body = ErrorResponse),
        (status = 401, description = "인증 실패", body = ErrorResponse),
        (status = 404, description = "존재하지 않는 설문", body = ErrorResponse),
        (status = 409, description = "게시된 설문", body = ErrorResponse)
    ),
    tag = "Survey"
)]
pub async fn update_survey(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(survey_id): ApiPath<i64>,
    ValidatedJson(req): ValidatedJson<UpdateSurveyRequest>,
) -> Result<Json<BaseResponse<SurveyDetailResponse>>, AppError> {
    validate_survey_id(survey_id)?;
    let owner_id = user.owner_id()?;

    let result = SurveyService::update_survey(state, owner_id, survey_id, req).await?;

    Ok(Json(BaseResponse::success_with_message(
        result,
        "설문이 수정되었습니다.",
    )))
}

/// 설문 삭제 API
#[utoipa::path(
    delete,
    path = "/api/v1/surveys/{survey_id}",
    params(
        ("survey_id" = i64, Path, description = "설문 ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "삭제 성공", body = DeleteSurveyResponse),
        (status = 401, description = "인증 실패", body = ErrorResponse),
        (status = 404, description = "존재하지 않는 설문", body = ErrorResponse),
        (status = 409, description = "활성 설문은 삭제 불가", body = ErrorResponse)
    ),
    tag = "Survey"
)]
pub async fn delete_survey(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(survey_id): ApiPath<i64>,
) -> Result<Json<BaseResponse<DeleteSurveyResponse>>, AppError> {
    validate_survey_id(survey_id)?;
    let owner_id = user.owner_id()?;

    let result = SurveyService::delete_survey(state, owner_id, survey_id).await?;

    Ok(Json(BaseResponse::success_with_message(
        result,
        "설문이 삭제되었습니다.",
    )))
}

/// 설문 상태 변경 API
///
/// ACTIVE로 변경하면 같은 식당의 기존 활성 설문은 ACTIVE_READY로 전환됩니다.
#[utoipa::path(
    patch,
    path = "/api/v1/surveys/{survey_id}/status",
    params(
        ("survey_id" = i64, Path, description = "설문 ID")
    ),
    request_body = UpdateSurveyStatusRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "상태 변경 성공", body = UpdateSurveyStatusResponse),
        (status = 400, description = "질문 없는 설문 게시", body = ErrorResponse),
        (status = 401, description = "인증 실패", body = ErrorResponse),
        (status = 404, description = "존재하지 않는 설문", body = ErrorResponse),
        (status = 409, description = "허용되지 않는 상태 전이", body = ErrorResponse)
    ),
    tag = "Survey"
)]
pub async fn update_survey_status(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(survey_id): ApiPath<i64>,
    ValidatedJson(req): ValidatedJson<UpdateSurveyStatusRequest>,
) -> Result<Json<BaseResponse<UpdateSurveyStatusResponse>>, AppError> {
    validate_survey_id(survey_id)?;
    let owner_id = user.owner_id()?;

    let result = SurveyService::update_status(state, owner_id, survey_id, req.status).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 고객용 설문 조회 API
///
/// 식당 코드로 현재 응답을 받고 있는 설문을 조회합니다.
#[utoipa::path(
    get,
    path = "/api/v1/public/restaurants/{code}/survey",
    params(
        ("code" = String, Path, description = "식당 코드")
    ),
    responses(
        (status = 200, description = "조회 성공", body = PublicSurveyResponse),
        (status = 404, description = "식당 또는 활성 설문 없음", body = ErrorResponse)
    ),
    tag = "Public"
)]
pub async fn get_public_survey(
    State(state): State<AppState>,
    ApiPath(code): ApiPath<String>,
) -> Result<Json<BaseResponse<PublicSurveyResponse>>, AppError> {
    let result = SurveyService::get_public_survey(&state, &code).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 고객 응답 제출 API
#[utoipa::path(
    post,
    path = "/api/v1/public/surveys/{survey_id}/responses",
    params(
        ("survey_id" = i64, Path, description = "설문 ID")
    ),
    request_body = SubmitResponseRequest,
    responses(
        (status = 200, description = "제출 성공", body = SubmitResponseResponse),
        (status = 400, description = "답변 누락 또는 잘못된 질문", body = ErrorResponse),
        (status = 403, description = "응답을 받지 않는 설문", body = ErrorResponse),
        (status = 404, description = "존재하지 않는 설문", body = ErrorResponse)
    ),
    tag = "Public"
)]
pub async fn submit_response(
    State(state): State<AppState>,
    ApiPath(survey_id): ApiPath<i64>,
    ValidatedJson(req): ValidatedJson<SubmitResponseRequest>,
) -> Result<Json<BaseResponse<SubmitResponseResponse>>, AppError> {
    validate_survey_id(survey_id)?;

    let result = SurveyService::submit_response(state, survey_id, req).await?;

    Ok(Json(BaseResponse::success_with_message(
        result,
        "응답이 제출되었습니다. 감사합니다!",
    )))
}

/// 문항 은행 조회 API
#[utoipa::path(
    get,
    path = "/api/v1/question-bank",
    params(QuestionBankQuery),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "조회 성공", body = Vec<QuestionBankItem>),
        (status = 401, description = "인증 실패", body = ErrorResponse)
    ),
    tag = "Survey"
)]
pub async fn list_question_bank(
    State(state): State<AppState>,
    _user: AuthUser,
    ApiQuery(query): ApiQuery<QuestionBankQuery>,
) -> Result<Json<BaseResponse<Vec<QuestionBankItem>>>, AppError> {
    let result = SurveyService::list_question_bank(&state, query).await?;

    Ok(Json(BaseResponse::success(result)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_reject_non_positive_survey_id() {
        assert!(validate_survey_id(0).is_err());
        assert!(validate_survey_id(-5).is_err());
        assert!(validate_survey_id(1).is_ok());
    }
}
