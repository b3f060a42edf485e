use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::entity::question_bank;
use super::entity::survey::{self, SurveyStatus, SurveyType};
use super::entity::survey_question;
use super::entity::survey_response::AnswerMap;
use crate::global::validator::not_blank;

/// 설문 최대 문항 수
pub const MAX_QUESTIONS_PER_SURVEY: usize = 8;

/// 목록 조회 기본/최대 페이지 크기
pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 50;
/// 요청 가능한 최대 페이지 번호 (오프셋 계산 오버플로 방지)
pub const MAX_PAGE: u64 = 10_000;

const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

// ============== 질문 입력 ==============

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionInput {
    #[validate(
        length(min = 1, max = 100, message = "질문은 1~100자여야 합니다."),
        custom(function = "not_blank", message = "질문은 1~100자여야 합니다.")
    )]
    pub question: String,

    /// 긍정 선택지
    #[validate(
        length(min = 1, max = 20, message = "선택지는 1~20자여야 합니다."),
        custom(function = "not_blank", message = "선택지는 1~20자여야 합니다.")
    )]
    pub option_left: String,

    /// 부정 선택지
    #[validate(
        length(min = 1, max = 20, message = "선택지는 1~20자여야 합니다."),
        custom(function = "not_blank", message = "선택지는 1~20자여야 합니다.")
    )]
    pub option_right: String,

    /// 대시보드 집계 카테고리 (미입력 시 GENERAL)
    #[validate(length(min = 1, max = 30, message = "카테고리는 1~30자여야 합니다."))]
    pub category: Option<String>,
}

// ============== 설문 생성 ==============

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSurveyRequest {
    #[validate(
        length(min = 1, max = 50, message = "설문 제목은 1~50자여야 합니다."),
        custom(function = "not_blank", message = "설문 제목은 1~50자여야 합니다.")
    )]
    pub title: String,

    #[validate(length(max = 100, message = "위치는 100자를 초과할 수 없습니다."))]
    pub location: Option<String>,

    pub survey_type: SurveyType,

    /// CUSTOM 설문의 질문 목록 (OPERATIONAL 설문은 비워야 함)
    #[serde(default)]
    #[validate(nested)]
    pub questions: Vec<QuestionInput>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSurveyResponse {
    pub survey_id: i64,
    pub title: String,
    pub status: SurveyStatus,
    pub survey_type: SurveyType,
    pub question_count: usize,
}

// ============== 설문 수정 ==============

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSurveyRequest {
    #[validate(
        length(min = 1, max = 50, message = "설문 제목은 1~50자여야 합니다."),
        custom(function = "not_blank", message = "설문 제목은 1~50자여야 합니다.")
    )]
    pub title: String,

    #[validate(length(max = 100, message = "위치는 100자를 초과할 수 없습니다."))]
    pub location: Option<String>,

    /// 전달 시 기존 질문 전체를 교체 (CUSTOM 설문만)
    #[validate(nested)]
    pub questions: Option<Vec<QuestionInput>>,
}

// ============== 설문 목록 ==============

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct SurveyListQuery {
    /// 상태 필터
    pub status: Option<SurveyStatus>,
    /// 1부터 시작 (최대 10000)
    pub page: Option<u64>,
    /// 기본 10, 최대 50
    pub size: Option<u64>,
}

impl SurveyListQuery {
    /// (0부터 시작하는 페이지 인덱스, 페이지 크기)
    pub fn normalized(&self) -> (u64, u64) {
        let page = self.page.unwrap_or(1).clamp(1, MAX_PAGE);
        let size = self
            .size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);
        (page - 1, size)
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SurveyListItem {
    pub survey_id: i64,
    pub title: String,
    pub location: Option<String>,
    pub status: SurveyStatus,
    pub survey_type: SurveyType,
    pub response_count: i64,
    pub created_at: String,
}

impl SurveyListItem {
    pub fn from_model(model: survey::Model, response_count: i64) -> Self {
        Self {
            survey_id: model.survey_id,
            title: model.title,
            location: model.location,
            status: model.status,
            survey_type: model.survey_type,
            response_count,
            created_at: model.created_at.format(DATETIME_FORMAT).to_string(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SurveyListResponse {
    pub surveys: Vec<SurveyListItem>,
    pub page: u64,
    pub size: u64,
    pub total_count: u64,
    pub total_pages: u64,
}

// ============== 설문 상세 ==============

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionItem {
    pub question_id: i64,
    pub question: String,
    pub option_left: String,
    pub option_right: String,
    pub category: String,
    pub order_index: i32,
}

impl From<survey_question::Model> for QuestionItem {
    fn from(model: survey_question::Model) -> Self {
        Self {
            question_id: model.question_id,
            question: model.question,
            option_left: model.option_left,
            option_right: model.option_right,
            category: model.category,
            order_index: model.order_index,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SurveyDetailResponse {
    pub survey_id: i64,
    pub title: String,
    pub location: Option<String>,
    pub status: SurveyStatus,
    pub survey_type: SurveyType,
    pub questions: Vec<QuestionItem>,
    pub response_count: u64,
    pub created_at: String,
    pub updated_at: String,
}

impl SurveyDetailResponse {
    pub fn from_parts(
        model: survey::Model,
        questions: Vec<survey_question::Model>,
        response_count: u64,
    ) -> Self {
        Self {
            survey_id: model.survey_id,
            title: model.title,
            location: model.location,
            status: model.status,
            survey_type: model.survey_type,
            questions: questions.into_iter().map(QuestionItem::from).collect(),
            response_count,
            created_at: model.created_at.format(DATETIME_FORMAT).to_string(),
            updated_at: model.updated_at.format(DATETIME_FORMAT).to_string(),
        }
    }
}

// ============== 설문 삭제 ==============

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteSurveyResponse {
    pub survey_id: i64,
    pub deleted_response_count: u64,
}

// ============== 상태 변경 ==============

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSurveyStatusRequest {
    /// 변경할 상태 (ACTIVE_READY 또는 ACTIVE)
    pub status: SurveyStatus,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSurveyStatusResponse {
    pub survey_id: i64,
    pub previous_status: SurveyStatus,
    pub status: SurveyStatus,
    /// 이번 활성화로 ACTIVE_READY가 된 기존 활성 설문
    pub deactivated_survey_ids: Vec<i64>,
}

// ============== 고객용 설문 / 응답 제출 ==============

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicQuestionItem {
    pub question: String,
    pub option_left: String,
    pub option_right: String,
}

impl From<survey_question::Model> for PublicQuestionItem {
    fn from(model: survey_question::Model) -> Self {
        Self {
            question: model.question,
            option_left: model.option_left,
            option_right: model.option_right,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicSurveyResponse {
    pub survey_id: i64,
    pub restaurant_name: String,
    pub title: String,
    pub location: Option<String>,
    pub questions: Vec<PublicQuestionItem>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponseRequest {
    /// 질문 텍스트 → LEFT / RIGHT
    pub answers: AnswerMap,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponseResponse {
    pub response_id: i64,
    pub survey_id: i64,
    pub submitted_at: String,
}

impl SubmitResponseResponse {
    pub fn new(response_id: i64, survey_id: i64, submitted_at: chrono::NaiveDateTime) -> Self {
        Self {
            response_id,
            survey_id,
            submitted_at: submitted_at.format(DATETIME_FORMAT).to_string(),
        }
    }
}

// ============== 문항 은행 ==============

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct QuestionBankQuery {
    /// 카테고리 필터 (대소문자 무시)
    pub category: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionBankItem {
    pub question_bank_id: i64,
    pub question: String,
    pub option_left: String,
    pub option_right: String,
    pub category: String,
}

impl From<question_bank::Model> for QuestionBankItem {
    fn from(model: question_bank::Model) -> Self {
        Self {
            question_bank_id: model.question_bank_id,
            question: model.question,
            option_left: model.option_left,
            option_right: model.option_right,
            category: model.category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: Option<u64>, size: Option<u64>) -> SurveyListQuery {
        SurveyListQuery {
            status: None,
            page,
            size,
        }
    }

    #[test]
    fn should_use_defaults_when_paging_is_missing() {
        assert_eq!(query(None, None).normalized(), (0, DEFAULT_PAGE_SIZE));
    }

    #[test]
    fn should_clamp_page_and_size() {
        assert_eq!(query(Some(0), Some(0)).normalized(), (0, 1));
        assert_eq!(query(Some(3), Some(500)).normalized(), (2, MAX_PAGE_SIZE));
    }

    #[test]
    fn should_cap_huge_page_so_offset_fits() {
        // Act
        let (page, size) = query(Some(u64::MAX), Some(MAX_PAGE_SIZE)).normalized();

        // Assert
        assert_eq!(page, MAX_PAGE - 1);
        assert!(page.checked_mul(size).is_some());
    }
}
