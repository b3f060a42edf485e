use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct DashboardQuery {
    /// 미지정 시 현재 활성 설문
    pub survey_id: Option<i64>,
    /// 시작일 (YYYY-MM-DD, 미지정 시 종료일 6일 전)
    pub from: Option<String>,
    /// 종료일 (YYYY-MM-DD, 미지정 시 오늘)
    pub to: Option<String>,
}

/// 카테고리별 만족도
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStat {
    pub category: String,
    pub left_count: u64,
    pub right_count: u64,
    /// LEFT 비율 (%), 응답이 없으면 null
    pub satisfaction: Option<f64>,
}

/// 질문별 응답 분포
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionStat {
    pub question: String,
    pub option_left: String,
    pub option_right: String,
    pub category: String,
    pub left_count: u64,
    pub right_count: u64,
    pub left_percentage: Option<f64>,
}

/// 일자별 응답 수와 만족도
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DailyStat {
    #[schema(example = "2026-03-01")]
    pub date: String,
    pub response_count: u64,
    pub satisfaction: Option<f64>,
}

/// 직전 동일 기간 대비 변화
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrendStat {
    pub previous_from: String,
    pub previous_to: String,
    pub previous_responses: u64,
    pub previous_satisfaction: Option<f64>,
    pub response_delta: i64,
    /// 만족도 변화 (%p), 어느 한쪽이라도 데이터가 없으면 null
    pub satisfaction_delta: Option<f64>,
}

/// 집계 결과
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub from: String,
    pub to: String,
    pub total_responses: u64,
    pub overall_satisfaction: Option<f64>,
    pub by_category: Vec<CategoryStat>,
    pub by_question: Vec<QuestionStat>,
    pub daily: Vec<DailyStat>,
    pub trend: TrendStat,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub survey_id: i64,
    pub survey_title: String,
    pub summary: DashboardSummary,
}
