use chrono::{Duration, NaiveDate, Utc};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use tracing::debug;

use super::aggregate::{aggregate, local_date, DateRange, DATE_FORMAT};
use super::dto::{DashboardQuery, DashboardResponse};
use crate::domain::survey::entity::survey::{self, SurveyStatus};
use crate::domain::survey::entity::survey_response;
use crate::domain::survey::service::SurveyService;
use crate::state::AppState;
use crate::utils::error::AppError;

/// 기간 미지정 시 기본 조회 일수 (오늘 포함)
const DEFAULT_RANGE_DAYS: i64 = 7;

pub struct DashboardService;

impl DashboardService {
    pub async fn get_dashboard(
        state: &AppState,
        owner_id: i64,
        query: DashboardQuery,
    ) -> Result<DashboardResponse, AppError> {
        let offset = state.config.dashboard_utc_offset_hours;
        let today = local_date(Utc::now().naive_utc(), offset);
        let range = resolve_range(query.from.as_deref(), query.to.as_deref(), today)?;

        // 1. 대상 설문 결정
        let survey_model = match query.survey_id {
            Some(survey_id) => {
                SurveyService::find_survey_for_owner(state.db.as_ref(), owner_id, survey_id).await?
            }
            None => survey::Entity::find()
                .filter(survey::Column::OwnerId.eq(owner_id))
                .filter(survey::Column::Status.eq(SurveyStatus::Active))
                .one(state.db.as_ref())
                .await
                .map_err(|e| AppError::InternalError(e.to_string()))?
                .ok_or_else(|| {
                    AppError::SurveyNotFound(
                        "활성 설문이 없습니다. surveyId를 지정하세요.".to_string(),
                    )
                })?,
        };

        // 2. 질문 + 기간 내 응답 조회 (직전 기간 포함)
        let questions = SurveyService::load_questions(state.db.as_ref(), survey_model.survey_id).await?;
        let (start, end) = range.utc_window(offset);

        let responses = survey_response::Entity::find()
            .filter(survey_response::Column::SurveyId.eq(survey_model.survey_id))
            .filter(survey_response::Column::SubmittedAt.gte(start))
            .filter(survey_response::Column::SubmittedAt.lt(end))
            .order_by_asc(survey_response::Column::SubmittedAt)
            .all(state.db.as_ref())
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        debug!(
            survey_id = survey_model.survey_id,
            from = %range.from(),
            to = %range.to(),
            fetched = responses.len(),
            "Aggregating dashboard"
        );

        // 3. 집계
        let summary = aggregate(&questions, &responses, range, offset);

        Ok(DashboardResponse {
            survey_id: survey_model.survey_id,
            survey_title: survey_model.title,
            summary,
        })
    }
}

fn parse_date(raw: &str, field: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| {
        AppError::DashboardRangeInvalid(format!(
            "{}는 YYYY-MM-DD 형식이어야 합니다: {}",
            field, raw
        ))
    })
}

/// 조회 기간 결정: 종료일 기본값은 오늘, 시작일 기본값은 종료일 포함 7일
fn resolve_range(
    from: Option<&str>,
    to: Option<&str>,
    today: NaiveDate,
) -> Result<DateRange, AppError> {
    let to = match to {
        Some(raw) => parse_date(raw, "to")?,
        None => today,
    };
    let from = match from {
        Some(raw) => parse_date(raw, "from")?,
        None => to
            .checked_sub_signed(Duration::days(DEFAULT_RANGE_DAYS - 1))
            .ok_or_else(|| {
                AppError::DashboardRangeInvalid(format!("지원하지 않는 종료일입니다: {}", to))
            })?,
    };

    DateRange::new(from, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn should_default_to_last_seven_days() {
        // Act
        let range = resolve_range(None, None, date(2026, 3, 10)).unwrap();

        // Assert
        assert_eq!(range.from(), date(2026, 3, 4));
        assert_eq!(range.to(), date(2026, 3, 10));
    }

    #[test]
    fn should_default_from_relative_to_given_end() {
        let range = resolve_range(None, Some("2026-01-03"), date(2026, 3, 10)).unwrap();

        assert_eq!(range.from(), date(2025, 12, 28));
        assert_eq!(range.to(), date(2026, 1, 3));
    }

    #[test]
    fn should_use_explicit_dates() {
        let range = resolve_range(Some("2026-02-01"), Some("2026-02-28"), date(2026, 3, 10)).unwrap();

        assert_eq!(range.days(), 28);
    }

    #[test]
    fn should_fail_for_malformed_date() {
        // Act
        let result = resolve_range(Some("2026/02/01"), None, date(2026, 3, 10));

        // Assert
        if let Err(AppError::DashboardRangeInvalid(msg)) = result {
            assert!(msg.contains("from"));
        } else {
            panic!("Expected DashboardRangeInvalid error");
        }
    }

    #[test]
    fn should_fail_when_from_is_after_default_end() {
        let result = resolve_range(Some("2026-04-01"), None, date(2026, 3, 10));

        assert!(matches!(result, Err(AppError::DashboardRangeInvalid(_))));
    }

    #[test]
    fn should_fail_for_minimum_end_date_without_start() {
        // Arrange
        let min = NaiveDate::MIN.format(DATE_FORMAT).to_string();

        // Act
        let result = resolve_range(None, Some(&min), date(2026, 3, 10));

        // Assert
        assert!(matches!(result, Err(AppError::DashboardRangeInvalid(_))));
    }

    #[test]
    fn should_fail_for_extreme_year_instead_of_overflowing() {
        // Act
        let result = resolve_range(Some("-262143-01-01"), Some("-262143-01-01"), date(2026, 3, 10));

        // Assert
        assert!(matches!(result, Err(AppError::DashboardRangeInvalid(_))));
    }
}
