use std::collections::{HashMap, HashSet};

use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use tracing::info;

use super::dto::{
    CreateSurveyRequest, CreateSurveyResponse, DeleteSurveyResponse, PublicQuestionItem,
    PublicSurveyResponse, QuestionBankItem, QuestionBankQuery, QuestionInput,
    SubmitResponseRequest, SubmitResponseResponse, SurveyDetailResponse, SurveyListItem,
    SurveyListQuery, SurveyListResponse, UpdateSurveyRequest, UpdateSurveyStatusResponse,
    MAX_QUESTIONS_PER_SURVEY,
};
use super::entity::question_bank;
use super::entity::survey::{self, SurveyStatus, SurveyType};
use super::entity::survey_question;
use super::entity::survey_response::{self, AnswerMap};
use super::operational::{operational_questions, DEFAULT_CATEGORY};
use crate::domain::restaurant::entity::restaurant;
use crate::domain::restaurant::service::RestaurantService;
use crate::state::AppState;
use crate::utils::error::AppError;

/// 저장 직전의 질문 (공백 정리 완료)
#[derive(Debug, Clone, PartialEq, Eq)]
struct NewQuestion {
    question: String,
    option_left: String,
    option_right: String,
    category: String,
}

pub struct SurveyService;

impl SurveyService {
    /// 설문 생성 (DRAFT)
    pub async fn create_survey(
        state: AppState,
        owner_id: i64,
        req: CreateSurveyRequest,
    ) -> Result<CreateSurveyResponse, AppError> {
        // 1. 질문 구성 검증
        let questions = Self::build_questions(req.survey_type, &req.questions)?;

        // 2. 점주 식당 확인
        let restaurant_model = RestaurantService::find_by_owner(state.db.as_ref(), owner_id).await?;

        // 3. 설문 + 질문 저장 (트랜잭션)
        let txn = state
            .db
            .begin()
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        let now = Utc::now().naive_utc();
        let created = survey::ActiveModel {
            owner_id: Set(owner_id),
            restaurant_id: Set(restaurant_model.restaurant_id),
            title: Set(req.title.trim().to_string()),
            location: Set(normalize_location(req.location)),
            status: Set(SurveyStatus::Draft),
            survey_type: Set(req.survey_type),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

        Self::insert_questions(&txn, created.survey_id, &questions).await?;

        txn.commit()
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        info!(
            survey_id = created.survey_id,
            owner_id,
            question_count = questions.len(),
            "Survey created"
        );

        Ok(CreateSurveyResponse {
            survey_id: created.survey_id,
            title: created.title,
            status: created.status,
            survey_type: created.survey_type,
            question_count: questions.len(),
        })
    }

    /// 내 설문 목록 (최신순, 페이지네이션)
    pub async fn list_surveys(
        state: &AppState,
        owner_id: i64,
        query: SurveyListQuery,
    ) -> Result<SurveyListResponse, AppError> {
        let (page, size) = query.normalized();

        let mut select = survey::Entity::find().filter(survey::Column::OwnerId.eq(owner_id));
        if let Some(status) = query.status {
            select = select.filter(survey::Column::Status.eq(status));
        }

        let paginator = select
            .order_by_desc(survey::Column::CreatedAt)
            .order_by_desc(survey::Column::SurveyId)
            .paginate(state.db.as_ref(), size);

        let totals = paginator
            .num_items_and_pages()
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        let surveys = paginator
            .fetch_page(page)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        let ids: Vec<i64> = surveys.iter().map(|s| s.survey_id).collect();
        let counts = Self::count_responses(state.db.as_ref(), ids).await?;

        let items = surveys
            .into_iter()
            .map(|s| {
                let count = counts.get(&s.survey_id).copied().unwrap_or(0);
                SurveyListItem::from_model(s, count)
            })
            .collect();

        Ok(SurveyListResponse {
            surveys: items,
            page: page + 1,
            size,
            total_count: totals.number_of_items,
            total_pages: totals.number_of_pages,
        })
    }

    async fn count_responses(
        db: &DatabaseConnection,
        survey_ids: Vec<i64>,
    ) -> Result<HashMap<i64, i64>, AppError> {
        if survey_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(i64, i64)> = survey_response::Entity::find()
            .select_only()
            .column(survey_response::Column::SurveyId)
            .column_as(
                Expr::col(survey_response::Column::ResponseId).count(),
                "response_count",
            )
            .filter(survey_response::Column::SurveyId.is_in(survey_ids))
            .group_by(survey_response::Column::SurveyId)
            .into_tuple()
            .all(db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        Ok(rows.into_iter().collect())
    }

    /// 설문 상세 조회
    pub async fn get_survey_detail(
        state: &AppState,
        owner_id: i64,
        survey_id: i64,
    ) -> Result<SurveyDetailResponse, AppError> {
        let survey_model = Self::find_survey_for_owner(state.db.as_ref(), owner_id, survey_id).await?;
        let questions = Self::load_questions(state.db.as_ref(), survey_id).await?;

        let response_count = survey_response::Entity::find()
            .filter(survey_response::Column::SurveyId.eq(survey_id))
            .count(state.db.as_ref())
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        Ok(SurveyDetailResponse::from_parts(
            survey_model,
            questions,
            response_count,
        ))
    }

    /// 설문 수정 (DRAFT 상태에서만 가능)
    pub async fn update_survey(
        state: AppState,
        owner_id: i64,
        survey_id: i64,
        req: UpdateSurveyRequest,
    ) -> Result<SurveyDetailResponse, AppError> {
        let survey_model = Self::find_survey_for_owner(state.db.as_ref(), owner_id, survey_id).await?;

        if survey_model.status != SurveyStatus::Draft {
            return Err(AppError::SurveyNotEditable(
                "게시된 설문은 수정할 수 없습니다.".to_string(),
            ));
        }

        let replacement = match &req.questions {
            Some(inputs) => {
                if survey_model.survey_type == SurveyType::Operational {
                    return Err(AppError::SurveyQuestionsInvalid(
                        "운영 설문의 질문은 변경할 수 없습니다.".to_string(),
                    ));
                }
                Some(Self::build_questions(SurveyType::Custom, inputs)?)
            }
            None => None,
        };

        let txn = state
            .db
            .begin()
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        let mut active: survey::ActiveModel = survey_model.into();
        active.title = Set(req.title.trim().to_string());
        active.location = Set(normalize_location(req.location));
        active.updated_at = Set(Utc::now().naive_utc());
        active
            .update(&txn)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        if let Some(questions) = &replacement {
            survey_question::Entity::delete_many()
                .filter(survey_question::Column::SurveyId.eq(survey_id))
                .exec(&txn)
                .await
                .map_err(|e| AppError::InternalError(e.to_string()))?;

            Self::insert_questions(&txn, survey_id, questions).await?;
        }

        txn.commit()
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        info!(survey_id, owner_id, "Survey updated");

        Self::get_survey_detail(&state, owner_id, survey_id).await
    }

    /// 설문 삭제 (질문, 응답 포함)
    ///
    /// 응답을 받고 있는 ACTIVE 설문은 삭제할 수 없습니다.
    pub async fn delete_survey(
        state: AppState,
        owner_id: i64,
        survey_id: i64,
    ) -> Result<DeleteSurveyResponse, AppError> {
        let survey_model = Self::find_survey_for_owner(state.db.as_ref(), owner_id, survey_id).await?;

        if survey_model.status == SurveyStatus::Active {
            return Err(AppError::SurveyNotEditable(
                "응답을 받고 있는 설문은 삭제할 수 없습니다. 먼저 비활성화하세요.".to_string(),
            ));
        }

        let txn = state
            .db
            .begin()
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        let deleted_responses = survey_response::Entity::delete_many()
            .filter(survey_response::Column::SurveyId.eq(survey_id))
            .exec(&txn)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        survey_question::Entity::delete_many()
            .filter(survey_question::Column::SurveyId.eq(survey_id))
            .exec(&txn)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        survey::Entity::delete_by_id(survey_id)
            .exec(&txn)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        info!(
            survey_id,
            owner_id,
            deleted_responses = deleted_responses.rows_affected,
            "Survey deleted"
        );

        Ok(DeleteSurveyResponse {
            survey_id,
            deleted_response_count: deleted_responses.rows_affected,
        })
    }

    /// 설문 상태 변경
    ///
    /// ACTIVE 전환 시 같은 식당의 기존 활성 설문을 같은 트랜잭션에서 ACTIVE_READY로 내립니다.
    pub async fn update_status(
        state: AppState,
        owner_id: i64,
        survey_id: i64,
        target: SurveyStatus,
    ) -> Result<UpdateSurveyStatusResponse, AppError> {
        let survey_model = Self::find_survey_for_owner(state.db.as_ref(), owner_id, survey_id).await?;
        let previous = survey_model.status;

        if !previous.can_transition_to(target) {
            return Err(AppError::SurveyStatusConflict(format!(
                "{} 상태에서 {} 상태로 변경할 수 없습니다.",
                previous.as_str(),
                target.as_str()
            )));
        }

        let deactivated_survey_ids = match target {
            SurveyStatus::Active => Self::activate(&state, survey_model).await?,
            _ => {
                if previous == SurveyStatus::Draft {
                    let question_count = survey_question::Entity::find()
                        .filter(survey_question::Column::SurveyId.eq(survey_id))
                        .count(state.db.as_ref())
                        .await
                        .map_err(|e| AppError::InternalError(e.to_string()))?;

                    if question_count == 0 {
                        return Err(AppError::SurveyQuestionsInvalid(
                            "질문이 없는 설문은 게시할 수 없습니다.".to_string(),
                        ));
                    }
                }

                let mut active: survey::ActiveModel = survey_model.into();
                active.status = Set(target);
                active.updated_at = Set(Utc::now().naive_utc());
                active
                    .update(state.db.as_ref())
                    .await
                    .map_err(|e| AppError::InternalError(e.to_string()))?;

                Vec::new()
            }
        };

        info!(
            survey_id,
            owner_id,
            from = previous.as_str(),
            to = target.as_str(),
            deactivated = ?deactivated_survey_ids,
            "Survey status changed"
        );

        Ok(UpdateSurveyStatusResponse {
            survey_id,
            previous_status: previous,
            status: target,
            deactivated_survey_ids,
        })
    }

    /// 설문 활성화 (식당당 ACTIVE 1개 보장)
    async fn activate(state: &AppState, survey_model: survey::Model) -> Result<Vec<i64>, AppError> {
        let survey_id = survey_model.survey_id;
        let restaurant_id = survey_model.restaurant_id;

        let txn = state
            .db
            .begin()
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        // 같은 식당에 대한 동시 활성화 요청을 직렬화
        restaurant::Entity::find_by_id(restaurant_id)
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        let others: Vec<i64> = survey::Entity::find()
            .select_only()
            .column(survey::Column::SurveyId)
            .filter(survey::Column::RestaurantId.eq(restaurant_id))
            .filter(survey::Column::Status.eq(SurveyStatus::Active))
            .filter(survey::Column::SurveyId.ne(survey_id))
            .into_tuple()
            .all(&txn)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        let now = Utc::now().naive_utc();

        if !others.is_empty() {
            survey::Entity::update_many()
                .col_expr(
                    survey::Column::Status,
                    Expr::value(SurveyStatus::ActiveReady),
                )
                .col_expr(survey::Column::UpdatedAt, Expr::value(now))
                .filter(survey::Column::SurveyId.is_in(others.clone()))
                .exec(&txn)
                .await
                .map_err(|e| AppError::InternalError(e.to_string()))?;
        }

        let mut active: survey::ActiveModel = survey_model.into();
        active.status = Set(SurveyStatus::Active);
        active.updated_at = Set(now);
        active
            .update(&txn)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        Ok(others)
    }

    /// 고객용 설문 조회 (식당 코드 기준 현재 ACTIVE 설문)
    pub async fn get_public_survey(
        state: &AppState,
        code: &str,
    ) -> Result<PublicSurveyResponse, AppError> {
        let restaurant_model = RestaurantService::find_by_code(state.db.as_ref(), code).await?;

        let survey_model = survey::Entity::find()
            .filter(survey::Column::RestaurantId.eq(restaurant_model.restaurant_id))
            .filter(survey::Column::Status.eq(SurveyStatus::Active))
            .one(state.db.as_ref())
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?
            .ok_or_else(|| {
                AppError::SurveyNotFound("현재 진행 중인 설문이 없습니다.".to_string())
            })?;

        let questions = Self::load_questions(state.db.as_ref(), survey_model.survey_id).await?;

        Ok(PublicSurveyResponse {
            survey_id: survey_model.survey_id,
            restaurant_name: restaurant_model.name,
            title: survey_model.title,
            location: survey_model.location,
            questions: questions.into_iter().map(PublicQuestionItem::from).collect(),
        })
    }

    /// 고객 응답 제출
    pub async fn submit_response(
        state: AppState,
        survey_id: i64,
        req: SubmitResponseRequest,
    ) -> Result<SubmitResponseResponse, AppError> {
        // 1. 설문 확인
        let survey_model = survey::Entity::find_by_id(survey_id)
            .one(state.db.as_ref())
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?
            .ok_or_else(|| AppError::SurveyNotFound("존재하지 않는 설문입니다.".to_string()))?;

        if survey_model.status != SurveyStatus::Active {
            return Err(AppError::SurveyClosed(
                "현재 응답을 받지 않는 설문입니다.".to_string(),
            ));
        }

        // 2. 답변 검증 (모든 질문에 정확히 하나씩)
        let questions = Self::load_questions(state.db.as_ref(), survey_id).await?;
        let texts: Vec<&str> = questions.iter().map(|q| q.question.as_str()).collect();
        Self::validate_answers(&texts, &req.answers)?;

        // 3. 저장
        let answers = serde_json::to_value(&req.answers)
            .map_err(|e| AppError::InternalError(e.to_string()))?;
        let now = Utc::now().naive_utc();

        let created = survey_response::ActiveModel {
            survey_id: Set(survey_id),
            submitted_at: Set(now),
            answers: Set(answers),
            ..Default::default()
        }
        .insert(state.db.as_ref())
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

        info!(
            response_id = created.response_id,
            survey_id, "Survey response submitted"
        );

        Ok(SubmitResponseResponse::new(
            created.response_id,
            survey_id,
            created.submitted_at,
        ))
    }

    /// 문항 은행 조회
    pub async fn list_question_bank(
        state: &AppState,
        query: QuestionBankQuery,
    ) -> Result<Vec<QuestionBankItem>, AppError> {
        let mut select = question_bank::Entity::find();

        if let Some(category) = query.category.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
            select = select.filter(question_bank::Column::Category.eq(category.to_uppercase()));
        }

        let rows = select
            .order_by_asc(question_bank::Column::Category)
            .order_by_asc(question_bank::Column::QuestionBankId)
            .all(state.db.as_ref())
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        Ok(rows.into_iter().map(QuestionBankItem::from).collect())
    }

    /// 설문 조회 및 소유자 확인
    ///
    /// 타인의 설문 존재 여부를 노출하지 않도록 "없음"과 "권한 없음"을 같은 404로 처리
    pub async fn find_survey_for_owner(
        db: &DatabaseConnection,
        owner_id: i64,
        survey_id: i64,
    ) -> Result<survey::Model, AppError> {
        survey::Entity::find_by_id(survey_id)
            .one(db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?
            .filter(|s| s.owner_id == owner_id)
            .ok_or_else(|| {
                AppError::SurveyNotFound(
                    "존재하지 않는 설문이거나 접근 권한이 없습니다.".to_string(),
                )
            })
    }

    /// 설문 질문 (표시 순서대로)
    pub async fn load_questions(
        db: &DatabaseConnection,
        survey_id: i64,
    ) -> Result<Vec<survey_question::Model>, AppError> {
        survey_question::Entity::find()
            .filter(survey_question::Column::SurveyId.eq(survey_id))
            .order_by_asc(survey_question::Column::OrderIndex)
            .order_by_asc(survey_question::Column::QuestionId)
            .all(db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))
    }

    async fn insert_questions<C: ConnectionTrait>(
        conn: &C,
        survey_id: i64,
        questions: &[NewQuestion],
    ) -> Result<(), AppError> {
        let models = questions
            .iter()
            .enumerate()
            .map(|(idx, q)| survey_question::ActiveModel {
                survey_id: Set(survey_id),
                question: Set(q.question.clone()),
                option_left: Set(q.option_left.clone()),
                option_right: Set(q.option_right.clone()),
                category: Set(q.category.clone()),
                order_index: Set(idx as i32 + 1),
                ..Default::default()
            });

        survey_question::Entity::insert_many(models)
            .exec(conn)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        Ok(())
    }

    /// 설문 종류에 맞는 질문 목록 구성
    fn build_questions(
        survey_type: SurveyType,
        inputs: &[QuestionInput],
    ) -> Result<Vec<NewQuestion>, AppError> {
        match survey_type {
            SurveyType::Operational => {
                if !inputs.is_empty() {
                    return Err(AppError::SurveyQuestionsInvalid(
                        "운영 설문은 고정 문항을 사용하므로 질문을 지정할 수 없습니다.".to_string(),
                    ));
                }
                Ok(operational_questions()
                    .iter()
                    .map(|f| NewQuestion {
                        question: f.question.to_string(),
                        option_left: f.option_left.to_string(),
                        option_right: f.option_right.to_string(),
                        category: f.category.to_string(),
                    })
                    .collect())
            }
            SurveyType::Custom => {
                let questions: Vec<NewQuestion> = inputs
                    .iter()
                    .map(|input| NewQuestion {
                        question: input.question.trim().to_string(),
                        option_left: input.option_left.trim().to_string(),
                        option_right: input.option_right.trim().to_string(),
                        category: input
                            .category
                            .as_deref()
                            .map(str::trim)
                            .filter(|c| !c.is_empty())
                            .map(str::to_uppercase)
                            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
                    })
                    .collect();

                Self::validate_questions(&questions)?;
                Ok(questions)
            }
        }
    }

    fn validate_questions(questions: &[NewQuestion]) -> Result<(), AppError> {
        if questions.is_empty() || questions.len() > MAX_QUESTIONS_PER_SURVEY {
            return Err(AppError::SurveyQuestionsInvalid(format!(
                "질문은 1~{}개여야 합니다.",
                MAX_QUESTIONS_PER_SURVEY
            )));
        }

        let mut seen = HashSet::new();
        for q in questions {
            if q.question.is_empty() || q.option_left.is_empty() || q.option_right.is_empty() {
                return Err(AppError::SurveyQuestionsInvalid(
                    "질문과 선택지는 공백만으로 구성될 수 없습니다.".to_string(),
                ));
            }
            if q.option_left == q.option_right {
                return Err(AppError::SurveyQuestionsInvalid(format!(
                    "두 선택지가 같습니다: {}",
                    q.question
                )));
            }
            if !seen.insert(q.question.as_str()) {
                return Err(AppError::SurveyQuestionsInvalid(format!(
                    "중복된 질문이 있습니다: {}",
                    q.question
                )));
            }
        }

        Ok(())
    }

    /// 제출 답변 검증: 모든 질문에 답해야 하고 모르는 질문 키는 허용하지 않음
    fn validate_answers(question_texts: &[&str], answers: &AnswerMap) -> Result<(), AppError> {
        if let Some(unknown) = answers
            .keys()
            .find(|key| !question_texts.contains(&key.as_str()))
        {
            return Err(AppError::ResponseAnswersInvalid(format!(
                "설문에 없는 질문입니다: {}",
                unknown
            )));
        }

        let missing = question_texts
            .iter()
            .filter(|q| !answers.contains_key(**q))
            .count();
        if missing > 0 || answers.is_empty() {
            return Err(AppError::ResponseAnswersInvalid(format!(
                "모든 질문에 답변해야 합니다. (미응답 {}개)",
                missing
            )));
        }

        Ok(())
    }
}

fn normalize_location(location: Option<String>) -> Option<String> {
    location
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::survey::entity::survey_response::Answer;

    fn input(question: &str, left: &str, right: &str, category: Option<&str>) -> QuestionInput {
        QuestionInput {
            question: question.to_string(),
            option_left: left.to_string(),
            option_right: right.to_string(),
            category: category.map(str::to_string),
        }
    }

    // ===== 질문 구성 =====

    #[test]
    fn should_use_fixed_questions_for_operational_survey() {
        // Act
        let questions = SurveyService::build_questions(SurveyType::Operational, &[]).unwrap();

        // Assert
        assert_eq!(questions.len(), 8);
        assert_eq!(questions[0].category, "FOOD");
    }

    #[test]
    fn should_reject_custom_questions_on_operational_survey() {
        // Arrange
        let inputs = vec![input("맛은?", "좋음", "나쁨", None)];

        // Act
        let result = SurveyService::build_questions(SurveyType::Operational, &inputs);

        // Assert
        assert!(matches!(result, Err(AppError::SurveyQuestionsInvalid(_))));
    }

    #[test]
    fn should_trim_and_default_category_for_custom_questions() {
        // Arrange
        let inputs = vec![
            input("  맛은 어떠셨나요? ", " 좋음 ", "나쁨", None),
            input("주차는 편했나요?", "편함", "불편", Some(" parking ")),
        ];

        // Act
        let questions = SurveyService::build_questions(SurveyType::Custom, &inputs).unwrap();

        // Assert
        assert_eq!(questions[0].question, "맛은 어떠셨나요?");
        assert_eq!(questions[0].option_left, "좋음");
        assert_eq!(questions[0].category, DEFAULT_CATEGORY);
        assert_eq!(questions[1].category, "PARKING");
    }

    #[test]
    fn should_fail_when_custom_survey_has_no_questions() {
        let result = SurveyService::build_questions(SurveyType::Custom, &[]);

        assert!(matches!(result, Err(AppError::SurveyQuestionsInvalid(_))));
    }

    #[test]
    fn should_fail_when_custom_survey_exceeds_max_questions() {
        // Arrange
        let inputs: Vec<QuestionInput> = (1..=9)
            .map(|i| input(&format!("질문 {}", i), "예", "아니오", None))
            .collect();

        // Act
        let result = SurveyService::build_questions(SurveyType::Custom, &inputs);

        // Assert
        if let Err(AppError::SurveyQuestionsInvalid(msg)) = result {
            assert!(msg.contains("1~8"));
        } else {
            panic!("Expected SurveyQuestionsInvalid error");
        }
    }

    #[test]
    fn should_fail_for_duplicate_question_after_trim() {
        // Arrange
        let inputs = vec![
            input("맛은?", "좋음", "나쁨", None),
            input(" 맛은? ", "예", "아니오", None),
        ];

        // Act
        let result = SurveyService::build_questions(SurveyType::Custom, &inputs);

        // Assert
        if let Err(AppError::SurveyQuestionsInvalid(msg)) = result {
            assert!(msg.contains("중복"));
        } else {
            panic!("Expected SurveyQuestionsInvalid error");
        }
    }

    #[test]
    fn should_fail_when_options_are_identical() {
        let inputs = vec![input("맛은?", "좋음", "좋음", None)];

        let result = SurveyService::build_questions(SurveyType::Custom, &inputs);

        assert!(matches!(result, Err(AppError::SurveyQuestionsInvalid(_))));
    }

    #[test]
    fn should_fail_when_question_is_whitespace_only() {
        let inputs = vec![input("   ", "좋음", "나쁨", None)];

        let result = SurveyService::build_questions(SurveyType::Custom, &inputs);

        assert!(matches!(result, Err(AppError::SurveyQuestionsInvalid(_))));
    }

    // ===== 답변 검증 =====

    fn answers(pairs: &[(&str, Answer)]) -> AnswerMap {
        pairs
            .iter()
            .map(|(q, a)| (q.to_string(), *a))
            .collect()
    }

    #[test]
    fn should_pass_when_every_question_is_answered() {
        // Arrange
        let texts = ["맛", "서비스"];
        let map = answers(&[("맛", Answer::Left), ("서비스", Answer::Right)]);

        // Act
        let result = SurveyService::validate_answers(&texts, &map);

        // Assert
        assert!(result.is_ok());
    }

    #[test]
    fn should_fail_when_question_is_missing() {
        // Arrange
        let texts = ["맛", "서비스"];
        let map = answers(&[("맛", Answer::Left)]);

        // Act
        let result = SurveyService::validate_answers(&texts, &map);

        // Assert
        if let Err(AppError::ResponseAnswersInvalid(msg)) = result {
            assert!(msg.contains("미응답 1개"));
        } else {
            panic!("Expected ResponseAnswersInvalid error");
        }
    }

    #[test]
    fn should_fail_for_unknown_question_key() {
        // Arrange
        let texts = ["맛"];
        let map = answers(&[("맛", Answer::Left), ("가격", Answer::Right)]);

        // Act
        let result = SurveyService::validate_answers(&texts, &map);

        // Assert
        if let Err(AppError::ResponseAnswersInvalid(msg)) = result {
            assert!(msg.contains("가격"));
        } else {
            panic!("Expected ResponseAnswersInvalid error");
        }
    }

    #[test]
    fn should_fail_for_empty_answers() {
        let result = SurveyService::validate_answers(&["맛"], &AnswerMap::new());

        assert!(matches!(result, Err(AppError::ResponseAnswersInvalid(_))));
    }

    #[test]
    fn should_normalize_blank_location_to_none() {
        assert_eq!(normalize_location(Some("   ".to_string())), None);
        assert_eq!(
            normalize_location(Some(" 강남점 ".to_string())),
            Some("강남점".to_string())
        );
        assert_eq!(normalize_location(None), None);
    }
}
