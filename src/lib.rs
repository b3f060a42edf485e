pub mod config;
pub mod domain;
pub mod global;
pub mod shutdown;
pub mod state;
pub mod utils;

use axum::{
    http::{header, HeaderValue, Method},
    middleware,
    routing::{get, patch, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

pub use state::AppState;
use utils::error::AppError;

#[derive(OpenApi)]
#[openapi(
    paths(
        domain::health::handler::health_check,
        domain::auth::handler::login,
        domain::auth::handler::logout,
        domain::owner::handler::get_profile,
        domain::restaurant::handler::create_restaurant,
        domain::restaurant::handler::get_my_restaurant,
        domain::restaurant::handler::get_public_restaurant,
        domain::restaurant::handler::get_qr_image,
        domain::survey::handler::create_survey,
        domain::survey::handler::list_surveys,
        domain::survey::handler::get_survey,
        domain::survey::handler::update_survey,
        domain::survey::handler::delete_survey,
        domain::survey::handler::update_survey_status,
        domain::survey::handler::get_public_survey,
        domain::survey::handler::submit_response,
        domain::survey::handler::list_question_bank,
        domain::dashboard::handler::get_dashboard,
    ),
    components(
        schemas(
            domain::health::dto::HealthStatus,
            domain::health::dto::HealthState,
            domain::health::dto::DatabaseCheck,
            domain::owner::entity::owner::SocialType,
            domain::auth::dto::LoginRequest,
            domain::auth::dto::LoginResponse,
            domain::owner::dto::OwnerProfileResponse,
            domain::owner::dto::RestaurantSummary,
            domain::restaurant::dto::CreateRestaurantRequest,
            domain::restaurant::dto::RestaurantResponse,
            domain::restaurant::dto::PublicRestaurantResponse,
            domain::survey::entity::survey::SurveyStatus,
            domain::survey::entity::survey::SurveyType,
            domain::survey::entity::survey_response::Answer,
            domain::survey::dto::QuestionInput,
            domain::survey::dto::CreateSurveyRequest,
            domain::survey::dto::CreateSurveyResponse,
            domain::survey::dto::UpdateSurveyRequest,
            domain::survey::dto::SurveyListItem,
            domain::survey::dto::SurveyListResponse,
            domain::survey::dto::QuestionItem,
            domain::survey::dto::SurveyDetailResponse,
            domain::survey::dto::DeleteSurveyResponse,
            domain::survey::dto::UpdateSurveyStatusRequest,
            domain::survey::dto::UpdateSurveyStatusResponse,
            domain::survey::dto::PublicQuestionItem,
            domain::survey::dto::PublicSurveyResponse,
            domain::survey::dto::SubmitResponseRequest,
            domain::survey::dto::SubmitResponseResponse,
            domain::survey::dto::QuestionBankItem,
            domain::dashboard::dto::DashboardResponse,
            domain::dashboard::dto::DashboardSummary,
            domain::dashboard::dto::CategoryStat,
            domain::dashboard::dto::QuestionStat,
            domain::dashboard::dto::DailyStat,
            domain::dashboard::dto::TrendStat,
            utils::response::ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "헬스체크 API"),
        (name = "Auth", description = "소셜 로그인 API"),
        (name = "Owner", description = "점주 API"),
        (name = "Restaurant", description = "식당 API"),
        (name = "Survey", description = "설문 관리 API"),
        (name = "Public", description = "고객용 API (인증 불필요)"),
        (name = "Dashboard", description = "만족도 대시보드 API")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

fn cors_layer(allowed_origin: Option<&str>) -> CorsLayer {
    match allowed_origin.and_then(|o| HeaderValue::from_str(o).ok()) {
        // 쿠키 인증을 쓰려면 origin을 명시해야 함
        Some(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::PATCH,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
            .allow_credentials(true),
        None => CorsLayer::permissive(),
    }
}

async fn route_not_found() -> AppError {
    AppError::NotFound("존재하지 않는 API입니다.".to_string())
}

pub fn app(state: AppState) -> Router {
    let cors = cors_layer(state.config.cors_allowed_origin.as_deref());

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(domain::health::handler::health_check))
        // 인증
        .route("/api/v1/auth/login", post(domain::auth::handler::login))
        .route("/api/v1/auth/logout", post(domain::auth::handler::logout))
        // 점주 / 식당
        .route("/api/v1/owners/me", get(domain::owner::handler::get_profile))
        .route(
            "/api/v1/restaurants",
            post(domain::restaurant::handler::create_restaurant),
        )
        .route(
            "/api/v1/restaurants/me",
            get(domain::restaurant::handler::get_my_restaurant),
        )
        // 설문 관리
        .route(
            "/api/v1/question-bank",
            get(domain::survey::handler::list_question_bank),
        )
        .route(
            "/api/v1/surveys",
            post(domain::survey::handler::create_survey)
                .get(domain::survey::handler::list_surveys),
        )
        .route(
            "/api/v1/surveys/:survey_id",
            get(domain::survey::handler::get_survey)
                .put(domain::survey::handler::update_survey)
                .delete(domain::survey::handler::delete_survey),
        )
        .route(
            "/api/v1/surveys/:survey_id/status",
            patch(domain::survey::handler::update_survey_status),
        )
        .route(
            "/api/v1/dashboard",
            get(domain::dashboard::handler::get_dashboard),
        )
        // 고객용
        .route(
            "/api/v1/public/restaurants/:code",
            get(domain::restaurant::handler::get_public_restaurant),
        )
        .route(
            "/api/v1/public/restaurants/:code/qr.svg",
            get(domain::restaurant::handler::get_qr_image),
        )
        .route(
            "/api/v1/public/restaurants/:code/survey",
            get(domain::survey::handler::get_public_survey),
        )
        .route(
            "/api/v1/public/surveys/:survey_id/responses",
            post(domain::survey::handler::submit_response),
        )
        .fallback(route_not_found)
        .layer(middleware::from_fn(
            global::middleware::request_id_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
