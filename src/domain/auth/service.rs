use reqwest::Client;

use super::dto::{LoginRequest, LoginResponse};
use crate::domain::owner::entity::owner::SocialType;
use crate::domain::owner::service::OwnerService;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::jwt::encode_token;

pub struct AuthService;

#[derive(Debug)]
struct SocialUserInfo {
    email: String,
}

impl AuthService {
    /// 소셜 로그인
    ///
    /// 제공자 토큰으로 이메일을 확인하고, 처음 로그인하는 점주는 자동 가입시킵니다.
    pub async fn login(state: AppState, req: LoginRequest) -> Result<LoginResponse, AppError> {
        // 1. 소셜 제공자로부터 유저 정보 가져오기
        let social_info = match req.provider {
            SocialType::Kakao => {
                Self::fetch_kakao_user_info(&state.config.kakao_userinfo_url, &req.access_token)
                    .await?
            }
            SocialType::Google => {
                Self::fetch_google_user_info(&state.config.google_userinfo_url, &req.access_token)
                    .await?
            }
        };

        // 2. 점주 조회 또는 생성
        let (owner, is_new_owner) =
            OwnerService::find_or_create(state.db.as_ref(), &social_info.email, req.provider).await?;

        // 3. Access Token 발급
        let access_token = encode_token(
            owner.owner_id.to_string(),
            &state.config.jwt_secret,
            state.config.jwt_expiration,
        )?;

        tracing::info!(owner_id = owner.owner_id, is_new_owner, "Owner signed in");

        Ok(LoginResponse {
            owner_id: owner.owner_id,
            email: owner.email,
            is_new_owner,
            access_token,
            expires_in: state.config.jwt_expiration,
        })
    }

    async fn fetch_kakao_user_info(url: &str, token: &str) -> Result<SocialUserInfo, AppError> {
        let json = Self::fetch_user_info(url, token, "Kakao").await?;

        let email = json["kakao_account"]["email"]
            .as_str()
            .ok_or_else(|| AppError::SocialAuthFailed("Kakao 이메일 정보가 없습니다.".into()))?
            .to_string();

        Ok(SocialUserInfo { email })
    }

    async fn fetch_google_user_info(url: &str, token: &str) -> Result<SocialUserInfo, AppError> {
        let json = Self::fetch_user_info(url, token, "Google").await?;

        let email = json["email"]
            .as_str()
            .ok_or_else(|| AppError::SocialAuthFailed("Google 이메일 정보가 없습니다.".into()))?
            .to_string();

        Ok(SocialUserInfo { email })
    }

    async fn fetch_user_info(
        url: &str,
        token: &str,
        provider: &str,
    ) -> Result<serde_json::Value, AppError> {
        let response = Client::new()
            .get(url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| AppError::InternalError(format!("{} API req failed: {}", provider, e)))?;

        if !response.status().is_success() {
            tracing::warn!(provider, status = %response.status(), "Social token rejected");
            return Err(AppError::SocialAuthFailed(
                "유효하지 않은 소셜 토큰입니다.".into(),
            ));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| AppError::InternalError(format!("{} API read failed: {}", provider, e)))?;

        parse_user_info(&body, provider)
    }
}

/// 제공자 응답 본문 파싱. 형식 오류는 클라이언트 요청 문제가 아니므로 내부 오류로 처리
fn parse_user_info(body: &[u8], provider: &str) -> Result<serde_json::Value, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        AppError::InternalError(format!("{} API returned invalid JSON: {}", provider, e))
    })
}
