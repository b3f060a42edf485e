use axum_extra::extract::cookie::{Cookie, SameSite};

/// 쿠키 이름 상수
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// Access Token 쿠키 생성
pub fn access_token_cookie(token: String, max_age_seconds: i64) -> Cookie<'static> {
    Cookie::build((ACCESS_TOKEN_COOKIE, token))
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(time::Duration::seconds(max_age_seconds))
        .build()
}

/// Access Token 쿠키 삭제용 (만료 처리)
pub fn expired_access_token_cookie() -> Cookie<'static> {
    Cookie::build((ACCESS_TOKEN_COOKIE, ""))
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(time::Duration::ZERO)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_token_cookie_should_be_http_only() {
        let cookie = access_token_cookie("abc".to_string(), 60);
        let rendered = cookie.to_string();

        assert!(rendered.starts_with("access_token=abc"));
        assert!(rendered.contains("HttpOnly"));
        assert!(rendered.contains("Max-Age=60"));
    }

    #[test]
    fn expired_cookie_should_have_zero_max_age() {
        let rendered = expired_access_token_cookie().to_string();

        assert!(rendered.contains("Max-Age=0"));
        assert!(rendered.contains("Path=/"));
    }
}
