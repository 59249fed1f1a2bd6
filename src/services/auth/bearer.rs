//! Bearer 자격 증명 검증 인터페이스
//!
//! "Bearer 토큰을 검증한다"는 하나의 기능을 서명 키 보유 여부에 따라
//! 두 가지 구현으로 제공합니다.
//!
//! - [`LocalVerifier`] - 서명 키를 보유한 인증 기관
//! - [`RemoteVerifier`] - 인증 기관에 검증을 위임하는 다운스트림 서비스
//!
//! 호출하는 쪽(미들웨어, 핸들러)은 어느 구현인지 알 필요가 없습니다.
//!
//! ```rust,ignore
//! let verifier: Arc<dyn BearerVerifier> = if holds_secret {
//!     Arc::new(LocalVerifier::from_config()?)
//! } else {
//!     Arc::new(RemoteVerifier::from_config())
//! };
//! let user = verifier.verify_bearer(token).await?;
//! ```

use actix_web::http::header::{HeaderMap, AUTHORIZATION};
use async_trait::async_trait;

use crate::core::errors::{AppResult, AuthError};
use crate::domain::models::auth::AuthenticatedUser;
use crate::services::auth::remote_verifier::RemoteVerifier;
use crate::services::auth::token_verifier::LocalVerifier;

/// Bearer 자격 증명 검증기
#[async_trait]
pub trait BearerVerifier: Send + Sync {
    /// Bearer 토큰을 검증하고 정규화된 사용자 정보를 반환합니다.
    async fn verify_bearer(&self, token: &str) -> AppResult<AuthenticatedUser>;
}

#[async_trait]
impl BearerVerifier for LocalVerifier {
    async fn verify_bearer(&self, token: &str) -> AppResult<AuthenticatedUser> {
        self.verify_access(token)
            .map(AuthenticatedUser::from)
            .inspect_err(|e| log::debug!("로컬 토큰 검증 실패: {}", e))
    }
}

#[async_trait]
impl BearerVerifier for RemoteVerifier {
    async fn verify_bearer(&self, token: &str) -> AppResult<AuthenticatedUser> {
        self.verify_remote(token).await
    }
}

/// Bearer 토큰에서 실제 토큰 부분 추출
///
/// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을 추출합니다.
/// 스킴 이름은 대소문자를 구분하지 않습니다.
///
/// # Errors
///
/// * `AuthError::MissingCredential` - Bearer 형식이 아니거나 토큰이 비어 있음
///
/// # Examples
///
/// ```rust,ignore
/// let token = extract_bearer_token("Bearer eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")?;
/// ```
pub fn extract_bearer_token(auth_header: &str) -> AppResult<&str> {
    let (scheme, token) = auth_header
        .split_once(' ')
        .ok_or_else(|| AuthError::MissingCredential("유효하지 않은 인증 헤더 형식입니다".to_string()))?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AuthError::MissingCredential(
            "유효하지 않은 인증 헤더 형식입니다".to_string(),
        ));
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(AuthError::MissingCredential("토큰이 비어 있습니다".to_string()));
    }

    Ok(token)
}

/// 요청 헤더에서 Bearer 토큰을 추출합니다.
pub fn bearer_token_from_headers(headers: &HeaderMap) -> AppResult<&str> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AuthError::MissingCredential("Authorization 헤더가 없습니다".to_string()))?;

    extract_bearer_token(auth_header)
}
