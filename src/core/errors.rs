//! # Token Authentication Error System
//!
//! 토큰 발급/검증 과정에서 발생하는 모든 실패를 분류하는 통합 에러 타입입니다.
//! `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를 구현하여
//! HTTP 응답으로 자동 변환됩니다.
//!
//! ## 실패 분류
//!
//! | AuthError | 재시도 | HTTP Status | 발생 위치 |
//! |-----------|--------|-------------|-----------|
//! | `Configuration` | - (시작 시점 치명적) | 500 | 서명 키 누락 |
//! | `MalformedToken` | 불가 | 401 | 로컬 검증 |
//! | `InvalidSignature` | 불가 | 401 | 로컬 검증 |
//! | `Expired` | 불가 | 401 | 로컬 검증 |
//! | `WrongTokenKind` | 불가 | 401 | 로컬 검증 / 갱신 |
//! | `Revoked` | 불가 | 401 | 리프레시 토큰 갱신 |
//! | `MissingCredential` | 불가 | 401 | Authorization 헤더 |
//! | `Unauthorized` | 불가 | 401 | 위임 검증 (자격 증명 거부) |
//! | `AuthorityUnavailable` | 가능 (백오프) | 503 | 위임 검증 (판단 불가) |
//! | `InvalidClaims` | 불가 | 400 | 발급 입력값 |
//! | `Forbidden` | 불가 | 403 | 역할 검사 |
//! | `Internal` | - | 500 | 예상치 못한 오류 |
//!
//! `Unauthorized`("이 자격 증명은 잘못되었다")와 `AuthorityUnavailable`
//! ("지금은 판단할 수 없다")은 절대 같은 응답으로 합쳐지지 않아야 합니다.

use actix_web::http::StatusCode;
use thiserror::Error;

use crate::domain::models::token::TokenKind;

/// 토큰 인증 에러 타입
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AuthError {
    /// 서명 키 누락 등 설정 오류
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// 세그먼트 수, base64url 인코딩, 페이로드 형식 위반
    #[error("Malformed token: {0}")]
    MalformedToken(String),

    /// MAC 불일치 (변조되었거나 다른 키로 서명됨)
    #[error("Invalid token signature")]
    InvalidSignature,

    /// 만료된 토큰
    #[error("Token has expired")]
    Expired,

    /// 기대한 용도(access/refresh)와 다른 토큰
    #[error("Expected {expected} token but received {found} token")]
    WrongTokenKind { expected: TokenKind, found: TokenKind },

    /// 무효화된 리프레시 토큰
    #[error("Token has been revoked")]
    Revoked,

    /// Authorization 헤더 누락 또는 Bearer 형식 아님
    #[error("Missing bearer credential: {0}")]
    MissingCredential(String),

    /// 인증 기관이 자격 증명을 거부함
    #[error("{0}")]
    Unauthorized(String),

    /// 인증 기관에 도달할 수 없어 판단 불가
    #[error("{0}")]
    AuthorityUnavailable(String),

    /// 발급 입력값 오류 (빈 subject 등)
    #[error("Invalid claims: {0}")]
    InvalidClaims(String),

    /// 인증은 되었으나 필요한 역할이 없음
    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// 호출자가 백오프 후 재시도해도 되는 실패인지 여부
    ///
    /// 인증 기관 장애만 일시적인 실패로 간주합니다.
    pub fn is_retryable(&self) -> bool {
        matches!(self, AuthError::AuthorityUnavailable(_))
    }

    /// 응답 본문에 사용하는 기계 판독용 에러 코드
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::Configuration(_) => "configuration_error",
            AuthError::MalformedToken(_) => "malformed_token",
            AuthError::InvalidSignature => "invalid_signature",
            AuthError::Expired => "token_expired",
            AuthError::WrongTokenKind { .. } => "wrong_token_kind",
            AuthError::Revoked => "token_revoked",
            AuthError::MissingCredential(_) => "authentication_required",
            AuthError::Unauthorized(_) => "unauthorized",
            AuthError::AuthorityUnavailable(_) => "authority_unavailable",
            AuthError::InvalidClaims(_) => "invalid_claims",
            AuthError::Forbidden(_) => "insufficient_permissions",
            AuthError::Internal(_) => "internal_error",
        }
    }
}

impl actix_web::ResponseError for AuthError {
    fn status_code(&self) -> StatusCode {
        match self {
            AuthError::AuthorityUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AuthError::Configuration(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AuthError::Forbidden(_) => StatusCode::FORBIDDEN,
            AuthError::InvalidClaims(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::UNAUTHORIZED,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// ```json
    /// {
    ///   "error": "token_expired",
    ///   "message": "Token has expired"
    /// }
    /// ```
    ///
    /// 5xx 응답에는 내부 원인을 노출하지 않습니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let message = match self {
            AuthError::Configuration(_) | AuthError::Internal(_) => {
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        actix_web::HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.code(),
            "message": message
        }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AuthError>;
