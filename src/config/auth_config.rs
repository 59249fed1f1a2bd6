//! # Authentication Configuration Module
//!
//! JWT 서명 키, 토큰 만료 시간, 원격 인증 기관(Authority) 연결 정보 등
//! 토큰 발급/검증과 관련된 설정을 관리하는 모듈입니다.
//!
//! ## 검증 방식
//!
//! 1. **로컬 검증**: 서명 키(`JWT_SECRET`)를 보유한 인증 기관 자신이 토큰을 직접 검증
//! 2. **위임 검증**: 서명 키가 없는 다운스트림 서비스가 인증 기관의
//!    `/auth/validate` 엔드포인트에 검증을 위임
//!
//! ## 필수 환경 변수 설정
//!
//! ### JWT 토큰 설정
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_ACCESS_EXPIRATION_MINUTES="60"
//! export JWT_REFRESH_EXPIRATION_DAYS="7"
//! ```
//!
//! ### 원격 인증 기관 설정
//! ```bash
//! export AUTHORITY_BASE_URL="http://identity-service:8080"
//! export AUTHORITY_TIMEOUT_SECONDS="5"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use token_authority::config::{JwtConfig, AuthorityConfig};
//!
//! let secret = JwtConfig::secret()?;
//! let access_ttl = JwtConfig::access_token_ttl();
//! let base_url = AuthorityConfig::base_url();
//! ```

use std::env;
use std::time::Duration;

use crate::core::errors::AuthError;

/// JSON Web Token (JWT) 관련 설정을 관리하는 구조체
///
/// 토큰 서명 키와 액세스/리프레시 토큰의 유효 기간을 제공합니다.
///
/// ## 권장 설정값
///
/// - **액세스 토큰**: 분 ~ 1시간 단위 (기본 60분)
/// - **리프레시 토큰**: 일 단위 (기본 7일)
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명에 사용할 비밀키를 반환합니다.
    ///
    /// 기본값을 제공하지 않습니다. 서명 키 없이 토큰을 발급하거나 검증하는 것은
    /// 시작 시점의 치명적인 설정 오류입니다.
    ///
    /// # Errors
    ///
    /// * `AuthError::Configuration` - `JWT_SECRET`이 없거나 빈 문자열인 경우
    ///
    /// # 키 생성 예제
    ///
    /// ```bash
    /// openssl rand -base64 32
    /// ```
    pub fn secret() -> Result<String, AuthError> {
        match env::var("JWT_SECRET") {
            Ok(secret) if !secret.trim().is_empty() => Ok(secret),
            _ => Err(AuthError::Configuration(
                "JWT_SECRET must be set".to_string(),
            )),
        }
    }

    /// JWT 액세스 토큰의 만료 시간을 분 단위로 반환합니다.
    ///
    /// # 기본값
    ///
    /// 60분
    pub fn access_expiration_minutes() -> u64 {
        env::var("JWT_ACCESS_EXPIRATION_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(60)
    }

    /// JWT 리프레시 토큰의 만료 시간을 일 단위로 반환합니다.
    ///
    /// # 기본값
    ///
    /// 7일
    ///
    /// # 보안 고려사항
    ///
    /// - 리프레시 토큰이 탈취되면 장기간 악용 가능
    /// - 리프레시 토큰에는 역할/권한을 담지 않음
    /// - 의심스러운 활동 감지 시 즉시 무효화
    pub fn refresh_expiration_days() -> u64 {
        env::var("JWT_REFRESH_EXPIRATION_DAYS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(7)
    }

    /// 액세스 토큰 TTL
    pub fn access_token_ttl() -> Duration {
        minutes_to_ttl(Self::access_expiration_minutes())
    }

    /// 리프레시 토큰 TTL
    pub fn refresh_token_ttl() -> Duration {
        days_to_ttl(Self::refresh_expiration_days())
    }
}

/// 환경 변수 값이 커도 넘치지 않도록 포화 곱셈을 사용
fn minutes_to_ttl(minutes: u64) -> Duration {
    Duration::from_secs(minutes.saturating_mul(60))
}

fn days_to_ttl(days: u64) -> Duration {
    Duration::from_secs(days.saturating_mul(24 * 3600))
}

/// 원격 인증 기관(Authority) 연결 설정
///
/// 서명 키를 보유하지 않은 서비스가 토큰 검증을 위임할 대상입니다.
/// 요청은 단 한 번만 시도되며 재시도 정책은 호출자의 몫입니다.
pub struct AuthorityConfig;

impl AuthorityConfig {
    /// 인증 기관의 기본 URL
    ///
    /// # 기본값
    ///
    /// `http://127.0.0.1:8080`
    pub fn base_url() -> String {
        env::var("AUTHORITY_BASE_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8080".to_string())
    }

    /// 검증 요청 타임아웃 (초)
    ///
    /// # 기본값
    ///
    /// 5초
    pub fn timeout_seconds() -> u64 {
        env::var("AUTHORITY_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|secs: &u64| *secs > 0)
            .unwrap_or(5)
    }

    pub fn timeout() -> Duration {
        Duration::from_secs(Self::timeout_seconds())
    }
}
