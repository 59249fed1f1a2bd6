//! 로컬 JWT 토큰 검증
//!
//! 서명 키를 보유한 인증 기관이 네트워크 호출 없이 토큰을 검증합니다.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use crate::config::JwtConfig;
use crate::core::errors::{AppResult, AuthError};
use crate::domain::models::token::{Claims, TokenKind};

const SEGMENT_NAMES: [&str; 3] = ["header", "payload", "signature"];

/// 로컬 토큰 검증기
///
/// 검증 순서:
///
/// 1. 구조 검사: 정확히 3개의 base64url 세그먼트 → 위반 시 `MalformedToken`
/// 2. 서명 검사: `header.payload`에 대한 HMAC-SHA256 재계산 후 상수 시간 비교
///    → 불일치 시 `InvalidSignature`
/// 3. 페이로드 해석 후 `exp <= now`이면 `Expired`
///
/// 검증은 `(token, secret, now)`의 순수 함수이므로 공유 상태 없이
/// 여러 호출자가 동시에 사용할 수 있습니다.
pub struct LocalVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl LocalVerifier {
    /// # Errors
    ///
    /// * `AuthError::Configuration` - 비밀키가 비어 있는 경우
    pub fn new(secret: &str) -> AppResult<Self> {
        if secret.trim().is_empty() {
            return Err(AuthError::Configuration(
                "signing secret must not be empty".to_string(),
            ));
        }

        // 만료는 `exp <= now` 규칙으로 직접 판단하므로 라이브러리 검사는 끔
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.leeway = 0;
        validation.required_spec_claims.clear();

        Ok(Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        })
    }

    pub fn from_config() -> AppResult<Self> {
        Self::new(&JwtConfig::secret()?)
    }

    /// 현재 시각 기준으로 토큰을 검증하고 클레임을 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AuthError::MalformedToken` - 세그먼트 수/인코딩/페이로드 형식 위반
    /// * `AuthError::InvalidSignature` - 서명 불일치 또는 다른 알고리즘
    /// * `AuthError::Expired` - 만료된 토큰
    pub fn verify(&self, token: &str) -> AppResult<Claims> {
        self.verify_at(token, Utc::now().timestamp())
    }

    /// 주어진 시각(Unix timestamp) 기준으로 토큰을 검증합니다.
    pub fn verify_at(&self, token: &str, now: i64) -> AppResult<Claims> {
        check_structure(token)?;

        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                    AuthError::InvalidSignature
                }
                _ => AuthError::MalformedToken(format!("토큰 해석 실패: {}", e)),
            })?;

        if claims.is_expired_at(now) {
            return Err(AuthError::Expired);
        }

        Ok(claims)
    }

    /// 액세스 토큰만 허용하는 검증
    ///
    /// Bearer 자격 증명으로는 리프레시 토큰을 받지 않습니다.
    pub fn verify_access(&self, token: &str) -> AppResult<Claims> {
        let claims = self.verify(token)?;

        if claims.token_kind != TokenKind::Access {
            return Err(AuthError::WrongTokenKind {
                expected: TokenKind::Access,
                found: claims.token_kind,
            });
        }

        Ok(claims)
    }

    /// 리프레시 토큰만 허용하는 검증
    pub fn verify_refresh(&self, token: &str) -> AppResult<Claims> {
        let claims = self.verify(token)?;

        if claims.token_kind != TokenKind::Refresh {
            return Err(AuthError::WrongTokenKind {
                expected: TokenKind::Refresh,
                found: claims.token_kind,
            });
        }

        Ok(claims)
    }
}

/// 세 개의 비어 있지 않은 base64url(패딩 없음) 세그먼트인지 확인
fn check_structure(token: &str) -> AppResult<()> {
    let segments: Vec<&str> = token.split('.').collect();

    if segments.len() != SEGMENT_NAMES.len() {
        return Err(AuthError::MalformedToken(format!(
            "expected 3 segments, found {}",
            segments.len()
        )));
    }

    for (name, segment) in SEGMENT_NAMES.iter().zip(segments) {
        if segment.is_empty() {
            return Err(AuthError::MalformedToken(format!("{} segment is empty", name)));
        }
        URL_SAFE_NO_PAD.decode(segment).map_err(|_| {
            AuthError::MalformedToken(format!("{} segment is not valid base64url", name))
        })?;
    }

    Ok(())
}
