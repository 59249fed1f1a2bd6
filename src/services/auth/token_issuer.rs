//! JWT 토큰 발급 서비스 구현
//!
//! 인증된 주체(principal)에 대해 서명된 액세스/리프레시 토큰을 발급합니다.
//! 발급 경로는 비밀키와 시계 외에 어떤 상태도 읽거나 쓰지 않습니다.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use uuid::Uuid;

use crate::config::JwtConfig;
use crate::core::errors::{AppResult, AuthError};
use crate::domain::models::token::{Claims, TokenKind, TokenPair};
use crate::services::auth::revocation::RevocationStore;

/// JWT 토큰 발급 서비스
///
/// HMAC-SHA256 서명을 사용하여 `header.payload.signature` 형식의 토큰을 생성합니다.
/// 액세스 토큰(기본 60분)과 리프레시 토큰(기본 7일)을 지원합니다.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
    revocations: Option<Arc<dyn RevocationStore>>,
}

impl TokenIssuer {
    /// 비밀키와 TTL로 발급기를 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AuthError::Configuration` - 비밀키가 비어 있는 경우
    pub fn new(secret: &str, access_ttl: Duration, refresh_ttl: Duration) -> AppResult<Self> {
        if secret.trim().is_empty() {
            return Err(AuthError::Configuration(
                "signing secret must not be empty".to_string(),
            ));
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            access_ttl,
            refresh_ttl,
            revocations: None,
        })
    }

    /// 환경 변수 설정(`JwtConfig`)으로 발급기를 생성합니다.
    pub fn from_config() -> AppResult<Self> {
        Self::new(
            &JwtConfig::secret()?,
            JwtConfig::access_token_ttl(),
            JwtConfig::refresh_token_ttl(),
        )
    }

    /// 리프레시 토큰 갱신 시 참조할 무효화 저장소를 연결합니다.
    pub fn with_revocation_store(mut self, store: Arc<dyn RevocationStore>) -> Self {
        self.revocations = Some(store);
        self
    }

    pub fn access_ttl(&self) -> Duration {
        self.access_ttl
    }

    pub fn refresh_ttl(&self) -> Duration {
        self.refresh_ttl
    }

    /// 단일 토큰 발급
    ///
    /// `iat = now`, `exp = now + ttl`인 클레임을 만들고 서명합니다.
    /// TTL은 초 단위로 절삭되므로 1초 미만의 TTL은 즉시 만료된 토큰이 됩니다.
    ///
    /// # Arguments
    ///
    /// * `subject` - 토큰 주체 (사용자 ID, 비어 있으면 안 됨)
    /// * `roles`, `permissions` - 내용은 검사하지 않음 (권한 정책은 외부 관심사)
    /// * `organization_id` - 멀티 테넌트 범위
    /// * `kind` - 토큰 용도
    /// * `ttl` - 유효 기간
    ///
    /// # Errors
    ///
    /// * `AuthError::InvalidClaims` - 빈 subject
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let token = issuer.issue(
    ///     "user-1",
    ///     BTreeSet::from(["user".to_string()]),
    ///     BTreeSet::new(),
    ///     Some("org-1".to_string()),
    ///     TokenKind::Access,
    ///     Duration::from_secs(900),
    /// )?;
    /// ```
    pub fn issue(
        &self,
        subject: &str,
        roles: BTreeSet<String>,
        permissions: BTreeSet<String>,
        organization_id: Option<String>,
        kind: TokenKind,
        ttl: Duration,
    ) -> AppResult<String> {
        let claims = build_claims(
            subject,
            roles,
            permissions,
            organization_id,
            kind,
            ttl,
            Utc::now().timestamp(),
        )?;
        self.sign(&claims)
    }

    /// 토큰 쌍 생성 (액세스 + 리프레시)
    ///
    /// 리프레시 토큰에는 subject와 유효 기간만 담습니다. 유출되더라도
    /// 역할/권한 정보가 노출되지 않습니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let pair = issuer.issue_token_pair("user-1", roles, permissions, None)?;
    /// println!("Expires in: {} seconds", pair.expires_in);
    /// ```
    pub fn issue_token_pair(
        &self,
        subject: &str,
        roles: BTreeSet<String>,
        permissions: BTreeSet<String>,
        organization_id: Option<String>,
    ) -> AppResult<TokenPair> {
        let now = Utc::now().timestamp();

        let access = build_claims(
            subject,
            roles,
            permissions,
            organization_id,
            TokenKind::Access,
            self.access_ttl,
            now,
        )?;
        let refresh = build_claims(
            subject,
            BTreeSet::new(),
            BTreeSet::new(),
            None,
            TokenKind::Refresh,
            self.refresh_ttl,
            now,
        )?;

        let pair = TokenPair {
            access_token: self.sign(&access)?,
            refresh_token: self.sign(&refresh)?,
            expires_in: ttl_seconds(self.access_ttl),
        };

        log::info!("토큰 쌍 발급: user_id={}", subject);
        Ok(pair)
    }

    /// 리프레시 토큰으로 새 토큰 쌍을 발급합니다 (토큰 순환).
    ///
    /// `refresh_claims`는 이미 `LocalVerifier`로 서명/만료 검증을 마친 클레임이어야 합니다.
    /// 무효화 저장소가 연결되어 있으면 무효화 여부를 확인하고, 제시된 리프레시 토큰은
    /// 재사용할 수 없도록 무효화합니다.
    ///
    /// # Errors
    ///
    /// * `AuthError::WrongTokenKind` - 액세스 토큰을 제시한 경우
    /// * `AuthError::Revoked` - 이미 무효화된 리프레시 토큰
    pub async fn refresh_token_pair(
        &self,
        refresh_claims: &Claims,
        roles: BTreeSet<String>,
        permissions: BTreeSet<String>,
        organization_id: Option<String>,
    ) -> AppResult<TokenPair> {
        if refresh_claims.token_kind != TokenKind::Refresh {
            return Err(AuthError::WrongTokenKind {
                expected: TokenKind::Refresh,
                found: refresh_claims.token_kind,
            });
        }

        if let Some(store) = &self.revocations {
            // 확인과 무효화를 한 번에 수행해야 동시 갱신 중 하나만 성공함
            let rotated = store
                .revoke_if_absent(&refresh_claims.token_id, refresh_claims.expires_at)
                .await?;
            if !rotated {
                log::warn!("무효화된 리프레시 토큰 사용 시도: user_id={}", refresh_claims.subject);
                return Err(AuthError::Revoked);
            }
        }

        self.issue_token_pair(&refresh_claims.subject, roles, permissions, organization_id)
    }

    /// 토큰을 만료 시각까지 무효화합니다.
    ///
    /// # Errors
    ///
    /// * `AuthError::Configuration` - 무효화 저장소가 연결되지 않은 경우
    pub async fn revoke(&self, claims: &Claims) -> AppResult<()> {
        let store = self.revocations.as_ref().ok_or_else(|| {
            AuthError::Configuration("revocation store is not configured".to_string())
        })?;

        store.revoke(&claims.token_id, claims.expires_at).await?;
        log::info!("토큰 무효화: user_id={}, kind={}", claims.subject, claims.token_kind);
        Ok(())
    }

    /// 이미 구성된 클레임에 서명합니다.
    pub fn sign(&self, claims: &Claims) -> AppResult<String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("JWT 토큰 생성 실패: {}", e)))
    }
}

/// 발급 시각 `now`(Unix timestamp)를 기준으로 클레임을 구성합니다.
pub fn build_claims(
    subject: &str,
    roles: BTreeSet<String>,
    permissions: BTreeSet<String>,
    organization_id: Option<String>,
    kind: TokenKind,
    ttl: Duration,
    now: i64,
) -> AppResult<Claims> {
    if subject.trim().is_empty() {
        return Err(AuthError::InvalidClaims("subject must not be empty".to_string()));
    }

    Ok(Claims {
        subject: subject.to_string(),
        issued_at: now,
        expires_at: now.saturating_add(ttl_seconds(ttl)),
        token_id: Uuid::new_v4().to_string(),
        token_kind: kind,
        roles,
        permissions,
        organization_id,
    })
}

fn ttl_seconds(ttl: Duration) -> i64 {
    i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX)
}
