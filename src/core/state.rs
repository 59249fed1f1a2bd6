//! 인증 기관 애플리케이션 상태
//!
//! 발급기, 검증기, 무효화 저장소를 한 곳에서 생성해 `web::Data`로 공유합니다.
//! 모든 구성 요소는 인스턴스 소유이며 프로세스 전역 상태는 없습니다.

use std::sync::Arc;

use crate::core::errors::AppResult;
use crate::services::auth::{
    BearerVerifier, InMemoryRevocationStore, LocalVerifier, RevocationStore, TokenIssuer,
};

/// 핸들러와 미들웨어가 공유하는 인증 기관 상태
#[derive(Clone)]
pub struct AuthorityState {
    pub issuer: Arc<TokenIssuer>,
    pub verifier: Arc<LocalVerifier>,
    pub revocations: Arc<dyn RevocationStore>,
}

impl AuthorityState {
    /// 같은 비밀키를 공유하는 발급기와 검증기로 상태를 구성합니다.
    ///
    /// 발급기에는 `revocations`가 연결되어 리프레시 토큰 순환과 무효화에 사용됩니다.
    pub fn new(
        issuer: TokenIssuer,
        verifier: LocalVerifier,
        revocations: Arc<dyn RevocationStore>,
    ) -> Self {
        let issuer = issuer.with_revocation_store(revocations.clone());

        Self {
            issuer: Arc::new(issuer),
            verifier: Arc::new(verifier),
            revocations,
        }
    }

    /// 환경 변수 설정으로 상태를 구성합니다.
    ///
    /// # Errors
    ///
    /// * `AuthError::Configuration` - `JWT_SECRET`이 없거나 비어 있는 경우
    pub fn from_config() -> AppResult<Self> {
        Ok(Self::new(
            TokenIssuer::from_config()?,
            LocalVerifier::from_config()?,
            Arc::new(InMemoryRevocationStore::new()),
        ))
    }

    /// 테스트 및 임베딩용: 주어진 비밀키와 TTL로 상태를 구성합니다.
    pub fn with_secret(
        secret: &str,
        access_ttl: std::time::Duration,
        refresh_ttl: std::time::Duration,
    ) -> AppResult<Self> {
        Ok(Self::new(
            TokenIssuer::new(secret, access_ttl, refresh_ttl)?,
            LocalVerifier::new(secret)?,
            Arc::new(InMemoryRevocationStore::new()),
        ))
    }

    /// 미들웨어에 넘길 Bearer 검증기
    pub fn bearer_verifier(&self) -> Arc<dyn BearerVerifier> {
        self.verifier.clone()
    }
}
