//! 리프레시 토큰 무효화 저장소
//!
//! 발급 경로 자체는 상태가 없지만, 리프레시 토큰은 외부 저장소를 통해
//! 무효화될 수 있습니다. 발급기는 이 저장소를 선택적으로 참조합니다.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;

use crate::core::errors::{AppResult, AuthError};

/// 토큰 ID(`jti`) 기반 무효화 저장소
#[async_trait]
pub trait RevocationStore: Send + Sync {
    /// 토큰을 만료 시각까지 무효화 목록에 기록합니다.
    async fn revoke(&self, token_id: &str, expires_at: i64) -> AppResult<()>;

    /// 토큰이 무효화되었는지 확인합니다.
    async fn is_revoked(&self, token_id: &str) -> AppResult<bool>;

    /// 아직 무효화되지 않은 토큰이면 무효화하고 `true`를 반환합니다.
    ///
    /// 확인과 기록은 하나의 원자적 연산이어야 합니다. 같은 토큰에 대한
    /// 동시 호출 중 정확히 하나만 `true`를 받습니다.
    async fn revoke_if_absent(&self, token_id: &str, expires_at: i64) -> AppResult<bool>;
}

/// 프로세스 메모리 기반 무효화 저장소
///
/// 인스턴스가 소유하는 맵이며 전역 상태가 아닙니다. 이미 만료된 토큰은
/// 검증 단계에서 거부되므로, 쓰기 시점마다 만료된 항목을 정리하여
/// 크기가 살아있는 토큰 수로 제한됩니다.
#[derive(Debug, Default)]
pub struct InMemoryRevocationStore {
    entries: RwLock<HashMap<String, i64>>,
}

impl InMemoryRevocationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 현재 기록된 항목 수
    pub fn len(&self) -> usize {
        self.entries.read().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned() -> AuthError {
    AuthError::Internal("revocation store lock poisoned".to_string())
}

#[async_trait]
impl RevocationStore for InMemoryRevocationStore {
    async fn revoke(&self, token_id: &str, expires_at: i64) -> AppResult<()> {
        let now = Utc::now().timestamp();
        let mut entries = self.entries.write().map_err(|_| poisoned())?;

        entries.retain(|_, exp| *exp > now);
        if expires_at > now {
            entries.insert(token_id.to_string(), expires_at);
        }

        log::debug!("토큰 무효화 기록: jti={}, 보관 항목 {}개", token_id, entries.len());
        Ok(())
    }

    async fn is_revoked(&self, token_id: &str) -> AppResult<bool> {
        let now = Utc::now().timestamp();
        let entries = self.entries.read().map_err(|_| poisoned())?;

        Ok(entries.get(token_id).is_some_and(|exp| *exp > now))
    }

    async fn revoke_if_absent(&self, token_id: &str, expires_at: i64) -> AppResult<bool> {
        let now = Utc::now().timestamp();
        let mut entries = self.entries.write().map_err(|_| poisoned())?;

        entries.retain(|_, exp| *exp > now);
        if entries.contains_key(token_id) {
            return Ok(false);
        }
        if expires_at > now {
            entries.insert(token_id.to_string(), expires_at);
        }

        Ok(true)
    }
}
