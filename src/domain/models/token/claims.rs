//! JWT 클레임(Payload) 구조체
//!
//! RFC 7519 등록 클레임(`sub`, `iat`, `exp`, `jti`)과 애플리케이션 특화 클레임을 포함합니다.
//! 클레임은 발급 시점에만 생성되며 이후 변경되지 않습니다. 갱신이 필요하면
//! 새 토큰을 발급합니다.
use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// 토큰의 용도
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// API 접근용 단기 토큰
    Access,
    /// 토큰 갱신용 장기 토큰
    Refresh,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Access => "access",
            TokenKind::Refresh => "refresh",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JWT 토큰의 클레임 구조체
///
/// ## 클레임 구성
///
/// - `sub`: 토큰의 주체 (사용자 ID)
/// - `iat`: 토큰 발급 시간 (Unix timestamp, 초)
/// - `exp`: 토큰 만료 시간 (Unix timestamp, 초)
/// - `jti`: 토큰 고유 ID (무효화 추적용)
/// - `token_kind`: `access` / `refresh`
/// - `roles`, `permissions`: 권한 기반 접근 제어용 (리프레시 토큰에는 없음)
/// - `organization_id`: 멀티 테넌트 범위 (선택사항)
///
/// 역할/권한은 `BTreeSet`으로 보관하여 직렬화 순서가 항상 일정합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// 토큰의 주체 (사용자 ID)
    #[serde(rename = "sub")]
    pub subject: String,
    /// 토큰 발급 시간
    #[serde(rename = "iat")]
    pub issued_at: i64,
    /// 토큰 만료 시간
    #[serde(rename = "exp")]
    pub expires_at: i64,
    /// 토큰 고유 ID
    #[serde(rename = "jti")]
    pub token_id: String,
    pub token_kind: TokenKind,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub roles: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub permissions: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
}

impl Claims {
    /// 주어진 시각(Unix timestamp)에 만료되었는지 확인
    ///
    /// `exp`와 같은 시각부터 만료로 간주합니다.
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.expires_at <= now
    }
}
