use std::collections::BTreeSet;
use std::future::{ready, Ready};

use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::domain::models::token::Claims;

/// 검증된 토큰에서 추출된 사용자 정보
///
/// 로컬 검증(클레임)과 위임 검증(인증 기관 응답 본문) 어느 쪽이든
/// 이 형태로 정규화되어 다운스트림 로직에 전달됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID
    pub user_id: String,

    /// 사용자 이메일 (인증 기관이 제공하는 경우)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// 소속 조직 ID
    #[serde(default)]
    pub organization_id: Option<String>,

    /// 사용자 역할 목록
    #[serde(default)]
    pub roles: BTreeSet<String>,

    /// 사용자 권한 목록
    #[serde(default)]
    pub permissions: BTreeSet<String>,

    /// 토큰 만료 시간 (Unix timestamp, 알 수 있는 경우)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
}

impl AuthenticatedUser {
    /// 특정 역할을 보유하고 있는지 확인
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }

    /// 여러 역할 중 하나라도 보유하고 있는지 확인
    pub fn has_any_role(&self, roles: &[&str]) -> bool {
        roles.iter().any(|&role| self.has_role(role))
    }

    /// 특정 권한을 보유하고 있는지 확인
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.contains(permission)
    }

    /// 관리자 권한을 보유하고 있는지 확인
    pub fn is_admin(&self) -> bool {
        self.has_role("admin")
    }
}

impl From<Claims> for AuthenticatedUser {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.subject,
            email: None,
            organization_id: claims.organization_id,
            roles: claims.roles,
            permissions: claims.permissions,
            expires_at: Some(claims.expires_at),
        }
    }
}

/// ActixWeb FromRequest trait 구현
///
/// `AuthMiddleware`가 Request Extensions에 저장한 사용자 정보를 꺼냅니다.
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(actix_web::error::ErrorUnauthorized(
                "인증되지 않은 요청입니다"
            ))),
        }
    }
}

/// 선택적 인증 사용자 추출자
#[derive(Debug, Clone)]
pub struct OptionalUser(pub Option<AuthenticatedUser>);

impl FromRequest for OptionalUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let user = req.extensions().get::<AuthenticatedUser>().cloned();
        ready(Ok(OptionalUser(user)))
    }
}
