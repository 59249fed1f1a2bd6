use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::models::auth::AuthenticatedUser;

/// API 응답 래퍼
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn message(message: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            success: true,
            data: None,
            message: Some(message.into()),
        }
    }
}

/// `/auth/validate` 응답 본문
///
/// 인증 기관이 생성하고 위임 검증 클라이언트가 해석하는 형식입니다.
/// `user_id`만 필수이며 나머지 필드는 없거나 `null`이어도 됩니다.
///
/// ```json
/// {
///   "user_id": "u1",
///   "email": "user@example.com",
///   "organization_id": "org-1",
///   "roles": ["user"],
///   "permissions": ["reports:read"],
///   "expires_at": 1700003600
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateResponse {
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub organization_id: Option<String>,
    #[serde(default)]
    pub roles: Option<BTreeSet<String>>,
    #[serde(default)]
    pub permissions: Option<BTreeSet<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
}

impl From<AuthenticatedUser> for ValidateResponse {
    fn from(user: AuthenticatedUser) -> Self {
        Self {
            user_id: user.user_id,
            email: user.email,
            organization_id: user.organization_id,
            roles: Some(user.roles),
            permissions: Some(user.permissions),
            expires_at: user.expires_at,
        }
    }
}

impl From<ValidateResponse> for AuthenticatedUser {
    fn from(body: ValidateResponse) -> Self {
        Self {
            user_id: body.user_id,
            email: body.email,
            organization_id: body.organization_id,
            roles: body.roles.unwrap_or_default(),
            permissions: body.permissions.unwrap_or_default(),
            expires_at: body.expires_at,
        }
    }
}
