use serde::Deserialize;

/// 리프레시 토큰 무효화 요청 DTO
#[derive(Debug, Deserialize)]
pub struct RevokeRequest {
    pub refresh_token: String,
}
