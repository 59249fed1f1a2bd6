//! 발급된 토큰 쌍
use serde::{Deserialize, Serialize};

/// JWT 토큰 쌍 구조체
///
/// 클라이언트에게 전달되는 토큰 집합을 나타냅니다.
/// OAuth 2.0 토큰 응답 형식을 따르며, 발급자는 이 값을 보관하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    /// 액세스 토큰 (API 접근용 단기 토큰)
    pub access_token: String,
    /// 리프레시 토큰 (토큰 갱신용 장기 토큰)
    pub refresh_token: String,
    /// 액세스 토큰 만료 시간 (초)
    pub expires_in: i64,
}
