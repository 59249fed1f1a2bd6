//! 인증 및 보안 서비스 모듈
//!
//! JWT 토큰의 발급, 로컬 검증, 위임 검증을 담당하는 서비스들을 제공합니다.
//!
//! # Features
//!
//! - 액세스/리프레시 토큰 발급 및 토큰 쌍 순환
//! - 서명 키 기반 로컬 검증 (구조 → 서명 → 만료 순)
//! - 인증 기관 위임 검증과 실패 분류 (`Unauthorized` / `AuthorityUnavailable`)
//! - 리프레시 토큰 무효화 저장소
//!
//! # Security
//!
//! - HMAC-SHA256 토큰 서명, 상수 시간 서명 비교
//! - 리프레시 토큰에는 역할/권한을 담지 않음
//! - 토큰과 서명 키는 어떤 로그에도 남기지 않음
//!
//! # Examples
//!
//! ```rust,ignore
//! use token_authority::services::auth::{TokenIssuer, LocalVerifier};
//!
//! let issuer = TokenIssuer::from_config()?;
//! let tokens = issuer.issue_token_pair("user-1", roles, permissions, None)?;
//!
//! let verifier = LocalVerifier::from_config()?;
//! let claims = verifier.verify(&tokens.access_token)?;
//! ```

pub mod bearer;
pub mod remote_verifier;
pub mod revocation;
pub mod token_issuer;
pub mod token_verifier;

pub use bearer::*;
pub use remote_verifier::RemoteVerifier;
pub use revocation::*;
pub use token_issuer::*;
pub use token_verifier::*;
