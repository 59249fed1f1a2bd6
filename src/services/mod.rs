//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 토큰 발급, 로컬 검증, 위임 검증, 무효화 저장소를 제공합니다.
//! 모든 서비스는 명시적으로 생성되어 소유되며, 애플리케이션에서는
//! [`crate::core::AuthorityState`]로 묶어 공유합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use token_authority::services::auth::{TokenIssuer, RemoteVerifier};
//!
//! let issuer = TokenIssuer::from_config()?;
//! let remote = RemoteVerifier::from_config();
//! ```

pub mod auth;
