//! # Domain Models
//!
//! 토큰과 인증 컨텍스트를 표현하는 도메인 모델입니다.
//!
//! - [`token`] - 클레임, 토큰 용도, 토큰 쌍
//! - [`auth`] - 검증된 사용자 정보, 인증 모드, 역할 요구사항

pub mod auth;
pub mod token;
