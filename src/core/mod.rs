//! # Core Module
//!
//! 애플리케이션 전역에서 공유하는 핵심 구성 요소를 제공합니다.
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AuthError**: 토큰 발급/검증 실패 분류
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현 (401 / 403 / 503 매핑)
//!
//! ### [`state`] - 애플리케이션 상태
//! - **AuthorityState**: 발급기, 로컬 검증기, 무효화 저장소를 묶어
//!   핸들러에 `web::Data`로 주입

pub mod errors;
pub mod state;

pub use errors::*;
pub use state::*;
