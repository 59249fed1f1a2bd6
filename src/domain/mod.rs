//! # Domain Layer
//!
//! 토큰 인증 서비스의 도메인 계층입니다.
//!
//! ```text
//! domain/
//! ├── models/      ← 클레임, 토큰 쌍, 인증된 사용자
//! └── dto/         ← HTTP 요청/응답 형식
//! ```

pub mod dto;
pub mod models;

pub use dto::*;
pub use models::auth::*;
pub use models::token::*;
