//! HTTP 요청/응답 DTO

pub mod tokens;

pub use tokens::*;
