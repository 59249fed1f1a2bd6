//! 인증 컨텍스트 모델

pub mod authenticated_user;
pub mod authentication_request;

pub use authenticated_user::*;
pub use authentication_request::*;
