//! 토큰 도메인 모델

pub mod claims;
pub mod token_pair;

pub use claims::*;
pub use token_pair::*;
