//! # Configuration Module
//!
//! 토큰 인증 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버, 환경, Rate Limiting 관련 설정
//! - [`auth_config`] - JWT 서명 키, 토큰 만료 시간, 원격 인증 기관 설정
//!
//! ## 설계 원칙
//!
//! - 민감한 정보(서명 키)는 환경 변수로만 제공하며 기본값이 없음
//! - 나머지 값은 안전한 기본값을 가지며 파싱 실패 시 기본값으로 대체
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # JWT 설정 (필수)
//! export JWT_SECRET="your-super-secret-key"
//! export JWT_ACCESS_EXPIRATION_MINUTES="60"
//! export JWT_REFRESH_EXPIRATION_DAYS="7"
//!
//! # 위임 검증 설정
//! export AUTHORITY_BASE_URL="http://identity-service:8080"
//! export AUTHORITY_TIMEOUT_SECONDS="5"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
