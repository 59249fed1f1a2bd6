//! 토큰 인증 기관 (Token Authority)
//!
//! HMAC-SHA256 서명 JWT의 발급, 로컬 검증, 위임(원격) 검증을 제공하는
//! 인증 서비스입니다. 서명 키를 보유한 인증 기관은 토큰을 로컬에서 검증하고,
//! 키가 없는 다운스트림 서비스는 인증 기관의 `/auth/validate`에 검증을 위임합니다.
//!
//! # Features
//!
//! - **토큰 발급**: 액세스/리프레시 토큰 쌍, 리프레시 토큰 순환
//! - **로컬 검증**: 구조 → 서명(상수 시간 비교) → 만료 순 검증
//! - **위임 검증**: 요청별 타임아웃, "토큰 무효"와 "인증 기관 장애"의 구분
//! - **무효화 저장소**: 인스턴스 소유 리프레시 토큰 무효화
//! - **인증 미들웨어**: 로컬/위임 검증 어느 쪽이든 같은 미들웨어로 보호
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /health, /auth/*, /api/v1/*
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! │   Middlewares   │ ← Bearer 인증
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← TokenIssuer, LocalVerifier, RemoteVerifier
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use token_authority::services::auth::{LocalVerifier, TokenIssuer};
//!
//! let issuer = TokenIssuer::from_config()?;
//! let pair = issuer.issue_token_pair("user-1", roles, permissions, None)?;
//!
//! let verifier = LocalVerifier::from_config()?;
//! let claims = verifier.verify_access(&pair.access_token)?;
//! ```

pub mod config;
pub mod core;
pub mod domain;
pub mod handlers;
pub mod middlewares;
pub mod routes;
pub mod services;
