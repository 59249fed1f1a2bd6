//! # HTTP Request Handlers Module
//!
//! 인증 기관의 HTTP 엔드포인트를 처리하는 핸들러 함수들을 정의합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   다운스트림 서비스 (RemoteVerifier)
//! └─────────────────────┬───────────────────────┘
//!                       │ POST /auth/validate
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈)                          ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 발급/검증/무효화                  ← Service Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 에러 처리
//!
//! 핸들러는 `AppResult<HttpResponse>`를 반환하고 `?`로 `AuthError`를 전파합니다.
//! 상태 코드와 JSON 본문은 `AuthError`의 `ResponseError` 구현이 결정합니다.
//!
//! ## 모듈 구성
//!
//! - **`token_handlers`**: 토큰 관련 엔드포인트
//!   - 토큰 검증 (`POST /auth/validate`)
//!   - 리프레시 토큰 무효화 (`POST /auth/revoke`)
//!   - 현재 사용자 조회 (`GET /api/v1/me`)

pub mod token_handlers;
