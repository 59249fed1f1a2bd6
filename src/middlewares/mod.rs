//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 1. 인증 미들웨어 (AuthMiddleware)
//! - Bearer 토큰 추출 및 검증 (로컬 또는 위임 검증)
//! - 사용자 정보를 request extension에 저장
//! - 선택적/강제 인증 모드 지원
//! - 인증 기관 장애는 401이 아닌 503으로 응답
//!
//! # 사용 방법
//!
//! ## 인증 기관 (서명 키 보유)
//! ```rust,ignore
//! let state = AuthorityState::from_config()?;
//!
//! App::new().service(
//!     web::scope("/api/v1")
//!         .wrap(AuthMiddleware::required(state.bearer_verifier()))
//!         .service(handlers::token_handlers::current_user),
//! )
//! ```
//!
//! ## 다운스트림 서비스 (인증 기관에 위임)
//! ```rust,ignore
//! let verifier: Arc<dyn BearerVerifier> = Arc::new(RemoteVerifier::from_config());
//!
//! App::new().service(
//!     web::scope("/api/admin")
//!         .wrap(AuthMiddleware::required_with_roles(verifier, vec!["admin"]))
//!         .route("/reports", web::get().to(reports)),
//! )
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
