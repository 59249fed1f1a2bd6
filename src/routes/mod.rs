//! API 라우트 설정 모듈
//!
//! 인증 기관의 엔드포인트들을 기능별로 그룹화하여 등록합니다.
//!
//! # Routes
//!
//! | 메서드 | 경로 | 인증 | 설명 |
//! |--------|------|------|------|
//! | GET | `/health` | 불필요 | 헬스체크 |
//! | POST | `/auth/validate` | Bearer (핸들러에서 검증) | 위임 검증 엔드포인트 |
//! | POST | `/auth/revoke` | 본문의 리프레시 토큰 | 리프레시 토큰 무효화 |
//! | GET | `/api/v1/me` | `AuthMiddleware::required` | 현재 사용자 |
//!
//! # Examples
//!
//! ```rust,ignore
//! let state = AuthorityState::from_config()?;
//! let app = App::new().configure(|cfg| configure_all_routes(cfg, &state));
//! ```

use actix_web::web;
use serde_json::json;

use crate::core::state::AuthorityState;
use crate::handlers;
use crate::middlewares::AuthMiddleware;

/// 모든 라우트와 공유 상태를 등록합니다
///
/// `state`는 `web::Data`로 복제되어 등록되며, 내부 구성 요소는 `Arc`로
/// 공유되므로 워커 간에도 같은 무효화 저장소를 사용합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig, state: &AuthorityState) {
    cfg.app_data(web::Data::new(state.clone()));

    cfg.service(health_check);

    configure_auth_routes(cfg);
    configure_api_routes(cfg, state);
}

/// 인증 기관 라우트를 설정합니다
///
/// 위임 검증 엔드포인트는 미들웨어 없이 등록되며, 핸들러가 직접
/// Bearer 토큰을 검증해 실패 종류별 상태 코드로 응답합니다.
///
/// ```bash
/// curl -X POST http://localhost:8080/auth/revoke \
///   -H "Content-Type: application/json" \
///   -d '{"refresh_token":"eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."}'
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .service(handlers::token_handlers::validate_token_handler)
            .service(handlers::token_handlers::revoke_token_handler),
    );
}

/// 인증이 필요한 API 라우트를 설정합니다
fn configure_api_routes(cfg: &mut web::ServiceConfig, state: &AuthorityState) {
    cfg.service(
        web::scope("/api/v1")
            .wrap(AuthMiddleware::required(state.bearer_verifier()))
            .service(handlers::token_handlers::current_user_handler),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "ok",
///   "service": "token_authority",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00Z"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use actix_web::{test, App};

    use super::*;

    #[actix_web::test]
    async fn test_health_check() {
        let state = AuthorityState::with_secret("routes-secret", Duration::from_secs(60), Duration::from_secs(60))
            .unwrap();
        let app = test::init_service(App::new().configure(|cfg| configure_all_routes(cfg, &state))).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "token_authority");
    }
}
