//! Bearer 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 Bearer 토큰을 검증하고 사용자 정보를 추출합니다.
//! 검증 방식은 생성 시 주입되는 [`BearerVerifier`]가 결정하므로, 같은 미들웨어가
//! 인증 기관(로컬 검증)과 다운스트림 서비스(위임 검증) 양쪽에서 동작합니다.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::domain::models::auth::{AuthMode, RequiredRole};
use crate::middlewares::auth_inner::AuthMiddlewareService;
use crate::services::auth::BearerVerifier;

/// Bearer 인증 미들웨어
pub struct AuthMiddleware {
    /// 토큰 검증기
    verifier: Arc<dyn BearerVerifier>,
    /// 인증 모드 (Required/Optional)
    mode: AuthMode,
    /// 접근에 필요한 역할 (선택사항)
    required_role: Option<RequiredRole>,
}

impl AuthMiddleware {
    /// 새로운 인증 미들웨어 생성
    pub fn new(verifier: Arc<dyn BearerVerifier>, mode: AuthMode) -> Self {
        Self {
            verifier,
            mode,
            required_role: None,
        }
    }

    /// 역할 요구사항이 있는 인증 미들웨어 생성
    pub fn new_with_role(
        verifier: Arc<dyn BearerVerifier>,
        mode: AuthMode,
        required_role: RequiredRole,
    ) -> Self {
        Self {
            verifier,
            mode,
            required_role: Some(required_role),
        }
    }

    /// 필수 인증 미들웨어 생성
    pub fn required(verifier: Arc<dyn BearerVerifier>) -> Self {
        Self::new(verifier, AuthMode::Required)
    }

    /// 선택적 인증 미들웨어 생성
    pub fn optional(verifier: Arc<dyn BearerVerifier>) -> Self {
        Self::new(verifier, AuthMode::Optional)
    }

    /// 특정 역할 요구 인증 미들웨어 생성
    pub fn required_with_role(verifier: Arc<dyn BearerVerifier>, role: &str) -> Self {
        Self::new_with_role(
            verifier,
            AuthMode::Required,
            RequiredRole::Single(role.to_string()),
        )
    }

    /// 복수 역할 중 하나 요구 인증 미들웨어 생성
    pub fn required_with_roles(verifier: Arc<dyn BearerVerifier>, roles: Vec<&str>) -> Self {
        let role_strings: Vec<String> = roles.into_iter().map(|s| s.to_string()).collect();
        Self::new_with_role(verifier, AuthMode::Required, RequiredRole::Any(role_strings))
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            verifier: self.verifier.clone(),
            mode: self.mode.clone(),
            required_role: self.required_role.clone(),
        }))
    }
}
