//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;
use std::sync::Arc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;

use crate::core::errors::{AppResult, AuthError};
use crate::domain::models::auth::{AuthMode, AuthenticatedUser, RequiredRole};
use crate::services::auth::{bearer_token_from_headers, BearerVerifier};

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub verifier: Arc<dyn BearerVerifier>,
    pub mode: AuthMode,
    pub required_role: Option<RequiredRole>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let verifier = self.verifier.clone();
        let mode = self.mode.clone();
        let required_role = self.required_role.clone();

        Box::pin(async move {
            let auth_result = authenticate_request(&req, verifier.as_ref()).await;

            match (&mode, auth_result) {
                // Required 모드에서 인증 실패: 실패 종류별 상태 코드(401/503)로 응답
                (AuthMode::Required, Err(err)) => {
                    log::warn!("인증 실패: {}", err);
                    return Ok(reject(req, &err));
                }
                (AuthMode::Required, Ok(user)) => {
                    if let Some(ref required) = required_role {
                        if !required.is_satisfied(&user.roles) {
                            log::warn!(
                                "권한 부족: 사용자 ID {} ({:?}), 필요 권한: {:?}",
                                user.user_id,
                                user.roles,
                                required
                            );
                            let err = AuthError::Forbidden("접근 권한이 부족합니다".to_string());
                            return Ok(reject(req, &err));
                        }
                    }

                    log::debug!("인증 성공: 사용자 ID {}", user.user_id);
                    req.extensions_mut().insert(user);
                }
                // Optional 모드에서는 역할이 맞지 않으면 익명으로 진행
                (AuthMode::Optional, Ok(user)) => {
                    let satisfied = required_role
                        .as_ref()
                        .is_none_or(|required| required.is_satisfied(&user.roles));

                    if satisfied {
                        log::debug!("선택적 인증 성공: 사용자 ID {}", user.user_id);
                        req.extensions_mut().insert(user);
                    } else {
                        log::debug!("선택적 인증: 권한 부족하지만 진행 허용");
                    }
                }
                // 검증 자체를 할 수 없는 경우는 익명 요청으로 바꾸지 않음
                (AuthMode::Optional, Err(err)) if err.is_retryable() => {
                    log::warn!("선택적 인증: 인증 기관 사용 불가: {}", err);
                    return Ok(reject(req, &err));
                }
                (AuthMode::Optional, Err(err)) => {
                    log::debug!("선택적 인증: 인증 정보 없음 또는 무효 ({}), 요청 진행", err.code());
                }
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 요청의 Authorization 헤더에서 Bearer 토큰을 추출하고 검증
async fn authenticate_request(
    req: &ServiceRequest,
    verifier: &dyn BearerVerifier,
) -> AppResult<AuthenticatedUser> {
    let token = bearer_token_from_headers(req.headers())?;
    verifier.verify_bearer(token).await
}

fn reject<B>(req: ServiceRequest, err: &AuthError) -> ServiceResponse<EitherBody<B>> {
    let (req, _) = req.into_parts();
    ServiceResponse::new(req, err.error_response()).map_into_right_body()
}
