//! 위임(원격) 토큰 검증 클라이언트
//!
//! 서명 키를 보유하지 않은 서비스가 Bearer 토큰을 인증 기관의 검증 엔드포인트로
//! 전달하고, 그 결과를 정해진 규칙에 따라 분류합니다.
//!
//! # 응답 분류
//!
//! | 조건 | 결과 |
//! |------|------|
//! | HTTP 200 + 올바른 본문 | `Ok(AuthenticatedUser)` |
//! | HTTP 401 | `Unauthorized("Invalid or expired token")` |
//! | 타임아웃 | `AuthorityUnavailable("service temporarily unavailable")` |
//! | 연결/전송 오류, 200 본문 수신 중단 | `AuthorityUnavailable("Authentication service unavailable")` |
//! | 그 외 HTTP 상태 | `Unauthorized("Token validation failed")` |
//! | 그 외 로컬 오류 | `Unauthorized("Token validation failed")` |
//!
//! 알 수 없는 응답은 성공이 아니라 거부로 취급합니다. 재시도는 하지 않으며,
//! 반환된 future를 drop하면 진행 중인 요청도 함께 취소됩니다.

use std::time::Duration;

use reqwest::StatusCode;

use crate::config::AuthorityConfig;
use crate::core::errors::{AppResult, AuthError};
use crate::domain::dto::tokens::ValidateResponse;
use crate::domain::models::auth::AuthenticatedUser;

pub const INVALID_OR_EXPIRED_TOKEN: &str = "Invalid or expired token";
pub const TOKEN_VALIDATION_FAILED: &str = "Token validation failed";
pub const SERVICE_TEMPORARILY_UNAVAILABLE: &str = "service temporarily unavailable";
pub const AUTH_SERVICE_UNAVAILABLE: &str = "Authentication service unavailable";

/// 인증 기관 검증 엔드포인트 경로
pub const VALIDATE_PATH: &str = "/auth/validate";

/// 위임 토큰 검증기
///
/// 로컬 암호 검증을 하지 않고 인증 기관의 응답을 그대로 신뢰합니다.
/// `reqwest::Client`의 커넥션 풀을 공유하므로 복제 비용이 낮고,
/// 각 호출은 자신의 타임아웃만 적용받아 다른 호출을 지연시키지 않습니다.
#[derive(Debug, Clone)]
pub struct RemoteVerifier {
    client: reqwest::Client,
    validate_url: String,
    timeout: Duration,
}

impl RemoteVerifier {
    /// # Arguments
    ///
    /// * `base_url` - 인증 기관 기본 URL (예: `http://identity-service:8080`)
    /// * `timeout` - 요청당 타임아웃
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, timeout)
    }

    /// 이미 구성된 HTTP 클라이언트를 재사용합니다.
    pub fn with_client(client: reqwest::Client, base_url: &str, timeout: Duration) -> Self {
        Self {
            client,
            validate_url: format!("{}{}", base_url.trim_end_matches('/'), VALIDATE_PATH),
            timeout,
        }
    }

    /// 환경 변수 설정(`AuthorityConfig`)으로 검증기를 생성합니다.
    pub fn from_config() -> Self {
        Self::new(&AuthorityConfig::base_url(), AuthorityConfig::timeout())
    }

    pub fn validate_url(&self) -> &str {
        &self.validate_url
    }

    /// 기본 타임아웃으로 위임 검증을 수행합니다.
    pub async fn verify_remote(&self, token: &str) -> AppResult<AuthenticatedUser> {
        self.verify_remote_with_timeout(token, self.timeout).await
    }

    /// 지정한 타임아웃으로 위임 검증을 수행합니다.
    ///
    /// # Errors
    ///
    /// * `AuthError::Unauthorized` - 자격 증명이 거부되었거나 응답을 신뢰할 수 없음
    /// * `AuthError::AuthorityUnavailable` - 인증 기관에 도달할 수 없음 (재시도 가능)
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let verifier = RemoteVerifier::from_config();
    /// match verifier.verify_remote(token).await {
    ///     Ok(user) => println!("User ID: {}", user.user_id),
    ///     Err(e) if e.is_retryable() => { /* 503 */ }
    ///     Err(_) => { /* 401 */ }
    /// }
    /// ```
    pub async fn verify_remote_with_timeout(
        &self,
        token: &str,
        timeout: Duration,
    ) -> AppResult<AuthenticatedUser> {
        let result = self.call_authority(token, timeout).await;

        match &result {
            Ok(user) => log::info!("원격 토큰 검증 성공: user_id={}", user.user_id),
            Err(AuthError::Unauthorized(reason)) => log::warn!("원격 토큰 검증 거부: {}", reason),
            Err(_) => {}
        }

        result
    }

    async fn call_authority(&self, token: &str, timeout: Duration) -> AppResult<AuthenticatedUser> {
        let response = self
            .client
            .post(&self.validate_url)
            .bearer_auth(token)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| classify_transport_error(&e))?;

        match response.status() {
            StatusCode::OK => {
                // 본문을 끝까지 받지 못한 것은 응답을 받지 못한 것과 같게 취급
                let bytes = response.bytes().await.map_err(|e| classify_body_error(&e))?;

                match serde_json::from_slice::<ValidateResponse>(&bytes) {
                    Ok(body) => Ok(body.into()),
                    Err(e) => {
                        log::error!("인증 기관 응답 본문 해석 실패: {}", e);
                        Err(AuthError::Unauthorized(TOKEN_VALIDATION_FAILED.to_string()))
                    }
                }
            }
            StatusCode::UNAUTHORIZED => {
                Err(AuthError::Unauthorized(INVALID_OR_EXPIRED_TOKEN.to_string()))
            }
            status => {
                log::warn!("예상하지 못한 인증 기관 응답 상태: {}", status);
                Err(AuthError::Unauthorized(TOKEN_VALIDATION_FAILED.to_string()))
            }
        }
    }
}

/// 응답을 받지 못한 호출 실패를 분류합니다.
fn classify_transport_error(e: &reqwest::Error) -> AuthError {
    if e.is_timeout() {
        log::error!("인증 기관 응답 시간 초과: {}", e);
        AuthError::AuthorityUnavailable(SERVICE_TEMPORARILY_UNAVAILABLE.to_string())
    } else if e.is_connect() || e.is_request() {
        log::error!("인증 기관 연결 실패: {}", e);
        AuthError::AuthorityUnavailable(AUTH_SERVICE_UNAVAILABLE.to_string())
    } else {
        log::error!("인증 기관 호출 중 예상하지 못한 오류: {}", e);
        AuthError::Unauthorized(TOKEN_VALIDATION_FAILED.to_string())
    }
}

/// 200 응답의 본문 수신 실패를 분류합니다.
fn classify_body_error(e: &reqwest::Error) -> AuthError {
    if e.is_timeout() {
        return classify_transport_error(e);
    }

    log::error!("인증 기관 응답 본문 수신 실패: {}", e);
    AuthError::AuthorityUnavailable(AUTH_SERVICE_UNAVAILABLE.to_string())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::time::Instant;

    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    async fn authority_responding(template: ResponseTemplate) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(VALIDATE_PATH))
            .respond_with(template)
            .mount(&server)
            .await;
        server
    }

    fn verifier_for(server: &MockServer) -> RemoteVerifier {
        RemoteVerifier::new(&server.uri(), Duration::from_secs(5))
    }

    #[test]
    fn test_validate_url_joins_base() {
        let verifier = RemoteVerifier::new("http://identity:8080/", Duration::from_secs(5));
        assert_eq!(verifier.validate_url(), "http://identity:8080/auth/validate");
    }

    #[tokio::test]
    async fn test_success_populates_identity_and_sends_bearer() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(VALIDATE_PATH))
            .and(header("Authorization", "Bearer tok-123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "user_id": "u1",
                "roles": ["user"]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let user = verifier_for(&server).verify_remote("tok-123").await.unwrap();

        assert_eq!(user.user_id, "u1");
        assert_eq!(user.roles, BTreeSet::from(["user".to_string()]));
        assert!(user.permissions.is_empty());
        assert_eq!(user.organization_id, None);
    }

    #[tokio::test]
    async fn test_success_passes_through_optional_fields() {
        let server = authority_responding(ResponseTemplate::new(200).set_body_json(
            serde_json::json!({
                "user_id": "u2",
                "email": "u2@example.com",
                "organization_id": "org-9",
                "roles": ["admin", "user"],
                "permissions": ["reports:read"]
            }),
        ))
        .await;

        let user = verifier_for(&server).verify_remote("tok").await.unwrap();

        assert_eq!(user.email.as_deref(), Some("u2@example.com"));
        assert_eq!(user.organization_id.as_deref(), Some("org-9"));
        assert!(user.is_admin());
        assert!(user.has_permission("reports:read"));
    }

    #[tokio::test]
    async fn test_401_is_unauthorized() {
        let server = authority_responding(ResponseTemplate::new(401)).await;

        let result = verifier_for(&server).verify_remote("expired").await;

        assert_eq!(
            result.unwrap_err(),
            AuthError::Unauthorized(INVALID_OR_EXPIRED_TOKEN.to_string())
        );
    }

    #[tokio::test]
    async fn test_other_statuses_are_conservatively_rejected() {
        for status in [403u16, 404, 500, 502, 503, 204] {
            let server = authority_responding(ResponseTemplate::new(status)).await;

            let error = verifier_for(&server).verify_remote("tok").await.unwrap_err();

            assert_eq!(
                error,
                AuthError::Unauthorized(TOKEN_VALIDATION_FAILED.to_string()),
                "status {}",
                status
            );
            assert!(!error.is_retryable());
        }
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_rejected() {
        let server = authority_responding(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"roles": ["user"]})),
        )
        .await;

        let result = verifier_for(&server).verify_remote("tok").await;

        assert_eq!(
            result.unwrap_err(),
            AuthError::Unauthorized(TOKEN_VALIDATION_FAILED.to_string())
        );
    }

    #[tokio::test]
    async fn test_timeout_is_authority_unavailable() {
        let server = authority_responding(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"user_id": "u1"}))
                .set_delay(Duration::from_secs(2)),
        )
        .await;

        let error = verifier_for(&server)
            .verify_remote_with_timeout("tok", Duration::from_millis(100))
            .await
            .unwrap_err();

        assert_eq!(
            error,
            AuthError::AuthorityUnavailable(SERVICE_TEMPORARILY_UNAVAILABLE.to_string())
        );
        assert!(error.is_retryable());
    }

    #[tokio::test]
    async fn test_connection_failure_is_authority_unavailable() {
        // 바인딩 후 즉시 해제하여 아무도 듣지 않는 포트를 확보
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let verifier = RemoteVerifier::new(&format!("http://127.0.0.1:{}", port), Duration::from_secs(2));

        let error = verifier.verify_remote("tok").await.unwrap_err();

        assert_eq!(
            error,
            AuthError::AuthorityUnavailable(AUTH_SERVICE_UNAVAILABLE.to_string())
        );
    }

    #[tokio::test]
    async fn test_truncated_success_body_is_authority_unavailable() {
        // Content-Length보다 짧은 본문을 보내고 연결을 닫는 인증 기관
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let server = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            stream
                .write_all(
                    b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 100\r\n\r\n{\"user_id\"",
                )
                .unwrap();
        });
        let verifier = RemoteVerifier::new(&format!("http://127.0.0.1:{}", port), Duration::from_secs(2));

        let error = verifier.verify_remote("tok").await.unwrap_err();
        server.join().unwrap();

        assert_eq!(
            error,
            AuthError::AuthorityUnavailable(AUTH_SERVICE_UNAVAILABLE.to_string())
        );
    }

    #[tokio::test]
    async fn test_invalid_base_url_is_rejected_not_unavailable() {
        let verifier = RemoteVerifier::new("not a url", Duration::from_secs(1));

        let result = verifier.verify_remote("tok").await;

        assert_eq!(
            result.unwrap_err(),
            AuthError::Unauthorized(TOKEN_VALIDATION_FAILED.to_string())
        );
    }

    #[tokio::test]
    async fn test_slow_call_does_not_delay_concurrent_call() {
        let slow = authority_responding(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"user_id": "slow"}))
                .set_delay(Duration::from_secs(3)),
        )
        .await;
        let fast = authority_responding(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"user_id": "fast"})),
        )
        .await;

        let slow_verifier = RemoteVerifier::new(&slow.uri(), Duration::from_millis(1500));
        let fast_verifier = verifier_for(&fast);

        let started = Instant::now();
        let fast_call = async {
            let result = fast_verifier.verify_remote("tok").await;
            (result, started.elapsed())
        };
        let ((fast_result, fast_elapsed), slow_result) =
            futures_util::join!(fast_call, slow_verifier.verify_remote("tok"));

        assert_eq!(fast_result.unwrap().user_id, "fast");
        assert!(fast_elapsed < Duration::from_millis(1000));
        assert!(matches!(slow_result, Err(AuthError::AuthorityUnavailable(_))));
    }
}
