//! HTTP client for the auth service.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::session::{AccessToken, Session};

const REQUEST_TIMEOUT_SECS: u64 = 10;
pub const MIN_PASSWORD_LEN: usize = 8;

pub struct AuthClient {
    http: reqwest::Client,
    base_url: String,
}

// Request/response types matching the auth API

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginResponse {
    access_token: AccessToken,
}

#[derive(Deserialize)]
struct ErrorResponse {
    message: Option<String>,
}

/// Outcome of checking a stored token against the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCheck {
    Valid,
    /// No token, a rejected token, or the service could not be reached.
    /// The session has been cleared.
    Invalid,
}

impl LoginRequest {
    /// Trim the email and require both fields.
    pub fn new(email: &str, password: &str) -> Result<Self> {
        let email = email.trim();
        if email.is_empty() || password.trim().is_empty() {
            anyhow::bail!("아이디와 비밀번호를 입력해주세요.");
        }

        Ok(LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
    }
}

impl SignupRequest {
    pub fn new(name: &str, email: &str, password: &str) -> Result<Self> {
        if email.is_empty() || password.is_empty() {
            anyhow::bail!("이메일과 비밀번호는 필수입니다.");
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            anyhow::bail!("비밀번호는 {}자 이상 입력해주세요.", MIN_PASSWORD_LEN);
        }

        Ok(SignupRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        })
    }
}

impl AuthClient {
    pub fn new(base_url: &str) -> Result<Self> {
        if base_url.trim().is_empty() {
            anyhow::bail!("API 주소가 설정되지 않았습니다. (api_url 또는 FAMCAL_API_URL 확인)");
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST /api/auth/login
    pub async fn login(&self, session: &mut Session, req: &LoginRequest) -> Result<()> {
        let resp = self
            .http
            .post(self.url("/api/auth/login"))
            .json(req)
            .send()
            .await
            .context("네트워크 오류가 발생했습니다. 서버 연결을 확인해주세요.")?;

        match resp.status() {
            StatusCode::UNAUTHORIZED => {
                tracing::debug!(email = %req.email, "login rejected");
                anyhow::bail!("아이디 또는 비밀번호가 다릅니다.");
            }
            status if !status.is_success() => {
                tracing::warn!(%status, "login failed");
                anyhow::bail!("로그인 중 오류가 발생했습니다. 잠시 후 다시 시도해주세요.");
            }
            _ => {}
        }

        let body: LoginResponse = resp
            .json()
            .await
            .context("Unexpected response from auth service")?;
        session.store_token(body.access_token)?;
        Ok(())
    }

    /// POST /api/auth/signup
    pub async fn signup(&self, req: &SignupRequest) -> Result<()> {
        let resp = self
            .http
            .post(self.url("/api/auth/signup"))
            .json(req)
            .send()
            .await
            .context("네트워크 오류")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let message = resp
                .json::<ErrorResponse>()
                .await
                .ok()
                .and_then(|e| e.message)
                .unwrap_or_else(|| "회원가입 실패".to_string());
            tracing::debug!(%status, %message, "signup failed");
            anyhow::bail!("{}", message);
        }

        Ok(())
    }

    /// GET /api/auth/me. Marks the session verified, or clears it.
    pub async fn check_session(&self, session: &mut Session) -> Result<SessionCheck> {
        let Some(token) = session.token().cloned() else {
            return Ok(SessionCheck::Invalid);
        };

        let result = self
            .http
            .get(self.url("/api/auth/me"))
            .bearer_auth(token.as_str())
            .send()
            .await;

        match result {
            Ok(resp) if resp.status().is_success() => {
                session.mark_verified();
                Ok(SessionCheck::Valid)
            }
            Ok(resp) => {
                tracing::debug!(status = %resp.status(), "stored token rejected");
                session.clear()?;
                Ok(SessionCheck::Invalid)
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not reach auth service");
                session.clear()?;
                Ok(SessionCheck::Invalid)
            }
        }
    }

    /// POST /api/auth/logout. The server call is best-effort; the local
    /// token is cleared whatever it returns.
    pub async fn logout(&self, session: &mut Session) -> Result<()> {
        if let Some(token) = session.token().cloned() {
            let result = self
                .http
                .post(self.url("/api/auth/logout"))
                .bearer_auth(token.as_str())
                .send()
                .await;

            if let Err(e) = result {
                tracing::debug!(error = %e, "logout request failed");
            }
        }

        session.clear()
    }
}
