//! HTTP client for the remote Registration API.
//!
//! Three endpoints, consumed as-is:
//!
//! - `POST {base}/register`: create a registration
//! - `GET {base}/register/{email}`: lookup by email (404 means "not registered")
//! - `GET {base}/register`: list all registrations

use serde::Deserialize;

use crate::{ApiConfig, ApiError, Registration, RegistrationDraft};

/// Body of a successful registration POST. The server may attach a
/// confirmation message for the user.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Error bodies carry an optional `message` field for display.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Typed client over the registration endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            base_url: config.base_url,
            http: reqwest::Client::new(),
        }
    }

    /// Submit a new registration.
    pub async fn create_registration(
        &self,
        draft: &RegistrationDraft,
    ) -> Result<RegisterResponse, ApiError> {
        let response = self
            .http
            .post(format!("{}/register", self.base_url))
            .json(draft)
            .send()
            .await?;

        if response.status().is_success() {
            // A success body without (or with a malformed) message is fine.
            Ok(response.json().await.unwrap_or_default())
        } else {
            Err(Self::server_error(response).await)
        }
    }

    /// Look up a registration by email. `Ok(None)` is the recognized
    /// "not registered" answer (HTTP 404); other failures are errors.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Registration>, ApiError> {
        let response = self
            .http
            .get(format!(
                "{}/register/{}",
                self.base_url,
                urlencoding::encode(email)
            ))
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(Self::server_error(response).await);
        }
        Ok(Some(response.json().await?))
    }

    /// Fetch the full registration list.
    pub async fn list_registrations(&self) -> Result<Vec<Registration>, ApiError> {
        let response = self
            .http
            .get(format!("{}/register", self.base_url))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::server_error(response).await);
        }
        Ok(response.json().await?)
    }

    async fn server_error(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message);
        ApiError::Server { status, message }
    }
}
