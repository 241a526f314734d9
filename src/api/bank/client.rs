use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client as HttpClient;
use tracing::warn;

use super::models::{
    AmountRequest, ApiError, BalanceResponse, CredentialsRequest, ErrorResponse, LoginResponse,
    MessageResponse, TransactionsResponse, TransferRequest,
};

/// Banking service API client for the demo bank HTTP+JSON contract
///
/// The client holds no token itself; authenticated calls take the bearer
/// token from the caller's session so the session stays the single owner of
/// login state.
pub struct BankClient {
    http_client: HttpClient,
    base_url: String,
}

impl BankClient {
    /// Create a new banking API client for the given base URL
    pub fn new(base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url,
        }
    }

    /// Create default headers for an unauthenticated JSON request
    fn create_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    /// Create headers carrying the bearer token.
    ///
    /// The token is sent as-is, including when it is empty: the browser
    /// client this replaces did no pre-flight auth check, and the server is
    /// the one that decides what an empty token means.
    fn create_auth_headers(token: &str) -> Result<HeaderMap, ApiError> {
        let mut headers = Self::create_headers();
        let auth_value = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|e| ApiError::RequestError(format!("Failed to create auth header: {}", e)))?;
        headers.insert(AUTHORIZATION, auth_value);
        Ok(headers)
    }

    /// Parse error response based on HTTP status code
    ///
    /// The backend sends its human-readable message in a `msg` field of the
    /// error body; extract it so callers can show the server's own words.
    async fn handle_error_response(
        status: reqwest::StatusCode,
        response: reqwest::Response,
    ) -> ApiError {
        let status_code = status.as_u16();
        let body_text = response.text().await.unwrap_or_default();

        let msg = serde_json::from_str::<ErrorResponse>(&body_text)
            .ok()
            .and_then(|e| e.msg)
            .unwrap_or_else(|| body_text.clone());

        match status_code {
            400 => ApiError::BadRequest(msg),
            401 => ApiError::Unauthorized(msg),
            403 => ApiError::Forbidden(msg),
            404 => ApiError::NotFound(msg),
            409 => ApiError::Conflict(msg),
            500..=599 => {
                warn!("Server error {}: {}", status_code, msg);
                ApiError::ServerError(status_code as i32, msg)
            }
            _ => ApiError::HttpError(status_code as i32, msg),
        }
    }

    /// POST /register
    ///
    /// Creates a new user and their account. No token required.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
    ) -> Result<MessageResponse, ApiError> {
        let url = format!("{}/register", self.base_url);
        let body = CredentialsRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let response = self
            .http_client
            .post(&url)
            .headers(Self::create_headers())
            .json(&body)
            .send()
            .await
            .map_err(|e| ApiError::RequestError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(Self::handle_error_response(status, response).await);
        }

        response
            .json::<MessageResponse>()
            .await
            .map_err(|e| ApiError::DeserializationError(format!("Failed to parse response: {}", e)))
    }

    /// POST /login
    ///
    /// Exchanges credentials for a bearer token. A 401 means the server
    /// rejected the credentials; its `msg` rides in the error.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let url = format!("{}/login", self.base_url);
        let body = CredentialsRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let response = self
            .http_client
            .post(&url)
            .headers(Self::create_headers())
            .json(&body)
            .send()
            .await
            .map_err(|e| ApiError::RequestError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(Self::handle_error_response(status, response).await);
        }

        response
            .json::<LoginResponse>()
            .await
            .map_err(|e| ApiError::DeserializationError(format!("Failed to parse response: {}", e)))
    }

    /// GET /balance
    pub async fn balance(&self, token: &str) -> Result<BalanceResponse, ApiError> {
        let url = format!("{}/balance", self.base_url);
        let headers = Self::create_auth_headers(token)?;

        let response = self
            .http_client
            .get(&url)
            .headers(headers)
            .send()
            .await
            .map_err(|e| ApiError::RequestError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(Self::handle_error_response(status, response).await);
        }

        response
            .json::<BalanceResponse>()
            .await
            .map_err(|e| ApiError::DeserializationError(format!("Failed to parse response: {}", e)))
    }

    /// POST /deposit
    pub async fn deposit(&self, token: &str, amount: f64) -> Result<MessageResponse, ApiError> {
        let url = format!("{}/deposit", self.base_url);
        let headers = Self::create_auth_headers(token)?;
        let body = AmountRequest { amount };

        let response = self
            .http_client
            .post(&url)
            .headers(headers)
            .json(&body)
            .send()
            .await
            .map_err(|e| ApiError::RequestError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(Self::handle_error_response(status, response).await);
        }

        response
            .json::<MessageResponse>()
            .await
            .map_err(|e| ApiError::DeserializationError(format!("Failed to parse response: {}", e)))
    }

    /// POST /withdraw
    pub async fn withdraw(&self, token: &str, amount: f64) -> Result<MessageResponse, ApiError> {
        let url = format!("{}/withdraw", self.base_url);
        let headers = Self::create_auth_headers(token)?;
        let body = AmountRequest { amount };

        let response = self
            .http_client
            .post(&url)
            .headers(headers)
            .json(&body)
            .send()
            .await
            .map_err(|e| ApiError::RequestError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(Self::handle_error_response(status, response).await);
        }

        response
            .json::<MessageResponse>()
            .await
            .map_err(|e| ApiError::DeserializationError(format!("Failed to parse response: {}", e)))
    }

    /// POST /transfer
    pub async fn transfer(
        &self,
        token: &str,
        amount: f64,
        recipient: &str,
    ) -> Result<MessageResponse, ApiError> {
        let url = format!("{}/transfer", self.base_url);
        let headers = Self::create_auth_headers(token)?;
        let body = TransferRequest {
            amount,
            recipient: recipient.to_string(),
        };

        let response = self
            .http_client
            .post(&url)
            .headers(headers)
            .json(&body)
            .send()
            .await
            .map_err(|e| ApiError::RequestError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(Self::handle_error_response(status, response).await);
        }

        response
            .json::<MessageResponse>()
            .await
            .map_err(|e| ApiError::DeserializationError(format!("Failed to parse response: {}", e)))
    }

    /// GET /transactions
    ///
    /// Returns the account's ledger entries in the order the server sends
    /// them (most recent first); no reordering happens client-side.
    pub async fn transactions(&self, token: &str) -> Result<TransactionsResponse, ApiError> {
        let url = format!("{}/transactions", self.base_url);
        let headers = Self::create_auth_headers(token)?;

        let response = self
            .http_client
            .get(&url)
            .headers(headers)
            .send()
            .await
            .map_err(|e| ApiError::RequestError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(Self::handle_error_response(status, response).await);
        }

        response
            .json::<TransactionsResponse>()
            .await
            .map_err(|e| ApiError::DeserializationError(format!("Failed to parse response: {}", e)))
    }
}
