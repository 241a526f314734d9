use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Request body for POST /register and POST /login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

/// Generic `{msg}` response returned by most endpoints.
///
/// Deposit, withdraw and transfer also echo the updated balance next to the
/// message; the client never does arithmetic with it, the displayed balance
/// always comes from a follow-up GET /balance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub msg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<f64>,
}

/// Response from POST /login
///
/// A successful login carries `access_token` and no `msg`; a rejected one
/// carries `msg` only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
}

/// Response from GET /balance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceResponse {
    pub balance: f64,
}

/// Request body for POST /deposit and POST /withdraw
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmountRequest {
    pub amount: f64,
}

/// Request body for POST /transfer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferRequest {
    pub amount: f64,
    pub recipient: String,
}

/// A single ledger entry from GET /transactions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRecord {
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: f64,
    #[serde(default)]
    pub description: Option<String>,
    pub timestamp: String,
}

/// Response from GET /transactions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionsResponse {
    pub transactions: Vec<TransactionRecord>,
}

/// Error body the backend sends alongside non-2xx statuses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub msg: Option<String>,
}

/// Comprehensive error type for API operations
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// 400 Bad Request
    #[error("Bad Request: {0}")]
    BadRequest(String),
    /// 401 Unauthorized (bad credentials or missing/expired token)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    /// 403 Forbidden
    #[error("Forbidden: {0}")]
    Forbidden(String),
    /// 404 Not Found (unknown account or recipient)
    #[error("Not Found: {0}")]
    NotFound(String),
    /// 409 Conflict (registering a username that already exists)
    #[error("Conflict: {0}")]
    Conflict(String),
    /// 5xx Server Error
    #[error("Server Error ({0}): {1}")]
    ServerError(i32, String),
    /// Other HTTP errors
    #[error("HTTP Error ({0}): {1}")]
    HttpError(i32, String),
    /// Network/request error
    #[error("Request Error: {0}")]
    RequestError(String),
    /// Deserialization error
    #[error("Deserialization Error: {0}")]
    DeserializationError(String),
}

impl ApiError {
    /// The server's own message, when the backend sent one.
    ///
    /// Status-mapped variants carry the `msg` field extracted from the error
    /// body, which is what the user should see. Network and decode failures
    /// have no server message.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::BadRequest(msg)
            | ApiError::Unauthorized(msg)
            | ApiError::Forbidden(msg)
            | ApiError::NotFound(msg)
            | ApiError::Conflict(msg)
            | ApiError::ServerError(_, msg)
            | ApiError::HttpError(_, msg) => Some(msg),
            ApiError::RequestError(_) | ApiError::DeserializationError(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_with_token() {
        let json = r#"{"access_token": "abc.def.ghi"}"#;
        let resp: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.access_token.as_deref(), Some("abc.def.ghi"));
        assert!(resp.msg.is_none());
    }

    #[test]
    fn test_login_response_rejected() {
        let json = r#"{"msg": "Bad username or password"}"#;
        let resp: LoginResponse = serde_json::from_str(json).unwrap();
        assert!(resp.access_token.is_none());
        assert_eq!(resp.msg.as_deref(), Some("Bad username or password"));
    }

    #[test]
    fn test_message_response_with_balance() {
        let json = r#"{"msg": "Deposited 50.0", "balance": 150.0}"#;
        let resp: MessageResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.msg, "Deposited 50.0");
        assert_eq!(resp.balance, Some(150.0));
    }

    #[test]
    fn test_transaction_record_type_field() {
        let json = r#"{
            "type": "deposit",
            "amount": 50.0,
            "description": "Deposit of 50.0",
            "timestamp": "Tue, 02 Jan 2024 10:00:00 GMT"
        }"#;
        let tx: TransactionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(tx.kind, "deposit");
        assert_eq!(tx.amount, 50.0);
        assert_eq!(tx.description.as_deref(), Some("Deposit of 50.0"));
    }

    #[test]
    fn test_transaction_record_null_description() {
        let json = r#"{"type": "withdraw", "amount": 5, "description": null, "timestamp": "x"}"#;
        let tx: TransactionRecord = serde_json::from_str(json).unwrap();
        assert!(tx.description.is_none());
    }

    #[test]
    fn test_server_message_extraction() {
        let err = ApiError::NotFound("Recipient not found".to_string());
        assert_eq!(err.server_message(), Some("Recipient not found"));

        let err = ApiError::RequestError("connection refused".to_string());
        assert!(err.server_message().is_none());
    }
}
