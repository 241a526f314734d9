use crate::api::bank::models::{ApiError, MessageResponse};
use crate::api::bank::BankClient;
use crate::session::Session;

/// Outcome of a deposit/withdraw/transfer the server actually answered
pub enum FundsOutcome {
    /// 2xx: the server's message, plus the updated balance when it echoes one
    Accepted {
        message: String,
        balance: Option<f64>,
    },
    /// Non-2xx with a server message (insufficient funds, unknown recipient, ...)
    Declined(String),
}

pub async fn deposit(
    client: &BankClient,
    session: &Session,
    amount: f64,
) -> Result<FundsOutcome, String> {
    outcome(client.deposit(session.bearer_token(), amount).await)
}

pub async fn withdraw(
    client: &BankClient,
    session: &Session,
    amount: f64,
) -> Result<FundsOutcome, String> {
    outcome(client.withdraw(session.bearer_token(), amount).await)
}

pub async fn transfer(
    client: &BankClient,
    session: &Session,
    amount: f64,
    recipient: &str,
) -> Result<FundsOutcome, String> {
    outcome(
        client
            .transfer(session.bearer_token(), amount, recipient)
            .await,
    )
}

/// Fold the API result into an outcome. A response with a server message is
/// an answer to show the user; only network and decode failures stay hard
/// errors.
fn outcome(result: Result<MessageResponse, ApiError>) -> Result<FundsOutcome, String> {
    match result {
        Ok(resp) => Ok(FundsOutcome::Accepted {
            message: resp.msg,
            balance: resp.balance,
        }),
        Err(e) => match e.server_message() {
            Some(msg) => Ok(FundsOutcome::Declined(msg.to_string())),
            None => Err(e.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_is_accepted() {
        let result = outcome(Ok(MessageResponse {
            msg: "Deposited 50.0".to_string(),
            balance: Some(150.0),
        }));

        match result {
            Ok(FundsOutcome::Accepted { message, balance }) => {
                assert_eq!(message, "Deposited 50.0");
                assert_eq!(balance, Some(150.0));
            }
            _ => panic!("expected Accepted"),
        }
    }

    #[test]
    fn test_server_rejection_is_declined() {
        let result = outcome(Err(ApiError::NotFound("Recipient not found".to_string())));

        match result {
            Ok(FundsOutcome::Declined(msg)) => assert_eq!(msg, "Recipient not found"),
            _ => panic!("expected Declined"),
        }
    }

    #[test]
    fn test_network_failure_is_an_error() {
        let result = outcome(Err(ApiError::RequestError(
            "connection refused".to_string(),
        )));
        assert!(result.is_err());
    }
}
