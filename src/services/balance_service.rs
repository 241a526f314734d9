use crate::api::bank::BankClient;
use crate::session::Session;

pub struct BalanceResult {
    pub balance: f64,
    pub formatted: String,
}

pub async fn get_balance(client: &BankClient, session: &Session) -> Result<BalanceResult, String> {
    let response = client
        .balance(session.bearer_token())
        .await
        .map_err(|e| e.to_string())?;

    Ok(BalanceResult {
        balance: response.balance,
        formatted: format_balance(response.balance),
    })
}

/// `Balance: $<value>` with the server's number as-is; the client never
/// rounds or recomputes it.
pub fn format_balance(balance: f64) -> String {
    format!("Balance: ${}", balance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_balance() {
        assert_eq!(format_balance(150.0), "Balance: $150");
        assert_eq!(format_balance(120.5), "Balance: $120.5");
        assert_eq!(format_balance(0.0), "Balance: $0");
    }
}
