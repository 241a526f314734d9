use crate::api::bank::BankClient;
use crate::services::funds_service::{self, FundsOutcome};
use crate::session::Session;

pub async fn execute(
    client: &BankClient,
    session: &Session,
    args: &[&str],
) -> Result<(), String> {
    if args.len() != 1 {
        println!("Usage: deposit <amount>");
        return Ok(());
    }

    let amount: f64 = args[0]
        .parse()
        .map_err(|_| format!("Invalid amount: {}", args[0]))?;

    match funds_service::deposit(client, session, amount).await? {
        FundsOutcome::Accepted { message, .. } => println!("{}", message),
        FundsOutcome::Declined(msg) => println!("{}", msg),
    }

    super::print_refreshed_balance(client, session).await;

    Ok(())
}
