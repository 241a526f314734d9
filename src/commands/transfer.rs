use crate::api::bank::BankClient;
use crate::services::funds_service::{self, FundsOutcome};
use crate::session::Session;

pub async fn execute(
    client: &BankClient,
    session: &Session,
    args: &[&str],
) -> Result<(), String> {
    if args.len() != 2 {
        println!("Usage: transfer <amount> <recipient>");
        return Ok(());
    }

    let amount: f64 = args[0]
        .parse()
        .map_err(|_| format!("Invalid amount: {}", args[0]))?;
    let recipient = args[1];

    match funds_service::transfer(client, session, amount, recipient).await? {
        FundsOutcome::Accepted { message, .. } => println!("{}", message),
        // Unknown recipient, insufficient funds: show the server's words,
        // then let the refreshed balance speak for itself
        FundsOutcome::Declined(msg) => println!("{}", msg),
    }

    super::print_refreshed_balance(client, session).await;

    Ok(())
}
