use crate::api::bank::BankClient;
use crate::services::balance_service;
use crate::session::Session;

pub async fn execute(client: &BankClient, session: &Session) -> Result<(), String> {
    let result = balance_service::get_balance(client, session).await?;
    println!("{}", result.formatted);

    Ok(())
}
