use crate::api::bank::BankClient;
use crate::services::auth_service;

pub async fn execute(client: &BankClient, args: &[&str]) -> Result<(), String> {
    if args.len() != 2 {
        println!("Usage: register <username> <password>");
        return Ok(());
    }

    let result = auth_service::register(client, args[0], args[1]).await?;
    println!("{}", result.message);

    Ok(())
}
