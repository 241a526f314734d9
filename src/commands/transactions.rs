use crate::api::bank::BankClient;
use crate::services::transaction_service;
use crate::session::Session;

pub async fn execute(
    client: &BankClient,
    session: &Session,
    args: &[&str],
) -> Result<(), String> {
    let as_table = match args.first() {
        None => false,
        Some(&"table") => true,
        Some(other) => {
            println!("Usage: transactions [table] (got `{}`)", other);
            return Ok(());
        }
    };

    let records = transaction_service::list_transactions(client, session).await?;

    if records.is_empty() {
        println!("No transactions found");
        return Ok(());
    }

    if as_table {
        println!("{}", transaction_service::build_table(&records));
    } else {
        for tx in &records {
            println!("{}", transaction_service::format_record(tx));
        }
    }

    Ok(())
}
