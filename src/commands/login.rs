use crate::api::bank::BankClient;
use crate::services::auth_service::{self, LoginOutcome};
use crate::session::Session;

pub async fn execute(
    client: &BankClient,
    session: &mut Session,
    args: &[&str],
) -> Result<(), String> {
    if args.len() != 2 {
        println!("Usage: login <username> <password>");
        return Ok(());
    }

    match auth_service::login(client, session, args[0], args[1]).await? {
        LoginOutcome::LoggedIn => {
            println!("✅ Logged in as {}. Banking commands are now listed under `help`.", args[0]);
        }
        LoginOutcome::Rejected(msg) => {
            // Stay on the login panel; the server's message is the whole story
            println!("{}", msg);
        }
    }

    Ok(())
}
