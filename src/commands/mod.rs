pub mod balance;
pub mod deposit;
pub mod help;
pub mod login;
pub mod register;
pub mod transactions;
pub mod transfer;
pub mod withdraw;

use lazy_static::lazy_static;
use tracing::error;

use crate::api::bank::BankClient;
use crate::services::balance_service;
use crate::session::Session;

/// One entry in the command catalog, used by dispatch aliases and the
/// panel-aware help listing
pub struct CommandSpec {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub usage: &'static str,
    pub summary: &'static str,
    /// Whether the call carries the bearer token (and is listed on the
    /// banking panel)
    pub authenticated: bool,
}

lazy_static! {
    pub static ref COMMANDS: Vec<CommandSpec> = vec![
        CommandSpec {
            name: "register",
            aliases: &[],
            usage: "register <username> <password>",
            summary: "Create a new account",
            authenticated: false,
        },
        CommandSpec {
            name: "login",
            aliases: &[],
            usage: "login <username> <password>",
            summary: "Log in and switch to the banking panel",
            authenticated: false,
        },
        CommandSpec {
            name: "balance",
            aliases: &["bal"],
            usage: "balance",
            summary: "Show the current balance",
            authenticated: true,
        },
        CommandSpec {
            name: "deposit",
            aliases: &["dep"],
            usage: "deposit <amount>",
            summary: "Deposit funds",
            authenticated: true,
        },
        CommandSpec {
            name: "withdraw",
            aliases: &["wd"],
            usage: "withdraw <amount>",
            summary: "Withdraw funds",
            authenticated: true,
        },
        CommandSpec {
            name: "transfer",
            aliases: &["send"],
            usage: "transfer <amount> <recipient>",
            summary: "Transfer funds to another user",
            authenticated: true,
        },
        CommandSpec {
            name: "transactions",
            aliases: &["tx", "history"],
            usage: "transactions [table]",
            summary: "List the account's transactions",
            authenticated: true,
        },
    ];
}

/// Whether the command loop should keep reading lines
pub enum LoopControl {
    Continue,
    Quit,
}

/// Parse one typed line and run the matching command.
///
/// Commands are never gated on login state; an authenticated call before
/// login simply goes out with an empty bearer token and the server answers
/// accordingly.
pub async fn handle_line(client: &BankClient, session: &mut Session, line: &str) -> LoopControl {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.is_empty() {
        return LoopControl::Continue;
    }

    let command = parts[0].to_lowercase();
    let args = &parts[1..];

    let result = match command.as_str() {
        "register" => register::execute(client, args).await,
        "login" => login::execute(client, session, args).await,
        "balance" | "bal" => balance::execute(client, session).await,
        "deposit" | "dep" => deposit::execute(client, session, args).await,
        "withdraw" | "wd" => withdraw::execute(client, session, args).await,
        "transfer" | "send" => transfer::execute(client, session, args).await,
        "transactions" | "tx" | "history" => transactions::execute(client, session, args).await,
        "help" | "?" => help::execute(session),
        "quit" | "exit" => return LoopControl::Quit,
        _ => {
            println!("Unknown command: {} (try `help`)", command);
            return LoopControl::Continue;
        }
    };

    if let Err(e) = result {
        error!("Error executing command {}: {}", command, e);
        println!("❌ {}", e);
    }

    LoopControl::Continue
}

/// Every funds operation ends with a fresh GET /balance, the same follow-up
/// the page this client replaces triggered after deposits, withdrawals and
/// transfers.
pub(crate) async fn print_refreshed_balance(client: &BankClient, session: &Session) {
    match balance_service::get_balance(client, session).await {
        Ok(result) => println!("{}", result.formatted),
        Err(e) => println!("❌ Failed to refresh balance: {}", e),
    }
}
