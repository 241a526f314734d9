use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod api;
mod commands;
mod config;
mod services;
mod session;
mod utils;

use api::bank::BankClient;
use commands::LoopControl;
use config::Config;
use session::{Panel, Session};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("teller=debug".parse().unwrap()),
        )
        .with_target(true)
        .init();

    let config = Config::from_env();
    info!("Starting teller...");
    info!("Banking service at {}", config.base_url);

    let client = BankClient::new(config.base_url);
    let mut session = Session::new();

    println!("teller - terminal client for the demo banking service");
    println!("Type `help` for the command list, `quit` to leave.");

    let stdin = tokio::io::stdin();
    let mut lines = BufReader::new(stdin).lines();
    let mut stdout = tokio::io::stdout();

    loop {
        let prompt = match session.panel() {
            Panel::LoginRegister => "login> ",
            Panel::Banking => "bank> ",
        };
        if stdout.write_all(prompt.as_bytes()).await.is_err() {
            break;
        }
        if stdout.flush().await.is_err() {
            break;
        }

        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            // stdin closed
            Ok(None) => break,
            Err(e) => {
                error!("Failed to read input: {}", e);
                break;
            }
        };

        if let LoopControl::Quit = commands::handle_line(&client, &mut session, &line).await {
            break;
        }
    }

    info!("Session ended");
}
