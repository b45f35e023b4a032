mod server_config;
mod web_server;
mod ws_handler;

use clap::Parser;
use common::{log, logger};

use server_config::ServerConfig;
use web_server::run_web_server;

#[derive(Parser)]
#[command(name = "tictactoe_server")]
struct Args {
    #[arg(long)]
    config: Option<String>,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Server".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = ServerConfig::load(args.config.as_deref())?;

    let shutdown_signal = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to listen for Ctrl+C");
        log!("Shutdown signal received");
    };

    run_web_server(config, shutdown_signal).await?;

    log!("Server shut down gracefully");

    Ok(())
}
