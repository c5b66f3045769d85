use game_cli::config::Config;
use game_cli::render::Screen;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {:#}", e);
            std::process::exit(1);
        }
    };

    // Logs go to stderr so they never interleave with the game screen
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(config.log_level)
        .init();

    info!("Starting Word Scramble Challenge...");

    let code = tokio::select! {
        result = game_cli::run(config) => match result {
            Ok(()) => 0,
            Err(e) => {
                error!("Game aborted: {:#}", e);
                eprintln!("An error occurred: {:#}", e);
                1
            }
        },
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down...");
            let _ = Screen::new(std::io::stdout()).goodbye();
            0
        }
    };

    // The stdin reader thread may still be blocked on a read; exit without waiting for it
    std::process::exit(code);
}
