use clap::Parser;

#[tokio::main]
async fn main() {
    envboard::meta::mark_process_start();

    // Load ./.env before clap reads env-backed flags; existing vars win
    let _ = dotenvy::dotenv();

    let cli = envboard::cli::Cli::parse();
    if let Err(e) = envboard::cmd::dispatch(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
