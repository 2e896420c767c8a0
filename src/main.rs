use clap::Parser;
use std::path::Path;
use std::sync::Arc;

mod api;
mod cli;
mod complexity;
mod core;
mod crypto;
mod db;
mod generators;
mod models;
mod rules;

use crate::cli::Args;
use crate::core::config::Config;
use crate::core::service::PasswordService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .init();

    log::info!("🔒 Starting PassForge - password generation service");

    let db = match db::init_db(&args.db).await {
        Ok(db) => {
            log::info!("✅ Connected to {} store", db.get_backend_type());
            db
        }
        Err(e) => {
            eprintln!("❌ Database connection failed: {e}");
            eprintln!("Troubleshooting:");
            eprintln!("• For SQLite: is the path writable?");
            eprintln!("• Use --db or set DATABASE_URL in `.env`");
            return Ok(());
        }
    };

    let db = Arc::new(db);
    let service = Arc::new(PasswordService::new(Arc::clone(&db)));

    let api_port = args.api_port.unwrap_or(config.web_port);

    api::start_server(service, api_port).await?;

    log::info!("✅ PassForge shutdown complete.");
    Ok(())
}
