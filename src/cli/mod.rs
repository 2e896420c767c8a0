// src/cli/mod.rs
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Database URL
    #[arg(long, short, env = "DATABASE_URL", default_value = "sqlite:./data/passforge.db")]
    pub db: String,

    /// API server port
    #[arg(long)]
    pub api_port: Option<u16>,
}
