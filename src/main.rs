use clap::Parser;

use people_directory::cli::{Cli, execute_command};
use people_directory::config::init_logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging()?;

    let cli = Cli::parse();
    execute_command(cli).await
}
