use clap::Parser;
use mentor_cli::Cli;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    mentor_cli::run(cli).await
}
