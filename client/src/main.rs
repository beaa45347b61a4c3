mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Args;
use hackrx_client::output::{render_error, render_outcome};
use hackrx_client::{ClientConfig, ClientError, OutputFormat, QueryClient, QueryOutcome};
use std::io;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize environment variables and logging
    dotenv::dotenv().ok();
    env_logger::init();

    let args = Args::parse();

    match ask(&args).await {
        Ok(outcome) => {
            if args.output == OutputFormat::Text {
                println!();
            }
            render_outcome(&mut io::stdout().lock(), &outcome, args.output)?;
            Ok(())
        }
        Err(err) => {
            render_error(&mut io::stderr().lock(), &err)?;
            std::process::exit(1);
        }
    }
}

async fn ask(args: &Args) -> Result<QueryOutcome, ClientError> {
    let config = ClientConfig::from_env(args.overrides())?;
    let client = QueryClient::new(config)?;

    if args.output == OutputFormat::Text {
        println!("Sending request to API...");
    }
    client.ask(&args.document, &args.questions()).await
}
