//
//  clumio-sdk
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use clumio_sdk::api::ApiError;
use clumio_sdk::cli::{Cli, Commands, NotAuthenticated};
use clumio_sdk::exit_codes;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_code(&e));
        }
    }
}

/// Initialize logging from `CLUMIO_DEBUG` (e.g. `CLUMIO_DEBUG=clumio_sdk=debug`)
fn init_logging() {
    let filter = EnvFilter::try_from_env("CLUMIO_DEBUG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn exit_code(error: &anyhow::Error) -> i32 {
    if error.downcast_ref::<NotAuthenticated>().is_some() {
        return exit_codes::AUTH_ERROR;
    }

    match error.downcast_ref::<ApiError>().and_then(ApiError::status) {
        Some(status) if status.as_u16() == 401 || status.as_u16() == 403 => exit_codes::AUTH_ERROR,
        Some(status) if status.as_u16() == 404 => exit_codes::NOT_FOUND,
        Some(status) if status.as_u16() == 429 => exit_codes::RATE_LIMIT,
        _ => exit_codes::ERROR,
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Api(cmd) => cmd.run(&cli.global).await,
        Commands::Policy(cmd) => cmd.run(&cli.global).await,
        Commands::Rule(cmd) => cmd.run(&cli.global).await,
        Commands::Ou(cmd) => cmd.run(&cli.global).await,
        Commands::Task(cmd) => cmd.run(&cli.global).await,
        Commands::Report(cmd) => cmd.run(&cli.global).await,
        Commands::Connection(cmd) => cmd.run(&cli.global).await,
        Commands::User(cmd) => cmd.run(&cli.global).await,
        Commands::Audit(cmd) => cmd.run(&cli.global).await,
        Commands::Schema(cmd) => cmd.run(&cli.global).await,
        Commands::Auth(cmd) => cmd.run(&cli.global).await,
        Commands::Config(cmd) => cmd.run(&cli.global).await,
        Commands::Completion(cmd) => cmd.run(&cli.global).await,
        Commands::Version => {
            println!("{} version {}", clumio_sdk::APP_NAME, clumio_sdk::VERSION);
            Ok(())
        }
    }
}
