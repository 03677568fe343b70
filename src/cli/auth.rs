//
//  clumio-sdk
//  cli/auth.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Authentication commands.
//!
//! Tokens are stored in the system keyring per base path, so each Clumio region keeps its
//! own login. `CLUMIO_API_TOKEN` takes precedence over anything stored.

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use console::{style, Term};

use crate::api::{ClumioClient, ListParams};
use crate::auth::{
    read_token_from_stdin, resolve_token, validate_token, ApiToken, KeyringStore, TOKEN_ENV_VAR,
};
use crate::config::region_for_base_path;

use super::GlobalOptions;

/// Authenticate with Clumio.
#[derive(Args, Debug)]
pub struct AuthCommand {
    #[command(subcommand)]
    pub command: AuthSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AuthSubcommand {
    /// Store an API token for the current base path
    Login(LoginArgs),

    /// Remove the stored token for the current base path
    Logout,

    /// View authentication status
    Status,

    /// Print the authentication token
    Token,
}

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Read token from standard input
    #[arg(long)]
    pub with_token: bool,

    /// Store the token without checking it against the API
    #[arg(long)]
    pub no_verify: bool,
}

impl AuthCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            AuthSubcommand::Login(args) => login(args, global).await,
            AuthSubcommand::Logout => logout(global),
            AuthSubcommand::Status => status(global),
            AuthSubcommand::Token => token(global),
        }
    }
}

/// Normalized base path used as the keyring key.
fn base_path(global: &GlobalOptions) -> Result<String> {
    let config = global.config()?;
    let client = ClumioClient::from_config(&config)?;
    Ok(client.base_path().as_str().to_string())
}

async fn login(args: &LoginArgs, global: &GlobalOptions) -> Result<()> {
    let config = global.config()?;
    let client = ClumioClient::from_config(&config)?;
    let base_path = client.base_path().as_str().to_string();

    let token = if args.with_token {
        read_token_from_stdin()?
    } else {
        eprintln!("Generate a token in the Clumio UI under Settings > API Tokens.");
        Term::stderr()
            .write_str("API token: ")
            .and_then(|_| Term::stderr().read_secure_line())
            .context("Failed to read token")?
            .trim()
            .to_string()
    };
    validate_token(&token)?;

    if !args.no_verify {
        eprintln!("Validating token...");
        let probe = client.with_auth(ApiToken::new(token.as_str())).with_raw_response(false);
        if let Err(e) = probe
            .organizational_units()
            .list(&ListParams::new().limit(1))
            .await
        {
            if e.is_auth_error() {
                bail!("Token was rejected by {}", base_path);
            }
            return Err(e).context("Could not validate token");
        }
    }

    KeyringStore::new().store(&base_path, &token)?;
    global
        .writer()
        .write_success(&format!("Logged in to {}", display_target(&base_path)));

    if std::env::var(TOKEN_ENV_VAR).is_ok() {
        global.writer().write_warning(&format!(
            "{} is set and takes precedence over the stored token",
            TOKEN_ENV_VAR
        ));
    }
    Ok(())
}

fn logout(global: &GlobalOptions) -> Result<()> {
    let base_path = base_path(global)?;
    let keyring = KeyringStore::new();

    if keyring.get(&base_path)?.is_none() {
        global
            .writer()
            .write_info(&format!("Not logged in to {}", display_target(&base_path)));
        return Ok(());
    }

    keyring.delete(&base_path)?;
    global
        .writer()
        .write_success(&format!("Logged out of {}", display_target(&base_path)));
    Ok(())
}

fn status(global: &GlobalOptions) -> Result<()> {
    let config = global.config()?;
    let base_path = base_path(global)?;

    let env_token = std::env::var(TOKEN_ENV_VAR)
        .ok()
        .filter(|t| !t.trim().is_empty());
    let (source, token) = match env_token {
        Some(token) => (TOKEN_ENV_VAR.to_string(), Some(ApiToken::new(token.trim()))),
        None => ("keyring".to_string(), resolve_token(&base_path)),
    };

    if global.json {
        let value = serde_json::json!({
            "base_path": base_path,
            "region": region_for_base_path(&base_path),
            "organizational_unit": config.core.organizational_unit,
            "authenticated": token.is_some(),
            "source": token.as_ref().map(|_| source.as_str()),
        });
        return crate::output::write_json(&value);
    }

    println!("{}", style(display_target(&base_path)).bold());
    if let Some(ou) = &config.core.organizational_unit {
        println!("  Organizational unit: {}", ou);
    }
    match token {
        Some(token) => {
            println!("  Status: {}", style("Logged in").green());
            println!("  Token: {} (from {})", token.redacted(), source);
        }
        None => {
            println!("  Status: {}", style("Not logged in").red());
            println!();
            println!("Run 'clumio auth login' to authenticate");
        }
    }
    Ok(())
}

fn token(global: &GlobalOptions) -> Result<()> {
    let base_path = base_path(global)?;
    let token = resolve_token(&base_path)
        .ok_or_else(|| anyhow::anyhow!("No token found for {}", display_target(&base_path)))?;

    // Bare token on stdout for piping.
    println!("{}", token.as_str());
    Ok(())
}

/// `host (region)` when the base path is a known region, otherwise the base path.
fn display_target(base_path: &str) -> String {
    let trimmed = base_path.trim_end_matches('/');
    match region_for_base_path(base_path) {
        Some(region) => format!("{} ({})", trimmed, region),
        None => trimmed.to_string(),
    }
}
