//! CLI command implementations
//!
//! Each command opens the store, runs one operation, and prints the result
//! as JSON on stdout. The store is constructed here and passed by reference;
//! nothing holds it globally.

use serde_json::json;
use tracing::debug;

use crate::auth::{self, AccessTokens};
use crate::config::Config;
use crate::content;
use crate::errors::StoreError;
use crate::store::DocumentStore;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments, load config, dispatch the subcommand.
pub fn run() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse_args();
    let config = Config::load(&cli.config)?;
    debug!(config = ?cli.config, database = ?config.database_path, "configuration loaded");

    let start_fresh = matches!(cli.command, Command::Init { fresh: true });
    let store = DocumentStore::open(&config.database_path, start_fresh)?;

    run_command(&cli.command, &store, &config)
}

/// Execute a single subcommand against an open store.
pub fn run_command(command: &Command, store: &DocumentStore, config: &Config) -> CliResult<()> {
    match command {
        Command::Init { .. } => {
            print_json(&json!({
                "database_path": &config.database_path,
                "users": store.list_users()?.len(),
                "posts": store.list_posts()?.len(),
            }))
        }

        Command::AddUser { email, password } => {
            let digest = auth::hash_password(password)?;
            let user = store.create_user(email, &digest)?;
            print_json(&user)
        }

        Command::Users => print_json(&store.list_users()?),

        Command::UpdateUser {
            id,
            email,
            password,
        } => {
            let digest = auth::hash_password(password)?;
            let user = store.update_user(*id, email, &digest)?;
            print_json(&user)
        }

        Command::UpgradeUser { id } => {
            store.upgrade_user(*id)?;
            print_json(&json!({ "id": id, "upgraded": true }))
        }

        Command::Login { email, password } => {
            let auth_user = match store.auth_user_by_email(email) {
                Ok(auth_user) => auth_user,
                // Unknown email and wrong password answer identically
                Err(StoreError::NotFound) => return Err(CliError::LoginFailed),
                Err(e) => return Err(e.into()),
            };
            if !auth::verify_password(password, &auth_user.password)? {
                return Err(CliError::LoginFailed);
            }

            let signer = AccessTokens::new(&config.jwt_secret, &config.jwt_issuer);
            let access_token =
                signer.sign(&auth_user.user.id.to_string(), config.access_token_ttl_seconds)?;
            let refresh_token = store
                .issue_refresh_token(auth_user.user.id, config.refresh_token_ttl_seconds)?;

            print_json(&json!({
                "user": auth_user.user,
                "access_token": access_token,
                "refresh_token": refresh_token.token,
                "refresh_expires_at": refresh_token.expires_at,
            }))
        }

        Command::Refresh { token } => {
            let refresh_token = store.validate_refresh_token(token)?;
            let signer = AccessTokens::new(&config.jwt_secret, &config.jwt_issuer);
            let access_token = signer.sign(
                &refresh_token.user_id.to_string(),
                config.access_token_ttl_seconds,
            )?;
            print_json(&json!({ "access_token": access_token }))
        }

        Command::Revoke { token } => {
            store.revoke_refresh_token(token)?;
            print_json(&json!({ "revoked": true }))
        }

        Command::Post { author_id, body } => {
            content::validate_body(body)?;
            let post = store.create_post(&content::clean_body(body), *author_id)?;
            print_json(&post)
        }

        Command::Posts => print_json(&store.list_posts()?),

        Command::GetPost { id } => print_json(&store.get_post(*id)?),

        Command::DeletePost { id } => {
            store.delete_post(*id)?;
            print_json(&json!({ "deleted": id }))
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
