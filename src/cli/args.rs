//! CLI argument definitions using clap
//!
//! One-shot subcommands only: each invocation opens the store, performs a
//! single operation, prints the result as JSON, and exits.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// nestdb - An embedded, concurrency-safe document store
#[derive(Parser, Debug)]
#[command(name = "nestdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./nestdb.config.json")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the snapshot file (or verify it opens)
    Init {
        /// Discard any existing snapshot file first
        #[arg(long)]
        fresh: bool,
    },

    /// Create a user
    AddUser {
        email: String,
        password: String,
    },

    /// List users, ascending by ID
    Users,

    /// Replace a user's email and password
    UpdateUser {
        id: i64,
        email: String,
        password: String,
    },

    /// Mark a user as upgraded
    UpgradeUser { id: i64 },

    /// Verify credentials, print an access token and a refresh token
    Login {
        email: String,
        password: String,
    },

    /// Exchange a refresh token for a fresh access token
    Refresh { token: String },

    /// Revoke a refresh token
    Revoke { token: String },

    /// Create a post
    Post {
        author_id: i64,
        body: String,
    },

    /// List posts, ascending by ID
    Posts,

    /// Look up a single post
    GetPost { id: i64 },

    /// Delete a post
    DeletePost { id: i64 },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
