use clap::{Parser, Subcommand};

use crate::settings::DEFAULT_PATH;

/// Applies, reverts and reports the `users` table migrations.
#[derive(Debug, Parser)]
#[command(name = "users-schema", version)]
pub struct Cli {
    /// Settings file, without the `.yaml` extension
    #[arg(short, long, default_value = DEFAULT_PATH)]
    pub config: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Apply pending migrations
    Up {
        /// Number of migrations to apply, all pending if omitted
        #[arg(short = 'n', long)]
        steps: Option<u32>,
    },
    /// Revert applied migrations, newest first
    Down {
        #[arg(short = 'n', long, default_value_t = 1)]
        steps: u32,
    },
    /// List every migration and whether it has been applied
    Status,
    /// Drop all tables and apply every migration again
    Fresh,
}
