use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod cli;
mod error;
mod runner;
mod settings;

use cli::{Cli, Command};
use runner::Runner;
use settings::Settings;

// sqlx logs every statement at info
fn log_directives(level: &str) -> String {
    format!("{},sqlx=warn", level)
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_directives(level)));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run(command: Command, settings: &Settings) -> error::Result<()> {
    let runner = Runner::connect(&settings.database.db_url()).await?;

    match command {
        Command::Up { steps } => runner.up(steps).await,
        Command::Down { steps } => runner.down(steps).await,
        Command::Fresh => runner.fresh().await,
        Command::Status => {
            for row in runner.status().await? {
                info!("{}", row);
            }
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match Settings::new(&cli.config) {
        Ok(settings) => settings,
        Err(err) => {
            init_tracing("info");
            let err = error::Error::from(err);
            error!(kind = err.kind.label(), "failed to read configuration: {}", err);
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&settings.log_level);

    match run(cli.command, &settings).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(kind = err.kind.label(), "{}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statement_logging_is_quiet_by_default() {
        let directives = log_directives("info");
        assert_eq!(directives, "info,sqlx=warn");
        assert!(EnvFilter::try_new(&directives).is_ok());
        assert!(EnvFilter::try_new(log_directives("debug")).is_ok());
    }
}
