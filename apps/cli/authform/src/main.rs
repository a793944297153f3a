//! `authform`: log in or sign up against the account API from the terminal.
//!
//! Exit codes: 0 on success, 2 when the form does not validate, 1 when the
//! server rejects the submit or anything else fails.

use authform::commands::{SubmitOutcome, login, signup};
use authform::error::AuthformError;
use authform::factory::{
    make_local_save_access_token, make_remote_add_account, make_remote_authentication,
};
use authform::logger;

use client_core::config::ClientConfig;

use common::{ErrorLocation, RedactedSecret};
use models::AddAccountParams;

use std::panic::Location;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::{error, info};

const APP_DIRECTORY_NAME: &str = "authform";
const LOG_DIRECTORY_NAME: &str = "logs";

const EXIT_REJECTED: u8 = 1;
const EXIT_INVALID_FORM: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "authform", version, about = "Log in or sign up against the account API")]
struct Cli {
    /// Directory holding config.toml.
    #[arg(long, env = "AUTHFORM_CONFIG_DIR")]
    config_dir: Option<PathBuf>,

    /// Directory the log file is written to.
    #[arg(long, env = "AUTHFORM_LOG_DIR")]
    log_dir: Option<PathBuf>,

    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Authenticate with email and password.
    Login {
        #[arg(long)]
        email: String,

        #[arg(long, env = "AUTHFORM_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Create an account.
    Signup {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long, env = "AUTHFORM_PASSWORD", hide_env_values = true)]
        password: String,

        #[arg(long)]
        password_confirmation: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            error!("{e}");
            eprintln!("{e}");
            ExitCode::from(EXIT_REJECTED)
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode, AuthformError> {
    let log_dir = match cli.log_dir {
        Some(dir) => dir,
        None => default_log_dir()?,
    };
    std::fs::create_dir_all(&log_dir).map_err(|e| AuthformError::Authform {
        message: format!("Failed to create log directory {}: {e}", log_dir.display()),
        location: ErrorLocation::from(Location::caller()),
    })?;
    logger::initialize(&log_dir, logger::level_for(cli.verbose))?;

    let config_dir = match cli.config_dir {
        Some(dir) => dir,
        None => ClientConfig::default_config_dir()?,
    };
    let mut config = ClientConfig::load(&config_dir)?;
    config.apply_env_overrides()?;
    info!("Using API at {}", config.api.base_url);

    let save_access_token = make_local_save_access_token(&config);

    let outcome = match cli.command {
        Commands::Login { email, password } => {
            let authentication = make_remote_authentication(&config)?;
            login(
                &authentication,
                &save_access_token,
                email,
                RedactedSecret::from(password),
            )
            .await?
        }
        Commands::Signup {
            name,
            email,
            password,
            password_confirmation,
        } => {
            let add_account = make_remote_add_account(&config)?;
            let params = AddAccountParams {
                name,
                email,
                password: RedactedSecret::from(password),
                password_confirmation: RedactedSecret::from(password_confirmation),
            };
            signup(&add_account, &save_access_token, params).await?
        }
    };

    Ok(report(outcome, &config))
}

fn report(outcome: SubmitOutcome, config: &ClientConfig) -> ExitCode {
    match outcome {
        SubmitOutcome::Invalid(errors) => {
            for field_error in errors {
                eprintln!("{}: {}", field_error.field, field_error.message);
            }
            ExitCode::from(EXIT_INVALID_FORM)
        }
        SubmitOutcome::Rejected(e) => {
            eprintln!("{}", e.message());
            ExitCode::from(EXIT_REJECTED)
        }
        SubmitOutcome::Authenticated => {
            println!("Access token saved to {}", config.storage.path.display());
            ExitCode::SUCCESS
        }
    }
}

#[track_caller]
fn default_log_dir() -> Result<PathBuf, AuthformError> {
    dirs::data_local_dir()
        .map(|dir| dir.join(APP_DIRECTORY_NAME).join(LOG_DIRECTORY_NAME))
        .ok_or_else(|| AuthformError::Authform {
            message: String::from("No platform data directory for logs"),
            location: ErrorLocation::from(Location::caller()),
        })
}
