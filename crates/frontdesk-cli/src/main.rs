mod commands;
mod input;
mod presenter;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::input::FormInput;

#[derive(Parser)]
#[command(name = "frontdesk")]
#[command(version, about = "Frontdesk CLI - visitor and appointment admin forms", long_about = None)]
struct Cli {
    /// Config file (defaults to ./frontdesk.toml)
    #[arg(long, global = true, env = "FRONTDESK_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the fields of a form, or list the forms
    Schema {
        /// Form name (appointment, visitor, personal-info, register)
        form: Option<String>,
    },

    /// Validate field values without submitting
    Validate {
        /// Form name
        form: String,

        #[command(flatten)]
        input: FormInput,
    },

    /// Validate and submit a form to its endpoint
    Submit {
        /// Form name
        form: String,

        #[command(flatten)]
        input: FormInput,

        /// Override the configured endpoint
        #[arg(short, long)]
        endpoint: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Logs go to stderr so command output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let ok = match cli.command {
        Commands::Schema { form } => commands::schema::execute(form.as_deref())?,
        Commands::Validate { form, input } => commands::validate::execute(&form, &input)?,
        Commands::Submit {
            form,
            input,
            endpoint,
        } => {
            commands::submit::execute(&form, &input, endpoint.as_deref(), cli.config.as_deref())
                .await?
        }
    };

    Ok(if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
