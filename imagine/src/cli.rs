use clap::{CommandFactory, error::ErrorKind};
use engine::{RequestArgs, UsageError};

/// Generate image using OpenAI DALL·E.
#[derive(Debug, clap::Parser)]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub request: RequestArgs,
}

impl Cli {
    /// Wraps a validation failure so it is reported like any other argument
    /// error: usage on stderr, exit status 2.
    pub fn usage_error(err: &UsageError) -> clap::Error {
        let kind = match err {
            UsageError::MissingApiKey | UsageError::MissingPrompt => {
                ErrorKind::MissingRequiredArgument
            }
            UsageError::NumberNotNumeric | UsageError::NumberOutOfRange => {
                ErrorKind::ValueValidation
            }
        };
        Cli::command().error(kind, err)
    }
}
