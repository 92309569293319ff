use std::{env, io, process::ExitCode};

use clap::Parser;
use color_eyre::Result;
use engine::image_model::OpenAIImages;
use imagine::{cli::Cli, load_config, runner};
use log::debug;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    pretty_env_logger::init();
    color_eyre::install()?;

    let cli = Cli::parse();
    let request = match cli.request.resolve(env::var("OPENAI_API_KEY").ok()) {
        Ok(request) => request,
        Err(e) => Cli::usage_error(&e).exit(),
    };

    let config = load_config()?.unwrap_or_default();
    let endpoint = config.endpoint(
        env::var("OPENAI_API_BASE").ok(),
        env::var("OPENAI_ORGANIZATION").ok(),
    );
    debug!("Using endpoint: {endpoint:#?}");

    let model = OpenAIImages::new(endpoint);
    let status = runner::run(&model, &request, &mut io::stdout(), &mut io::stderr()).await?;
    Ok(ExitCode::from(status))
}
