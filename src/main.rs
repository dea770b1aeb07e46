use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::error;

use nexus_resource::check::{CheckCommand, CheckRequest, CheckResponse};
use nexus_resource::config::log_dir;
use nexus_resource::logging;
use nexus_resource::version::registries::{Credentials, NexusRegistry};

#[derive(Parser)]
#[command(name = "check")]
#[command(
    version,
    about = "Reports new versions of a Nexus artifact; reads the request as JSON on stdin"
)]
struct Cli {
    /// Directory for the log file (defaults to $NEXUS_RESOURCE_LOG_DIR or the temp dir)
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let request: CheckRequest =
        serde_json::from_reader(io::stdin().lock()).context("reading request from stdin")?;

    let dir = cli.log_dir.unwrap_or_else(log_dir);
    // Logging is best effort
    let _guard = logging::init(&dir, request.source.debug)
        .inspect_err(|e| eprintln!("warning: logging disabled: {:#}", e))
        .ok();

    respond(&request).inspect_err(|e| error!("{:#}", e))
}

fn respond(request: &CheckRequest) -> anyhow::Result<()> {
    let response = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(check(request))
        .context("running command")?;

    let mut stdout = io::stdout().lock();
    serde_json::to_writer(&mut stdout, &response).context("writing response to stdout")?;
    writeln!(stdout).context("writing response to stdout")?;

    Ok(())
}

async fn check(request: &CheckRequest) -> anyhow::Result<CheckResponse> {
    let source = &request.source;
    source.validate()?;

    let credentials = Credentials {
        username: source.username.clone(),
        password: source.password.clone(),
    };
    let registry = NexusRegistry::new(&source.url, credentials, source.timeout)?;

    let command = CheckCommand::new(Arc::new(registry));
    Ok(command.run(request).await?)
}
