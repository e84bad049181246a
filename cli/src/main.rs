mod pack;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use contract::{ApiInfo, HEALTH_PATH, HealthCheck, INFO_PATH};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::pack::{PackOptions, Preset};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("server reported status `{0}`")]
    Unhealthy(String),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error(transparent)]
    Pack(#[from] pack::PackError),
}

#[derive(Parser, Debug)]
#[command(name = "starter-cli", about = "Starter app probes and context packer")]
struct Cli {
    #[arg(long, env = "STARTER_BASE_URL", default_value = "http://127.0.0.1:3001")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Call `/api/health`; fails unless the server reports `ok`.
    Health,
    /// Call `/api/info` and print it.
    Info,
    /// Concatenate manifest-listed files into one context bundle.
    Pack(PackArgs),
}

#[derive(Args, Debug)]
struct PackArgs {
    #[arg(long, value_enum, default_value_t = Preset::Ai)]
    preset: Preset,

    #[arg(long, help = "Manifest path (overrides the preset)")]
    manifest: Option<PathBuf>,

    #[arg(long, help = "Bundle output path (overrides the preset)")]
    out: Option<PathBuf>,

    #[arg(long, default_value_t = false, help = "Fail on files missing from disk")]
    strict: bool,

    #[arg(long, default_value = ".", help = "Directory that relative paths resolve against")]
    root: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let result = match cli.command {
        Command::Health => run_health(&cli.base_url).await,
        Command::Info => run_info(&cli.base_url).await,
        Command::Pack(args) => run_pack(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run_health(base_url: &str) -> Result<(), CliError> {
    let health: HealthCheck = get_json(base_url, HEALTH_PATH).await?;
    print_json(&health)?;
    if !health.is_ok() {
        return Err(CliError::Unhealthy(health.status));
    }
    Ok(())
}

async fn run_info(base_url: &str) -> Result<(), CliError> {
    let info: ApiInfo = get_json(base_url, INFO_PATH).await?;
    print_json(&info)
}

fn run_pack(args: PackArgs) -> Result<(), CliError> {
    let mut options = PackOptions::from_preset(args.preset, args.root);
    if let Some(manifest) = args.manifest {
        options.manifest = manifest;
    }
    if let Some(out) = args.out {
        options.output = out;
    }
    options.strict |= args.strict;

    let report = pack::run(&options, |path| eprintln!("[warn] Skipping missing file: {path}"))?;
    println!("Wrote {}", report.output.display());
    Ok(())
}

fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

async fn get_json<T: DeserializeOwned>(base_url: &str, path: &str) -> Result<T, CliError> {
    let response = reqwest::get(endpoint_url(base_url, path)).await?;
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(CliError::Status { status: status.as_u16(), body });
    }
    Ok(serde_json::from_str(&body)?)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
