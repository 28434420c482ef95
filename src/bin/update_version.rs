use std::path::PathBuf;
use std::process::{Command, ExitCode};

use anyhow::{bail, Context, Result};
use clap::Parser;
use spa_init::{env_version, error, info};

const DEFAULT_BRANCH: &str = "master";

/// Stamp the latest git commit into env files as API_VERSION
#[derive(Parser, Debug)]
#[clap(version)]
struct Args {
    /// Branch (or any rev) to resolve [default: $VERSION_BRANCH or master]
    branch: Option<String>,

    /// Env file to update; repeatable
    #[clap(long = "file", value_name = "FILE", default_value = ".env")]
    files: Vec<PathBuf>,
}

fn resolve_branch(args: &Args) -> String {
    let branch = std::env::var("VERSION_BRANCH")
        .ok()
        .or_else(|| args.branch.clone())
        .unwrap_or_else(|| DEFAULT_BRANCH.to_owned());

    let branch = branch.trim();
    if branch.is_empty() {
        DEFAULT_BRANCH.to_owned()
    } else {
        branch.to_owned()
    }
}

fn latest_commit(branch: &str) -> Result<String> {
    let output = Command::new("git")
        .args(["rev-parse", branch])
        .output()
        .context("Failed to run git")?;

    if !output.status.success() {
        bail!(
            "git rev-parse {branch} failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    Ok(String::from_utf8(output.stdout)
        .context("git produced non-utf8 output")?
        .trim()
        .to_owned())
}

fn app(args: &Args) -> Result<()> {
    let branch = resolve_branch(args);
    let commit = latest_commit(&branch)?;

    for file in &args.files {
        let line = env_version::apply_version(file, &commit)?;
        info!("{} updated with {line}", file.display());
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    match app(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}",);
            ExitCode::FAILURE
        }
    }
}
