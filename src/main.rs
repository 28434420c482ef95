use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use spa_init::{
    args::Args,
    config::ScaffoldDirs,
    error,
    scaffold::{create_project, Request},
    trace,
};

fn app(display_name: &str, args: &Args) -> Result<()> {
    let dirs = ScaffoldDirs::default_paths()?;

    trace!("Template root: {}", dirs.template_root().display());
    trace!("Invocation dir: {}", dirs.invocation_dir().display());

    let request = Request {
        display_name: display_name.to_owned(),
        target: args.resolved_target().map(ToOwned::to_owned),
        force: args.force,
    };

    let summary = create_project(&dirs, &request)?;
    summary.print();

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    // A missing name is a usage error with exit code 1, unlike `-h`,
    // which clap answers itself with exit code 0.
    let Some(display_name) = args.display_name() else {
        let _ = Args::command().print_help();
        return ExitCode::FAILURE;
    };

    match app(display_name, &args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}",);
            ExitCode::FAILURE
        }
    }
}
