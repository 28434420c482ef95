use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::config::ScaffoldDirs;
use crate::{copy, paths, rewrite, slug};

/// A single scaffolding request, fully resolved from the CLI.
#[derive(Debug, Clone)]
pub struct Request {
    pub display_name: String,
    pub target: Option<PathBuf>,
    pub force: bool,
}

/// What a successful run produced, for the closing report.
#[derive(Debug)]
pub struct Summary {
    pub display_name: String,
    pub package_name: String,
    pub target_dir: PathBuf,
}

impl Summary {
    pub fn print(&self) {
        println!("Project created:");
        println!("- Name: {}", self.display_name);
        println!("- Package: {}", self.package_name);
        println!("- Path: {}", self.target_dir.display());
        println!("Next:");
        println!("cd \"{}\"", self.target_dir.display());
        println!("npm install");
    }
}

/// Whether the target directory exists and whether it has any entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirState {
    pub exists: bool,
    pub has_entries: bool,
}

/// Reads the target's state. A missing directory is not an error; any
/// other IO failure propagates.
///
/// # Errors
///
/// Returns an [`Err`] on any filesystem failure other than the
/// directory being absent
pub fn dir_state(dir: &Path) -> Result<DirState> {
    match fs::read_dir(dir) {
        Ok(mut entries) => Ok(DirState {
            exists: true,
            has_entries: entries.next().is_some(),
        }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(DirState {
            exists: false,
            has_entries: false,
        }),
        Err(e) => Err(e).context(format!("Failed to inspect {}", dir.display())),
    }
}

/// Creates a new project instance from the template.
///
/// Runs the whole sequence: safety check, destination precondition,
/// directory creation, filtered copy, then the four name rewrites. Every
/// step is synchronous; the first failure aborts the rest, and files
/// copied before a failure are left for the operator to clean up.
///
/// # Errors
///
/// Returns an [`Err`] if the target lies inside the template root, if
/// the target is non-empty and `force` was not set, or on any IO failure
pub fn create_project(dirs: &ScaffoldDirs, request: &Request) -> Result<Summary> {
    let display_name = request.display_name.trim();
    let package_name = slug::to_kebab_case(display_name);

    // Both sides of the containment check must share a base; a relative
    // template root (e.g. from $SPA_INIT_TEMPLATE) would otherwise slip
    // past the lexical comparison.
    let template_root = paths::resolve(dirs.invocation_dir(), dirs.template_root());
    let target_dir = resolve_target(dirs, request, display_name);

    if paths::is_subpath(&template_root, &target_dir) {
        bail!("Target directory must be outside the template folder to avoid recursive copies");
    }

    let existing = dir_state(&target_dir)?;
    if existing.exists && existing.has_entries {
        if !request.force {
            bail!(
                "Target directory already exists and is not empty: {}\nUse --force to continue or choose a different target",
                target_dir.display()
            );
        }
        crate::warn!("Merging into non-empty directory {}", target_dir.display());
    }

    fs::create_dir_all(&target_dir)
        .with_context(|| format!("Failed to create {}", target_dir.display()))?;
    copy::copy_template(&template_root, &target_dir)?;

    rewrite::package_json(&target_dir, &package_name)?;
    rewrite::package_lock(&target_dir, &package_name)?;
    rewrite::readme(&target_dir, display_name)?;
    rewrite::home_heading(&target_dir, display_name)?;

    Ok(Summary {
        display_name: display_name.to_owned(),
        package_name,
        target_dir,
    })
}

fn resolve_target(dirs: &ScaffoldDirs, request: &Request, display_name: &str) -> PathBuf {
    match &request.target {
        Some(target) => paths::resolve(dirs.invocation_dir(), target),
        None => paths::resolve(dirs.invocation_dir(), Path::new(display_name)),
    }
}
