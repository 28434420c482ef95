use std::path::{Path, PathBuf};

pub use clap::Parser;

#[derive(Parser, Debug)]
#[clap(version, about)]
pub struct Args {
    /// Human-readable name of the new project
    pub name: Option<String>,

    /// Where to create the project [default: ./<project-name>]
    pub target_dir: Option<PathBuf>,

    /// Create project at the given path
    #[clap(long, value_name = "DIR")]
    pub target: Option<PathBuf>,

    /// Allow creating into a non-empty folder
    #[clap(long)]
    pub force: bool,
}

impl Args {
    /// The `--target` flag wins; the second positional fills the target
    /// only when no flag was given.
    #[must_use]
    pub fn resolved_target(&self) -> Option<&Path> {
        self.target
            .as_deref()
            .or(self.target_dir.as_deref())
    }

    /// The project name, with an all-whitespace name treated as missing.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_wins_over_positional() {
        let args = Args::parse_from(["spa-init", "My App", "pos-dir", "--target", "flag-dir"]);
        assert_eq!(args.resolved_target(), Some(Path::new("flag-dir")));
    }

    #[test]
    fn positional_fills_target_without_flag() {
        let args = Args::parse_from(["spa-init", "My App", "pos-dir"]);
        assert_eq!(args.resolved_target(), Some(Path::new("pos-dir")));
    }

    #[test]
    fn equals_form_is_accepted() {
        let args = Args::parse_from(["spa-init", "My App", "--target=flag-dir"]);
        assert_eq!(args.resolved_target(), Some(Path::new("flag-dir")));
        assert!(!args.force);
    }

    #[test]
    fn blank_name_counts_as_missing() {
        let args = Args::parse_from(["spa-init", "   "]);
        assert_eq!(args.display_name(), None);

        let args = Args::parse_from(["spa-init", "  My App  "]);
        assert_eq!(args.display_name(), Some("My App"));
    }
}
