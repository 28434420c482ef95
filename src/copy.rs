use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use walkdir::{DirEntry, WalkDir};

/// Path segments never copied out of the template, at any depth.
pub const EXCLUDED_SEGMENTS: [&str; 5] = [".git", "node_modules", ".env", "dist", "build"];

fn excluded(entry: &DirEntry) -> bool {
    EXCLUDED_SEGMENTS
        .iter()
        .any(|name| entry.file_name() == *name)
}

/// Recursively copies the template tree into `target`, preserving the
/// relative structure. Excluded segments are pruned on descent, so the
/// denylist applies to every path component, not just top-level entries.
/// Files already present in `target` are overwritten.
///
/// # Errors
///
/// Returns an [`Err`] on the first failed walk step, directory creation
/// or file copy. Already-copied files are left in place.
pub fn copy_template(template_root: &Path, target: &Path) -> Result<()> {
    for entry in WalkDir::new(template_root)
        .min_depth(1)
        .into_iter()
        .filter_entry(|e| !excluded(e))
    {
        let entry = entry.context("Failed to walk template directory")?;
        let relative = entry
            .path()
            .strip_prefix(template_root)
            .context("Walked outside the template root")?;
        let destination = target.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&destination)
                .with_context(|| format!("Failed to create {}", destination.display()))?;
        } else {
            if let Some(parent) = destination.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::copy(entry.path(), &destination).with_context(|| {
                format!(
                    "Failed to copy {} to {}",
                    entry.path().display(),
                    destination.display()
                )
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn write(path: PathBuf, contents: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn copies_tree_and_prunes_denylist() {
        let template = tempfile::tempdir().unwrap();
        let root = template.path();

        write(root.join("package.json"), "{}");
        write(root.join("src/js/Home.js"), "hi");
        write(root.join(".git/config"), "[core]");
        write(root.join("node_modules/left-pad/index.js"), "x");
        write(root.join("src/vendor/node_modules/deep.js"), "x");
        write(root.join(".env"), "SECRET=1");
        write(root.join("dist/bundle.js"), "x");
        write(root.join("build/out.js"), "x");

        let target = tempfile::tempdir().unwrap();
        copy_template(root, target.path()).unwrap();

        assert!(target.path().join("package.json").is_file());
        assert!(target.path().join("src/js/Home.js").is_file());
        assert!(target.path().join("src/vendor").is_dir());

        assert!(!target.path().join(".git").exists());
        assert!(!target.path().join("node_modules").exists());
        assert!(!target.path().join("src/vendor/node_modules").exists());
        assert!(!target.path().join(".env").exists());
        assert!(!target.path().join("dist").exists());
        assert!(!target.path().join("build").exists());
    }

    #[test]
    fn overwrites_existing_files() {
        let template = tempfile::tempdir().unwrap();
        write(template.path().join("README.md"), "# Template");

        let target = tempfile::tempdir().unwrap();
        write(target.path().join("README.md"), "stale");

        copy_template(template.path(), target.path()).unwrap();
        let copied = fs::read_to_string(target.path().join("README.md")).unwrap();
        assert_eq!(copied, "# Template");
    }
}
