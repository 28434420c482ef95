use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};

/// Key stamped into env files by the version updater.
pub const VERSION_KEY: &str = "API_VERSION";

/// Rewrites `path` so its `API_VERSION=` line carries `commit`, quoted.
/// The line is appended when absent and the file is created when
/// missing; output always ends with a single trailing newline. Returns
/// the line that was written, for reporting.
///
/// # Errors
///
/// Returns an [`Err`] on any IO failure other than the file being absent
pub fn apply_version(path: &Path, commit: &str) -> Result<String> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e).context(format!("Failed to read {}", path.display())),
    };

    let prefix = format!("{VERSION_KEY}=");
    let line_value = format!("{VERSION_KEY}=\"{commit}\"");
    let mut updated = false;

    let mut lines: Vec<&str> = if contents.is_empty() {
        Vec::new()
    } else {
        contents
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect()
    };

    // A file ending in a newline splits into a trailing empty segment;
    // keeping it would put a blank line before an appended entry.
    if lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    for line in &mut lines {
        if line.starts_with(&prefix) {
            *line = &line_value;
            updated = true;
        }
    }

    let mut out = lines.join("\n");
    if !updated {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&line_value);
    }

    let formatted = format!("{}\n", out.trim_end());
    fs::write(path, formatted).with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(line_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn replaces_existing_line_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "PORT=8000\nAPI_VERSION=\"old\"\nDEBUG=1\n").unwrap();

        apply_version(&path, "abc123").unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "PORT=8000\nAPI_VERSION=\"abc123\"\nDEBUG=1\n"
        );
    }

    #[test]
    fn appends_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "PORT=8000\n").unwrap();

        apply_version(&path, "abc123").unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "PORT=8000\nAPI_VERSION=\"abc123\"\n"
        );
    }

    #[test]
    fn appends_to_unterminated_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "PORT=8000").unwrap();

        apply_version(&path, "abc123").unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "PORT=8000\nAPI_VERSION=\"abc123\"\n"
        );
    }

    #[test]
    fn creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");

        let line = apply_version(&path, "abc123").unwrap();

        assert_eq!(line, "API_VERSION=\"abc123\"");
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "API_VERSION=\"abc123\"\n"
        );
    }

    #[test]
    fn normalizes_trailing_newlines_and_crlf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "PORT=8000\r\nAPI_VERSION=old\r\n\r\n\r\n").unwrap();

        apply_version(&path, "abc123").unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "PORT=8000\nAPI_VERSION=\"abc123\"\n"
        );
    }

    #[test]
    fn similar_keys_are_left_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "API_VERSION_LABEL=x\n").unwrap();

        apply_version(&path, "abc123").unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "API_VERSION_LABEL=x\nAPI_VERSION=\"abc123\"\n"
        );
    }
}
