use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

/// Placeholder phrase the template ships in its home view.
pub const HOME_PLACEHOLDER: &str = "My Default ReactJS App";

fn read_text(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).context(format!("Failed to read {}", path.display())),
    }
}

fn read_json(path: &Path) -> Result<Option<Value>> {
    let Some(contents) = read_text(path)? else {
        return Ok(None);
    };

    let value = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    Ok(Some(value))
}

fn write_json(path: &Path, value: &Value) -> Result<()> {
    let mut serialized = serde_json::to_string_pretty(value)?;
    serialized.push('\n');

    fs::write(path, serialized).with_context(|| format!("Failed to write {}", path.display()))
}

fn write_text(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}

/// Sets the manifest `name` field to the package slug. A missing
/// manifest is a no-op; key order and indentation are preserved.
pub fn package_json(target_dir: &Path, package_name: &str) -> Result<()> {
    let path = target_dir.join("package.json");
    let Some(mut pkg) = read_json(&path)? else {
        return Ok(());
    };

    if let Value::Object(map) = &mut pkg {
        map.insert("name".into(), Value::String(package_name.to_owned()));
    }

    write_json(&path, &pkg)
}

/// Sets the lockfile's top-level `name` and, when the root-package entry
/// (keyed by the empty string) exists, its `name` too.
pub fn package_lock(target_dir: &Path, package_name: &str) -> Result<()> {
    let path = target_dir.join("package-lock.json");
    let Some(mut lock) = read_json(&path)? else {
        return Ok(());
    };

    if let Value::Object(map) = &mut lock {
        map.insert("name".into(), Value::String(package_name.to_owned()));

        if let Some(Value::Object(root)) = map.get_mut("packages").and_then(|p| p.get_mut("")) {
            root.insert("name".into(), Value::String(package_name.to_owned()));
        }
    }

    write_json(&path, &lock)
}

/// Replaces the first top-level Markdown heading with `# <display_name>`.
pub fn readme(target_dir: &Path, display_name: &str) -> Result<()> {
    let path = target_dir.join("README.md");
    let Some(contents) = read_text(&path)? else {
        return Ok(());
    };

    if contents.is_empty() {
        return Ok(());
    }

    write_text(&path, &replace_first_heading(&contents, display_name))
}

/// Replaces every occurrence of [`HOME_PLACEHOLDER`] in the home view
/// with the display name. The file is an optional template artifact; a
/// missing one is skipped silently.
pub fn home_heading(target_dir: &Path, display_name: &str) -> Result<()> {
    let path = target_dir.join("src").join("js").join("Home.js");
    let Some(contents) = read_text(&path)? else {
        return Ok(());
    };

    if contents.is_empty() {
        return Ok(());
    }

    write_text(&path, &contents.replace(HOME_PLACEHOLDER, display_name))
}

fn replace_first_heading(contents: &str, display_name: &str) -> String {
    let mut out = String::with_capacity(contents.len() + display_name.len());
    let mut replaced = false;

    for line in contents.split_inclusive('\n') {
        let body_len = line.trim_end_matches(['\r', '\n']).len();
        let (body, terminator) = line.split_at(body_len);

        if !replaced && is_top_level_heading(body) {
            out.push_str("# ");
            out.push_str(display_name);
            out.push_str(terminator);
            replaced = true;
        } else {
            out.push_str(line);
        }
    }

    out
}

// `# Title` but not `## Title` and not a bare `#`.
fn is_top_level_heading(line: &str) -> bool {
    line.strip_prefix('#')
        .is_some_and(|rest| rest.starts_with(char::is_whitespace) && !rest.trim().is_empty())
}
