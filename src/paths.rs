use std::path::{Component, Path, PathBuf};

/// Lexically normalizes a path, folding `.` and `..` components without
/// touching the filesystem.
#[must_use]
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(Component::ParentDir),
            },
            other => out.push(other),
        }
    }

    out
}

/// Joins `path` onto `base` when it is relative, then normalizes. The
/// result is absolute whenever `base` is.
#[must_use]
pub fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize(path)
    } else {
        normalize(&base.join(path))
    }
}

/// Whether `candidate` is `parent` itself or a path inside it, decided
/// lexically and component-wise, so `/a/ba` is not inside `/a/b`.
#[must_use]
pub fn is_subpath(parent: &Path, candidate: &Path) -> bool {
    normalize(candidate).starts_with(normalize(parent))
}
