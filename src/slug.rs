/// Slug used when a display name normalizes to nothing.
pub const DEFAULT_SLUG: &str = "my-app";

/// Normalizes a human display name into a kebab-case package slug.
///
/// Inserts a separator at camelCase boundaries (a lowercase letter or
/// digit immediately followed by an uppercase letter), collapses every
/// run of non-alphanumeric characters into a single `-`, trims leading
/// and trailing separators and lowercases the result. An input that
/// normalizes to nothing falls back to [`DEFAULT_SLUG`].
#[must_use]
pub fn to_kebab_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev: Option<char> = None;

    for c in input.trim().chars() {
        if c.is_ascii_alphanumeric() {
            let camel_boundary = c.is_ascii_uppercase()
                && prev.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit());
            if camel_boundary {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
        prev = Some(c);
    }

    let slug = out.trim_end_matches('-');

    if slug.is_empty() {
        DEFAULT_SLUG.to_owned()
    } else {
        slug.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaces_become_separators() {
        assert_eq!(to_kebab_case("My App"), "my-app");
    }

    #[test]
    fn kebab_input_is_unchanged() {
        assert_eq!(to_kebab_case("already-kebab"), "already-kebab");
    }

    #[test]
    fn camel_case_boundaries_split() {
        assert_eq!(to_kebab_case("CamelCase"), "camel-case");
        assert_eq!(to_kebab_case("v2Admin"), "v2-admin");
    }

    #[test]
    fn acronyms_stay_joined() {
        assert_eq!(to_kebab_case("HTTPServer"), "httpserver");
    }

    #[test]
    fn symbol_runs_collapse() {
        assert_eq!(to_kebab_case("My__App!!"), "my-app");
        assert_eq!(to_kebab_case("--edge--"), "edge");
        assert_eq!(to_kebab_case("  padded name  "), "padded-name");
    }

    #[test]
    fn empty_falls_back_to_default() {
        assert_eq!(to_kebab_case(""), DEFAULT_SLUG);
        assert_eq!(to_kebab_case("!!!"), DEFAULT_SLUG);
    }

    #[test]
    fn deterministic_on_repeat() {
        let inputs = ["My App", "CamelCase", "a1B2c3", "mixed UP down"];
        for input in inputs {
            assert_eq!(to_kebab_case(input), to_kebab_case(input));
        }
    }
}
