//! Symbol-name conventions for the analyzed call graphs.
//!
//! The case of a symbol's first character is meaningful: lowercase-initial
//! names are internal/library helpers and excluded from analysis. Entry
//! points are `main` itself, or subsystem entry functions named `*Main`.

/// The canonical program entry point, exempt from the lowercase rule.
pub const MAIN: &str = "main";

/// Suffix marking a subsystem entry point (e.g. `PostmasterMain`).
pub const ENTRY_SUFFIX: &str = "Main";

/// True when `name` is excluded from analysis: any symbol other than `main`
/// whose first character is a lowercase ASCII letter. Non-letter first
/// characters are not ignored.
pub fn is_ignored(name: &str) -> bool {
    if name == MAIN {
        return false;
    }
    name.chars().next().map_or(false, |c| c.is_ascii_lowercase())
}

/// True when `name` qualifies as an analysis root: not ignored, and either
/// `main` or a `*Main` subsystem entry point.
pub fn is_root_candidate(name: &str) -> bool {
    !is_ignored(name) && (name == MAIN || name.ends_with(ENTRY_SUFFIX))
}
