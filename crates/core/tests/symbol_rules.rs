use carver_core::symbols::{is_ignored, is_root_candidate};

/// `main` is the one lowercase-initial name that is never ignored.
#[test]
fn main_is_never_ignored() {
    assert!(!is_ignored("main"));
}

#[test]
fn lowercase_initial_names_are_ignored() {
    assert!(is_ignored("mainHelper"));
    assert!(is_ignored("pq_getbyte"));
    assert!(is_ignored("startup_hacks"));
}

/// Only lowercase ASCII letters trigger the ignore rule; uppercase,
/// underscores, digits, and the empty name all pass.
#[test]
fn uppercase_and_non_letter_initials_are_not_ignored() {
    assert!(!is_ignored("Foo"));
    assert!(!is_ignored("_pg_init"));
    assert!(!is_ignored("42wallaby"));
    assert!(!is_ignored(""));
}

#[test]
fn root_candidates_are_main_or_main_suffixed() {
    assert!(is_root_candidate("main"));
    assert!(is_root_candidate("PostmasterMain"));
    assert!(is_root_candidate("WalWriterMain"));

    assert!(!is_root_candidate("PostmasterStart"));
    assert!(!is_root_candidate("Main_loop"));
}

/// A `Main` suffix does not rescue an ignored (lowercase-initial) symbol.
#[test]
fn ignored_names_are_never_root_candidates() {
    assert!(!is_root_candidate("walwriterMain"));
    assert!(!is_root_candidate("mainHelper"));
}
