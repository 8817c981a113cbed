use std::fs;

use crate::locator::{LocateError, Locator};

fn touch(path: &std::path::Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, "").unwrap();
}

#[test]
fn finds_a_template_in_a_single_root() {
    let dir = tempfile::tempdir().unwrap();
    touch(&dir.path().join("index.weft"));

    let locator = Locator::new("weft").root(dir.path());
    assert_eq!(locator.locate("index").unwrap(), dir.path().join("index.weft"));
}

#[test]
fn names_may_address_subdirectories() {
    let dir = tempfile::tempdir().unwrap();
    touch(&dir.path().join("users/show.weft"));

    let locator = Locator::new("weft").root(dir.path());
    assert_eq!(
        locator.locate("users/show").unwrap(),
        dir.path().join("users/show.weft")
    );
}

#[test]
fn leading_dot_in_the_extension_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    touch(&dir.path().join("index.weft"));

    let locator = Locator::new(".weft").root(dir.path());
    assert!(locator.locate("index").is_ok());
}

#[test]
fn missing_template_lists_every_attempted_path() {
    let a = tempfile::tempdir().unwrap();
    let b = tempfile::tempdir().unwrap();

    let locator = Locator::new("weft").root(a.path()).root(b.path());
    let err = locator.locate("index").unwrap_err();
    assert_eq!(
        err,
        LocateError::NotFound {
            name: "index".into(),
            attempted: vec![a.path().join("index.weft"), b.path().join("index.weft")],
        }
    );
    let message = err.to_string();
    assert!(message.contains("index.weft"), "message: {message}");
}

#[test]
fn a_name_present_in_two_roots_is_ambiguous() {
    let a = tempfile::tempdir().unwrap();
    let b = tempfile::tempdir().unwrap();
    touch(&a.path().join("index.weft"));
    touch(&b.path().join("index.weft"));

    let locator = Locator::new("weft").root(a.path()).root(b.path());
    let err = locator.locate("index").unwrap_err();
    assert_eq!(
        err,
        LocateError::Ambiguous {
            name: "index".into(),
            found: vec![a.path().join("index.weft"), b.path().join("index.weft")],
        }
    );
}

#[test]
fn later_roots_are_probed_after_earlier_ones() {
    let a = tempfile::tempdir().unwrap();
    let b = tempfile::tempdir().unwrap();
    touch(&b.path().join("only_here.weft"));

    let locator = Locator::new("weft").root(a.path()).root(b.path());
    assert_eq!(
        locator.locate("only_here").unwrap(),
        b.path().join("only_here.weft")
    );
}

#[test]
fn the_extension_must_match() {
    let dir = tempfile::tempdir().unwrap();
    touch(&dir.path().join("index.html"));

    let locator = Locator::new("weft").root(dir.path());
    assert!(matches!(
        locator.locate("index"),
        Err(LocateError::NotFound { .. })
    ));
}
