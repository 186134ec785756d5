use crate::common::command::{Roots, dirdiff_compare, roots};
use crate::common::file::{FileSpec, write_file};
use predicates::prelude::*;
use rstest::rstest;

const ESCAPE: &str = "\u{1b}[";

fn write_only_in_first(roots: &Roots) {
    write_file(FileSpec::new(
        roots.first().join("a.txt"),
        "hello".to_string(),
    ));
}

#[rstest]
fn piped_auto_output_is_plain(roots: Roots) {
    write_only_in_first(&roots);

    dirdiff_compare(&roots, &["--color", "auto"])
        .env_remove("CLICOLOR_FORCE")
        .assert()
        .success()
        .stdout(predicate::str::contains("FILES ONLY IN DIRECTORY 1:"))
        .stdout(predicate::str::contains(ESCAPE).not());
}

#[rstest]
fn clicolor_force_colours_piped_auto_output(roots: Roots) {
    write_only_in_first(&roots);

    dirdiff_compare(&roots, &["--color", "auto"])
        .env("CLICOLOR_FORCE", "1")
        .env_remove("NO_COLOR")
        .assert()
        .success()
        .stdout(predicate::str::contains(ESCAPE));
}

#[rstest]
fn never_overrides_clicolor_force(roots: Roots) {
    write_only_in_first(&roots);

    dirdiff_compare(&roots, &["--color", "never"])
        .env("CLICOLOR_FORCE", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains(ESCAPE).not());
}
