use crate::common::command::{Roots, roots, run_dirdiff_command};
use crate::common::file::{FileSpec, write_file};
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn fail_when_a_root_is_a_file(roots: Roots) {
    write_file(FileSpec::new(
        roots.dir.path().join("plain.txt"),
        "not a directory".to_string(),
    ));

    run_dirdiff_command(roots.dir.path(), &["plain.txt", "second"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid input"))
        .stderr(predicate::str::contains("not a directory"));
}
