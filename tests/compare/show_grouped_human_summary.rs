use crate::common::command::{Roots, dirdiff_compare, roots};
use crate::common::file::{FileSpec, write_file, write_twin_files};
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn show_grouped_human_summary(roots: Roots) {
    write_file(FileSpec::new(roots.first().join("only.txt"), "1".to_string()));
    write_file(FileSpec::new(roots.second().join("extra").join("e.txt"), "2".to_string()));
    write_twin_files(&roots.first(), &roots.second(), "root.txt", "r");
    write_twin_files(&roots.first(), &roots.second(), "docs/guide.md", "g");
    write_twin_files(&roots.first(), &roots.second(), "docs/api.md", "a");

    dirdiff_compare(&roots, &["--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Comparison between:\n  1: first\n  2: second\n"))
        .stdout(predicate::str::contains("  Files only in directory 1: 1\n"))
        .stdout(predicate::str::contains("  Files only in directory 2: 1\n"))
        .stdout(predicate::str::contains("  Files with differences: 0\n"))
        .stdout(predicate::str::contains("  Identical files: 3\n"))
        .stdout(predicate::str::contains("  Total files compared: 5\n"))
        .stdout(predicate::str::contains("FILES ONLY IN DIRECTORY 1:\n  only.txt\n"))
        .stdout(predicate::str::contains("FILES ONLY IN DIRECTORY 2:\n  extra/e.txt\n"))
        .stdout(predicate::str::contains("FILES THAT DIFFER").not())
        .stdout(predicate::str::contains(
            "IDENTICAL FILES:\n  In [Root]:\n    root.txt\n  In docs:\n    api.md\n    guide.md\n",
        ));
}
