use crate::common::command::{Roots, dirdiff_compare, roots};
use crate::common::file::{FileSpec, write_file, write_twin_files};
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn report_single_byte_change_when_comparing_content(
    roots: Roots,
) -> Result<(), Box<dyn std::error::Error>> {
    write_twin_files(&roots.first(), &roots.second(), "z.txt", "hello");
    write_file(FileSpec::new(roots.second().join("z.txt"), "hallo".to_string()));

    dirdiff_compare(&roots, &["--content", "--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  Files with differences: 1\n"))
        .stdout(predicate::str::contains(
            "FILES THAT DIFFER:\n  z.txt\n    Size: 5 vs 5 bytes\n",
        ))
        .stdout(predicate::str::contains("    Content: differs\n"));

    Ok(())
}
