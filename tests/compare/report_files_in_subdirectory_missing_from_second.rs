use crate::common::command::{Roots, porcelain_output, roots};
use crate::common::file::{FileSpec, create_directory, write_file};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn report_files_in_subdirectory_missing_from_second(
    roots: Roots,
) -> Result<(), Box<dyn std::error::Error>> {
    write_file(FileSpec::new(
        roots.first().join("sub").join("y.txt"),
        "y".to_string(),
    ));
    write_file(FileSpec::new(
        roots.first().join("sub").join("nested").join("w.txt"),
        "w".to_string(),
    ));
    // empty directories carry no files and so no entries
    create_directory(&roots.first().join("sub").join("empty"));

    let actual_output = porcelain_output(&roots, &[])?;

    assert_eq!(actual_output, "< sub/nested/w.txt\n< sub/y.txt\n");

    Ok(())
}
