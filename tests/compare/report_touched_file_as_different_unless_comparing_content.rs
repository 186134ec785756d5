use crate::common::command::{Roots, porcelain_output, roots};
use crate::common::file::{BASE_MTIME, set_mtime, write_twin_files};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case(&[], "M x.txt\n")]
#[case(&["--content"], "= x.txt\n")]
fn report_touched_file_as_different_unless_comparing_content(
    roots: Roots,
    #[case] args: &[&str],
    #[case] expected_output: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    write_twin_files(&roots.first(), &roots.second(), "x.txt", "identical content");
    set_mtime(&roots.second().join("x.txt"), BASE_MTIME + 3600);

    let actual_output = porcelain_output(&roots, args)?;

    assert_eq!(actual_output, expected_output);

    Ok(())
}
