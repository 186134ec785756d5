use crate::common::command::{Roots, porcelain_output, roots};
use crate::common::file::write_generated_files;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn report_generated_files_only_in_second_directory(
    roots: Roots,
) -> Result<(), Box<dyn std::error::Error>> {
    let files = write_generated_files(&roots.second().join("gen"), 5);

    let mut expected_lines = files
        .iter()
        .map(|file| {
            format!(
                "> gen/{}\n",
                file.path.file_name().unwrap().to_string_lossy()
            )
        })
        .collect::<Vec<_>>();
    expected_lines.sort();

    let actual_output = porcelain_output(&roots, &[])?;

    assert_eq!(actual_output, expected_lines.concat());

    Ok(())
}
