mod colour_output_only_when_forced_or_requested;
mod fail_when_a_root_is_a_file;
mod report_files_in_subdirectory_missing_from_second;
mod report_generated_files_only_in_second_directory;
mod report_single_byte_change_when_comparing_content;
mod report_touched_file_as_different_unless_comparing_content;
mod show_grouped_human_summary;
