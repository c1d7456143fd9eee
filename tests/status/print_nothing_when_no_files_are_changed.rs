use crate::common::command::{empty_repository_dir, init_repository_dir, kit_commit, kit_output};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn print_nothing_when_no_files_are_changed(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let actual_output = kit_output(init_repository_dir.path(), &["status"]);

    assert_eq!(actual_output, "");

    Ok(())
}

#[rstest]
fn print_nothing_for_committed_files_older_than_1970(
    empty_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = empty_repository_dir;
    let old_file = repository_dir.path().join("old");
    write_file(FileSpec::new(old_file.clone(), "old".to_string()));
    filetime::set_file_mtime(&old_file, filetime::FileTime::from_unix_time(-100, 0))?;

    kit_output(repository_dir.path(), &["add", "."]);
    kit_commit(repository_dir.path(), "Old file")
        .assert()
        .success();

    assert_eq!(kit_output(repository_dir.path(), &["status"]), "");

    Ok(())
}
