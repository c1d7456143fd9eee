use crate::common::command::{init_repository_dir, kit_output};
use crate::common::file::delete_path;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn report_deleted_files(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;
    delete_path(&repository_dir.path().join("a").join("2.txt"));

    let actual_output = kit_output(repository_dir.path(), &["status"]);

    assert_eq!(actual_output, " D a/2.txt\n");

    Ok(())
}

#[rstest]
fn report_files_in_deleted_directories(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;
    delete_path(&repository_dir.path().join("a"));

    let actual_output = kit_output(repository_dir.path(), &["status"]);

    assert_eq!(actual_output, " D a/2.txt\n D a/b/3.txt\n");

    Ok(())
}

#[rstest]
fn report_staged_deletions_from_last_commit(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;
    delete_path(&repository_dir.path().join("a"));

    kit_output(repository_dir.path(), &["add", "."]);
    let actual_output = kit_output(repository_dir.path(), &["status"]);

    assert_eq!(actual_output, "D  a/2.txt\nD  a/b/3.txt\n");
    assert_eq!(kit_output(repository_dir.path(), &["ls-files"]), "1.txt\n");

    Ok(())
}
