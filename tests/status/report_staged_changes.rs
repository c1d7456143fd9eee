use crate::common::command::{empty_repository_dir, init_repository_dir, kit_output};
use crate::common::file::{FileSpec, modify_file, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn report_file_added_before_first_commit(
    empty_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = empty_repository_dir;
    write_file(FileSpec::new(
        repository_dir.path().join("hello"),
        "hello".to_string(),
    ));

    kit_output(repository_dir.path(), &["add", "."]);
    let actual_output = kit_output(repository_dir.path(), &["status"]);

    assert_eq!(actual_output, "A  hello\n");

    Ok(())
}

#[rstest]
fn staged_rows_come_before_worktree_rows(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;
    write_file(FileSpec::new(
        repository_dir.path().join("new.txt"),
        "new".to_string(),
    ));
    kit_output(repository_dir.path(), &["add", "."]);

    modify_file(FileSpec::new(
        repository_dir.path().join("new.txt"),
        "newer".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("z.txt"),
        "untracked".to_string(),
    ));

    let actual_output = kit_output(repository_dir.path(), &["status"]);

    assert_eq!(actual_output, "A  new.txt\n M new.txt\n ?? z.txt\n");

    Ok(())
}
