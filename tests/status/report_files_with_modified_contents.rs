use crate::common::command::{init_repository_dir, kit_output};
use crate::common::file::{FileSpec, modify_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn report_files_with_modified_contents(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;

    let file1 = FileSpec::new(
        repository_dir.path().join("1.txt"),
        "modified one".to_string(),
    );
    modify_file(file1);

    let file2 = FileSpec::new(
        repository_dir.path().join("a").join("2.txt"),
        "modified two".to_string(),
    );
    modify_file(file2);

    let actual_output = kit_output(repository_dir.path(), &["status"]);

    assert_eq!(actual_output, " M 1.txt\n M a/2.txt\n");

    Ok(())
}

#[rstest]
fn report_a_touched_file_as_modified(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;

    // same content, newer modification time
    modify_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        "one".to_string(),
    ));

    let actual_output = kit_output(repository_dir.path(), &["status"]);

    assert_eq!(actual_output, " M 1.txt\n");

    Ok(())
}

#[rstest]
fn staged_modification_moves_to_the_first_column(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;
    modify_file(FileSpec::new(
        repository_dir.path().join("a").join("b").join("3.txt"),
        "changed three".to_string(),
    ));

    kit_output(repository_dir.path(), &["add", "."]);
    let actual_output = kit_output(repository_dir.path(), &["status"]);

    assert_eq!(actual_output, "M  a/b/3.txt\n");

    Ok(())
}
