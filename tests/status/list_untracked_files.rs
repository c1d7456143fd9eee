use crate::common::command::{empty_repository_dir, kit_output};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn list_untracked_file_in_new_repository(
    empty_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = empty_repository_dir;
    write_file(FileSpec::new(
        repository_dir.path().join("hello"),
        "hello".to_string(),
    ));

    let actual_output = kit_output(repository_dir.path(), &["status"]);

    assert_eq!(actual_output, " ?? hello\n");

    Ok(())
}

#[rstest]
fn list_untracked_files_in_name_order(
    empty_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = empty_repository_dir;
    for name in ["file.txt", "another.txt", "dir/nested.txt"] {
        write_file(FileSpec::new(
            repository_dir.path().join(name),
            name.to_string(),
        ));
    }

    let actual_output = kit_output(repository_dir.path(), &["status"]);

    assert_eq!(
        actual_output,
        " ?? another.txt\n ?? dir/nested.txt\n ?? file.txt\n"
    );

    Ok(())
}

#[rstest]
fn do_not_list_empty_untracked_directories(
    empty_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = empty_repository_dir;
    std::fs::create_dir_all(repository_dir.path().join("outer/inner"))?;

    let actual_output = kit_output(repository_dir.path(), &["status"]);

    assert_eq!(actual_output, "");

    Ok(())
}
