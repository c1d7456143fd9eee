use crate::common::command::{empty_repository_dir, run_kit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
#[case(&["add", "hello"])]
#[case(&["add", ".", "hello"])]
#[case(&["add", "./hello"])]
fn reject_any_pathspec_other_than_dot(
    empty_repository_dir: TempDir,
    #[case] args: &[&str],
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = empty_repository_dir;
    write_file(FileSpec::new(
        repository_dir.path().join("hello"),
        "hello".to_string(),
    ));

    run_kit_command(repository_dir.path(), args)
        .assert()
        .failure()
        .stderr(predicate::str::contains("only '.' can be added"));

    assert!(!repository_dir.path().join(".git").join("index").exists());

    Ok(())
}

#[rstest]
fn add_requires_a_pathspec(empty_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_kit_command(empty_repository_dir.path(), &["add"])
        .assert()
        .failure();

    Ok(())
}
