use crate::common::command::{init_repository_dir, kit_commit, kit_output, run_kit_command};
use crate::common::file::{FileSpec, list_worktree_files, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn switch_back_and_forth_between_snapshots(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;
    kit_output(repository_dir.path(), &["branch", "test2"]);

    assert_eq!(
        kit_output(repository_dir.path(), &["switch", "test2"]),
        "Switched to branch 'test2'\n"
    );
    assert_eq!(
        std::fs::read_to_string(repository_dir.path().join(".git/HEAD"))?,
        "ref: refs/heads/test2\n"
    );

    write_file(FileSpec::new(
        repository_dir.path().join("world"),
        "world".to_string(),
    ));
    kit_output(repository_dir.path(), &["add", "."]);
    kit_commit(repository_dir.path(), "Add world")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[test2 "));

    kit_output(repository_dir.path(), &["switch", "main"]);
    assert_eq!(
        list_worktree_files(repository_dir.path()),
        vec!["1.txt", "a/2.txt", "a/b/3.txt"]
    );
    assert_eq!(
        kit_output(repository_dir.path(), &["ls-files"]),
        "1.txt\na/2.txt\na/b/3.txt\n"
    );
    assert_eq!(kit_output(repository_dir.path(), &["status"]), "");

    kit_output(repository_dir.path(), &["switch", "test2"]);
    assert_eq!(
        list_worktree_files(repository_dir.path()),
        vec!["1.txt", "a/2.txt", "a/b/3.txt", "world"]
    );
    assert_eq!(
        std::fs::read_to_string(repository_dir.path().join("world"))?,
        "world"
    );
    assert_eq!(kit_output(repository_dir.path(), &["status"]), "");

    Ok(())
}

#[rstest]
fn switch_restores_contents_and_prunes_empty_directories(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;
    kit_output(repository_dir.path(), &["branch", "feature"]);
    kit_output(repository_dir.path(), &["switch", "feature"]);

    std::fs::remove_file(repository_dir.path().join("1.txt"))?;
    write_file(FileSpec::new(
        repository_dir.path().join("docs").join("guide").join("intro.md"),
        "# Intro".to_string(),
    ));
    kit_output(repository_dir.path(), &["add", "."]);
    kit_commit(repository_dir.path(), "Docs instead of one")
        .assert()
        .success();

    kit_output(repository_dir.path(), &["switch", "main"]);

    assert!(!repository_dir.path().join("docs").exists());
    assert_eq!(
        std::fs::read_to_string(repository_dir.path().join("1.txt"))?,
        "one"
    );

    Ok(())
}

#[rstest]
fn switch_keeps_unrelated_untracked_files(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;
    kit_output(repository_dir.path(), &["branch", "test"]);
    write_file(FileSpec::new(
        repository_dir.path().join("notes.txt"),
        "scratch".to_string(),
    ));

    kit_output(repository_dir.path(), &["switch", "test"]);

    assert_eq!(
        kit_output(repository_dir.path(), &["status"]),
        " ?? notes.txt\n"
    );

    Ok(())
}

#[rstest]
fn switch_to_current_branch_is_a_no_op(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(
        kit_output(init_repository_dir.path(), &["switch", "main"]),
        "Already on 'main'\n"
    );

    Ok(())
}

#[rstest]
fn switch_to_unknown_branch_fails(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_kit_command(init_repository_dir.path(), &["switch", "nowhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("branch 'nowhere' not found"));

    Ok(())
}
