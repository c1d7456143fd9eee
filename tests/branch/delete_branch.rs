use crate::common::command::{get_head_commit_sha, init_repository_dir, kit_output, run_kit_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn delete_current_branch_fails(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_kit_command(init_repository_dir.path(), &["branch", "-d", "main"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Cannot delete branch 'main' checked out at",
        ));

    assert_eq!(
        kit_output(init_repository_dir.path(), &["branch"]),
        "* main\n"
    );

    Ok(())
}

#[rstest]
fn delete_other_branch(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;
    let head = get_head_commit_sha(repository_dir.path())?;
    kit_output(repository_dir.path(), &["branch", "test"]);

    assert_eq!(
        kit_output(repository_dir.path(), &["branch", "--delete", "test"]),
        format!("Deleted branch test (was {}).\n", &head[..7])
    );
    assert_eq!(kit_output(repository_dir.path(), &["branch"]), "* main\n");

    Ok(())
}

#[rstest]
fn delete_nested_branch_prunes_empty_directories(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;
    kit_output(repository_dir.path(), &["branch", "feature/login"]);

    kit_output(repository_dir.path(), &["branch", "-d", "feature/login"]);

    assert!(!repository_dir.path().join(".git/refs/heads/feature").exists());
    assert!(repository_dir.path().join(".git/refs/heads").is_dir());

    Ok(())
}

#[rstest]
fn delete_missing_branch_fails(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_kit_command(init_repository_dir.path(), &["branch", "-d", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("branch 'nope' not found"));

    Ok(())
}

#[rstest]
fn delete_flag_requires_a_name(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_kit_command(init_repository_dir.path(), &["branch", "-d"])
        .assert()
        .failure();

    Ok(())
}
