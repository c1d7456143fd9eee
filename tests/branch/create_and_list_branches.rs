use crate::common::command::{
    empty_repository_dir, get_head_commit_sha, init_repository_dir, kit_output, run_kit_command,
};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn list_only_the_current_branch_after_first_commit(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(
        kit_output(init_repository_dir.path(), &["branch"]),
        "* main\n"
    );

    Ok(())
}

#[rstest]
fn create_branch_at_current_commit(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;

    assert_eq!(kit_output(repository_dir.path(), &["branch", "test"]), "");
    assert_eq!(
        kit_output(repository_dir.path(), &["branch"]),
        "* main\n  test\n"
    );

    let head = get_head_commit_sha(repository_dir.path())?;
    let branch_tip =
        std::fs::read_to_string(repository_dir.path().join(".git/refs/heads/test"))?;
    assert_eq!(branch_tip, format!("{}\n", head));

    Ok(())
}

#[rstest]
fn nested_branch_names_are_listed_by_full_name(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;

    kit_output(repository_dir.path(), &["branch", "feature/login"]);
    kit_output(repository_dir.path(), &["branch", "alpha"]);

    assert_eq!(
        kit_output(repository_dir.path(), &["branch"]),
        "  alpha\n  feature/login\n* main\n"
    );

    Ok(())
}

#[rstest]
fn create_existing_branch_fails(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_kit_command(init_repository_dir.path(), &["branch", "main"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    Ok(())
}

#[rstest]
#[case("bad..name")]
#[case(".hidden")]
#[case("ends.lock")]
#[case("with space")]
fn create_branch_with_invalid_name_fails(
    init_repository_dir: TempDir,
    #[case] name: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    run_kit_command(init_repository_dir.path(), &["branch", name])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid branch name"));

    Ok(())
}

#[rstest]
fn create_branch_before_first_commit_fails(
    empty_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_kit_command(empty_repository_dir.path(), &["branch", "test"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not have any commits yet"));

    Ok(())
}
