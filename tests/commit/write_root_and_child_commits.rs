use crate::common::command::{
    AUTHOR_EMAIL, AUTHOR_NAME, empty_repository_dir, get_head_commit_sha, init_repository_dir,
    kit_commit, kit_output, run_kit_command,
};
use crate::common::file::{FileSpec, modify_file, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::path::Path;

fn count_objects(dir: &Path) -> usize {
    walkdir::WalkDir::new(dir.join(".git").join("objects"))
        .min_depth(2)
        .max_depth(2)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .count()
}

#[rstest]
fn first_commit_is_a_root_commit(
    empty_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = empty_repository_dir;
    write_file(FileSpec::new(
        repository_dir.path().join("hello"),
        "hello".to_string(),
    ));
    kit_output(repository_dir.path(), &["add", "."]);

    kit_commit(repository_dir.path(), "first commit\n\nwith a body")
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^\[main \(root-commit\) [0-9a-f]{7}\] first commit\n$",
        )?);

    // blob, tree and commit
    assert_eq!(count_objects(repository_dir.path()), 3);

    let head = get_head_commit_sha(repository_dir.path())?;
    let commit_text = kit_output(repository_dir.path(), &["cat-file", "-p", &head]);
    assert!(commit_text.starts_with("tree "));
    assert!(!commit_text.contains("parent "));
    assert!(commit_text.contains(&format!("author {} <{}> ", AUTHOR_NAME, AUTHOR_EMAIL)));
    assert!(commit_text.ends_with("\nfirst commit\n\nwith a body\n"));

    Ok(())
}

#[rstest]
fn second_commit_points_at_the_first(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;
    let first = get_head_commit_sha(repository_dir.path())?;

    modify_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        "one, again".to_string(),
    ));
    kit_output(repository_dir.path(), &["add", "."]);

    kit_commit(repository_dir.path(), "Second commit")
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^\[main [0-9a-f]{7}\] Second commit\n$",
        )?);

    let second = get_head_commit_sha(repository_dir.path())?;
    assert_ne!(first, second);

    let commit_text = kit_output(repository_dir.path(), &["cat-file", "-p", &second]);
    assert!(commit_text.contains(&format!("\nparent {}\n", first)));
    assert_eq!(kit_output(repository_dir.path(), &["status"]), "");

    Ok(())
}

#[rstest]
fn unchanged_subtrees_are_shared_between_commits(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;
    // 3 blobs, 3 trees and a commit
    assert_eq!(count_objects(repository_dir.path()), 7);

    modify_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        "uno".to_string(),
    ));
    kit_output(repository_dir.path(), &["add", "."]);
    kit_commit(repository_dir.path(), "Touch the top level")
        .assert()
        .success();

    // new blob, new root tree and a commit
    assert_eq!(count_objects(repository_dir.path()), 10);

    Ok(())
}

#[rstest]
fn commit_without_identity_fails(
    empty_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_kit_command(empty_repository_dir.path(), &["commit", "-m", "anonymous"])
        .env_remove("GIT_AUTHOR_NAME")
        .env_remove("GIT_AUTHOR_EMAIL")
        .assert()
        .failure()
        .stderr(predicate::str::contains("author identity unknown"));

    Ok(())
}

#[rstest]
fn commit_with_empty_message_fails(
    empty_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    kit_commit(empty_repository_dir.path(), "\n\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty commit message"));

    assert!(
        !empty_repository_dir
            .path()
            .join(".git/refs/heads/main")
            .exists()
    );

    Ok(())
}
