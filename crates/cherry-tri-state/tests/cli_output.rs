//! Integration tests for CLI output behavior
//!
//! The default behavior is quiet (no logs). Use -v/--verbose to enable logs.

use std::path::Path;
use std::process::{Command, Output, Stdio};

use cherry_git::test_support::{
    commit_on_branch, create_branch, init_repo_with_commit, set_head_branch,
};
use tempfile::TempDir;

struct Fixture {
    dir: TempDir,
    renamed: String,
    picked: String,
    fresh: String,
}

/// upstream gets "[RFC] Fix race" and a patch identical to one on topic;
/// topic gets "[PATCH] Fix race" with different content, the identical
/// patch, and "Add retry logic".
fn fixture() -> Fixture {
    let dir = TempDir::new().unwrap();
    let path = dir.path();
    init_repo_with_commit(path).unwrap();
    create_branch(path, "upstream").unwrap();
    create_branch(path, "topic").unwrap();

    commit_on_branch(path, "upstream", "race.c", "lock();\n", "[RFC] Fix race").unwrap();
    commit_on_branch(path, "upstream", "doc.md", "docs\n", "Document setup").unwrap();

    let renamed =
        commit_on_branch(path, "topic", "race.c", "mutex();\n", "[PATCH] Fix race").unwrap();
    let picked = commit_on_branch(path, "topic", "doc.md", "docs\n", "Document setup").unwrap();
    let fresh =
        commit_on_branch(path, "topic", "retry.c", "retry();\n", "Add retry logic").unwrap();

    Fixture {
        dir,
        renamed,
        picked,
        fresh,
    }
}

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_git-cherry-tri-state"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("Failed to execute 'git-cherry-tri-state'")
}

fn run_ok(dir: &Path, args: &[&str]) -> Output {
    let output = run_in(dir, args);
    assert!(
        output.status.success(),
        "git-cherry-tri-state {:?} failed with exit code {:?}. stderr: {}",
        args,
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
    output
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

/// Assert a line reads `<state> <abbreviated sha of full_sha> <title>`.
fn assert_line(line: &str, state: char, full_sha: &str, title: &str) {
    let mut parts = line.splitn(3, ' ');
    assert_eq!(parts.next(), Some(state.to_string().as_str()), "line: {line}");
    let sha = parts.next().unwrap_or_default();
    assert!(
        sha.len() >= 7 && full_sha.starts_with(sha),
        "sha {sha} is not an abbreviation of {full_sha}"
    );
    assert_eq!(parts.next(), Some(title), "line: {line}");
}

#[test]
fn test_default_level_shows_all_states() {
    let fx = fixture();
    let output = run_ok(fx.dir.path(), &["upstream", "topic"]);
    let lines = stdout_lines(&output);

    assert_eq!(lines.len(), 3, "stdout: {lines:?}");
    assert_line(&lines[0], '~', &fx.renamed, "[PATCH] Fix race");
    assert_line(&lines[1], '+', &fx.picked, "Document setup");
    assert_line(&lines[2], '-', &fx.fresh, "Add retry logic");
}

#[test]
fn test_found_level_suppresses_other_states() {
    let fx = fixture();
    let output = run_ok(fx.dir.path(), &["--output-level", "+", "upstream", "topic"]);
    let lines = stdout_lines(&output);

    assert_eq!(lines.len(), 1, "stdout: {lines:?}");
    assert_line(&lines[0], '+', &fx.picked, "Document setup");
}

#[test]
fn test_ambiguous_level() {
    let fx = fixture();
    let output = run_ok(fx.dir.path(), &["-o", "~", "upstream", "topic"]);
    let lines = stdout_lines(&output);

    assert_eq!(lines.len(), 2, "stdout: {lines:?}");
    assert_line(&lines[0], '~', &fx.renamed, "[PATCH] Fix race");
    assert_line(&lines[1], '+', &fx.picked, "Document setup");
}

#[test]
fn test_empty_strip_title_requires_exact_titles() {
    let fx = fixture();
    let output = run_ok(fx.dir.path(), &["-s", "", "upstream", "topic"]);
    let lines = stdout_lines(&output);

    assert_eq!(lines.len(), 3, "stdout: {lines:?}");
    assert_line(&lines[0], '-', &fx.renamed, "[PATCH] Fix race");
}

#[test]
fn test_reference_defaults_to_head() {
    let fx = fixture();
    set_head_branch(fx.dir.path(), "topic").unwrap();

    let implicit = run_ok(fx.dir.path(), &["upstream"]);
    let explicit = run_ok(fx.dir.path(), &["upstream", "topic"]);
    assert_eq!(implicit.stdout, explicit.stdout);
}

#[test]
fn test_repeated_runs_are_identical() {
    let fx = fixture();
    let first = run_ok(fx.dir.path(), &["upstream", "topic"]);
    let second = run_ok(fx.dir.path(), &["upstream", "topic"]);
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_nothing_ahead_is_success_with_empty_output() {
    let fx = fixture();
    let output = run_ok(fx.dir.path(), &["topic", "topic"]);
    assert!(output.stdout.is_empty());
}

/// Verify that default mode (no flags) keeps stderr empty on success
#[test]
fn test_default_mode_suppresses_all_logs() {
    let fx = fixture();
    let output = run_ok(fx.dir.path(), &["upstream", "topic"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.is_empty(),
        "Default quiet mode should have empty stderr, got: {}",
        stderr
    );
}

/// Verify that verbose mode emits JSON logs on stderr and leaves stdout clean
#[test]
fn test_verbose_mode_emits_json_logs() {
    let fx = fixture();
    let output = run_ok(fx.dir.path(), &["-v", "upstream", "topic"]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    for line in stdout.lines() {
        assert!(!line.starts_with('{'), "stdout contains JSON line: {}", line);
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    let events: Vec<serde_json::Value> = stderr
        .lines()
        .map(|line| serde_json::from_str(line).expect("log line should be valid JSON"))
        .collect();
    assert!(
        events
            .iter()
            .any(|e| e["fields"]["event"] == "cli.run_completed"),
        "expected cli.run_completed event, got: {}",
        stderr
    );
}

/// Verify that a reader closing stdout early ends the run quietly with success
#[test]
fn test_closed_stdout_is_success() {
    let fx = fixture();
    for i in 0..20 {
        let file = format!("extra-{i}.c");
        commit_on_branch(fx.dir.path(), "topic", &file, "x\n", &format!("Extra {i}")).unwrap();
    }

    let mut child = Command::new(env!("CARGO_BIN_EXE_git-cherry-tri-state"))
        .current_dir(fx.dir.path())
        .args(["upstream", "topic"])
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn 'git-cherry-tri-state'");

    // Close the read end before the binary writes anything
    drop(child.stdout.take());

    let output = child.wait_with_output().unwrap();
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(
        output.stderr.is_empty(),
        "closed stdout should not produce diagnostics, got: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn test_unknown_upstream_fails() {
    let fx = fixture();
    let output = run_in(fx.dir.path(), &["no-such-branch", "topic"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("no-such-branch"),
        "stderr should name the reference: {}",
        stderr
    );
}

#[test]
fn test_invalid_pattern_fails() {
    let fx = fixture();
    let output = run_in(fx.dir.path(), &["-s", "[unclosed", "upstream", "topic"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid title strip pattern"), "stderr: {}", stderr);
}

#[test]
fn test_outside_repository_fails() {
    let dir = TempDir::new().unwrap();
    let output = run_in(dir.path(), &["upstream"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No git repository found"), "stderr: {}", stderr);
}
