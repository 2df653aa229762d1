use assert_cmd::prelude::*;
use std::process::Command;

fn run(args: &[&str]) -> (bool, String, String) {
    let output = Command::cargo_bin("banana-blockade")
        .unwrap()
        .args(args)
        .output()
        .unwrap();
    (
        output.status.success(),
        String::from_utf8(output.stdout).unwrap(),
        String::from_utf8(output.stderr).unwrap(),
    )
}

#[test]
fn run_one_push() {
    let (success, stdout, stderr) = run(&["levels/01-one-push.txt"]);
    assert!(success);
    assert!(stdout.starts_with("Solving levels/01-one-push.txt...\nStates created total: 4\n"));

    let solution = r"Found solution:
.S.
.B.
.G.

.S.
...
.G.

D
Moves: 1
Pushes: 1
Pulls: 0
";
    assert!(stdout.ends_with(solution), "got:\n{}", stdout);
    assert_eq!(stderr, "");
}

#[test]
fn run_pull_moves_only() {
    let (success, stdout, _) = run(&["--moves-only", "levels/03-pull-first.txt"]);
    assert!(success);
    assert!(
        stdout.ends_with("Found solution:\nrR\nMoves: 2\nPushes: 1\nPulls: 1\n"),
        "got:\n{}",
        stdout
    );
}

#[test]
fn run_print_status() {
    let (success, stdout, _) = run(&["-s", "levels/01-one-push.txt"]);
    assert!(success);
    assert!(stdout.contains("Visited new depth: 0\n"));
    assert!(stdout.contains("New best score: -8\n"));
}

#[test]
fn run_no_solution() {
    let (success, stdout, stderr) = run(&["levels/02-no-solution.txt"]);
    assert!(success);
    assert!(stdout.ends_with("No solution\n"), "got:\n{}", stdout);
    assert_eq!(stderr, "");
}

#[test]
fn run_invalid_level() {
    let (success, stdout, stderr) = run(&["levels/invalid/jagged.txt"]);
    assert!(!success);
    assert_eq!(stdout, "");
    assert!(stderr.contains("Row 1 should have 4 columns but has 3"));
}

#[test]
fn run_missing_file() {
    let (success, stdout, _) = run(&["levels/nope.txt"]);
    assert!(!success);
    assert_eq!(stdout, "");
}

#[test]
fn run_no_args() {
    let (success, stdout, _) = run(&[]);
    assert!(!success);
    assert_eq!(stdout, "");
}
