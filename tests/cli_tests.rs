use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn solve_reports_an_immediate_win() {
    let mut cmd = Command::cargo_bin("solve").expect("bin");
    cmd.args(["--moves", "0,3,4,5", "--cache-capacity", "1009"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("value=27"))
        .stdout(predicate::str::contains("win in 1 move"));
}

#[test]
fn solve_reports_cache_statistics_on_request() {
    let mut cmd = Command::cargo_bin("solve").expect("bin");
    cmd.args(["--moves", "0,3,4,5", "--cache-capacity", "1009", "--cache-stats"]);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("cache capacity:"))
        .stderr(predicate::str::contains("cache population: 1"))
        .stderr(predicate::str::contains("bucket size frequencies:"));
}

#[test]
fn solve_rejects_an_overfilled_column() {
    let mut cmd = Command::cargo_bin("solve").expect("bin");
    cmd.args(["--moves", "0,0,0,0", "--cache-capacity", "1009"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("illegal move sequence"));
}

#[test]
fn solve_rejects_malformed_moves() {
    let mut cmd = Command::cargo_bin("solve").expect("bin");
    cmd.args(["--moves", "0,x,1", "--cache-capacity", "1009"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid column 'x'"));
}

#[test]
fn play_stops_cleanly_at_end_of_input() {
    let mut cmd = Command::cargo_bin("play").expect("bin");
    cmd.args(["--ai", "none", "--cache-capacity", "101"]);
    cmd.write_stdin("0 0\n1 1\n");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("board after 2 moves"))
        .stdout(predicate::str::contains("end of input!"));
}

#[test]
fn play_reprompts_on_bad_input() {
    let mut cmd = Command::cargo_bin("play").expect("bin");
    cmd.args(["--ai", "none", "--cache-capacity", "101"]);
    cmd.write_stdin("9 9\nnot a move\n0 0\n");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("invalid move!"))
        .stdout(predicate::str::contains("invalid input!"))
        .stdout(predicate::str::contains("board after 1 move"));
}

#[test]
fn play_announces_a_win() {
    // Two humans: X stacks column (0,0) three high for the vertical line
    // 0-9-18 while O wanders elsewhere.
    let mut cmd = Command::cargo_bin("play").expect("bin");
    cmd.args(["--ai", "none", "--cache-capacity", "101"]);
    cmd.write_stdin("0 0\n0 1\n0 0\n0 2\n0 0\n");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("player 1 has won!"));
}
