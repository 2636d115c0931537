use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn adjacent_output_right_answer() {
    let mut cmd = Command::cargo_bin("seating").unwrap();
    cmd.args(["--mode", "adjacent", "tests/inputs/waiting_area.txt"]);

    cmd.assert()
        .success()
        .stdout(str::starts_with("#.#L.L#.##\n#LLL#LL.L#\n"))
        .stdout(str::contains("#.#L#L#.##\n\nOccupied seats: 37"));
}

#[test]
fn adjacent_is_default_mode() {
    let mut cmd = Command::cargo_bin("seating").unwrap();
    cmd.arg("tests/inputs/waiting_area.txt");

    cmd.assert().success().stdout(str::contains("Occupied seats: 37"));
}

#[test]
fn visible_output_right_answer() {
    let mut cmd = Command::cargo_bin("seating").unwrap();
    cmd.args(["-m", "visible", "tests/inputs/waiting_area.txt"]);

    cmd.assert()
        .success()
        .stdout(str::starts_with("#.L#.L#.L#\n#LLLLLL.LL\n"))
        .stdout(str::contains("Occupied seats: 26"));
}

#[test]
fn count_only_prints_answer_alone() {
    let mut cmd = Command::cargo_bin("seating").unwrap();
    cmd.args(["--mode", "visible", "--count-only", "tests/inputs/waiting_area.txt"]);

    cmd.assert().success().stdout("26\n");
}

#[test]
fn unrecognized_mode_fails() {
    let mut cmd = Command::cargo_bin("seating").unwrap();
    cmd.args(["--mode", "diagonal", "tests/inputs/waiting_area.txt"]);

    cmd.assert()
        .failure()
        .stdout(str::is_empty())
        .stderr(str::contains("diagonal is not a valid mode"));
}

#[test]
fn invalid_seat_char_fails() {
    let mut cmd = Command::cargo_bin("seating").unwrap();
    cmd.arg("tests/inputs/invalid_char.txt");

    cmd.assert()
        .failure()
        .stdout(str::is_empty())
        .stderr(str::contains("Invalid character(#) for seat"));
}

#[test]
fn ragged_layout_fails() {
    let mut cmd = Command::cargo_bin("seating").unwrap();
    cmd.arg("tests/inputs/ragged.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("Given row(3 elements), expect row which have 4 elements."));
}

#[test]
fn missing_file_fails() {
    let mut cmd = Command::cargo_bin("seating").unwrap();
    cmd.arg("tests/inputs/no_such_layout.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("no_such_layout.txt"));
}

#[test]
fn lone_seat_is_taken() {
    let mut cmd = Command::cargo_bin("seating").unwrap();
    cmd.args(["--mode", "visible", "tests/inputs/lone_seat.txt"]);

    cmd.assert()
        .success()
        .stdout("....\n.#..\n....\n\nOccupied seats: 1\n");
}
