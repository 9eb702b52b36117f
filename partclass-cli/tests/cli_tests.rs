//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

/// Build command for the partclass-cli binary (found in target/debug when
/// run via cargo test).
fn partclass_cli() -> Command {
    Command::cargo_bin("partclass-cli").expect("binary built")
}

#[test]
fn test_cli_help() {
    let mut cmd = partclass_cli();

    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("MPN"));
}

#[test]
fn test_cli_version() {
    let mut cmd = partclass_cli();

    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_classify_known_part() {
    let mut cmd = partclass_cli();

    cmd.arg("classify").arg("AK8963C");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("akm"))
        .stdout(predicate::str::contains("AK8963"));
}

#[test]
fn test_cli_classify_json_output() {
    let mut cmd = partclass_cli();

    cmd.arg("classify")
        .arg("SMAJ5.0A")
        .arg("--format")
        .arg("json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("{"))
        .stdout(predicate::str::contains("littelfuse"))
        .stdout(predicate::str::contains("tvs_diode_littelfuse"));
}

#[test]
fn test_cli_classify_unknown_part_still_succeeds() {
    let mut cmd = partclass_cli();

    cmd.arg("classify").arg("NOT-A-PART-999");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("not recognized"));
}

#[test]
fn test_cli_classify_fail_on_unknown() {
    let mut cmd = partclass_cli();

    cmd.arg("classify")
        .arg("NOT-A-PART-999")
        .arg("--fail-on-unknown");
    cmd.assert().code(1);
}

#[test]
fn test_cli_replace_exit_codes() {
    let mut cmd = partclass_cli();
    cmd.arg("replace").arg("DSX321GA").arg("DSX321G");
    cmd.assert()
        .code(0)
        .stdout(predicate::str::contains("official replacement"));

    let mut cmd = partclass_cli();
    cmd.arg("replace").arg("DSX321G").arg("DSX321GA");
    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("NOT"));
}

#[test]
fn test_cli_replace_json_output() {
    let mut cmd = partclass_cli();

    cmd.arg("replace")
        .arg("DSX321GA")
        .arg("DSX321G")
        .arg("--format")
        .arg("json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"official_replacement\": true"));
}

#[test]
fn test_cli_bom_command() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "# demo BOM").unwrap();
    writeln!(file, "AK8963C").unwrap();
    writeln!(file, "SMAJ5.0A").unwrap();
    writeln!(file, "NOT-A-PART-999").unwrap();

    let mut cmd = partclass_cli();
    cmd.arg("bom").arg(file.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Recognized:   2"))
        .stdout(predicate::str::contains("Unrecognized: 1"));
}

#[test]
fn test_cli_bom_fail_on_unknown() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "NOT-A-PART-999").unwrap();

    let mut cmd = partclass_cli();
    cmd.arg("bom").arg(file.path()).arg("--fail-on-unknown");
    cmd.assert().code(1);
}

#[test]
fn test_cli_bom_nonexistent_file() {
    let mut cmd = partclass_cli();

    cmd.arg("bom").arg("does_not_exist.bom");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_cli_handlers_command() {
    let mut cmd = partclass_cli();

    cmd.arg("handlers");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("abracon"))
        .stdout(predicate::str::contains("littelfuse"));
}

#[test]
fn test_cli_handlers_verbose() {
    let mut cmd = partclass_cli();

    cmd.arg("handlers").arg("--verbose");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("crystal_abracon"));
}

#[test]
fn test_cli_output_formats_are_different() {
    let mut cmd_human = partclass_cli();
    cmd_human.arg("classify").arg("AK8963C");
    let human_output = cmd_human.output().unwrap();

    let mut cmd_json = partclass_cli();
    cmd_json
        .arg("classify")
        .arg("AK8963C")
        .arg("--format")
        .arg("json");
    let json_output = cmd_json.output().unwrap();

    assert_ne!(
        human_output.stdout, json_output.stdout,
        "Different formats should produce different output"
    );
}
