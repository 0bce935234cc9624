use assert_cmd::prelude::*; // Add methods on commands
use predicates::prelude::*; // Used for writing assertions
use std::{fs, process::Command}; // Run programs

const BIN_NAME: &str = "bracket-ledger";

#[test]
fn sample_input_output() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(BIN_NAME)?;

    cmd.arg("sample/actions.csv");

    cmd.assert()
        .success()
        .stdout(fs::read_to_string("sample/account.csv")?)
        .stderr("");

    Ok(())
}

#[test]
fn explicit_account_report() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(BIN_NAME)?;

    cmd.arg("sample/actions.csv").arg("account");

    cmd.assert()
        .success()
        .stdout(fs::read_to_string("sample/account.csv")?);

    Ok(())
}

#[test]
fn no_actions_prints_seed_account() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(BIN_NAME)?;

    cmd.arg("sample/no_actions.csv");

    cmd.assert()
        .success()
        .stdout(
            r#"name,account,balance,income,expenses,transactions,notifications,requests,contacts
John Smith,4829 1038 5567,1234.56,677.50,123.31,12,5,3,6
"#,
        )
        .stderr("");

    Ok(())
}

#[test]
fn overdraft_is_allowed() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(BIN_NAME)?;

    cmd.arg("sample/overdraft.csv");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "John Smith,4829 1038 5567,-65.44,677.50,1423.31,14,7,3,6\n",
        ))
        .stderr("");

    Ok(())
}

#[test]
fn daily_report() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(BIN_NAME)?;

    cmd.arg("sample/actions.csv").arg("daily");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with(
            "date,label,daily_total,transactions\n",
        ))
        .stdout(predicate::str::contains(",-34.56,1\n"))
        .stdout(predicate::str::contains(
            "2025-12-31,\"Wednesday, Dec 31\",-7.24,1\n",
        ))
        .stdout(predicate::str::ends_with(
            "2025-12-27,\"Saturday, Dec 27\",587.01,3\n",
        ))
        .stderr("");

    Ok(())
}

#[test]
fn cli_non_existing_input_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(BIN_NAME)?;

    cmd.arg("sample/actions_non_existing.csv");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Could not read input file"))
        .stdout("");

    Ok(())
}

#[test]
fn cli_no_input_file_passed() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(BIN_NAME)?;

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Input file not passed"))
        .stdout("");

    Ok(())
}

#[test]
fn cli_unknown_report() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(BIN_NAME)?;

    cmd.arg("sample/actions.csv").arg("weekly");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown report weekly"))
        .stdout("");

    Ok(())
}
