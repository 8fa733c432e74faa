// Copyright (c) 2024 PostFinance AG
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use assert_cmd::prelude::*;
use predicates::prelude::*;
use predicates::str::contains;
use std::process::{Command, Stdio};

#[test]
fn pgmulti_cli() {
    Command::cargo_bin("pgmulti")
        .unwrap()
        .stdout(Stdio::piped())
        .assert()
        .failure()
        .stderr(contains("pgmulti - Isolated PostgreSQL databases on a shared server"))
        .stderr(contains("create"))
        .stderr(contains("Create a database owned by a freshly generated role"))
        .stderr(contains("read"))
        .stderr(contains("Refresh the state of a previously created database"))
        .stderr(contains("update"))
        .stderr(contains("delete"))
        .stderr(contains("Drop a previously created database"))
        .stderr(contains("help"))
        .stderr(contains(
            "Print this message or the help of the given subcommand(s)",
        ))
        .stderr(contains("-h, --help"))
        .stderr(contains("Print help"))
        .stderr(contains("-V, --version"))
        .stderr(contains("Print version"));
}

#[test]
fn pgmulti_cli_create_help() {
    Command::cargo_bin("pgmulti")
        .unwrap()
        .arg("create")
        .arg("--help")
        .stdout(Stdio::piped())
        .assert()
        .success()
        .stdout(contains("Create a database owned by a freshly generated role."))
        .stdout(contains(
            "Prints the resulting resource state, including the generated owner credentials, as JSON.",
        ))
        .stdout(contains("create [OPTIONS]"))
        .stdout(contains("-c, --config-path <CONFIG_PATH>"))
        .stdout(contains("Path to the configuration file"))
        .stdout(contains("[default: pgmulti.yml]"))
        .stdout(contains("-h, --help"))
        .stdout(contains("-V, --version"));
}

#[test]
fn pgmulti_cli_delete_help() {
    Command::cargo_bin("pgmulti")
        .unwrap()
        .arg("delete")
        .arg("--help")
        .stdout(Stdio::piped())
        .assert()
        .success()
        .stdout(contains("Drop a previously created database."))
        .stdout(contains("The owner role is kept unless the configuration asks to drop it."))
        .stdout(contains("-c, --config-path <CONFIG_PATH>"))
        .stdout(contains("-s, --state-path <STATE_PATH>"))
        .stdout(contains("Path to the JSON state written by a previous `create`"))
        .stdout(contains("[default: pgmulti.state.json]"));
}

#[test]
fn pgmulti_create_missing_config() {
    Command::cargo_bin("pgmulti")
        .unwrap()
        .arg("create")
        .arg("-c")
        .arg("tests/resources/config/non_existing.yml")
        .assert()
        .failure()
        .stderr(contains(
            "failed to read configuration file 'tests/resources/config/non_existing.yml'",
        ));
}

#[test]
fn pgmulti_create_unreachable_server() {
    Command::cargo_bin("pgmulti")
        .unwrap()
        .arg("create")
        .arg("-c")
        .arg("tests/resources/config/unreachable.yml")
        .assert()
        .failure()
        .stderr(contains(
            "failed to connect to PostgreSQL server at 127.0.0.1:1/postgres",
        ))
        .stderr(contains("12345").not());
}

#[test]
fn pgmulti_update_is_noop() {
    Command::cargo_bin("pgmulti")
        .unwrap()
        .arg("update")
        .arg("-c")
        .arg("tests/resources/config/unreachable.yml")
        .arg("-s")
        .arg("tests/resources/state/valid.json")
        .assert()
        .success()
        .stdout(contains("\"db_name\": \"test_db\""))
        .stdout(contains("\"id\": 16384"));
}

#[test]
fn pgmulti_update_rejects_rename() {
    Command::cargo_bin("pgmulti")
        .unwrap()
        .arg("update")
        .arg("-c")
        .arg("tests/resources/config/renamed.yml")
        .arg("-s")
        .arg("tests/resources/state/valid.json")
        .assert()
        .failure()
        .stderr(contains(
            "database name changed from 'test_db' to 'renamed_db'",
        ));
}

#[test]
fn pgmulti_read_missing_state() {
    Command::cargo_bin("pgmulti")
        .unwrap()
        .arg("read")
        .arg("-c")
        .arg("tests/resources/config/valid.yml")
        .arg("-s")
        .arg("tests/resources/state/non_existing.json")
        .assert()
        .failure()
        .stderr(contains(
            "failed to read state file 'tests/resources/state/non_existing.json'",
        ));
}
