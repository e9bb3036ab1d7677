//! End-to-end tests for the `modelddl` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

fn modelddl(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("modelddl").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("MODELDDL_DRIVER")
        .env_remove("MODELDDL_COMMENTS")
        .env_remove("MODELDDL_ONE_LINE")
        .env_remove("MODELDDL_AUTO_INDEXES");
    cmd
}

// Written by hand so the file keeps declaration order on disk
const SCHEMA: &str = r#"{
    "schema_version": 1,
    "models": [
        {
            "name": "User",
            "table": "users",
            "validation_rules": {
                "id": { "type": "integer", "min": 0 },
                "email": { "type": "string", "max": 255 },
                "active": { "type": "boolean", "default": true }
            },
            "available_relations": {
                "posts": {
                    "mode": "children",
                    "a": { "name": "User", "table": "users" },
                    "a_key": "id",
                    "b": { "name": "Post", "table": "posts" },
                    "b_key": "user_id"
                }
            }
        },
        {
            "name": "Post",
            "table": "posts",
            "validation_rules": {
                "id": { "type": "integer", "min": 0 },
                "user_id": { "type": "integer", "min": 0 },
                "body": { "type": ["string", "null"] }
            }
        }
    ]
}"#;

fn write_schema(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("models.json");
    std::fs::write(&path, SCHEMA).unwrap();
    path
}

#[test]
fn convert_one_line_prints_create_statements() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write_schema(&dir);

    modelddl(&dir)
        .arg("convert")
        .arg(&schema)
        .arg("--one-line")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "CREATE TABLE users (id INT(10) UNSIGNED NOT NULL AUTO_INCREMENT, \
             email VARCHAR(255) NOT NULL, \
             active TINYINT(1) UNSIGNED NOT NULL DEFAULT 1, \
             PRIMARY KEY (id));\n\nCREATE TABLE posts (",
        ))
        .stdout(predicate::str::contains("CREATE INDEX").not());
}

#[test]
fn convert_keeps_field_order_of_the_document() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write_schema(&dir);

    modelddl(&dir)
        .args(["convert", "--one-line"])
        .arg(&schema)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "CREATE TABLE posts (id INT(10) UNSIGNED NOT NULL AUTO_INCREMENT, \
             user_id INT(10) UNSIGNED NOT NULL, \
             body TEXT DEFAULT NULL, \
             PRIMARY KEY (id));",
        ));
}

#[test]
fn convert_with_auto_indexes_appends_index_statements() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write_schema(&dir);

    modelddl(&dir)
        .args(["convert", "--auto-indexes", "--driver", "MySQLDriver"])
        .arg(&schema)
        .assert()
        .success()
        .stdout(predicate::str::ends_with(
            "\n\nCREATE INDEX index_posts__user_id ON posts (user_id);\n",
        ));
}

#[test]
fn convert_reads_switches_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write_schema(&dir);
    std::fs::write(
        dir.path().join("modelddl.toml"),
        "[translator]\ncomments = true\none_line = true\n",
    )
    .unwrap();

    modelddl(&dir)
        .arg("convert")
        .arg(&schema)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "# Create table \"users\" for model \"User\"\n\nCREATE TABLE users (id",
        ));
}

#[test]
fn env_overrides_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write_schema(&dir);
    std::fs::write(dir.path().join("modelddl.toml"), "driver = \"sqlite\"\n").unwrap();

    modelddl(&dir)
        .env("MODELDDL_DRIVER", "mysql")
        .arg("drop")
        .arg(&schema)
        .assert()
        .success();
}

#[test]
fn drop_prints_drop_statements_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write_schema(&dir);

    modelddl(&dir)
        .arg("drop")
        .arg(&schema)
        .assert()
        .success()
        .stdout("DROP TABLE IF EXISTS users;\n\nDROP TABLE IF EXISTS posts;\n");
}

#[test]
fn output_flag_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write_schema(&dir);
    let out = dir.path().join("drop.sql");

    modelddl(&dir)
        .arg("drop")
        .arg(&schema)
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("2 statement(s)"));

    assert_eq!(
        std::fs::read_to_string(&out).unwrap(),
        "DROP TABLE IF EXISTS users;\n\nDROP TABLE IF EXISTS posts;\n"
    );
}

#[test]
fn unknown_driver_fails() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write_schema(&dir);

    modelddl(&dir)
        .args(["convert", "--driver", "PostgresDriver"])
        .arg(&schema)
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Unknown driver: 'PostgresDriver'"));
}

#[test]
fn malformed_schema_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();

    modelddl(&dir)
        .arg("convert")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load schema"));
}

#[test]
fn drivers_lists_registered_identities() {
    let dir = tempfile::tempdir().unwrap();

    modelddl(&dir)
        .arg("drivers")
        .assert()
        .success()
        .stdout("MySQLDriver\nmysql\n");
}
