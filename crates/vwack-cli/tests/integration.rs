#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;

fn vw_ack() -> Command {
    let mut cmd = Command::cargo_bin("vw-ack").unwrap();
    cmd.env_remove("VERWALTER_HOST").env_remove("VERWALTER_PORT");
    cmd
}

fn vw_ack_auto() -> Command {
    let mut cmd = Command::cargo_bin("vw-ack-auto").unwrap();
    cmd.env_remove("LITHOS_NAME")
        .env_remove("VERWALTER_HOST")
        .env_remove("VERWALTER_PORT");
    cmd
}

// ---------------------------------------------------------------------------
// vw-ack argument surface
// ---------------------------------------------------------------------------
//
// The success path idles until killed on purpose, so these tests only
// exercise surfaces that exit on their own.

#[test]
fn ack_requires_role_group_step() {
    vw_ack().assert().failure().code(2);
}

#[test]
fn ack_rejects_proceed_combined_with_error() {
    vw_ack()
        .args(["web", "workers", "cmd_migrate", "--proceed", "--error", "boom"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn ack_help_documents_the_cluster_flags() {
    vw_ack()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--verwalter-host"))
        .stdout(predicate::str::contains("--verwalter-port"))
        .stdout(predicate::str::contains("--proceed"));
}

// ---------------------------------------------------------------------------
// vw-ack-auto naming modes
// ---------------------------------------------------------------------------

#[test]
fn auto_without_environ_prints_instructions_and_exits_77() {
    vw_ack_auto()
        .assert()
        .code(77)
        .stderr(predicate::str::contains("No environ found"))
        .stderr(predicate::str::contains(
            "curl http://leader-name:8379/v1/action",
        ))
        .stderr(predicate::str::contains("\"role\":\"example-role\""))
        .stderr(predicate::str::contains("\"step\":\"cmd_example_step\""));
}

#[test]
fn auto_without_environ_uses_the_configured_port() {
    vw_ack_auto()
        .args(["--verwalter-port", "9999"])
        .assert()
        .code(77)
        .stderr(predicate::str::contains("leader-name:9999/v1/action"));
}

#[test]
fn auto_cmd_mode_prints_wait_instructions_and_exits_zero() {
    vw_ack_auto()
        .env("LITHOS_NAME", "my-app-staging/cmd.myapp-migrate-2.1235")
        .assert()
        .success()
        .stderr(predicate::str::contains("running command manually"))
        .stderr(predicate::str::contains("/v1/wait_action"))
        .stderr(predicate::str::contains("\"role\":\"my-app-staging\""))
        .stderr(predicate::str::contains("\"group\":\"myapp\""))
        .stderr(predicate::str::contains("\"step\":\"cmd_migrate\""));
}

#[test]
fn auto_cmd_mode_reflects_the_proceed_flag() {
    vw_ack_auto()
        .env("LITHOS_NAME", "my-app-staging/cmd.myapp-migrate-2.1235")
        .arg("--proceed")
        .assert()
        .success()
        .stderr(predicate::str::contains("\"update_action\":\"proceed\""));
}

#[test]
fn auto_error_flag_embeds_the_message() {
    vw_ack_auto()
        .args(["--error", "boom"])
        .assert()
        .code(77)
        .stderr(predicate::str::contains("\"update_action\":\"error\""))
        .stderr(predicate::str::contains("\"error_message\":\"boom\""));
}

#[test]
fn auto_malformed_name_is_fatal() {
    vw_ack_auto()
        .env("LITHOS_NAME", "no-slash-here")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("malformed process name"));
}
