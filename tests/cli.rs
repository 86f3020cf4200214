//! Integration tests for top-level CLI behavior.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn database_url(dir: &Path) -> String {
    format!("sqlite://{}?mode=rwc", dir.join("campaigns.db").display())
}

fn run_campaignctl(dir: &TempDir, args: &[&str]) -> Output {
    run_with_input(dir, args, "")
}

fn run_with_input(dir: &TempDir, args: &[&str], input: &str) -> Output {
    let bin = env!("CARGO_BIN_EXE_campaignctl");
    let mut child = Command::new(bin)
        .arg("--database-url")
        .arg(database_url(dir.path()))
        .args(args)
        .current_dir(dir.path())
        .env_remove("DATABASE_URL")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to run campaignctl binary");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("failed to write stdin");
    child.wait_with_output().expect("failed to wait for campaignctl")
}

fn seed(dir: &TempDir) {
    let output = run_campaignctl(
        dir,
        &[
            "create-campaign",
            "--name",
            "Summer Promo",
            "--start",
            "2021-06-01 00:00:00",
            "--end",
            "2021-06-10 00:00:00",
        ],
    );
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let output =
        run_campaignctl(dir, &["create-influencer", "--name", "Ana", "--email", "ana@example.com"]);
    assert!(output.status.success());
}

#[test]
fn list_on_empty_store_prints_notice() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_campaignctl(&dir, &["list-campaigns"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("No campaigns found."));
}

#[test]
fn create_assign_and_list_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    seed(&dir);

    let clash = run_campaignctl(
        &dir,
        &[
            "create-campaign",
            "--name",
            "Clash Promo",
            "--start",
            "2021-06-10 00:00:00",
            "--end",
            "2021-06-20 00:00:00",
        ],
    );
    assert!(!clash.status.success());
    assert!(String::from_utf8_lossy(&clash.stderr)
        .contains("There is already a campaign overlapping with those dates."));

    let assign = run_campaignctl(&dir, &["assign-influencer", "1", "1", "--force"]);
    assert!(assign.status.success());
    assert!(String::from_utf8_lossy(&assign.stdout)
        .contains("Influencer \"Ana\" has been successfully assigned to campaign \"Summer Promo\"."));

    let again = run_campaignctl(&dir, &["assign-influencer", "1", "1", "--force"]);
    assert!(again.status.success());
    assert!(String::from_utf8_lossy(&again.stdout).contains("is already assigned"));

    let list = run_campaignctl(&dir, &["list-campaigns", "--sort", "name", "--limit", "5"]);
    let stdout = String::from_utf8_lossy(&list.stdout);
    assert!(list.status.success());
    assert!(stdout.lines().next().unwrap().starts_with("ID"));
    assert!(stdout.contains("Summer Promo"));
    assert!(stdout.contains("1 campaign(s) listed."));
}

#[test]
fn validation_failure_reports_every_violation() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_campaignctl(
        &dir,
        &[
            "create-campaign",
            "--name",
            "AB",
            "--start",
            "2021-06-10 00:00:00",
            "--end",
            "2021-06-01 00:00:00",
        ],
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("The name must be between 3 and 255 characters long."));
    assert!(stderr.contains("End date must be after start date"));
}

#[test]
fn invalid_id_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_campaignctl(&dir, &["assign-influencer", "abc", "1", "--force"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("Campaign ID must be a positive integer. Got: abc"));
}

#[test]
fn missing_campaign_exits_with_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_campaignctl(&dir, &["assign-influencer", "7", "1", "--force"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Campaign with ID 7 not found."));
}

#[test]
fn declined_confirmation_cancels_assignment() {
    let dir = tempfile::tempdir().unwrap();
    seed(&dir);

    let output = run_with_input(&dir, &["assign-influencer", "1", "1"], "n\n");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("Do you want to proceed with this assignment?"));
    assert!(stdout.contains("Assignment cancelled."));

    let show = run_campaignctl(&dir, &["show-campaign", "1"]);
    assert!(String::from_utf8_lossy(&show.stdout).contains("No influencers assigned."));
}

#[test]
fn accepted_confirmation_assigns() {
    let dir = tempfile::tempdir().unwrap();
    seed(&dir);

    let output = run_with_input(&dir, &["assign-influencer", "1", "1"], "y\n");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("has been successfully assigned"));
}

#[test]
fn missing_fields_are_prompted_for() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_with_input(
        &dir,
        &["create-campaign"],
        "Winter Promo\n\n2021-12-01 00:00:00\n2021-12-31 00:00:00\n",
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.contains("Campaign \"Winter Promo\" created successfully with ID: 1"));
}

#[test]
fn help_shows_usage() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_campaignctl(&dir, &["list-campaigns", "--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("--sort"));
    assert!(stdout.contains("--limit"));
}

#[test]
fn invalid_subcommand_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_campaignctl(&dir, &["nonsense"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("unrecognized subcommand"));
}
