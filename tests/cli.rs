use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

fn fluxaudit(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("fluxaudit").unwrap();
    cmd.env("HOME", home).env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

fn init(home: &Path) {
    fluxaudit(home)
        .args(["init", "--data-dir"])
        .arg(home.join("data"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized fluxaudit"))
        .stdout(predicate::str::contains("8 accounts on file"));
}

#[test]
fn status_before_init_reports_missing_database() {
    let home = tempfile::tempdir().unwrap();
    fluxaudit(home.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Database not found"));
}

#[test]
fn records_first_page() {
    let home = tempfile::tempdir().unwrap();
    init(home.path());
    fluxaudit(home.path())
        .arg("records")
        .assert()
        .success()
        .stdout(predicate::str::contains("Acme Financial Services"))
        .stdout(predicate::str::contains("Showing 1-6 of 30 records (30 total), page 1/5"));
}

#[test]
fn records_prefix_search() {
    let home = tempfile::tempdir().unwrap();
    init(home.path());
    fluxaudit(home.path())
        .args(["records", "--search", "ac"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Acme Financial Services"))
        .stdout(predicate::str::contains("Global Investments").not());
}

#[test]
fn records_closed_accounts() {
    let home = tempfile::tempdir().unwrap();
    init(home.path());
    fluxaudit(home.path())
        .args(["records", "--account-status", "Closed", "--page-size", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("First National Trust"))
        .stdout(predicate::str::contains("Acme Financial Services").not());
}

#[test]
fn records_page_is_clamped() {
    let home = tempfile::tempdir().unwrap();
    init(home.path());
    fluxaudit(home.path())
        .args(["records", "--page", "99"])
        .assert()
        .success()
        .stdout(predicate::str::contains("page 5/5"));
    fluxaudit(home.path())
        .args(["records", "--page", "-3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("page 1/5"));
}

#[test]
fn records_no_matches() {
    let home = tempfile::tempdir().unwrap();
    init(home.path());
    fluxaudit(home.path())
        .args(["records", "--search", "zzz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No records match your filters."));
}

#[test]
fn accounts_add_and_list() {
    let home = tempfile::tempdir().unwrap();
    init(home.path());
    fluxaudit(home.path())
        .args(["accounts", "add", "Ada Lovelace", "--email", "ada@example.com", "--role", "Analyst"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created account: Ada Lovelace"));
    fluxaudit(home.path())
        .args(["accounts", "list", "--search", "lovelace"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ada@example.com"))
        .stdout(predicate::str::contains("Accounts (1 shown)"));
}

#[test]
fn accounts_add_rejects_bad_email() {
    let home = tempfile::tempdir().unwrap();
    init(home.path());
    fluxaudit(home.path())
        .args(["accounts", "add", "Ada", "--email", "nope"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Please enter a valid email."));
}

#[test]
fn accounts_edit_unknown_fails() {
    let home = tempfile::tempdir().unwrap();
    init(home.path());
    fluxaudit(home.path())
        .args(["accounts", "edit", "acc-missing", "--name", "X"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown account: acc-missing"));
}

#[test]
fn reset_restores_demo_data() {
    let home = tempfile::tempdir().unwrap();
    init(home.path());
    fluxaudit(home.path())
        .args(["accounts", "add", "Ada Lovelace", "--email", "ada@example.com"])
        .assert()
        .success();
    fluxaudit(home.path())
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("Reset: 30 records, 8 accounts"));
    fluxaudit(home.path())
        .args(["accounts", "list", "--search", "lovelace"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No accounts match your filters."));
}

fn add_account(home: &Path, name: &str, email: &str) -> String {
    let out = fluxaudit(home)
        .args(["accounts", "add", name, "--email", email])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(out).unwrap();
    // "Created account: <name> (<id>)"
    let start = text.rfind('(').unwrap() + 1;
    let end = text.rfind(')').unwrap();
    text[start..end].to_string()
}

fn stdout_of(home: &Path, args: &[&str]) -> String {
    let out = fluxaudit(home).args(args).assert().success().get_output().stdout.clone();
    String::from_utf8(out).unwrap()
}

#[test]
fn status_after_init_reports_counts() {
    let home = tempfile::tempdir().unwrap();
    init(home.path());
    fluxaudit(home.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Page size:  6"))
        .stdout(predicate::str::contains("Records:    30"))
        .stdout(predicate::str::contains("Accounts:   8"));
}

#[test]
fn records_risk_filter() {
    let home = tempfile::tempdir().unwrap();
    init(home.path());
    fluxaudit(home.path())
        .args(["records", "--risk", "Critical", "--page-size", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Horizon Capital Group"))
        .stdout(predicate::str::contains("Acme Financial Services").not())
        .stdout(predicate::str::contains("Secure Payment Processing").not());
}

#[test]
fn records_custom_signup_range() {
    let home = tempfile::tempdir().unwrap();
    init(home.path());
    fluxaudit(home.path())
        .args(["records", "--signup", "custom", "--from", "2024-01-01", "--to", "2024-12-31"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Acme Financial Services"))
        .stdout(predicate::str::contains("NexuPay"))
        .stdout(predicate::str::contains("Showing 1-2 of 2 records"));
}

#[test]
fn records_contains_search() {
    let home = tempfile::tempdir().unwrap();
    init(home.path());
    fluxaudit(home.path())
        .args(["records", "--search", "techpay"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TechPay Solutions"));
    fluxaudit(home.path())
        .args(["records", "--search", "pay", "--page-size", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No records match your filters."));
    fluxaudit(home.path())
        .args(["records", "--search", "pay", "--contains", "--page-size", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TechPay Solutions"))
        .stdout(predicate::str::contains("Secure Payment Processing"));
}

#[test]
fn accounts_list_status_and_sort() {
    let home = tempfile::tempdir().unwrap();
    init(home.path());
    fluxaudit(home.path())
        .args(["accounts", "list", "--status", "Inactive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Accounts (4 shown)"))
        .stdout(predicate::str::contains("Global Investments LLC"))
        .stdout(predicate::str::contains("Acme Financial Services").not());

    let asc = stdout_of(home.path(), &["accounts", "list", "--sort", "nameAsc"]);
    assert!(asc.find("Acme Financial Services").unwrap() < asc.find("TechPay Solutions").unwrap());
    let desc = stdout_of(home.path(), &["accounts", "list", "--sort", "nameDesc"]);
    assert!(desc.find("TechPay Solutions").unwrap() < desc.find("Acme Financial Services").unwrap());
}

#[test]
fn accounts_edit_updates_fields() {
    let home = tempfile::tempdir().unwrap();
    init(home.path());
    let id = add_account(home.path(), "Ada Lovelace", "ada@example.com");
    fluxaudit(home.path())
        .args(["accounts", "edit", id.as_str(), "--name", "Ada King", "--status", "Inactive"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Updated account {id}")));
    fluxaudit(home.path())
        .args(["accounts", "list", "--search", "ada", "--status", "Inactive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada King"))
        .stdout(predicate::str::contains("ada@example.com"));
}

#[test]
fn accounts_delete_one_and_many() {
    let home = tempfile::tempdir().unwrap();
    init(home.path());
    let ada = add_account(home.path(), "Ada Lovelace", "ada@example.com");
    let grace = add_account(home.path(), "Grace Hopper", "grace@example.com");
    let alan = add_account(home.path(), "Alan Turing", "alan@example.com");

    fluxaudit(home.path())
        .args(["accounts", "delete", ada.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Deleted account {ada}")));
    fluxaudit(home.path())
        .args(["accounts", "delete", grace.as_str(), alan.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 2 account(s)"));
    fluxaudit(home.path())
        .args(["accounts", "list", "--search", "@example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Accounts (8 shown)"));
}
