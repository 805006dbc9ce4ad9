use predicates::str::contains;

mod common;
use common::{add_donation, clg, init_db_with_data, setup_test_db};

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("init_schema");

    clg()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database"));

    // all five tables must be queryable right away
    clg()
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("donors"))
        .stdout(contains("events"))
        .stdout(contains("volunteers"))
        .stdout(contains("donations"))
        .stdout(contains("users"));
}

#[test]
fn test_init_is_idempotent() {
    let db_path = setup_test_db("init_twice");
    init_db_with_data(&db_path);

    // a second init must not drop the seeded rows
    clg()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    clg()
        .args(["--db", &db_path, "list", "donors"])
        .assert()
        .success()
        .stdout(contains("Ada Lovelace"));
}

#[test]
fn test_add_donor_assigns_increasing_ids() {
    let db_path = setup_test_db("donor_ids");
    init_db_with_data(&db_path);

    clg()
        .args(["--db", &db_path, "add-donor", "--business", "Acme Ltd"])
        .assert()
        .success()
        .stdout(contains("id 2"));

    clg()
        .args(["--db", &db_path, "list", "donors"])
        .assert()
        .success()
        .stdout(contains("Ada Lovelace"))
        .stdout(contains("Acme Ltd"));
}

#[test]
fn test_donor_round_trip() {
    let db_path = setup_test_db("donor_round_trip");
    init_db_with_data(&db_path);

    clg()
        .args(["--db", &db_path, "list", "donors"])
        .assert()
        .success()
        .stdout(contains("Ada Lovelace"))
        .stdout(contains("AB1 2CD"))
        .stdout(contains("12"))
        .stdout(contains("0123 456 789"));
}

#[test]
fn test_list_donations_empty() {
    let db_path = setup_test_db("list_empty");
    init_db_with_data(&db_path);

    clg()
        .args(["--db", &db_path, "list", "donations"])
        .assert()
        .success()
        .stdout(contains("No donations recorded."));
}

#[test]
fn test_add_event_negative_cost_rejected() {
    let db_path = setup_test_db("negative_cost");
    init_db_with_data(&db_path);

    clg()
        .args([
            "--db",
            &db_path,
            "add-event",
            "Bad Event",
            "--cost",
            "-5.0",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid amount"));
}

#[test]
fn test_add_donation_invalid_date_rejected() {
    let db_path = setup_test_db("bad_date");
    init_db_with_data(&db_path);

    clg()
        .args([
            "--db",
            &db_path,
            "add-donation",
            "--amount",
            "10",
            "--date",
            "01/12/2025",
            "--donor",
            "1",
            "--event",
            "1",
            "--volunteer",
            "1",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_log_print_records_operations() {
    let db_path = setup_test_db("oplog");
    init_db_with_data(&db_path);
    add_donation(&db_path, "50.0", "2025-12-01");

    clg()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Donor 'Ada Lovelace' added"))
        .stdout(contains("Event 'Winter Gala' added"))
        .stdout(contains("donation 1"));
}

#[test]
fn test_db_info_reports_counts() {
    let db_path = setup_test_db("db_info");
    init_db_with_data(&db_path);
    add_donation(&db_path, "50.0", "2025-12-01");
    add_donation(&db_path, "25.0", "2025-12-02");

    clg()
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("donations"))
        .stdout(contains("2025-12-01"))
        .stdout(contains("2025-12-02"));
}

#[test]
fn test_db_check_passes_on_fresh_database() {
    let db_path = setup_test_db("db_check");
    init_db_with_data(&db_path);

    clg()
        .args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("integrity check passed"));
}
