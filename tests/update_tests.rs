use predicates::str::contains;

mod common;
use common::{add_donation, clg, init_db_with_data, setup_test_db};

#[test]
fn test_update_donor_phone_only_preserves_other_fields() {
    let db_path = setup_test_db("update_phone");
    init_db_with_data(&db_path);

    clg()
        .args(["--db", &db_path, "update-donor", "1", "--phone", "0789 000 111"])
        .assert()
        .success()
        .stdout(contains("Donor 1 updated"));

    clg()
        .args(["--db", &db_path, "list", "donors"])
        .assert()
        .success()
        .stdout(contains("Ada Lovelace"))
        .stdout(contains("AB1 2CD"))
        .stdout(contains("0789 000 111"));
}

#[test]
fn test_update_nonexistent_donor_reports_not_found() {
    let db_path = setup_test_db("update_missing");
    init_db_with_data(&db_path);

    clg()
        .args(["--db", &db_path, "update-donor", "99", "--first", "Bob"])
        .assert()
        .failure()
        .stderr(contains("No donor found with id 99"));
}

#[test]
fn test_update_donor_with_no_fields_changes_nothing() {
    let db_path = setup_test_db("update_noop");
    init_db_with_data(&db_path);

    clg()
        .args(["--db", &db_path, "update-donor", "1"])
        .assert()
        .success()
        .stdout(contains("nothing changed"));

    clg()
        .args(["--db", &db_path, "list", "donors"])
        .assert()
        .success()
        .stdout(contains("Ada Lovelace"));
}

#[test]
fn test_update_event_cost() {
    let db_path = setup_test_db("update_cost");
    init_db_with_data(&db_path);

    clg()
        .args(["--db", &db_path, "update-event", "1", "--cost", "300"])
        .assert()
        .success();

    clg()
        .args(["--db", &db_path, "list", "events"])
        .assert()
        .success()
        .stdout(contains("300.00"))
        .stdout(contains("Winter Gala"));
}

#[test]
fn test_update_event_negative_cost_rejected() {
    let db_path = setup_test_db("update_cost_negative");
    init_db_with_data(&db_path);

    clg()
        .args(["--db", &db_path, "update-event", "1", "--cost", "-1"])
        .assert()
        .failure()
        .stderr(contains("Invalid amount"));
}

#[test]
fn test_update_donation_gift_aid_flag() {
    let db_path = setup_test_db("update_gift_aid");
    init_db_with_data(&db_path);
    add_donation(&db_path, "50.0", "2025-12-01");

    clg()
        .args([
            "--db",
            &db_path,
            "update-donation",
            "1",
            "--gift-aid",
            "true",
        ])
        .assert()
        .success();

    clg()
        .args(["--db", &db_path, "search", "--donor", "1"])
        .assert()
        .success()
        .stdout(contains("yes"))
        .stdout(contains("50.00"));
}

#[test]
fn test_update_volunteer_role_preserves_assignment() {
    let db_path = setup_test_db("update_volunteer");
    init_db_with_data(&db_path);

    clg()
        .args([
            "--db",
            &db_path,
            "update-volunteer",
            "1",
            "--role",
            "coordinator",
        ])
        .assert()
        .success();

    clg()
        .args(["--db", &db_path, "list", "volunteers"])
        .assert()
        .success()
        .stdout(contains("Grace Hopper"))
        .stdout(contains("coordinator"))
        .stdout(contains("1"));
}
