use predicates::str::contains;

mod common;
use common::{add_donation, clg, init_db_with_data, setup_test_db};

#[test]
fn test_delete_donor_without_donations_succeeds() {
    let db_path = setup_test_db("del_donor_free");
    init_db_with_data(&db_path);

    clg()
        .args(["--db", &db_path, "del-donor", "1"])
        .assert()
        .success()
        .stdout(contains("Donor 1 deleted"));
}

#[test]
fn test_delete_donor_with_donations_is_blocked() {
    let db_path = setup_test_db("del_donor_blocked");
    init_db_with_data(&db_path);
    add_donation(&db_path, "50.0", "2025-12-01");

    clg()
        .args(["--db", &db_path, "del-donor", "1"])
        .assert()
        .failure()
        .stderr(contains("Cannot delete donor 1"));

    // donor and donation must both be intact
    clg()
        .args(["--db", &db_path, "list", "donors"])
        .assert()
        .success()
        .stdout(contains("Ada Lovelace"));

    clg()
        .args(["--db", &db_path, "search", "--donor", "1"])
        .assert()
        .success()
        .stdout(contains("50.00"));
}

#[test]
fn test_delete_event_with_donations_is_blocked() {
    let db_path = setup_test_db("del_event_blocked");
    init_db_with_data(&db_path);
    add_donation(&db_path, "50.0", "2025-12-01");

    clg()
        .args(["--db", &db_path, "del-event", "1"])
        .assert()
        .failure()
        .stderr(contains("Cannot delete event 1"));

    clg()
        .args(["--db", &db_path, "list", "events"])
        .assert()
        .success()
        .stdout(contains("Winter Gala"));
}

#[test]
fn test_delete_volunteer_with_donations_is_blocked() {
    let db_path = setup_test_db("del_volunteer_blocked");
    init_db_with_data(&db_path);
    add_donation(&db_path, "50.0", "2025-12-01");

    clg()
        .args(["--db", &db_path, "del-volunteer", "1"])
        .assert()
        .failure()
        .stderr(contains("Cannot delete volunteer 1"));
}

#[test]
fn test_delete_missing_donor_reports_not_found() {
    let db_path = setup_test_db("del_donor_missing");
    init_db_with_data(&db_path);

    clg()
        .args(["--db", &db_path, "del-donor", "99"])
        .assert()
        .failure()
        .stderr(contains("No donor found with id 99"));
}

/// Full scenario: donate, watch the guard engage, remove the donation,
/// watch the guard release.
#[test]
fn test_guard_releases_after_donation_removed() {
    let db_path = setup_test_db("guard_release");
    init_db_with_data(&db_path);
    add_donation(&db_path, "50.0", "2025-12-01");

    clg()
        .args(["--db", &db_path, "search", "--donor", "1"])
        .assert()
        .success()
        .stdout(contains("50.00"));

    clg()
        .args(["--db", &db_path, "del-donor", "1"])
        .assert()
        .failure()
        .stderr(contains("Cannot delete donor 1"));

    clg()
        .args(["--db", &db_path, "del-donation", "1"])
        .assert()
        .success();

    clg()
        .args(["--db", &db_path, "del-donor", "1"])
        .assert()
        .success()
        .stdout(contains("Donor 1 deleted"));
}
