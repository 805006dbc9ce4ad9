use predicates::str::contains;

mod common;
use common::{clg, setup_test_db};

#[test]
fn test_duplicate_username_is_rejected() {
    let db_path = setup_test_db("dup_user");

    clg()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    clg()
        .args(["--db", &db_path, "add-user", "bob", "secret"])
        .assert()
        .success()
        .stdout(contains("User 'bob' added"));

    clg()
        .args(["--db", &db_path, "add-user", "bob", "another"])
        .assert()
        .failure()
        .stderr(contains("Username 'bob' already exists"));

    // the first account must still be there
    clg()
        .args(["--db", &db_path, "list", "users"])
        .assert()
        .success()
        .stdout(contains("bob"));
}

#[test]
fn test_password_is_not_stored_in_plaintext() {
    let db_path = setup_test_db("user_hash");

    clg()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    clg()
        .args(["--db", &db_path, "add-user", "alice", "s3cret-pw"])
        .assert()
        .success();

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let stored: String = conn
        .query_row(
            "SELECT password_hash FROM users WHERE username = 'alice'",
            [],
            |row| row.get(0),
        )
        .expect("read stored hash");

    assert!(!stored.contains("s3cret-pw"));
    assert!(charitylog::core::users::verify_password(&stored, "s3cret-pw"));
    assert!(!charitylog::core::users::verify_password(&stored, "wrong-pw"));
}

#[test]
fn test_delete_user_is_unconditional() {
    let db_path = setup_test_db("del_user");

    clg()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    clg()
        .args(["--db", &db_path, "add-user", "carol", "pw"])
        .assert()
        .success();

    clg()
        .args(["--db", &db_path, "del-user", "1"])
        .assert()
        .success()
        .stdout(contains("User 1 deleted"));

    clg()
        .args(["--db", &db_path, "del-user", "1"])
        .assert()
        .failure()
        .stderr(contains("No user found with id 1"));
}

#[test]
fn test_list_users_never_shows_hashes() {
    let db_path = setup_test_db("list_users");

    clg()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    clg()
        .args(["--db", &db_path, "add-user", "dave", "hunter2"])
        .assert()
        .success();

    let out = clg()
        .args(["--db", &db_path, "list", "users"])
        .assert()
        .success()
        .stdout(contains("dave"));

    let stdout = String::from_utf8_lossy(&out.get_output().stdout).to_string();
    assert!(!stdout.contains("hunter2"));
    assert!(!stdout.contains('$'));
}
