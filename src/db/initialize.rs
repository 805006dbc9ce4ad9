use crate::errors::AppResult;
use rusqlite::Connection;

/// Ensure the full schema exists.
/// Idempotent and safe to run on every process start: existing tables and
/// their data are never dropped or altered.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS donors (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            first_name    TEXT,
            last_name     TEXT,
            business_name TEXT,
            postcode      TEXT,
            house_number  TEXT,
            phone         TEXT
        );

        CREATE TABLE IF NOT EXISTS events (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            name       TEXT NOT NULL,
            room_info  TEXT,
            booking_at TEXT,
            cost       REAL NOT NULL DEFAULT 0 CHECK(cost >= 0)
        );

        CREATE TABLE IF NOT EXISTS volunteers (
            id       INTEGER PRIMARY KEY AUTOINCREMENT,
            name     TEXT NOT NULL,
            role     TEXT,
            event_id INTEGER REFERENCES events(id)
        );

        CREATE TABLE IF NOT EXISTS donations (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            amount       REAL NOT NULL,
            date         TEXT NOT NULL,
            gift_aid     INTEGER NOT NULL DEFAULT 0,
            notes        TEXT,
            donor_id     INTEGER NOT NULL REFERENCES donors(id),
            event_id     INTEGER NOT NULL REFERENCES events(id),
            volunteer_id INTEGER NOT NULL REFERENCES volunteers(id)
        );

        CREATE TABLE IF NOT EXISTS users (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            username      TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_donations_donor ON donations(donor_id);
        CREATE INDEX IF NOT EXISTS idx_donations_event ON donations(event_id);
        CREATE INDEX IF NOT EXISTS idx_donations_volunteer ON donations(volunteer_id);
        "#,
    )?;
    Ok(())
}
