//! SQLite connection wrapper (lightweight for CLI usage).
//! One connection per process invocation; dropped on every exit path.

use rusqlite::{Connection, Result};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        // foreign_keys is a per-connection pragma
        conn.pragma_update(None, "foreign_keys", true)?;
        Ok(Self { conn })
    }
}
