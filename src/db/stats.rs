use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

const TABLES: [&str; 5] = ["donors", "events", "volunteers", "donations", "users"];

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) ROW COUNTS
    //
    println!("{}• Rows:{}", CYAN, RESET);
    for table in TABLES {
        let count: i64 =
            pool.conn
                .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
                    row.get(0)
                })?;
        println!("    {:<11} {}{}{}", table, GREEN, count, RESET);
    }

    //
    // 3) DONATION DATE RANGE
    //
    let first_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM donations ORDER BY date ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM donations ORDER BY date DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Donations from:{} {}", CYAN, RESET, fmt_first);
    println!("{}•            to:{} {}", CYAN, RESET, fmt_last);

    println!();
    Ok(())
}

/// Run PRAGMA integrity_check and report the outcome.
pub fn check_integrity(pool: &mut DbPool) -> AppResult<()> {
    let result: String = pool
        .conn
        .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;

    if result == "ok" {
        success("Database integrity check passed.");
    } else {
        warning(format!("Integrity check reported: {}", result));
    }
    Ok(())
}

pub fn vacuum(pool: &mut DbPool) -> AppResult<()> {
    pool.conn.execute("VACUUM", [])?;
    success("Database vacuumed.");
    Ok(())
}
