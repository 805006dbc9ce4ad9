//! Record store and query service: per-entity CRUD plus the donation
//! lookups. The deletion guard for donors, events and volunteers lives
//! here so the rule cannot be bypassed by any caller.

use crate::errors::{AppError, AppResult};
use crate::models::donation::{Donation, DonationPatch};
use crate::models::donor::{Donor, DonorPatch};
use crate::models::event::{Event, EventPatch};
use crate::models::user::User;
use crate::models::volunteer::{Volunteer, VolunteerPatch};
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{Connection, OptionalExtension, Row, ToSql, params};

// ---------------------------------------------------------------------
// Row mappers
// ---------------------------------------------------------------------

pub fn map_donor_row(row: &Row) -> rusqlite::Result<Donor> {
    Ok(Donor {
        id: row.get("id")?,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        business_name: row.get("business_name")?,
        postcode: row.get("postcode")?,
        house_number: row.get("house_number")?,
        phone: row.get("phone")?,
    })
}

pub fn map_event_row(row: &Row) -> rusqlite::Result<Event> {
    let booking: Option<String> = row.get("booking_at")?;
    let booking_at = match booking {
        Some(s) if !s.is_empty() => {
            let dt = NaiveDateTime::parse_from_str(&s, "%Y-%m-%d %H:%M").map_err(|_| {
                rusqlite::Error::FromSqlConversionFailure(
                    0,
                    rusqlite::types::Type::Text,
                    Box::new(AppError::InvalidDateTime(s.clone())),
                )
            })?;
            Some(dt)
        }
        _ => None,
    };

    Ok(Event {
        id: row.get("id")?,
        name: row.get("name")?,
        room_info: row.get("room_info")?,
        booking_at,
        cost: row.get("cost")?,
    })
}

pub fn map_volunteer_row(row: &Row) -> rusqlite::Result<Volunteer> {
    Ok(Volunteer {
        id: row.get("id")?,
        name: row.get("name")?,
        role: row.get("role")?,
        event_id: row.get("event_id")?,
    })
}

pub fn map_donation_row(row: &Row) -> rusqlite::Result<Donation> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    Ok(Donation {
        id: row.get("id")?,
        amount: row.get("amount")?,
        date,
        gift_aid: row.get::<_, i64>("gift_aid")? != 0,
        notes: row.get("notes")?,
        donor_id: row.get("donor_id")?,
        event_id: row.get("event_id")?,
        volunteer_id: row.get("volunteer_id")?,
    })
}

pub fn map_user_row(row: &Row) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get("id")?,
        username: row.get("username")?,
        password_hash: row.get("password_hash")?,
    })
}

// ---------------------------------------------------------------------
// Inserts
// ---------------------------------------------------------------------

pub fn insert_donor(conn: &Connection, d: &Donor) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO donors (first_name, last_name, business_name, postcode, house_number, phone)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            d.first_name,
            d.last_name,
            d.business_name,
            d.postcode,
            d.house_number,
            d.phone,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn insert_event(conn: &Connection, ev: &Event) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO events (name, room_info, booking_at, cost)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            ev.name,
            ev.room_info,
            ev.booking_at
                .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string()),
            ev.cost,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn insert_volunteer(conn: &Connection, v: &Volunteer) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO volunteers (name, role, event_id)
         VALUES (?1, ?2, ?3)",
        params![v.name, v.role, v.event_id],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn insert_donation(conn: &Connection, d: &Donation) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO donations (amount, date, gift_aid, notes, donor_id, event_id, volunteer_id)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            d.amount,
            d.date.format("%Y-%m-%d").to_string(),
            if d.gift_aid { 1 } else { 0 },
            d.notes,
            d.donor_id,
            d.event_id,
            d.volunteer_id,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Insert an admin account. The UNIQUE constraint on `username` is mapped
/// to `DuplicateUsername` so a duplicate never aborts the process.
pub fn insert_user(conn: &Connection, username: &str, password_hash: &str) -> AppResult<i64> {
    match conn.execute(
        "INSERT INTO users (username, password_hash) VALUES (?1, ?2)",
        params![username, password_hash],
    ) {
        Ok(_) => Ok(conn.last_insert_rowid()),
        Err(rusqlite::Error::SqliteFailure(e, _))
            if e.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            Err(AppError::DuplicateUsername(username.to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

// ---------------------------------------------------------------------
// Single-row reads
// ---------------------------------------------------------------------

pub fn get_donor(conn: &Connection, id: i64) -> AppResult<Donor> {
    conn.query_row("SELECT * FROM donors WHERE id = ?1", [id], map_donor_row)
        .optional()?
        .ok_or(AppError::NotFound {
            entity: "donor",
            id,
        })
}

pub fn get_event(conn: &Connection, id: i64) -> AppResult<Event> {
    conn.query_row("SELECT * FROM events WHERE id = ?1", [id], map_event_row)
        .optional()?
        .ok_or(AppError::NotFound {
            entity: "event",
            id,
        })
}

pub fn get_volunteer(conn: &Connection, id: i64) -> AppResult<Volunteer> {
    conn.query_row(
        "SELECT * FROM volunteers WHERE id = ?1",
        [id],
        map_volunteer_row,
    )
    .optional()?
    .ok_or(AppError::NotFound {
        entity: "volunteer",
        id,
    })
}

pub fn get_donation(conn: &Connection, id: i64) -> AppResult<Donation> {
    conn.query_row(
        "SELECT * FROM donations WHERE id = ?1",
        [id],
        map_donation_row,
    )
    .optional()?
    .ok_or(AppError::NotFound {
        entity: "donation",
        id,
    })
}

pub fn find_user(conn: &Connection, username: &str) -> AppResult<Option<User>> {
    Ok(conn
        .query_row(
            "SELECT * FROM users WHERE username = ?1",
            [username],
            map_user_row,
        )
        .optional()?)
}

// ---------------------------------------------------------------------
// Listings
// ---------------------------------------------------------------------

pub fn list_donors(conn: &Connection) -> AppResult<Vec<Donor>> {
    collect(conn, "SELECT * FROM donors ORDER BY id ASC", map_donor_row)
}

pub fn list_events(conn: &Connection) -> AppResult<Vec<Event>> {
    collect(conn, "SELECT * FROM events ORDER BY id ASC", map_event_row)
}

pub fn list_volunteers(conn: &Connection) -> AppResult<Vec<Volunteer>> {
    collect(
        conn,
        "SELECT * FROM volunteers ORDER BY id ASC",
        map_volunteer_row,
    )
}

pub fn list_donations(conn: &Connection) -> AppResult<Vec<Donation>> {
    collect(
        conn,
        "SELECT * FROM donations ORDER BY id ASC",
        map_donation_row,
    )
}

pub fn list_users(conn: &Connection) -> AppResult<Vec<User>> {
    collect(conn, "SELECT * FROM users ORDER BY id ASC", map_user_row)
}

fn collect<T, F>(conn: &Connection, sql: &str, mapper: F) -> AppResult<Vec<T>>
where
    F: Fn(&Row) -> rusqlite::Result<T>,
{
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map([], mapper)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------------------------------------------------
// Donation searches (insertion order, i.e. by increasing id)
// ---------------------------------------------------------------------

pub fn donations_by_donor(conn: &Connection, donor_id: i64) -> AppResult<Vec<Donation>> {
    donations_where(conn, "donor_id", donor_id)
}

pub fn donations_by_event(conn: &Connection, event_id: i64) -> AppResult<Vec<Donation>> {
    donations_where(conn, "event_id", event_id)
}

pub fn donations_by_volunteer(conn: &Connection, volunteer_id: i64) -> AppResult<Vec<Donation>> {
    donations_where(conn, "volunteer_id", volunteer_id)
}

fn donations_where(conn: &Connection, column: &str, id: i64) -> AppResult<Vec<Donation>> {
    let sql = format!("SELECT * FROM donations WHERE {column} = ?1 ORDER BY id ASC");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([id], map_donation_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------------------------------------------------
// Updates
// ---------------------------------------------------------------------

pub fn update_donor(conn: &Connection, id: i64, patch: &DonorPatch) -> AppResult<()> {
    let mut cols: Vec<&str> = Vec::new();
    let mut vals: Vec<Box<dyn ToSql>> = Vec::new();
    push(&mut cols, &mut vals, "first_name", &patch.first_name);
    push(&mut cols, &mut vals, "last_name", &patch.last_name);
    push(&mut cols, &mut vals, "business_name", &patch.business_name);
    push(&mut cols, &mut vals, "postcode", &patch.postcode);
    push(&mut cols, &mut vals, "house_number", &patch.house_number);
    push(&mut cols, &mut vals, "phone", &patch.phone);
    apply_update(conn, "donors", "donor", id, cols, vals)
}

pub fn update_event(conn: &Connection, id: i64, patch: &EventPatch) -> AppResult<()> {
    let mut cols: Vec<&str> = Vec::new();
    let mut vals: Vec<Box<dyn ToSql>> = Vec::new();
    push(&mut cols, &mut vals, "name", &patch.name);
    push(&mut cols, &mut vals, "room_info", &patch.room_info);
    push(
        &mut cols,
        &mut vals,
        "booking_at",
        &patch
            .booking_at
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string()),
    );
    push(&mut cols, &mut vals, "cost", &patch.cost);
    apply_update(conn, "events", "event", id, cols, vals)
}

pub fn update_volunteer(conn: &Connection, id: i64, patch: &VolunteerPatch) -> AppResult<()> {
    let mut cols: Vec<&str> = Vec::new();
    let mut vals: Vec<Box<dyn ToSql>> = Vec::new();
    push(&mut cols, &mut vals, "name", &patch.name);
    push(&mut cols, &mut vals, "role", &patch.role);
    push(&mut cols, &mut vals, "event_id", &patch.event_id);
    apply_update(conn, "volunteers", "volunteer", id, cols, vals)
}

pub fn update_donation(conn: &Connection, id: i64, patch: &DonationPatch) -> AppResult<()> {
    let mut cols: Vec<&str> = Vec::new();
    let mut vals: Vec<Box<dyn ToSql>> = Vec::new();
    push(&mut cols, &mut vals, "amount", &patch.amount);
    push(
        &mut cols,
        &mut vals,
        "date",
        &patch.date.map(|d| d.format("%Y-%m-%d").to_string()),
    );
    push(
        &mut cols,
        &mut vals,
        "gift_aid",
        &patch.gift_aid.map(|g| if g { 1i64 } else { 0 }),
    );
    push(&mut cols, &mut vals, "notes", &patch.notes);
    apply_update(conn, "donations", "donation", id, cols, vals)
}

fn push<T: ToSql + Clone + 'static>(
    cols: &mut Vec<&'static str>,
    vals: &mut Vec<Box<dyn ToSql>>,
    column: &'static str,
    value: &Option<T>,
) {
    if let Some(v) = value {
        cols.push(column);
        vals.push(Box::new(v.clone()));
    }
}

/// Apply only the set fields. The identifier is checked first so that an
/// update against a missing row reports NotFound instead of silently
/// doing nothing; an all-unset patch is a checked no-op.
fn apply_update(
    conn: &Connection,
    table: &str,
    entity: &'static str,
    id: i64,
    cols: Vec<&'static str>,
    mut vals: Vec<Box<dyn ToSql>>,
) -> AppResult<()> {
    if !row_exists(conn, table, id)? {
        return Err(AppError::NotFound { entity, id });
    }

    if cols.is_empty() {
        return Ok(());
    }

    let sets = cols
        .iter()
        .map(|c| format!("{c} = ?"))
        .collect::<Vec<_>>()
        .join(", ");
    let sql = format!("UPDATE {table} SET {sets} WHERE id = ?");

    vals.push(Box::new(id));
    let refs: Vec<&dyn ToSql> = vals.iter().map(|v| v.as_ref()).collect();
    conn.execute(&sql, &refs[..])?;
    Ok(())
}

fn row_exists(conn: &Connection, table: &str, id: i64) -> AppResult<bool> {
    let sql = format!("SELECT 1 FROM {table} WHERE id = ?1 LIMIT 1");
    let mut stmt = conn.prepare(&sql)?;
    Ok(stmt.exists([id])?)
}

// ---------------------------------------------------------------------
// Deletes
// ---------------------------------------------------------------------

pub fn delete_donor(conn: &mut Connection, id: i64) -> AppResult<()> {
    guarded_delete(conn, "donors", "donor", "donor_id", id)
}

pub fn delete_event(conn: &mut Connection, id: i64) -> AppResult<()> {
    guarded_delete(conn, "events", "event", "event_id", id)
}

pub fn delete_volunteer(conn: &mut Connection, id: i64) -> AppResult<()> {
    guarded_delete(conn, "volunteers", "volunteer", "volunteer_id", id)
}

pub fn delete_donation(conn: &Connection, id: i64) -> AppResult<()> {
    let deleted = conn.execute("DELETE FROM donations WHERE id = ?1", [id])?;
    if deleted == 0 {
        return Err(AppError::NotFound {
            entity: "donation",
            id,
        });
    }
    Ok(())
}

pub fn delete_user(conn: &Connection, id: i64) -> AppResult<()> {
    let deleted = conn.execute("DELETE FROM users WHERE id = ?1", [id])?;
    if deleted == 0 {
        return Err(AppError::NotFound { entity: "user", id });
    }
    Ok(())
}

/// Check-then-delete inside one transaction: a target referenced by any
/// donation is left untouched and the attempt fails with
/// DependencyExists. The transaction rolls back on every error path.
fn guarded_delete(
    conn: &mut Connection,
    table: &str,
    entity: &'static str,
    fk_column: &str,
    id: i64,
) -> AppResult<()> {
    let tx = conn.transaction()?;

    let donations: i64 = {
        let sql = format!("SELECT COUNT(*) FROM donations WHERE {fk_column} = ?1");
        tx.query_row(&sql, [id], |row| row.get(0))?
    };

    if donations > 0 {
        return Err(AppError::DependencyExists {
            entity,
            id,
            donations,
        });
    }

    let deleted = tx.execute(&format!("DELETE FROM {table} WHERE id = ?1"), [id])?;
    if deleted == 0 {
        return Err(AppError::NotFound { entity, id });
    }

    tx.commit()?;
    Ok(())
}
