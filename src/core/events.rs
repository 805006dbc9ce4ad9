use crate::db::log::oplog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::event::{Event, EventPatch};
use crate::ui::messages::{success, warning};

/// High-level business logic for event commands.
pub struct EventLogic;

impl EventLogic {
    pub fn add(pool: &mut DbPool, event: &Event) -> AppResult<i64> {
        if event.cost < 0.0 {
            return Err(AppError::InvalidAmount(event.cost));
        }

        let id = queries::insert_event(&pool.conn, event)?;
        oplog(
            &pool.conn,
            "add",
            &format!("event {id}"),
            &format!("Event '{}' added", event.name),
        )?;
        success(format!("Event added with id {id}."));
        Ok(id)
    }

    pub fn update(pool: &mut DbPool, id: i64, patch: &EventPatch) -> AppResult<()> {
        if let Some(cost) = patch.cost
            && cost < 0.0
        {
            return Err(AppError::InvalidAmount(cost));
        }

        queries::update_event(&pool.conn, id, patch)?;

        if patch.is_empty() {
            warning(format!("No fields given for event {id}; nothing changed."));
            return Ok(());
        }

        oplog(&pool.conn, "edit", &format!("event {id}"), "Event updated")?;
        success(format!("Event {id} updated."));
        Ok(())
    }

    pub fn delete(pool: &mut DbPool, id: i64) -> AppResult<()> {
        queries::delete_event(&mut pool.conn, id)?;
        oplog(&pool.conn, "del", &format!("event {id}"), "Event deleted")?;
        success(format!("Event {id} deleted."));
        Ok(())
    }
}
