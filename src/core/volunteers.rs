use crate::db::log::oplog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::volunteer::{Volunteer, VolunteerPatch};
use crate::ui::messages::{success, warning};

/// High-level business logic for volunteer commands.
pub struct VolunteerLogic;

impl VolunteerLogic {
    pub fn add(pool: &mut DbPool, volunteer: &Volunteer) -> AppResult<i64> {
        let id = queries::insert_volunteer(&pool.conn, volunteer)?;
        oplog(
            &pool.conn,
            "add",
            &format!("volunteer {id}"),
            &format!("Volunteer '{}' added", volunteer.name),
        )?;
        success(format!("Volunteer added with id {id}."));
        Ok(id)
    }

    pub fn update(pool: &mut DbPool, id: i64, patch: &VolunteerPatch) -> AppResult<()> {
        queries::update_volunteer(&pool.conn, id, patch)?;

        if patch.is_empty() {
            warning(format!(
                "No fields given for volunteer {id}; nothing changed."
            ));
            return Ok(());
        }

        oplog(
            &pool.conn,
            "edit",
            &format!("volunteer {id}"),
            "Volunteer updated",
        )?;
        success(format!("Volunteer {id} updated."));
        Ok(())
    }

    pub fn delete(pool: &mut DbPool, id: i64) -> AppResult<()> {
        queries::delete_volunteer(&mut pool.conn, id)?;
        oplog(
            &pool.conn,
            "del",
            &format!("volunteer {id}"),
            "Volunteer deleted",
        )?;
        success(format!("Volunteer {id} deleted."));
        Ok(())
    }
}
