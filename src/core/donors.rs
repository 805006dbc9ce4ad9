use crate::db::log::oplog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::donor::{Donor, DonorPatch};
use crate::ui::messages::{success, warning};

/// High-level business logic for donor commands.
pub struct DonorLogic;

impl DonorLogic {
    pub fn add(pool: &mut DbPool, donor: &Donor) -> AppResult<i64> {
        let id = queries::insert_donor(&pool.conn, donor)?;
        oplog(
            &pool.conn,
            "add",
            &format!("donor {id}"),
            &format!("Donor '{}' added", donor.display_name()),
        )?;
        success(format!("Donor added with id {id}."));
        Ok(id)
    }

    pub fn update(pool: &mut DbPool, id: i64, patch: &DonorPatch) -> AppResult<()> {
        queries::update_donor(&pool.conn, id, patch)?;

        if patch.is_empty() {
            warning(format!("No fields given for donor {id}; nothing changed."));
            return Ok(());
        }

        oplog(&pool.conn, "edit", &format!("donor {id}"), "Donor updated")?;
        success(format!("Donor {id} updated."));
        Ok(())
    }

    pub fn delete(pool: &mut DbPool, id: i64) -> AppResult<()> {
        queries::delete_donor(&mut pool.conn, id)?;
        oplog(&pool.conn, "del", &format!("donor {id}"), "Donor deleted")?;
        success(format!("Donor {id} deleted."));
        Ok(())
    }
}
