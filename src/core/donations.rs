use crate::db::log::oplog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::donation::{Donation, DonationPatch};
use crate::ui::messages::{success, warning};

/// High-level business logic for donation commands.
pub struct DonationLogic;

impl DonationLogic {
    pub fn add(pool: &mut DbPool, donation: &Donation) -> AppResult<i64> {
        let id = queries::insert_donation(&pool.conn, donation)?;
        oplog(
            &pool.conn,
            "add",
            &format!("donation {id}"),
            &format!(
                "Donation of {:.2} on {} (donor {}, event {}, volunteer {})",
                donation.amount,
                donation.date_str(),
                donation.donor_id,
                donation.event_id,
                donation.volunteer_id
            ),
        )?;
        success(format!("Donation added with id {id}."));
        Ok(id)
    }

    pub fn update(pool: &mut DbPool, id: i64, patch: &DonationPatch) -> AppResult<()> {
        queries::update_donation(&pool.conn, id, patch)?;

        if patch.is_empty() {
            warning(format!(
                "No fields given for donation {id}; nothing changed."
            ));
            return Ok(());
        }

        oplog(
            &pool.conn,
            "edit",
            &format!("donation {id}"),
            "Donation updated",
        )?;
        success(format!("Donation {id} updated."));
        Ok(())
    }

    pub fn delete(pool: &mut DbPool, id: i64) -> AppResult<()> {
        queries::delete_donation(&pool.conn, id)?;
        oplog(
            &pool.conn,
            "del",
            &format!("donation {id}"),
            "Donation deleted",
        )?;
        success(format!("Donation {id} deleted."));
        Ok(())
    }
}
