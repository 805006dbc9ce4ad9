use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::donation::Donation;
use crate::ui::messages::info;
use crate::utils::formatting::{fmt_amount, opt_or_dash, yes_no};
use crate::utils::table::Table;

/// Which foreign key a donation search filters on.
pub enum DonationFilter {
    Donor(i64),
    Event(i64),
    Volunteer(i64),
}

pub struct SearchLogic;

impl SearchLogic {
    pub fn run(pool: &mut DbPool, filter: &DonationFilter, json: bool, cfg: &Config) -> AppResult<()> {
        let donations = match filter {
            DonationFilter::Donor(id) => queries::donations_by_donor(&pool.conn, *id)?,
            DonationFilter::Event(id) => queries::donations_by_event(&pool.conn, *id)?,
            DonationFilter::Volunteer(id) => queries::donations_by_volunteer(&pool.conn, *id)?,
        };

        if json {
            println!("{}", serde_json::to_string_pretty(&donations)?);
            return Ok(());
        }

        if donations.is_empty() {
            // zero matches is a normal outcome, not an error
            info("No donations found.");
            return Ok(());
        }

        print!("{}", render_donations(&donations, cfg));
        Ok(())
    }
}

pub fn render_donations(donations: &[Donation], cfg: &Config) -> String {
    let mut table = Table::new(&[
        "ID", "DATE", "AMOUNT", "GIFT AID", "DONOR", "EVENT", "VOLUNTEER", "NOTES",
    ]);

    for d in donations {
        table.add_row(vec![
            d.id.to_string(),
            d.date_str(),
            fmt_amount(d.amount, &cfg.currency),
            yes_no(d.gift_aid).to_string(),
            d.donor_id.to_string(),
            d.event_id.to_string(),
            d.volunteer_id.to_string(),
            opt_or_dash(d.notes.as_deref()),
        ]);
    }

    table.render()
}
