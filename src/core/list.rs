use crate::cli::parser::ListTarget;
use crate::config::Config;
use crate::core::search::render_donations;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::formatting::{fmt_amount, id_or_dash, opt_or_dash};
use crate::utils::table::Table;

pub struct ListLogic;

impl ListLogic {
    pub fn run(pool: &mut DbPool, target: &ListTarget, cfg: &Config) -> AppResult<()> {
        match target {
            ListTarget::Donors => list_donors(pool),
            ListTarget::Events => list_events(pool, cfg),
            ListTarget::Volunteers => list_volunteers(pool),
            ListTarget::Donations => list_donations(pool, cfg),
            ListTarget::Users => list_users(pool),
        }
    }
}

fn print_or_empty(table: Table, what: &str) {
    if table.is_empty() {
        info(format!("No {} recorded.", what));
    } else {
        print!("{}", table.render());
    }
}

fn list_donors(pool: &mut DbPool) -> AppResult<()> {
    let donors = queries::list_donors(&pool.conn)?;

    let mut table = Table::new(&["ID", "NAME", "BUSINESS", "POSTCODE", "HOUSE", "PHONE"]);
    for d in &donors {
        table.add_row(vec![
            d.id.to_string(),
            d.display_name(),
            opt_or_dash(d.business_name.as_deref()),
            opt_or_dash(d.postcode.as_deref()),
            opt_or_dash(d.house_number.as_deref()),
            opt_or_dash(d.phone.as_deref()),
        ]);
    }

    print_or_empty(table, "donors");
    Ok(())
}

fn list_events(pool: &mut DbPool, cfg: &Config) -> AppResult<()> {
    let events = queries::list_events(&pool.conn)?;

    let mut table = Table::new(&["ID", "NAME", "ROOM", "BOOKED FOR", "COST"]);
    for ev in &events {
        table.add_row(vec![
            ev.id.to_string(),
            ev.name.clone(),
            opt_or_dash(ev.room_info.as_deref()),
            opt_or_dash(Some(ev.booking_str().as_str()).filter(|s| !s.is_empty())),
            fmt_amount(ev.cost, &cfg.currency),
        ]);
    }

    print_or_empty(table, "events");
    Ok(())
}

fn list_volunteers(pool: &mut DbPool) -> AppResult<()> {
    let volunteers = queries::list_volunteers(&pool.conn)?;

    let mut table = Table::new(&["ID", "NAME", "ROLE", "EVENT"]);
    for v in &volunteers {
        table.add_row(vec![
            v.id.to_string(),
            v.name.clone(),
            opt_or_dash(v.role.as_deref()),
            id_or_dash(v.event_id),
        ]);
    }

    print_or_empty(table, "volunteers");
    Ok(())
}

fn list_donations(pool: &mut DbPool, cfg: &Config) -> AppResult<()> {
    let donations = queries::list_donations(&pool.conn)?;

    if donations.is_empty() {
        info("No donations recorded.");
        return Ok(());
    }

    print!("{}", render_donations(&donations, cfg));
    Ok(())
}

fn list_users(pool: &mut DbPool) -> AppResult<()> {
    let users = queries::list_users(&pool.conn)?;

    // never print password hashes
    let mut table = Table::new(&["ID", "USERNAME"]);
    for u in &users {
        table.add_row(vec![u.id.to_string(), u.username.clone()]);
    }

    print_or_empty(table, "users");
    Ok(())
}
