//! Charitylog library root.
//! Exposes the CLI parser, the high-level run() function, and the
//! internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use core::donations::DonationLogic;
use core::donors::DonorLogic;
use core::events::EventLogic;
use core::list::ListLogic;
use core::log::LogLogic;
use core::search::{DonationFilter, SearchLogic};
use core::users::UserLogic;
use core::volunteers::VolunteerLogic;
use db::log::oplog;
use db::pool::DbPool;
use errors::AppResult;
use models::donation::{Donation, DonationPatch};
use models::donor::{Donor, DonorPatch};
use models::event::{Event, EventPatch};
use models::volunteer::{Volunteer, VolunteerPatch};
use ui::messages::warning;
use utils::date::{parse_date, parse_datetime};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    // Commands that do not operate on an already-configured database
    if let Commands::Init = &cli.command {
        let db_path = Config::init_all(cli.db.clone(), cli.test)?;
        let pool = DbPool::new(&db_path.to_string_lossy())?;
        db::initialize::init_db(&pool.conn)?;
        oplog(&pool.conn, "init", "", "Database initialized")?;
        return Ok(());
    }

    if let Commands::Config { print_config } = &cli.command {
        if *print_config {
            cfg.print()?;
        } else {
            warning("Nothing to do: pass --print.");
        }
        return Ok(());
    }

    let mut pool = DbPool::new(&cfg.database)?;
    // schema creation is idempotent, safe on every start
    db::initialize::init_db(&pool.conn)?;

    match &cli.command {
        Commands::AddDonor {
            first,
            last,
            business,
            postcode,
            house,
            phone,
        } => {
            let donor = Donor {
                first_name: first.clone(),
                last_name: last.clone(),
                business_name: business.clone(),
                postcode: postcode.clone(),
                house_number: house.clone(),
                phone: phone.clone(),
                ..Default::default()
            };
            DonorLogic::add(&mut pool, &donor).map(|_| ())
        }

        Commands::AddEvent {
            name,
            room,
            booking,
            cost,
        } => {
            let booking_at = match booking {
                Some(s) => Some(parse_datetime(s)?),
                None => None,
            };
            let event = Event {
                id: 0,
                name: name.clone(),
                room_info: room.clone(),
                booking_at,
                cost: *cost,
            };
            EventLogic::add(&mut pool, &event).map(|_| ())
        }

        Commands::AddVolunteer {
            name,
            role,
            event_id,
        } => {
            let volunteer = Volunteer {
                id: 0,
                name: name.clone(),
                role: role.clone(),
                event_id: *event_id,
            };
            VolunteerLogic::add(&mut pool, &volunteer).map(|_| ())
        }

        Commands::AddDonation {
            amount,
            date,
            gift_aid,
            notes,
            donor_id,
            event_id,
            volunteer_id,
        } => {
            let donation = Donation {
                id: 0,
                amount: *amount,
                date: parse_date(date)?,
                gift_aid: *gift_aid,
                notes: notes.clone(),
                donor_id: *donor_id,
                event_id: *event_id,
                volunteer_id: *volunteer_id,
            };
            DonationLogic::add(&mut pool, &donation).map(|_| ())
        }

        Commands::AddUser { username, password } => {
            UserLogic::add(&mut pool, username, password).map(|_| ())
        }

        Commands::UpdateDonor {
            id,
            first,
            last,
            business,
            postcode,
            house,
            phone,
        } => {
            let patch = DonorPatch {
                first_name: first.clone(),
                last_name: last.clone(),
                business_name: business.clone(),
                postcode: postcode.clone(),
                house_number: house.clone(),
                phone: phone.clone(),
            };
            DonorLogic::update(&mut pool, *id, &patch)
        }

        Commands::UpdateEvent {
            id,
            name,
            room,
            booking,
            cost,
        } => {
            let booking_at = match booking {
                Some(s) => Some(parse_datetime(s)?),
                None => None,
            };
            let patch = EventPatch {
                name: name.clone(),
                room_info: room.clone(),
                booking_at,
                cost: *cost,
            };
            EventLogic::update(&mut pool, *id, &patch)
        }

        Commands::UpdateVolunteer {
            id,
            name,
            role,
            event_id,
        } => {
            let patch = VolunteerPatch {
                name: name.clone(),
                role: role.clone(),
                event_id: *event_id,
            };
            VolunteerLogic::update(&mut pool, *id, &patch)
        }

        Commands::UpdateDonation {
            id,
            amount,
            date,
            gift_aid,
            notes,
        } => {
            let date = match date {
                Some(s) => Some(parse_date(s)?),
                None => None,
            };
            let patch = DonationPatch {
                amount: *amount,
                date,
                gift_aid: *gift_aid,
                notes: notes.clone(),
            };
            DonationLogic::update(&mut pool, *id, &patch)
        }

        Commands::DelDonor { id } => DonorLogic::delete(&mut pool, *id),
        Commands::DelEvent { id } => EventLogic::delete(&mut pool, *id),
        Commands::DelVolunteer { id } => VolunteerLogic::delete(&mut pool, *id),
        Commands::DelDonation { id } => DonationLogic::delete(&mut pool, *id),
        Commands::DelUser { id } => UserLogic::delete(&mut pool, *id),

        Commands::Search {
            donor,
            event,
            volunteer,
            json,
        } => {
            let filter = match (donor, event, volunteer) {
                (Some(id), _, _) => DonationFilter::Donor(*id),
                (_, Some(id), _) => DonationFilter::Event(*id),
                (_, _, Some(id)) => DonationFilter::Volunteer(*id),
                _ => unreachable!("clap group guarantees exactly one filter"),
            };
            SearchLogic::run(&mut pool, &filter, *json, cfg)
        }

        Commands::List { target } => ListLogic::run(&mut pool, target, cfg),

        Commands::Db {
            info,
            check,
            vacuum,
        } => {
            if *check {
                db::stats::check_integrity(&mut pool)?;
            }
            if *vacuum {
                db::stats::vacuum(&mut pool)?;
            }
            if *info || (!*check && !*vacuum) {
                db::stats::print_db_info(&mut pool, &cfg.database)?;
            }
            Ok(())
        }

        Commands::Log { print } => {
            if *print {
                LogLogic::print_log(&mut pool)
            } else {
                warning("Nothing to do: pass --print.");
                Ok(())
            }
        }

        // handled above
        Commands::Init | Commands::Config { .. } => Ok(()),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1. parse CLI
    let cli = Cli::parse();

    // 2. load config once
    let mut cfg = Config::load()?;

    // 3. apply DB override from the command line
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    // 4. hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
