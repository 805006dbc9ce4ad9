use clap::{ArgGroup, Parser, Subcommand, ValueEnum};

/// Command-line interface definition for charitylog
/// CLI application to track charity donations with SQLite
#[derive(Parser)]
#[command(
    name = "charitylog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple charity tracking CLI: record donors, events, volunteers and donations using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListTarget {
    Donors,
    Events,
    Volunteers,
    Donations,
    Users,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Record a new donor
    AddDonor {
        #[arg(long, help = "First name")]
        first: Option<String>,

        #[arg(long, help = "Last name")]
        last: Option<String>,

        #[arg(long, help = "Business name")]
        business: Option<String>,

        #[arg(long, help = "Postcode")]
        postcode: Option<String>,

        #[arg(long, help = "House number")]
        house: Option<String>,

        #[arg(long, help = "Phone number")]
        phone: Option<String>,
    },

    /// Record a new charity event
    AddEvent {
        /// Event name
        name: String,

        #[arg(long, help = "Room / location info")]
        room: Option<String>,

        #[arg(long = "when", help = "Booking date-time (YYYY-MM-DD HH:MM)")]
        booking: Option<String>,

        #[arg(
            long,
            default_value_t = 0.0,
            allow_negative_numbers = true,
            help = "Event cost (non-negative)"
        )]
        cost: f64,
    },

    /// Record a new volunteer
    AddVolunteer {
        /// Volunteer name
        name: String,

        #[arg(long, help = "Role, e.g. 'steward'")]
        role: Option<String>,

        #[arg(long = "event", help = "Event the volunteer is assigned to")]
        event_id: Option<i64>,
    },

    /// Record a new donation
    AddDonation {
        #[arg(long, allow_negative_numbers = true, help = "Donation amount")]
        amount: f64,

        #[arg(long, help = "Donation date (YYYY-MM-DD)")]
        date: String,

        #[arg(long = "gift-aid", help = "Donation is eligible for gift aid")]
        gift_aid: bool,

        #[arg(long, help = "Free-text notes")]
        notes: Option<String>,

        #[arg(long = "donor", help = "Donor ID")]
        donor_id: i64,

        #[arg(long = "event", help = "Event ID")]
        event_id: i64,

        #[arg(long = "volunteer", help = "Volunteer ID")]
        volunteer_id: i64,
    },

    /// Add an admin user
    AddUser {
        username: String,
        password: String,
    },

    /// Update donor fields; omitted flags are left unchanged
    UpdateDonor {
        id: i64,

        #[arg(long)]
        first: Option<String>,

        #[arg(long)]
        last: Option<String>,

        #[arg(long)]
        business: Option<String>,

        #[arg(long)]
        postcode: Option<String>,

        #[arg(long)]
        house: Option<String>,

        #[arg(long)]
        phone: Option<String>,
    },

    /// Update event fields; omitted flags are left unchanged
    UpdateEvent {
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        room: Option<String>,

        #[arg(long = "when", help = "Booking date-time (YYYY-MM-DD HH:MM)")]
        booking: Option<String>,

        #[arg(long, allow_negative_numbers = true)]
        cost: Option<f64>,
    },

    /// Update volunteer fields; omitted flags are left unchanged
    UpdateVolunteer {
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        role: Option<String>,

        #[arg(long = "event")]
        event_id: Option<i64>,
    },

    /// Update donation fields; omitted flags are left unchanged
    UpdateDonation {
        id: i64,

        #[arg(long, allow_negative_numbers = true)]
        amount: Option<f64>,

        #[arg(long, help = "Donation date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long = "gift-aid", help = "true or false")]
        gift_aid: Option<bool>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete a donor (blocked while donations reference it)
    DelDonor { id: i64 },

    /// Delete an event (blocked while donations reference it)
    DelEvent { id: i64 },

    /// Delete a volunteer (blocked while donations reference it)
    DelVolunteer { id: i64 },

    /// Delete a donation
    DelDonation { id: i64 },

    /// Delete an admin user
    DelUser { id: i64 },

    /// Search donations by donor, event or volunteer
    #[command(group(ArgGroup::new("filter").required(true)))]
    Search {
        #[arg(long = "donor", value_name = "ID", group = "filter")]
        donor: Option<i64>,

        #[arg(long = "event", value_name = "ID", group = "filter")]
        event: Option<i64>,

        #[arg(long = "volunteer", value_name = "ID", group = "filter")]
        volunteer: Option<i64>,

        #[arg(long, help = "Print results as JSON")]
        json: bool,
    },

    /// List stored records
    List {
        #[arg(value_enum)]
        target: ListTarget,
    },

    /// Manage the database (integrity checks, maintenance, info)
    Db {
        #[arg(long = "info", help = "Show database information")]
        info: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
