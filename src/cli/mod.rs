pub mod accounts;
pub mod init;
pub mod records;
pub mod reset;
pub mod status;

use clap::{Args, Parser, Subcommand};
use rusqlite::Connection;

use crate::db::open_data_dir;
use crate::error::Result;
use crate::settings::get_data_dir;

pub(crate) fn open_db() -> Result<Connection> {
    open_data_dir(&get_data_dir())
}

#[derive(Parser)]
#[command(name = "fluxaudit", about = "Browse FluxAudit business records and manage accounts.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set up FluxAudit: choose a data directory and seed the demo data.
    Init {
        /// Path for FluxAudit data (default: ~/.local/share/fluxaudit)
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
    },
    /// Show one page of business records with their next billing date.
    Records(RecordsArgs),
    /// Manage user accounts.
    Accounts {
        #[command(subcommand)]
        command: AccountsCommands,
    },
    /// Discard stored records and accounts and reseed the demo data.
    Reset,
    /// Show the data directory and stored counts.
    Status,
}

#[derive(Args, Debug, Default)]
pub struct RecordsArgs {
    /// Business name prefix to search for
    #[arg(long, short = 's')]
    pub search: Option<String>,
    /// Match the search anywhere in name, category or assignee
    #[arg(long)]
    pub contains: bool,
    /// Account status: All, Open, Closed, Flagged, Active
    #[arg(long = "account-status")]
    pub account_status: Option<String>,
    /// Risk: All, Low, Medium, High, Critical
    #[arg(long)]
    pub risk: Option<String>,
    /// Signup range: all, this-month, last-30-days, this-quarter, custom
    #[arg(long)]
    pub signup: Option<String>,
    /// Custom signup range start (YYYY-MM-DD)
    #[arg(long = "from")]
    pub from_date: Option<String>,
    /// Custom signup range end (YYYY-MM-DD)
    #[arg(long = "to")]
    pub to_date: Option<String>,
    /// Only these categories (repeatable)
    #[arg(long = "category")]
    pub categories: Vec<String>,
    /// Only these assignees (repeatable)
    #[arg(long = "assignee")]
    pub assignees: Vec<String>,
    /// Only these statuses (repeatable): Flagged, Active, Closed, -
    #[arg(long = "status")]
    pub statuses: Vec<String>,
    /// Page to show (out-of-range pages are clamped)
    #[arg(long, default_value = "1", allow_negative_numbers = true)]
    pub page: i64,
    /// Rows per page (default from settings)
    #[arg(long = "page-size")]
    pub page_size: Option<usize>,
}

#[derive(Subcommand)]
pub enum AccountsCommands {
    /// List accounts.
    List {
        /// Search name, email or role
        #[arg(long, short = 's')]
        search: Option<String>,
        /// Status: All, Active, Inactive
        #[arg(long)]
        status: Option<String>,
        /// Sort: createdDesc, createdAsc, nameAsc, nameDesc
        #[arg(long, default_value = "createdDesc")]
        sort: String,
    },
    /// Create an account.
    Add {
        /// Full name
        name: String,
        /// Email address
        #[arg(long)]
        email: String,
        /// Role: Owner, Manager, Analyst, Viewer
        #[arg(long, default_value = "Viewer")]
        role: String,
        /// Status: Active, Inactive
        #[arg(long, default_value = "Active")]
        status: String,
        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,
    },
    /// Edit an account.
    Edit {
        /// Account ID (shown in `fluxaudit accounts list`)
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        role: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Delete one or more accounts.
    Delete {
        /// Account IDs
        #[arg(required = true)]
        ids: Vec<String>,
    },
}
