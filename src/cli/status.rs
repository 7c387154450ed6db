use std::path::PathBuf;

use crate::db::{get_connection, DB_FILE};
use crate::error::Result;
use crate::models::{Account, BusinessRecord};
use crate::settings::load_settings;
use crate::store::{Store, ACCOUNTS_KEY, RECORDS_KEY};

pub fn run() -> Result<()> {
    let settings = load_settings();
    let data_dir = PathBuf::from(&settings.data_dir);
    let db_path = data_dir.join(DB_FILE);

    println!("Data dir:   {}", data_dir.display());
    println!("Database:   {}", db_path.display());
    println!("Page size:  {}", settings.page_size);

    if db_path.exists() {
        let conn = get_connection(&db_path)?;
        let store = Store::new(&conn);
        let records: Option<Vec<BusinessRecord>> = store.load_optional(RECORDS_KEY);
        let accounts: Option<Vec<Account>> = store.load_optional(ACCOUNTS_KEY);

        println!();
        match records {
            Some(r) => println!("Records:    {}", r.len()),
            None => println!("Records:    (demo set, not stored)"),
        }
        match accounts {
            Some(a) => println!("Accounts:   {}", a.len()),
            None => println!("Accounts:   (not seeded)"),
        }
    } else {
        println!();
        println!("Database not found. Run `fluxaudit init` to set up.");
    }

    Ok(())
}
