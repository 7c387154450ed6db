use chrono::Utc;

use super::open_db;
use crate::error::Result;
use crate::seed::demo_records;
use crate::store::{AccountRepository, Store, UuidIds, ACCOUNTS_KEY, RECORDS_KEY};

pub fn run() -> Result<()> {
    let conn = open_db()?;
    let store = Store::new(&conn);
    store.remove(ACCOUNTS_KEY)?;
    store.remove(RECORDS_KEY)?;

    let records = demo_records();
    store.save_local(RECORDS_KEY, &records)?;
    let repo = AccountRepository::open(store, Box::new(UuidIds::new("acc")), Utc::now())?;

    log::info!("reset local storage");
    println!(
        "Reset: {} records, {} accounts",
        records.len(),
        repo.accounts().len()
    );
    Ok(())
}
