use std::path::PathBuf;

use chrono::Utc;

use crate::db::open_data_dir;
use crate::error::Result;
use crate::seed::demo_records;
use crate::settings::{load_settings, save_settings, shellexpand_path};
use crate::store::{AccountRepository, Store, UuidIds, RECORDS_KEY};

pub fn run(data_dir: Option<String>) -> Result<()> {
    let mut settings = load_settings();
    if let Some(dir) = data_dir {
        settings.data_dir = shellexpand_path(&dir);
    }
    save_settings(&settings)?;

    let resolved = PathBuf::from(&settings.data_dir);
    let conn = open_data_dir(&resolved)?;
    let store = Store::new(&conn);

    if store.load_optional::<serde_json::Value>(RECORDS_KEY).is_none() {
        store.save_local(RECORDS_KEY, &demo_records())?;
    }
    let repo = AccountRepository::open(store, Box::new(UuidIds::new("acc")), Utc::now())?;

    println!("Initialized fluxaudit at {}", resolved.display());
    println!("{} accounts on file", repo.accounts().len());
    Ok(())
}
