use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::accounts::validate_draft;
use crate::error::{FluxError, Result};
use crate::models::{Account, AccountDraft, BusinessRecord};
use crate::seed::{demo_accounts, demo_records};

pub const RECORDS_KEY: &str = "fa:records";
pub const ACCOUNTS_KEY: &str = "fa:accounts";

pub struct Store<'c> {
    conn: &'c Connection,
}

impl<'c> Store<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    pub fn save_local<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)?;
        self.conn.execute(
            "INSERT INTO local_storage (key, value, updated_at) VALUES (?1, ?2, datetime('now')) \
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            rusqlite::params![key, json],
        )?;
        log::debug!("saved {key} ({} bytes)", json.len());
        Ok(())
    }

    /// The stored value, or `None` if absent or unusable.
    pub fn load_optional<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw: Option<String> = match self
            .conn
            .query_row(
                "SELECT value FROM local_storage WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()
        {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("could not read {key}: {e}");
                return None;
            }
        };
        let raw = raw?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("discarding unreadable {key}: {e}");
                None
            }
        }
    }

    pub fn load_local<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        self.load_optional(key).unwrap_or(fallback)
    }

    pub fn remove(&self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM local_storage WHERE key = ?1", [key])?;
        Ok(())
    }
}

/// Stored records, or the demo set when nothing usable is stored.
pub fn load_records(store: &Store) -> Vec<BusinessRecord> {
    store.load_optional(RECORDS_KEY).unwrap_or_else(demo_records)
}

// ---------------------------------------------------------------------------
// Id generation
// ---------------------------------------------------------------------------

pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Random v4 UUIDs behind a prefix: `acc-6f1c…`.
pub struct UuidIds {
    prefix: String,
}

impl UuidIds {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
        }
    }
}

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> String {
        format!("{}-{}", self.prefix, uuid::Uuid::new_v4())
    }
}

/// Monotonic counter: `acc-1`, `acc-2`, …
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            next: 1,
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

// ---------------------------------------------------------------------------
// Accounts
// ---------------------------------------------------------------------------

/// The account list, persisted under [`ACCOUNTS_KEY`] after every change.
pub struct AccountRepository<'c> {
    store: Store<'c>,
    ids: Box<dyn IdGenerator>,
    accounts: Vec<Account>,
}

impl<'c> AccountRepository<'c> {
    /// Load stored accounts, seeding (and saving) the demo accounts on first use.
    pub fn open(store: Store<'c>, mut ids: Box<dyn IdGenerator>, now: DateTime<Utc>) -> Result<Self> {
        let accounts = match store.load_optional::<Vec<Account>>(ACCOUNTS_KEY) {
            Some(accounts) => accounts,
            None => {
                let seeded = demo_accounts(&load_records(&store), ids.as_mut(), now);
                store.save_local(ACCOUNTS_KEY, &seeded)?;
                log::info!("seeded {} accounts", seeded.len());
                seeded
            }
        };
        Ok(Self {
            store,
            ids,
            accounts,
        })
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn get(&self, id: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    /// Validate and add a new account at the front of the list.
    pub fn create(&mut self, draft: AccountDraft, now: DateTime<Utc>) -> Result<&Account> {
        validate_draft(&draft)?;
        let account = Account {
            id: self.ids.next_id(),
            name: draft.name,
            email: draft.email,
            role: draft.role,
            status: draft.status,
            notes: draft.notes,
            created_at: now,
        };
        log::debug!("creating account {}", account.id);
        let mut next = Vec::with_capacity(self.accounts.len() + 1);
        next.push(account);
        next.extend(self.accounts.iter().cloned());
        self.commit(next)?;
        Ok(&self.accounts[0])
    }

    /// Replace the editable fields of an account; id and creation time stay.
    pub fn update(&mut self, id: &str, draft: AccountDraft) -> Result<()> {
        validate_draft(&draft)?;
        let mut next = self.accounts.clone();
        let account = next
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| FluxError::UnknownAccount(id.to_string()))?;
        account.name = draft.name;
        account.email = draft.email;
        account.role = draft.role;
        account.status = draft.status;
        account.notes = draft.notes;
        self.commit(next)
    }

    pub fn delete(&mut self, id: &str) -> Result<()> {
        let next: Vec<Account> = self.accounts.iter().filter(|a| a.id != id).cloned().collect();
        if next.len() == self.accounts.len() {
            return Err(FluxError::UnknownAccount(id.to_string()));
        }
        self.commit(next)
    }

    /// Remove every listed account. Unknown ids are ignored; an empty
    /// selection is an error.
    pub fn delete_many(&mut self, ids: &[String]) -> Result<usize> {
        if ids.is_empty() {
            return Err(FluxError::Validation("Select at least one account.".to_string()));
        }
        let next: Vec<Account> = self
            .accounts
            .iter()
            .filter(|a| !ids.contains(&a.id))
            .cloned()
            .collect();
        let removed = self.accounts.len() - next.len();
        self.commit(next)?;
        Ok(removed)
    }

    /// Save `next`, and only then make it the current list.
    fn commit(&mut self, next: Vec<Account>) -> Result<()> {
        self.store.save_local(ACCOUNTS_KEY, &next)?;
        self.accounts = next;
        Ok(())
    }
}
