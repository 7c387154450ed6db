use chrono::Utc;
use colored::Colorize;
use comfy_table::{Cell, Table};

use super::open_db;
use crate::accounts::{query, AccountQuery, SortOrder};
use crate::error::Result;
use crate::filter::{Search, SearchMode};
use crate::models::{AccountDraft, AccountState, Role};
use crate::store::{AccountRepository, Store, UuidIds};

fn open_repo(conn: &rusqlite::Connection) -> Result<AccountRepository<'_>> {
    AccountRepository::open(Store::new(conn), Box::new(UuidIds::new("acc")), Utc::now())
}

/// "All" (or nothing) means every status.
fn parse_status_filter(status: Option<&str>) -> Result<Option<AccountState>> {
    match status.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) if s.eq_ignore_ascii_case("all") => Ok(None),
        Some(s) => Ok(Some(s.parse()?)),
    }
}

pub fn list(search: Option<&str>, status: Option<&str>, sort: &str) -> Result<()> {
    let conn = open_db()?;
    let repo = open_repo(&conn)?;
    let q = AccountQuery {
        search: Search::new(search.unwrap_or_default(), SearchMode::Substring),
        status: parse_status_filter(status)?,
        sort: SortOrder::from_key(sort),
    };
    let rows = query(repo.accounts(), &q);

    if rows.is_empty() {
        println!("No accounts match your filters.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Name", "Email", "Role", "Status", "Created"]);
    for acc in &rows {
        let status = match acc.status {
            AccountState::Active => acc.status.label().green().to_string(),
            AccountState::Inactive => acc.status.label().dimmed().to_string(),
        };
        table.add_row(vec![
            Cell::new(&acc.id),
            Cell::new(&acc.name),
            Cell::new(&acc.email),
            Cell::new(acc.role),
            Cell::new(status),
            Cell::new(acc.created_at.format("%Y-%m-%d %H:%M")),
        ]);
    }
    println!("Accounts ({} shown)\n{table}", rows.len());
    Ok(())
}

pub fn add(name: &str, email: &str, role: &str, status: &str, notes: Option<&str>) -> Result<()> {
    let draft = AccountDraft {
        name: name.to_string(),
        email: email.to_string(),
        role: role.parse::<Role>()?,
        status: status.parse::<AccountState>()?,
        notes: notes.unwrap_or_default().to_string(),
    };
    let conn = open_db()?;
    let mut repo = open_repo(&conn)?;
    let created = repo.create(draft, Utc::now())?;
    println!("Created account: {} ({})", created.name, created.id);
    Ok(())
}

pub fn edit(
    id: &str,
    name: Option<&str>,
    email: Option<&str>,
    role: Option<&str>,
    status: Option<&str>,
    notes: Option<&str>,
) -> Result<()> {
    let conn = open_db()?;
    let mut repo = open_repo(&conn)?;
    let existing = repo
        .get(id)
        .ok_or_else(|| crate::error::FluxError::UnknownAccount(id.to_string()))?;

    let mut draft = AccountDraft::from(existing);
    if let Some(v) = name {
        draft.name = v.to_string();
    }
    if let Some(v) = email {
        draft.email = v.to_string();
    }
    if let Some(v) = role {
        draft.role = v.parse()?;
    }
    if let Some(v) = status {
        draft.status = v.parse()?;
    }
    if let Some(v) = notes {
        draft.notes = v.to_string();
    }

    repo.update(id, draft)?;
    println!("Updated account {id}");
    Ok(())
}

pub fn delete(ids: &[String]) -> Result<()> {
    let conn = open_db()?;
    let mut repo = open_repo(&conn)?;
    if let [id] = ids {
        repo.delete(id)?;
        println!("Deleted account {id}");
    } else {
        let removed = repo.delete_many(ids)?;
        println!("Deleted {removed} account(s)");
    }
    Ok(())
}
