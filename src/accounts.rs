use std::cmp::Ordering;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{FluxError, Result};
use crate::filter::{Search, SearchMode};
use crate::models::{Account, AccountDraft, AccountState};

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: OnceLock<Option<Regex>> = OnceLock::new();

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE
        .get_or_init(|| Regex::new(EMAIL_PATTERN).ok())
        .as_ref()
        .is_some_and(|re| re.is_match(email))
}

pub fn validate_draft(draft: &AccountDraft) -> Result<()> {
    if draft.name.trim().is_empty() {
        return Err(FluxError::Validation("Name is required.".to_string()));
    }
    if draft.email.trim().is_empty() || !is_valid_email(&draft.email) {
        return Err(FluxError::Validation("Please enter a valid email.".to_string()));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Newest first.
    #[default]
    CreatedDesc,
    CreatedAsc,
    NameAsc,
    NameDesc,
}

impl SortOrder {
    /// Parse the select's option value (`createdDesc`, `nameAsc`, …). Unknown
    /// keys fall back to newest first.
    pub fn from_key(key: &str) -> Self {
        match key.trim() {
            "createdAsc" | "created-asc" | "oldest" => SortOrder::CreatedAsc,
            "nameAsc" | "name-asc" | "name" => SortOrder::NameAsc,
            "nameDesc" | "name-desc" => SortOrder::NameDesc,
            _ => SortOrder::CreatedDesc,
        }
    }
}

/// Name ordering close to a locale collation: letters compare without case
/// first, then the raw text breaks ties.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountQuery {
    pub search: Search,
    /// `None` shows every status.
    pub status: Option<AccountState>,
    pub sort: SortOrder,
}

impl Default for AccountQuery {
    fn default() -> Self {
        Self {
            search: Search::new("", SearchMode::Substring),
            status: None,
            sort: SortOrder::default(),
        }
    }
}

/// Visible accounts for `q`, as a new list in sorted order.
pub fn query(accounts: &[Account], q: &AccountQuery) -> Vec<Account> {
    let mut rows: Vec<Account> = accounts
        .iter()
        .filter(|a| q.search.matches(*a))
        .filter(|a| q.status.map_or(true, |s| a.status == s))
        .cloned()
        .collect();
    match q.sort {
        SortOrder::CreatedDesc => rows.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOrder::CreatedAsc => rows.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortOrder::NameAsc => rows.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortOrder::NameDesc => rows.sort_by(|a, b| compare_names(&b.name, &a.name)),
    }
    log::debug!("account query kept {} of {}", rows.len(), accounts.len());
    rows
}
