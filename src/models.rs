use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::FluxError;

/// Review status of a business record. `Unset` is shown as an em dash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "\u{2014}", alias = "-")]
    Unset,
    Flagged,
    Active,
    Closed,
}

impl Status {
    pub const ALL: [Status; 4] = [Status::Unset, Status::Flagged, Status::Active, Status::Closed];

    pub fn label(self) -> &'static str {
        match self {
            Status::Unset => "\u{2014}",
            Status::Flagged => "Flagged",
            Status::Active => "Active",
            Status::Closed => "Closed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Status {
    type Err = FluxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "\u{2014}" | "-" | "unset" | "" => Ok(Status::Unset),
            "flagged" => Ok(Status::Flagged),
            "active" => Ok(Status::Active),
            "closed" => Ok(Status::Closed),
            _ => Err(FluxError::InvalidValue {
                field: "status",
                value: s.to_string(),
            }),
        }
    }
}

/// One business shown in the records table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessRecord {
    pub business: String,
    #[serde(rename = "date")]
    pub transaction_date: String,
    pub category: String,
    pub assignee: String,
    pub status: Status,
    /// Billing anchor. Kept as text; see [`crate::dates::parse_date`].
    pub signup_date: String,
    #[serde(default = "default_cycle_days")]
    pub billing_cycle_days: u32,
}

fn default_cycle_days() -> u32 {
    30
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Owner,
    Manager,
    Analyst,
    Viewer,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::Owner => "Owner",
            Role::Manager => "Manager",
            Role::Analyst => "Analyst",
            Role::Viewer => "Viewer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Role {
    type Err = FluxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "owner" => Ok(Role::Owner),
            "manager" => Ok(Role::Manager),
            "analyst" => Ok(Role::Analyst),
            "viewer" => Ok(Role::Viewer),
            _ => Err(FluxError::InvalidValue {
                field: "role",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountState {
    Active,
    Inactive,
}

impl AccountState {
    pub fn label(self) -> &'static str {
        match self {
            AccountState::Active => "Active",
            AccountState::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for AccountState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AccountState {
    type Err = FluxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(AccountState::Active),
            "inactive" => Ok(AccountState::Inactive),
            _ => Err(FluxError::InvalidValue {
                field: "account status",
                value: s.to_string(),
            }),
        }
    }
}

/// A user account managed from the accounts page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: AccountState,
    #[serde(default)]
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

/// Editable fields of an account, as entered in the create/edit form.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountDraft {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: AccountState,
    pub notes: String,
}

impl Default for AccountDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            role: Role::Viewer,
            status: AccountState::Active,
            notes: String::new(),
        }
    }
}

impl From<&Account> for AccountDraft {
    fn from(acc: &Account) -> Self {
        Self {
            name: acc.name.clone(),
            email: acc.email.clone(),
            role: acc.role,
            status: acc.status,
            notes: acc.notes.clone(),
        }
    }
}
