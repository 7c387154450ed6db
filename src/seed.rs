use chrono::{DateTime, Utc};

use crate::models::{Account, AccountState, BusinessRecord, Role, Status};
use crate::store::IdGenerator;

// (business, transaction date, category, assignee, status)
const SEED_ROWS: &[(&str, &str, &str, &str, Status)] = &[
    ("Acme Financial Services", "2023-07-28", "Banking", "Sarah Johnson", Status::Unset),
    ("Global Investments LLC", "2023-07-27", "Investment", "Robert Chen", Status::Unset),
    ("TechPay Solutions", "2023-07-26", "Fintech", "Maria Garcia", Status::Unset),
    ("Horizon Capital Group", "2023-07-25", "Investment", "James Wilson", Status::Flagged),
    ("Secure Payment Processing", "2023-07-24", "Payment", "David Kim", Status::Active),
    ("First National Trust", "2023-07-23", "Banking", "Emily Parker", Status::Closed),
];

const MORE_NAMES: &[&str] = &[
    "BlueRock Securities", "GreenLeaf Banking", "Aurora Investments", "Pinnacle Holdings",
    "SummitPay", "Quantum Capital", "EverTrust Finance", "VectorPay Systems",
    "Vista Capital Partners", "Silverline Trust", "Harborstone Investments", "Crestview Banking",
    "NexuPay", "Mariner Holdings", "Beacon Financial", "Keystone Trust",
    "NorthBridge Capital", "BrightPay", "Orion Ledger", "Starlight Banking",
    "Golden Gate Funds", "Atlas Trust", "Zephyr Capital", "Nimbus Pay",
];

const CATEGORIES: [&str; 4] = ["Banking", "Investment", "Fintech", "Payment"];
const ASSIGNEES: [&str; 4] = ["Liam Carter", "Ava Brooks", "Noah Patel", "Olivia Nguyen"];
const STATUSES: [Status; 4] = [Status::Unset, Status::Flagged, Status::Active, Status::Closed];
const CYCLES: [u32; 5] = [14, 30, 30, 30, 90];
const ROLES: [Role; 4] = [Role::Owner, Role::Manager, Role::Analyst, Role::Viewer];

/// Spread signup dates over 2023 (every 18th row lands in 2024).
fn signup_for(i: usize) -> String {
    let year = 2023 + usize::from(i % 18 == 0);
    let month = (i * 7) % 12 + 1;
    let day = (i * 3) % 28 + 1;
    format!("{year}-{month:02}-{day:02}")
}

/// The 30 demo records, in display order.
pub fn demo_records() -> Vec<BusinessRecord> {
    let base = SEED_ROWS
        .iter()
        .map(|&(business, date, category, assignee, status)| {
            (business.to_string(), date.to_string(), category, assignee, status)
        })
        .chain(MORE_NAMES.iter().enumerate().map(|(i, name)| {
            (
                name.to_string(),
                format!("2023-07-{:02}", 22 - (i % 10)),
                CATEGORIES[i % 4],
                ASSIGNEES[i % 4],
                STATUSES[i % 4],
            )
        }));

    base.enumerate()
        .map(|(i, (business, date, category, assignee, status))| BusinessRecord {
            business,
            transaction_date: date,
            category: category.to_string(),
            assignee: assignee.to_string(),
            status,
            signup_date: signup_for(i),
            billing_cycle_days: CYCLES[i % 5],
        })
        .collect()
}

/// Turn a business name into a placeholder address: "Acme Co." -> "acme.co.@example.com".
fn placeholder_email(business: &str) -> String {
    let mut local = String::new();
    let mut in_gap = false;
    for c in business.to_lowercase().chars() {
        if c.is_ascii_lowercase() {
            local.push(c);
            in_gap = false;
        } else if !in_gap {
            local.push('.');
            in_gap = true;
        }
    }
    format!("{local}@example.com")
}

/// Accounts seeded from the first eight records, all created at `now`.
pub fn demo_accounts(records: &[BusinessRecord], ids: &mut dyn IdGenerator, now: DateTime<Utc>) -> Vec<Account> {
    records
        .iter()
        .take(8)
        .enumerate()
        .map(|(i, r)| Account {
            id: ids.next_id(),
            name: r.business.clone(),
            email: placeholder_email(&r.business),
            role: ROLES[i % 4],
            status: if i % 2 == 0 {
                AccountState::Active
            } else {
                AccountState::Inactive
            },
            notes: String::new(),
            created_at: now,
        })
        .collect()
}
