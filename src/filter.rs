use std::borrow::Borrow;
use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::dates::{days_ago, month_start, parse_date, quarter_start};
use crate::models::{Account, BusinessRecord, Status};

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Case-insensitive `contains` against any search field.
    #[default]
    Substring,
    /// Case-insensitive `starts_with` against the key field only.
    Prefix,
}

/// Text fields a search can look at.
pub trait Searchable {
    /// The single field prefix search matches against.
    fn search_key(&self) -> &str;
    fn search_fields(&self) -> Vec<&str>;
}

impl Searchable for BusinessRecord {
    fn search_key(&self) -> &str {
        &self.business
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.business, &self.category, &self.assignee]
    }
}

impl Searchable for Account {
    fn search_key(&self) -> &str {
        &self.name
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.email, self.role.label()]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Search {
    pub query: String,
    pub mode: SearchMode,
}

impl Search {
    pub fn new(query: impl Into<String>, mode: SearchMode) -> Self {
        Self {
            query: query.into(),
            mode,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty()
    }

    pub fn matches<T: Searchable>(&self, item: &T) -> bool {
        if self.is_empty() {
            return true;
        }
        let q = self.query.to_lowercase();
        match self.mode {
            SearchMode::Substring => item
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&q)),
            SearchMode::Prefix => item.search_key().to_lowercase().starts_with(&q),
        }
    }
}

// ---------------------------------------------------------------------------
// Categorical filters
// ---------------------------------------------------------------------------

/// Account status selector. "Open" and "Closed" are groupings over
/// [`Status`]; any other concrete value is an exact match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccountStatusFilter {
    #[default]
    Any,
    Open,
    Closed,
    Only(Status),
}

impl AccountStatusFilter {
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "open" => AccountStatusFilter::Open,
            "closed" => AccountStatusFilter::Closed,
            "all" | "account status" | "" => AccountStatusFilter::Any,
            other => other
                .parse::<Status>()
                .map(AccountStatusFilter::Only)
                .unwrap_or(AccountStatusFilter::Any),
        }
    }

    pub fn allows(self, status: Status) -> bool {
        match self {
            AccountStatusFilter::Any => true,
            AccountStatusFilter::Open => {
                matches!(status, Status::Active | Status::Flagged | Status::Unset)
            }
            AccountStatusFilter::Closed => status == Status::Closed,
            AccountStatusFilter::Only(s) => status == s,
        }
    }
}

/// Risk selector. A risk level is a demo proxy over [`Status`], not a stored
/// field; the groupings below are kept exactly as the dashboard defines them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RiskFilter {
    #[default]
    Any,
    Low,
    Medium,
    High,
    Critical,
}

impl RiskFilter {
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "low" => RiskFilter::Low,
            "medium" => RiskFilter::Medium,
            "high" => RiskFilter::High,
            "critical" => RiskFilter::Critical,
            _ => RiskFilter::Any,
        }
    }

    /// Statuses this risk level admits, or `None` when unrestricted.
    pub fn statuses(self) -> Option<&'static [Status]> {
        match self {
            RiskFilter::Any => None,
            RiskFilter::Low => Some(&[Status::Unset, Status::Closed]),
            RiskFilter::Medium => Some(&[Status::Active, Status::Unset]),
            RiskFilter::High => Some(&[Status::Flagged, Status::Active]),
            RiskFilter::Critical => Some(&[Status::Flagged]),
        }
    }

    pub fn allows(self, status: Status) -> bool {
        self.statuses().map_or(true, |allowed| allowed.contains(&status))
    }
}

/// Membership filter from the advanced filter panel.
///
/// `OneOf` with an empty set is still unrestricted: clearing every checkbox
/// shows everything, it does not hide everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetFilter<T: Ord> {
    Unrestricted,
    OneOf(BTreeSet<T>),
}

impl<T: Ord> Default for SetFilter<T> {
    fn default() -> Self {
        SetFilter::Unrestricted
    }
}

impl<T: Ord> SetFilter<T> {
    pub fn is_restrictive(&self) -> bool {
        matches!(self, SetFilter::OneOf(set) if !set.is_empty())
    }

    pub fn allows<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self {
            SetFilter::Unrestricted => true,
            SetFilter::OneOf(set) => set.is_empty() || set.contains(value),
        }
    }
}

impl<T: Ord> FromIterator<T> for SetFilter<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        SetFilter::OneOf(iter.into_iter().collect())
    }
}

// ---------------------------------------------------------------------------
// Signup date range
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignupRange {
    #[default]
    All,
    ThisMonth,
    Last30Days,
    ThisQuarter,
    /// Applied only when both bounds are present.
    Custom {
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    },
}

impl SignupRange {
    /// Accepts the selector labels ("Last 30 days", "Custom…") as well as
    /// kebab-case keys ("last-30-days").
    pub fn from_label(label: &str) -> Self {
        let key = label
            .trim()
            .trim_end_matches('\u{2026}')
            .trim_end_matches("...")
            .to_lowercase()
            .replace(|c: char| c == '-' || c == '_', " ");
        match key.as_str() {
            "this month" => SignupRange::ThisMonth,
            "last 30 days" => SignupRange::Last30Days,
            "this quarter" => SignupRange::ThisQuarter,
            "custom" => SignupRange::Custom {
                start: None,
                end: None,
            },
            _ => SignupRange::All,
        }
    }

    /// Custom range from raw date text; unparseable bounds are left empty.
    pub fn custom(start: &str, end: &str) -> Self {
        SignupRange::Custom {
            start: parse_date(start),
            end: parse_date(end),
        }
    }

    fn is_active(&self) -> bool {
        match self {
            SignupRange::All => false,
            SignupRange::Custom { start, end } => start.is_some() && end.is_some(),
            _ => true,
        }
    }

    /// Whether a signup date passes the range, evaluated against `today`.
    /// An unparseable signup date fails every active range.
    pub fn contains(&self, signup_date: &str, today: NaiveDate) -> bool {
        if !self.is_active() {
            return true;
        }
        let Some(date) = parse_date(signup_date) else {
            return false;
        };
        match *self {
            SignupRange::All => true,
            SignupRange::ThisMonth => date >= month_start(today),
            SignupRange::Last30Days => date >= days_ago(today, 30),
            SignupRange::ThisQuarter => date >= quarter_start(today),
            SignupRange::Custom {
                start: Some(start),
                end: Some(end),
            } => start <= date && date <= end,
            SignupRange::Custom { .. } => true,
        }
    }
}

// ---------------------------------------------------------------------------
// Filter spec
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    pub search: Search,
    pub account_status: AccountStatusFilter,
    pub risk: RiskFilter,
    pub signup_range: SignupRange,
    pub categories: SetFilter<String>,
    pub assignees: SetFilter<String>,
    pub statuses: SetFilter<Status>,
}

impl FilterSpec {
    pub fn matches(&self, record: &BusinessRecord, today: NaiveDate) -> bool {
        self.search.matches(record)
            && self.account_status.allows(record.status)
            && self.risk.allows(record.status)
            && self.categories.allows(record.category.as_str())
            && self.assignees.allows(record.assignee.as_str())
            && self.statuses.allows(&record.status)
            && self.signup_range.contains(&record.signup_date, today)
    }

    /// Human-readable list of the active dimensions, empty when none are.
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if !self.search.is_empty() {
            let how = match self.search.mode {
                SearchMode::Substring => "contains",
                SearchMode::Prefix => "starts with",
            };
            parts.push(format!("search {how} \"{}\"", self.search.query));
        }
        if self.account_status != AccountStatusFilter::Any {
            parts.push(format!("account: {:?}", self.account_status));
        }
        if self.risk != RiskFilter::Any {
            parts.push(format!("risk: {:?}", self.risk));
        }
        if self.signup_range.is_active() {
            parts.push(format!("signup: {:?}", self.signup_range));
        }
        if let SetFilter::OneOf(set) = &self.categories {
            if !set.is_empty() {
                parts.push(format!("categories: {}", join(set)));
            }
        }
        if let SetFilter::OneOf(set) = &self.assignees {
            if !set.is_empty() {
                parts.push(format!("assignees: {}", join(set)));
            }
        }
        if let SetFilter::OneOf(set) = &self.statuses {
            if !set.is_empty() {
                parts.push(format!("statuses: {}", join(set)));
            }
        }
        parts.join(", ")
    }
}

fn join<T: ToString>(items: &BTreeSet<T>) -> String {
    items.iter().map(ToString::to_string).collect::<Vec<_>>().join("/")
}

/// Narrow `records` to those matching `spec`, keeping input order.
pub fn apply(records: &[BusinessRecord], spec: &FilterSpec, today: NaiveDate) -> Vec<BusinessRecord> {
    let visible: Vec<BusinessRecord> = records
        .iter()
        .filter(|r| spec.matches(r, today))
        .cloned()
        .collect();
    log::debug!("filter kept {} of {} records", visible.len(), records.len());
    visible
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

#[derive(Debug, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 1-based, after clamping.
    pub page: usize,
    pub total_pages: usize,
    pub total: usize,
    pub page_size: usize,
}

impl<T> Page<'_, T> {
    /// 1-based first and last positions shown, as in "Showing 7-12 of 30".
    pub fn showing(&self) -> (usize, usize) {
        let start = (self.page - 1) * self.page_size;
        (
            (start + 1).min(self.total),
            (start + self.page_size).min(self.total),
        )
    }
}

/// Slice one page out of `list`. Out-of-range pages are clamped, never
/// rejected; an empty list still has one (empty) page.
pub fn paginate<T>(list: &[T], page: i64, page_size: usize) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let total = list.len();
    let total_pages = total.div_ceil(page_size).max(1);
    let page = page.clamp(1, total_pages as i64) as usize;
    let start = ((page - 1) * page_size).min(total);
    let end = (start + page_size).min(total);
    Page {
        items: &list[start..end],
        page,
        total_pages,
        total,
        page_size,
    }
}
