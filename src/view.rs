use chrono::NaiveDateTime;

use crate::billing::{billing_status, DueDate};
use crate::filter::{apply, paginate, FilterSpec};
use crate::models::BusinessRecord;

#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub record: BusinessRecord,
    /// `None` when the record has no computable due date.
    pub due: Option<DueDate>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub rows: Vec<RowView>,
    pub page: usize,
    pub total_pages: usize,
    /// Records left after filtering.
    pub matching: usize,
    /// Records before filtering.
    pub total: usize,
    /// 1-based positions of the first and last row shown.
    pub showing: (usize, usize),
}

/// Filter, paginate, then attach billing status to each visible row.
pub fn build(
    records: &[BusinessRecord],
    spec: &FilterSpec,
    page: i64,
    page_size: usize,
    now: NaiveDateTime,
) -> ViewModel {
    let filtered = apply(records, spec, now.date());
    let current = paginate(&filtered, page, page_size);
    let rows = current
        .items
        .iter()
        .map(|r| RowView {
            record: r.clone(),
            due: billing_status(r, now),
        })
        .collect();
    ViewModel {
        rows,
        page: current.page,
        total_pages: current.total_pages,
        matching: current.total,
        total: records.len(),
        showing: current.showing(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{AccountStatusFilter, Search, SearchMode};
    use crate::seed::demo_records;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 10)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_first_page_of_demo_data() {
        let records = demo_records();
        let view = build(&records, &FilterSpec::default(), 1, 6, now());
        assert_eq!(view.rows.len(), 6);
        assert_eq!(view.total_pages, 5);
        assert_eq!(view.matching, 30);
        assert_eq!(view.showing, (1, 6));
        assert!(view.rows.iter().all(|r| r.due.is_some()));
        for row in &view.rows {
            let due = row.due.unwrap();
            assert!(due.due >= now().date());
            assert!(due.days_left <= i64::from(row.record.billing_cycle_days));
        }
    }

    #[test]
    fn test_filtered_and_clamped() {
        let records = demo_records();
        let spec = FilterSpec {
            account_status: AccountStatusFilter::Closed,
            ..FilterSpec::default()
        };
        let view = build(&records, &spec, 42, 6, now());
        assert!(view.rows.iter().all(|r| r.record.status.label() == "Closed"));
        assert_eq!(view.page, view.total_pages);
        assert_eq!(view.total, 30);
    }

    #[test]
    fn test_no_matches() {
        let records = demo_records();
        let spec = FilterSpec {
            search: Search::new("zzz", SearchMode::Prefix),
            ..FilterSpec::default()
        };
        let view = build(&records, &spec, 1, 6, now());
        assert!(view.rows.is_empty());
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.showing, (0, 0));
    }

    #[test]
    fn test_row_without_due_date() {
        let mut records = demo_records();
        records[0].signup_date = "not-a-date".to_string();
        let view = build(&records, &FilterSpec::default(), 1, 6, now());
        assert!(view.rows[0].due.is_none());
        assert!(view.rows[1].due.is_some());
    }
}
