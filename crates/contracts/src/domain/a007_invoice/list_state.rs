//! Invoice list filtering state.
//!
//! Four independent axes: the header month/year scope, a quick status
//! filter, manual filters that override the scope, and a free-text search
//! evaluated locally over the scope superset.

use super::aggregate::{Invoice, InvoiceStatus};
use crate::domain::common::round2;
use crate::shared::page_source::PageSource;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Rows per page when paging the local search results.
pub const CLIENT_PAGE_SIZE: usize = 10;

/// Page size used while collecting the scope superset.
pub const SUPERSET_LIMIT: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceScope {
    pub month: u32,
    pub year: i32,
}

impl InvoiceScope {
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            month: date.month(),
            year: date.year(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuickFilter {
    #[default]
    All,
    Pending,
    Paid,
    Overdue,
}

impl QuickFilter {
    pub const ALL: [QuickFilter; 4] = [
        QuickFilter::All,
        QuickFilter::Pending,
        QuickFilter::Paid,
        QuickFilter::Overdue,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            QuickFilter::All => "All",
            QuickFilter::Pending => "Pending",
            QuickFilter::Paid => "Paid",
            QuickFilter::Overdue => "Overdue",
        }
    }

    pub fn status(&self) -> Option<InvoiceStatus> {
        match self {
            QuickFilter::All => None,
            QuickFilter::Pending => Some(InvoiceStatus::Pending),
            QuickFilter::Paid => Some(InvoiceStatus::Paid),
            QuickFilter::Overdue => Some(InvoiceStatus::Overdue),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManualFilters {
    pub customer_id: Option<String>,
    pub status: Option<InvoiceStatus>,
    pub month: Option<u32>,
    pub year: Option<i32>,
}

impl ManualFilters {
    pub fn active_count(&self) -> usize {
        [
            self.customer_id.is_some(),
            self.status.is_some(),
            self.month.is_some(),
            self.year.is_some(),
        ]
        .into_iter()
        .filter(|b| *b)
        .count()
    }
}

/// Query string for `GET /invoices`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
    pub month: u32,
    pub year: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceListState {
    pub scope: InvoiceScope,
    pub quick_filter: QuickFilter,
    pub manual: ManualFilters,
    pub search_term: String,
    /// Server page for the primary list (1-based).
    pub page: usize,
    /// Page within the local search results (1-based).
    pub search_page: usize,
}

impl InvoiceListState {
    pub fn new(scope: InvoiceScope) -> Self {
        Self {
            scope,
            quick_filter: QuickFilter::All,
            manual: ManualFilters::default(),
            search_term: String::new(),
            page: 1,
            search_page: 1,
        }
    }

    pub fn set_scope(&mut self, month: u32, year: i32) {
        self.scope = InvoiceScope { month, year };
        self.page = 1;
        self.search_page = 1;
    }

    /// Quick filters reset the manual status and customer filters so the
    /// two never contradict each other.
    pub fn select_quick_filter(&mut self, filter: QuickFilter) {
        self.quick_filter = filter;
        self.manual.status = None;
        self.manual.customer_id = None;
        self.page = 1;
        self.search_page = 1;
    }

    /// Applies the advanced filter panel. An explicit status supersedes the
    /// quick filter.
    pub fn apply_manual(&mut self, manual: ManualFilters) {
        if manual.status.is_some() {
            self.quick_filter = QuickFilter::All;
        }
        self.manual = manual;
        self.page = 1;
        self.search_page = 1;
    }

    pub fn clear_manual(&mut self) {
        self.manual = ManualFilters::default();
        self.page = 1;
        self.search_page = 1;
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.search_page = 1;
    }

    pub fn is_searching(&self) -> bool {
        !self.search_term.trim().is_empty()
    }

    pub fn effective_month(&self) -> u32 {
        self.manual.month.unwrap_or(self.scope.month)
    }

    pub fn effective_year(&self) -> i32 {
        self.manual.year.unwrap_or(self.scope.year)
    }

    pub fn effective_status(&self) -> Option<InvoiceStatus> {
        self.manual.status.or_else(|| self.quick_filter.status())
    }

    /// Server query for the paginated primary list.
    pub fn to_query(&self, limit: usize) -> InvoiceQuery {
        InvoiceQuery {
            page: Some(self.page),
            limit: Some(limit),
            month: self.effective_month(),
            year: self.effective_year(),
            status: self.effective_status().map(|s| s.as_str().to_string()),
            customer_id: self.manual.customer_id.clone(),
        }
    }

    /// Server query for the first page of the scope superset used by search
    /// and stats; the caller walks the remaining pages.
    pub fn scope_query(&self) -> InvoiceQuery {
        InvoiceQuery {
            page: None,
            limit: Some(SUPERSET_LIMIT),
            month: self.effective_month(),
            year: self.effective_year(),
            status: None,
            customer_id: None,
        }
    }

    /// Local status/customer filter plus text search over the superset.
    pub fn filter_superset(&self, superset: &[Invoice]) -> Vec<Invoice> {
        let status = self.effective_status();
        let customer = self.manual.customer_id.as_deref();
        superset
            .iter()
            .filter(|inv| status.map_or(true, |s| inv.status == s))
            .filter(|inv| customer.map_or(true, |c| inv.customer.id() == c))
            .filter(|inv| matches_search(inv, &self.search_term))
            .cloned()
            .collect()
    }

    /// Picks the pagination source for this render pass: the local superset
    /// while searching, the server page otherwise.
    pub fn page_source(
        &self,
        server_page: PageSource<Invoice>,
        superset: &[Invoice],
    ) -> PageSource<Invoice> {
        if self.is_searching() {
            PageSource::client(
                self.filter_superset(superset),
                self.search_page,
                CLIENT_PAGE_SIZE,
            )
        } else {
            server_page
        }
    }
}

/// Case-insensitive substring match on invoice number and customer name.
pub fn matches_search(invoice: &Invoice, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    invoice.invoice_number.to_lowercase().contains(&term)
        || invoice.customer_name().to_lowercase().contains(&term)
}

/// Header statistics, folded from the full scoped list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvoiceStats {
    pub total_invoices: usize,
    pub total_amount: f64,
    pub total_paid: f64,
    pub total_due: f64,
    pub pending: usize,
    pub partially_paid: usize,
    pub paid: usize,
    pub overdue: usize,
}

impl InvoiceStats {
    pub fn from_invoices(invoices: &[Invoice]) -> Self {
        let mut stats = invoices.iter().fold(Self::default(), |mut acc, inv| {
            acc.total_invoices += 1;
            acc.total_amount += inv.total_amount;
            acc.total_paid += inv.amount_paid;
            acc.total_due += inv.due_amount;
            match inv.status {
                InvoiceStatus::Pending => acc.pending += 1,
                InvoiceStatus::PartiallyPaid => acc.partially_paid += 1,
                InvoiceStatus::Paid => acc.paid += 1,
                InvoiceStatus::Overdue => acc.overdue += 1,
                InvoiceStatus::Unknown => {}
            }
            acc
        });
        stats.total_amount = round2(stats.total_amount);
        stats.total_paid = round2(stats.total_paid);
        stats.total_due = round2(stats.total_due);
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::{CustomerRef, EntityRef};
    use crate::shared::envelope::ListPage;

    fn inv(number: &str, customer: &str, status: InvoiceStatus, total: f64, paid: f64) -> Invoice {
        Invoice {
            id: number.to_lowercase(),
            invoice_number: number.into(),
            customer: EntityRef::Populated(CustomerRef {
                id: format!("c-{}", customer.to_lowercase()),
                name: customer.into(),
                customer_no: None,
                phone: None,
            }),
            total_amount: total,
            amount_paid: paid,
            due_amount: total - paid,
            status,
            ..Default::default()
        }
    }

    fn scope() -> InvoiceScope {
        InvoiceScope { month: 3, year: 2025 }
    }

    #[test]
    fn quick_filter_resets_manual_status_and_customer() {
        let mut s = InvoiceListState::new(scope());
        s.apply_manual(ManualFilters {
            customer_id: Some("c1".into()),
            status: Some(InvoiceStatus::PartiallyPaid),
            month: Some(2),
            year: None,
        });
        s.select_quick_filter(QuickFilter::Overdue);
        assert_eq!(s.manual.customer_id, None);
        assert_eq!(s.manual.status, None);
        assert_eq!(s.manual.month, Some(2));
        assert_eq!(s.effective_status(), Some(InvoiceStatus::Overdue));
    }

    #[test]
    fn manual_month_year_override_header_scope() {
        let mut s = InvoiceListState::new(scope());
        s.apply_manual(ManualFilters {
            month: Some(12),
            year: Some(2024),
            ..Default::default()
        });
        let q = s.to_query(20);
        assert_eq!((q.month, q.year), (12, 2024));
        assert_eq!(q.page, Some(1));
    }

    #[test]
    fn search_pages_over_cached_superset_not_server_page() {
        let superset: Vec<Invoice> = (1..=15)
            .map(|i| inv(&format!("RD-2025-{:03}", i), "Asha", InvoiceStatus::Pending, 100.0, 0.0))
            .chain([inv("XX-2024-001", "Ravi", InvoiceStatus::Paid, 50.0, 50.0)])
            .collect();
        let stale_server_page: PageSource<Invoice> = ListPage {
            items: vec![inv("OLD-1", "Stale", InvoiceStatus::Paid, 1.0, 1.0)],
            page: 1,
            total_pages: 1,
            total: 1,
        }
        .into();

        let mut s = InvoiceListState::new(scope());
        s.set_search("RD-2025");
        let src = s.page_source(stale_server_page.clone(), &superset);
        assert!(src.is_client());
        assert_eq!(src.total(), 15);
        assert_eq!(src.visible().len(), 10);
        assert!(src.visible().iter().all(|i| i.invoice_number.starts_with("RD-2025")));

        s.set_search("");
        assert_eq!(s.page_source(stale_server_page.clone(), &superset), stale_server_page);
    }

    #[test]
    fn search_matches_customer_name_case_insensitively() {
        let i = inv("RD-1", "Lakshmi Dairy", InvoiceStatus::Pending, 1.0, 0.0);
        assert!(matches_search(&i, "lakshmi"));
        assert!(matches_search(&i, "rd-1"));
        assert!(!matches_search(&i, "ravi"));
    }

    #[test]
    fn superset_search_respects_status_filter() {
        let superset = vec![
            inv("RD-1", "A", InvoiceStatus::Pending, 10.0, 0.0),
            inv("RD-2", "B", InvoiceStatus::Paid, 10.0, 10.0),
        ];
        let mut s = InvoiceListState::new(scope());
        s.select_quick_filter(QuickFilter::Paid);
        s.set_search("rd");
        let rows = s.filter_superset(&superset);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].invoice_number, "RD-2");
    }

    #[test]
    fn stats_are_folded_from_list() {
        let list = vec![
            inv("1", "A", InvoiceStatus::Pending, 1000.0, 0.0),
            inv("2", "B", InvoiceStatus::PartiallyPaid, 500.0, 200.0),
            inv("3", "C", InvoiceStatus::Paid, 300.0, 300.0),
            inv("4", "D", InvoiceStatus::Overdue, 250.5, 0.0),
        ];
        let s = InvoiceStats::from_invoices(&list);
        assert_eq!(s.total_invoices, 4);
        assert_eq!(s.total_amount, 2050.5);
        assert_eq!(s.total_paid, 500.0);
        assert_eq!(s.total_due, 1550.5);
        assert_eq!((s.pending, s.partially_paid, s.paid, s.overdue), (1, 1, 1, 1));
    }

    #[test]
    fn query_serializes_without_empty_filters() {
        let s = InvoiceListState::new(scope());
        let q = serde_json::to_value(s.scope_query()).unwrap();
        assert_eq!(q, serde_json::json!({"limit": 1000, "month": 3, "year": 2025}));
    }
}
