use crate::domain::common::round2;
use serde::{Deserialize, Serialize};

/// Row of the due-balance aggregation. Produced entirely server-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DueCustomer {
    pub customer_id: String,
    #[serde(default)]
    pub customer_no: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    /// Sum of due amounts across the customer's open invoices
    #[serde(default)]
    pub total_due: f64,
    #[serde(default)]
    pub invoice_count: usize,
}

/// Query for `/invoices/due/customers` and its `/search` variant
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DueCustomersQuery {
    pub page: usize,
    pub limit: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
}

impl DueCustomersQuery {
    pub fn new(page: usize, limit: usize, search: &str) -> Self {
        let term = search.trim();
        Self {
            page: page.max(1),
            limit,
            q: (!term.is_empty()).then(|| term.to_string()),
        }
    }

    /// Endpoint path; searching goes to the dedicated search route.
    pub fn path(&self) -> &'static str {
        if self.q.is_some() {
            "/invoices/due/customers/search"
        } else {
            "/invoices/due/customers"
        }
    }
}

/// Total outstanding across the rows currently shown.
pub fn page_total_due(rows: &[DueCustomer]) -> f64 {
    round2(rows.iter().map(|r| r.total_due).sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_search_uses_plain_listing() {
        let q = DueCustomersQuery::new(0, 20, "   ");
        assert_eq!(q.page, 1);
        assert_eq!(q.q, None);
        assert_eq!(q.path(), "/invoices/due/customers");
    }

    #[test]
    fn search_term_switches_endpoint() {
        let q = DueCustomersQuery::new(2, 20, " ravi ");
        assert_eq!(q.q.as_deref(), Some("ravi"));
        assert_eq!(q.path(), "/invoices/due/customers/search");
    }

    #[test]
    fn decodes_aggregate_row() {
        let row: DueCustomer = serde_json::from_str(
            r#"{"customerId":"c1","customerNo":"C001","name":"Asha","phone":"9876543210","totalDue":1790.5,"invoiceCount":2}"#,
        )
        .unwrap();
        assert_eq!(row.invoice_count, 2);
        assert_eq!(page_total_due(&[row.clone(), row]), 3581.0);
    }
}
