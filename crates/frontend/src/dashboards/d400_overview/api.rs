use crate::domain::a004_delivery_record::api::fetch_summary;
use crate::domain::a007_invoice::api::fetch_invoice_superset;
use crate::shared::http::ApiClient;
use contracts::domain::a004_delivery_record::{RecordQuery, RecordSummary};
use contracts::domain::a007_invoice::{Invoice, InvoiceListState, InvoiceScope};
use contracts::shared::api_error::ApiError;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overview {
    pub today: RecordSummary,
    pub invoices: Vec<Invoice>,
}

/// Today's delivery summary and the invoices of `scope`, requested together.
pub async fn fetch_overview(
    client: &ApiClient,
    date: &str,
    scope: InvoiceScope,
) -> Result<Overview, ApiError> {
    let record_query = RecordQuery {
        date: date.to_string(),
        customer_id: None,
    };
    let invoice_query = InvoiceListState::new(scope).scope_query();

    let (today, invoices) = futures::join!(
        fetch_summary(client, &record_query),
        fetch_invoice_superset(client, &invoice_query)
    );
    Ok(Overview {
        today: today?,
        invoices: invoices?,
    })
}
