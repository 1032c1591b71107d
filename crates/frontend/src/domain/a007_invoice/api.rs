use crate::shared::api_utils::with_query;
use crate::shared::http::ApiClient;
use contracts::domain::a007_invoice::{
    BatchGenerateResult, GenerateInvoiceRequest, Invoice, InvoiceQuery, PaymentRequest,
};
use contracts::shared::api_error::ApiError;
use contracts::shared::envelope::ListPage;

pub async fn fetch_invoices(
    client: &ApiClient,
    query: &InvoiceQuery,
) -> Result<ListPage<Invoice>, ApiError> {
    client.get_page(&with_query("/invoices", query)).await
}

/// Every invoice of one scope, collected page by page; feeds search and
/// the header stats.
pub async fn fetch_invoice_superset(
    client: &ApiClient,
    query: &InvoiceQuery,
) -> Result<Vec<Invoice>, ApiError> {
    let mut query = query.clone();
    client
        .get_all_pages(move |page| {
            query.page = Some(page);
            with_query("/invoices", &query)
        })
        .await
}

pub async fn fetch_invoice(client: &ApiClient, id: &str) -> Result<Invoice, ApiError> {
    client.get_item(&format!("/invoices/{}", id)).await
}

pub async fn generate_for_customer(
    client: &ApiClient,
    customer_id: &str,
    request: &GenerateInvoiceRequest,
) -> Result<Invoice, ApiError> {
    request
        .validate()
        .map_err(|message| ApiError::validation("month", message))?;
    client
        .post_item(
            &format!("/invoices/generate/customer/{}", customer_id),
            request,
        )
        .await
}

pub async fn generate_batch(
    client: &ApiClient,
    request: &GenerateInvoiceRequest,
) -> Result<BatchGenerateResult, ApiError> {
    request
        .validate()
        .map_err(|message| ApiError::validation("month", message))?;
    client
        .post_item("/invoices/generate/batch", request)
        .await
}

/// Records a payment. Amounts above the due balance are accepted; the server
/// banks the excess as customer advance.
pub async fn add_payment(
    client: &ApiClient,
    invoice_id: &str,
    request: &PaymentRequest,
) -> Result<(), ApiError> {
    client
        .post_unit(&format!("/invoices/{}/payment", invoice_id), request)
        .await
}

pub async fn delete_invoice(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&format!("/invoices/{}", id)).await
}

pub async fn fetch_invoice_pdf(client: &ApiClient, id: &str) -> Result<Vec<u8>, ApiError> {
    client.get_bytes(&format!("/invoices/{}/pdf", id)).await
}
