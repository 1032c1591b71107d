use crate::shared::api_utils::with_query;
use crate::shared::http::ApiClient;
use contracts::projections::p900_due_customers::{DueCustomer, DueCustomersQuery};
use contracts::shared::api_error::ApiError;
use contracts::shared::envelope::ListPage;

/// Plain listing, or the search endpoint when the query carries a term.
pub async fn fetch_due_customers(
    client: &ApiClient,
    query: &DueCustomersQuery,
) -> Result<ListPage<DueCustomer>, ApiError> {
    client.get_page(&with_query(query.path(), query)).await
}
