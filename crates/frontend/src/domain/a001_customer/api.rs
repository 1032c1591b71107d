use crate::shared::api_utils::with_query;
use crate::shared::http::ApiClient;
use contracts::domain::a001_customer::{Customer, CustomerDto, CustomerQuery};
use contracts::shared::api_error::ApiError;
use contracts::shared::envelope::ListPage;

/// Page size used while collecting every customer for pickers.
const ALL_CUSTOMERS_LIMIT: usize = 1000;

pub async fn fetch_customers(
    client: &ApiClient,
    query: &CustomerQuery,
) -> Result<ListPage<Customer>, ApiError> {
    client.get_page(&with_query("/customers", query)).await
}

/// Every customer, for dropdowns.
pub async fn fetch_all_customers(client: &ApiClient) -> Result<Vec<Customer>, ApiError> {
    client
        .get_all_pages(|page| {
            with_query("/customers", &CustomerQuery::new(page, ALL_CUSTOMERS_LIMIT, ""))
        })
        .await
}

pub async fn fetch_customer(client: &ApiClient, id: &str) -> Result<Customer, ApiError> {
    client.get_item(&format!("/customers/{}", id)).await
}

/// Creates or updates; duplicate phone / customer number come back as
/// field errors.
pub async fn save_customer(
    client: &ApiClient,
    id: Option<&str>,
    dto: &CustomerDto,
) -> Result<(), ApiError> {
    dto.validate()?;
    let result = match id {
        Some(id) => client.put_unit(&format!("/customers/{}", id), dto).await,
        None => client.post_unit("/customers", dto).await,
    };
    result.map_err(ApiError::relabel_conflict)
}

pub async fn delete_customer(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&format!("/customers/{}", id)).await
}
