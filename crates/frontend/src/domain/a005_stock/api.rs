use crate::shared::api_utils::with_query;
use crate::shared::http::ApiClient;
use contracts::domain::a002_milk_category::Category;
use contracts::domain::a005_stock::{
    available_for, validate_stock_out, StockEntry, StockEntryDto, StockQuery, StockSummary,
};
use contracts::shared::api_error::ApiError;

pub async fn fetch_entries(
    client: &ApiClient,
    query: &StockQuery,
) -> Result<Vec<StockEntry>, ApiError> {
    client.get_list(&with_query("/stock", query)).await
}

/// Per-category totals; `currentStock` backs the stock-out check.
pub async fn fetch_summary(client: &ApiClient) -> Result<Vec<StockSummary>, ApiError> {
    client.get_list("/stock/summary").await
}

pub async fn fetch_stock_categories(client: &ApiClient) -> Result<Vec<Category>, ApiError> {
    client.get_list("/stock/categories").await
}

/// Validates against the cached `summaries` before posting.
pub async fn create_entry(
    client: &ApiClient,
    dto: &StockEntryDto,
    summaries: &[StockSummary],
) -> Result<(), ApiError> {
    dto.validate()?;
    validate_stock_out(
        dto.entry_type,
        dto.quantity,
        available_for(summaries, &dto.category),
    )?;
    client.post_unit("/stock", dto).await
}
