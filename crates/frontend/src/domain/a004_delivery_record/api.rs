use crate::shared::api_utils::with_query;
use crate::shared::http::ApiClient;
use contracts::domain::a004_delivery_record::{Record, RecordPatch, RecordQuery, RecordSummary};
use contracts::shared::api_error::ApiError;

pub async fn fetch_daily(client: &ApiClient, query: &RecordQuery) -> Result<Vec<Record>, ApiError> {
    client.get_list(&with_query("/records/daily", query)).await
}

pub async fn fetch_summary(
    client: &ApiClient,
    query: &RecordQuery,
) -> Result<RecordSummary, ApiError> {
    client.get_item(&with_query("/records/summary", query)).await
}

pub async fn fetch_record(client: &ApiClient, id: &str) -> Result<Record, ApiError> {
    client.get_item(&format!("/records/{}", id)).await
}

/// Sends only the delivery schedule and the daily totals.
pub async fn update_record(client: &ApiClient, record: &Record) -> Result<(), ApiError> {
    client
        .put_unit(&format!("/records/{}", record.id), &RecordPatch::from(record))
        .await
}
