use crate::shared::http::ApiClient;
use contracts::domain::a006_holiday::{Holiday, HolidayDto};
use contracts::shared::api_error::ApiError;

pub async fn fetch_holidays(client: &ApiClient) -> Result<Vec<Holiday>, ApiError> {
    client.get_list("/holidays").await
}

pub async fn create_holiday(client: &ApiClient, dto: &HolidayDto) -> Result<(), ApiError> {
    dto.validate()?;
    client.post_unit("/holidays", dto).await
}

pub async fn delete_holiday(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&format!("/holidays/{}", id)).await
}
