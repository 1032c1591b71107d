use crate::shared::http::ApiClient;
use contracts::domain::a002_milk_category::{Category, CategoryDto};
use contracts::shared::api_error::ApiError;

pub async fn fetch_categories(client: &ApiClient) -> Result<Vec<Category>, ApiError> {
    client.get_list("/categories").await
}

pub async fn save_category(
    client: &ApiClient,
    id: Option<&str>,
    dto: &CategoryDto,
) -> Result<(), ApiError> {
    dto.validate()?;
    let result = match id {
        Some(id) => client.put_unit(&format!("/categories/{}", id), dto).await,
        None => client.post_unit("/categories", dto).await,
    };
    result.map_err(ApiError::relabel_conflict)
}

pub async fn delete_category(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&format!("/categories/{}", id)).await
}
