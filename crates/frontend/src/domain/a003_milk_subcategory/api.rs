use crate::domain::a002_milk_category::api::fetch_categories;
use crate::shared::http::ApiClient;
use contracts::domain::a002_milk_category::Category;
use contracts::domain::a003_milk_subcategory::{Subcategory, SubcategoryDto};
use contracts::shared::api_error::ApiError;

pub async fn fetch_subcategories(client: &ApiClient) -> Result<Vec<Subcategory>, ApiError> {
    client.get_list("/subcategories").await
}

/// Categories and subcategories, requested concurrently.
pub async fn fetch_catalog(
    client: &ApiClient,
) -> Result<(Vec<Category>, Vec<Subcategory>), ApiError> {
    let (categories, subcategories) =
        futures::join!(fetch_categories(client), fetch_subcategories(client));
    Ok((categories?, subcategories?))
}

/// `existing` is the currently loaded list, used for the local duplicate
/// check; the server's own conflict message is relabeled the same way.
pub async fn save_subcategory(
    client: &ApiClient,
    id: Option<&str>,
    dto: &SubcategoryDto,
    existing: &[Subcategory],
) -> Result<(), ApiError> {
    dto.validate(existing, id)?;
    let result = match id {
        Some(id) => client.put_unit(&format!("/subcategories/{}", id), dto).await,
        None => client.post_unit("/subcategories", dto).await,
    };
    result.map_err(ApiError::relabel_conflict)
}

pub async fn delete_subcategory(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&format!("/subcategories/{}", id)).await
}
