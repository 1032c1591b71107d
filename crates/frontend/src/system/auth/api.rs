use crate::shared::http::ApiClient;
use contracts::shared::api_error::ApiError;
use contracts::system::auth::{Admin, LoginRequest, LoginResponse};

/// Login with username and password
pub async fn login(api: &ApiClient, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    if !request.is_complete() {
        return Err(ApiError::validation(
            "username",
            "Enter username and password",
        ));
    }
    api.post("/auth/login", request).await
}

/// Registered admin accounts
pub async fn fetch_admins(api: &ApiClient) -> Result<Vec<Admin>, ApiError> {
    api.get_list("/auth/admins").await
}
