//! Application configuration.
//!
//! Everything here is fixed at build time. The API base can be baked in
//! with `DAIRY_API_BASE=https://api.example.com/api trunk build`; otherwise
//! it is derived from the page location (see [`super::api_utils::api_base`]).

pub struct AppConfig;

impl AppConfig {
    /// Compile-time API base override.
    pub const API_BASE_OVERRIDE: Option<&'static str> = option_env!("DAIRY_API_BASE");

    /// Port of the REST API when the base is derived from the page location.
    pub const API_PORT: u16 = 5000;

    /// Server page size for the invoice, customer and due-customer lists.
    pub const LIST_PAGE_SIZE: usize = 10;
    pub const DUE_CUSTOMERS_PAGE_SIZE: usize = 20;

    pub const SEARCH_DEBOUNCE_MS: u32 = 300;
    pub const PAYMENT_REDIRECT_DELAY_MS: u32 = 1500;

    pub const SESSION_STORAGE_KEY: &'static str = "dairy_admin_session";
    pub const INVOICE_SCOPE_STORAGE_KEY: &'static str = "invoice_scope";
}
