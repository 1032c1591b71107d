pub mod api_error;
pub mod envelope;
pub mod page_source;
pub mod routes;
