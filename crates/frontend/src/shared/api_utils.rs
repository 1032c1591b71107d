//! Helpers for building API URLs.

use super::config::AppConfig;

/// Base URL of the REST API, e.g. `http://localhost:5000/api`.
///
/// The compile-time override wins; otherwise the API is assumed to run on
/// the same host as the page, on [`AppConfig::API_PORT`].
pub fn api_base() -> String {
    if let Some(base) = AppConfig::API_BASE_OVERRIDE {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}/api", protocol, hostname, AppConfig::API_PORT)
}

/// Appends a serialized query to `path`; an empty query leaves it unchanged.
pub fn with_query<Q: serde::Serialize>(path: &str, query: &Q) -> String {
    match serde_qs::to_string(query) {
        Ok(qs) if !qs.is_empty() => format!("{}?{}", path, qs),
        Ok(_) => path.to_string(),
        Err(e) => {
            log::warn!("failed to encode query for {}: {}", path, e);
            path.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::projections::p900_due_customers::DueCustomersQuery;

    #[test]
    fn query_is_appended() {
        let q = DueCustomersQuery::new(2, 20, "ravi");
        assert_eq!(
            with_query(q.path(), &q),
            "/invoices/due/customers/search?page=2&limit=20&q=ravi"
        );
    }

    #[test]
    fn empty_query_leaves_path() {
        #[derive(serde::Serialize)]
        struct Empty {}
        assert_eq!(with_query("/stock", &Empty {}), "/stock");
    }
}
