//! Page category constants for tab pages.
//!
//! Every page rendered inside a tab declares an HTML `id` in the format
//! `{entity}--{category}` (e.g. `"a007_invoice--list"`) and a
//! `data-page-category` with one of the constants below.

/// Table with filters and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Detail or edit form for a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Overview with stat cards.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Action page (invoice generation, payments).
pub const PAGE_CAT_USECASE: &str = "usecase";

/// Settings, admins, login.
pub const PAGE_CAT_SYSTEM: &str = "system";

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    matches!(id.split_once("--"), Some((entity, cat)) if !entity.is_empty() && !cat.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_ids_need_both_halves() {
        assert!(is_valid_page_id("a007_invoice--list"));
        assert!(!is_valid_page_id("a007_invoice"));
        assert!(!is_valid_page_id("--list"));
    }
}
