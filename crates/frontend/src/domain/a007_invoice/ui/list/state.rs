use crate::shared::config::AppConfig;
use crate::shared::date_utils::today;
use crate::system::auth::storage::{load_json, save_json};
use contracts::domain::a007_invoice::{InvoiceListState, InvoiceScope, ManualFilters};
use leptos::prelude::*;

/// The header month/year survives reloads; everything else starts fresh.
pub fn stored_scope() -> InvoiceScope {
    load_json::<InvoiceScope>(AppConfig::INVOICE_SCOPE_STORAGE_KEY)
        .filter(|s| (1..=12).contains(&s.month))
        .unwrap_or_else(|| InvoiceScope::containing(today()))
}

pub fn persist_scope(scope: &InvoiceScope) {
    save_json(AppConfig::INVOICE_SCOPE_STORAGE_KEY, scope);
}

/// `customer_id` comes from `/invoices?customerId=..` and pre-applies the
/// customer filter.
pub fn create_state(customer_id: Option<String>) -> RwSignal<InvoiceListState> {
    let mut state = InvoiceListState::new(stored_scope());
    if customer_id.is_some() {
        state.apply_manual(ManualFilters {
            customer_id,
            ..Default::default()
        });
    }
    RwSignal::new(state)
}
