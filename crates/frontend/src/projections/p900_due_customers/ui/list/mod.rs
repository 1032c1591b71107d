use crate::layout::global_context::use_global_context;
use crate::projections::p900_due_customers::api::fetch_due_customers;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::AppConfig;
use crate::shared::format::format_currency;
use crate::shared::http::use_api;
use crate::shared::list_utils::SearchInput;
use crate::shared::page_frame::{ErrorAlert, PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::projections::p900_due_customers::dto::page_total_due;
use contracts::projections::p900_due_customers::{DueCustomer, DueCustomersQuery};
use contracts::shared::envelope::ListPage;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Tab key of the invoice list filtered to one customer.
fn customer_invoices_path(customer_id: &str) -> String {
    format!("/invoices?customerId={}", customer_id)
}

#[component]
pub fn DueCustomersList() -> impl IntoView {
    let ctx = use_global_context();
    let client = StoredValue::new(use_api());

    let data = RwSignal::new(ListPage::<DueCustomer>::default());
    let search = RwSignal::new(String::new());
    let page = RwSignal::new(1usize);
    let is_loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let load = move || {
        let query = DueCustomersQuery::new(
            page.get_untracked(),
            AppConfig::DUE_CUSTOMERS_PAGE_SIZE,
            &search.get_untracked(),
        );
        let client = client.get_value();
        is_loading.set(true);
        error.set(None);
        spawn_local(async move {
            match fetch_due_customers(&client, &query).await {
                Ok(result) => data.set(result),
                Err(e) => error.set(Some(e.user_message())),
            }
            is_loading.set(false);
        });
    };
    load();

    let on_search = Callback::new(move |term: String| {
        search.set(term);
        page.set(1);
        load();
    });

    let go_to_page = Callback::new(move |p: usize| {
        page.set(p);
        load();
    });

    let page_due = move || data.with(|d| page_total_due(&d.items));

    view! {
        <PageFrame page_id="p900_due_customers--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Due customers".to_string()
                subtitle=Signal::derive(move || Some(format!("Due on this page: {}", format_currency(page_due()))))
            />

            <div class="page__content">
                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div class="filter-panel-header__left">
                            <SearchInput
                                value=search
                                on_change=on_search
                                placeholder="Search by name, phone or number".to_string()
                            />
                        </div>
                        <div class="filter-panel-header__center">
                            <PaginationControls
                                current_page=Signal::derive(move || data.with(|d| d.page))
                                total_pages=Signal::derive(move || data.with(|d| d.total_pages))
                                total_count=Signal::derive(move || data.with(|d| d.total))
                                on_page_change=go_to_page
                            />
                        </div>
                    </div>
                </div>

                <ErrorAlert error=error />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"No."</TableHeaderCell>
                                <TableHeaderCell>"Customer"</TableHeaderCell>
                                <TableHeaderCell>"Phone"</TableHeaderCell>
                                <TableHeaderCell>"Open invoices"</TableHeaderCell>
                                <TableHeaderCell>"Total due"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || data.get().items.into_iter().map(|row| {
                                let path = customer_invoices_path(&row.customer_id);
                                view! {
                                    <TableRow>
                                        <TableCell>{row.customer_no.clone().unwrap_or_default()}</TableCell>
                                        <TableCell>
                                            <a
                                                href="#"
                                                class="table__link"
                                                on:click=move |ev| {
                                                    ev.prevent_default();
                                                    ctx.open_path(&path);
                                                }
                                            >
                                                {row.name.clone()}
                                            </a>
                                        </TableCell>
                                        <TableCell>{row.phone.clone().unwrap_or_default()}</TableCell>
                                        <TableCell>{row.invoice_count}</TableCell>
                                        <TableCell>
                                            <strong>{format_currency(row.total_due)}</strong>
                                        </TableCell>
                                    </TableRow>
                                }
                            }).collect_view()}
                        </TableBody>
                    </Table>
                </div>

                <Show when=move || !is_loading.get() && data.with(|d| d.items.is_empty())>
                    <div class="empty-state">"No customers with outstanding dues"</div>
                </Show>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_link_targets_filtered_invoice_list() {
        assert_eq!(customer_invoices_path("c42"), "/invoices?customerId=c42");
    }
}
