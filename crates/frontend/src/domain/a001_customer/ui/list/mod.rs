use crate::domain::a001_customer::api::{delete_customer, fetch_customers};
use crate::layout::global_context::use_global_context;
use crate::shared::components::badge::Badge as UiBadge;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::AppConfig;
use crate::shared::format::format_currency;
use crate::shared::http::use_api;
use crate::shared::icons::icon;
use crate::shared::list_utils::{confirm_action, SearchInput};
use crate::shared::page_frame::{ErrorAlert, PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_customer::{Customer, CustomerQuery};
use contracts::domain::common::format_quantity;
use contracts::shared::envelope::ListPage;
use contracts::shared::routes::AppRoute;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn CustomerList() -> impl IntoView {
    let ctx = use_global_context();
    let client = StoredValue::new(use_api());

    let data = RwSignal::new(ListPage::<Customer>::default());
    let page = RwSignal::new(1usize);
    let search = RwSignal::new(String::new());
    let is_loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let load = move || {
        let query = CustomerQuery::new(
            page.get_untracked(),
            AppConfig::LIST_PAGE_SIZE,
            &search.get_untracked(),
        );
        let client = client.get_value();
        is_loading.set(true);
        error.set(None);
        spawn_local(async move {
            match fetch_customers(&client, &query).await {
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

    let remove = move |customer: Customer| {
        if !confirm_action(&format!("Delete customer {}?", customer.name)) {
            return;
        }
        let client = client.get_value();
        spawn_local(async move {
            match delete_customer(&client, &customer.id).await {
                Ok(()) => load(),
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };

    view! {
        <PageFrame page_id="a001_customer--list" category=PAGE_CAT_LIST>
            <PageHeader title="Customers".to_string()>
                <UiBadge variant="primary".to_string()>
                    {move || data.with(|d| d.total.to_string())}
                </UiBadge>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| ctx.navigate(&AppRoute::CustomerNew)
                >
                    {icon("plus")}
                    " New customer"
                </Button>
            </PageHeader>

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
                                <TableHeaderCell>"Name"</TableHeaderCell>
                                <TableHeaderCell>"Phone"</TableHeaderCell>
                                <TableHeaderCell>"Milk"</TableHeaderCell>
                                <TableHeaderCell>"Daily (L)"</TableHeaderCell>
                                <TableHeaderCell>"Advance"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || data.get().items.into_iter().map(|c| {
                                let edit_route = AppRoute::CustomerEdit(c.id.clone());
                                let for_delete = c.clone();
                                let milk = c
                                    .milk_type
                                    .as_ref()
                                    .map(|m| m.name().to_string())
                                    .unwrap_or_default();
                                view! {
                                    <TableRow>
                                        <TableCell>{c.customer_no.clone().unwrap_or_default()}</TableCell>
                                        <TableCell>
                                            <a
                                                href="#"
                                                class="table__link"
                                                on:click=move |ev| {
                                                    ev.prevent_default();
                                                    ctx.navigate(&edit_route);
                                                }
                                            >
                                                {c.name.clone()}
                                            </a>
                                        </TableCell>
                                        <TableCell>{c.phone.clone()}</TableCell>
                                        <TableCell>{milk}</TableCell>
                                        <TableCell>
                                            {format!(
                                                "{} + {}",
                                                format_quantity(c.morning_quantity),
                                                format_quantity(c.evening_quantity)
                                            )}
                                        </TableCell>
                                        <TableCell>{format_currency(c.advance_amount)}</TableCell>
                                        <TableCell>
                                            {if c.is_active {
                                                view! { <UiBadge variant="success".to_string()>"Active"</UiBadge> }.into_any()
                                            } else {
                                                view! { <UiBadge>"Inactive"</UiBadge> }.into_any()
                                            }}
                                        </TableCell>
                                        <TableCell>
                                            <button
                                                class="btn btn-icon btn-danger"
                                                title="Delete"
                                                on:click=move |_| remove(for_delete.clone())
                                            >
                                                {icon("trash")}
                                            </button>
                                        </TableCell>
                                    </TableRow>
                                }
                            }).collect_view()}
                        </TableBody>
                    </Table>
                </div>

                <Show when=move || is_loading.get()>
                    <div class="loading">"Loading..."</div>
                </Show>
                <Show when=move || !is_loading.get() && data.with(|d| d.items.is_empty())>
                    <div class="empty-state">"No customers found"</div>
                </Show>
            </div>
        </PageFrame>
    }
}
