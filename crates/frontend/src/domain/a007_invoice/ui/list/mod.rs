pub mod state;

use self::state::{create_state, persist_scope};
use crate::domain::a001_customer::api::fetch_all_customers;
use crate::domain::a007_invoice::api::{delete_invoice, fetch_invoice_superset, fetch_invoices};
use crate::layout::global_context::use_global_context;
use crate::shared::components::badge::Badge as UiBadge;
use crate::shared::components::month_selector::MonthSelector;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::stat_card::{StatCard, StatFormat, StatTone};
use crate::shared::config::AppConfig;
use crate::shared::date_utils::{format_date, year_options};
use crate::shared::format::format_currency;
use crate::shared::http::use_api;
use crate::shared::icons::icon;
use crate::shared::list_utils::{confirm_action, SearchInput};
use crate::shared::page_frame::{ErrorAlert, PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_customer::Customer;
use contracts::domain::a007_invoice::{
    Invoice, InvoiceStats, InvoiceStatus, ManualFilters, QuickFilter,
};
use contracts::domain::common::month_name;
use contracts::shared::page_source::{PageAction, PageSource};
use contracts::shared::routes::AppRoute;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn InvoiceList(#[prop(optional_no_strip)] customer_id: Option<String>) -> impl IntoView {
    let ctx = use_global_context();
    let client = StoredValue::new(use_api());

    let state = create_state(customer_id);
    let server_page = RwSignal::new(PageSource::<Invoice>::default());
    let superset = RwSignal::new(Vec::<Invoice>::new());
    let customers = RwSignal::new(Vec::<Customer>::new());
    let is_loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let show_filters = RwSignal::new(false);
    let draft = RwSignal::new(state.with_untracked(|s| s.manual.clone()));

    let load_page = move || {
        let query = state.with_untracked(|s| s.to_query(AppConfig::LIST_PAGE_SIZE));
        let client = client.get_value();
        is_loading.set(true);
        error.set(None);
        spawn_local(async move {
            match fetch_invoices(&client, &query).await {
                Ok(page) => server_page.set(PageSource::from(page)),
                Err(e) => error.set(Some(e.user_message())),
            }
            is_loading.set(false);
        });
    };

    let load_superset = move || {
        let query = state.with_untracked(|s| s.scope_query());
        let client = client.get_value();
        spawn_local(async move {
            match fetch_invoice_superset(&client, &query).await {
                Ok(all) => superset.set(all),
                Err(e) => log::warn!("invoice superset unavailable: {}", e),
            }
        });
    };

    let reload = move || {
        load_page();
        load_superset();
    };

    spawn_local({
        let client = client.get_value();
        async move {
            match fetch_all_customers(&client).await {
                Ok(list) => customers.set(list),
                Err(e) => log::warn!("customer filter unavailable: {}", e),
            }
        }
    });
    reload();

    // Server page or local search results, whichever applies right now
    let source = Memo::new(move |_| {
        let server = server_page.get();
        state.with(|s| superset.with(|all| s.page_source(server, all)))
    });

    let stats = Memo::new(move |_| superset.with(|all| InvoiceStats::from_invoices(all)));
    let stat = move |pick: fn(&InvoiceStats) -> f64| Signal::derive(move || Some(stats.with(pick)));

    let on_page_change = Callback::new(move |requested: usize| {
        let mut current = source.get_untracked();
        match current.navigate(requested) {
            PageAction::Fetch(page) => {
                state.update(|s| s.page = page);
                load_page();
            }
            PageAction::Rerender => state.update(|s| s.search_page = current.page()),
            PageAction::Ignore => {}
        }
    });

    let on_scope = Callback::new(move |(month, year): (u32, i32)| {
        state.update(|s| s.set_scope(month, year));
        persist_scope(&state.with_untracked(|s| s.scope));
        reload();
    });

    let on_search = Callback::new(move |term: String| state.update(|s| s.set_search(term)));

    let select_quick = move |filter: QuickFilter| {
        state.update(|s| s.select_quick_filter(filter));
        draft.set(state.with_untracked(|s| s.manual.clone()));
        load_page();
    };

    let apply_filters = move || {
        state.update(|s| s.apply_manual(draft.get_untracked()));
        reload();
    };

    let clear_filters = move || {
        state.update(|s| s.clear_manual());
        draft.set(ManualFilters::default());
        reload();
    };

    let remove = move |invoice: Invoice| {
        if !confirm_action(&format!("Delete invoice {}?", invoice.invoice_number)) {
            return;
        }
        let client = client.get_value();
        spawn_local(async move {
            match delete_invoice(&client, &invoice.id).await {
                Ok(()) => {
                    log::info!("invoice {} deleted", invoice.invoice_number);
                    reload();
                }
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };

    let scope_label = Signal::derive(move || {
        state.with(|s| format!("{} {}", month_name(s.effective_month()), s.effective_year()))
    });

    view! {
        <PageFrame page_id="a007_invoice--list" category=PAGE_CAT_LIST>
            <PageHeader title="Invoices".to_string() subtitle=scope_label>
                <MonthSelector
                    month=Signal::derive(move || state.with(|s| s.scope.month))
                    year=Signal::derive(move || state.with(|s| s.scope.year))
                    on_select=on_scope
                />
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| ctx.navigate(&AppRoute::InvoiceGenerate)
                >
                    {icon("plus")}
                    " Generate"
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard label="Invoices" icon_name="invoices"
                        value=stat(|s| s.total_invoices as f64) format=StatFormat::Count />
                    <StatCard label="Billed" icon_name="invoices"
                        value=stat(|s| s.total_amount) format=StatFormat::Money />
                    <StatCard label="Collected" icon_name="payments"
                        value=stat(|s| s.total_paid) format=StatFormat::Money tone=StatTone::Good />
                    <StatCard label="Outstanding" icon_name="due"
                        value=stat(|s| s.total_due) format=StatFormat::Money tone=StatTone::Warning />
                    <StatCard label="Overdue" icon_name="due"
                        value=stat(|s| s.overdue as f64) format=StatFormat::Count tone=StatTone::Bad
                        subtitle=Signal::derive(move || Some(stats.with(|s| {
                            format!("{} pending · {} paid", s.pending + s.partially_paid, s.paid)
                        })))
                    />
                </div>

                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div class="filter-panel-header__left">
                            <div class="quick-filters">
                                {QuickFilter::ALL.into_iter().map(|f| view! {
                                    <button
                                        class="quick-filter"
                                        class:quick-filter--active=move || state.with(|s| {
                                            s.quick_filter == f && s.manual.status.is_none()
                                        })
                                        on:click=move |_| select_quick(f)
                                    >
                                        {f.label()}
                                    </button>
                                }).collect_view()}
                            </div>
                            <SearchInput
                                value=Signal::derive(move || state.with(|s| s.search_term.clone()))
                                on_change=on_search
                                placeholder="Search invoice no. or customer".to_string()
                            />
                        </div>
                        <div class="filter-panel-header__center">
                            <PaginationControls
                                current_page=Signal::derive(move || source.with(|s| s.page()))
                                total_pages=Signal::derive(move || source.with(|s| s.total_pages()))
                                total_count=Signal::derive(move || source.with(|s| s.total()))
                                on_page_change=on_page_change
                            />
                        </div>
                        <div class="filter-panel-header__right">
                            <button class="btn" on:click=move |_| show_filters.update(|v| *v = !*v)>
                                {icon("chevron-down")}
                                " Filters"
                                {move || {
                                    let n = state.with(|s| s.manual.active_count());
                                    (n > 0).then(|| view! { " " <UiBadge variant="primary".to_string()>{n}</UiBadge> })
                                }}
                            </button>
                        </div>
                    </div>

                    <Show when=move || show_filters.get()>
                        <div class="filter-panel-content">
                            <Flex gap=FlexGap::Small align=FlexAlign::End>
                                <div class="form__group">
                                    <label class="form__label">"Customer"</label>
                                    <select
                                        class="form__select"
                                        prop:value=move || draft.with(|d| d.customer_id.clone().unwrap_or_default())
                                        on:change=move |ev| {
                                            let v = event_target_value(&ev);
                                            draft.update(|d| d.customer_id = Some(v).filter(|v| !v.is_empty()));
                                        }
                                    >
                                        <option value="">"All customers"</option>
                                        {move || customers.get().into_iter().map(|c| {
                                            view! { <option value=c.id.clone()>{c.display_name()}</option> }
                                        }).collect_view()}
                                    </select>
                                </div>
                                <div class="form__group">
                                    <label class="form__label">"Status"</label>
                                    <select
                                        class="form__select"
                                        prop:value=move || draft.with(|d| d.status.map(|s| s.as_str()).unwrap_or(""))
                                        on:change=move |ev| {
                                            let status = InvoiceStatus::parse(&event_target_value(&ev));
                                            draft.update(|d| d.status = status);
                                        }
                                    >
                                        <option value="">"Any"</option>
                                        {InvoiceStatus::ALL.into_iter().map(|s| {
                                            view! { <option value=s.as_str()>{s.label()}</option> }
                                        }).collect_view()}
                                    </select>
                                </div>
                                <div class="form__group">
                                    <label class="form__label">"Month"</label>
                                    <select
                                        class="form__select"
                                        prop:value=move || draft.with(|d| d.month.map(|m| m.to_string()).unwrap_or_default())
                                        on:change=move |ev| {
                                            let month = event_target_value(&ev).parse::<u32>().ok();
                                            draft.update(|d| d.month = month);
                                        }
                                    >
                                        <option value="">"Header month"</option>
                                        {(1..=12u32).map(|m| view! {
                                            <option value=m.to_string()>{month_name(m)}</option>
                                        }).collect_view()}
                                    </select>
                                </div>
                                <div class="form__group">
                                    <label class="form__label">"Year"</label>
                                    <select
                                        class="form__select"
                                        prop:value=move || draft.with(|d| d.year.map(|y| y.to_string()).unwrap_or_default())
                                        on:change=move |ev| {
                                            let year = event_target_value(&ev).parse::<i32>().ok();
                                            draft.update(|d| d.year = year);
                                        }
                                    >
                                        <option value="">"Header year"</option>
                                        {year_options(state.with_untracked(|s| s.scope.year)).into_iter().map(|y| view! {
                                            <option value=y.to_string()>{y}</option>
                                        }).collect_view()}
                                    </select>
                                </div>
                                <Button appearance=ButtonAppearance::Primary on_click=move |_| apply_filters()>
                                    "Apply"
                                </Button>
                                <Button appearance=ButtonAppearance::Secondary on_click=move |_| clear_filters()>
                                    "Clear"
                                </Button>
                            </Flex>
                        </div>
                    </Show>
                </div>

                <ErrorAlert error=error />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Invoice"</TableHeaderCell>
                                <TableHeaderCell>"Customer"</TableHeaderCell>
                                <TableHeaderCell>"Total"</TableHeaderCell>
                                <TableHeaderCell>"Paid"</TableHeaderCell>
                                <TableHeaderCell>"Due"</TableHeaderCell>
                                <TableHeaderCell>"Due date"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || source.with(|s| s.visible().to_vec()).into_iter().map(|inv| {
                                let detail = AppRoute::InvoiceDetail(inv.id.clone());
                                let payment = AppRoute::InvoicePayment(inv.id.clone());
                                let accepts_payment = inv.accepts_payment();
                                let can_delete = inv.can_delete();
                                let for_delete = inv.clone();
                                let invoice_number = inv.invoice_number.clone();
                                let customer_name = inv.customer_name().to_string();
                                let total = format_currency(inv.total_amount);
                                let paid = format_currency(inv.amount_paid);
                                let due = format_currency(inv.due_amount);
                                let due_date = inv.due_date.as_deref().map(format_date).unwrap_or_default();
                                let badge_variant = inv.status.badge_variant().to_string();
                                let status_label = inv.status.label();
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <a
                                                href="#"
                                                class="table__link"
                                                on:click=move |ev| {
                                                    ev.prevent_default();
                                                    ctx.navigate(&detail);
                                                }
                                            >
                                                {invoice_number}
                                            </a>
                                        </TableCell>
                                        <TableCell>{customer_name}</TableCell>
                                        <TableCell>{total}</TableCell>
                                        <TableCell>{paid}</TableCell>
                                        <TableCell>{due}</TableCell>
                                        <TableCell>{due_date}</TableCell>
                                        <TableCell>
                                            <UiBadge variant=badge_variant>
                                                {status_label}
                                            </UiBadge>
                                        </TableCell>
                                        <TableCell>
                                            {accepts_payment.then(|| view! {
                                                <button
                                                    class="btn btn-icon"
                                                    title="Add payment"
                                                    on:click=move |_| ctx.navigate(&payment)
                                                >
                                                    {icon("payments")}
                                                </button>
                                            })}
                                            {can_delete.then(|| view! {
                                                <button
                                                    class="btn btn-icon btn-danger"
                                                    title="Delete"
                                                    on:click=move |_| remove(for_delete.clone())
                                                >
                                                    {icon("trash")}
                                                </button>
                                            })}
                                        </TableCell>
                                    </TableRow>
                                }
                            }).collect_view()}
                        </TableBody>
                    </Table>
                </div>

                <Show when=move || !is_loading.get() && source.with(|s| s.visible().is_empty())>
                    <div class="empty-state">
                        {move || if state.with(|s| s.is_searching()) {
                            "No invoices match the search"
                        } else {
                            "No invoices for this period"
                        }}
                    </div>
                </Show>
            </div>
        </PageFrame>
    }
}
