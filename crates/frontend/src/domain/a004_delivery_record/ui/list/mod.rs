use crate::domain::a001_customer::api::fetch_all_customers;
use crate::domain::a004_delivery_record::api::{fetch_daily, fetch_summary};
use crate::layout::global_context::use_global_context;
use crate::shared::components::stat_card::{StatCard, StatFormat};
use crate::shared::date_utils::{format_date, today_iso};
use crate::shared::format::format_currency;
use crate::shared::http::use_api;
use crate::shared::icons::icon;
use crate::shared::page_frame::{ErrorAlert, PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_customer::Customer;
use contracts::domain::a004_delivery_record::{DeliveryTime, Record, RecordQuery, RecordSummary};
use contracts::domain::common::format_quantity;
use contracts::shared::routes::AppRoute;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn window_quantity(record: &Record, time: DeliveryTime) -> String {
    record
        .delivery(time)
        .map(|d| format_quantity(d.total_quantity))
        .unwrap_or_else(|| "-".to_string())
}

#[component]
pub fn RecordList() -> impl IntoView {
    let ctx = use_global_context();
    let client = StoredValue::new(use_api());

    let date = RwSignal::new(today_iso());
    let customer_id = RwSignal::new(String::new());
    let customers = RwSignal::new(Vec::<Customer>::new());
    let records = RwSignal::new(Vec::<Record>::new());
    let summary = RwSignal::new(None::<RecordSummary>);
    let is_loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let load = move || {
        let query = RecordQuery {
            date: date.get_untracked(),
            customer_id: Some(customer_id.get_untracked()).filter(|id| !id.is_empty()),
        };
        let client = client.get_value();
        is_loading.set(true);
        error.set(None);
        spawn_local(async move {
            match fetch_daily(&client, &query).await {
                Ok(list) => records.set(list),
                Err(e) => error.set(Some(e.user_message())),
            }
            match fetch_summary(&client, &query).await {
                Ok(s) => summary.set(Some(s)),
                Err(e) => {
                    log::warn!("record summary unavailable: {}", e);
                    summary.set(None);
                }
            }
            is_loading.set(false);
        });
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
    load();

    let stat = move |pick: fn(&RecordSummary) -> f64| {
        Signal::derive(move || summary.get().map(|s| pick(&s)))
    };

    view! {
        <PageFrame page_id="a004_delivery_record--list" category=PAGE_CAT_LIST>
            <PageHeader title="Daily records".to_string()>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| load()>
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <div class="form__group">
                            <label class="form__label">"Date"</label>
                            <input
                                class="form__input"
                                type="date"
                                prop:value=move || date.get()
                                on:change=move |ev| {
                                    date.set(event_target_value(&ev));
                                    load();
                                }
                            />
                        </div>
                        <div class="form__group">
                            <label class="form__label">"Customer"</label>
                            <select
                                class="form__select"
                                prop:value=move || customer_id.get()
                                on:change=move |ev| {
                                    customer_id.set(event_target_value(&ev));
                                    load();
                                }
                            >
                                <option value="">"All customers"</option>
                                {move || customers.get().into_iter().map(|c| {
                                    view! { <option value=c.id.clone()>{c.display_name()}</option> }
                                }).collect_view()}
                            </select>
                        </div>
                    </Flex>
                </div>

                <div class="stat-grid">
                    <StatCard
                        label="Records"
                        icon_name="records"
                        value=stat(|s| s.total_records as f64)
                        format=StatFormat::Count
                    />
                    <StatCard
                        label="Total quantity"
                        icon_name="stock"
                        value=stat(|s| s.total_quantity)
                        format=StatFormat::Quantity
                    />
                    <StatCard
                        label="Morning"
                        icon_name="stock"
                        value=stat(|s| s.morning_quantity)
                        format=StatFormat::Quantity
                    />
                    <StatCard
                        label="Evening"
                        icon_name="stock"
                        value=stat(|s| s.evening_quantity)
                        format=StatFormat::Quantity
                    />
                    <StatCard
                        label="Amount"
                        icon_name="invoices"
                        value=stat(|s| s.total_amount)
                        format=StatFormat::Money
                    />
                </div>

                <ErrorAlert error=error />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Date"</TableHeaderCell>
                                <TableHeaderCell>"Customer"</TableHeaderCell>
                                <TableHeaderCell>"Morning (L)"</TableHeaderCell>
                                <TableHeaderCell>"Evening (L)"</TableHeaderCell>
                                <TableHeaderCell>"Total (L)"</TableHeaderCell>
                                <TableHeaderCell>"Amount"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || records.get().into_iter().map(|r| {
                                let route = AppRoute::RecordEdit(r.id.clone());
                                let date = format_date(&r.date);
                                let customer_name = r.customer.name().to_string();
                                let morning = window_quantity(&r, DeliveryTime::Morning);
                                let evening = window_quantity(&r, DeliveryTime::Evening);
                                let total_quantity = format_quantity(r.total_daily_quantity);
                                let total_price = format_currency(r.total_daily_price);
                                view! {
                                    <TableRow>
                                        <TableCell>{date}</TableCell>
                                        <TableCell>{customer_name}</TableCell>
                                        <TableCell>{morning}</TableCell>
                                        <TableCell>{evening}</TableCell>
                                        <TableCell>{total_quantity}</TableCell>
                                        <TableCell>{total_price}</TableCell>
                                        <TableCell>
                                            <button
                                                class="btn btn-icon"
                                                title="Edit"
                                                on:click=move |_| ctx.navigate(&route)
                                            >
                                                {icon("edit")}
                                            </button>
                                        </TableCell>
                                    </TableRow>
                                }
                            }).collect_view()}
                        </TableBody>
                    </Table>
                </div>

                <Show when=move || !is_loading.get() && records.with(|r| r.is_empty())>
                    <div class="empty-state">"No deliveries recorded for this day"</div>
                </Show>
            </div>
        </PageFrame>
    }
}
