use crate::domain::a001_customer::api::fetch_all_customers;
use crate::domain::a007_invoice::api::{generate_batch, generate_for_customer};
use crate::layout::global_context::use_global_context;
use crate::shared::components::month_selector::MonthSelector;
use crate::shared::date_utils::current_month_year;
use crate::shared::format::format_currency;
use crate::shared::http::use_api;
use crate::shared::page_frame::{ErrorAlert, PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_USECASE;
use contracts::domain::a001_customer::Customer;
use contracts::domain::a007_invoice::{BatchGenerateResult, GenerateInvoiceRequest, Invoice};
use contracts::domain::common::month_name;
use contracts::shared::routes::AppRoute;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Single,
    Batch,
}

#[component]
pub fn GenerateInvoices() -> impl IntoView {
    let ctx = use_global_context();
    let client = StoredValue::new(use_api());

    let (this_month, this_year) = current_month_year();
    let month = RwSignal::new(this_month);
    let year = RwSignal::new(this_year);
    let mode = RwSignal::new(Mode::Single);
    let customer_id = RwSignal::new(String::new());
    let customers = RwSignal::new(Vec::<Customer>::new());

    let is_running = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let generated = RwSignal::new(None::<Invoice>);
    let batch = RwSignal::new(None::<BatchGenerateResult>);

    spawn_local({
        let client = client.get_value();
        async move {
            match fetch_all_customers(&client).await {
                Ok(list) => customers.set(list.into_iter().filter(|c| c.is_active).collect()),
                Err(e) => error.set(Some(e.user_message())),
            }
        }
    });

    let run = move || {
        let request = GenerateInvoiceRequest {
            month: month.get_untracked(),
            year: year.get_untracked(),
        };
        let selected = customer_id.get_untracked();
        let mode = mode.get_untracked();
        if mode == Mode::Single && selected.is_empty() {
            error.set(Some("Select a customer".to_string()));
            return;
        }
        let client = client.get_value();
        is_running.set(true);
        error.set(None);
        generated.set(None);
        batch.set(None);
        spawn_local(async move {
            match mode {
                Mode::Single => match generate_for_customer(&client, &selected, &request).await {
                    Ok(invoice) => generated.set(Some(invoice)),
                    Err(e) => error.set(Some(e.user_message())),
                },
                Mode::Batch => match generate_batch(&client, &request).await {
                    Ok(result) => {
                        log::info!("batch generation: {}", result.summary());
                        batch.set(Some(result));
                    }
                    Err(e) => error.set(Some(e.user_message())),
                },
            }
            is_running.set(false);
        });
    };

    let period = move || format!("{} {}", month_name(month.get()), year.get());

    view! {
        <PageFrame page_id="a007_invoice--generate" category=PAGE_CAT_USECASE>
            <PageHeader title="Generate invoices".to_string()>
                <MonthSelector
                    month=month
                    year=year
                    on_select=Callback::new(move |(m, y): (u32, i32)| {
                        month.set(m);
                        year.set(y);
                    })
                />
            </PageHeader>

            <div class="page__content">
                <div class="segmented">
                    <label class="segmented__option">
                        <input
                            type="radio"
                            name="generate-mode"
                            prop:checked=move || mode.get() == Mode::Single
                            on:change=move |_| mode.set(Mode::Single)
                        />
                        "Single customer"
                    </label>
                    <label class="segmented__option">
                        <input
                            type="radio"
                            name="generate-mode"
                            prop:checked=move || mode.get() == Mode::Batch
                            on:change=move |_| mode.set(Mode::Batch)
                        />
                        "All active customers"
                    </label>
                </div>

                <Show when=move || mode.get() == Mode::Single>
                    <div class="form__group">
                        <label class="form__label">"Customer"</label>
                        <select
                            class="form__select"
                            prop:value=move || customer_id.get()
                            on:change=move |ev| customer_id.set(event_target_value(&ev))
                        >
                            <option value="">"Select customer"</option>
                            {move || customers.get().into_iter().map(|c| {
                                view! { <option value=c.id.clone()>{c.display_name()}</option> }
                            }).collect_view()}
                        </select>
                    </div>
                </Show>

                <ErrorAlert error=error />

                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| run()
                    disabled=Signal::derive(move || is_running.get())
                >
                    {move || if is_running.get() {
                        "Generating...".to_string()
                    } else {
                        format!("Generate for {}", period())
                    }}
                </Button>

                {move || generated.get().map(|inv| {
                    let route = AppRoute::InvoiceDetail(inv.id.clone());
                    view! {
                        <div class="alert alert--success">
                            {format!(
                                "Invoice {} created for {}: {}",
                                inv.invoice_number,
                                inv.customer_name(),
                                format_currency(inv.total_amount)
                            )}
                            " "
                            <a
                                href="#"
                                class="table__link"
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    ctx.navigate(&route);
                                }
                            >
                                "Open"
                            </a>
                        </div>
                    }
                })}

                {move || batch.get().map(|result| {
                    let tone = if result.failed > 0 { "alert alert--warning" } else { "alert alert--success" };
                    view! {
                        <div class="batch-result">
                            <div class=tone>
                                {result.summary()}
                            </div>
                            {(!result.errors.is_empty()).then(|| view! {
                                <ul class="batch-result__errors">
                                    {result.errors.iter().map(|f| {
                                        let who = f
                                            .customer_name
                                            .clone()
                                            .or_else(|| f.customer_id.clone())
                                            .unwrap_or_else(|| "Unknown customer".to_string());
                                        view! { <li>{format!("{}: {}", who, f.message)}</li> }
                                    }).collect_view()}
                                </ul>
                            })}
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| ctx.navigate(&AppRoute::Invoices)
                            >
                                "View invoices"
                            </Button>
                        </div>
                    }
                })}
            </div>
        </PageFrame>
    }
}
