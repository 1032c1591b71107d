use crate::domain::a005_stock::api::{
    create_entry, fetch_entries, fetch_stock_categories, fetch_summary,
};
use crate::shared::components::badge::Badge as UiBadge;
use crate::shared::date_utils::{format_date, today_iso};
use crate::shared::http::use_api;
use crate::shared::icons::icon;
use crate::shared::page_frame::{ErrorAlert, PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a002_milk_category::Category;
use contracts::domain::a005_stock::{
    available_for, validate_stock_out, StockEntry, StockEntryDto, StockEntryType, StockQuery,
    StockSummary,
};
use contracts::domain::common::format_quantity;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn non_empty(value: String) -> Option<String> {
    Some(value).filter(|v| !v.is_empty())
}

#[component]
pub fn StockPage() -> impl IntoView {
    let client = StoredValue::new(use_api());

    let categories = RwSignal::new(Vec::<Category>::new());
    let summaries = RwSignal::new(Vec::<StockSummary>::new());
    let entries = RwSignal::new(Vec::<StockEntry>::new());
    let error = RwSignal::new(None::<String>);

    let filter_category = RwSignal::new(String::new());
    let filter_type = RwSignal::new(String::new());
    let start_date = RwSignal::new(String::new());
    let end_date = RwSignal::new(String::new());

    let show_form = RwSignal::new(false);
    let form = RwSignal::new(StockEntryDto::default());
    let form_error = RwSignal::new(None::<String>);
    let is_saving = RwSignal::new(false);

    // Entries and the summary are refreshed together so the stock-out check
    // sees the same numbers as the cards.
    let load = move || {
        let query = StockQuery {
            category: non_empty(filter_category.get_untracked()),
            entry_type: StockEntryType::parse(&filter_type.get_untracked()),
            start_date: non_empty(start_date.get_untracked()),
            end_date: non_empty(end_date.get_untracked()),
        };
        let client = client.get_value();
        error.set(None);
        spawn_local(async move {
            match fetch_entries(&client, &query).await {
                Ok(list) => entries.set(list),
                Err(e) => error.set(Some(e.user_message())),
            }
            match fetch_summary(&client).await {
                Ok(list) => summaries.set(list),
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };

    spawn_local({
        let client = client.get_value();
        async move {
            match fetch_stock_categories(&client).await {
                Ok(list) => categories.set(list),
                Err(e) => error.set(Some(e.user_message())),
            }
        }
    });
    load();

    let available = move || {
        let category = form.with(|f| f.category.clone());
        summaries.with(|s| available_for(s, &category))
    };

    let stock_warning = move || {
        let (entry_type, quantity, has_category) =
            form.with(|f| (f.entry_type, f.quantity, !f.category.is_empty()));
        if !has_category {
            return None;
        }
        validate_stock_out(entry_type, quantity, available())
            .err()
            .map(|e| e.user_message())
    };

    let open_form = move || {
        form.set(StockEntryDto {
            entry_date: today_iso(),
            category: filter_category.get_untracked(),
            ..Default::default()
        });
        form_error.set(None);
        show_form.set(true);
    };

    let submit = move || {
        let dto = form.get_untracked();
        let cached = summaries.get_untracked();
        let client = client.get_value();
        is_saving.set(true);
        form_error.set(None);
        spawn_local(async move {
            match create_entry(&client, &dto, &cached).await {
                Ok(()) => {
                    log::info!("stock {} of {} recorded", dto.entry_type.as_str(), dto.quantity);
                    show_form.set(false);
                    load();
                }
                Err(e) => form_error.set(Some(e.user_message())),
            }
            is_saving.set(false);
        });
    };

    view! {
        <PageFrame page_id="a005_stock--list" category=PAGE_CAT_LIST>
            <PageHeader title="Stock".to_string()>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| open_form()>
                    {icon("plus")}
                    " New entry"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| load()>
                    {icon("refresh")}
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="stat-grid">
                    {move || summaries.get().into_iter().map(|s| {
                        let tone = if s.current_stock > 0.0 { "stat-card" } else { "stat-card stat-card--error" };
                        view! {
                            <div class=tone>
                                <div class="stat-card__body">
                                    <div class="stat-card__label">{s.category.name().to_string()}</div>
                                    <div class="stat-card__value">{format!("{} L", format_quantity(s.current_stock))}</div>
                                    <div class="stat-card__subtitle">
                                        {format!("In {} / Out {}", format_quantity(s.total_in), format_quantity(s.total_out))}
                                    </div>
                                </div>
                            </div>
                        }
                    }).collect_view()}
                </div>

                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <div class="form__group">
                            <label class="form__label">"Category"</label>
                            <select
                                class="form__select"
                                prop:value=move || filter_category.get()
                                on:change=move |ev| {
                                    filter_category.set(event_target_value(&ev));
                                    load();
                                }
                            >
                                <option value="">"All"</option>
                                {move || categories.get().into_iter().map(|c| {
                                    view! { <option value=c.id.clone()>{c.name.clone()}</option> }
                                }).collect_view()}
                            </select>
                        </div>
                        <div class="form__group">
                            <label class="form__label">"Type"</label>
                            <select
                                class="form__select"
                                prop:value=move || filter_type.get()
                                on:change=move |ev| {
                                    filter_type.set(event_target_value(&ev));
                                    load();
                                }
                            >
                                <option value="">"All"</option>
                                <option value="in">{StockEntryType::In.label()}</option>
                                <option value="out">{StockEntryType::Out.label()}</option>
                            </select>
                        </div>
                        <div class="form__group">
                            <label class="form__label">"From"</label>
                            <input
                                class="form__input"
                                type="date"
                                prop:value=move || start_date.get()
                                on:change=move |ev| {
                                    start_date.set(event_target_value(&ev));
                                    load();
                                }
                            />
                        </div>
                        <div class="form__group">
                            <label class="form__label">"To"</label>
                            <input
                                class="form__input"
                                type="date"
                                prop:value=move || end_date.get()
                                on:change=move |ev| {
                                    end_date.set(event_target_value(&ev));
                                    load();
                                }
                            />
                        </div>
                    </Flex>
                </div>

                <ErrorAlert error=error />

                <Show when=move || show_form.get()>
                    <div class="inline-form">
                        <h3 class="inline-form__title">"New stock entry"</h3>
                        <ErrorAlert error=form_error />
                        <div class="form__row">
                            <div class="form__group">
                                <label class="form__label">"Type"</label>
                                <select
                                    class="form__select"
                                    prop:value=move || form.with(|f| f.entry_type.as_str())
                                    on:change=move |ev| {
                                        let entry_type = StockEntryType::parse(&event_target_value(&ev)).unwrap_or_default();
                                        form.update(|f| f.entry_type = entry_type);
                                    }
                                >
                                    <option value="in">{StockEntryType::In.label()}</option>
                                    <option value="out">{StockEntryType::Out.label()}</option>
                                </select>
                            </div>
                            <div class="form__group">
                                <label class="form__label">"Category *"</label>
                                <select
                                    class="form__select"
                                    prop:value=move || form.with(|f| f.category.clone())
                                    on:change=move |ev| form.update(|f| f.category = event_target_value(&ev))
                                >
                                    <option value="">"Select category"</option>
                                    {move || categories.get().into_iter().map(|c| {
                                        view! { <option value=c.id.clone()>{c.name.clone()}</option> }
                                    }).collect_view()}
                                </select>
                            </div>
                            <div class="form__group">
                                <label class="form__label">"Quantity (L) *"</label>
                                <input
                                    class="form__input"
                                    type="number"
                                    min="0"
                                    step="0.5"
                                    prop:value=move || form.with(|f| f.quantity.to_string())
                                    on:input=move |ev| {
                                        let quantity = event_target_value(&ev).trim().parse::<f64>().unwrap_or(0.0);
                                        form.update(|f| f.quantity = quantity);
                                    }
                                />
                            </div>
                            <div class="form__group">
                                <label class="form__label">"Date *"</label>
                                <input
                                    class="form__input"
                                    type="date"
                                    prop:value=move || form.with(|f| f.entry_date.clone())
                                    on:change=move |ev| form.update(|f| f.entry_date = event_target_value(&ev))
                                />
                            </div>
                        </div>
                        <Show when=move || form.with(|f| f.entry_type == StockEntryType::Out && !f.category.is_empty())>
                            <div class="form__hint">
                                {move || format!("Available: {} L", format_quantity(available()))}
                            </div>
                        </Show>
                        {move || stock_warning().map(|w| view! { <div class="alert alert--warning">{w}</div> })}
                        <div class="form__group">
                            <label class="form__label">"Notes"</label>
                            <input
                                class="form__input"
                                type="text"
                                prop:value=move || form.with(|f| f.notes.clone())
                                on:input=move |ev| form.update(|f| f.notes = event_target_value(&ev))
                            />
                        </div>
                        <div class="inline-form__actions">
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| submit()
                                disabled=Signal::derive(move || is_saving.get() || stock_warning().is_some())
                            >
                                "Save"
                            </Button>
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| show_form.set(false)>
                                "Cancel"
                            </Button>
                        </div>
                    </div>
                </Show>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Date"</TableHeaderCell>
                                <TableHeaderCell>"Type"</TableHeaderCell>
                                <TableHeaderCell>"Category"</TableHeaderCell>
                                <TableHeaderCell>"Quantity (L)"</TableHeaderCell>
                                <TableHeaderCell>"Notes"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || entries.get().into_iter().map(|e| {
                                let variant = match e.entry_type {
                                    StockEntryType::In => "success",
                                    StockEntryType::Out => "warning",
                                };
                                view! {
                                    <TableRow>
                                        <TableCell>{format_date(&e.entry_date)}</TableCell>
                                        <TableCell>
                                            <UiBadge variant=variant.to_string()>{e.entry_type.label()}</UiBadge>
                                        </TableCell>
                                        <TableCell>{e.category.name().to_string()}</TableCell>
                                        <TableCell>{format_quantity(e.quantity)}</TableCell>
                                        <TableCell>{e.notes.clone()}</TableCell>
                                    </TableRow>
                                }
                            }).collect_view()}
                        </TableBody>
                    </Table>
                </div>

                <Show when=move || entries.with(|e| e.is_empty())>
                    <div class="empty-state">"No stock entries"</div>
                </Show>
            </div>
        </PageFrame>
    }
}
