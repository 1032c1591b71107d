//! Correction form for one daily record.
//!
//! Every keystroke goes through `recompute_record`, so item, delivery and
//! daily totals on screen always agree with each other.

use crate::domain::a004_delivery_record::api::{fetch_record, update_record};
use crate::layout::global_context::use_global_context;
use crate::shared::date_utils::format_date;
use crate::shared::format::format_currency;
use crate::shared::http::use_api;
use crate::shared::page_frame::{ErrorAlert, PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a004_delivery_record::{
    recompute_record, Delivery, DeliveryTime, Record, RecordEdit as Edit,
};
use contracts::domain::common::format_quantity;
use contracts::shared::routes::AppRoute;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
fn DeliveryEditor(record: RwSignal<Option<Record>>, time: DeliveryTime) -> impl IntoView {
    let apply = move |edit: Edit| {
        record.update(|slot| {
            if let Some(current) = slot.take() {
                *slot = Some(recompute_record(current, &edit));
            }
        });
    };

    let delivery = move || -> Option<Delivery> {
        record.with(|r| r.as_ref().and_then(|r| r.delivery(time).cloned()))
    };

    view! {
        <div class="delivery-card">
            <h3 class="delivery-card__title">{time.label()}</h3>
            {move || match delivery() {
                None => view! { <div class="empty-state">"No delivery"</div> }.into_any(),
                Some(d) => view! {
                    <table class="delivery-card__items">
                        <thead>
                            <tr>
                                <th>"Milk"</th>
                                <th>"Quantity (L)"</th>
                                <th>"Price / L"</th>
                                <th>"Total"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {d.milk_items.iter().enumerate().map(|(item, m)| view! {
                                <tr>
                                    <td>{m.label()}</td>
                                    <td>
                                        <input
                                            class="form__input"
                                            type="number"
                                            min="0"
                                            step="0.25"
                                            prop:value=m.quantity.to_string()
                                            on:change=move |ev| apply(Edit::Quantity {
                                                time,
                                                item,
                                                value: Edit::sanitize(&event_target_value(&ev)),
                                            })
                                        />
                                    </td>
                                    <td>
                                        <input
                                            class="form__input"
                                            type="number"
                                            min="0"
                                            step="0.5"
                                            prop:value=m.price_per_unit.to_string()
                                            on:change=move |ev| apply(Edit::PricePerUnit {
                                                time,
                                                item,
                                                value: Edit::sanitize(&event_target_value(&ev)),
                                            })
                                        />
                                    </td>
                                    <td>{format_currency(m.total_price)}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                        <tfoot>
                            <tr>
                                <td>"Subtotal"</td>
                                <td>{format!("{} L", format_quantity(d.total_quantity))}</td>
                                <td></td>
                                <td>{format_currency(d.total_price)}</td>
                            </tr>
                        </tfoot>
                    </table>
                }.into_any(),
            }}
        </div>
    }
}

#[component]
pub fn RecordEdit(id: String, tab_key: String) -> impl IntoView {
    let ctx = use_global_context();
    let client = StoredValue::new(use_api());

    let record = RwSignal::new(None::<Record>);
    let error = RwSignal::new(None::<String>);
    let is_saving = RwSignal::new(false);

    {
        let client = client.get_value();
        spawn_local(async move {
            match fetch_record(&client, &id).await {
                Ok(r) => record.set(Some(r)),
                Err(e) => error.set(Some(format!("Failed to load: {}", e.user_message()))),
            }
        });
    }

    let tab_key = StoredValue::new(tab_key);
    let save = move || {
        let Some(current) = record.get_untracked() else {
            return;
        };
        let client = client.get_value();
        is_saving.set(true);
        error.set(None);
        spawn_local(async move {
            match update_record(&client, &current).await {
                Ok(()) => {
                    log::info!("record {} updated", current.id);
                    ctx.close_tab(&tab_key.get_value());
                    ctx.navigate(&AppRoute::Records);
                }
                Err(e) => error.set(Some(e.user_message())),
            }
            is_saving.set(false);
        });
    };

    let subtitle = Signal::derive(move || {
        record.with(|r| {
            r.as_ref()
                .map(|r| format!("{} · {}", r.customer.name(), format_date(&r.date)))
        })
    });

    view! {
        <PageFrame page_id="a004_delivery_record--detail" category=PAGE_CAT_DETAIL>
            <PageHeader title="Edit record".to_string() subtitle=subtitle>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| ctx.close_tab(&tab_key.get_value())
                >
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| save()
                    disabled=Signal::derive(move || is_saving.get() || record.with(|r| r.is_none()))
                >
                    {move || if is_saving.get() { "Saving..." } else { "Save" }}
                </Button>
            </PageHeader>

            <div class="page__content">
                <ErrorAlert error=error />

                <Show when=move || record.with(|r| r.is_some())>
                    <div class="delivery-grid">
                        <DeliveryEditor record=record time=DeliveryTime::Morning />
                        <DeliveryEditor record=record time=DeliveryTime::Evening />
                    </div>

                    <div class="record-totals">
                        <div>
                            "Daily quantity: "
                            <strong>
                                {move || record.with(|r| {
                                    r.as_ref().map(|r| format!("{} L", format_quantity(r.total_daily_quantity)))
                                })}
                            </strong>
                        </div>
                        <div>
                            "Daily amount: "
                            <strong>
                                {move || record.with(|r| r.as_ref().map(|r| format_currency(r.total_daily_price)))}
                            </strong>
                        </div>
                    </div>
                </Show>
            </div>
        </PageFrame>
    }
}
