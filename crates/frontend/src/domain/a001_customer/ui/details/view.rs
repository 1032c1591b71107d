use super::view_model::CustomerDetailsViewModel;
use crate::layout::global_context::use_global_context;
use crate::shared::format::format_currency;
use crate::shared::http::use_api;
use crate::shared::icons::icon;
use crate::shared::page_frame::{ErrorAlert, PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::shared::routes::AppRoute;
use leptos::prelude::*;
use thaw::*;

fn parse_quantity(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(0.0)
}

#[component]
fn FieldError(vm: CustomerDetailsViewModel, field: &'static str) -> impl IntoView {
    move || {
        vm.error_for(field)
            .map(|message| view! { <div class="form__error">{message}</div> })
    }
}

#[component]
pub fn CustomerDetails(id: Option<String>, tab_key: String) -> impl IntoView {
    let ctx = use_global_context();
    let client = use_api();
    let vm = CustomerDetailsViewModel::new(id);
    vm.load(client.clone());

    let title = if vm.is_edit_mode() {
        "Edit customer"
    } else {
        "New customer"
    };

    let tab_key = StoredValue::new(tab_key);
    let on_saved = Callback::new(move |_| {
        ctx.close_tab(&tab_key.get_value());
        ctx.navigate(&AppRoute::Customers);
    });
    let on_cancel = move |_| ctx.close_tab(&tab_key.get_value());

    let save_client = client.clone();
    let on_save = move |_| vm.save_command(save_client.clone(), on_saved);

    view! {
        <PageFrame page_id="a001_customer--detail" category=PAGE_CAT_DETAIL>
            <PageHeader title=title.to_string()>
                <Button appearance=ButtonAppearance::Secondary on_click=on_cancel>
                    {icon("x")}
                    " Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=on_save
                    disabled=Signal::derive(move || vm.is_saving.get())
                >
                    {move || if vm.is_saving.get() { "Saving..." } else { "Save" }}
                </Button>
            </PageHeader>

            <div class="page__content">
                <ErrorAlert error=vm.error />

                <div class="detail-form">
                    <div class="form__row">
                        <div class="form__group">
                            <label class="form__label" for="customer-no">"Customer No."</label>
                            <input
                                class="form__input"
                                type="text"
                                id="customer-no"
                                placeholder="Assigned automatically when empty"
                                prop:value=move || vm.form.with(|f| f.customer_no.clone().unwrap_or_default())
                                on:input=move |ev| {
                                    vm.form.update(|f| f.customer_no = Some(event_target_value(&ev)));
                                }
                            />
                            <FieldError vm=vm field="customerNo" />
                        </div>
                        <div class="form__group">
                            <label class="form__label" for="customer-name">"Name *"</label>
                            <input
                                class="form__input"
                                type="text"
                                id="customer-name"
                                prop:value=move || vm.form.with(|f| f.name.clone())
                                on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                            />
                            <FieldError vm=vm field="name" />
                        </div>
                    </div>

                    <div class="form__row">
                        <div class="form__group">
                            <label class="form__label" for="customer-phone">"Phone *"</label>
                            <input
                                class="form__input"
                                type="tel"
                                id="customer-phone"
                                maxlength="10"
                                placeholder="10-digit mobile number"
                                prop:value=move || vm.form.with(|f| f.phone.clone())
                                on:input=move |ev| vm.form.update(|f| f.phone = event_target_value(&ev))
                            />
                            <FieldError vm=vm field="phone" />
                        </div>
                        <div class="form__group">
                            <label class="form__label" for="customer-address">"Address"</label>
                            <textarea
                                class="form__textarea"
                                id="customer-address"
                                prop:value=move || vm.form.with(|f| f.address.clone())
                                on:input=move |ev| vm.form.update(|f| f.address = event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <div class="form__row">
                        <div class="form__group">
                            <label class="form__label" for="customer-milk">"Milk type"</label>
                            <select
                                class="form__select"
                                id="customer-milk"
                                prop:value=move || vm.form.with(|f| f.milk_type.clone().unwrap_or_default())
                                on:change=move |ev| vm.set_milk_type(event_target_value(&ev))
                            >
                                <option value="">"Select milk type"</option>
                                {move || vm.categories.get().into_iter().map(|c| {
                                    view! { <option value=c.id.clone()>{c.name.clone()}</option> }
                                }).collect_view()}
                            </select>
                        </div>
                        <div class="form__group">
                            <label class="form__label" for="customer-sub">"Subcategory"</label>
                            <select
                                class="form__select"
                                id="customer-sub"
                                disabled=move || vm.form.with(|f| f.milk_type.is_none())
                                prop:value=move || vm.form.with(|f| f.subcategory.clone().unwrap_or_default())
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    vm.form.update(|f| f.subcategory = Some(value).filter(|v| !v.is_empty()));
                                }
                            >
                                <option value="">"None"</option>
                                {move || vm.subcategory_options().into_iter().map(|s| {
                                    view! {
                                        <option value=s.id.clone()>
                                            {format!("{} ({})", s.name, format_currency(s.price))}
                                        </option>
                                    }
                                }).collect_view()}
                            </select>
                        </div>
                    </div>

                    <div class="form__row">
                        <div class="form__group">
                            <label class="form__label" for="customer-morning">"Morning quantity (L)"</label>
                            <input
                                class="form__input"
                                type="number"
                                id="customer-morning"
                                min="0"
                                step="0.25"
                                prop:value=move || vm.form.with(|f| f.morning_quantity.to_string())
                                on:input=move |ev| {
                                    vm.form.update(|f| f.morning_quantity = parse_quantity(&event_target_value(&ev)));
                                }
                            />
                            <FieldError vm=vm field="morningQuantity" />
                        </div>
                        <div class="form__group">
                            <label class="form__label" for="customer-evening">"Evening quantity (L)"</label>
                            <input
                                class="form__input"
                                type="number"
                                id="customer-evening"
                                min="0"
                                step="0.25"
                                prop:value=move || vm.form.with(|f| f.evening_quantity.to_string())
                                on:input=move |ev| {
                                    vm.form.update(|f| f.evening_quantity = parse_quantity(&event_target_value(&ev)));
                                }
                            />
                            <FieldError vm=vm field="eveningQuantity" />
                        </div>
                    </div>

                    <div class="form__row">
                        <label class="form__checkbox">
                            <input
                                type="checkbox"
                                prop:checked=move || vm.form.with(|f| f.is_active)
                                on:change=move |ev| vm.form.update(|f| f.is_active = event_target_checked(&ev))
                            />
                            " Active"
                        </label>
                        <Show when=move || vm.is_edit_mode()>
                            <div class="form__readonly">
                                "Advance balance: "
                                <strong>{move || format_currency(vm.advance_amount.get())}</strong>
                            </div>
                        </Show>
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}
