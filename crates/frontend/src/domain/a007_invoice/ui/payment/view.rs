use super::view_model::PaymentViewModel;
use crate::layout::global_context::use_global_context;
use crate::shared::format::format_currency;
use crate::shared::http::use_api;
use crate::shared::page_frame::{ErrorAlert, PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_USECASE;
use contracts::domain::a007_invoice::{PaymentMethod, QuickAmount};
use contracts::shared::routes::AppRoute;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn PaymentPage(id: String, tab_key: String) -> impl IntoView {
    let ctx = use_global_context();
    let client = use_api();
    let vm = PaymentViewModel::new();
    vm.load(client.clone(), id.clone());

    let detail = StoredValue::new(AppRoute::InvoiceDetail(id));
    let tab_key = StoredValue::new(tab_key);

    // An already open detail tab would show the old balance; reopen it.
    let on_done = Callback::new(move |_| {
        let route = detail.get_value();
        ctx.close_tab(&route.path());
        ctx.replace_tab(&tab_key.get_value(), &route);
    });

    let subtitle = Signal::derive(move || {
        vm.invoice.with(|i| {
            i.as_ref()
                .map(|i| format!("{} · {}", i.invoice_number, i.customer_name()))
        })
    });

    view! {
        <PageFrame page_id="a007_invoice--payment" category=PAGE_CAT_USECASE>
            <PageHeader title="Add payment".to_string() subtitle=subtitle>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| ctx.close_tab(&tab_key.get_value())
                >
                    "Cancel"
                </Button>
            </PageHeader>

            <div class="page__content">
                {move || vm.success.get().map(|message| view! {
                    <div class="alert alert--success">{message}</div>
                })}
                <ErrorAlert error=vm.error />

                <div class="payment-due">
                    <span>"Amount due"</span>
                    <strong>{move || format_currency(vm.due_amount())}</strong>
                </div>

                <div class="detail-form">
                    <div class="form__group">
                        <label class="form__label" for="payment-amount">"Amount *"</label>
                        <input
                            class="form__input"
                            type="number"
                            id="payment-amount"
                            min="0"
                            step="0.01"
                            placeholder="0.00"
                            prop:value=move || vm.form.with(|f| f.amount.clone())
                            on:input=move |ev| vm.form.update(|f| f.amount = event_target_value(&ev))
                        />
                        <div class="quick-amounts">
                            {QuickAmount::ALL.into_iter().map(|preset| view! {
                                <button
                                    class="quick-amount"
                                    type="button"
                                    disabled=move || vm.due_amount() <= 0.0
                                    on:click=move |_| vm.apply_quick_amount(preset)
                                >
                                    {preset.label()}
                                </button>
                            }).collect_view()}
                        </div>
                        {move || vm.advance_notice().map(|notice| view! {
                            <div class="alert alert--info">{notice}</div>
                        })}
                        <div class="form__hint">
                            {move || format!("Remaining after payment: {}", format_currency(vm.remaining_after()))}
                        </div>
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Payment method"</label>
                        <div class="segmented">
                            {[PaymentMethod::Cash, PaymentMethod::Online].into_iter().map(|method| view! {
                                <label class="segmented__option">
                                    <input
                                        type="radio"
                                        name="payment-method"
                                        prop:checked=move || vm.form.with(|f| f.payment_method == method)
                                        on:change=move |_| vm.set_method(method)
                                    />
                                    {method.label()}
                                </label>
                            }).collect_view()}
                        </div>
                    </div>

                    <Show when=move || vm.form.with(|f| f.shows_transaction_id())>
                        <div class="form__group">
                            <label class="form__label" for="payment-txn">"Transaction ID"</label>
                            <input
                                class="form__input"
                                type="text"
                                id="payment-txn"
                                prop:value=move || vm.form.with(|f| f.transaction_id.clone())
                                on:input=move |ev| vm.form.update(|f| f.transaction_id = event_target_value(&ev))
                            />
                            <Show when=move || vm.form.with(|f| f.transaction_id.trim().is_empty())>
                                <div class="form__hint">{move || vm.transaction_hint()}</div>
                            </Show>
                        </div>
                    </Show>

                    <div class="form__group">
                        <label class="form__label" for="payment-notes">"Notes"</label>
                        <textarea
                            class="form__textarea"
                            id="payment-notes"
                            prop:value=move || vm.form.with(|f| f.notes.clone())
                            on:input=move |ev| vm.form.update(|f| f.notes = event_target_value(&ev))
                        />
                    </div>

                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || !vm.can_submit())
                        on_click=move |_| vm.submit_command(client.clone(), on_done)
                    >
                        {move || if vm.is_submitting.get() { "Recording..." } else { "Record payment" }}
                    </Button>
                </div>
            </div>
        </PageFrame>
    }
}
