use crate::domain::a001_customer::api::fetch_all_customers;
use crate::domain::a006_holiday::api::{create_holiday, delete_holiday, fetch_holidays};
use crate::shared::components::badge::Badge as UiBadge;
use crate::shared::date_utils::{format_period, today, today_iso};
use crate::shared::http::use_api;
use crate::shared::icons::icon;
use crate::shared::list_utils::confirm_action;
use crate::shared::page_frame::{ErrorAlert, PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_customer::Customer;
use contracts::domain::a006_holiday::{Holiday, HolidayDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn HolidayList() -> impl IntoView {
    let client = StoredValue::new(use_api());

    let holidays = RwSignal::new(Vec::<Holiday>::new());
    let customers = RwSignal::new(Vec::<Customer>::new());
    let error = RwSignal::new(None::<String>);

    let show_form = RwSignal::new(false);
    let form = RwSignal::new(HolidayDto::default());
    let form_error = RwSignal::new(None::<String>);

    let load = move || {
        let client = client.get_value();
        spawn_local(async move {
            match fetch_holidays(&client).await {
                Ok(list) => {
                    holidays.set(list);
                    error.set(None);
                }
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };

    spawn_local({
        let client = client.get_value();
        async move {
            match fetch_all_customers(&client).await {
                Ok(list) => customers.set(list),
                Err(e) => log::warn!("customer picker unavailable: {}", e),
            }
        }
    });
    load();

    let open_form = move || {
        let today = today_iso();
        form.set(HolidayDto {
            start_date: today.clone(),
            end_date: today,
            ..Default::default()
        });
        form_error.set(None);
        show_form.set(true);
    };

    let submit = move || {
        let dto = form.get_untracked();
        let client = client.get_value();
        spawn_local(async move {
            match create_holiday(&client, &dto).await {
                Ok(()) => {
                    show_form.set(false);
                    load();
                }
                Err(e) => form_error.set(Some(e.user_message())),
            }
        });
    };

    let remove = move |holiday: Holiday| {
        let prompt = format!(
            "Delete holiday {} for {}?",
            format_period(&holiday.start_date, &holiday.end_date),
            holiday.customer_label()
        );
        if !confirm_action(&prompt) {
            return;
        }
        let client = client.get_value();
        spawn_local(async move {
            match delete_holiday(&client, &holiday.id).await {
                Ok(()) => load(),
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };

    view! {
        <PageFrame page_id="a006_holiday--list" category=PAGE_CAT_LIST>
            <PageHeader title="Holidays".to_string()>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| open_form()>
                    {icon("plus")}
                    " New holiday"
                </Button>
            </PageHeader>

            <div class="page__content">
                <ErrorAlert error=error />

                <Show when=move || show_form.get()>
                    <div class="inline-form">
                        <h3 class="inline-form__title">"New holiday"</h3>
                        <ErrorAlert error=form_error />
                        <div class="form__row">
                            <div class="form__group">
                                <label class="form__label">"Customer"</label>
                                <select
                                    class="form__select"
                                    prop:value=move || form.with(|f| f.customer.clone().unwrap_or_default())
                                    on:change=move |ev| {
                                        let value = event_target_value(&ev);
                                        form.update(|f| f.customer = Some(value).filter(|v| !v.is_empty()));
                                    }
                                >
                                    <option value="">"All customers"</option>
                                    {move || customers.get().into_iter().map(|c| {
                                        view! { <option value=c.id.clone()>{c.display_name()}</option> }
                                    }).collect_view()}
                                </select>
                            </div>
                            <div class="form__group">
                                <label class="form__label">"From *"</label>
                                <input
                                    class="form__input"
                                    type="date"
                                    prop:value=move || form.with(|f| f.start_date.clone())
                                    on:change=move |ev| form.update(|f| f.start_date = event_target_value(&ev))
                                />
                            </div>
                            <div class="form__group">
                                <label class="form__label">"To *"</label>
                                <input
                                    class="form__input"
                                    type="date"
                                    prop:value=move || form.with(|f| f.end_date.clone())
                                    on:change=move |ev| form.update(|f| f.end_date = event_target_value(&ev))
                                />
                            </div>
                        </div>
                        <div class="form__group">
                            <label class="form__label">"Reason"</label>
                            <input
                                class="form__input"
                                type="text"
                                prop:value=move || form.with(|f| f.reason.clone())
                                on:input=move |ev| form.update(|f| f.reason = event_target_value(&ev))
                            />
                        </div>
                        <div class="inline-form__actions">
                            <Button appearance=ButtonAppearance::Primary on_click=move |_| submit()>
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
                                <TableHeaderCell>"Period"</TableHeaderCell>
                                <TableHeaderCell>"Days"</TableHeaderCell>
                                <TableHeaderCell>"Customer"</TableHeaderCell>
                                <TableHeaderCell>"Reason"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let today = today();
                                holidays.get().into_iter().map(|h| {
                                    let for_delete = h.clone();
                                    let ongoing = h.covers(today);
                                    let period = format_period(&h.start_date, &h.end_date);
                                    let days = h.days();
                                    let customer_label = h.customer_label();
                                    let reason = h.reason.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                {period}
                                                {ongoing.then(|| view! { " " <UiBadge variant="warning".to_string()>"Today"</UiBadge> })}
                                            </TableCell>
                                            <TableCell>{days}</TableCell>
                                            <TableCell>{customer_label}</TableCell>
                                            <TableCell>{reason}</TableCell>
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
                                }).collect_view()
                            }}
                        </TableBody>
                    </Table>
                </div>

                <Show when=move || holidays.with(|h| h.is_empty())>
                    <div class="empty-state">"No holidays scheduled"</div>
                </Show>
            </div>
        </PageFrame>
    }
}
