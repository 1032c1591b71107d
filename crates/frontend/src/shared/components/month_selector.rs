use crate::shared::date_utils::{current_month_year, year_options};
use contracts::domain::common::month_name;
use leptos::prelude::*;

/// Month + year pickers with a "this month" shortcut.
#[component]
pub fn MonthSelector(
    #[prop(into)]
    month: Signal<u32>,
    #[prop(into)]
    year: Signal<i32>,
    /// Called with the new (month, year)
    on_select: Callback<(u32, i32)>,
) -> impl IntoView {
    let (_, this_year) = current_month_year();
    let years = year_options(this_year);

    view! {
        <div class="month-selector">
            <select
                class="month-selector__month"
                prop:value=move || month.get().to_string()
                on:change=move |ev| {
                    if let Ok(m) = event_target_value(&ev).parse::<u32>() {
                        on_select.run((m, year.get_untracked()));
                    }
                }
            >
                {(1..=12u32).map(|m| view! {
                    <option value=m.to_string() selected=move || month.get() == m>
                        {month_name(m)}
                    </option>
                }).collect_view()}
            </select>
            <select
                class="month-selector__year"
                prop:value=move || year.get().to_string()
                on:change=move |ev| {
                    if let Ok(y) = event_target_value(&ev).parse::<i32>() {
                        on_select.run((month.get_untracked(), y));
                    }
                }
            >
                {years.into_iter().map(|y| view! {
                    <option value=y.to_string() selected=move || year.get() == y>
                        {y.to_string()}
                    </option>
                }).collect_view()}
            </select>
            <button
                class="month-selector__today"
                title="Current month"
                on:click=move |_| on_select.run(current_month_year())
            >
                "This month"
            </button>
        </div>
    }
}
