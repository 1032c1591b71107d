use crate::domain::a002_milk_category::api::{delete_category, fetch_categories, save_category};
use crate::shared::components::badge::Badge as UiBadge;
use crate::shared::format::format_currency;
use crate::shared::http::use_api;
use crate::shared::icons::icon;
use crate::shared::list_utils::confirm_action;
use crate::shared::page_frame::{ErrorAlert, PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a002_milk_category::{Category, CategoryDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn CategoryList() -> impl IntoView {
    let client = StoredValue::new(use_api());

    let items = RwSignal::new(Vec::<Category>::new());
    let error = RwSignal::new(None::<String>);
    let is_loading = RwSignal::new(false);

    // None: form hidden; Some(None): creating; Some(Some(id)): editing
    let editing = RwSignal::new(None::<Option<String>>);
    let form = RwSignal::new(CategoryDto::default());
    let form_error = RwSignal::new(None::<String>);

    let load = move || {
        let client = client.get_value();
        is_loading.set(true);
        spawn_local(async move {
            match fetch_categories(&client).await {
                Ok(list) => {
                    items.set(list);
                    error.set(None);
                }
                Err(e) => error.set(Some(e.user_message())),
            }
            is_loading.set(false);
        });
    };
    load();

    let open_new = move || {
        form.set(CategoryDto::default());
        form_error.set(None);
        editing.set(Some(None));
    };

    let open_edit = move |category: &Category| {
        form.set(CategoryDto::from(category));
        form_error.set(None);
        editing.set(Some(Some(category.id.clone())));
    };

    let save = move || {
        let dto = form.get_untracked();
        let id = editing.get_untracked().flatten();
        let client = client.get_value();
        spawn_local(async move {
            match save_category(&client, id.as_deref(), &dto).await {
                Ok(()) => {
                    editing.set(None);
                    load();
                }
                Err(e) => form_error.set(Some(e.user_message())),
            }
        });
    };

    let remove = move |category: Category| {
        if !confirm_action(&format!("Delete milk type {}?", category.name)) {
            return;
        }
        let client = client.get_value();
        spawn_local(async move {
            match delete_category(&client, &category.id).await {
                Ok(()) => load(),
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };

    view! {
        <PageFrame page_id="a002_milk_category--list" category=PAGE_CAT_LIST>
            <PageHeader title="Milk types".to_string()>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| open_new()>
                    {icon("plus")}
                    " New milk type"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| load()>
                    {icon("refresh")}
                </Button>
            </PageHeader>

            <div class="page__content">
                <ErrorAlert error=error />

                <Show when=move || editing.get().is_some()>
                    <div class="inline-form">
                        <h3 class="inline-form__title">
                            {move || if editing.get().flatten().is_some() { "Edit milk type" } else { "New milk type" }}
                        </h3>
                        <ErrorAlert error=form_error />
                        <div class="form__row">
                            <div class="form__group">
                                <label class="form__label">"Name *"</label>
                                <input
                                    class="form__input"
                                    type="text"
                                    prop:value=move || form.with(|f| f.name.clone())
                                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                                />
                            </div>
                            <div class="form__group">
                                <label class="form__label">"Price per liter *"</label>
                                <input
                                    class="form__input"
                                    type="number"
                                    min="0"
                                    step="0.5"
                                    prop:value=move || form.with(|f| f.price_per_liter.to_string())
                                    on:input=move |ev| {
                                        let price = event_target_value(&ev).trim().parse::<f64>().unwrap_or(0.0);
                                        form.update(|f| f.price_per_liter = price);
                                    }
                                />
                            </div>
                        </div>
                        <div class="form__group">
                            <label class="form__label">"Description"</label>
                            <input
                                class="form__input"
                                type="text"
                                prop:value=move || form.with(|f| f.description.clone())
                                on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                            />
                        </div>
                        <label class="form__checkbox">
                            <input
                                type="checkbox"
                                prop:checked=move || form.with(|f| f.is_active)
                                on:change=move |ev| form.update(|f| f.is_active = event_target_checked(&ev))
                            />
                            " Active"
                        </label>
                        <div class="inline-form__actions">
                            <Button appearance=ButtonAppearance::Primary on_click=move |_| save()>
                                "Save"
                            </Button>
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| editing.set(None)>
                                "Cancel"
                            </Button>
                        </div>
                    </div>
                </Show>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Name"</TableHeaderCell>
                                <TableHeaderCell>"Price / L"</TableHeaderCell>
                                <TableHeaderCell>"Description"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || items.get()
                                key=|c| c.id.clone()
                                children=move |c: Category| {
                                    let for_edit = c.clone();
                                    let for_delete = c.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>{c.name.clone()}</TableCell>
                                            <TableCell>{format_currency(c.price_per_liter)}</TableCell>
                                            <TableCell>{c.description.clone()}</TableCell>
                                            <TableCell>
                                                {if c.is_active {
                                                    view! { <UiBadge variant="success".to_string()>"Active"</UiBadge> }.into_any()
                                                } else {
                                                    view! { <UiBadge>"Inactive"</UiBadge> }.into_any()
                                                }}
                                            </TableCell>
                                            <TableCell>
                                                <button class="btn btn-icon" title="Edit" on:click=move |_| open_edit(&for_edit)>
                                                    {icon("edit")}
                                                </button>
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
                                }
                            />
                        </TableBody>
                    </Table>
                </div>

                <Show when=move || !is_loading.get() && items.with(|i| i.is_empty())>
                    <div class="empty-state">"No milk types yet"</div>
                </Show>
            </div>
        </PageFrame>
    }
}
