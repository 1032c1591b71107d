use crate::domain::a003_milk_subcategory::api::{
    delete_subcategory, fetch_catalog, save_subcategory,
};
use crate::shared::components::badge::Badge as UiBadge;
use crate::shared::format::format_currency;
use crate::shared::http::use_api;
use crate::shared::icons::icon;
use crate::shared::list_utils::confirm_action;
use crate::shared::page_frame::{ErrorAlert, PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a002_milk_category::Category;
use contracts::domain::a003_milk_subcategory::{Subcategory, SubcategoryDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn SubcategoryList() -> impl IntoView {
    let client = StoredValue::new(use_api());

    let categories = RwSignal::new(Vec::<Category>::new());
    let items = RwSignal::new(Vec::<Subcategory>::new());
    let category_filter = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let editing = RwSignal::new(None::<Option<String>>);
    let form = RwSignal::new(SubcategoryDto::default());
    let form_error = RwSignal::new(None::<String>);

    let load = move || {
        let client = client.get_value();
        spawn_local(async move {
            match fetch_catalog(&client).await {
                Ok((cats, subs)) => {
                    categories.set(cats);
                    items.set(subs);
                    error.set(None);
                }
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };
    load();

    let visible = move || {
        let filter = category_filter.get();
        items.with(|all| {
            all.iter()
                .filter(|s| filter.is_empty() || s.category.id() == filter)
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    let category_name = move |id: &str| {
        categories.with(|cats| {
            cats.iter()
                .find(|c| c.id == id)
                .map(|c| c.name.clone())
                .unwrap_or_default()
        })
    };

    let open_new = move || {
        form.set(SubcategoryDto {
            category: category_filter.get_untracked(),
            ..Default::default()
        });
        form_error.set(None);
        editing.set(Some(None));
    };

    let open_edit = move |sub: &Subcategory| {
        form.set(SubcategoryDto::from(sub));
        form_error.set(None);
        editing.set(Some(Some(sub.id.clone())));
    };

    let save = move || {
        let dto = form.get_untracked();
        let id = editing.get_untracked().flatten();
        let existing = items.get_untracked();
        let client = client.get_value();
        spawn_local(async move {
            match save_subcategory(&client, id.as_deref(), &dto, &existing).await {
                Ok(()) => {
                    editing.set(None);
                    load();
                }
                Err(e) => form_error.set(Some(e.user_message())),
            }
        });
    };

    let remove = move |sub: Subcategory| {
        if !confirm_action(&format!("Delete subcategory {}?", sub.name)) {
            return;
        }
        let client = client.get_value();
        spawn_local(async move {
            match delete_subcategory(&client, &sub.id).await {
                Ok(()) => load(),
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };

    view! {
        <PageFrame page_id="a003_milk_subcategory--list" category=PAGE_CAT_LIST>
            <PageHeader title="Subcategories".to_string()>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| open_new()>
                    {icon("plus")}
                    " New subcategory"
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="filter-panel">
                    <label class="form__label">"Milk type"</label>
                    <select
                        class="form__select"
                        prop:value=move || category_filter.get()
                        on:change=move |ev| category_filter.set(event_target_value(&ev))
                    >
                        <option value="">"All"</option>
                        {move || categories.get().into_iter().map(|c| {
                            view! { <option value=c.id.clone()>{c.name.clone()}</option> }
                        }).collect_view()}
                    </select>
                </div>

                <ErrorAlert error=error />

                <Show when=move || editing.get().is_some()>
                    <div class="inline-form">
                        <h3 class="inline-form__title">
                            {move || if editing.get().flatten().is_some() { "Edit subcategory" } else { "New subcategory" }}
                        </h3>
                        <ErrorAlert error=form_error />
                        <div class="form__row">
                            <div class="form__group">
                                <label class="form__label">"Milk type *"</label>
                                <select
                                    class="form__select"
                                    prop:value=move || form.with(|f| f.category.clone())
                                    on:change=move |ev| form.update(|f| f.category = event_target_value(&ev))
                                >
                                    <option value="">"Select milk type"</option>
                                    {move || categories.get().into_iter().map(|c| {
                                        view! { <option value=c.id.clone()>{c.name.clone()}</option> }
                                    }).collect_view()}
                                </select>
                            </div>
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
                                <label class="form__label">"Price *"</label>
                                <input
                                    class="form__input"
                                    type="number"
                                    min="0"
                                    step="0.5"
                                    prop:value=move || form.with(|f| f.price.to_string())
                                    on:input=move |ev| {
                                        let price = event_target_value(&ev).trim().parse::<f64>().unwrap_or(0.0);
                                        form.update(|f| f.price = price);
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
                                <TableHeaderCell>"Milk type"</TableHeaderCell>
                                <TableHeaderCell>"Price"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || visible().into_iter().map(|s| {
                                let for_edit = s.clone();
                                let for_delete = s.clone();
                                let milk = s.category.populated()
                                    .map(|c| c.name.clone())
                                    .unwrap_or_else(|| category_name(s.category.id()));
                                view! {
                                    <TableRow>
                                        <TableCell>{s.name.clone()}</TableCell>
                                        <TableCell>{milk}</TableCell>
                                        <TableCell>{format_currency(s.price)}</TableCell>
                                        <TableCell>
                                            {if s.is_active {
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
                            }).collect_view()}
                        </TableBody>
                    </Table>
                </div>
            </div>
        </PageFrame>
    }
}
