//! Sidebar with collapsible menu groups.

use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use contracts::shared::routes::AppRoute;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(AppRoute, &'static str)>, // (route, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "customers",
            label: "Customers",
            icon: "customers",
            items: vec![
                (AppRoute::Customers, "customers"),
                (AppRoute::Holidays, "holidays"),
            ],
        },
        MenuGroup {
            id: "catalog",
            label: "Catalog",
            icon: "categories",
            items: vec![
                (AppRoute::Categories, "categories"),
                (AppRoute::Subcategories, "categories"),
            ],
        },
        MenuGroup {
            id: "operations",
            label: "Operations",
            icon: "records",
            items: vec![
                (AppRoute::Records, "records"),
                (AppRoute::Stock, "stock"),
            ],
        },
        MenuGroup {
            id: "billing",
            label: "Billing",
            icon: "invoices",
            items: vec![
                (AppRoute::Invoices, "invoices"),
                (AppRoute::InvoiceGenerate, "payments"),
                (AppRoute::DueCustomers, "due"),
            ],
        },
        MenuGroup {
            id: "settings",
            label: "Settings",
            icon: "settings",
            items: vec![
                (AppRoute::Settings, "settings"),
                (AppRoute::Admins, "users"),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_global_context();
    let groups = get_menu_groups();
    let expanded_groups = RwSignal::new(groups.iter().map(|g| g.id.to_string()).collect::<Vec<_>>());

    let is_active = move |path: &str| ctx.active.get().as_deref() == Some(path);

    view! {
        <div class="app-sidebar__content">
            <div
                class="app-sidebar__item"
                class:app-sidebar__item--active=move || is_active("/")
                style:padding-left="12px"
                on:click=move |_| ctx.navigate(&AppRoute::Dashboard)
            >
                <div class="app-sidebar__item-content">
                    {icon("dashboard")}
                    <span>"Dashboard"</span>
                </div>
            </div>

            {groups.into_iter().map(|group| {
                let group_id = group.id.to_string();
                let gid_click = group_id.clone();
                let gid_exp = group_id.clone();
                let gid_show = group_id;
                let items = StoredValue::new(group.items);

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                let gid = gid_click.clone();
                                expanded_groups.update(move |ids| {
                                    if let Some(pos) = ids.iter().position(|x| x == &gid) {
                                        ids.remove(pos);
                                    } else {
                                        ids.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&gid_exp)
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.get().contains(&gid_show)>
                            <div class="app-sidebar__children">
                                {items.get_value().into_iter().map(|(route, icon_name)| {
                                    let path = StoredValue::new(route.path());
                                    let title = route.title();
                                    let route = StoredValue::new(route);
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || path.with_value(|p| is_active(p))
                                            style:padding-left="10px"
                                            on:click=move |_| route.with_value(|r| ctx.navigate(r))
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{title}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
