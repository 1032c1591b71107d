use crate::layout::global_context::{use_global_context, Tab as TabData};
use leptos::ev;
use leptos::prelude::*;

#[component]
fn Tab(tab: TabData) -> impl IntoView {
    let ctx = use_global_context();

    let key_for_active = tab.key.clone();
    let is_active = Memo::new(move |_| ctx.active.get().as_deref() == Some(&key_for_active));

    let key_for_click = tab.key.clone();
    let on_click = move |_| ctx.activate_tab(&key_for_click);

    let key_for_close = tab.key.clone();
    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        ctx.close_tab(&key_for_close);
    };

    let key_for_title = tab.key.clone();
    let title = move || {
        ctx.opened.with(|tabs| {
            tabs.iter()
                .find(|t| t.key == key_for_title)
                .map(|t| t.title.clone())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="tab" class:active=is_active on:click=on_click title=tab.key>
            <span>{title}</span>
            <button class="tab-close" on:click=on_close>"×"</button>
        </div>
    }
}

/// Strip of open tab headers.
#[component]
pub fn TabBar() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <div class="tab-bar">
            <For
                each=move || ctx.opened.get()
                key=|tab| tab.key.clone()
                children=move |tab: TabData| view! { <Tab tab=tab /> }
            />
        </div>
    }
}
