use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use leptos::prelude::*;

#[component]
pub fn NotFoundPage(path: String, on_home: Callback<()>) -> impl IntoView {
    view! {
        <PageFrame page_id="sys_not_found--system" category=PAGE_CAT_SYSTEM>
            <div class="page__content not-found">
                <h1>"404"</h1>
                <p>"Page not found: " <code>{path}</code></p>
                <button class="btn btn-primary" on:click=move |_| on_home.run(())>
                    "Go to dashboard"
                </button>
            </div>
        </PageFrame>
    }
}
