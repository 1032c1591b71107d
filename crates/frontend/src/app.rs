use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::http::provide_api_client;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppGlobalContext::new());

    view! {
        <AuthProvider>
            <ApiProvider>
                <AppShell />
            </ApiProvider>
        </AuthProvider>
    }
}

/// The API client reads the session, so it is provided inside `AuthProvider`.
#[component]
fn ApiProvider(children: Children) -> impl IntoView {
    provide_api_client();
    children()
}
