use crate::shared::date_utils::format_datetime;
use crate::shared::http::use_api;
use crate::shared::page_frame::{ErrorAlert, PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::auth::api::fetch_admins;
use contracts::system::auth::Admin;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Read-only list of admin accounts.
#[component]
pub fn AdminsPage() -> impl IntoView {
    let client = use_api();
    let (admins, set_admins) = signal(Vec::<Admin>::new());
    let (is_loading, set_is_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    let load = move || {
        set_is_loading.set(true);
        set_error.set(None);
        let client = client.clone();
        spawn_local(async move {
            match fetch_admins(&client).await {
                Ok(list) => set_admins.set(list),
                Err(e) => set_error.set(Some(e.user_message())),
            }
            set_is_loading.set(false);
        });
    };
    load();

    view! {
        <PageFrame page_id="sys_admins--system" category=PAGE_CAT_SYSTEM>
            <PageHeader title="Admins".to_string()>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load()
                    disabled=Signal::derive(move || is_loading.get())
                >
                    "Refresh"
                </Button>
            </PageHeader>

            <div class="page__content">
                <ErrorAlert error=error />
                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Username"</TableHeaderCell>
                                <TableHeaderCell>"Name"</TableHeaderCell>
                                <TableHeaderCell>"Email"</TableHeaderCell>
                                <TableHeaderCell>"Created"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || admins.get().into_iter().map(|a| view! {
                                <TableRow>
                                    <TableCell>{a.username.clone()}</TableCell>
                                    <TableCell>{a.name.clone().unwrap_or_default()}</TableCell>
                                    <TableCell>{a.email.clone().unwrap_or_default()}</TableCell>
                                    <TableCell>
                                        {a.created_at.as_deref().map(format_datetime).unwrap_or_default()}
                                    </TableCell>
                                </TableRow>
                            }).collect_view()}
                        </TableBody>
                    </Table>
                </div>
            </div>
        </PageFrame>
    }
}
