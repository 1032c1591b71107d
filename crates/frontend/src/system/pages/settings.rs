use crate::shared::http::{use_api, ApiClient};
use crate::shared::page_frame::{ErrorAlert, PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use contracts::shared::api_error::ApiError;
use contracts::system::config::MilkmanConfig;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const CONFIG_PATH: &str = "/config/milkman";

async fn fetch_config(client: &ApiClient) -> Result<MilkmanConfig, ApiError> {
    client.get_item(CONFIG_PATH).await
}

async fn save_config(client: &ApiClient, config: &MilkmanConfig) -> Result<(), ApiError> {
    config.validate()?;
    client.put_unit(CONFIG_PATH, config).await
}

/// Business profile printed on invoices.
#[component]
pub fn SettingsPage() -> impl IntoView {
    let client = use_api();
    let form = RwSignal::new(MilkmanConfig::default());
    let error = RwSignal::new(None::<String>);
    let saved = RwSignal::new(false);
    let submitting = RwSignal::new(false);

    {
        let client = client.clone();
        spawn_local(async move {
            match fetch_config(&client).await {
                Ok(config) => form.set(config),
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    }

    let save = move || {
        let config = form.get_untracked();
        let client = client.clone();
        submitting.set(true);
        error.set(None);
        saved.set(false);
        spawn_local(async move {
            match save_config(&client, &config).await {
                Ok(()) => saved.set(true),
                Err(e) => error.set(Some(e.user_message())),
            }
            submitting.set(false);
        });
    };

    let text_field = move |label: &'static str,
                           get: fn(&MilkmanConfig) -> String,
                           set: fn(&mut MilkmanConfig, String)| {
        view! {
            <div class="form-group">
                <label>{label}</label>
                <input
                    type="text"
                    prop:value=move || form.with(get)
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| set(f, value));
                    }
                />
            </div>
        }
    };

    view! {
        <PageFrame page_id="sys_settings--system" category=PAGE_CAT_SYSTEM>
            <PageHeader title="Settings".to_string()>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| save()
                    disabled=Signal::derive(move || submitting.get())
                >
                    {move || if submitting.get() { "Saving..." } else { "Save" }}
                </Button>
            </PageHeader>

            <div class="page__content">
                <ErrorAlert error=error />
                <Show when=move || saved.get()>
                    <div class="alert alert--success">"Settings saved"</div>
                </Show>

                <div class="details-form">
                    {text_field("Business name", |c| c.name.clone(), |c, v| c.name = v)}
                    {text_field("Phone", |c| c.phone.clone(), |c, v| c.phone = v)}
                    {text_field("Address", |c| c.address.clone(), |c, v| c.address = v)}
                    {text_field("UPI ID", |c| c.upi_id.clone(), |c, v| c.upi_id = v)}
                    <div class="form-group">
                        <label>"Invoice due days"</label>
                        <input
                            type="number"
                            min="1"
                            max="90"
                            prop:value=move || form.with(|f| f.invoice_due_days.to_string())
                            on:input=move |ev| {
                                if let Ok(days) = event_target_value(&ev).parse::<u32>() {
                                    form.update(|f| f.invoice_due_days = days);
                                }
                            }
                        />
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}
