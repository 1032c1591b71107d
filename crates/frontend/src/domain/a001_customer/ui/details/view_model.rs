use crate::domain::a001_customer::api::{fetch_customer, save_customer};
use crate::domain::a003_milk_subcategory::api::fetch_catalog;
use crate::shared::http::ApiClient;
use contracts::domain::a001_customer::CustomerDto;
use contracts::domain::a002_milk_category::Category;
use contracts::domain::a003_milk_subcategory::{for_category, Subcategory};
use contracts::shared::api_error::ApiError;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Form data is kept as the request DTO itself; the view writes to it with
/// `form.update(..)`.
#[derive(Clone, Copy)]
pub struct CustomerDetailsViewModel {
    pub id: StoredValue<Option<String>>,
    pub form: RwSignal<CustomerDto>,
    /// Banked overpayment of the loaded customer, shown read-only
    pub advance_amount: RwSignal<f64>,
    pub categories: RwSignal<Vec<Category>>,
    pub subcategories: RwSignal<Vec<Subcategory>>,
    pub error: RwSignal<Option<String>>,
    /// `(field, message)` of the last validation failure
    pub field_error: RwSignal<Option<(String, String)>>,
    pub is_saving: RwSignal<bool>,
}

impl CustomerDetailsViewModel {
    pub fn new(id: Option<String>) -> Self {
        Self {
            id: StoredValue::new(id),
            form: RwSignal::new(CustomerDto::default()),
            advance_amount: RwSignal::new(0.0),
            categories: RwSignal::new(Vec::new()),
            subcategories: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            field_error: RwSignal::new(None),
            is_saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.with_value(|id| id.is_some())
    }

    /// Loads the milk catalog and, in edit mode, the customer itself.
    pub fn load(&self, client: ApiClient) {
        let this = *self;
        spawn_local(async move {
            match fetch_catalog(&client).await {
                Ok((categories, subcategories)) => {
                    this.categories.set(categories);
                    this.subcategories.set(subcategories);
                }
                Err(e) => this.error.set(Some(e.user_message())),
            }

            let Some(id) = this.id.get_value() else {
                return;
            };
            match fetch_customer(&client, &id).await {
                Ok(customer) => {
                    this.advance_amount.set(customer.advance_amount);
                    this.form.set(CustomerDto::from(&customer));
                }
                Err(e) => this.error.set(Some(format!("Failed to load: {}", e.user_message()))),
            }
        });
    }

    /// Subcategories of the selected milk type.
    pub fn subcategory_options(&self) -> Vec<Subcategory> {
        let milk_type = self.form.with(|f| f.milk_type.clone().unwrap_or_default());
        self.subcategories
            .with(|all| for_category(all, &milk_type).cloned().collect())
    }

    pub fn set_milk_type(&self, value: String) {
        self.form.update(|f| {
            if f.milk_type.as_deref() != Some(value.as_str()) {
                f.subcategory = None;
            }
            f.milk_type = Some(value).filter(|v| !v.is_empty());
        });
    }

    pub fn error_for(&self, field: &str) -> Option<String> {
        self.field_error.with(|e| {
            e.as_ref()
                .filter(|(f, _)| f == field)
                .map(|(_, message)| message.clone())
        })
    }

    pub fn save_command(&self, client: ApiClient, on_saved: Callback<()>) {
        let dto = self.form.get_untracked().normalized();
        if let Err(e) = dto.validate() {
            self.show_error(e);
            return;
        }

        let this = *self;
        this.error.set(None);
        this.field_error.set(None);
        this.is_saving.set(true);
        spawn_local(async move {
            let id = this.id.get_value();
            let result = save_customer(&client, id.as_deref(), &dto).await;
            this.is_saving.set(false);
            match result {
                Ok(()) => {
                    log::info!("customer {} saved", dto.name);
                    on_saved.run(());
                }
                Err(e) => this.show_error(e),
            }
        });
    }

    fn show_error(&self, e: ApiError) {
        match e.field() {
            Some(field) => {
                self.field_error
                    .set(Some((field.to_string(), e.user_message())));
                self.error.set(None);
            }
            None => {
                self.field_error.set(None);
                self.error.set(Some(e.user_message()));
            }
        }
    }
}
