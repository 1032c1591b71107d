use crate::domain::a007_invoice::api::{add_payment, fetch_invoice};
use crate::shared::config::AppConfig;
use crate::shared::date_utils::current_month_year;
use crate::shared::format::format_currency;
use crate::shared::http::ApiClient;
use contracts::domain::a007_invoice::payment_form::transaction_id_hint;
use contracts::domain::a007_invoice::{Invoice, PaymentForm, PaymentMethod, QuickAmount};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct PaymentViewModel {
    pub invoice: RwSignal<Option<Invoice>>,
    pub form: RwSignal<PaymentForm>,
    pub error: RwSignal<Option<String>>,
    pub success: RwSignal<Option<String>>,
    pub is_submitting: RwSignal<bool>,
}

impl PaymentViewModel {
    pub fn new() -> Self {
        Self {
            invoice: RwSignal::new(None),
            form: RwSignal::new(PaymentForm::default()),
            error: RwSignal::new(None),
            success: RwSignal::new(None),
            is_submitting: RwSignal::new(false),
        }
    }

    pub fn load(&self, client: ApiClient, id: String) {
        let this = *self;
        spawn_local(async move {
            match fetch_invoice(&client, &id).await {
                Ok(invoice) => this.invoice.set(Some(invoice)),
                Err(e) => this
                    .error
                    .set(Some(format!("Failed to load: {}", e.user_message()))),
            }
        });
    }

    pub fn due_amount(&self) -> f64 {
        self.invoice
            .with(|i| i.as_ref().map(|i| i.due_amount).unwrap_or(0.0))
    }

    pub fn apply_quick_amount(&self, preset: QuickAmount) {
        let due = self.due_amount();
        self.form.update(|f| f.apply_quick_amount(preset, due));
    }

    pub fn set_method(&self, method: PaymentMethod) {
        self.form.update(|f| f.set_method(method));
    }

    pub fn can_submit(&self) -> bool {
        !self.is_submitting.get()
            && self.success.with(|s| s.is_none())
            && self.form.with(|f| f.is_form_valid())
    }

    /// Shown when the amount exceeds the due balance; the payment still goes
    /// through.
    pub fn advance_notice(&self) -> Option<String> {
        let due = self.due_amount();
        self.form.with(|f| f.advance_amount(due)).map(|extra| {
            format!(
                "{} exceeds the due amount and will be saved as advance for the next invoice.",
                format_currency(extra)
            )
        })
    }

    pub fn remaining_after(&self) -> f64 {
        let due = self.due_amount();
        self.form.with(|f| f.remaining_after(due))
    }

    pub fn transaction_hint(&self) -> String {
        let (_, year) = current_month_year();
        self.invoice.with(|i| {
            transaction_id_hint(year, i.as_ref().and_then(|i| i.customer.customer_no()))
        })
    }

    /// Posts the payment and, after a short pause on the success banner,
    /// calls `on_done`.
    pub fn submit_command(&self, client: ApiClient, on_done: Callback<()>) {
        let request = match self.form.with_untracked(|f| f.to_request()) {
            Ok(r) => r,
            Err(e) => {
                self.error.set(Some(e.user_message()));
                return;
            }
        };
        let Some(invoice_id) = self.invoice.with_untracked(|i| i.as_ref().map(|i| i.id.clone()))
        else {
            return;
        };

        let this = *self;
        this.error.set(None);
        this.is_submitting.set(true);
        spawn_local(async move {
            match add_payment(&client, &invoice_id, &request).await {
                Ok(()) => {
                    log::info!(
                        "payment of {} ({}) recorded for invoice {}",
                        request.amount,
                        request.payment_method.as_str(),
                        invoice_id
                    );
                    this.is_submitting.set(false);
                    this.success.set(Some(format!(
                        "Payment of {} recorded",
                        format_currency(request.amount)
                    )));
                    gloo_timers::future::TimeoutFuture::new(AppConfig::PAYMENT_REDIRECT_DELAY_MS)
                        .await;
                    on_done.run(());
                }
                Err(e) => {
                    this.is_submitting.set(false);
                    this.error.set(Some(e.user_message()));
                }
            }
        });
    }
}

impl Default for PaymentViewModel {
    fn default() -> Self {
        Self::new()
    }
}
