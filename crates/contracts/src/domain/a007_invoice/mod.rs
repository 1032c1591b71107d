pub mod aggregate;
pub mod generation;
pub mod list_state;
pub mod payment_form;

pub use aggregate::{
    BillingPeriod, Invoice, InvoiceLineItem, InvoiceStatus, Payment, PaymentMethod,
    PaymentRequest,
};
pub use generation::{BatchGenerateResult, GenerateInvoiceRequest};
pub use list_state::{
    InvoiceListState, InvoiceQuery, InvoiceScope, InvoiceStats, ManualFilters, QuickFilter,
};
pub use payment_form::{PaymentForm, QuickAmount};
