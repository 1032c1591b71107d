//! Add-payment page.
//!
//! - view_model.rs: invoice, form and submit command
//! - view.rs: the component

mod view;
mod view_model;

pub use view::PaymentPage;
pub use view_model::PaymentViewModel;
