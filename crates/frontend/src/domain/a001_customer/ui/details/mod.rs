//! Customer create / edit form.
//!
//! - view_model.rs: form state, catalog lookups and the save command
//! - view.rs: the component

mod view;
mod view_model;

pub use view::CustomerDetails;
pub use view_model::CustomerDetailsViewModel;
