//! Common types shared by all domain modules

pub mod entity_ref;
pub mod values;

pub use entity_ref::{CustomerRef, EntityRef, Identified, NamedRef};
pub use values::{date_part, format_quantity, month_name, parse_date, round2};
