pub mod dto;

pub use dto::{DueCustomer, DueCustomersQuery};
