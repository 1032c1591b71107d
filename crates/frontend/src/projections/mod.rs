pub mod p900_due_customers;

pub use p900_due_customers::ui::list::DueCustomersList;
