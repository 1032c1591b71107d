pub mod p900_due_customers;
