pub mod a001_customer;
pub mod a002_milk_category;
pub mod a003_milk_subcategory;
pub mod a004_delivery_record;
pub mod a005_stock;
pub mod a006_holiday;
pub mod a007_invoice;
pub mod common;
