pub mod aggregate;
pub mod validation;

pub use aggregate::{StockEntry, StockEntryDto, StockEntryType, StockQuery, StockSummary};
pub use validation::{available_for, validate_stock_out};
