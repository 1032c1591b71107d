pub mod aggregate;

pub use aggregate::{for_category, Subcategory, SubcategoryDto};
