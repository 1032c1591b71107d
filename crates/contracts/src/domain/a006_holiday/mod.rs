pub mod aggregate;

pub use aggregate::{Holiday, HolidayDto};
