pub mod aggregate;
pub mod recompute;

pub use aggregate::{
    Delivery, DeliveryTime, MilkItem, Record, RecordPatch, RecordQuery, RecordSummary,
};
pub use recompute::{recompute_record, RecordEdit};
