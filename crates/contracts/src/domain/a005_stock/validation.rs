//! Advisory stock-out check against the cached summary.
//!
//! The server stays authoritative: a request that passes here can still be
//! rejected, and that rejection is shown like any other server error.

use super::aggregate::{StockEntryType, StockSummary};
use crate::domain::common::format_quantity;
use crate::shared::api_error::ApiError;

/// Current stock of `category_id`, or 0 when the summary has no row for it.
pub fn available_for(summaries: &[StockSummary], category_id: &str) -> f64 {
    summaries
        .iter()
        .find(|s| s.category.id() == category_id)
        .map(|s| s.current_stock)
        .unwrap_or(0.0)
}

/// Rejects an outgoing quantity above what is available. Taking exactly the
/// available amount is allowed. Incoming entries always pass.
pub fn validate_stock_out(
    entry_type: StockEntryType,
    quantity: f64,
    available: f64,
) -> Result<(), ApiError> {
    if entry_type == StockEntryType::Out && quantity > available {
        return Err(ApiError::validation(
            "quantity",
            format!(
                "Insufficient stock! Available: {} units, Requested: {} units",
                format_quantity(available),
                format_quantity(quantity)
            ),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::{EntityRef, NamedRef};

    fn summary(id: &str, stock: f64) -> StockSummary {
        StockSummary {
            category: EntityRef::Populated(NamedRef {
                id: id.into(),
                name: "Cow".into(),
            }),
            total_in: stock,
            total_out: 0.0,
            current_stock: stock,
        }
    }

    #[test]
    fn exact_available_amount_is_valid() {
        assert!(validate_stock_out(StockEntryType::Out, 25.0, 25.0).is_ok());
    }

    #[test]
    fn over_available_reports_both_numbers() {
        let err = validate_stock_out(StockEntryType::Out, 30.0, 25.5).unwrap_err();
        assert_eq!(
            err.user_message(),
            "Insufficient stock! Available: 25.5 units, Requested: 30 units"
        );
        assert_eq!(err.field(), Some("quantity"));
    }

    #[test]
    fn invalid_iff_quantity_exceeds_available() {
        for available in [0.0, 1.0, 12.5, 100.0] {
            for q in [0.5, 1.0, 12.5, 12.75, 100.0, 150.0] {
                let res = validate_stock_out(StockEntryType::Out, q, available);
                assert_eq!(res.is_err(), q > available, "q={q} available={available}");
            }
        }
    }

    #[test]
    fn incoming_entries_skip_the_check() {
        assert!(validate_stock_out(StockEntryType::In, 1000.0, 0.0).is_ok());
    }

    #[test]
    fn unknown_category_has_nothing_available() {
        let rows = vec![summary("m1", 40.0)];
        assert_eq!(available_for(&rows, "m1"), 40.0);
        assert_eq!(available_for(&rows, "m9"), 0.0);
    }
}
