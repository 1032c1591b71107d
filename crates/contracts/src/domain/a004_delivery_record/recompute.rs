//! Cascading recompute for record corrections.
//!
//! An edit to one milk item changes three levels at once: the item total,
//! the owning delivery's totals and the record's daily totals. The reducer
//! returns a record in which all three agree, so a view applying it in a
//! single state update never renders stale aggregates.

use super::aggregate::{Delivery, DeliveryTime, Record};
use crate::domain::common::round2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RecordEdit {
    Quantity {
        time: DeliveryTime,
        item: usize,
        value: f64,
    },
    PricePerUnit {
        time: DeliveryTime,
        item: usize,
        value: f64,
    },
}

impl RecordEdit {
    /// Parses raw input; anything unparsable, negative or non-finite becomes 0.
    pub fn sanitize(raw: &str) -> f64 {
        raw.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v >= 0.0)
            .unwrap_or(0.0)
    }
}

pub fn recompute_record(mut record: Record, edit: &RecordEdit) -> Record {
    let (time, index) = match *edit {
        RecordEdit::Quantity { time, item, .. } | RecordEdit::PricePerUnit { time, item, .. } => {
            (time, item)
        }
    };

    let target = record
        .delivery_schedule
        .iter_mut()
        .find(|d| d.time == time)
        .and_then(|d| d.milk_items.get_mut(index));

    if let Some(item) = target {
        match *edit {
            RecordEdit::Quantity { value, .. } => item.quantity = clamp(value),
            RecordEdit::PricePerUnit { value, .. } => item.price_per_unit = clamp(value),
        }
    }

    recompute_totals(record)
}

/// Recomputes every derived total from the item quantities and prices.
pub fn recompute_totals(mut record: Record) -> Record {
    for delivery in &mut record.delivery_schedule {
        recompute_delivery(delivery);
    }
    record.total_daily_quantity = round2(
        record
            .delivery_schedule
            .iter()
            .map(|d| d.total_quantity)
            .sum(),
    );
    record.total_daily_price = round2(
        record
            .delivery_schedule
            .iter()
            .map(|d| d.total_price)
            .sum(),
    );
    record
}

fn recompute_delivery(delivery: &mut Delivery) {
    for item in &mut delivery.milk_items {
        item.total_price = round2(item.quantity * item.price_per_unit);
    }
    delivery.total_quantity = round2(delivery.milk_items.iter().map(|i| i.quantity).sum());
    delivery.total_price = round2(delivery.milk_items.iter().map(|i| i.total_price).sum());
}

fn clamp(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_delivery_record::aggregate::MilkItem;

    fn item(qty: f64, price: f64) -> MilkItem {
        MilkItem {
            quantity: qty,
            price_per_unit: price,
            total_price: qty * price,
            ..Default::default()
        }
    }

    fn record() -> Record {
        let morning = Delivery {
            time: DeliveryTime::Morning,
            milk_items: vec![item(1.0, 60.0), item(0.5, 50.0)],
            total_quantity: 1.5,
            total_price: 85.0,
        };
        let evening = Delivery {
            time: DeliveryTime::Evening,
            milk_items: vec![item(1.0, 60.0)],
            total_quantity: 1.0,
            total_price: 60.0,
        };
        Record {
            id: "r1".into(),
            date: "2025-03-04".into(),
            delivery_schedule: vec![morning, evening],
            total_daily_quantity: 2.5,
            total_daily_price: 145.0,
            ..Default::default()
        }
    }

    fn assert_consistent(r: &Record) {
        let mut day_qty = 0.0;
        let mut day_price = 0.0;
        for d in &r.delivery_schedule {
            let qty: f64 = d.milk_items.iter().map(|i| i.quantity).sum();
            let price: f64 = d.milk_items.iter().map(|i| i.quantity * i.price_per_unit).sum();
            assert_eq!(d.total_quantity, round2(qty));
            assert_eq!(d.total_price, round2(price));
            for i in &d.milk_items {
                assert_eq!(i.total_price, round2(i.quantity * i.price_per_unit));
            }
            day_qty += d.total_quantity;
            day_price += d.total_price;
        }
        assert_eq!(r.total_daily_quantity, round2(day_qty));
        assert_eq!(r.total_daily_price, round2(day_price));
    }

    #[test]
    fn quantity_edit_cascades_to_delivery_and_day() {
        let r = recompute_record(
            record(),
            &RecordEdit::Quantity {
                time: DeliveryTime::Morning,
                item: 0,
                value: 2.0,
            },
        );
        let morning = r.delivery(DeliveryTime::Morning).unwrap();
        assert_eq!(morning.milk_items[0].total_price, 120.0);
        assert_eq!(morning.total_quantity, 2.5);
        assert_eq!(morning.total_price, 145.0);
        assert_eq!(r.total_daily_quantity, 3.5);
        assert_eq!(r.total_daily_price, 205.0);
    }

    #[test]
    fn totals_hold_after_any_sequence_of_edits() {
        let edits = [
            RecordEdit::Quantity { time: DeliveryTime::Evening, item: 0, value: 1.5 },
            RecordEdit::PricePerUnit { time: DeliveryTime::Morning, item: 1, value: 55.0 },
            RecordEdit::Quantity { time: DeliveryTime::Morning, item: 1, value: 0.75 },
            RecordEdit::PricePerUnit { time: DeliveryTime::Evening, item: 0, value: 62.5 },
            RecordEdit::Quantity { time: DeliveryTime::Morning, item: 0, value: 0.0 },
        ];
        let mut r = record();
        for edit in &edits {
            r = recompute_record(r, edit);
            assert_consistent(&r);
        }
        assert_eq!(r.total_daily_quantity, 2.25);
    }

    #[test]
    fn edit_to_missing_item_only_recomputes() {
        let before = record();
        let after = recompute_record(
            before.clone(),
            &RecordEdit::Quantity {
                time: DeliveryTime::Evening,
                item: 7,
                value: 9.0,
            },
        );
        assert_eq!(after, before);
    }

    #[test]
    fn negative_input_is_clamped() {
        assert_eq!(RecordEdit::sanitize("-3"), 0.0);
        assert_eq!(RecordEdit::sanitize("abc"), 0.0);
        assert_eq!(RecordEdit::sanitize(" 1.25 "), 1.25);
        let r = recompute_record(
            record(),
            &RecordEdit::PricePerUnit {
                time: DeliveryTime::Morning,
                item: 0,
                value: -10.0,
            },
        );
        assert_eq!(r.delivery(DeliveryTime::Morning).unwrap().milk_items[0].total_price, 0.0);
    }
}
