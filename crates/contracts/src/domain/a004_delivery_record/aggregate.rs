use crate::domain::common::{CustomerRef, EntityRef, NamedRef};
use crate::shared::envelope::ItemKey;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryTime {
    #[default]
    Morning,
    Evening,
}

impl DeliveryTime {
    pub fn label(&self) -> &'static str {
        match self {
            DeliveryTime::Morning => "Morning",
            DeliveryTime::Evening => "Evening",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilkItem {
    #[serde(default)]
    pub milk_type: EntityRef<NamedRef>,
    #[serde(default)]
    pub subcategory: Option<EntityRef<NamedRef>>,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub price_per_unit: f64,
    /// `quantity × price_per_unit`, recomputed on every edit
    #[serde(default)]
    pub total_price: f64,
}

impl MilkItem {
    pub fn label(&self) -> String {
        match &self.subcategory {
            Some(sub) => format!("{} / {}", self.milk_type.name(), sub.name()),
            None => self.milk_type.name().to_string(),
        }
    }
}

/// One delivery window of a day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Delivery {
    pub time: DeliveryTime,
    #[serde(default)]
    pub milk_items: Vec<MilkItem>,
    #[serde(default)]
    pub total_quantity: f64,
    #[serde(default)]
    pub total_price: f64,
}

/// Daily delivery record of one customer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    #[serde(rename = "_id")]
    pub id: String,
    pub date: String,
    #[serde(default)]
    pub customer: EntityRef<CustomerRef>,
    #[serde(default)]
    pub delivery_schedule: Vec<Delivery>,
    #[serde(default)]
    pub total_daily_quantity: f64,
    #[serde(default)]
    pub total_daily_price: f64,
}

impl ItemKey for Record {
    const KEY: &'static str = "record";
}

impl Record {
    pub fn delivery(&self, time: DeliveryTime) -> Option<&Delivery> {
        self.delivery_schedule.iter().find(|d| d.time == time)
    }
}

/// Partial update sent by the edit view: only the fields an edit can touch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPatch {
    pub delivery_schedule: Vec<Delivery>,
    pub total_daily_quantity: f64,
    pub total_daily_price: f64,
}

impl From<&Record> for RecordPatch {
    fn from(r: &Record) -> Self {
        Self {
            delivery_schedule: r.delivery_schedule.clone(),
            total_daily_quantity: r.total_daily_quantity,
            total_daily_price: r.total_daily_price,
        }
    }
}

/// Query for `/records/daily` and `/records/summary`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordQuery {
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSummary {
    #[serde(default)]
    pub total_records: usize,
    #[serde(default)]
    pub total_quantity: f64,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub morning_quantity: f64,
    #[serde(default)]
    pub evening_quantity: f64,
}

impl ItemKey for RecordSummary {
    const KEY: &'static str = "summary";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_serializes_only_mutable_fields() {
        let record = Record {
            id: "r1".into(),
            date: "2025-03-04".into(),
            total_daily_quantity: 2.0,
            total_daily_price: 120.0,
            ..Default::default()
        };
        let json = serde_json::to_value(RecordPatch::from(&record)).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 3);
        assert!(keys.contains(&"deliverySchedule"));
        assert!(keys.contains(&"totalDailyQuantity"));
        assert!(keys.contains(&"totalDailyPrice"));
    }

    #[test]
    fn decodes_populated_record() {
        let json = r#"{
            "_id": "r1", "date": "2025-03-04T00:00:00.000Z",
            "customer": {"_id": "c1", "name": "Asha"},
            "deliverySchedule": [{
                "time": "morning",
                "milkItems": [{"milkType": {"_id": "m1", "name": "Cow"}, "subcategory": "s1",
                               "quantity": 1.5, "pricePerUnit": 60, "totalPrice": 90}],
                "totalQuantity": 1.5, "totalPrice": 90
            }],
            "totalDailyQuantity": 1.5, "totalDailyPrice": 90
        }"#;
        let r: Record = serde_json::from_str(json).unwrap();
        let morning = r.delivery(DeliveryTime::Morning).unwrap();
        assert_eq!(morning.milk_items[0].label(), "Cow / s1");
        assert!(r.delivery(DeliveryTime::Evening).is_none());
    }
}
