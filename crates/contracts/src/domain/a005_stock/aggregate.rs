use crate::domain::common::{EntityRef, Identified, NamedRef};
use crate::shared::api_error::ApiError;
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockEntryType {
    #[default]
    In,
    Out,
}

impl StockEntryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockEntryType::In => "in",
            StockEntryType::Out => "out",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "in" => Some(StockEntryType::In),
            "out" => Some(StockEntryType::Out),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockEntryType::In => "Stock In",
            StockEntryType::Out => "Stock Out",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockEntry {
    #[serde(rename = "_id")]
    pub id: String,
    pub entry_type: StockEntryType,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub category: EntityRef<NamedRef>,
    #[serde(default)]
    pub entry_date: String,
    #[serde(default)]
    pub notes: String,
}

impl Identified for StockEntry {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Row of `GET /stock/summary`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockSummary {
    #[serde(default)]
    pub category: EntityRef<NamedRef>,
    #[serde(default)]
    pub total_in: f64,
    #[serde(default)]
    pub total_out: f64,
    #[serde(default)]
    pub current_stock: f64,
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockEntryDto {
    pub entry_type: StockEntryType,
    pub quantity: f64,
    pub category: String,
    pub entry_date: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub notes: String,
}

impl StockEntryDto {
    /// Shape checks only; the availability check lives in `validation`.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.category.is_empty() {
            return Err(ApiError::validation("category", "Select a category"));
        }
        if !self.quantity.is_finite() || self.quantity <= 0.0 {
            return Err(ApiError::validation(
                "quantity",
                "Quantity must be greater than 0",
            ));
        }
        if crate::domain::common::parse_date(&self.entry_date).is_none() {
            return Err(ApiError::validation("entryDate", "Select a valid date"));
        }
        Ok(())
    }
}

/// Filters for `GET /stock` and `GET /stock/summary`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_type: Option<StockEntryType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_omits_unset_filters() {
        let q = StockQuery {
            entry_type: Some(StockEntryType::Out),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&q).unwrap(), r#"{"entryType":"out"}"#);
    }

    #[test]
    fn dto_shape_checks() {
        let mut dto = StockEntryDto {
            entry_type: StockEntryType::In,
            quantity: 40.0,
            category: "m1".into(),
            entry_date: "2025-03-04".into(),
            notes: String::new(),
        };
        assert!(dto.validate().is_ok());
        dto.entry_date = "yesterday".into();
        assert_eq!(dto.validate().unwrap_err().field(), Some("entryDate"));
        dto.quantity = 0.0;
        assert_eq!(dto.validate().unwrap_err().field(), Some("quantity"));
    }
}
