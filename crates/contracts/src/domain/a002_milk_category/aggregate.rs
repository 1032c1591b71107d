use crate::domain::common::Identified;
use crate::shared::api_error::ApiError;
use serde::{Deserialize, Serialize};

/// Milk type (cow, buffalo, ...) with its base price per liter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub price_per_liter: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl Identified for Category {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub name: String,
    pub price_per_liter: f64,
    pub description: String,
    pub is_active: bool,
}

impl Default for CategoryDto {
    fn default() -> Self {
        Self {
            name: String::new(),
            price_per_liter: 0.0,
            description: String::new(),
            is_active: true,
        }
    }
}

impl From<&Category> for CategoryDto {
    fn from(c: &Category) -> Self {
        Self {
            name: c.name.clone(),
            price_per_liter: c.price_per_liter,
            description: c.description.clone(),
            is_active: c.is_active,
        }
    }
}

impl CategoryDto {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::validation("name", "Name is required"));
        }
        if !self.price_per_liter.is_finite() || self.price_per_liter <= 0.0 {
            return Err(ApiError::validation(
                "pricePerLiter",
                "Price per liter must be greater than 0",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_must_be_positive() {
        let mut dto = CategoryDto {
            name: "Cow".into(),
            price_per_liter: 60.0,
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
        dto.price_per_liter = 0.0;
        assert_eq!(dto.validate().unwrap_err().field(), Some("pricePerLiter"));
        dto.price_per_liter = f64::NAN;
        assert!(dto.validate().is_err());
    }

    #[test]
    fn decodes_minimal_category() {
        let c: Category = serde_json::from_str(r#"{"_id":"m1","name":"Buffalo"}"#).unwrap();
        assert!(c.is_active);
        assert_eq!(CategoryDto::from(&c).name, "Buffalo");
    }
}
