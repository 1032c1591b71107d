use crate::shared::api_error::ApiError;
use crate::shared::envelope::ItemKey;
use serde::{Deserialize, Serialize};

/// Business profile printed on invoices (`GET/PUT /config/milkman`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilkmanConfig {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub upi_id: String,
    #[serde(default = "default_due_days")]
    pub invoice_due_days: u32,
}

impl ItemKey for MilkmanConfig {
    const KEY: &'static str = "config";
}

fn default_due_days() -> u32 {
    7
}

impl Default for MilkmanConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            phone: String::new(),
            address: String::new(),
            upi_id: String::new(),
            invoice_due_days: default_due_days(),
        }
    }
}

impl MilkmanConfig {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::validation("name", "Business name is required"));
        }
        let upi = self.upi_id.trim();
        if !upi.is_empty() && !upi.contains('@') {
            return Err(ApiError::validation(
                "upiId",
                "UPI ID should look like name@bank",
            ));
        }
        if !(1..=90).contains(&self.invoice_due_days) {
            return Err(ApiError::validation(
                "invoiceDueDays",
                "Due days must be between 1 and 90",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_fields() {
        let c: MilkmanConfig = serde_json::from_str(r#"{"name":"Gokul Dairy"}"#).unwrap();
        assert_eq!(c.invoice_due_days, 7);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn upi_needs_handle() {
        let c = MilkmanConfig {
            name: "Gokul Dairy".into(),
            upi_id: "gokul".into(),
            ..Default::default()
        };
        assert_eq!(c.validate().unwrap_err().field(), Some("upiId"));
    }
}
