use crate::shared::envelope::ItemKey;
use serde::{Deserialize, Serialize};

/// Body of `POST /invoices/generate/customer/:id` and `/invoices/generate/batch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateInvoiceRequest {
    pub month: u32,
    pub year: i32,
}

impl GenerateInvoiceRequest {
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=12).contains(&self.month) {
            return Err("Select a month".into());
        }
        if !(2000..=2100).contains(&self.year) {
            return Err("Select a valid year".into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchFailure {
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default, alias = "error")]
    pub message: String,
}

/// Outcome of a batch generation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchGenerateResult {
    #[serde(default)]
    pub generated: usize,
    #[serde(default)]
    pub skipped: usize,
    #[serde(default)]
    pub failed: usize,
    #[serde(default)]
    pub errors: Vec<BatchFailure>,
}

impl ItemKey for BatchGenerateResult {
    const KEY: &'static str = "result";
}

impl BatchGenerateResult {
    pub fn summary(&self) -> String {
        format!(
            "Generated {} invoice(s), skipped {}, failed {}",
            self.generated, self.skipped, self.failed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_month() {
        assert!(GenerateInvoiceRequest { month: 13, year: 2025 }.validate().is_err());
        assert!(GenerateInvoiceRequest { month: 3, year: 2025 }.validate().is_ok());
    }

    #[test]
    fn batch_result_tolerates_missing_fields() {
        let r: BatchGenerateResult =
            serde_json::from_str(r#"{"generated":12,"errors":[{"customerId":"c9","error":"No records"}]}"#)
                .unwrap();
        assert_eq!(r.summary(), "Generated 12 invoice(s), skipped 0, failed 0");
        assert_eq!(r.errors[0].message, "No records");
    }
}
