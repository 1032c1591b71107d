use crate::domain::common::{EntityRef, Identified, NamedRef};
use crate::shared::api_error::ApiError;
use crate::shared::envelope::ItemKey;
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

/// Delivery customer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub customer_no: Option<String>,
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub milk_type: Option<EntityRef<NamedRef>>,
    #[serde(default)]
    pub subcategory: Option<EntityRef<NamedRef>>,
    #[serde(default)]
    pub morning_quantity: f64,
    #[serde(default)]
    pub evening_quantity: f64,
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Overpayment banked by the server; read-only on the client
    #[serde(default)]
    pub advance_amount: f64,
}

impl ItemKey for Customer {
    const KEY: &'static str = "customer";
}

fn default_true() -> bool {
    true
}

impl Identified for Customer {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Customer {
    pub fn daily_quantity(&self) -> f64 {
        self.morning_quantity + self.evening_quantity
    }

    /// `C012 · Ravi Kumar`, or just the name when no number is assigned.
    pub fn display_name(&self) -> String {
        match self.customer_no.as_deref().filter(|n| !n.is_empty()) {
            Some(no) => format!("{} · {}", no, self.name),
            None => self.name.clone(),
        }
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Body of `POST /customers` and `PUT /customers/:id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_no: Option<String>,
    pub name: String,
    pub phone: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milk_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    pub morning_quantity: f64,
    pub evening_quantity: f64,
    pub is_active: bool,
}

impl Default for CustomerDto {
    fn default() -> Self {
        Self {
            customer_no: None,
            name: String::new(),
            phone: String::new(),
            address: String::new(),
            milk_type: None,
            subcategory: None,
            morning_quantity: 0.0,
            evening_quantity: 0.0,
            is_active: true,
        }
    }
}

impl From<&Customer> for CustomerDto {
    fn from(c: &Customer) -> Self {
        Self {
            customer_no: c.customer_no.clone(),
            name: c.name.clone(),
            phone: c.phone.clone(),
            address: c.address.clone(),
            milk_type: c.milk_type.as_ref().map(|r| r.id().to_string()),
            subcategory: c.subcategory.as_ref().map(|r| r.id().to_string()),
            morning_quantity: c.morning_quantity,
            evening_quantity: c.evening_quantity,
            is_active: c.is_active,
        }
    }
}

impl CustomerDto {
    /// Trims text fields and drops empty optional references.
    pub fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self.phone = self.phone.trim().to_string();
        self.address = self.address.trim().to_string();
        self.customer_no = self
            .customer_no
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        self.milk_type = self.milk_type.filter(|s| !s.is_empty());
        self.subcategory = self.subcategory.filter(|s| !s.is_empty());
        self
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::validation("name", "Name is required"));
        }
        if !is_valid_phone(self.phone.trim()) {
            return Err(ApiError::validation(
                "phone",
                "Enter a valid 10-digit mobile number starting with 6-9",
            ));
        }
        for (field, qty) in [
            ("morningQuantity", self.morning_quantity),
            ("eveningQuantity", self.evening_quantity),
        ] {
            if !qty.is_finite() || qty < 0.0 {
                return Err(ApiError::validation(field, "Quantity cannot be negative"));
            }
        }
        Ok(())
    }
}

/// Indian mobile number: exactly ten digits, first digit 6-9.
pub fn is_valid_phone(phone: &str) -> bool {
    phone.len() == 10
        && phone.chars().all(|c| c.is_ascii_digit())
        && matches!(phone.as_bytes()[0], b'6'..=b'9')
}

/// Query for `GET /customers`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerQuery {
    pub page: usize,
    pub limit: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl CustomerQuery {
    pub fn new(page: usize, limit: usize, search: &str) -> Self {
        let term = search.trim();
        Self {
            page: page.max(1),
            limit,
            search: (!term.is_empty()).then(|| term.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> CustomerDto {
        CustomerDto {
            name: "Asha".into(),
            phone: "9876543210".into(),
            morning_quantity: 1.0,
            ..Default::default()
        }
    }

    #[test]
    fn phone_rules() {
        assert!(is_valid_phone("9876543210"));
        assert!(is_valid_phone("6000000000"));
        assert!(!is_valid_phone("5876543210"));
        assert!(!is_valid_phone("987654321"));
        assert!(!is_valid_phone("98765432100"));
        assert!(!is_valid_phone("98765x3210"));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn validate_reports_field() {
        assert!(dto().validate().is_ok());

        let mut d = dto();
        d.name = "  ".into();
        assert_eq!(d.validate().unwrap_err().field(), Some("name"));

        let mut d = dto();
        d.phone = "12345".into();
        assert_eq!(d.validate().unwrap_err().field(), Some("phone"));

        let mut d = dto();
        d.evening_quantity = -1.0;
        assert_eq!(d.validate().unwrap_err().field(), Some("eveningQuantity"));
    }

    #[test]
    fn normalized_drops_blank_refs() {
        let d = CustomerDto {
            customer_no: Some("  ".into()),
            milk_type: Some(String::new()),
            name: " Asha ".into(),
            ..Default::default()
        }
        .normalized();
        assert_eq!(d.customer_no, None);
        assert_eq!(d.milk_type, None);
        assert_eq!(d.name, "Asha");
        let json = serde_json::to_value(&d).unwrap();
        assert!(json.get("milkType").is_none());
    }

    #[test]
    fn decodes_customer_with_populated_milk_type() {
        let c: Customer = serde_json::from_str(
            r#"{"_id":"c1","customerNo":"C001","name":"Asha","phone":"9876543210",
                "milkType":{"_id":"m1","name":"Cow"},"morningQuantity":1,"eveningQuantity":0.5}"#,
        )
        .unwrap();
        assert!(c.is_active);
        assert_eq!(c.daily_quantity(), 1.5);
        assert_eq!(c.display_name(), "C001 · Asha");
        assert_eq!(CustomerDto::from(&c).milk_type.as_deref(), Some("m1"));
    }
}
