use crate::domain::common::{date_part, CustomerRef, EntityRef};
use crate::shared::envelope::ItemKey;
use serde::{Deserialize, Serialize};

// ============================================================================
// Status
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    #[default]
    Pending,
    PartiallyPaid,
    Paid,
    Overdue,
    /// Any status string this client does not know yet.
    #[serde(other)]
    Unknown,
}

impl InvoiceStatus {
    pub const ALL: [InvoiceStatus; 4] = [
        InvoiceStatus::Pending,
        InvoiceStatus::PartiallyPaid,
        InvoiceStatus::Paid,
        InvoiceStatus::Overdue,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::PartiallyPaid => "partially_paid",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Overdue => "overdue",
            InvoiceStatus::Unknown => "unknown",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }

    pub fn label(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "Pending",
            InvoiceStatus::PartiallyPaid => "Partially paid",
            InvoiceStatus::Paid => "Paid",
            InvoiceStatus::Overdue => "Overdue",
            InvoiceStatus::Unknown => "Unknown",
        }
    }

    /// Badge variant name understood by the UI `Badge` component.
    pub fn badge_variant(&self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "success",
            InvoiceStatus::PartiallyPaid => "warning",
            InvoiceStatus::Pending => "primary",
            InvoiceStatus::Overdue => "error",
            InvoiceStatus::Unknown => "neutral",
        }
    }
}

// ============================================================================
// Payment
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Cash,
    Online,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Online => "online",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Online => "Online",
        }
    }
}

/// Recorded payment. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub amount: f64,
    #[serde(default)]
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub payment_date: Option<String>,
}

/// Body of `POST /invoices/:id/payment`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub amount: f64,
    pub payment_method: PaymentMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
}

// ============================================================================
// Invoice
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingPeriod {
    pub start_date: String,
    pub end_date: String,
}

/// Per-day delivery snapshot frozen into the invoice at generation time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceLineItem {
    pub date: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub price_per_unit: Option<f64>,
    #[serde(default)]
    pub amount: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub invoice_number: String,
    #[serde(default)]
    pub customer: EntityRef<CustomerRef>,
    #[serde(default)]
    pub billing_period: Option<BillingPeriod>,
    #[serde(default)]
    pub items: Vec<InvoiceLineItem>,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub amount_paid: f64,
    /// Authoritative due balance as computed by the server.
    #[serde(default)]
    pub due_amount: f64,
    #[serde(default)]
    pub status: InvoiceStatus,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub payments: Option<Vec<Payment>>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl ItemKey for Invoice {
    const KEY: &'static str = "invoice";
}

impl Invoice {
    pub fn customer_name(&self) -> &str {
        self.customer.name()
    }

    pub fn has_payments(&self) -> bool {
        self.payments.as_ref().is_some_and(|p| !p.is_empty())
    }

    /// Delete is offered only for unpaid invoices that never received money.
    pub fn can_delete(&self) -> bool {
        matches!(self.status, InvoiceStatus::Pending | InvoiceStatus::Overdue)
            && !self.has_payments()
    }

    /// Payments can be added while something is still owed.
    pub fn accepts_payment(&self) -> bool {
        self.status != InvoiceStatus::Paid && self.due_amount > 0.0
    }

    /// Billing period bounds as `YYYY-MM-DD`.
    pub fn period_bounds(&self) -> Option<(&str, &str)> {
        self.billing_period
            .as_ref()
            .map(|p| (date_part(&p.start_date), date_part(&p.end_date)))
    }

    pub fn pdf_file_name(&self) -> String {
        if self.invoice_number.is_empty() {
            format!("invoice-{}.pdf", self.id)
        } else {
            format!("{}.pdf", self.invoice_number)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invoice(status: InvoiceStatus, payments: Option<Vec<Payment>>) -> Invoice {
        Invoice {
            id: "i1".into(),
            invoice_number: "RD-2025-03-001".into(),
            status,
            payments,
            ..Default::default()
        }
    }

    fn cash(amount: f64) -> Payment {
        Payment {
            amount,
            payment_method: PaymentMethod::Cash,
            transaction_id: None,
            notes: None,
            payment_date: None,
        }
    }

    #[test]
    fn delete_allowed_only_for_unpaid_without_payments() {
        assert!(invoice(InvoiceStatus::Pending, None).can_delete());
        assert!(invoice(InvoiceStatus::Overdue, Some(vec![])).can_delete());
        assert!(!invoice(InvoiceStatus::Paid, None).can_delete());
        assert!(!invoice(InvoiceStatus::PartiallyPaid, None).can_delete());
    }

    #[test]
    fn any_recorded_payment_blocks_delete() {
        assert!(!invoice(InvoiceStatus::Pending, Some(vec![cash(10.0)])).can_delete());
        assert!(!invoice(InvoiceStatus::Overdue, Some(vec![cash(0.5)])).can_delete());
    }

    #[test]
    fn decodes_server_invoice() {
        let json = r#"{
            "_id": "66a",
            "invoiceNumber": "RD-2025-03-014",
            "customer": {"_id": "c1", "name": "Asha", "customerNo": "C014"},
            "billingPeriod": {"startDate": "2025-03-01T00:00:00.000Z", "endDate": "2025-03-31T00:00:00.000Z"},
            "items": [{"date": "2025-03-01", "quantity": 1.5, "amount": 90}],
            "totalAmount": 2790, "amountPaid": 1000, "dueAmount": 1790,
            "status": "partially_paid",
            "payments": [{"amount": 1000, "paymentMethod": "online", "transactionId": "2025_C014_001"}]
        }"#;
        let inv: Invoice = serde_json::from_str(json).unwrap();
        assert_eq!(inv.status, InvoiceStatus::PartiallyPaid);
        assert_eq!(inv.customer_name(), "Asha");
        assert_eq!(inv.period_bounds(), Some(("2025-03-01", "2025-03-31")));
        assert_eq!(inv.due_amount, 1790.0);
        assert!(!inv.can_delete());
    }

    #[test]
    fn unknown_status_does_not_break_decoding() {
        let inv: Invoice = serde_json::from_str(r#"{"_id":"x","status":"cancelled"}"#).unwrap();
        assert_eq!(inv.status, InvoiceStatus::Unknown);
    }

    #[test]
    fn payment_request_omits_absent_optionals() {
        let req = PaymentRequest {
            amount: 500.0,
            payment_method: PaymentMethod::Online,
            notes: None,
            transaction_id: None,
        };
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"amount":500.0,"paymentMethod":"online"}"#
        );
    }
}
