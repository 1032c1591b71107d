//! Add-payment form model.
//!
//! The amount is deliberately not capped at the due balance: whatever is
//! paid beyond it is banked by the server as advance and applied to the
//! customer's next invoice.

use super::aggregate::{PaymentMethod, PaymentRequest};
use crate::domain::common::round2;
use crate::shared::api_error::ApiError;

/// One-click amount presets relative to the due balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAmount {
    Quarter,
    Half,
    ThreeQuarters,
    Full,
}

impl QuickAmount {
    pub const ALL: [QuickAmount; 4] = [
        QuickAmount::Quarter,
        QuickAmount::Half,
        QuickAmount::ThreeQuarters,
        QuickAmount::Full,
    ];

    pub fn fraction(&self) -> f64 {
        match self {
            QuickAmount::Quarter => 0.25,
            QuickAmount::Half => 0.50,
            QuickAmount::ThreeQuarters => 0.75,
            QuickAmount::Full => 1.00,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QuickAmount::Quarter => "25%",
            QuickAmount::Half => "50%",
            QuickAmount::ThreeQuarters => "75%",
            QuickAmount::Full => "Full",
        }
    }

    pub fn calculate(&self, due_amount: f64) -> f64 {
        round2(due_amount * self.fraction())
    }

    /// Value written into the amount field, always with two decimals.
    pub fn format(&self, due_amount: f64) -> String {
        format!("{:.2}", self.calculate(due_amount))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentForm {
    pub amount: String,
    pub payment_method: PaymentMethod,
    pub transaction_id: String,
    pub notes: String,
}

impl PaymentForm {
    pub fn parsed_amount(&self) -> Option<f64> {
        self.amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
    }

    /// True iff the amount is a finite number above zero.
    pub fn is_form_valid(&self) -> bool {
        self.parsed_amount().is_some_and(|v| v > 0.0)
    }

    pub fn apply_quick_amount(&mut self, preset: QuickAmount, due_amount: f64) {
        self.amount = preset.format(due_amount);
    }

    /// Switching to cash drops any typed transaction id.
    pub fn set_method(&mut self, method: PaymentMethod) {
        if method == PaymentMethod::Cash {
            self.transaction_id.clear();
        }
        self.payment_method = method;
    }

    pub fn shows_transaction_id(&self) -> bool {
        self.payment_method == PaymentMethod::Online
    }

    /// Part of the entered amount that will be banked as advance.
    pub fn advance_amount(&self, due_amount: f64) -> Option<f64> {
        let amount = self.parsed_amount()?;
        let extra = round2(amount - due_amount.max(0.0));
        (extra > 0.0).then_some(extra)
    }

    /// Amount still owed after this payment, never below zero.
    pub fn remaining_after(&self, due_amount: f64) -> f64 {
        let paid = self.parsed_amount().unwrap_or(0.0).max(0.0);
        round2((due_amount - paid).max(0.0))
    }

    /// Request body; blank optional fields are left out.
    pub fn to_request(&self) -> Result<PaymentRequest, ApiError> {
        let amount = match self.parsed_amount() {
            Some(v) if v > 0.0 => v,
            _ => {
                return Err(ApiError::validation(
                    "amount",
                    "Please enter a valid amount greater than 0",
                ))
            }
        };

        let notes = Some(self.notes.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        let transaction_id = Some(self.transaction_id.trim())
            .filter(|s| self.shows_transaction_id() && !s.is_empty())
            .map(str::to_string);

        Ok(PaymentRequest {
            amount,
            payment_method: self.payment_method,
            notes,
            transaction_id,
        })
    }
}

/// Hint shown under an empty transaction id field. The id itself is
/// generated by the server.
pub fn transaction_id_hint(year: i32, customer_no: Option<&str>) -> String {
    let customer = customer_no.filter(|c| !c.is_empty()).unwrap_or("{customerNo}");
    format!(
        "Leave blank to auto-generate: {}_{}_{{sequence}}",
        year, customer
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(amount: &str) -> PaymentForm {
        PaymentForm {
            amount: amount.into(),
            ..Default::default()
        }
    }

    #[test]
    fn presets_round_to_two_decimals() {
        for due in [0.0, 1.0, 333.33, 1000.0, 1234.57, 99999.99] {
            for preset in QuickAmount::ALL {
                let expected = ((due * preset.fraction()) * 100.0_f64).round() / 100.0;
                assert_eq!(preset.calculate(due), expected);
            }
        }
    }

    #[test]
    fn half_of_thousand_fills_500() {
        let mut f = PaymentForm::default();
        f.apply_quick_amount(QuickAmount::Half, 1000.0);
        assert_eq!(f.amount, "500.00");
        assert!(f.is_form_valid());
    }

    #[test]
    fn overpayment_stays_valid() {
        let f = form("5000");
        for (due, advance) in [(0.0, 5000.0), (10.0, 4990.0), (1000.0, 4000.0)] {
            assert!(f.is_form_valid());
            assert_eq!(f.advance_amount(due), Some(advance), "due {due}");
            assert_eq!(f.remaining_after(due), 0.0);
            assert_eq!(f.to_request().map(|r| r.amount).ok(), Some(5000.0));
        }
        assert_eq!(form("1200").advance_amount(1000.0), Some(200.0));
        assert_eq!(form("800").advance_amount(1000.0), None);
    }

    #[test]
    fn rejects_zero_negative_and_garbage() {
        for bad in ["", "0", "-5", "abc", "NaN", "inf", "  "] {
            assert!(!form(bad).is_form_valid(), "{bad:?} should be invalid");
        }
        assert_eq!(form("0").to_request().unwrap_err().field(), Some("amount"));
    }

    #[test]
    fn switching_to_cash_clears_transaction_id() {
        let mut f = PaymentForm {
            amount: "100".into(),
            payment_method: PaymentMethod::Online,
            transaction_id: "UPI123".into(),
            notes: "March".into(),
        };
        f.set_method(PaymentMethod::Cash);
        assert!(f.transaction_id.is_empty());
        assert!(!f.shows_transaction_id());
        assert_eq!(f.notes, "March");
    }

    #[test]
    fn switching_to_online_keeps_other_fields() {
        let mut f = PaymentForm {
            amount: "250.50".into(),
            payment_method: PaymentMethod::Cash,
            transaction_id: String::new(),
            notes: "paid at door".into(),
        };
        let before = f.clone();
        f.set_method(PaymentMethod::Online);
        assert_eq!(f.amount, before.amount);
        assert_eq!(f.notes, before.notes);
        assert_eq!(f.transaction_id, before.transaction_id);
        assert!(f.shows_transaction_id());
    }

    #[test]
    fn blank_online_transaction_id_is_omitted() {
        let mut f = form("500.00");
        f.set_method(PaymentMethod::Online);
        f.transaction_id = "   ".into();
        let req = f.to_request().unwrap();
        assert_eq!(req.transaction_id, None);
        assert_eq!(req.notes, None);
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("transactionId").is_none());
    }

    #[test]
    fn remaining_never_negative() {
        assert_eq!(form("1500").remaining_after(1000.0), 0.0);
        assert_eq!(form("250").remaining_after(1000.0), 750.0);
    }

    #[test]
    fn hint_uses_customer_number() {
        assert_eq!(
            transaction_id_hint(2025, Some("C014")),
            "Leave blank to auto-generate: 2025_C014_{sequence}"
        );
    }
}
