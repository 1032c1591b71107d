//! Error taxonomy shared by every API call and client-side validation.
//!
//! Three families reach the user:
//! - network failures (no response at all),
//! - server-reported errors, whose message is shown verbatim,
//! - validation failures raised before any request is sent.

use serde::Deserialize;
use thiserror::Error;

pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your connection.";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// No response was received (offline, DNS, CORS, aborted fetch).
    #[error("Network error. Please check your connection.")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// The stored session was rejected; the caller must log in again.
    #[error("Session expired. Please log in again.")]
    Unauthorized,

    /// Client-side validation failed for `field`.
    #[error("{message}")]
    Validation { field: String, message: String },

    /// The response body did not match the expected shape.
    #[error("Unexpected response from server: {0}")]
    Decode(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ApiError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ApiError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Builds a server error from a non-2xx response.
    ///
    /// The message comes from the JSON body (`message`, then `error`); when
    /// the body carries neither, the HTTP status is used.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message.or(b.error))
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("HTTP {}", status));

        ApiError::Server { status, message }
    }

    /// Text shown to the operator.
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// Form field the error belongs to, if it is field-level.
    pub fn field(&self) -> Option<&str> {
        match self {
            ApiError::Validation { field, .. } => Some(field.as_str()),
            _ => None,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }

    /// Maps duplicate-key server messages onto a friendlier field-level error.
    ///
    /// Anything that does not look like a uniqueness conflict is returned
    /// unchanged.
    pub fn relabel_conflict(self) -> Self {
        let message = match &self {
            ApiError::Server { message, .. } => message.to_lowercase(),
            _ => return self,
        };

        let is_conflict = message.contains("duplicate key")
            || message.contains("already exists")
            || message.contains("already in use")
            || message.contains("e11000");
        if !is_conflict {
            return self;
        }

        if message.contains("phone") {
            ApiError::validation(
                "phone",
                "This phone number is already registered to another customer",
            )
        } else if message.contains("customerno") || message.contains("customer number") {
            ApiError::validation("customerNo", "This customer number is already in use")
        } else if message.contains("name") {
            ApiError::validation("name", "An entry with this name already exists")
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_is_taken_verbatim() {
        let err = ApiError::from_response(400, r#"{"success":false,"message":"Invoice already paid"}"#);
        assert_eq!(err.user_message(), "Invoice already paid");
    }

    #[test]
    fn error_key_is_used_when_message_missing() {
        let err = ApiError::from_response(500, r#"{"error":"Database unavailable"}"#);
        assert_eq!(err.user_message(), "Database unavailable");
    }

    #[test]
    fn falls_back_to_status_for_non_json_body() {
        let err = ApiError::from_response(502, "<html>Bad Gateway</html>");
        assert_eq!(
            err,
            ApiError::Server {
                status: 502,
                message: "HTTP 502".into()
            }
        );
    }

    #[test]
    fn network_error_has_generic_message() {
        let err = ApiError::Network("TypeError: Failed to fetch".into());
        assert!(err.is_network());
        assert_eq!(err.user_message(), NETWORK_ERROR_MESSAGE);
    }

    #[test]
    fn duplicate_phone_becomes_field_error() {
        let err = ApiError::from_response(
            400,
            r#"{"message":"E11000 duplicate key error collection: customers index: phone_1 dup key"}"#,
        )
        .relabel_conflict();
        assert_eq!(err.field(), Some("phone"));
    }

    #[test]
    fn duplicate_subcategory_name_becomes_field_error() {
        let err = ApiError::from_response(409, r#"{"message":"Subcategory with this name already exists"}"#)
            .relabel_conflict();
        assert_eq!(err.field(), Some("name"));
    }

    #[test]
    fn unrelated_server_error_is_untouched() {
        let err = ApiError::from_response(500, r#"{"message":"Internal error"}"#);
        assert_eq!(err.clone().relabel_conflict(), err);
    }
}
