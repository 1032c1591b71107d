use crate::domain::common::{parse_date, CustomerRef, EntityRef, Identified};
use crate::shared::api_error::ApiError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Pause in deliveries. Without a customer it applies to everyone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holiday {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub customer: Option<EntityRef<CustomerRef>>,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub reason: String,
}

impl Identified for Holiday {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Holiday {
    pub fn is_global(&self) -> bool {
        self.customer.is_none()
    }

    pub fn customer_label(&self) -> String {
        match &self.customer {
            None => "All customers".to_string(),
            Some(c) if !c.name().is_empty() => c.name().to_string(),
            Some(c) => c.id().to_string(),
        }
    }

    /// Inclusive on both ends.
    pub fn covers(&self, date: NaiveDate) -> bool {
        match (parse_date(&self.start_date), parse_date(&self.end_date)) {
            (Some(start), Some(end)) => start <= date && date <= end,
            _ => false,
        }
    }

    pub fn days(&self) -> i64 {
        match (parse_date(&self.start_date), parse_date(&self.end_date)) {
            (Some(start), Some(end)) if end >= start => (end - start).num_days() + 1,
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    pub start_date: String,
    pub end_date: String,
    pub reason: String,
}

impl HolidayDto {
    pub fn validate(&self) -> Result<(), ApiError> {
        let start = parse_date(&self.start_date)
            .ok_or_else(|| ApiError::validation("startDate", "Select a start date"))?;
        let end = parse_date(&self.end_date)
            .ok_or_else(|| ApiError::validation("endDate", "Select an end date"))?;
        if end < start {
            return Err(ApiError::validation(
                "endDate",
                "End date cannot be before start date",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holiday(start: &str, end: &str) -> Holiday {
        Holiday {
            id: "h1".into(),
            start_date: start.into(),
            end_date: end.into(),
            ..Default::default()
        }
    }

    #[test]
    fn end_before_start_is_rejected() {
        let dto = HolidayDto {
            start_date: "2025-03-10".into(),
            end_date: "2025-03-09".into(),
            ..Default::default()
        };
        assert_eq!(dto.validate().unwrap_err().field(), Some("endDate"));
    }

    #[test]
    fn single_day_range_is_valid() {
        let dto = HolidayDto {
            start_date: "2025-03-10".into(),
            end_date: "2025-03-10".into(),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
        assert_eq!(holiday("2025-03-10", "2025-03-10").days(), 1);
    }

    #[test]
    fn covers_is_inclusive() {
        let h = holiday("2025-03-10T00:00:00.000Z", "2025-03-12");
        let d = |day| NaiveDate::from_ymd_opt(2025, 3, day).unwrap();
        assert!(!h.covers(d(9)));
        assert!(h.covers(d(10)));
        assert!(h.covers(d(12)));
        assert!(!h.covers(d(13)));
        assert_eq!(h.days(), 3);
    }

    #[test]
    fn missing_customer_means_everyone() {
        let h: Holiday = serde_json::from_str(
            r#"{"_id":"h1","startDate":"2025-03-10","endDate":"2025-03-11","reason":"Festival"}"#,
        )
        .unwrap();
        assert!(h.is_global());
        assert_eq!(h.customer_label(), "All customers");
    }
}
