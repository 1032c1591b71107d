use crate::domain::common::{EntityRef, Identified, NamedRef};
use crate::shared::api_error::ApiError;
use serde::{Deserialize, Serialize};

/// Variant of a milk type (full cream, toned, ...) with its own price.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subcategory {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: EntityRef<NamedRef>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl Identified for Subcategory {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubcategoryDto {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub description: String,
    pub is_active: bool,
}

impl Default for SubcategoryDto {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: String::new(),
            price: 0.0,
            description: String::new(),
            is_active: true,
        }
    }
}

impl From<&Subcategory> for SubcategoryDto {
    fn from(s: &Subcategory) -> Self {
        Self {
            name: s.name.clone(),
            category: s.category.id().to_string(),
            price: s.price,
            description: s.description.clone(),
            is_active: s.is_active,
        }
    }
}

impl SubcategoryDto {
    /// `existing` is the loaded subcategory list; `editing_id` excludes the
    /// row being edited from the duplicate-name check.
    pub fn validate(
        &self,
        existing: &[Subcategory],
        editing_id: Option<&str>,
    ) -> Result<(), ApiError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ApiError::validation("name", "Name is required"));
        }
        if self.category.is_empty() {
            return Err(ApiError::validation("category", "Select a milk category"));
        }
        if !self.price.is_finite() || self.price <= 0.0 {
            return Err(ApiError::validation("price", "Price must be greater than 0"));
        }
        let duplicate = existing.iter().any(|s| {
            Some(s.id.as_str()) != editing_id
                && s.category.id() == self.category
                && s.name.trim().eq_ignore_ascii_case(name)
        });
        if duplicate {
            return Err(ApiError::validation(
                "name",
                "An entry with this name already exists",
            ));
        }
        Ok(())
    }
}

/// Subcategories belonging to `category_id`.
pub fn for_category<'a>(
    all: &'a [Subcategory],
    category_id: &'a str,
) -> impl Iterator<Item = &'a Subcategory> + 'a {
    all.iter().filter(move |s| s.category.id() == category_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn existing() -> Vec<Subcategory> {
        vec![Subcategory {
            id: "s1".into(),
            name: "Full Cream".into(),
            category: EntityRef::Id("m1".into()),
            price: 64.0,
            ..Default::default()
        }]
    }

    fn dto(name: &str) -> SubcategoryDto {
        SubcategoryDto {
            name: name.into(),
            category: "m1".into(),
            price: 58.0,
            ..Default::default()
        }
    }

    #[test]
    fn duplicate_name_in_same_category_is_rejected() {
        let err = dto(" full cream ").validate(&existing(), None).unwrap_err();
        assert_eq!(err.field(), Some("name"));
        assert!(dto("Toned").validate(&existing(), None).is_ok());
    }

    #[test]
    fn editing_row_may_keep_its_name() {
        assert!(dto("Full Cream").validate(&existing(), Some("s1")).is_ok());
    }

    #[test]
    fn category_is_required() {
        let mut d = dto("Toned");
        d.category.clear();
        assert_eq!(d.validate(&[], None).unwrap_err().field(), Some("category"));
    }

    #[test]
    fn filters_by_category() {
        let all = existing();
        assert_eq!(for_category(&all, "m1").count(), 1);
        assert_eq!(for_category(&all, "m2").count(), 0);
    }
}
