use serde::{Deserialize, Serialize};

/// Anything that carries a server-assigned id.
pub trait Identified {
    fn id(&self) -> &str;
}

/// Reference field that the backend returns either as a bare id or as a
/// populated sub-document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityRef<T> {
    Populated(T),
    Id(String),
}

impl<T: Identified> EntityRef<T> {
    pub fn id(&self) -> &str {
        match self {
            EntityRef::Populated(t) => t.id(),
            EntityRef::Id(id) => id,
        }
    }
}

impl<T> EntityRef<T> {
    pub fn populated(&self) -> Option<&T> {
        match self {
            EntityRef::Populated(t) => Some(t),
            EntityRef::Id(_) => None,
        }
    }
}

impl<T> Default for EntityRef<T> {
    fn default() -> Self {
        EntityRef::Id(String::new())
    }
}

/// Populated reference with a display name (categories, subcategories).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedRef {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

impl Identified for NamedRef {
    fn id(&self) -> &str {
        &self.id
    }
}

impl EntityRef<NamedRef> {
    /// Display name, falling back to the raw id.
    pub fn name(&self) -> &str {
        match self {
            EntityRef::Populated(r) if !r.name.is_empty() => &r.name,
            EntityRef::Populated(r) => &r.id,
            EntityRef::Id(id) => id,
        }
    }
}

/// Populated customer reference as embedded in invoices and records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRef {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub customer_no: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl Identified for CustomerRef {
    fn id(&self) -> &str {
        &self.id
    }
}

impl EntityRef<CustomerRef> {
    pub fn name(&self) -> &str {
        match self {
            EntityRef::Populated(c) => &c.name,
            EntityRef::Id(_) => "",
        }
    }

    pub fn customer_no(&self) -> Option<&str> {
        self.populated().and_then(|c| c.customer_no.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_bare_id_and_populated_object() {
        let bare: EntityRef<CustomerRef> = serde_json::from_str(r#""65f0aa""#).unwrap();
        assert_eq!(bare.id(), "65f0aa");
        assert_eq!(bare.name(), "");

        let full: EntityRef<CustomerRef> =
            serde_json::from_str(r#"{"_id":"65f0aa","name":"Ravi Kumar","customerNo":"C012"}"#)
                .unwrap();
        assert_eq!(full.id(), "65f0aa");
        assert_eq!(full.name(), "Ravi Kumar");
        assert_eq!(full.customer_no(), Some("C012"));
    }

    #[test]
    fn named_ref_falls_back_to_id() {
        let r: EntityRef<NamedRef> = EntityRef::Id("cat1".into());
        assert_eq!(r.name(), "cat1");
    }
}
