//! Response-shape normalization.
//!
//! Backend list endpoints are not uniform: some answer with a bare array,
//! some with `{ data: [...] }`, some name the array after the resource
//! (`{ customers: [...] }`), and paginated ones add a `pagination` block.
//! Every service function decodes into [`ListEnvelope`] / [`ItemEnvelope`]
//! and hands a canonical [`ListPage`] or item to the UI. Single items are
//! unwrapped only under the key their resource declares via [`ItemKey`].

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default, alias = "currentPage")]
    pub page: usize,
    #[serde(default, alias = "pages")]
    pub total_pages: usize,
    #[serde(default, alias = "totalItems", alias = "totalCount")]
    pub total: usize,
    #[serde(default)]
    pub limit: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WrappedList<T> {
    #[serde(
        alias = "items",
        alias = "customers",
        alias = "invoices",
        alias = "records",
        alias = "entries",
        alias = "holidays",
        alias = "categories",
        alias = "subcategories",
        alias = "admins"
    )]
    pub data: Vec<T>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
    #[serde(default)]
    pub total: Option<usize>,
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub total_pages: Option<usize>,
}

/// Any of the list shapes the backend produces.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Bare(Vec<T>),
    Wrapped(WrappedList<T>),
}

/// Canonical client-side list page. Pages are 1-based like the server's.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub total: usize,
}

impl<T> Default for ListPage<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            total_pages: 1,
            total: 0,
        }
    }
}

impl<T> ListPage<T> {
    /// Page to request next when collecting every page, given how many
    /// items have been gathered so far. `None` once the server has nothing
    /// more, including when it answers short.
    pub fn next_page(&self, collected: usize) -> Option<usize> {
        let more = collected < self.total
            && self.page < self.total_pages
            && !self.items.is_empty();
        more.then_some(self.page + 1)
    }

    /// True when fewer items were gathered than the server reported.
    pub fn is_truncated(&self, collected: usize) -> bool {
        collected < self.total
    }
}

impl<T> ListEnvelope<T> {
    pub fn into_page(self) -> ListPage<T> {
        match self {
            ListEnvelope::Bare(items) => {
                let total = items.len();
                ListPage {
                    items,
                    page: 1,
                    total_pages: 1,
                    total,
                }
            }
            ListEnvelope::Wrapped(w) => {
                let p = w.pagination.unwrap_or_default();
                let total = w.total.unwrap_or(p.total).max(w.data.len());
                let page = w.page.unwrap_or(p.page).max(1);
                let total_pages = w.total_pages.unwrap_or(p.total_pages).max(1);
                ListPage {
                    items: w.data,
                    page,
                    total_pages,
                    total,
                }
            }
        }
    }

    pub fn into_vec(self) -> Vec<T> {
        self.into_page().items
    }
}

/// Wrapper key a single-resource endpoint uses, as in `{ "invoice": {...} }`.
///
/// Each resource names exactly one key, and it must not be one of its own
/// field names: a bare invoice carries a `customer` object, so only
/// `invoice` and `data` are unwrapped for [`ItemEnvelope<Invoice>`].
pub trait ItemKey {
    const KEY: &'static str;
}

/// Single-object responses: `{ data: {...} }`, `{ <T::KEY>: {...} }` or the bare object.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemEnvelope<T>(T);

impl<T> ItemEnvelope<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<'de, T> Deserialize<'de> for ItemEnvelope<T>
where
    T: DeserializeOwned + ItemKey,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut value = Value::deserialize(deserializer)?;
        let key = [T::KEY, "data"]
            .into_iter()
            .find(|k| value.get(k).is_some_and(Value::is_object));
        let inner = match key {
            Some(k) => value.get_mut(k).map(Value::take).unwrap_or_default(),
            None => value,
        };
        serde_json::from_value(inner)
            .map(ItemEnvelope)
            .map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Row {
        #[serde(rename = "_id")]
        id: String,
    }

    impl ItemKey for Row {
        const KEY: &'static str = "row";
    }

    fn decode(json: &str) -> ListPage<Row> {
        serde_json::from_str::<ListEnvelope<Row>>(json)
            .expect("decodes")
            .into_page()
    }

    #[test]
    fn bare_array_is_single_page() {
        let page = decode(r#"[{"_id":"a"},{"_id":"b"}]"#);
        assert_eq!(page.items.len(), 2);
        assert_eq!((page.page, page.total_pages, page.total), (1, 1, 2));
    }

    #[test]
    fn data_key_with_pagination() {
        let page = decode(
            r#"{"success":true,"data":[{"_id":"a"}],"pagination":{"page":2,"totalPages":5,"total":41}}"#,
        );
        assert_eq!(page.items, vec![Row { id: "a".into() }]);
        assert_eq!((page.page, page.total_pages, page.total), (2, 5, 41));
    }

    #[test]
    fn resource_named_key() {
        let page = decode(r#"{"customers":[{"_id":"c1"}],"total":1,"totalPages":1,"page":1}"#);
        assert_eq!(page.items[0].id, "c1");
    }

    #[test]
    fn item_envelope_accepts_both_shapes() {
        let wrapped: ItemEnvelope<Row> =
            serde_json::from_str(r#"{"success":true,"row":{"_id":"i1"}}"#).unwrap();
        let data: ItemEnvelope<Row> =
            serde_json::from_str(r#"{"success":true,"data":{"_id":"i3"}}"#).unwrap();
        let bare: ItemEnvelope<Row> = serde_json::from_str(r#"{"_id":"i2"}"#).unwrap();
        assert_eq!(wrapped.into_inner().id, "i1");
        assert_eq!(data.into_inner().id, "i3");
        assert_eq!(bare.into_inner().id, "i2");
    }

    #[test]
    fn next_page_walks_until_total_is_collected() {
        let first = ListPage {
            items: vec![Row { id: "a".into() }; 1000],
            page: 1,
            total_pages: 3,
            total: 2500,
        };
        assert_eq!(first.next_page(1000), Some(2));

        let last = ListPage {
            page: 3,
            items: vec![Row { id: "z".into() }; 500],
            ..first.clone()
        };
        assert_eq!(last.next_page(2500), None);
    }

    #[test]
    fn next_page_stops_on_short_server_answer() {
        let empty = ListPage::<Row> {
            items: vec![],
            page: 2,
            total_pages: 3,
            total: 2500,
        };
        assert_eq!(empty.next_page(1000), None);

        let bare = decode(r#"[{"_id":"a"}]"#);
        assert_eq!(bare.next_page(1), None);
    }

    mod entities {
        use super::super::*;
        use crate::domain::a001_customer::Customer;
        use crate::domain::a007_invoice::Invoice;

        const INVOICE: &str = r#"{
            "_id": "inv1", "invoiceNumber": "RD-2025-03-014",
            "customer": {"_id": "c1", "name": "Asha", "customerNo": "C014"},
            "totalAmount": 1500, "amountPaid": 500, "dueAmount": 1000,
            "status": "partially_paid"
        }"#;

        const CUSTOMER: &str = r#"{
            "_id": "c1", "name": "Asha", "phone": "9876543210",
            "milkType": {"_id": "m1", "name": "Cow"},
            "subcategory": {"_id": "s1", "name": "Full cream"},
            "morningQuantity": 1.5
        }"#;

        fn item<T: DeserializeOwned + ItemKey>(json: &str) -> T {
            serde_json::from_str::<ItemEnvelope<T>>(json)
                .expect("decodes")
                .into_inner()
        }

        #[test]
        fn bare_invoice_is_not_mistaken_for_its_customer() {
            let inv: Invoice = item(INVOICE);
            assert_eq!(inv.id, "inv1");
            assert_eq!(inv.invoice_number, "RD-2025-03-014");
            assert_eq!(inv.due_amount, 1000.0);
            assert_eq!(inv.customer.id(), "c1");
        }

        #[test]
        fn wrapped_invoice_unwraps_under_its_key_or_data() {
            for json in [
                format!(r#"{{"success":true,"invoice":{}}}"#, INVOICE),
                format!(r#"{{"success":true,"data":{}}}"#, INVOICE),
            ] {
                let inv: Invoice = item(&json);
                assert_eq!(inv.id, "inv1");
                assert_eq!(inv.customer.name(), "Asha");
            }
        }

        #[test]
        fn bare_customer_is_not_mistaken_for_its_subcategory() {
            let c: Customer = item(CUSTOMER);
            assert_eq!(c.id, "c1");
            assert_eq!(c.name, "Asha");
            assert_eq!(c.subcategory.as_ref().map(|s| s.id()), Some("s1"));
        }

        #[test]
        fn wrapped_customer_decodes() {
            let c: Customer = item(&format!(r#"{{"customer":{}}}"#, CUSTOMER));
            assert_eq!(c.id, "c1");
            assert_eq!(c.morning_quantity, 1.5);
        }

        #[test]
        fn invoice_list_keeps_populated_customers() {
            let json = format!(
                r#"{{"invoices":[{}],"pagination":{{"page":1,"totalPages":1,"total":1}}}}"#,
                INVOICE
            );
            let page = serde_json::from_str::<ListEnvelope<Invoice>>(&json)
                .expect("decodes")
                .into_page();
            assert_eq!(page.items.len(), 1);
            assert_eq!(page.items[0].id, "inv1");
            assert_eq!(page.items[0].customer.name(), "Asha");
        }
    }
}
