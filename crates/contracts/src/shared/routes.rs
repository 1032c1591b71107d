//! Client route table.
//!
//! Route paths double as workspace tab keys: opening `/invoices/42` opens
//! (or focuses) the tab with that key, and the active tab's key is written
//! back to the address bar.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    Dashboard,
    Customers,
    CustomerNew,
    CustomerEdit(String),
    Categories,
    Subcategories,
    Records,
    RecordEdit(String),
    Stock,
    Holidays,
    Invoices,
    InvoiceGenerate,
    DueCustomers,
    InvoiceDetail(String),
    InvoicePayment(String),
    Settings,
    Admins,
    NotFound(String),
}

impl AppRoute {
    /// Parses a path (query string and trailing slash ignored).
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] | ["dashboard"] => AppRoute::Dashboard,
            ["customers"] => AppRoute::Customers,
            ["customers", "new"] => AppRoute::CustomerNew,
            ["customers", "edit", id] => AppRoute::CustomerEdit(id.to_string()),
            ["categories"] => AppRoute::Categories,
            ["subcategories"] => AppRoute::Subcategories,
            ["records"] => AppRoute::Records,
            ["records", "edit", id] => AppRoute::RecordEdit(id.to_string()),
            ["stock"] => AppRoute::Stock,
            ["holidays"] => AppRoute::Holidays,
            ["invoices"] => AppRoute::Invoices,
            ["invoices", "generate"] => AppRoute::InvoiceGenerate,
            ["invoices", "due"] => AppRoute::DueCustomers,
            ["invoices", id] => AppRoute::InvoiceDetail(id.to_string()),
            ["invoices", id, "payment"] => AppRoute::InvoicePayment(id.to_string()),
            ["settings"] => AppRoute::Settings,
            ["admins"] => AppRoute::Admins,
            _ => AppRoute::NotFound(path.to_string()),
        }
    }

    pub fn path(&self) -> String {
        match self {
            AppRoute::Dashboard => "/".into(),
            AppRoute::Customers => "/customers".into(),
            AppRoute::CustomerNew => "/customers/new".into(),
            AppRoute::CustomerEdit(id) => format!("/customers/edit/{}", id),
            AppRoute::Categories => "/categories".into(),
            AppRoute::Subcategories => "/subcategories".into(),
            AppRoute::Records => "/records".into(),
            AppRoute::RecordEdit(id) => format!("/records/edit/{}", id),
            AppRoute::Stock => "/stock".into(),
            AppRoute::Holidays => "/holidays".into(),
            AppRoute::Invoices => "/invoices".into(),
            AppRoute::InvoiceGenerate => "/invoices/generate".into(),
            AppRoute::DueCustomers => "/invoices/due".into(),
            AppRoute::InvoiceDetail(id) => format!("/invoices/{}", id),
            AppRoute::InvoicePayment(id) => format!("/invoices/{}/payment", id),
            AppRoute::Settings => "/settings".into(),
            AppRoute::Admins => "/admins".into(),
            AppRoute::NotFound(path) => path.clone(),
        }
    }

    /// Default tab title. Detail views may rename their tab once loaded.
    pub fn title(&self) -> String {
        match self {
            AppRoute::Dashboard => "Dashboard".into(),
            AppRoute::Customers => "Customers".into(),
            AppRoute::CustomerNew => "New customer".into(),
            AppRoute::CustomerEdit(_) => "Edit customer".into(),
            AppRoute::Categories => "Milk categories".into(),
            AppRoute::Subcategories => "Subcategories".into(),
            AppRoute::Records => "Daily records".into(),
            AppRoute::RecordEdit(_) => "Edit record".into(),
            AppRoute::Stock => "Stock".into(),
            AppRoute::Holidays => "Holidays".into(),
            AppRoute::Invoices => "Invoices".into(),
            AppRoute::InvoiceGenerate => "Generate invoices".into(),
            AppRoute::DueCustomers => "Due customers".into(),
            AppRoute::InvoiceDetail(_) => "Invoice".into(),
            AppRoute::InvoicePayment(_) => "Add payment".into(),
            AppRoute::Settings => "Settings".into(),
            AppRoute::Admins => "Admins".into(),
            AppRoute::NotFound(_) => "Not found".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_static_and_parameterized_paths() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Dashboard);
        assert_eq!(AppRoute::from_path("/invoices"), AppRoute::Invoices);
        assert_eq!(AppRoute::from_path("/invoices/generate"), AppRoute::InvoiceGenerate);
        assert_eq!(
            AppRoute::from_path("/customers/edit/65a1f0"),
            AppRoute::CustomerEdit("65a1f0".into())
        );
        assert_eq!(
            AppRoute::from_path("/invoices/abc/payment"),
            AppRoute::InvoicePayment("abc".into())
        );
    }

    #[test]
    fn ignores_query_and_trailing_slash() {
        assert_eq!(AppRoute::from_path("/invoices/?customerId=1"), AppRoute::Invoices);
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert_eq!(
            AppRoute::from_path("/reports/yearly"),
            AppRoute::NotFound("/reports/yearly".into())
        );
    }

    #[test]
    fn path_round_trips_for_detail_routes() {
        let route = AppRoute::InvoiceDetail("x1".into());
        assert_eq!(AppRoute::from_path(&route.path()), route);
    }
}
