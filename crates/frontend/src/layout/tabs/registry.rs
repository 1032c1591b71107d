//! Tab content registry: the single mapping from tab key (a client route
//! path) to its view.

use crate::dashboards::d400_overview::OverviewDashboard;
use crate::domain::a001_customer::ui::details::CustomerDetails;
use crate::domain::a001_customer::ui::list::CustomerList;
use crate::domain::a002_milk_category::ui::list::CategoryList;
use crate::domain::a003_milk_subcategory::ui::list::SubcategoryList;
use crate::domain::a004_delivery_record::ui::edit::RecordEdit;
use crate::domain::a004_delivery_record::ui::list::RecordList;
use crate::domain::a005_stock::ui::list::StockPage;
use crate::domain::a006_holiday::ui::list::HolidayList;
use crate::domain::a007_invoice::ui::details::InvoiceDetails;
use crate::domain::a007_invoice::ui::generate::GenerateInvoices;
use crate::domain::a007_invoice::ui::list::InvoiceList;
use crate::domain::a007_invoice::ui::payment::PaymentPage;
use crate::layout::global_context::AppGlobalContext;
use crate::projections::p900_due_customers::ui::list::DueCustomersList;
use crate::system::pages::admins::AdminsPage;
use crate::system::pages::not_found::NotFoundPage;
use crate::system::pages::settings::SettingsPage;
use contracts::shared::routes::AppRoute;
use leptos::prelude::*;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InvoiceListParams {
    customer_id: Option<String>,
}

/// `customerId` from a key such as `/invoices?customerId=c1`.
fn invoice_customer_filter(key: &str) -> Option<String> {
    let (_, query) = key.split_once('?')?;
    serde_qs::from_str::<InvoiceListParams>(query)
        .ok()?
        .customer_id
        .filter(|id| !id.is_empty())
}

pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let tab_key = key.to_string();

    match AppRoute::from_path(key) {
        AppRoute::Dashboard => view! { <OverviewDashboard /> }.into_any(),

        // a001: Customers
        AppRoute::Customers => view! { <CustomerList /> }.into_any(),
        AppRoute::CustomerNew => view! { <CustomerDetails id=None tab_key=tab_key /> }.into_any(),
        AppRoute::CustomerEdit(id) => {
            view! { <CustomerDetails id=Some(id) tab_key=tab_key /> }.into_any()
        }

        // a002/a003: Catalog
        AppRoute::Categories => view! { <CategoryList /> }.into_any(),
        AppRoute::Subcategories => view! { <SubcategoryList /> }.into_any(),

        // a004: Delivery records
        AppRoute::Records => view! { <RecordList /> }.into_any(),
        AppRoute::RecordEdit(id) => view! { <RecordEdit id=id tab_key=tab_key /> }.into_any(),

        // a005/a006
        AppRoute::Stock => view! { <StockPage /> }.into_any(),
        AppRoute::Holidays => view! { <HolidayList /> }.into_any(),

        // a007: Invoices
        AppRoute::Invoices => {
            let customer_id = invoice_customer_filter(key);
            view! { <InvoiceList customer_id=customer_id /> }.into_any()
        }
        AppRoute::InvoiceGenerate => view! { <GenerateInvoices /> }.into_any(),
        AppRoute::InvoiceDetail(id) => {
            view! { <InvoiceDetails id=id tab_key=tab_key /> }.into_any()
        }
        AppRoute::InvoicePayment(id) => view! { <PaymentPage id=id tab_key=tab_key /> }.into_any(),

        // p900: Due customers
        AppRoute::DueCustomers => view! { <DueCustomersList /> }.into_any(),

        // System
        AppRoute::Settings => view! { <SettingsPage /> }.into_any(),
        AppRoute::Admins => view! { <AdminsPage /> }.into_any(),
        AppRoute::NotFound(path) => {
            log::warn!("no page for tab key '{}'", path);
            let on_home = Callback::new(move |_| tabs_store.navigate(&AppRoute::Dashboard));
            view! { <NotFoundPage path=path on_home=on_home /> }.into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_customer_filter_from_key() {
        assert_eq!(
            invoice_customer_filter("/invoices?customerId=c1"),
            Some("c1".to_string())
        );
        assert_eq!(invoice_customer_filter("/invoices"), None);
        assert_eq!(invoice_customer_filter("/invoices?customerId="), None);
    }
}
