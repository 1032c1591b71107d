use crate::dashboards::d400_overview::api::{fetch_overview, Overview};
use crate::layout::global_context::use_global_context;
use crate::shared::components::badge::Badge as UiBadge;
use crate::shared::components::stat_card::{StatCard, StatFormat, StatTone};
use crate::shared::date_utils::{format_date, today, today_iso};
use crate::shared::format::format_currency;
use crate::shared::http::use_api;
use crate::shared::icons::icon;
use crate::shared::page_frame::{ErrorAlert, PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::domain::a007_invoice::{Invoice, InvoiceScope, InvoiceStats};
use contracts::domain::common::month_name;
use contracts::shared::routes::AppRoute;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Rows in the "largest dues" table.
const TOP_DUES: usize = 5;

fn largest_dues(invoices: &[Invoice]) -> Vec<Invoice> {
    let mut open: Vec<Invoice> = invoices
        .iter()
        .filter(|i| i.due_amount > 0.0)
        .cloned()
        .collect();
    open.sort_by(|a, b| b.due_amount.total_cmp(&a.due_amount));
    open.truncate(TOP_DUES);
    open
}

#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let ctx = use_global_context();
    let client = StoredValue::new(use_api());
    let scope = InvoiceScope::containing(today());

    let overview = RwSignal::new(None::<Overview>);
    let error = RwSignal::new(None::<String>);

    let load = move || {
        let client = client.get_value();
        error.set(None);
        spawn_local(async move {
            match fetch_overview(&client, &today_iso(), scope).await {
                Ok(o) => overview.set(Some(o)),
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };
    load();

    let stats = Memo::new(move |_| {
        overview.with(|o| o.as_ref().map(|o| InvoiceStats::from_invoices(&o.invoices)))
    });
    let today_stat = move |pick: fn(&Overview) -> f64| {
        Signal::derive(move || overview.with(|o| o.as_ref().map(pick)))
    };
    let invoice_stat = move |pick: fn(&InvoiceStats) -> f64| {
        Signal::derive(move || stats.with(|s| s.as_ref().map(pick)))
    };

    view! {
        <PageFrame page_id="d400_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Dashboard".to_string() subtitle=format_date(&today_iso())>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| load()>
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>

            <div class="page__content">
                <ErrorAlert error=error />

                <h3 class="section-title">"Today"</h3>
                <div class="stat-grid">
                    <StatCard label="Deliveries" icon_name="records"
                        value=today_stat(|o| o.today.total_records as f64) format=StatFormat::Count />
                    <StatCard label="Milk delivered" icon_name="stock"
                        value=today_stat(|o| o.today.total_quantity) format=StatFormat::Quantity
                        subtitle=Signal::derive(move || overview.with(|o| o.as_ref().map(|o| format!(
                            "Morning {} L · Evening {} L",
                            contracts::domain::common::format_quantity(o.today.morning_quantity),
                            contracts::domain::common::format_quantity(o.today.evening_quantity)
                        ))))
                    />
                    <StatCard label="Sales" icon_name="invoices"
                        value=today_stat(|o| o.today.total_amount) format=StatFormat::Money />
                </div>

                <h3 class="section-title">{format!("{} {}", month_name(scope.month), scope.year)}</h3>
                <div class="stat-grid">
                    <StatCard label="Invoices" icon_name="invoices"
                        value=invoice_stat(|s| s.total_invoices as f64) format=StatFormat::Count />
                    <StatCard label="Billed" icon_name="invoices"
                        value=invoice_stat(|s| s.total_amount) format=StatFormat::Money />
                    <StatCard label="Collected" icon_name="payments"
                        value=invoice_stat(|s| s.total_paid) format=StatFormat::Money tone=StatTone::Good />
                    <StatCard label="Outstanding" icon_name="due"
                        value=invoice_stat(|s| s.total_due) format=StatFormat::Money tone=StatTone::Warning />
                    <StatCard label="Overdue" icon_name="due"
                        value=invoice_stat(|s| s.overdue as f64) format=StatFormat::Count tone=StatTone::Bad />
                </div>

                <div class="dashboard-actions">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| ctx.navigate(&AppRoute::Records)>
                        {icon("records")}
                        " Daily records"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| ctx.navigate(&AppRoute::InvoiceGenerate)>
                        {icon("invoices")}
                        " Generate invoices"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| ctx.navigate(&AppRoute::DueCustomers)>
                        {icon("due")}
                        " Due customers"
                    </Button>
                </div>

                <h3 class="section-title">"Largest dues this month"</h3>
                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Invoice"</TableHeaderCell>
                                <TableHeaderCell>"Customer"</TableHeaderCell>
                                <TableHeaderCell>"Due"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let rows = overview.with(|o| o.as_ref().map(|o| largest_dues(&o.invoices)).unwrap_or_default());
                                rows.into_iter().map(|inv| {
                                    let route = AppRoute::InvoiceDetail(inv.id.clone());
                                    let invoice_number = inv.invoice_number.clone();
                                    let customer_name = inv.customer_name().to_string();
                                    let due = format_currency(inv.due_amount);
                                    let badge_variant = inv.status.badge_variant().to_string();
                                    let status_label = inv.status.label();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <a
                                                    href="#"
                                                    class="table__link"
                                                    on:click=move |ev| {
                                                        ev.prevent_default();
                                                        ctx.navigate(&route);
                                                    }
                                                >
                                                    {invoice_number}
                                                </a>
                                            </TableCell>
                                            <TableCell>{customer_name}</TableCell>
                                            <TableCell>{due}</TableCell>
                                            <TableCell>
                                                <UiBadge variant=badge_variant>{status_label}</UiBadge>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }).collect_view()
                            }}
                        </TableBody>
                    </Table>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invoice(id: &str, due: f64) -> Invoice {
        Invoice {
            id: id.into(),
            due_amount: due,
            ..Default::default()
        }
    }

    #[test]
    fn largest_dues_skips_settled_and_sorts_descending() {
        let all: Vec<Invoice> = vec![
            invoice("a", 100.0),
            invoice("b", 0.0),
            invoice("c", 450.5),
            invoice("d", 20.0),
            invoice("e", 300.0),
            invoice("f", 75.0),
            invoice("g", 90.0),
        ];
        let ids: Vec<String> = largest_dues(&all).into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["c", "e", "a", "g", "f"]);
    }
}
