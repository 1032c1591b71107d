use crate::domain::a007_invoice::api::{delete_invoice, fetch_invoice, fetch_invoice_pdf};
use crate::layout::global_context::use_global_context;
use crate::shared::components::badge::Badge as UiBadge;
use crate::shared::date_utils::{format_date, format_datetime, format_period};
use crate::shared::export::{download_bytes, open_for_print, PDF_MIME};
use crate::shared::format::format_currency;
use crate::shared::http::use_api;
use crate::shared::icons::icon;
use crate::shared::list_utils::confirm_action;
use crate::shared::page_frame::{ErrorAlert, PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a007_invoice::Invoice;
use contracts::domain::common::format_quantity;
use contracts::shared::routes::AppRoute;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[derive(Clone, Copy, PartialEq)]
enum PdfAction {
    Download,
    Print,
}

#[component]
pub fn InvoiceDetails(id: String, tab_key: String) -> impl IntoView {
    let ctx = use_global_context();
    let client = StoredValue::new(use_api());
    let id = StoredValue::new(id);
    let tab_key = StoredValue::new(tab_key);

    let invoice = RwSignal::new(None::<Invoice>);
    let error = RwSignal::new(None::<String>);
    let pdf_busy = RwSignal::new(false);

    spawn_local({
        let client = client.get_value();
        let id = id.get_value();
        async move {
            match fetch_invoice(&client, &id).await {
                Ok(inv) => {
                    ctx.update_tab_title(&tab_key.get_value(), &inv.invoice_number);
                    invoice.set(Some(inv));
                }
                Err(e) => error.set(Some(format!("Failed to load: {}", e.user_message()))),
            }
        }
    });

    let pdf = move |action: PdfAction| {
        let Some(inv) = invoice.get_untracked() else {
            return;
        };
        let client = client.get_value();
        pdf_busy.set(true);
        spawn_local(async move {
            let result = match fetch_invoice_pdf(&client, &inv.id).await {
                Ok(bytes) => match action {
                    PdfAction::Download => download_bytes(&bytes, &inv.pdf_file_name(), PDF_MIME),
                    PdfAction::Print => open_for_print(&bytes, PDF_MIME),
                },
                Err(e) => Err(e.user_message()),
            };
            if let Err(e) = result {
                log::error!("invoice pdf failed: {}", e);
                error.set(Some(format!("Could not get the PDF: {}", e)));
            }
            pdf_busy.set(false);
        });
    };

    let remove = move || {
        let Some(inv) = invoice.get_untracked() else {
            return;
        };
        if !inv.can_delete() || !confirm_action(&format!("Delete invoice {}?", inv.invoice_number)) {
            return;
        }
        let client = client.get_value();
        spawn_local(async move {
            match delete_invoice(&client, &inv.id).await {
                Ok(()) => {
                    ctx.close_tab(&tab_key.get_value());
                    ctx.navigate(&AppRoute::Invoices);
                }
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };

    let title = Signal::derive(move || {
        invoice.with(|i| {
            i.as_ref()
                .map(|i| format!("Invoice {}", i.invoice_number))
                .unwrap_or_else(|| "Invoice".to_string())
        })
    });
    let accepts_payment = move || invoice.with(|i| i.as_ref().is_some_and(|i| i.accepts_payment()));
    let can_delete = move || invoice.with(|i| i.as_ref().is_some_and(|i| i.can_delete()));

    view! {
        <PageFrame page_id="a007_invoice--detail" category=PAGE_CAT_DETAIL>
            <PageHeader title=title>
                <Show when=accepts_payment>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| ctx.navigate(&AppRoute::InvoicePayment(id.get_value()))
                    >
                        {icon("payments")}
                        " Add payment"
                    </Button>
                </Show>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| pdf(PdfAction::Download)
                    disabled=Signal::derive(move || pdf_busy.get())
                >
                    {icon("download")}
                    " PDF"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| pdf(PdfAction::Print)
                    disabled=Signal::derive(move || pdf_busy.get())
                >
                    {icon("printer")}
                    " Print"
                </Button>
                <Show when=can_delete>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| remove()>
                        {icon("trash")}
                        " Delete"
                    </Button>
                </Show>
            </PageHeader>

            <div class="page__content">
                <ErrorAlert error=error />

                {move || invoice.get().map(|inv| {
                    let period = inv
                        .period_bounds()
                        .map(|(start, end)| format_period(start, end))
                        .unwrap_or_default();
                    let payments = inv.payments.clone().unwrap_or_default();
                    let items = inv.items.clone();
                    view! {
                        <div class="invoice-summary">
                            <div class="invoice-summary__row">
                                <span>"Customer"</span>
                                <strong>{inv.customer_name().to_string()}</strong>
                            </div>
                            <div class="invoice-summary__row">
                                <span>"Period"</span>
                                <strong>{period}</strong>
                            </div>
                            <div class="invoice-summary__row">
                                <span>"Due date"</span>
                                <strong>{inv.due_date.as_deref().map(format_date).unwrap_or_default()}</strong>
                            </div>
                            <div class="invoice-summary__row">
                                <span>"Status"</span>
                                <UiBadge variant=inv.status.badge_variant().to_string()>{inv.status.label()}</UiBadge>
                            </div>
                            <div class="invoice-summary__row">
                                <span>"Total"</span>
                                <strong>{format_currency(inv.total_amount)}</strong>
                            </div>
                            <div class="invoice-summary__row">
                                <span>"Paid"</span>
                                <strong>{format_currency(inv.amount_paid)}</strong>
                            </div>
                            <div class="invoice-summary__row invoice-summary__row--due">
                                <span>"Due"</span>
                                <strong>{format_currency(inv.due_amount)}</strong>
                            </div>
                        </div>

                        <h3 class="section-title">"Deliveries"</h3>
                        <div class="table-wrapper">
                            <Table attr:style="width: 100%;">
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCell>"Date"</TableHeaderCell>
                                        <TableHeaderCell>"Description"</TableHeaderCell>
                                        <TableHeaderCell>"Quantity (L)"</TableHeaderCell>
                                        <TableHeaderCell>"Rate"</TableHeaderCell>
                                        <TableHeaderCell>"Amount"</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    {items.into_iter().map(|item| {
                                        let date = format_date(&item.date);
                                        let description = item.description.clone().unwrap_or_default();
                                        let quantity = format_quantity(item.quantity);
                                        let rate = item.price_per_unit.map(format_currency).unwrap_or_default();
                                        let amount = format_currency(item.amount);
                                        view! {
                                            <TableRow>
                                                <TableCell>{date}</TableCell>
                                                <TableCell>{description}</TableCell>
                                                <TableCell>{quantity}</TableCell>
                                                <TableCell>{rate}</TableCell>
                                                <TableCell>{amount}</TableCell>
                                            </TableRow>
                                        }
                                    }).collect_view()}
                                </TableBody>
                            </Table>
                        </div>

                        <h3 class="section-title">"Payments"</h3>
                        {if payments.is_empty() {
                            view! { <div class="empty-state">"No payments yet"</div> }.into_any()
                        } else {
                            view! {
                                <div class="table-wrapper">
                                    <Table attr:style="width: 100%;">
                                        <TableHeader>
                                            <TableRow>
                                                <TableHeaderCell>"Date"</TableHeaderCell>
                                                <TableHeaderCell>"Method"</TableHeaderCell>
                                                <TableHeaderCell>"Transaction"</TableHeaderCell>
                                                <TableHeaderCell>"Amount"</TableHeaderCell>
                                                <TableHeaderCell>"Notes"</TableHeaderCell>
                                            </TableRow>
                                        </TableHeader>
                                        <TableBody>
                                            {payments.into_iter().map(|p| {
                                                let date = p.payment_date.as_deref().map(format_datetime).unwrap_or_default();
                                                let method = p.payment_method.label();
                                                let transaction = p.transaction_id.clone().unwrap_or_default();
                                                let amount = format_currency(p.amount);
                                                let notes = p.notes.clone().unwrap_or_default();
                                                view! {
                                                    <TableRow>
                                                        <TableCell>{date}</TableCell>
                                                        <TableCell>{method}</TableCell>
                                                        <TableCell>{transaction}</TableCell>
                                                        <TableCell>{amount}</TableCell>
                                                        <TableCell>{notes}</TableCell>
                                                    </TableRow>
                                                }
                                            }).collect_view()}
                                        </TableBody>
                                    </Table>
                                </div>
                            }.into_any()
                        }}
                    }
                })}
            </div>
        </PageFrame>
    }
}
