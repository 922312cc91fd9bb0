//! Sales by Customer page

use contracts::reports::sales::SalesRecord;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::state::customer_report_state;
use crate::reports::sales::api;
use crate::shared::format::{currency, short_date};

fn sale_row(sale: SalesRecord) -> impl IntoView {
    view! {
        <TableRow>
            <TableCell><TableCellLayout>{sale.id}</TableCellLayout></TableCell>
            <TableCell><TableCellLayout>{short_date(&sale.date)}</TableCellLayout></TableCell>
            <TableCell><TableCellLayout>{sale.region}</TableCellLayout></TableCell>
            <TableCell><TableCellLayout>{sale.product}</TableCellLayout></TableCell>
            <TableCell><TableCellLayout>{sale.category}</TableCellLayout></TableCell>
            <TableCell><TableCellLayout>{sale.customer}</TableCellLayout></TableCell>
            <TableCell><TableCellLayout>{sale.salesperson}</TableCellLayout></TableCell>
            <TableCell><TableCellLayout>{sale.channel}</TableCellLayout></TableCell>
            <TableCell>
                <TableCellLayout>
                    <span style="display: block; text-align: right;">{currency(sale.amount)}</span>
                </TableCellLayout>
            </TableCell>
        </TableRow>
    }
}

#[component]
pub fn SalesByCustomerPage() -> impl IntoView {
    let state = RwSignal::new(customer_report_state());
    let customer = RwSignal::new(String::new());

    let on_submit = move |_| {
        let started = state
            .try_update(|s| {
                s.key = customer.get_untracked();
                s.submit()
            })
            .flatten();
        let Some((ticket, key)) = started else {
            return;
        };

        log::debug!("Fetching sales for customer '{}'", key);
        spawn_local(async move {
            let outcome = api::fetch_sales_by_customer(&key).await;
            state.update(|s| {
                if !s.apply(ticket, outcome) {
                    log::debug!("Dropped stale response for customer '{}'", key);
                }
            });
        });
    };

    let on_cancel = move |_| {
        customer.set(String::new());
        state.update(|s| s.cancel());
    };

    let submit_disabled = Signal::derive(move || customer.with(|c| c.trim().is_empty()));

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Sales by Customer"</h1>
            </div>

            <div class="page__content">
                <div class="form__group" style="max-width: 420px;">
                    <label class="form__label">"Customer Name"</label>
                    <Input value=customer placeholder="Enter customer name" />
                </div>
                <div style="display: flex; gap: 8px; margin: 12px 0;">
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=submit_disabled
                        on_click=on_submit
                    >
                        "Submit"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=on_cancel>
                        "Cancel"
                    </Button>
                </div>

                <Show when=move || state.with(|s| !s.error_message.is_empty())>
                    <div class="report__error" style="padding: 12px; color: var(--colorPaletteRedForeground1);">
                        {move || state.with(|s| s.error_message.clone())}
                    </div>
                </Show>

                <Show when=move || state.with(|s| s.is_loading())>
                    <p>"Loading..."</p>
                </Show>

                <Show
                    when=move || state.with(|s| s.placeholder().is_none())
                    fallback=move || view! {
                        <div style="padding: 24px; text-align: center; color: var(--colorNeutralForeground3);">
                            {move || state.with(|s| s.placeholder().unwrap_or_default())}
                        </div>
                    }
                >
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Customer Id"</TableHeaderCell>
                                <TableHeaderCell>"Date"</TableHeaderCell>
                                <TableHeaderCell>"Region"</TableHeaderCell>
                                <TableHeaderCell>"Product"</TableHeaderCell>
                                <TableHeaderCell>"Category"</TableHeaderCell>
                                <TableHeaderCell>"Customer Name"</TableHeaderCell>
                                <TableHeaderCell>"Sales Person"</TableHeaderCell>
                                <TableHeaderCell>"Channel"</TableHeaderCell>
                                <TableHeaderCell>"Total Sales"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                state
                                    .with(|s| s.rows.clone())
                                    .into_iter()
                                    .map(sale_row)
                                    .collect_view()
                            }}
                        </TableBody>
                    </Table>
                </Show>
            </div>
        </div>
    }
}
