//! Sales by Region page

use contracts::reports::sales::RegionAggregate;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::state::{region_report_state, RegionOptions};
use crate::reports::sales::api;
use crate::shared::format::currency;

fn aggregate_row(aggregate: RegionAggregate) -> impl IntoView {
    view! {
        <TableRow>
            <TableCell><TableCellLayout>{aggregate.salesperson}</TableCellLayout></TableCell>
            <TableCell>
                <TableCellLayout>
                    <span style="display: block; text-align: right;">{currency(aggregate.total_sales)}</span>
                </TableCellLayout>
            </TableCell>
        </TableRow>
    }
}

#[component]
pub fn SalesByRegionPage() -> impl IntoView {
    let state = RwSignal::new(region_report_state());
    let options = RwSignal::new(RegionOptions::default());
    let region = RwSignal::new(String::new());

    // Load regions on mount
    Effect::new(move |_| {
        spawn_local(async move {
            let result = api::fetch_regions().await;
            options.set(RegionOptions::from_result(result));
        });
    });

    let on_submit = move |_| {
        let started = state
            .try_update(|s| {
                s.key = region.get_untracked();
                s.submit()
            })
            .flatten();
        let Some((ticket, key)) = started else {
            return;
        };

        log::debug!("Fetching sales for region '{}'", key);
        spawn_local(async move {
            let outcome = api::fetch_sales_by_region(&key).await;
            state.update(|s| {
                if !s.apply(ticket, outcome) {
                    log::debug!("Dropped stale response for region '{}'", key);
                }
            });
        });
    };

    let on_cancel = move |_| {
        region.set(String::new());
        state.update(|s| s.cancel());
    };

    let submit_disabled = Signal::derive(move || region.with(|r| r.trim().is_empty()));

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Sales by Region"</h1>
            </div>

            <div class="page__content">
                <Show when=move || options.with(|o| !o.error_message.is_empty())>
                    <div class="report__error" style="padding: 12px; color: var(--colorPaletteRedForeground1);">
                        {move || options.with(|o| o.error_message.clone())}
                    </div>
                </Show>

                <div class="form__group" style="max-width: 420px;">
                    <label class="form__label">"Region"</label>
                    <Select value=region>
                        <option value="">"Select a region"</option>
                        {move || {
                            options
                                .with(|o| o.regions.clone())
                                .into_iter()
                                .map(|r| {
                                    let value = r.clone();
                                    view! { <option value=value>{r}</option> }
                                })
                                .collect_view()
                        }}
                    </Select>
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
                                <TableHeaderCell>"Sales Person"</TableHeaderCell>
                                <TableHeaderCell>"Total Sales"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                state
                                    .with(|s| s.rows.clone())
                                    .into_iter()
                                    .map(aggregate_row)
                                    .collect_view()
                            }}
                        </TableBody>
                    </Table>
                </Show>
            </div>
        </div>
    }
}
