use leptos::prelude::*;
use scheduler_shared::Quote;

use crate::api::use_api;
use crate::components::widgets::{Panel, StatusBadge};
use crate::loader::views::load_quotes;
use crate::loader::{LoadState, LocalTasks};
use crate::render::format_currency;

#[component]
pub fn QuotesPage() -> impl IntoView {
    let quotes = RwSignal::new(LoadState::default());
    load_quotes(&use_api(), &LocalTasks, quotes);

    view! { <Panel title="Quotes" state=quotes render=quotes_table /> }
}

fn quotes_table(quotes: Vec<Quote>) -> impl IntoView {
    let rows = quotes
        .into_iter()
        .map(|quote| {
            let amount = format_currency(quote.effective_amount());
            let initial = quote
                .final_quote_amount
                .is_some()
                .then(|| format_currency(quote.initial_quote_amount));
            view! {
                <tr>
                    <td class="font-medium">{quote.name}</td>
                    <td>{quote.client_name.unwrap_or_default()}</td>
                    <td>{quote.cabinetry_type.unwrap_or_default()}</td>
                    <td class="text-right">
                        {amount}
                        {initial.map(|initial| view! {
                            <div class="text-xs text-base-content/60 line-through">{initial}</div>
                        })}
                    </td>
                    <td><StatusBadge status=quote.status /></td>
                    <td>{if quote.has_job { "Yes" } else { "" }}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="overflow-x-auto">
            <table class="table table-zebra w-full">
                <thead>
                    <tr>
                        <th>"Quote"</th>
                        <th>"Client"</th>
                        <th>"Type"</th>
                        <th class="text-right">"Amount"</th>
                        <th>"Status"</th>
                        <th>"Job"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}
