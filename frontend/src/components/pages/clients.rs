use leptos::prelude::*;
use scheduler_shared::Client;
use scheduler_shared::date::MISSING;

use crate::api::use_api;
use crate::components::widgets::Panel;
use crate::loader::views::load_clients;
use crate::loader::{LoadState, LocalTasks};
use crate::render::format_currency;

#[component]
pub fn ClientsPage() -> impl IntoView {
    let clients = RwSignal::new(LoadState::default());
    load_clients(&use_api(), &LocalTasks, clients);

    view! { <Panel title="Clients" state=clients render=clients_table /> }
}

fn or_missing(value: Option<String>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| MISSING.to_string())
}

fn clients_table(clients: Vec<Client>) -> impl IntoView {
    let rows = clients
        .into_iter()
        .map(|client| {
            view! {
                <tr>
                    <td class="font-medium">{client.name}</td>
                    <td>{or_missing(client.email)}</td>
                    <td>{or_missing(client.phone)}</td>
                    <td class="text-sm">{or_missing(client.address)}</td>
                    <td class="text-right">{client.job_count}</td>
                    <td class="text-right">{format_currency(client.lifetime_spend)}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="overflow-x-auto">
            <table class="table table-zebra w-full">
                <thead>
                    <tr>
                        <th>"Client"</th>
                        <th>"Email"</th>
                        <th>"Phone"</th>
                        <th>"Address"</th>
                        <th class="text-right">"Jobs"</th>
                        <th class="text-right">"Lifetime Spend"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}
