use leptos::prelude::*;
use scheduler_shared::Payment;
use scheduler_shared::date::display_optional;

use crate::api::use_api;
use crate::components::widgets::{Panel, StatusBadge};
use crate::loader::views::load_payments;
use crate::loader::{LoadState, LocalTasks};
use crate::render::format_currency;

#[component]
pub fn PaymentsPage() -> impl IntoView {
    let payments = RwSignal::new(LoadState::default());
    load_payments(&use_api(), &LocalTasks, payments);

    view! { <Panel title="Payments" state=payments render=payments_table /> }
}

fn payments_table(payments: Vec<Payment>) -> impl IntoView {
    let rows = payments
        .into_iter()
        .map(|payment| {
            let job = payment
                .job_name
                .unwrap_or_else(|| format!("Job #{}", payment.job_id));
            view! {
                <tr>
                    <td>
                        <div class="font-medium">{job}</div>
                        <div class="text-xs text-base-content/60">
                            {payment.client_name.unwrap_or_default()}
                        </div>
                    </td>
                    <td>{payment.kind}</td>
                    <td class="text-right">{format_currency(payment.amount)}</td>
                    <td>{display_optional(payment.due_date.as_deref())}</td>
                    <td>{display_optional(payment.paid_date.as_deref())}</td>
                    <td><StatusBadge status=payment.status /></td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="overflow-x-auto">
            <table class="table table-zebra w-full">
                <thead>
                    <tr>
                        <th>"Job"</th>
                        <th>"Stage"</th>
                        <th class="text-right">"Amount"</th>
                        <th>"Due"</th>
                        <th>"Paid"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}
