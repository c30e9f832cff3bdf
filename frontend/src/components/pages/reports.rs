use leptos::prelude::*;
use scheduler_shared::date::display_optional;
use scheduler_shared::{ClientUpdate, IncomeHistory, JobPerformance, QuoteConversion};

use crate::api::use_api;
use crate::components::widgets::{IncomeSplit, Panel, ProgressBar, StatusBadge};
use crate::loader::LocalTasks;
use crate::loader::views::{ReportPanels, load_reports};
use crate::render::{
    format_currency, format_percent, format_signed_percent, income_chart, income_rows,
};

#[component]
pub fn ReportsPage() -> impl IntoView {
    let panels = ReportPanels::new();
    load_reports(&use_api(), &LocalTasks, panels);

    view! {
        <div class="space-y-6">
            <div class="grid gap-6 lg:grid-cols-2">
                <Panel title="Quote Conversion" state=panels.conversion render=conversion_panel />
                <Panel title="Job Performance" state=panels.performance render=performance_panel />
            </div>
            <Panel title="Clients Needing Updates" state=panels.client_updates render=client_updates_table />
            <Panel title="Income History" state=panels.income render=income_table />
        </div>
    }
}

fn conversion_panel(stats: QuoteConversion) -> impl IntoView {
    view! {
        <div class="space-y-4">
            <div class="stats stats-vertical md:stats-horizontal w-full">
                <div class="stat">
                    <div class="stat-title">"Quotes"</div>
                    <div class="stat-value text-2xl">{stats.total_quotes}</div>
                    <div class="stat-desc">
                        {stats.accepted_quotes} " accepted, " {stats.rejected_quotes} " rejected, "
                        {stats.pending_quotes} " pending"
                    </div>
                </div>
                <div class="stat">
                    <div class="stat-title">"Average Value"</div>
                    <div class="stat-value text-2xl">{format_currency(stats.avg_quote_value)}</div>
                    <div class="stat-desc">"Average discount " {format_percent(stats.avg_discount)}</div>
                </div>
            </div>
            <ProgressBar
                value=stats.conversion_rate
                caption=format!("Conversion: {}", format_percent(stats.conversion_rate))
            />
        </div>
    }
}

fn performance_panel(stats: JobPerformance) -> impl IntoView {
    let prices = stats
        .avg_prices_by_type
        .into_iter()
        .map(|(kind, price)| {
            view! {
                <tr>
                    <td>{kind}</td>
                    <td class="text-right">{format_currency(price)}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="space-y-4">
            <div class="stats stats-vertical md:stats-horizontal w-full">
                <div class="stat">
                    <div class="stat-title">"Completed Jobs"</div>
                    <div class="stat-value text-2xl">{stats.completed_jobs}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">"Build Variance"</div>
                    <div class="stat-value text-2xl">{format_signed_percent(stats.avg_build_variance)}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">"Fitting Variance"</div>
                    <div class="stat-value text-2xl">{format_signed_percent(stats.avg_fitting_variance)}</div>
                </div>
            </div>
            <table class="table table-sm w-full">
                <thead>
                    <tr>
                        <th>"Type"</th>
                        <th class="text-right">"Average Price"</th>
                    </tr>
                </thead>
                <tbody>{prices}</tbody>
            </table>
        </div>
    }
}

fn client_updates_table(updates: Vec<ClientUpdate>) -> impl IntoView {
    if updates.is_empty() {
        return view! { <p class="text-base-content/60">"All clients are up to date."</p> }
            .into_any();
    }

    let rows = updates
        .into_iter()
        .map(|update| {
            view! {
                <tr>
                    <td class="font-medium">{update.job_name}</td>
                    <td>{update.client_name}</td>
                    <td>{display_optional(update.fitting_date.as_deref())}</td>
                    <td>
                        {update.fitting_date_status.map(|status| view! { <StatusBadge status=status /> })}
                    </td>
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
                        <th>"Client"</th>
                        <th>"Fitting"</th>
                        <th>"Fitting Status"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
    .into_any()
}

fn income_table(history: IncomeHistory) -> impl IntoView {
    let chart = income_chart(&history);
    let rows = income_rows(&history)
        .into_iter()
        .map(|row| {
            view! {
                <tr>
                    <td>{row.month}</td>
                    <td class="text-right font-medium">{row.total}</td>
                    <td class="text-right">{row.deposit}</td>
                    <td class="text-right">{row.build}</td>
                    <td class="text-right">{row.fit}</td>
                    <td class="text-right">{row.completion}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="grid gap-6 lg:grid-cols-3">
            <div class="overflow-x-auto lg:col-span-2">
                <table class="table table-zebra w-full" id="income-table">
                    <thead>
                        <tr>
                            <th>"Month"</th>
                            <th class="text-right">"Total"</th>
                            <th class="text-right">"Deposits"</th>
                            <th class="text-right">"Build"</th>
                            <th class="text-right">"Fit"</th>
                            <th class="text-right">"Completion"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
                <p class="mt-2 text-sm">
                    "Total income: "
                    <span class="font-semibold">{format_currency(history.total_income)}</span>
                </p>
            </div>
            <IncomeSplit chart=chart />
        </div>
    }
}

