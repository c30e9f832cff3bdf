use leptos::prelude::*;
use scheduler_shared::date::display_day_heading;
use scheduler_shared::{CalendarEntry, CurrentJob, DashboardSummary, IncomeHistory, MonthlyAmounts};

use crate::api::use_api;
use crate::components::widgets::{BarChart, IncomeSplit, Panel, ProgressBar, StatusBadge};
use crate::loader::LocalTasks;
use crate::loader::views::{DashboardPanels, load_dashboard};
use crate::render::{
    SummaryCounters, cashflow_view, deadline_label, format_currency, group_calendar,
    income_chart, team_label,
};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let panels = DashboardPanels::new();
    load_dashboard(&use_api(), &LocalTasks, panels);

    view! {
        <div class="space-y-6">
            <Panel title="Overview" state=panels.summary render=summary_stats />
            <div class="grid gap-6 lg:grid-cols-2">
                <Panel title="Cashflow Forecast" state=panels.forecast render=cashflow_panel />
                <Panel title="Income History" state=panels.income render=income_panel />
            </div>
            <div class="grid gap-6 lg:grid-cols-2">
                <Panel title="This Week" state=panels.calendar render=calendar_panel />
                <Panel title="Workshop" state=panels.current_jobs render=current_jobs_panel />
            </div>
        </div>
    }
}

fn summary_stats(summary: DashboardSummary) -> impl IntoView {
    let counters = SummaryCounters::from(&summary);
    view! {
        <div class="stats stats-vertical md:stats-horizontal w-full">
            <div class="stat">
                <div class="stat-title">"Active Jobs"</div>
                <div class="stat-value text-primary" id="active-jobs-count">{counters.active_jobs}</div>
            </div>
            <div class="stat">
                <div class="stat-title">"Pending Quotes"</div>
                <div class="stat-value" id="pending-quotes-count">{counters.pending_quotes}</div>
            </div>
            <div class="stat">
                <div class="stat-title">"Upcoming Payments"</div>
                <div class="stat-value text-success" id="upcoming-payments">{counters.upcoming_payments}</div>
            </div>
            <div class="stat">
                <div class="stat-title">"Clients Needing Updates"</div>
                <div class="stat-value text-warning" id="clients-needing-updates">
                    {counters.clients_needing_updates}
                </div>
            </div>
        </div>
    }
}

fn cashflow_panel(forecast: Vec<MonthlyAmounts>) -> impl IntoView {
    let cashflow = cashflow_view(&forecast);

    let breakdown = cashflow.current_month.map(|month| {
        let bars = month
            .stages
            .iter()
            .map(|stage| {
                view! { <ProgressBar value=stage.percent caption=stage.caption() /> }
            })
            .collect_view();
        view! {
            <div class="space-y-2">
                <div class="flex justify-between text-sm">
                    <span>{month.month}</span>
                    <span class="font-semibold">{month.total}</span>
                </div>
                {bars}
            </div>
        }
    });

    view! {
        <div class="space-y-4">
            <BarChart chart=cashflow.chart />
            {breakdown}
        </div>
    }
}

fn income_panel(history: IncomeHistory) -> impl IntoView {
    let chart = income_chart(&history);
    view! {
        <div class="space-y-4">
            <div class="stat p-0">
                <div class="stat-title">"Total Income"</div>
                <div class="stat-value text-2xl">{format_currency(history.total_income)}</div>
            </div>
            <IncomeSplit chart=chart />
        </div>
    }
}

fn calendar_panel(entries: Vec<CalendarEntry>) -> impl IntoView {
    if entries.is_empty() {
        return view! { <p class="text-base-content/60">"Nothing scheduled this week."</p> }
            .into_any();
    }

    group_calendar(&entries)
        .into_iter()
        .map(|(date, day)| {
            let items = day
                .into_iter()
                .map(|entry| {
                    view! {
                        <li class="flex flex-wrap items-center gap-2 py-1">
                            <span class="font-medium">{entry.job_name}</span>
                            <span class="text-base-content/60">{entry.client_name}</span>
                            <StatusBadge status=entry.stage />
                            <span class="ml-auto text-sm">{team_label(&entry.team)}</span>
                        </li>
                    }
                })
                .collect_view();
            view! {
                <div class="mb-3">
                    <h4 class="font-semibold border-b border-base-200">{display_day_heading(&date)}</h4>
                    <ul>{items}</ul>
                </div>
            }
        })
        .collect_view()
        .into_any()
}

fn current_jobs_panel(jobs: Vec<CurrentJob>) -> impl IntoView {
    let rows = jobs
        .into_iter()
        .map(|job| {
            view! {
                <tr>
                    <td>
                        <div class="font-medium">{job.job_name}</div>
                        <div class="text-xs text-base-content/60">{job.client_name}</div>
                    </td>
                    <td><StatusBadge status=job.stage /></td>
                    <td class="w-40"><ProgressBar value=job.progress /></td>
                    <td>{deadline_label(job.deadline.as_deref())}</td>
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
                        <th>"Progress"</th>
                        <th>"Deadline"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}
