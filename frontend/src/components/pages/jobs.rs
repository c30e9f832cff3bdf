use leptos::prelude::*;
use scheduler_shared::Job;
use scheduler_shared::date::display_optional;

use crate::api::use_api;
use crate::components::widgets::{Panel, StatusBadge};
use crate::loader::views::load_jobs;
use crate::loader::{LoadState, LocalTasks};
use crate::render::{format_currency, team_label};

#[component]
pub fn JobsPage() -> impl IntoView {
    let jobs = RwSignal::new(LoadState::default());
    load_jobs(&use_api(), &LocalTasks, jobs);

    view! { <Panel title="Jobs" state=jobs render=jobs_table /> }
}

fn jobs_table(jobs: Vec<Job>) -> impl IntoView {
    let rows = jobs
        .into_iter()
        .map(|job| {
            let status = job.status.clone().unwrap_or_default();
            let needs_update = job.client_needs_update;
            view! {
                <tr>
                    <td>
                        <div class="font-medium">{job.name}</div>
                        <div class="text-xs text-base-content/60">
                            {job.cabinetry_type.unwrap_or_default()}
                        </div>
                    </td>
                    <td>{job.client_name.unwrap_or_default()}</td>
                    <td><StatusBadge status=job.stage /></td>
                    <td>
                        <StatusBadge status=status />
                        <Show when=move || needs_update>
                            <span class="badge badge-outline badge-warning ml-1">"Update client"</span>
                        </Show>
                    </td>
                    <td>{display_optional(job.build_start_date.as_deref())}</td>
                    <td>
                        {display_optional(job.fitting_date.as_deref())}
                        <div class="text-xs text-base-content/60">
                            {job.fitting_date_status.unwrap_or_default()}
                        </div>
                    </td>
                    <td class="text-sm">
                        <div>"Build: " {team_label(&job.build_team)}</div>
                        <div>"Fit: " {team_label(&job.fit_team)}</div>
                    </td>
                    <td class="text-right">{job.job_price.map(format_currency)}</td>
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
                        <th>"Stage"</th>
                        <th>"Status"</th>
                        <th>"Build Start"</th>
                        <th>"Fitting"</th>
                        <th>"Team"</th>
                        <th class="text-right">"Price"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}
