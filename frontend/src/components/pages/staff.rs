use leptos::prelude::*;
use scheduler_shared::{StaffMember, StaffWorkload};

use crate::api::use_api;
use crate::components::widgets::Panel;
use crate::loader::LocalTasks;
use crate::loader::views::{StaffPanels, load_staff};
use crate::render::status_text;

#[component]
pub fn StaffPage() -> impl IntoView {
    let panels = StaffPanels::new();
    load_staff(&use_api(), &LocalTasks, panels);

    view! {
        <div class="grid gap-6 lg:grid-cols-2">
            <Panel title="Staff" state=panels.staff render=staff_table />
            <Panel title="Workload" state=panels.workload render=workload_table />
        </div>
    }
}

fn staff_table(staff: Vec<StaffMember>) -> impl IntoView {
    let rows = staff
        .into_iter()
        .map(|member| {
            let name = member.display_name().to_string();
            view! {
                <tr>
                    <td>
                        <div class="font-medium">{name}</div>
                        <div class="text-xs text-base-content/60">{member.username}</div>
                    </td>
                    <td>{member.email.unwrap_or_default()}</td>
                    <td><span class="badge badge-ghost">{status_text(&member.role)}</span></td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <table class="table table-zebra w-full">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Email"</th>
                    <th>"Role"</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}

fn workload_table(rows: Vec<StaffWorkload>) -> impl IntoView {
    let rows = rows
        .into_iter()
        .map(|row| {
            view! {
                <tr>
                    <td class="font-medium">{row.name}</td>
                    <td>{status_text(&row.role)}</td>
                    <td class="text-right">{row.active_assignments}</td>
                    <td class="text-right">{row.upcoming_absences}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <table class="table table-zebra w-full">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Role"</th>
                    <th class="text-right">"Active"</th>
                    <th class="text-right">"Absences"</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}
