use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::pages::{
    ClientsPage, DashboardPage, JobsPage, PaymentsPage, QuotesPage, ReportsPage, StaffPage,
};
use crate::session::{use_gate, use_session};
use crate::web::route::View;
use crate::web::router::{NavLink, RouterOutlet};

/// 视图匹配函数
///
/// 根据当前视图返回对应的页面，页面挂载时加载自己的数据。
fn view_matcher(view: View) -> AnyView {
    match view {
        View::Dashboard => view! { <DashboardPage /> }.into_any(),
        View::Quotes => view! { <QuotesPage /> }.into_any(),
        View::Jobs => view! { <JobsPage /> }.into_any(),
        View::Clients => view! { <ClientsPage /> }.into_any(),
        View::Staff => view! { <StaffPage /> }.into_any(),
        View::Payments => view! { <PaymentsPage /> }.into_any(),
        View::Reports => view! { <ReportsPage /> }.into_any(),
    }
}

/// 已登录后的应用外壳：导航、当前用户、登出、视图出口
#[component]
pub fn Shell() -> impl IntoView {
    let session = use_session();
    let gate = use_gate();
    let (is_logging_out, set_is_logging_out) = signal(false);

    let user_name = move || {
        session
            .state
            .with(|s| s.user.as_ref().map(|u| u.display_name().to_string()))
    };

    let on_logout = move |_| {
        set_is_logging_out.set(true);
        let gate = gate.clone();
        spawn_local(async move {
            gate.logout().await;
            set_is_logging_out.set(false);
        });
    };

    let links = View::ALL
        .into_iter()
        .map(|view| view! { <NavLink view=view /> })
        .collect_view();

    view! {
        <div class="min-h-screen bg-base-200 font-sans" id="main-content">
            <div class="navbar bg-base-100 shadow-xl">
                <div class="flex-1 gap-2">
                    <a class="btn btn-ghost text-xl">"Workshop Scheduler"</a>
                    <ul class="menu menu-horizontal px-1 hidden md:flex">{links}</ul>
                </div>
                <div class="flex-none gap-2">
                    {move || user_name().map(|name| view! {
                        <span class="badge badge-neutral hidden md:inline-flex">{name}</span>
                    })}
                    <button
                        on:click=on_logout
                        class="btn btn-outline btn-error btn-sm"
                        id="logout-btn"
                        disabled=move || is_logging_out.get()
                    >
                        "Log out"
                    </button>
                </div>
            </div>

            <main class="max-w-7xl mx-auto p-4 md:p-8">
                <RouterOutlet matcher=view_matcher />
            </main>
        </div>
    }
}
