//! 车间排程面板前端应用
//!
//! 采用 Context-Driven 的架构：
//! - `session`: 会话网关，会话状态的唯一来源
//! - `api`: 所有请求经过的 API 客户端，401 时使会话失效
//! - `loader`: 按视图获取数据，失败时回落到示例数据
//! - `web::route` / `web::router`: 视图定义与路由服务
//! - `components`: UI 组件层

pub mod api;
pub mod config;
pub mod loader;
pub mod render;
pub mod samples;
pub mod session;

pub mod components {
    pub mod login;
    pub mod shell;
    pub mod widgets;

    pub mod pages {
        mod clients;
        mod dashboard;
        mod jobs;
        mod payments;
        mod quotes;
        mod reports;
        mod staff;

        pub use clients::ClientsPage;
        pub use dashboard::DashboardPage;
        pub use jobs::JobsPage;
        pub use payments::PaymentsPage;
        pub use quotes::QuotesPage;
        pub use reports::ReportsPage;
        pub use staff::StaffPage;
    }
}

// 浏览器 API 封装
pub mod web {
    pub mod http;
    pub mod route;
    pub mod router;
}

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::components::login::LoginPage;
use crate::components::shell::Shell;
use crate::config::AppConfig;
use crate::session::{SessionContext, SessionGate, SessionStore};
use crate::web::http::FetchClient;
use crate::web::router::provide_router;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_build_env();

    // 1. 会话状态的唯一来源
    let session = SessionContext::new();
    provide_context(session);

    // 2. API 客户端：安装 401 钩子
    let api = ApiClient::new(FetchClient, config.api_base.clone()).on_unauthorized(move || {
        log::info!("[Session] Session expired, showing login");
        session.expire();
    });
    provide_context(api.clone());

    // 3. 会话网关
    let gate = SessionGate::new(api, session);
    provide_context(gate.clone());

    // 4. 路由服务（popstate 监听器只注册一次）
    provide_router();

    // 5. 页面加载时向服务端确认会话
    spawn_local(async move { gate.check_session().await });

    let status = session.status_memo();

    move || {
        let status = status.get();
        if status.shows_shell() {
            view! { <Shell /> }.into_any()
        } else if status.shows_login() {
            view! { <LoginPage /> }.into_any()
        } else {
            view! {
                <div class="flex items-center justify-center min-h-screen">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                </div>
            }
            .into_any()
        }
    }
}
