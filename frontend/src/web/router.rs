//! 视图路由服务
//!
//! 封装了 web_sys 的 History API：所有对 window.history 的操作都集中在此模块。
//! 导航流程：解析视图 -> 推入 History -> 更新信号 -> 出口重新挂载视图（视图挂载时加载数据）。

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::View;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 推送 History 状态
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            if history
                .push_state_with_url(&JsValue::NULL, "", Some(path))
                .is_err()
            {
                log::warn!("[Router] Could not push history state for {}", path);
            }
        }
    }
}

/// 视图路由服务
///
/// 同一时刻只有一个激活视图。每次 `navigate_to` 都会写入信号，
/// 即使目标就是当前视图，出口也会重新渲染并重新加载数据。
#[derive(Clone, Copy)]
pub struct RouterService {
    current_view: ReadSignal<View>,
    set_view: WriteSignal<View>,
}

impl RouterService {
    fn new() -> Self {
        let initial_view = View::from_path(&current_path());
        let (current_view, set_view) = signal(initial_view);
        Self {
            current_view,
            set_view,
        }
    }

    /// 获取当前视图信号
    pub fn current_view(&self) -> ReadSignal<View> {
        self.current_view
    }

    /// 按视图标识导航；未知标识回落到仪表盘
    pub fn navigate(&self, id: &str) {
        self.navigate_to(View::from_id(id));
    }

    pub fn navigate_to(&self, view: View) {
        log::info!("[Router] Navigating to {}", view);
        push_history_state(&view.to_path());
        self.set_view.set(view);
    }

    /// 浏览器后退/前进时按 URL 重新选择视图
    fn init_popstate_listener(&self) {
        let set_view = self.set_view;

        let closure = Closure::<dyn Fn()>::new(move || {
            let view = View::from_path(&current_path());
            log::info!("[Router] History changed, showing {}", view);
            set_view.set(view);
        });

        if let Some(window) = web_sys::window() {
            if window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
                .is_err()
            {
                log::warn!("[Router] Could not register popstate listener");
            }
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }
}

/// 提供路由服务到 Context 并初始化监听器（应用生命周期内只调用一次）
pub fn provide_router() -> RouterService {
    let router = RouterService::new();
    router.init_popstate_listener();
    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure provide_router was called.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由出口组件
///
/// 根据当前视图渲染对应的页面。
#[component]
pub fn RouterOutlet(
    /// 视图匹配函数：接收当前视图，返回对应页面
    matcher: fn(View) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_view().get();
        matcher(current)
    }
}

/// 导航链接，激活视图带高亮
#[component]
pub fn NavLink(view: View) -> impl IntoView {
    let router = use_router();
    let current = router.current_view();

    let on_click = move |ev: MouseEvent| {
        ev.prevent_default();
        router.navigate(view.id());
    };

    view! {
        <li>
            <a
                href=view.to_path()
                data-view=view.id()
                class=move || if current.get() == view { "menu-active" } else { "" }
                on:click=on_click
            >
                {view.title()}
            </a>
        </li>
    }
}
