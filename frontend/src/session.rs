//! 会话模块
//!
//! 会话的真实状态保存在服务端，客户端只维护一份用于界面显示的镜像。
//! `SessionStore` 是这份镜像的唯一来源，`SessionGate` 负责会话探测、登录与登出，
//! 视图层只读取 `SessionContext` 中的状态。

use gloo_storage::{LocalStorage, Storage};
use leptos::prelude::*;
use scheduler_shared::protocol::{HealthRequest, HttpMethod};
use scheduler_shared::{LoginRequest, LogoutRequest, UserProfile};

use crate::api::{ApiClient, ApiError};
use crate::web::http::{FetchClient, HttpClient};

const STORAGE_USERNAME_KEY: &str = "scheduler_last_username";

pub const MISSING_CREDENTIALS_MESSAGE: &str = "Please enter both username and password";
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";
pub const UNREACHABLE_MESSAGE: &str = "Unable to reach the server";

/// 会话状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionStatus {
    /// 页面刚加载，会话探测尚未返回
    #[default]
    Checking,
    Authenticated,
    Unauthenticated,
}

impl SessionStatus {
    /// 是否显示登录表单（同时隐藏主界面）
    pub fn shows_login(&self) -> bool {
        matches!(self, SessionStatus::Unauthenticated)
    }

    /// 是否显示主界面
    pub fn shows_shell(&self) -> bool {
        matches!(self, SessionStatus::Authenticated)
    }
}

/// 会话状态的唯一来源
pub trait SessionStore: Clone + Send + Sync + 'static {
    fn status(&self) -> SessionStatus;
    fn authenticate(&self, user: Option<UserProfile>);
    fn expire(&self);
}

/// 登录失败原因
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("{}", MISSING_CREDENTIALS_MESSAGE)]
    MissingCredentials,
    #[error("{0}")]
    Rejected(String),
    #[error("{}", UNREACHABLE_MESSAGE)]
    Unreachable,
}

impl From<ApiError> for LoginError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Transport(_) => LoginError::Unreachable,
            other => LoginError::Rejected(
                other
                    .server_message()
                    .unwrap_or(LOGIN_FAILED_MESSAGE)
                    .to_string(),
            ),
        }
    }
}

// =========================================================
// 会话网关 (Session Gate)
// =========================================================

pub struct SessionGate<C, S> {
    api: ApiClient<C>,
    store: S,
}

impl<C, S: Clone> Clone for SessionGate<C, S> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            store: self.store.clone(),
        }
    }
}

impl<C: HttpClient, S: SessionStore> SessionGate<C, S> {
    pub fn new(api: ApiClient<C>, store: S) -> Self {
        Self { api, store }
    }

    /// 探测会话；任何失败都回落到未认证，从不向调用方报错
    pub async fn check_session(&self) {
        log::info!("[Session] Checking authentication status...");
        match self.api.call(&HealthRequest).await {
            Ok(health) => {
                log::info!("[Session] User is authenticated ({})", health.status);
                self.store.authenticate(health.user);
            }
            Err(ApiError::Unauthorized) => {
                log::info!("[Session] User needs to log in");
                self.store.expire();
            }
            Err(err) => {
                log::error!("[Session] Error checking auth status: {}", err);
                self.store.expire();
            }
        }
    }

    /// 提交凭据；空用户名或空密码不会发出请求
    pub async fn login(&self, username: &str, password: &str) -> Result<(), LoginError> {
        let username = username.trim();
        let password = password.trim();
        if username.is_empty() || password.is_empty() {
            return Err(LoginError::MissingCredentials);
        }

        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        match self.api.call_unguarded(&request).await {
            Ok(response) => {
                log::info!(
                    "[Session] Login successful: {}",
                    response.message.as_deref().unwrap_or("ok")
                );
                self.store.authenticate(response.user);
                Ok(())
            }
            Err(err) => {
                log::warn!("[Session] Login error: {}", err);
                Err(LoginError::from(err))
            }
        }
    }

    /// 登出；无论服务端如何响应，本地会话都会被清除
    pub async fn logout(&self) {
        log::info!("[Session] Logging out...");
        let request = LogoutRequest::default();

        match self.api.send_as(&request, HttpMethod::Post).await {
            Ok(response) if response.status == 405 => {
                log::warn!("[Session] Logout POST not allowed, retrying with GET");
                match self.api.send_as(&request, HttpMethod::Get).await {
                    Ok(response) if response.ok() => {}
                    Ok(response) => {
                        log::warn!("[Session] Logout GET failed with status {}", response.status)
                    }
                    Err(err) => log::warn!("[Session] Logout GET failed: {}", err),
                }
            }
            Ok(response) if !response.ok() => {
                log::warn!("[Session] Logout failed with status {}", response.status);
            }
            Ok(_) => log::info!("[Session] Logout successful"),
            Err(err) => log::warn!("[Session] Logout error: {}", err),
        }

        self.store.expire();
    }
}

// =========================================================
// Leptos 上下文
// =========================================================

/// 会话镜像
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub status: SessionStatus,
    pub user: Option<UserProfile>,
}

/// 会话上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// 会话状态（只读）
    pub state: ReadSignal<SessionState>,
    set_state: WriteSignal<SessionState>,
}

impl SessionContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(SessionState::default());
        Self { state, set_state }
    }

    /// 仅在状态变化时通知的派生信号
    pub fn status_memo(&self) -> Memo<SessionStatus> {
        let state = self.state;
        Memo::new(move |_| state.with(|s| s.status))
    }
}

impl SessionStore for SessionContext {
    fn status(&self) -> SessionStatus {
        self.state.with_untracked(|s| s.status)
    }

    fn authenticate(&self, user: Option<UserProfile>) {
        self.set_state.update(|state| {
            state.status = SessionStatus::Authenticated;
            state.user = user;
        });
    }

    fn expire(&self) {
        self.set_state.update(|state| {
            state.status = SessionStatus::Unauthenticated;
            state.user = None;
        });
    }
}

/// 浏览器中使用的会话网关类型
pub type Gate = SessionGate<FetchClient, SessionContext>;

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}

pub fn use_gate() -> Gate {
    use_context::<Gate>().expect("SessionGate should be provided")
}

/// 上次成功登录的用户名（仅用于自动填充，不保存密码）
pub fn remembered_username() -> String {
    LocalStorage::get(STORAGE_USERNAME_KEY).unwrap_or_default()
}

pub fn remember_username(username: &str) {
    if LocalStorage::set(STORAGE_USERNAME_KEY, username.trim()).is_err() {
        log::warn!("[Session] Could not store last username");
    }
}

#[cfg(test)]
mod tests;
