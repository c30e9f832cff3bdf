//! API 客户端
//!
//! 所有调用点都经过 `ApiClient`。受保护请求（guarded）收到 401 时会调用
//! 安装好的 `on_unauthorized` 钩子（使会话失效并显示登录表单），
//! 并向调用方返回 `ApiError::Unauthorized`，调用方不再处理该响应。

use std::sync::Arc;

use scheduler_shared::ErrorBody;
use scheduler_shared::protocol::{ApiRequest, HttpMethod};
use serde::de::DeserializeOwned;

use crate::web::http::{FetchClient, HttpClient, HttpError, HttpRequest, HttpResponse};

/// 浏览器中使用的客户端类型
pub type Api = ApiClient<FetchClient>;

/// 从 Context 获取 API 客户端
pub fn use_api() -> Api {
    leptos::prelude::use_context::<Api>().expect("ApiClient should be provided")
}

/// 请求结果分类
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// 401，会话已失效
    #[error("session expired")]
    Unauthorized,
    /// 404，接口尚未实现
    #[error("endpoint not found")]
    NotFound,
    /// 405
    #[error("method not allowed")]
    MethodNotAllowed,
    /// 其他非 2xx 状态
    #[error("request rejected with status {status}")]
    Rejected {
        status: u16,
        message: Option<String>,
    },
    /// 响应不是 JSON
    #[error("expected a JSON response, got {}", .content_type.as_deref().unwrap_or("no content type"))]
    NotJson { content_type: Option<String> },
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error(transparent)]
    Transport(#[from] HttpError),
}

impl ApiError {
    /// 从错误体中提取的服务端提示
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

type UnauthorizedHook = Arc<dyn Fn() + Send + Sync>;

pub struct ApiClient<C> {
    client: Arc<C>,
    base_url: String,
    on_unauthorized: Option<UnauthorizedHook>,
}

impl<C> Clone for ApiClient<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            base_url: self.base_url.clone(),
            on_unauthorized: self.on_unauthorized.clone(),
        }
    }
}

impl<C: HttpClient> ApiClient<C> {
    pub fn new(client: C, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Arc::new(client),
            base_url,
            on_unauthorized: None,
        }
    }

    /// 安装 401 钩子
    pub fn on_unauthorized(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_unauthorized = Some(Arc::new(hook));
        self
    }

    #[cfg(test)]
    pub fn client_ref(&self) -> &C {
        &self.client
    }

    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// 受保护调用：401 会使会话失效
    pub async fn call<R: ApiRequest>(&self, request: &R) -> Result<R::Response, ApiError> {
        let response = self.exchange(request, R::METHOD, true).await?;
        decode(response)
    }

    /// 不受保护的调用，401 按普通失败处理（用于登录，保留错误提示）
    pub async fn call_unguarded<R: ApiRequest>(
        &self,
        request: &R,
    ) -> Result<R::Response, ApiError> {
        let response = self.exchange(request, R::METHOD, false).await?;
        decode(response)
    }

    /// 以指定方法发送，返回原始响应，不做状态分类
    pub async fn send_as<R: ApiRequest>(
        &self,
        request: &R,
        method: HttpMethod,
    ) -> Result<HttpResponse, ApiError> {
        self.exchange(request, method, false).await
    }

    async fn exchange<R: ApiRequest>(
        &self,
        request: &R,
        method: HttpMethod,
        guarded: bool,
    ) -> Result<HttpResponse, ApiError> {
        let url = self.url(R::PATH);
        let mut req = HttpRequest::new(&url, method).with_header("Accept", "application/json");
        if method.has_body() {
            let body = serde_json::to_string(request)
                .map_err(|e| HttpError::RequestBuildFailed(e.to_string()))?;
            req = req
                .with_header("Content-Type", "application/json")
                .with_body(body);
        }

        log::debug!("[Api] {} {}", method.as_str(), url);
        let response = self.client.send(req).await?;

        if guarded && response.status == 401 {
            log::info!("[Api] Unauthorized response detected: {}", url);
            if let Some(hook) = &self.on_unauthorized {
                hook();
            }
            return Err(ApiError::Unauthorized);
        }

        Ok(response)
    }
}

/// 按状态码与 Content-Type 分类并解析响应体
pub fn decode<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(match response.status {
            404 => ApiError::NotFound,
            405 => ApiError::MethodNotAllowed,
            status => ApiError::Rejected {
                status,
                message: error_message(&response),
            },
        });
    }

    if !response.is_json() {
        return Err(ApiError::NotJson {
            content_type: response.content_type,
        });
    }

    serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// 从非 2xx 响应体中提取 `error` / `message`
fn error_message(response: &HttpResponse) -> Option<String> {
    if !response.is_json() {
        return None;
    }
    serde_json::from_str::<ErrorBody>(&response.body)
        .ok()
        .and_then(ErrorBody::into_message)
}
