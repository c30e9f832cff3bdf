//! HTTP 请求封装模块
//!
//! `HttpClient` 是传输层抽象：浏览器中由 `FetchClient`（基于 `gloo-net`）实现，
//! 测试中由 `MockHttpClient` 实现。所有请求都带上 `credentials: include`，
//! 让会话 Cookie 随请求发送。

use async_trait::async_trait;
use gloo_net::http::Request;
use scheduler_shared::protocol::HttpMethod;
use web_sys::RequestCredentials;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;

/// HTTP 传输错误
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HttpError {
    /// 请求构建失败
    #[error("request build failed: {0}")]
    RequestBuildFailed(String),
    /// 网络请求失败
    #[error("network error: {0}")]
    NetworkError(String),
    /// 响应体读取失败
    #[error("failed to read response body: {0}")]
    ResponseReadFailed(String),
}

/// 待发送的请求
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub url: String,
    pub method: HttpMethod,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(url: &str, method: HttpMethod) -> Self {
        Self {
            url: url.to_string(),
            method,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn with_header(mut self, key: &str, value: &str) -> Self {
        self.headers.push((key.to_string(), value.to_string()));
        self
    }

    pub fn with_body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }

    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}

/// 已读取完毕的响应
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

impl HttpResponse {
    /// 检查响应是否成功 (2xx)
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Content-Type 是否声明为 JSON
    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.to_ascii_lowercase().contains("json"))
    }
}

#[async_trait(?Send)]
pub trait HttpClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, HttpError>;
}

// =========================================================
// 实现层: 浏览器 fetch
// =========================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct FetchClient;

#[async_trait(?Send)]
impl HttpClient for FetchClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut builder = match req.method {
            HttpMethod::Get => Request::get(&req.url),
            HttpMethod::Post => Request::post(&req.url),
        }
        .credentials(RequestCredentials::Include);

        for (key, value) in &req.headers {
            builder = builder.header(key, value);
        }

        let request = match req.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| HttpError::RequestBuildFailed(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| HttpError::NetworkError(e.to_string()))?;

        let status = response.status();
        let content_type = response.headers().get("content-type");
        let body = response
            .text()
            .await
            .map_err(|e| HttpError::ResponseReadFailed(e.to_string()))?;

        Ok(HttpResponse {
            status,
            content_type,
            body,
        })
    }
}

// =========================================================
// 测试工具: MockHttpClient
// =========================================================

#[cfg(test)]
enum MockReply {
    Respond(HttpResponse),
    Fail(HttpError),
}

/// 按 (方法, URL) 回放预设响应；未预设的请求返回 404
#[cfg(test)]
pub struct MockHttpClient {
    replies: RefCell<HashMap<(&'static str, String), MockReply>>,
    pub requests: RefCell<Vec<HttpRequest>>,
}

#[cfg(test)]
impl MockHttpClient {
    pub fn new() -> Self {
        Self {
            replies: RefCell::new(HashMap::new()),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn mock_json(&self, method: HttpMethod, url: &str, status: u16, body: serde_json::Value) {
        self.mock_raw(method, url, status, Some("application/json"), &body.to_string());
    }

    pub fn mock_raw(
        &self,
        method: HttpMethod,
        url: &str,
        status: u16,
        content_type: Option<&str>,
        body: &str,
    ) {
        let response = HttpResponse {
            status,
            content_type: content_type.map(str::to_string),
            body: body.to_string(),
        };
        self.replies.borrow_mut().insert(
            (method.as_str(), url.to_string()),
            MockReply::Respond(response),
        );
    }

    pub fn mock_network_failure(&self, method: HttpMethod, url: &str) {
        self.replies.borrow_mut().insert(
            (method.as_str(), url.to_string()),
            MockReply::Fail(HttpError::NetworkError("Failed to fetch".to_string())),
        );
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

#[cfg(test)]
#[async_trait(?Send)]
impl HttpClient for MockHttpClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let key = (req.method.as_str(), req.url.clone());
        self.requests.borrow_mut().push(req);

        match self.replies.borrow().get(&key) {
            Some(MockReply::Respond(response)) => Ok(response.clone()),
            Some(MockReply::Fail(err)) => Err(err.clone()),
            None => Ok(HttpResponse {
                status: 404,
                content_type: Some("text/html".to_string()),
                body: "Not Found".to_string(),
            }),
        }
    }
}
