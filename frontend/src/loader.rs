//! 数据加载模块
//!
//! 每个面板的数据都按统一策略获取：
//! - 2xx JSON: 使用真实数据 (`Source::Live`)
//! - 404: 记录警告，使用示例数据 (`Source::Sample`)
//! - 401: 已由 `ApiClient` 的钩子使会话失效，返回 `SessionExpired`，不渲染任何内容
//! - 其他失败: 记录错误，使用示例数据
//!
//! 数据不缓存，每次激活视图都会重新请求。

use std::future::Future;
use std::pin::Pin;

use leptos::prelude::*;
use leptos::task::spawn_local;
use scheduler_shared::protocol::{
    ApiRequest, CashflowForecastRequest, ClientsNeedingUpdatesRequest, CurrentJobsRequest,
    DashboardSummaryRequest, IncomeHistoryRequest, JobPerformanceRequest, ListClientsRequest,
    ListJobsRequest, ListPaymentsRequest, ListQuotesRequest, ListStaffRequest,
    QuoteConversionRequest, StaffWorkloadRequest, WeeklyCalendarRequest,
};
use scheduler_shared::{
    CalendarEntry, Client, ClientUpdate, CurrentJob, DashboardSummary, IncomeHistory, Job,
    JobPerformance, MonthlyAmounts, Payment, Quote, QuoteConversion, StaffMember, StaffWorkload,
};

use crate::api::{ApiClient, ApiError};
use crate::samples;
use crate::web::http::HttpClient;

/// 数据来源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Live,
    Sample,
}

/// 已获取的数据及其来源
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<T> {
    pub data: T,
    pub source: Source,
}

impl<T> Loaded<T> {
    pub fn live(data: T) -> Self {
        Self {
            data,
            source: Source::Live,
        }
    }

    pub fn sample(data: T) -> Self {
        Self {
            data,
            source: Source::Sample,
        }
    }

    pub fn is_sample(&self) -> bool {
        self.source == Source::Sample
    }
}

/// 请求期间会话已失效，结果被丢弃
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionExpired;

pub type Fetched<T> = Result<Loaded<T>, SessionExpired>;

/// 获取一个接口的数据，失败时回落到示例数据
pub async fn fetch_or_sample<C, R>(
    api: &ApiClient<C>,
    request: &R,
    sample: fn() -> R::Response,
) -> Fetched<R::Response>
where
    C: HttpClient,
    R: ApiRequest,
{
    match api.call(request).await {
        Ok(data) => Ok(Loaded::live(data)),
        Err(ApiError::Unauthorized) => {
            log::info!("[Loader] Session expired while fetching {}", R::PATH);
            Err(SessionExpired)
        }
        Err(ApiError::NotFound) => {
            log::warn!("[Loader] {} not found (404), using sample data", R::PATH);
            Ok(Loaded::sample(sample()))
        }
        Err(err) => {
            log::error!("[Loader] Error fetching {}: {}, using sample data", R::PATH, err);
            Ok(Loaded::sample(sample()))
        }
    }
}

/// 为单个接口声明加载函数
macro_rules! loader {
    ($(#[$meta:meta])* $name:ident: $request:ident => $data:ty, $sample:path) => {
        $(#[$meta])*
        pub async fn $name<C: HttpClient>(api: &ApiClient<C>) -> Fetched<$data> {
            fetch_or_sample(api, &$request, $sample).await
        }
    };
}

// 仪表盘
loader!(dashboard_summary: DashboardSummaryRequest => DashboardSummary, samples::dashboard_summary);
loader!(weekly_calendar: WeeklyCalendarRequest => Vec<CalendarEntry>, samples::weekly_calendar);
loader!(cashflow_forecast: CashflowForecastRequest => Vec<MonthlyAmounts>, samples::cashflow_forecast);
loader!(income_history: IncomeHistoryRequest => IncomeHistory, samples::income_history);
loader!(current_jobs: CurrentJobsRequest => Vec<CurrentJob>, samples::current_jobs);

// 记录集合
loader!(jobs: ListJobsRequest => Vec<Job>, samples::jobs);
loader!(quotes: ListQuotesRequest => Vec<Quote>, samples::quotes);
loader!(clients: ListClientsRequest => Vec<Client>, samples::clients);
loader!(staff: ListStaffRequest => Vec<StaffMember>, samples::staff);
loader!(payments: ListPaymentsRequest => Vec<Payment>, samples::payments);

// 报表
loader!(staff_workload: StaffWorkloadRequest => Vec<StaffWorkload>, samples::staff_workload);
loader!(quote_conversion: QuoteConversionRequest => QuoteConversion, samples::quote_conversion);
loader!(job_performance: JobPerformanceRequest => JobPerformance, samples::job_performance);
loader!(
    clients_needing_updates: ClientsNeedingUpdatesRequest => Vec<ClientUpdate>,
    samples::clients_needing_updates
);

// =========================================================
// 面板状态机
// =========================================================

/// 面板状态：Idle -> Loading -> Rendered，每次导航重新进入
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Rendered(Loaded<T>),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Idle
    }
}

impl<T> LoadState<T> {
    pub fn is_sample(&self) -> bool {
        matches!(self, LoadState::Rendered(loaded) if loaded.is_sample())
    }
}

/// 单线程任务派发
pub trait Spawn {
    fn spawn(&self, task: Pin<Box<dyn Future<Output = ()>>>);
}

/// 浏览器中的页面任务队列
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTasks;

impl Spawn for LocalTasks {
    fn spawn(&self, task: Pin<Box<dyn Future<Output = ()>>>) {
        spawn_local(task);
    }
}

/// 把一次获取挂到任务队列上，结果写入面板状态
///
/// 不会取消：离开视图后晚到的结果写入已释放的信号时被忽略，
/// 并发导航时以最后落地的结果为准。
pub fn spawn_load<S, T, F>(tasks: &S, state: RwSignal<LoadState<T>>, fetch: F)
where
    S: Spawn,
    T: Send + Sync + 'static,
    F: Future<Output = Fetched<T>> + 'static,
{
    state.set(LoadState::Loading);
    tasks.spawn(Box::pin(async move {
        let next = match fetch.await {
            Ok(loaded) => LoadState::Rendered(loaded),
            Err(SessionExpired) => LoadState::Idle,
        };
        state.set(next);
    }));
}

pub mod views;

#[cfg(test)]
mod tests;
