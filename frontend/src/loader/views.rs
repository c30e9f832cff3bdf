//! 各视图的面板集合与加载入口
//!
//! 每个视图激活时调用对应的 `load_*`，为它的每个面板派发一次获取。

use leptos::prelude::*;
use scheduler_shared::{
    CalendarEntry, Client, ClientUpdate, CurrentJob, DashboardSummary, IncomeHistory, Job,
    JobPerformance, MonthlyAmounts, Payment, Quote, QuoteConversion, StaffMember, StaffWorkload,
};

use super::{LoadState, Spawn, spawn_load};
use crate::api::ApiClient;
use crate::web::http::HttpClient;

fn idle<T: Send + Sync + 'static>() -> RwSignal<LoadState<T>> {
    RwSignal::new(LoadState::default())
}

/// 为一个面板派发一次获取
macro_rules! dispatch {
    ($api:expr, $tasks:expr, $state:expr, $loader:ident) => {{
        let api = $api.clone();
        spawn_load($tasks, $state, async move { super::$loader(&api).await });
    }};
}

// =========================================================
// 仪表盘
// =========================================================

/// 仪表盘的五个面板，各自独立加载
#[derive(Clone, Copy)]
pub struct DashboardPanels {
    pub summary: RwSignal<LoadState<DashboardSummary>>,
    pub calendar: RwSignal<LoadState<Vec<CalendarEntry>>>,
    pub forecast: RwSignal<LoadState<Vec<MonthlyAmounts>>>,
    pub income: RwSignal<LoadState<IncomeHistory>>,
    pub current_jobs: RwSignal<LoadState<Vec<CurrentJob>>>,
}

impl DashboardPanels {
    pub fn new() -> Self {
        Self {
            summary: idle(),
            calendar: idle(),
            forecast: idle(),
            income: idle(),
            current_jobs: idle(),
        }
    }
}

impl Default for DashboardPanels {
    fn default() -> Self {
        Self::new()
    }
}

/// 摘要、周日历、现金流预测、收入历史、在制作业
pub fn load_dashboard<C, S>(api: &ApiClient<C>, tasks: &S, panels: DashboardPanels)
where
    C: HttpClient + 'static,
    S: Spawn,
{
    log::info!("[Loader] Loading dashboard");
    dispatch!(api, tasks, panels.summary, dashboard_summary);
    dispatch!(api, tasks, panels.calendar, weekly_calendar);
    dispatch!(api, tasks, panels.forecast, cashflow_forecast);
    dispatch!(api, tasks, panels.income, income_history);
    dispatch!(api, tasks, panels.current_jobs, current_jobs);
}

// =========================================================
// 记录集合
// =========================================================

pub fn load_jobs<C: HttpClient + 'static, S: Spawn>(
    api: &ApiClient<C>,
    tasks: &S,
    jobs: RwSignal<LoadState<Vec<Job>>>,
) {
    log::info!("[Loader] Loading jobs");
    dispatch!(api, tasks, jobs, jobs);
}

pub fn load_quotes<C: HttpClient + 'static, S: Spawn>(
    api: &ApiClient<C>,
    tasks: &S,
    quotes: RwSignal<LoadState<Vec<Quote>>>,
) {
    log::info!("[Loader] Loading quotes");
    dispatch!(api, tasks, quotes, quotes);
}

pub fn load_clients<C: HttpClient + 'static, S: Spawn>(
    api: &ApiClient<C>,
    tasks: &S,
    clients: RwSignal<LoadState<Vec<Client>>>,
) {
    log::info!("[Loader] Loading clients");
    dispatch!(api, tasks, clients, clients);
}

pub fn load_payments<C: HttpClient + 'static, S: Spawn>(
    api: &ApiClient<C>,
    tasks: &S,
    payments: RwSignal<LoadState<Vec<Payment>>>,
) {
    log::info!("[Loader] Loading payments");
    dispatch!(api, tasks, payments, payments);
}

// =========================================================
// 员工
// =========================================================

#[derive(Clone, Copy)]
pub struct StaffPanels {
    pub staff: RwSignal<LoadState<Vec<StaffMember>>>,
    pub workload: RwSignal<LoadState<Vec<StaffWorkload>>>,
}

impl StaffPanels {
    pub fn new() -> Self {
        Self {
            staff: idle(),
            workload: idle(),
        }
    }
}

impl Default for StaffPanels {
    fn default() -> Self {
        Self::new()
    }
}

/// 员工列表与工作量两个请求
pub fn load_staff<C: HttpClient + 'static, S: Spawn>(
    api: &ApiClient<C>,
    tasks: &S,
    panels: StaffPanels,
) {
    log::info!("[Loader] Loading staff");
    dispatch!(api, tasks, panels.staff, staff);
    dispatch!(api, tasks, panels.workload, staff_workload);
}

// =========================================================
// 报表
// =========================================================

#[derive(Clone, Copy)]
pub struct ReportPanels {
    pub conversion: RwSignal<LoadState<QuoteConversion>>,
    pub performance: RwSignal<LoadState<JobPerformance>>,
    pub client_updates: RwSignal<LoadState<Vec<ClientUpdate>>>,
    pub income: RwSignal<LoadState<IncomeHistory>>,
}

impl ReportPanels {
    pub fn new() -> Self {
        Self {
            conversion: idle(),
            performance: idle(),
            client_updates: idle(),
            income: idle(),
        }
    }
}

impl Default for ReportPanels {
    fn default() -> Self {
        Self::new()
    }
}

/// 报价转化、作业表现、待回访客户、收入历史
pub fn load_reports<C: HttpClient + 'static, S: Spawn>(
    api: &ApiClient<C>,
    tasks: &S,
    panels: ReportPanels,
) {
    log::info!("[Loader] Loading reports");
    dispatch!(api, tasks, panels.conversion, quote_conversion);
    dispatch!(api, tasks, panels.performance, job_performance);
    dispatch!(api, tasks, panels.client_updates, clients_needing_updates);
    dispatch!(api, tasks, panels.income, income_history);
}
