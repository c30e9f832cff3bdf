//! 展示层的纯计算
//!
//! 这里不依赖 DOM，把记录转换为界面需要的文本、宽度和图表数据，
//! 方便在原生环境下测试。

use std::collections::BTreeMap;

use scheduler_shared::date::{MISSING, display_optional};
use scheduler_shared::{CalendarEntry, DashboardSummary, IncomeHistory, MonthlyAmounts};

pub const UNASSIGNED: &str = "Unassigned";

// =========================================================
// 数值格式
// =========================================================

/// 货币显示：整数金额不带小数（`£24500`），否则保留两位
pub fn format_currency(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("£{}", amount as i64)
    } else {
        format!("£{:.2}", amount)
    }
}

pub fn format_percent(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}%", value as i64)
    } else {
        format!("{:.1}%", value)
    }
}

/// 带符号的百分比，用于计划偏差（正数表示超出计划）
pub fn format_signed_percent(value: f64) -> String {
    let sign = if value > 0.0 { "+" } else { "" };
    format!("{}{}", sign, format_percent(value))
}

/// 数值占总量的百分比，限制在 0..=100；总量为 0 时为 0
pub fn share_percent(value: f64, total: f64) -> f64 {
    if total <= 0.0 || !value.is_finite() || !total.is_finite() {
        return 0.0;
    }
    (value / total * 100.0).clamp(0.0, 100.0)
}

/// 进度条的 CSS 宽度
pub fn progress_width(value: f64, total: f64) -> String {
    format!("{}%", share_percent(value, total))
}

// =========================================================
// 仪表盘计数
// =========================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryCounters {
    pub active_jobs: String,
    pub pending_quotes: String,
    pub upcoming_payments: String,
    pub clients_needing_updates: String,
}

impl From<&DashboardSummary> for SummaryCounters {
    fn from(summary: &DashboardSummary) -> Self {
        Self {
            active_jobs: summary.active_jobs.to_string(),
            pending_quotes: summary.pending_quotes.to_string(),
            upcoming_payments: format_currency(summary.upcoming_payment_total),
            clients_needing_updates: summary.clients_needing_updates.to_string(),
        }
    }
}

// =========================================================
// 图表数据
// =========================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ChartDataset {
    pub label: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

impl ChartData {
    /// 所有数据集中的最大值，用于纵轴缩放
    pub fn max_value(&self) -> f64 {
        self.datasets
            .iter()
            .flat_map(|d| d.values.iter().copied())
            .fold(0.0, f64::max)
    }
}

/// 付款阶段中的一段
#[derive(Debug, Clone, PartialEq)]
pub struct StageBar {
    pub label: &'static str,
    pub amount: f64,
    /// 占当月总额的百分比
    pub percent: f64,
}

impl StageBar {
    pub fn caption(&self) -> String {
        format!("{}: {}", self.label, format_currency(self.amount))
    }
}

/// 单月按阶段拆分
#[derive(Debug, Clone, PartialEq)]
pub struct MonthBreakdown {
    pub month: String,
    pub total: String,
    pub stages: Vec<StageBar>,
}

impl From<&MonthlyAmounts> for MonthBreakdown {
    fn from(month: &MonthlyAmounts) -> Self {
        let stages = [
            ("Deposits", month.deposit),
            ("Build", month.build),
            ("Fit", month.fit),
            ("Completion", month.completion),
        ]
        .into_iter()
        .map(|(label, amount)| StageBar {
            label,
            amount,
            percent: share_percent(amount, month.total),
        })
        .collect();

        Self {
            month: month.month.clone(),
            total: format_currency(month.total),
            stages,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CashflowView {
    pub chart: ChartData,
    /// 第一个预测月份视为当月
    pub current_month: Option<MonthBreakdown>,
}

pub fn cashflow_view(forecast: &[MonthlyAmounts]) -> CashflowView {
    let chart = ChartData {
        labels: forecast.iter().map(|m| m.month.clone()).collect(),
        datasets: vec![ChartDataset {
            label: "Projected Income".to_string(),
            values: forecast.iter().map(|m| m.total).collect(),
        }],
    };

    CashflowView {
        chart,
        current_month: forecast.first().map(MonthBreakdown::from),
    }
}

/// 收入构成：四个阶段的百分比
pub fn income_chart(history: &IncomeHistory) -> ChartData {
    let p = &history.percentages;
    ChartData {
        labels: ["Deposits", "Build", "Fit", "Completion"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        datasets: vec![ChartDataset {
            label: "Income Split".to_string(),
            values: vec![p.deposit, p.build, p.fit, p.completion],
        }],
    }
}

/// 收入历史表格的一行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomeRow {
    pub month: String,
    pub total: String,
    pub deposit: String,
    pub build: String,
    pub fit: String,
    pub completion: String,
}

pub fn income_rows(history: &IncomeHistory) -> Vec<IncomeRow> {
    history
        .months
        .iter()
        .map(|m| IncomeRow {
            month: m.month.clone(),
            total: format_currency(m.total),
            deposit: format_currency(m.deposit),
            build: format_currency(m.build),
            fit: format_currency(m.fit),
            completion: format_currency(m.completion),
        })
        .collect()
}

// =========================================================
// 柱状图布局 (SVG)
// =========================================================

pub const CHART_WIDTH: f64 = 480.0;
pub const CHART_HEIGHT: f64 = 220.0;
const CHART_GAP: f64 = 16.0;

#[derive(Debug, Clone, PartialEq)]
pub struct BarRect {
    pub label: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// 计算第一个数据集的柱形位置，纵轴从 0 开始
pub fn bar_layout(chart: &ChartData) -> Vec<BarRect> {
    let Some(dataset) = chart.datasets.first() else {
        return Vec::new();
    };
    let count = dataset.values.len();
    if count == 0 {
        return Vec::new();
    }

    let max = chart.max_value();
    let slot = CHART_WIDTH / count as f64;
    let width = (slot - CHART_GAP).max(1.0);

    dataset
        .values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let height = CHART_HEIGHT * share_percent(value, max) / 100.0;
            BarRect {
                label: chart.labels.get(i).cloned().unwrap_or_default(),
                value,
                x: slot * i as f64 + CHART_GAP / 2.0,
                y: CHART_HEIGHT - height,
                width,
                height,
            }
        })
        .collect()
}

// =========================================================
// 周日历
// =========================================================

/// 按日期分组（键为 ISO 日期，自然有序）
pub fn group_calendar(entries: &[CalendarEntry]) -> BTreeMap<String, Vec<CalendarEntry>> {
    let mut days: BTreeMap<String, Vec<CalendarEntry>> = BTreeMap::new();
    for entry in entries {
        days.entry(entry.date.clone()).or_default().push(entry.clone());
    }
    days
}

pub fn team_label(team: &[String]) -> String {
    if team.is_empty() {
        UNASSIGNED.to_string()
    } else {
        team.join(", ")
    }
}

/// 截止日期显示；缺失时显示占位符
pub fn deadline_label(deadline: Option<&str>) -> String {
    display_optional(deadline)
}

// =========================================================
// 状态徽章
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Success,
    Info,
    Warning,
    Danger,
    Neutral,
}

impl BadgeTone {
    pub fn class(&self) -> &'static str {
        match self {
            BadgeTone::Success => "badge badge-success",
            BadgeTone::Info => "badge badge-info",
            BadgeTone::Warning => "badge badge-warning",
            BadgeTone::Danger => "badge badge-error",
            BadgeTone::Neutral => "badge badge-ghost",
        }
    }
}

/// 状态、阶段或角色的显示文本；服务端给出空值时显示占位符
pub fn status_text(status: &str) -> String {
    let status = status.trim();
    if status.is_empty() {
        MISSING.to_string()
    } else {
        status.to_string()
    }
}

/// 状态或阶段文本到徽章色调的直接查表；未知值为中性
pub fn badge_tone(status: &str) -> BadgeTone {
    match status.trim() {
        "Completed" | "Paid" | "Accepted" | "Accepted-Negotiated" | "Confirmed" | "Finished" => {
            BadgeTone::Success
        }
        "On Track" | "Scheduled" | "Sent" | "Build" | "Spray" | "Fit" => BadgeTone::Info,
        "Delayed" | "Due" | "Negotiating" | "Provisional" | "Snag" => BadgeTone::Warning,
        "Issue" | "Rejected" | "Overdue" => BadgeTone::Danger,
        _ => BadgeTone::Neutral,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples;

    #[test]
    fn sample_summary_counters() {
        let counters = SummaryCounters::from(&samples::dashboard_summary());
        assert_eq!(counters.active_jobs, "12");
        assert_eq!(counters.pending_quotes, "8");
        assert_eq!(counters.upcoming_payments, "£24500");
        assert_eq!(counters.clients_needing_updates, "5");
    }

    #[test]
    fn currency_formatting() {
        assert_eq!(format_currency(0.0), "£0");
        assert_eq!(format_currency(1625.0), "£1625");
        assert_eq!(format_currency(1200.5), "£1200.50");
        assert_eq!(format_percent(45.0), "45%");
        assert_eq!(format_percent(4.5), "4.5%");
    }

    #[test]
    fn variance_is_a_signed_percent() {
        assert_eq!(format_signed_percent(25.0), "+25%");
        assert_eq!(format_signed_percent(12.5), "+12.5%");
        assert_eq!(format_signed_percent(-4.0), "-4%");
        assert_eq!(format_signed_percent(0.0), "0%");
    }

    #[test]
    fn empty_status_shows_placeholder() {
        assert_eq!(status_text("Build"), "Build");
        assert_eq!(status_text("  "), "—");
        assert_eq!(badge_tone(""), BadgeTone::Neutral);
    }

    #[test]
    fn share_is_clamped() {
        assert_eq!(share_percent(50.0, 200.0), 25.0);
        assert_eq!(share_percent(300.0, 200.0), 100.0);
        assert_eq!(share_percent(-10.0, 200.0), 0.0);
        assert_eq!(share_percent(10.0, 0.0), 0.0);
        assert_eq!(progress_width(65.0, 100.0), "65%");
        assert_eq!(progress_width(5.0, 0.0), "0%");
    }

    #[test]
    fn cashflow_uses_totals_and_first_month() {
        let view = cashflow_view(&samples::cashflow_forecast());
        assert_eq!(view.chart.labels, vec!["May 2025", "June 2025"]);
        assert_eq!(view.chart.datasets[0].values, vec![32500.0, 45000.0]);

        let current = view.current_month.unwrap();
        assert_eq!(current.month, "May 2025");
        assert_eq!(current.total, "£32500");
        assert_eq!(current.stages[0].caption(), "Deposits: £16250");
        assert_eq!(current.stages[0].percent, 50.0);
        assert_eq!(current.stages[3].percent, 5.0);
    }

    #[test]
    fn empty_forecast_has_no_current_month() {
        let view = cashflow_view(&[]);
        assert!(view.current_month.is_none());
        assert!(bar_layout(&view.chart).is_empty());
    }

    #[test]
    fn zero_total_month_has_empty_bars() {
        let month = MonthlyAmounts {
            month: "July 2025".to_string(),
            total: 0.0,
            deposit: 0.0,
            build: 0.0,
            fit: 0.0,
            completion: 0.0,
        };
        let breakdown = MonthBreakdown::from(&month);
        assert!(breakdown.stages.iter().all(|s| s.percent == 0.0));
    }

    #[test]
    fn income_chart_and_rows() {
        let history = samples::income_history();
        let chart = income_chart(&history);
        assert_eq!(chart.labels, vec!["Deposits", "Build", "Fit", "Completion"]);
        assert_eq!(chart.datasets[0].values, vec![45.0, 25.0, 20.0, 10.0]);

        let rows = income_rows(&history);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].month, "February 2025");
        assert_eq!(rows[2].build, "£6875");
    }

    #[test]
    fn bars_scale_to_largest_value() {
        let view = cashflow_view(&samples::cashflow_forecast());
        let bars = bar_layout(&view.chart);
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[1].height, CHART_HEIGHT);
        assert_eq!(bars[1].y, 0.0);
        assert!(bars[0].height < bars[1].height);
        assert!(bars[0].x < bars[1].x);
    }

    #[test]
    fn calendar_groups_by_date() {
        let mut entries = samples::weekly_calendar();
        entries.insert(
            0,
            CalendarEntry {
                job_id: 5,
                job_name: "Barnes Boot Room".to_string(),
                client_name: "Lucy Hall".to_string(),
                date: "2025-05-21".to_string(),
                stage: "Fit".to_string(),
                team: Vec::new(),
            },
        );

        let days = group_calendar(&entries);
        let keys: Vec<_> = days.keys().cloned().collect();
        assert_eq!(keys, vec!["2025-05-19", "2025-05-21"]);
        assert_eq!(days["2025-05-19"].len(), 2);
    }

    #[test]
    fn team_falls_back_to_unassigned() {
        let calendar = samples::weekly_calendar();
        assert_eq!(team_label(&calendar[0].team), "James Wilson, Robert Johnson");
        assert_eq!(team_label(&calendar[1].team), "Unassigned");
    }

    #[test]
    fn badges_follow_lookup() {
        assert_eq!(badge_tone("Delayed"), BadgeTone::Warning);
        assert_eq!(badge_tone("Issue"), BadgeTone::Danger);
        assert_eq!(badge_tone("Paid"), BadgeTone::Success);
        assert_eq!(badge_tone("Build"), BadgeTone::Info);
        assert_eq!(badge_tone("Something new"), BadgeTone::Neutral);
        assert_eq!(badge_tone("Issue").class(), "badge badge-error");
    }

    #[test]
    fn dates_are_humanised() {
        assert_eq!(deadline_label(Some("2025-06-15")), "15 Jun 2025");
        assert_eq!(deadline_label(None), "—");
    }
}
