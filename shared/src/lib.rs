use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

pub mod date;
pub mod protocol;

/// 显式的 `null` 按缺省值处理（数据库列可为空，只有库侧默认值）
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

// =========================================================
// 会话相关 (Session)
// =========================================================

/// 当前登录用户的资料
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: u32,
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl UserProfile {
    /// 用于界面显示的名字，没有全名时退回用户名
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.username)
    }
}

/// 健康检查（会话探测）响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub user: Option<UserProfile>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<UserProfile>,
}

/// 登出请求（无请求体）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogoutRequest {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// 服务端非 2xx 响应的错误体
///
/// 服务端约定使用 `error` 字段，个别接口使用 `message`。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.error
            .or(self.message)
            .filter(|msg| !msg.trim().is_empty())
    }
}

// =========================================================
// 仪表盘 (Dashboard)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub active_jobs: u32,
    pub pending_quotes: u32,
    pub upcoming_payment_total: f64,
    pub clients_needing_updates: u32,
}

/// 周日历中的一条排程
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEntry {
    pub job_id: u32,
    pub job_name: String,
    pub client_name: String,
    pub date: String,
    pub stage: String,
    #[serde(default)]
    pub team: Vec<String>,
}

/// 按付款阶段拆分的月度金额（预测与历史共用）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAmounts {
    pub month: String,
    pub total: f64,
    pub deposit: f64,
    pub build: f64,
    pub fit: f64,
    pub completion: f64,
}

/// 各付款阶段占总收入的百分比
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StagePercentages {
    pub deposit: f64,
    pub build: f64,
    pub fit: f64,
    pub completion: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeHistory {
    pub months: Vec<MonthlyAmounts>,
    pub total_income: f64,
    pub percentages: StagePercentages,
}

/// 车间在制作业
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentJob {
    pub job_id: u32,
    pub job_name: String,
    pub client_name: String,
    pub stage: String,
    pub progress: f64,
    #[serde(default)]
    pub deadline: Option<String>,
}

// =========================================================
// 记录集合 (Record collections)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub cabinetry_type: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stage: String,
    /// 服务端根据日期推算的状态（On Track / Delayed / Issue ...）
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub build_start_date: Option<String>,
    #[serde(default)]
    pub fitting_date: Option<String>,
    #[serde(default)]
    pub fitting_date_status: Option<String>,
    #[serde(default)]
    pub job_price: Option<f64>,
    #[serde(default)]
    pub client_needs_update: bool,
    #[serde(default)]
    pub build_team: Vec<String>,
    #[serde(default)]
    pub fit_team: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub cabinetry_type: Option<String>,
    pub initial_quote_amount: f64,
    #[serde(default)]
    pub final_quote_amount: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default)]
    pub has_job: bool,
}

impl Quote {
    /// 谈判后的最终报价，未定稿时沿用初始报价
    pub fn effective_amount(&self) -> f64 {
        self.final_quote_amount.unwrap_or(self.initial_quote_amount)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub lifetime_spend: f64,
    #[serde(default)]
    pub job_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: u32,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: String,
}

impl StaffMember {
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.username)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: u32,
    pub job_id: u32,
    #[serde(default)]
    pub job_name: Option<String>,
    #[serde(default)]
    pub client_name: Option<String>,
    /// 付款阶段：Deposit / Build / Fit / Completion
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: f64,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub paid_date: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
}

// =========================================================
// 报表 (Reports)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteConversion {
    pub total_quotes: u32,
    pub accepted_quotes: u32,
    pub rejected_quotes: u32,
    pub pending_quotes: u32,
    pub conversion_rate: f64,
    pub avg_quote_value: f64,
    pub avg_discount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPerformance {
    pub completed_jobs: u32,
    pub avg_build_variance: f64,
    pub avg_fitting_variance: f64,
    #[serde(default)]
    pub avg_prices_by_type: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffWorkload {
    pub user_id: u32,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: String,
    pub active_assignments: u32,
    pub upcoming_absences: u32,
}

/// 需要回访客户的作业
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientUpdate {
    pub job_id: u32,
    pub job_name: String,
    #[serde(default)]
    pub client_id: Option<u32>,
    pub client_name: String,
    #[serde(default)]
    pub fitting_date: Option<String>,
    #[serde(default)]
    pub fitting_date_status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_type_field_is_renamed() {
        let payment: Payment = serde_json::from_str(
            r#"{"id":4,"job_id":1,"type":"Deposit","amount":6500.0,"status":"Paid","xero_invoice_id":null}"#,
        )
        .unwrap();
        assert_eq!(payment.kind, "Deposit");
        assert_eq!(payment.due_date, None);
    }

    #[test]
    fn job_tolerates_missing_optional_fields() {
        let job: Job =
            serde_json::from_str(r#"{"id":7,"name":"Fulham Utility","stage":"Planned"}"#).unwrap();
        assert!(job.build_team.is_empty());
        assert!(!job.client_needs_update);
        assert_eq!(job.status, None);
    }

    #[test]
    fn null_text_columns_decode_as_empty() {
        let jobs: Vec<Job> = serde_json::from_str(
            r#"[{"id":1,"name":"Ok","stage":"Build"},{"id":2,"name":"Null stage","stage":null}]"#,
        )
        .unwrap();
        assert_eq!(jobs[0].stage, "Build");
        assert_eq!(jobs[1].stage, "");

        let quote: Quote = serde_json::from_str(
            r#"{"id":3,"name":"Study","initial_quote_amount":900.0,"status":null}"#,
        )
        .unwrap();
        assert_eq!(quote.status, "");

        let member: StaffMember =
            serde_json::from_str(r#"{"id":4,"username":"sam","role":null}"#).unwrap();
        assert_eq!(member.role, "");
    }

    #[test]
    fn error_body_prefers_error_field() {
        let body = ErrorBody {
            error: Some("Invalid username or password".to_string()),
            message: Some("ignored".to_string()),
        };
        assert_eq!(
            body.into_message().as_deref(),
            Some("Invalid username or password")
        );
        assert_eq!(ErrorBody::default().into_message(), None);
    }

    #[test]
    fn display_name_falls_back_to_username() {
        let user = UserProfile {
            id: 1,
            username: "admin".to_string(),
            full_name: Some("  ".to_string()),
            role: None,
        };
        assert_eq!(user.display_name(), "admin");
    }
}
