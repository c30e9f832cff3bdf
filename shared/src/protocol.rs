use crate::{
    Client, ClientUpdate, CurrentJob, DashboardSummary, CalendarEntry, HealthResponse,
    IncomeHistory, Job, JobPerformance, LoginRequest, LoginResponse, LogoutRequest,
    MessageResponse, MonthlyAmounts, Payment, Quote, QuoteConversion, StaffMember, StaffWorkload,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }

    /// 是否携带 JSON 请求体
    pub fn has_body(&self) -> bool {
        matches!(self, HttpMethod::Post)
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest: Serialize + DeserializeOwned {
    /// The response type returned by this request.
    type Response: Serialize + DeserializeOwned;
    /// The URL path (or suffix).
    const PATH: &'static str;
    /// The HTTP method.
    const METHOD: HttpMethod;
}

/// 声明一个无参数的 GET 接口
macro_rules! get_endpoint {
    ($(#[$meta:meta])* $name:ident => $response:ty, $path:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
        pub struct $name;

        impl ApiRequest for $name {
            type Response = $response;
            const PATH: &'static str = $path;
            const METHOD: HttpMethod = HttpMethod::Get;
        }
    };
}

// =========================================================
// Session
// =========================================================

get_endpoint!(
    /// Session check; answers 401 when the browser session is not logged in
    HealthRequest => HealthResponse, "/api/users/health"
);

impl ApiRequest for LoginRequest {
    type Response = LoginResponse;
    const PATH: &'static str = "/api/users/login";
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// POST by default; the client falls back to GET when the server answers 405.
impl ApiRequest for LogoutRequest {
    type Response = MessageResponse;
    const PATH: &'static str = "/api/users/logout";
    const METHOD: HttpMethod = HttpMethod::Post;
}

// =========================================================
// Dashboard
// =========================================================

get_endpoint!(DashboardSummaryRequest => DashboardSummary, "/api/reports/dashboard-summary");
get_endpoint!(WeeklyCalendarRequest => Vec<CalendarEntry>, "/api/jobs/calendar/weekly");
get_endpoint!(CashflowForecastRequest => Vec<MonthlyAmounts>, "/api/reports/cashflow-forecast");
get_endpoint!(IncomeHistoryRequest => IncomeHistory, "/api/reports/income-history");
get_endpoint!(CurrentJobsRequest => Vec<CurrentJob>, "/api/jobs/current");

// =========================================================
// Record collections
// =========================================================

get_endpoint!(ListJobsRequest => Vec<Job>, "/api/jobs");
get_endpoint!(ListQuotesRequest => Vec<Quote>, "/api/quotes");
get_endpoint!(ListClientsRequest => Vec<Client>, "/api/clients");
get_endpoint!(ListStaffRequest => Vec<StaffMember>, "/api/staff");
get_endpoint!(ListPaymentsRequest => Vec<Payment>, "/api/payments");

// =========================================================
// Reports
// =========================================================

get_endpoint!(QuoteConversionRequest => QuoteConversion, "/api/reports/quote-conversion");
get_endpoint!(JobPerformanceRequest => JobPerformance, "/api/reports/job-performance");
get_endpoint!(StaffWorkloadRequest => Vec<StaffWorkload>, "/api/reports/staff-workload");
get_endpoint!(
    ClientsNeedingUpdatesRequest => Vec<ClientUpdate>,
    "/api/reports/clients-needing-updates"
);
