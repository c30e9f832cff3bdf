//! 示例数据
//!
//! 接口缺失 (404) 或请求失败时替代真实数据的固定数据集。
//! 每个函数每次调用都返回一份新的拷贝。

use std::collections::BTreeMap;

use scheduler_shared::{
    CalendarEntry, Client, ClientUpdate, CurrentJob, DashboardSummary, IncomeHistory, Job,
    JobPerformance, MonthlyAmounts, Payment, Quote, QuoteConversion, StaffMember, StaffWorkload,
    StagePercentages,
};

fn month(name: &str, total: f64, deposit: f64, build: f64, fit: f64, completion: f64) -> MonthlyAmounts {
    MonthlyAmounts {
        month: name.to_string(),
        total,
        deposit,
        build,
        fit,
        completion,
    }
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn some(value: &str) -> Option<String> {
    Some(value.to_string())
}

// =========================================================
// 仪表盘
// =========================================================

pub fn dashboard_summary() -> DashboardSummary {
    DashboardSummary {
        active_jobs: 12,
        pending_quotes: 8,
        upcoming_payment_total: 24500.0,
        clients_needing_updates: 5,
    }
}

pub fn weekly_calendar() -> Vec<CalendarEntry> {
    vec![
        CalendarEntry {
            job_id: 1,
            job_name: "Hampstead Kitchen".to_string(),
            client_name: "John Smith".to_string(),
            date: "2025-05-19".to_string(),
            stage: "Build".to_string(),
            team: names(&["James Wilson", "Robert Johnson"]),
        },
        CalendarEntry {
            job_id: 2,
            job_name: "Chelsea Wardrobe".to_string(),
            client_name: "Emma Johnson".to_string(),
            date: "2025-05-19".to_string(),
            stage: "Spray".to_string(),
            team: Vec::new(),
        },
    ]
}

pub fn cashflow_forecast() -> Vec<MonthlyAmounts> {
    vec![
        month("May 2025", 32500.0, 16250.0, 9750.0, 4875.0, 1625.0),
        month("June 2025", 45000.0, 22500.0, 13500.0, 6750.0, 2250.0),
    ]
}

pub fn income_history() -> IncomeHistory {
    IncomeHistory {
        months: vec![
            month("February 2025", 28000.0, 14000.0, 7000.0, 5600.0, 1400.0),
            month("March 2025", 32000.0, 16000.0, 8000.0, 6400.0, 1600.0),
            month("April 2025", 27500.0, 13750.0, 6875.0, 5500.0, 1375.0),
        ],
        total_income: 87500.0,
        percentages: StagePercentages {
            deposit: 45.0,
            build: 25.0,
            fit: 20.0,
            completion: 10.0,
        },
    }
}

pub fn current_jobs() -> Vec<CurrentJob> {
    vec![
        CurrentJob {
            job_id: 1,
            job_name: "Hampstead Kitchen".to_string(),
            client_name: "John Smith".to_string(),
            stage: "Build".to_string(),
            progress: 65.0,
            deadline: some("2025-06-15"),
        },
        CurrentJob {
            job_id: 2,
            job_name: "Chelsea Wardrobe".to_string(),
            client_name: "Emma Johnson".to_string(),
            stage: "Spray".to_string(),
            progress: 40.0,
            deadline: some("2025-06-01"),
        },
        CurrentJob {
            job_id: 3,
            job_name: "Kensington Bathroom".to_string(),
            client_name: "Michael Brown".to_string(),
            stage: "Design".to_string(),
            progress: 20.0,
            deadline: some("2025-07-10"),
        },
    ]
}

// =========================================================
// 记录集合
// =========================================================

pub fn jobs() -> Vec<Job> {
    vec![
        Job {
            id: 1,
            name: "Hampstead Kitchen".to_string(),
            client_name: some("John Smith"),
            cabinetry_type: some("Kitchen"),
            stage: "Build".to_string(),
            status: some("On Track"),
            build_start_date: some("2025-05-12"),
            fitting_date: some("2025-06-15"),
            fitting_date_status: some("Confirmed"),
            job_price: Some(32500.0),
            client_needs_update: false,
            build_team: names(&["James Wilson", "Robert Johnson"]),
            fit_team: names(&["James Wilson"]),
        },
        Job {
            id: 2,
            name: "Chelsea Wardrobe".to_string(),
            client_name: some("Emma Johnson"),
            cabinetry_type: some("Wardrobe"),
            stage: "Spray".to_string(),
            status: some("Delayed"),
            build_start_date: some("2025-04-28"),
            fitting_date: some("2025-06-01"),
            fitting_date_status: some("Provisional"),
            job_price: Some(14800.0),
            client_needs_update: true,
            build_team: names(&["Robert Johnson"]),
            fit_team: Vec::new(),
        },
        Job {
            id: 3,
            name: "Kensington Bathroom".to_string(),
            client_name: some("Michael Brown"),
            cabinetry_type: some("Bathroom"),
            stage: "Design".to_string(),
            status: some("Issue"),
            build_start_date: None,
            fitting_date: None,
            fitting_date_status: None,
            job_price: Some(9200.0),
            client_needs_update: true,
            build_team: Vec::new(),
            fit_team: Vec::new(),
        },
    ]
}

pub fn quotes() -> Vec<Quote> {
    vec![
        Quote {
            id: 1,
            name: "Hampstead Kitchen".to_string(),
            client_name: some("John Smith"),
            cabinetry_type: some("Kitchen"),
            initial_quote_amount: 34000.0,
            final_quote_amount: Some(32500.0),
            status: "Accepted".to_string(),
            has_job: true,
        },
        Quote {
            id: 2,
            name: "Richmond Media Wall".to_string(),
            client_name: some("Sarah Davies"),
            cabinetry_type: some("Media Unit"),
            initial_quote_amount: 7800.0,
            final_quote_amount: None,
            status: "Sent".to_string(),
            has_job: false,
        },
        Quote {
            id: 3,
            name: "Islington Study".to_string(),
            client_name: some("Oliver Taylor"),
            cabinetry_type: some("Study"),
            initial_quote_amount: 11250.0,
            final_quote_amount: Some(10500.0),
            status: "Negotiating".to_string(),
            has_job: false,
        },
        Quote {
            id: 4,
            name: "Fulham Utility".to_string(),
            client_name: some("Grace Lee"),
            cabinetry_type: some("Utility"),
            initial_quote_amount: 5400.0,
            final_quote_amount: None,
            status: "Rejected".to_string(),
            has_job: false,
        },
    ]
}

pub fn clients() -> Vec<Client> {
    vec![
        Client {
            id: 1,
            name: "John Smith".to_string(),
            email: some("john.smith@example.com"),
            phone: some("07700 900123"),
            address: some("12 Heath Street, Hampstead, London"),
            lifetime_spend: 32500.0,
            job_count: 1,
        },
        Client {
            id: 2,
            name: "Emma Johnson".to_string(),
            email: some("emma.johnson@example.com"),
            phone: some("07700 900456"),
            address: some("48 King's Road, Chelsea, London"),
            lifetime_spend: 14800.0,
            job_count: 1,
        },
        Client {
            id: 3,
            name: "Michael Brown".to_string(),
            email: some("m.brown@example.com"),
            phone: None,
            address: some("5 Abingdon Villas, Kensington, London"),
            lifetime_spend: 0.0,
            job_count: 1,
        },
    ]
}

pub fn staff() -> Vec<StaffMember> {
    vec![
        StaffMember {
            id: 1,
            username: "admin".to_string(),
            email: some("admin@example.com"),
            full_name: some("Admin User"),
            role: "admin".to_string(),
        },
        StaffMember {
            id: 2,
            username: "jwilson".to_string(),
            email: some("james.wilson@example.com"),
            full_name: some("James Wilson"),
            role: "builder".to_string(),
        },
        StaffMember {
            id: 3,
            username: "rjohnson".to_string(),
            email: some("robert.johnson@example.com"),
            full_name: some("Robert Johnson"),
            role: "fitter".to_string(),
        },
    ]
}

pub fn staff_workload() -> Vec<StaffWorkload> {
    vec![
        StaffWorkload {
            user_id: 2,
            name: "James Wilson".to_string(),
            role: "builder".to_string(),
            active_assignments: 3,
            upcoming_absences: 0,
        },
        StaffWorkload {
            user_id: 3,
            name: "Robert Johnson".to_string(),
            role: "fitter".to_string(),
            active_assignments: 2,
            upcoming_absences: 1,
        },
    ]
}

pub fn payments() -> Vec<Payment> {
    vec![
        Payment {
            id: 1,
            job_id: 1,
            job_name: some("Hampstead Kitchen"),
            client_name: some("John Smith"),
            kind: "Deposit".to_string(),
            amount: 16250.0,
            due_date: some("2025-04-20"),
            paid_date: some("2025-04-18"),
            status: "Paid".to_string(),
        },
        Payment {
            id: 2,
            job_id: 1,
            job_name: some("Hampstead Kitchen"),
            client_name: some("John Smith"),
            kind: "Build".to_string(),
            amount: 9750.0,
            due_date: some("2025-05-26"),
            paid_date: None,
            status: "Due".to_string(),
        },
        Payment {
            id: 3,
            job_id: 2,
            job_name: some("Chelsea Wardrobe"),
            client_name: some("Emma Johnson"),
            kind: "Build".to_string(),
            amount: 4440.0,
            due_date: some("2025-05-05"),
            paid_date: None,
            status: "Overdue".to_string(),
        },
    ]
}

// =========================================================
// 报表
// =========================================================

pub fn quote_conversion() -> QuoteConversion {
    QuoteConversion {
        total_quotes: 20,
        accepted_quotes: 12,
        rejected_quotes: 3,
        pending_quotes: 5,
        conversion_rate: 60.0,
        avg_quote_value: 18250.0,
        avg_discount: 4.5,
    }
}

pub fn job_performance() -> JobPerformance {
    let avg_prices_by_type = BTreeMap::from([
        ("Bathroom".to_string(), 9200.0),
        ("Kitchen".to_string(), 31000.0),
        ("Wardrobe".to_string(), 14500.0),
    ]);
    JobPerformance {
        completed_jobs: 18,
        avg_build_variance: 12.5,
        avg_fitting_variance: -4.0,
        avg_prices_by_type,
    }
}

pub fn clients_needing_updates() -> Vec<ClientUpdate> {
    vec![
        ClientUpdate {
            job_id: 2,
            job_name: "Chelsea Wardrobe".to_string(),
            client_id: Some(2),
            client_name: "Emma Johnson".to_string(),
            fitting_date: some("2025-06-01"),
            fitting_date_status: some("Provisional"),
        },
        ClientUpdate {
            job_id: 3,
            job_name: "Kensington Bathroom".to_string(),
            client_id: Some(3),
            client_name: "Michael Brown".to_string(),
            fitting_date: None,
            fitting_date_status: None,
        },
    ]
}
