use super::*;
use crate::web::http::MockHttpClient;
use scheduler_shared::protocol::HttpMethod;
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

fn create_api() -> (ApiClient<MockHttpClient>, Arc<AtomicUsize>) {
    let expired = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&expired);
    let api = ApiClient::new(MockHttpClient::new(), "").on_unauthorized(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    (api, expired)
}

// =========================================================
// 404 -> 示例数据
// =========================================================

#[tokio::test]
async fn test_every_loader_falls_back_to_sample_on_404() {
    let (api, expired) = create_api();

    assert_eq!(
        dashboard_summary(&api).await,
        Ok(Loaded::sample(samples::dashboard_summary()))
    );
    assert_eq!(
        weekly_calendar(&api).await,
        Ok(Loaded::sample(samples::weekly_calendar()))
    );
    assert_eq!(
        cashflow_forecast(&api).await,
        Ok(Loaded::sample(samples::cashflow_forecast()))
    );
    assert_eq!(
        income_history(&api).await,
        Ok(Loaded::sample(samples::income_history()))
    );
    assert_eq!(
        current_jobs(&api).await,
        Ok(Loaded::sample(samples::current_jobs()))
    );
    assert_eq!(jobs(&api).await, Ok(Loaded::sample(samples::jobs())));
    assert_eq!(quotes(&api).await, Ok(Loaded::sample(samples::quotes())));
    assert_eq!(clients(&api).await, Ok(Loaded::sample(samples::clients())));
    assert_eq!(staff(&api).await, Ok(Loaded::sample(samples::staff())));
    assert_eq!(payments(&api).await, Ok(Loaded::sample(samples::payments())));
    assert_eq!(
        staff_workload(&api).await,
        Ok(Loaded::sample(samples::staff_workload()))
    );
    assert_eq!(
        quote_conversion(&api).await,
        Ok(Loaded::sample(samples::quote_conversion()))
    );
    assert_eq!(
        job_performance(&api).await,
        Ok(Loaded::sample(samples::job_performance()))
    );
    assert_eq!(
        clients_needing_updates(&api).await,
        Ok(Loaded::sample(samples::clients_needing_updates()))
    );

    assert_eq!(api.client_ref().request_count(), 14);
    assert_eq!(expired.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_sample_summary_values() {
    let (api, _) = create_api();
    let loaded = dashboard_summary(&api).await.unwrap();

    assert!(loaded.is_sample());
    assert_eq!(loaded.data.active_jobs, 12);
    assert_eq!(loaded.data.pending_quotes, 8);
    assert_eq!(loaded.data.upcoming_payment_total, 24500.0);
    assert_eq!(loaded.data.clients_needing_updates, 5);
}

// =========================================================
// 真实数据
// =========================================================

#[tokio::test]
async fn test_live_data_is_used_on_success() {
    let (api, _) = create_api();
    api.client_ref().mock_json(
        HttpMethod::Get,
        "/api/jobs/current",
        200,
        json!([{
            "job_id": 9,
            "job_name": "Putney Pantry",
            "client_name": "Ava Green",
            "stage": "Fit",
            "progress": 90,
            "deadline": null
        }]),
    );

    let loaded = current_jobs(&api).await.unwrap();
    assert_eq!(loaded.source, Source::Live);
    assert_eq!(loaded.data.len(), 1);
    assert_eq!(loaded.data[0].job_name, "Putney Pantry");
    assert_eq!(loaded.data[0].deadline, None);
}

#[tokio::test]
async fn test_live_empty_list_is_not_replaced() {
    let (api, _) = create_api();
    api.client_ref()
        .mock_json(HttpMethod::Get, "/api/quotes", 200, json!([]));

    let loaded = quotes(&api).await.unwrap();
    assert_eq!(loaded, Loaded::live(Vec::new()));
}

#[tokio::test]
async fn test_null_text_columns_keep_live_rows() {
    let (api, _) = create_api();
    api.client_ref().mock_json(
        HttpMethod::Get,
        "/api/jobs",
        200,
        json!([
            { "id": 1, "name": "Ok", "stage": "Build" },
            { "id": 2, "name": "Null stage", "stage": null }
        ]),
    );
    api.client_ref().mock_json(
        HttpMethod::Get,
        "/api/quotes",
        200,
        json!([{ "id": 3, "name": "Loft", "initial_quote_amount": 800.0, "status": null }]),
    );

    let loaded = jobs(&api).await.unwrap();
    assert_eq!(loaded.source, Source::Live);
    assert_eq!(loaded.data.len(), 2);
    assert_eq!(loaded.data[0].stage, "Build");
    assert_eq!(loaded.data[1].stage, "");

    let loaded = quotes(&api).await.unwrap();
    assert_eq!(loaded.source, Source::Live);
    assert_eq!(loaded.data[0].status, "");
}

// =========================================================
// 其他失败 -> 示例数据
// =========================================================

#[tokio::test]
async fn test_server_error_uses_sample() {
    let (api, _) = create_api();
    api.client_ref().mock_json(
        HttpMethod::Get,
        "/api/reports/cashflow-forecast",
        500,
        json!({"error": "database unavailable"}),
    );

    let loaded = cashflow_forecast(&api).await.unwrap();
    assert!(loaded.is_sample());
    assert_eq!(loaded.data, samples::cashflow_forecast());
}

#[tokio::test]
async fn test_html_body_uses_sample() {
    let (api, _) = create_api();
    api.client_ref().mock_raw(
        HttpMethod::Get,
        "/api/payments",
        200,
        Some("text/html"),
        "<html>login</html>",
    );

    let loaded = payments(&api).await.unwrap();
    assert!(loaded.is_sample());
}

#[tokio::test]
async fn test_decode_error_uses_sample() {
    let (api, _) = create_api();
    api.client_ref().mock_json(
        HttpMethod::Get,
        "/api/reports/dashboard-summary",
        200,
        json!({"active_jobs": "many"}),
    );

    let loaded = dashboard_summary(&api).await.unwrap();
    assert_eq!(loaded, Loaded::sample(samples::dashboard_summary()));
}

#[tokio::test]
async fn test_network_failure_uses_sample() {
    let (api, _) = create_api();
    api.client_ref()
        .mock_network_failure(HttpMethod::Get, "/api/clients");

    let loaded = clients(&api).await.unwrap();
    assert!(loaded.is_sample());
}

// =========================================================
// 401 -> 会话失效
// =========================================================

#[tokio::test]
async fn test_unauthorized_expires_session_and_renders_nothing() {
    let (api, expired) = create_api();
    api.client_ref().mock_json(
        HttpMethod::Get,
        "/api/reports/staff-workload",
        401,
        json!({"error": "Authentication required"}),
    );

    assert_eq!(staff_workload(&api).await, Err(SessionExpired));
    assert_eq!(expired.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_unauthorized_from_any_loader_fires_hook() {
    let (api, expired) = create_api();
    api.client_ref()
        .mock_json(HttpMethod::Get, "/api/jobs", 401, json!({}));
    api.client_ref().mock_json(
        HttpMethod::Get,
        "/api/reports/job-performance",
        401,
        json!({}),
    );

    assert_eq!(jobs(&api).await, Err(SessionExpired));
    assert_eq!(job_performance(&api).await, Err(SessionExpired));
    assert_eq!(expired.load(Ordering::SeqCst), 2);
}

// =========================================================
// LoadState
// =========================================================

#[test]
fn test_load_state_accessors() {
    let idle: LoadState<u32> = LoadState::default();
    assert_eq!(idle, LoadState::Idle);
    assert!(!idle.is_sample());
    assert!(!LoadState::<u32>::Loading.is_sample());

    assert!(LoadState::Rendered(Loaded::sample(3)).is_sample());
    assert!(!LoadState::Rendered(Loaded::live(4)).is_sample());
}
