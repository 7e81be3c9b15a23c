//! Integration tests for the attendance engine API.
//!
//! This test suite covers the engine endpoints end to end:
//! - Punch preflight for every allowed and disallowed transition
//! - Day aggregation with breaks, store transfers, and open segments
//! - Monthly payroll with and without overtime
//! - Edited-record validation
//! - Error cases (unknown status codes, malformed JSON)

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use attendance_engine::api::{AppState, create_router};
use attendance_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_router_for_test() -> Router {
    create_router(AppState::new(ConfigLoader::default()))
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn record_json(id: u32, day: u32, work_time: &str, overtime: &str, hourly_pay: &str) -> Value {
    json!({
        "id": id,
        "work_date": format!("2024-08-{:02}", day),
        "total_work_time": work_time,
        "overtime": overtime,
        "hourly_pay": hourly_pay
    })
}

// =============================================================================
// Punch preflight
// =============================================================================

#[tokio::test]
async fn test_preflight_clock_in_from_not_clocked_in() {
    let (status, body) = post_json(
        create_router_for_test(),
        "/punch/preflight",
        json!({"status_code": 0, "action": "clock_in"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["predicted"], "working");
    assert_eq!(body["predicted_code"], 1);
    assert_eq!(body["endpoint"], "/attendance/clockin");
    assert_eq!(body["allowed_actions"], json!(["clock_in"]));
}

#[tokio::test]
async fn test_preflight_clock_out_from_working_resumed() {
    // The permissive rule: clocking out after a Return is accepted.
    let (status, body) = post_json(
        create_router_for_test(),
        "/punch/preflight",
        json!({"status_code": 4, "action": "clock_out"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["predicted"], "clocked_out");
    assert_eq!(body["predicted_code"], 3);
}

#[tokio::test]
async fn test_preflight_full_day_sequence() {
    let steps = [
        (0, "clock_in", 1),
        (1, "go_out", 2),
        (2, "return", 4),
        (4, "clock_out", 3),
    ];

    for (code, action, expected) in steps {
        let (status, body) = post_json(
            create_router_for_test(),
            "/punch/preflight",
            json!({"status_code": code, "action": action}),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "{} from {}", action, code);
        assert_eq!(body["predicted_code"], expected);
    }
}

#[tokio::test]
async fn test_preflight_rejects_illegal_transition_with_conflict() {
    let (status, body) = post_json(
        create_router_for_test(),
        "/punch/preflight",
        json!({"status_code": 3, "action": "go_out"}),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "INVALID_TRANSITION");
    assert!(body["message"].as_str().unwrap().contains("GoOut"));
    assert!(body["message"].as_str().unwrap().contains("ClockedOut"));
}

#[tokio::test]
async fn test_preflight_rejects_every_disallowed_pair() {
    let allowed = [
        (0, "clock_in"),
        (1, "clock_out"),
        (4, "clock_out"),
        (1, "go_out"),
        (2, "return"),
    ];

    for code in 0..=4i64 {
        for action in ["clock_in", "clock_out", "go_out", "return"] {
            let expected_ok = allowed.contains(&(code, action));
            let (status, _) = post_json(
                create_router_for_test(),
                "/punch/preflight",
                json!({"status_code": code, "action": action}),
            )
            .await;
            if expected_ok {
                assert_eq!(status, StatusCode::OK, "{} from {}", action, code);
            } else {
                assert_eq!(status, StatusCode::CONFLICT, "{} from {}", action, code);
            }
        }
    }
}

#[tokio::test]
async fn test_preflight_rejects_unknown_status_code() {
    let (status, body) = post_json(
        create_router_for_test(),
        "/punch/preflight",
        json!({"status_code": 9, "action": "clock_in"}),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "INVALID_STATUS_CODE");
}

// =============================================================================
// Aggregation
// =============================================================================

#[tokio::test]
async fn test_aggregate_single_segment_with_lunch_break() {
    let (status, body) = post_json(
        create_router_for_test(),
        "/aggregate",
        json!({
            "segments": [{"store_id": 1, "start": "09:00:00", "end": "18:00:00"}],
            "breaks": [{"start": "12:00:00", "end": "13:00:00"}]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_work_time"], "8.00");
    assert_eq!(body["remarks"], "我家：09:00-18:00");
}

#[tokio::test]
async fn test_aggregate_store_transfer_renders_both_stores() {
    let (status, body) = post_json(
        create_router_for_test(),
        "/aggregate",
        json!({
            "segments": [
                {"store_id": 1, "start": "08:00:00", "end": "12:00:00"},
                {"store_id": 2, "start": "13:00:00", "end": "17:00:00"}
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_work_time"], "8.00");
    assert_eq!(body["remarks"], "我家：08:00-12:00\nAte：13:00-17:00");
    assert_eq!(body["remark_entries"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_aggregate_open_segment_counts_zero_and_renders_dash() {
    let (status, body) = post_json(
        create_router_for_test(),
        "/aggregate",
        json!({
            "segments": [{"store_id": 2, "start": "13:00:00"}]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_work_time"], "0.00");
    assert_eq!(body["remarks"], "Ate：13:00--");
}

#[tokio::test]
async fn test_aggregate_empty_day() {
    let (status, body) = post_json(
        create_router_for_test(),
        "/aggregate",
        json!({"segments": []}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_work_time"], "0.00");
    assert_eq!(body["remarks"], "");
}

// =============================================================================
// Payroll
// =============================================================================

#[tokio::test]
async fn test_payroll_plain_month() {
    let records: Vec<Value> = (1..=10)
        .map(|i| record_json(i, i, "8.00", "0", "1000"))
        .collect();

    let (status, body) = post_json(
        create_router_for_test(),
        "/payroll",
        json!({"records": records}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_work_time"], "80.00");
    assert_eq!(body["total_overtime"], "0.00");
    assert_eq!(body["total_fee"], 80000);
    assert_eq!(body["warnings"], json!([]));
}

#[tokio::test]
async fn test_payroll_with_overtime_premium() {
    // 90 hours, 10 overtime, 1200/h -> 80*1200 + 10*1200*1.25 = 111000
    let records: Vec<Value> = (1..=10)
        .map(|i| record_json(i, i, "9.00", "1.00", "1200"))
        .collect();

    let (status, body) = post_json(
        create_router_for_test(),
        "/payroll",
        json!({"records": records}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_work_time"], "90.00");
    assert_eq!(body["total_overtime"], "10.00");
    assert_eq!(body["regular_work_time"], "80.00");
    assert_eq!(body["total_fee"], 111000);
}

#[tokio::test]
async fn test_payroll_empty_month() {
    let (status, body) = post_json(
        create_router_for_test(),
        "/payroll",
        json!({"records": []}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_fee"], 0);
    assert_eq!(body["hourly_pay"], "0");
}

#[tokio::test]
async fn test_payroll_flags_overtime_exceeding_total() {
    let records = vec![record_json(1, 1, "4.00", "6.00", "1000")];

    let (status, body) = post_json(
        create_router_for_test(),
        "/payroll",
        json!({"records": records}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["regular_work_time"], "0");
    let warnings = body["warnings"].as_array().unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0]["code"], "NEGATIVE_REGULAR_TIME");
}

// =============================================================================
// Record validation
// =============================================================================

#[tokio::test]
async fn test_validate_accepts_and_echoes_valid_record() {
    let record = json!({
        "id": 12,
        "work_date": "2024-08-01",
        "segments": [
            {"store_id": 1, "start": "08:00:00", "end": "12:00:00"},
            {"store_id": 2, "start": "13:00:00", "end": "17:00:00"}
        ],
        "break_record": {"start": "12:00:00", "end": "13:00:00"},
        "total_work_time": "8.00",
        "overtime": "0",
        "hourly_pay": "1000"
    });

    let (status, body) = post_json(
        create_router_for_test(),
        "/records/validate",
        json!({"record": record}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 12);
    assert_eq!(body["segments"].as_array().unwrap().len(), 2);
    assert_eq!(body["break_record"]["start"], "12:00:00");
}

#[tokio::test]
async fn test_validate_rejects_end_before_start() {
    let record = json!({
        "id": 1,
        "work_date": "2024-08-01",
        "segments": [{"store_id": 1, "start": "18:00:00", "end": "09:00:00"}],
        "total_work_time": "0",
        "hourly_pay": "1000"
    });

    let (status, body) = post_json(
        create_router_for_test(),
        "/records/validate",
        json!({"record": record}),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "ORDERING_VIOLATION");
}

#[tokio::test]
async fn test_validate_rejects_backward_store_transfer() {
    let record = json!({
        "id": 1,
        "work_date": "2024-08-01",
        "segments": [
            {"store_id": 1, "start": "08:00:00", "end": "13:00:00"},
            {"store_id": 2, "start": "12:00:00", "end": "17:00:00"}
        ],
        "total_work_time": "9.00",
        "hourly_pay": "1000"
    });

    let (status, body) = post_json(
        create_router_for_test(),
        "/records/validate",
        json!({"record": record}),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "ORDERING_VIOLATION");
}

#[tokio::test]
async fn test_validate_rejects_record_without_segments() {
    let record = json!({
        "id": 1,
        "work_date": "2024-08-01",
        "segments": [],
        "total_work_time": "0",
        "hourly_pay": "1000"
    });

    let (status, body) = post_json(
        create_router_for_test(),
        "/records/validate",
        json!({"record": record}),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "MISSING_FIELD");
}

// =============================================================================
// Malformed requests
// =============================================================================

#[tokio::test]
async fn test_malformed_json_returns_bad_request() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/punch/preflight")
                .header("Content-Type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(body["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_missing_field_returns_validation_error() {
    let (status, body) = post_json(
        create_router_for_test(),
        "/punch/preflight",
        json!({"action": "clock_in"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}
