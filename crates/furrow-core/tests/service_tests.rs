mod common;

use common::spawn_service;
use furrow_core::{
    advisor::GREENHOUSE_PEST_ADVICE,
    models::{CultivationPlan, ObservationFeedback, Stage},
    server::PLAN_NOT_FOUND,
};
use serde_json::{json, Value};

fn tomato_body() -> Value {
    json!({
        "crop": "Tomato",
        "start_date": "2024-03-01",
        "method": "seed",
        "environment": "greenhouse",
        "area": 0.2,
        "variety": null,
        "notes": null
    })
}

async fn create(client: &reqwest::Client, base_url: &str) -> CultivationPlan {
    client
        .post(format!("{base_url}/api/plans"))
        .json(&tomato_body())
        .send()
        .await
        .expect("request failed")
        .error_for_status()
        .expect("non-success status")
        .json()
        .await
        .expect("invalid plan body")
}

#[tokio::test]
async fn test_root_reports_ok() {
    let service = spawn_service().await;
    let body: Value = reqwest::get(format!("{}/", service.base_url))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["ok"], true);
}

#[tokio::test]
async fn test_create_and_fetch_plan() {
    let service = spawn_service().await;
    let client = reqwest::Client::new();

    let plan = create(&client, &service.base_url).await;
    assert_eq!(plan.id.len(), 8);
    assert!(!plan.is_local());
    assert_eq!(plan.tasks.len(), 8);
    assert_eq!(plan.tasks[1].name, "Sowing");
    assert_eq!(plan.tasks[7].stage, Stage::Harvest);
    assert_eq!(service.store.len().await, 1);

    let fetched: CultivationPlan = client
        .get(format!("{}/api/plans/{}", service.base_url, plan.id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched, plan);
}

#[tokio::test]
async fn test_unknown_plan_is_404() {
    let service = spawn_service().await;
    let response = reqwest::get(format!("{}/api/plans/nope", service.base_url))
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("nope"));
}

#[tokio::test]
async fn test_invalid_plan_requests_are_422() {
    let service = spawn_service().await;
    let client = reqwest::Client::new();

    let mut blank_crop = tomato_body();
    blank_crop["crop"] = json!("  ");
    let mut bad_method = tomato_body();
    bad_method["method"] = json!("cutting");
    let mut missing_date = tomato_body();
    missing_date["start_date"] = Value::Null;
    let mut end_of_calendar = tomato_body();
    end_of_calendar["start_date"] = json!("9999-12-01");

    for body in [blank_crop, bad_method, missing_date, end_of_calendar] {
        let response = client
            .post(format!("{}/api/plans", service.base_url))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 422, "body {body}");
        let error: Value = response.json().await.expect("error body is not JSON");
        assert!(error["error"].is_string(), "body {body}");
    }
    assert!(service.store.is_empty().await);
}

#[tokio::test]
async fn test_malformed_json_gets_json_error() {
    let service = spawn_service().await;
    let client = reqwest::Client::new();
    let plan = create(&client, &service.base_url).await;

    let urls = [
        format!("{}/api/plans", service.base_url),
        format!("{}/api/plans/{}/observations", service.base_url, plan.id),
    ];
    for url in urls {
        let response = client
            .post(&url)
            .header("content-type", "application/json")
            .body("{\"crop\": ")
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 400, "{url}");
        let error: Value = response.json().await.expect("error body is not JSON");
        assert!(error["error"].as_str().is_some_and(|e| !e.is_empty()), "{url}");
    }
}

#[tokio::test]
async fn test_observation_feedback() {
    let service = spawn_service().await;
    let client = reqwest::Client::new();
    let plan = create(&client, &service.base_url).await;

    let feedback: ObservationFeedback = client
        .post(format!("{}/api/plans/{}/observations", service.base_url, plan.id))
        .json(&json!({
            "date": plan.tasks[2].due_date,
            "task_name": plan.tasks[2].name,
            "symptom": "Whitefly on the lower leaves",
            "severity": 2,
            "note": "humid house"
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(feedback, ObservationFeedback::accepted(GREENHOUSE_PEST_ADVICE));
}

#[tokio::test]
async fn test_observation_on_unknown_plan_is_not_ok() {
    let service = spawn_service().await;
    let feedback: ObservationFeedback = reqwest::Client::new()
        .post(format!("{}/api/plans/ghost/observations", service.base_url))
        .json(&json!({ "date": "2024-03-01", "task_name": "Sowing" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert!(!feedback.ok);
    assert_eq!(feedback.feedback, PLAN_NOT_FOUND);
}
