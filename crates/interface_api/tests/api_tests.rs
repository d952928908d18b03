//! HTTP API Tests
//!
//! Drive the router in-process with `tower::ServiceExt::oneshot`.

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use interface_api::{config::ApiConfig, create_router, AppState};
use test_utils::RiderFixtures;

fn app() -> Router {
    create_router(AppState::new(RiderFixtures::service(), ApiConfig::default()))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => request
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn attach_body(code: &str, age: u32) -> Value {
    json!({
        "policy_type": "Term Life",
        "agent_name": "Priya Sharma",
        "rider_code": code,
        "customer_age": age
    })
}

mod health_tests {
    use super::*;

    #[tokio::test]
    async fn test_health_check() {
        let (status, body) = send(&app(), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_readiness_check() {
        let (status, body) = send(&app(), Method::GET, "/health/ready", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ready");
    }
}

mod catalog_tests {
    use super::*;

    #[tokio::test]
    async fn test_list_riders_for_policy_type() {
        let (status, body) = send(&app(), Method::GET, "/api/v1/riders?policy_type=Health", None).await;
        assert_eq!(status, StatusCode::OK);

        let codes: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["code"].as_str().unwrap())
            .collect();
        assert_eq!(codes, vec!["R2", "R3"]);
    }

    #[tokio::test]
    async fn test_list_riders_filters_by_age() {
        let (_, body) = send(
            &app(),
            Method::GET,
            "/api/v1/riders?policy_type=Term%20Life&customer_age=62",
            None,
        )
        .await;

        let codes: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["code"].as_str().unwrap())
            .collect();
        assert_eq!(codes, vec!["R1", "R2"]);
    }

    #[tokio::test]
    async fn test_get_unknown_rider() {
        let (status, body) = send(&app(), Method::GET, "/api/v1/riders/NOPE", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");
    }
}

mod policy_rider_tests {
    use super::*;

    #[tokio::test]
    async fn test_attach_activate_remove() {
        let app = app();
        let policy = Uuid::new_v4();
        let base = format!("/api/v1/policies/{}/riders", policy);

        let mut body = attach_body("R2", 40);
        body["discount_percentage"] = json!("10");
        let (status, attached) = send(&app, Method::POST, &base, Some(body)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(attached["status"], "Pending");
        assert_eq!(attached["added_by"], "Priya Sharma");
        let net: Decimal = attached["net_premium"].as_str().unwrap().parse().unwrap();
        assert_eq!(net, dec!(1080));

        let (status, listed) = send(&app, Method::GET, &base, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed["riders"].as_array().unwrap().len(), 1);
        assert_eq!(listed["summary"]["pending"], 1);

        let (status, active) =
            send(&app, Method::POST, &format!("{}/R2/activate", base), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(active["status"], "Active");

        let (status, _) = send(&app, Method::DELETE, &format!("{}/R2", base), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, listed) = send(&app, Method::GET, &base, None).await;
        assert!(listed["riders"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_attach_conflicts() {
        let app = app();
        let base = format!("/api/v1/policies/{}/riders", Uuid::new_v4());

        let (status, _) = send(&app, Method::POST, &base, Some(attach_body("R1", 30))).await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = send(&app, Method::POST, &base, Some(attach_body("R1", 30))).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"], "conflict");
    }

    #[tokio::test]
    async fn test_ineligible_attach_rejected() {
        let base = format!("/api/v1/policies/{}/riders", Uuid::new_v4());
        let (status, body) = send(&app(), Method::POST, &base, Some(attach_body("R1", 70))).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "validation_error");
    }

    #[tokio::test]
    async fn test_unbounded_rider_attaches_at_any_age() {
        let app = app();
        let (_, listed) = send(
            &app,
            Method::GET,
            "/api/v1/riders?policy_type=Term%20Life&customer_age=200",
            None,
        )
        .await;
        let codes: Vec<&str> = listed
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["code"].as_str().unwrap())
            .collect();
        assert_eq!(codes, vec!["R2"]);

        let base = format!("/api/v1/policies/{}/riders", Uuid::new_v4());
        let (status, attached) = send(&app, Method::POST, &base, Some(attach_body("R2", 200))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(attached["code"], "R2");
    }

    #[tokio::test]
    async fn test_request_validation() {
        let base = format!("/api/v1/policies/{}/riders", Uuid::new_v4());
        let mut body = attach_body("R1", 30);
        body["agent_name"] = json!("");

        let (status, _) = send(&app(), Method::POST, &base, Some(body)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_activate_unattached_not_found() {
        let uri = format!("/api/v1/policies/{}/riders/R1/activate", Uuid::new_v4());
        let (status, _) = send(&app(), Method::POST, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_remove_absent_is_no_content() {
        let uri = format!("/api/v1/policies/{}/riders/R9", Uuid::new_v4());
        let (status, _) = send(&app(), Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }
}
