//! Route definitions for the dashboard.

use crate::state::AppState;
use crate::{assets, handlers};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

/// Create the dashboard router.
pub fn create_router(state: AppState) -> Router {
    let upload_limit = state.config().dashboard.max_upload_bytes;

    Router::new()
        // Pages
        .route("/", get(handlers::camera))
        .route("/camera", get(handlers::camera))
        .route(
            "/camera/upload",
            post(handlers::camera_upload).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/camera/check", post(handlers::camera_check))
        .route("/camera/force", post(handlers::camera_force))
        .route("/camera/frame", get(handlers::camera_frame))
        .route("/review", get(handlers::review).post(handlers::review_submit))
        .route("/logs", get(handlers::logs))
        .route("/logs.csv", get(handlers::logs_csv))
        .route(
            "/complaints",
            get(handlers::complaint_portal).post(handlers::complaint_submit),
        )
        .route("/complaints/review", get(handlers::complaint_review))
        .route("/complaints/{id}/decide", post(handlers::complaint_decide))
        .route("/assets/{*path}", get(assets::serve))
        // API
        .route("/api/incidents", get(handlers::api::incidents))
        .route("/api/incidents/{id}", get(handlers::api::incident_get))
        .route("/api/reviews", get(handlers::api::reviews))
        .route("/api/complaints", get(handlers::api::complaints))
        .route("/health", get(handlers::api::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use axum::response::Response;
    use faceabc_core::FaceAbcConfig;
    use faceabc_ledger::{CSV_HEADER, IncidentState};
    use faceabc_workflow::FixedConfidence;
    use tower::ServiceExt;

    fn state_with(scores: Vec<f64>) -> AppState {
        AppState::with_scores(FaceAbcConfig::default(), Box::new(FixedConfidence::new(scores)))
    }

    async fn send(state: &AppState, request: Request<Body>) -> Response {
        create_router(state.clone()).oneshot(request).await.unwrap()
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_empty(uri: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    fn post_form(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn upload(bytes: &[u8]) -> Request<Body> {
        upload_file(bytes, "frame.png", "image/png")
    }

    fn upload_file(bytes: &[u8], file_name: &str, content_type: &str) -> Request<Body> {
        let boundary = "faceabc-test-boundary";
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"frame\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri("/camera/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn location(response: &Response) -> &str {
        response
            .headers()
            .get(header::LOCATION)
            .unwrap()
            .to_str()
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let state = state_with(vec![]);
        let response = send(&state, get_req("/health")).await;

        assert_eq!(response.status(), StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["records"], 0);
    }

    #[tokio::test]
    async fn test_pages_render() {
        let state = state_with(vec![]);
        for uri in ["/", "/camera", "/review", "/logs", "/complaints", "/complaints/review"] {
            let response = send(&state, get_req(uri)).await;
            assert_eq!(response.status(), StatusCode::OK, "{uri}");
            assert!(body_text(response).await.contains("Logged in as:"), "{uri}");
        }
    }

    #[tokio::test]
    async fn test_face_check_without_frame() {
        let state = state_with(vec![0.9]);
        let response = send(&state, post_empty("/camera/check")).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(state.session().incidents.is_empty());
    }

    #[tokio::test]
    async fn test_upload_then_high_confidence_check() {
        let state = state_with(vec![0.93]);

        let response = send(&state, upload(b"PNGDATA")).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(state.session().score(), Some(0.93));

        let response = send(&state, get_req("/camera/frame")).await;
        assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");
        assert_eq!(body_text(response).await, "PNGDATA");

        let response = send(&state, post_empty("/camera/check")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("Match logged automatically as INC-1001."));
        assert_eq!(
            state.session().incidents.state_of("INC-1001"),
            Some(IncidentState::AutoLogged)
        );
    }

    #[tokio::test]
    async fn test_upload_larger_than_two_megabytes() {
        let state = state_with(vec![0.6]);
        let photo = vec![0xAB; 3 * 1024 * 1024];

        let response = send(&state, upload_file(&photo, "frame.jpg", "image/jpeg")).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let session = state.session();
        assert!(session.has_image());
        let frame = session.frame().unwrap();
        assert_eq!(frame.bytes.len(), photo.len());
        assert_eq!(frame.content_type, "image/jpeg");
    }

    #[tokio::test]
    async fn test_upload_over_limit_is_rejected() {
        let mut config = FaceAbcConfig::default();
        config.dashboard.max_upload_bytes = 1024;
        let state = AppState::with_scores(config, Box::new(FixedConfidence::new(vec![0.6])));

        let response = send(&state, upload(&[0u8; 4096])).await;
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert!(!state.session().has_image());
    }

    #[tokio::test]
    async fn test_low_confidence_check_redirects_to_review() {
        let state = state_with(vec![0.40]);
        send(&state, upload(b"frame")).await;

        let response = send(&state, post_empty("/camera/check")).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/review?incident=INC-1001");

        let html = body_text(send(&state, get_req("/review?incident=INC-1001")).await).await;
        assert!(html.contains(r#"<option value="INC-1001" selected>"#));
        assert!(html.contains("Uploaded Image"));
    }

    #[tokio::test]
    async fn test_force_audit_and_review_reject() {
        let state = state_with(vec![]);

        let response = send(&state, post_empty("/camera/force")).await;
        assert_eq!(location(&response), "/review?incident=INC-1001");

        let response = send(
            &state,
            post_form("/review", "incident_id=INC-1001&decision=reject"),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("False Positive – cleared and logged."));
        assert!(html.contains("Decision recorded successfully for INC-1001."));

        let session = state.session();
        let history = session.incidents.history("INC-1001");
        assert_eq!(history.len(), 2);
        assert_eq!(history[1].action, "Reject");
    }

    #[tokio::test]
    async fn test_review_errors() {
        let state = state_with(vec![]);

        let response = send(
            &state,
            post_form("/review", "incident_id=INC-4242&decision=approve"),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        send(&state, post_empty("/camera/force")).await;
        let response = send(&state, post_form("/review", "incident_id=INC-1001&decision=")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let ok = send(&state, post_form("/review", "incident_id=INC-1001&decision=escalate")).await;
        assert_eq!(ok.status(), StatusCode::OK);

        let again = send(&state, post_form("/review", "incident_id=INC-1001&decision=approve")).await;
        assert_eq!(again.status(), StatusCode::CONFLICT);
        assert_eq!(state.session().incidents.len(), 2);
    }

    #[tokio::test]
    async fn test_complaint_flow() {
        let state = state_with(vec![]);

        let response = send(
            &state,
            post_form("/complaints", "user=Jordan&contact=&incident_id=INC-1001&text=Not+me"),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let html = body_text(response).await;
        assert!(html.contains("Please fill out all fields before submitting."));
        assert!(html.contains(r#"value="Jordan""#));

        let response = send(
            &state,
            post_form(
                "/complaints",
                "user=Jordan&contact=555-0199&incident_id=INC-1001&text=Not+me",
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let id = state.session().complaints.all()[0].id;
        let response = send(
            &state,
            post_form(&format!("/complaints/{id}/decide"), "decision=compensate"),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("Compensation approved for INC-1001."));

        let again = send(
            &state,
            post_form(&format!("/complaints/{id}/decide"), "decision=dismiss"),
        )
        .await;
        assert_eq!(again.status(), StatusCode::CONFLICT);

        let json: serde_json::Value =
            serde_json::from_str(&body_text(send(&state, get_req("/api/complaints")).await).await)
                .unwrap();
        assert_eq!(json[0]["status"], "Compensated");
    }

    #[tokio::test]
    async fn test_unknown_complaint_is_not_found() {
        let state = state_with(vec![]);
        let response = send(
            &state,
            post_form(
                &format!("/complaints/{}/decide", uuid::Uuid::new_v4()),
                "decision=dismiss",
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_logs_csv_download() {
        let state = state_with(vec![]);
        {
            let mut session = state.session();
            state.controller().route(&mut session, 0.9);
            state.controller().route(&mut session, 0.4);
        }

        let response = send(&state, get_req("/logs.csv")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/csv");
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"faceabc_logs.csv\""
        );

        let csv = body_text(response).await;
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(lines.len(), 3);
        assert!(lines[2].contains("INC-1002,Uncertain Match,Human Review Required,0.40,System"));
    }

    #[tokio::test]
    async fn test_api_incident_lookup() {
        let state = state_with(vec![]);
        state.controller().route(&mut state.session(), 0.5);

        let response = send(&state, get_req("/api/incidents/INC-1001")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["state"], "pending_human_review");
        assert_eq!(json["history"].as_array().unwrap().len(), 1);

        let missing = send(&state, get_req("/api/incidents/INC-9999")).await;
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);

        let reviews: serde_json::Value =
            serde_json::from_str(&body_text(send(&state, get_req("/api/reviews")).await).await)
                .unwrap();
        assert_eq!(reviews[0]["incident_id"], "INC-1001");
    }

    #[tokio::test]
    async fn test_database_asset_served() {
        let state = state_with(vec![]);
        let response = send(&state, get_req("/assets/database.svg")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "image/svg+xml");
    }
}
