pub mod health;
pub mod resume;

use axum::{extract::DefaultBodyLimit, routing::get, routing::post, Router};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/resume/analyze", post(resume::handle_analyze))
        .route("/api/v1/resume/score", post(resume::handle_score))
        .route(
            "/api/v1/resume/upload",
            post(resume::handle_upload).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;

    fn router() -> Router {
        build_router(AppState::new(Config::default()))
    }

    async fn read_json_body(response: axum::response::Response) -> Value {
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        serde_json::from_slice(&body).expect("json")
    }

    fn json_post(uri: &str, payload: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&payload).unwrap()))
            .unwrap()
    }

    fn multipart_post(field: &str, file_name: &str, content_type: &str, data: &str) -> Request<Body> {
        let boundary = "resume-analyzer-boundary";
        let body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\n\
             Content-Type: {content_type}\r\n\r\n\
             {data}\r\n\
             --{boundary}--\r\n"
        );
        Request::post("/api/v1/resume/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let response = router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        assert_eq!(payload["status"], "ok");
        assert_eq!(payload["service"], "resume-analyzer");
    }

    #[tokio::test]
    async fn test_analyze_returns_report() {
        let response = router()
            .oneshot(json_post(
                "/api/v1/resume/analyze",
                json!({ "text": "Summary of skills. Experience: none. Education: BA." }),
            ))
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        assert_eq!(payload["structureScore"], 10.0);
        assert_eq!(payload["missingSections"], json!([]));
        assert!(payload["keywords"].is_array());
    }

    #[tokio::test]
    async fn test_analyze_rejects_empty_text() {
        let response = router()
            .oneshot(json_post("/api/v1/resume/analyze", json!({ "text": "  " })))
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let payload = read_json_body(response).await;
        assert_eq!(payload["error"]["code"], "EMPTY_INPUT");
    }

    #[tokio::test]
    async fn test_score_uses_supplied_keywords() {
        let response = router()
            .oneshot(json_post(
                "/api/v1/resume/score",
                json!({
                    "resumeText": "rust go",
                    "jobDescription": "rust java",
                    "keywords": ["rust"]
                }),
            ))
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        assert_eq!(payload["totalScore"], 59);
        assert_eq!(payload["keywords"], json!(["rust"]));
    }

    #[tokio::test]
    async fn test_score_derives_keywords_from_job_description() {
        let response = router()
            .oneshot(json_post(
                "/api/v1/resume/score",
                json!({
                    "resumeText": "Kafka engineer",
                    "jobDescription": "Kafka Kafka Kubernetes"
                }),
            ))
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        assert_eq!(payload["keywords"], json!(["kafka", "kubernetes"]));
        assert_eq!(payload["keywordDensityScore"], 50);
    }

    #[tokio::test]
    async fn test_score_requires_job_description() {
        let response = router()
            .oneshot(json_post(
                "/api/v1/resume/score",
                json!({ "resumeText": "Rust", "jobDescription": "" }),
            ))
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_upload_rejects_non_pdf() {
        let response = router()
            .oneshot(multipart_post(
                "resume",
                "resume.docx",
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
                "not a pdf",
            ))
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn test_upload_requires_resume_field() {
        let response = router()
            .oneshot(multipart_post("avatar", "me.pdf", "application/pdf", "%PDF"))
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let payload = read_json_body(response).await;
        assert_eq!(payload["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_upload_with_corrupt_pdf_is_unprocessable() {
        let response = router()
            .oneshot(multipart_post(
                "resume",
                "resume.pdf",
                "application/pdf",
                "this is not really a pdf",
            ))
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
