pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::documents::{self, MAX_UPLOAD_BYTES};
use crate::generation::handlers;
use crate::job_posting;
use crate::state::AppState;

/// Room for multipart boundaries and headers on top of the file itself.
const UPLOAD_BODY_LIMIT: usize = MAX_UPLOAD_BYTES + 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Job postings
        .route("/api/v1/jobs/analyze", post(handlers::handle_analyze_job))
        .route(
            "/api/v1/jobs/extract-url",
            post(job_posting::handlers::handle_extract_url),
        )
        // CV
        .route("/api/v1/cv/analyze", post(handlers::handle_analyze_cv))
        .route(
            "/api/v1/cv/extract",
            post(documents::handlers::handle_extract_cv)
                .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
        )
        // Cover letters
        .route("/api/v1/cover-letters", post(handlers::handle_cover_letter))
        // Interview
        .route(
            "/api/v1/interview/prep",
            post(handlers::handle_interview_prep),
        )
        .route(
            "/api/v1/interview/feedback",
            post(handlers::handle_interview_feedback),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::job_posting::{JobFetchError, JobPostingSource};
    use crate::llm_client::mock::{scripted_client, ScriptedGenerator};
    use crate::llm_client::LlmError;

    const JOB_ANALYSIS: &str = r#"{"keyPoints":["React expertise"],"dailyTasks":["Code reviews"],"tools":["React","TypeScript"],"dailyRoutine":["Standup"],"motivation":["Team impact"],"interviewPoints":["System design"]}"#;

    struct StaticPosting(&'static str);

    #[async_trait]
    impl JobPostingSource for StaticPosting {
        async fn fetch_description(&self, url: &str) -> Result<String, JobFetchError> {
            if url.contains("missing") {
                return Err(JobFetchError::NoContent);
            }
            Ok(self.0.to_string())
        }
    }

    fn app(generator: ScriptedGenerator) -> (Router, Arc<ScriptedGenerator>) {
        let (llm, generator) = scripted_client(generator);
        let state = AppState {
            llm,
            job_fetcher: Arc::new(StaticPosting("Fetched: Platform engineer, Go and Terraform.")),
        };
        (build_router(state), generator)
    }

    async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn test_health() {
        let (router, _) = app(ScriptedGenerator::empty());
        let response = router
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_analyze_job_returns_camel_case_result() {
        let (router, generator) = app(ScriptedGenerator::replying(JOB_ANALYSIS));
        let (status, body) = post_json(
            router,
            "/api/v1/jobs/analyze",
            json!({"jobDescription": "Senior Frontend Developer, React, 5 years experience", "language": "fr"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::from_str::<Value>(JOB_ANALYSIS).unwrap());
        assert!(generator.last_prompt().contains("Respond in French."));
    }

    #[tokio::test]
    async fn test_analyze_job_fetches_url_when_description_blank() {
        let (router, generator) = app(ScriptedGenerator::replying(JOB_ANALYSIS));
        let (status, _) = post_json(
            router,
            "/api/v1/jobs/analyze",
            json!({"jobDescription": "  ", "url": "https://jobs.example.com/42"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(generator
            .last_prompt()
            .contains("Fetched: Platform engineer, Go and Terraform."));
    }

    #[tokio::test]
    async fn test_analyze_job_fetch_failure_skips_llm() {
        let (router, generator) = app(ScriptedGenerator::replying(JOB_ANALYSIS));
        let (status, body) = post_json(
            router,
            "/api/v1/jobs/analyze",
            json!({"url": "https://jobs.example.com/missing"}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "JOB_FETCH_FAILED");
        assert!(generator.requests().is_empty());
    }

    #[tokio::test]
    async fn test_analyze_job_requires_input() {
        let (router, generator) = app(ScriptedGenerator::replying(JOB_ANALYSIS));
        let (status, body) = post_json(router, "/api/v1/jobs/analyze", json!({})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(generator.requests().is_empty());
    }

    #[tokio::test]
    async fn test_extract_url_endpoint() {
        let (router, _) = app(ScriptedGenerator::empty());
        let (status, body) = post_json(
            router,
            "/api/v1/jobs/extract-url",
            json!({"url": "https://jobs.example.com/42"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["jobDescription"],
            "Fetched: Platform engineer, Go and Terraform."
        );
    }

    #[tokio::test]
    async fn test_cv_analysis_out_of_range_score_passes_through() {
        let (router, _) = app(ScriptedGenerator::replying(
            r#"{"score":150,"summary":"s","keywordMatch":{"present":["Rust"],"missing":[]},"recommendations":[]}"#,
        ));
        let (status, body) = post_json(
            router,
            "/api/v1/cv/analyze",
            json!({"jobDescription": "Rust dev", "cvText": "I write Rust"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], 150);
        assert_eq!(body["keywordMatch"]["present"][0], "Rust");
    }

    #[tokio::test]
    async fn test_cover_letter_custom_tone_reaches_prompt() {
        let (router, generator) = app(ScriptedGenerator::replying(r#"{"letter":"Hello"}"#));
        let (status, body) = post_json(
            router,
            "/api/v1/cover-letters",
            json!({
                "jobDescription": "Rust dev",
                "cvText": "I write Rust",
                "candidate": {"fullName": "Ada", "experience": "5y", "objective": "Lead"},
                "tone": "playful",
                "language": "en"
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["letter"], "Hello");
        assert!(generator.last_prompt().contains("Tone: playful."));
    }

    #[tokio::test]
    async fn test_cover_letter_requires_candidate_name() {
        let (router, _) = app(ScriptedGenerator::replying(r#"{"letter":"Hello"}"#));
        let (status, _) = post_json(
            router,
            "/api/v1/cover-letters",
            json!({
                "jobDescription": "Rust dev",
                "cvText": "I write Rust",
                "candidate": {"fullName": " ", "experience": "5y", "objective": "Lead"},
                "tone": "formal"
            }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_interview_prep_and_feedback() {
        let (router, _) = app(ScriptedGenerator::replying(
            r#"{"questions":[{"question":"Why Rust?","answer":"Safety."}]}"#,
        ));
        let (status, body) = post_json(
            router,
            "/api/v1/interview/prep",
            json!({"jobDescription": "Rust dev"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["questions"][0]["answer"], "Safety.");

        let (router, _) = app(ScriptedGenerator::replying(r#"{"feedback":"Solid."}"#));
        let (status, body) = post_json(
            router,
            "/api/v1/interview/feedback",
            json!({"question": "Why Rust?", "userAnswer": "Memory safety", "language": "es"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["feedback"], "Solid.");
    }

    #[tokio::test]
    async fn test_feedback_blank_answer_rejected_by_handler() {
        let (router, generator) = app(ScriptedGenerator::replying(r#"{"feedback":"x"}"#));
        let (status, _) = post_json(
            router,
            "/api/v1/interview/feedback",
            json!({"question": "Why Rust?", "userAnswer": ""}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(generator.requests().is_empty());
    }

    #[tokio::test]
    async fn test_upstream_errors_map_to_codes() {
        let (router, _) = app(ScriptedGenerator::failing(|| {
            LlmError::Unauthorized("API key not valid".to_string())
        }));
        let (status, body) = post_json(
            router,
            "/api/v1/interview/prep",
            json!({"jobDescription": "Rust dev"}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");

        let (router, _) = app(ScriptedGenerator::replying("not json"));
        let (_, body) = post_json(
            router,
            "/api/v1/interview/prep",
            json!({"jobDescription": "Rust dev"}),
        )
        .await;
        assert_eq!(body["error"]["code"], "MALFORMED_RESPONSE");

        let (router, _) = app(ScriptedGenerator::empty());
        let (_, body) = post_json(
            router,
            "/api/v1/interview/prep",
            json!({"jobDescription": "Rust dev"}),
        )
        .await;
        assert_eq!(body["error"]["code"], "EMPTY_RESPONSE");

        let (router, _) = app(ScriptedGenerator::failing(|| {
            LlmError::RateLimited("quota".to_string())
        }));
        let (status, body) = post_json(
            router,
            "/api/v1/interview/prep",
            json!({"jobDescription": "Rust dev"}),
        )
        .await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"]["code"], "SERVICE_ERROR");
    }

    #[tokio::test]
    async fn test_cv_extract_over_body_limit_is_file_too_large() {
        let (router, _) = app(ScriptedGenerator::empty());
        let boundary = "XBOUNDARY";
        let mut body = format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"cv.pdf\"\r\nContent-Type: application/pdf\r\n\r\n"
        )
        .into_bytes();
        body.extend(std::iter::repeat(b'A').take(6 * 1024 * 1024));
        body.extend(format!("\r\n--{boundary}--\r\n").into_bytes());

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/cv/extract")
                    .header(
                        "content-type",
                        format!("multipart/form-data; boundary={boundary}"),
                    )
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["error"]["code"], "FILE_TOO_LARGE");
    }

    #[tokio::test]
    async fn test_cv_extract_rejects_unsupported_file() {
        let (router, _) = app(ScriptedGenerator::empty());
        let boundary = "XBOUNDARY";
        let body = format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"cv.txt\"\r\nContent-Type: text/plain\r\n\r\nhello\r\n--{boundary}--\r\n"
        );
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/cv/extract")
                    .header(
                        "content-type",
                        format!("multipart/form-data; boundary={boundary}"),
                    )
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }
}
