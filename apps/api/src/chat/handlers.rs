//! Axum route handlers for the Chat API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::chat::presets::{PresetQuestions, PRESET_QUESTIONS};
use crate::chat::service::answer_question;
use crate::documents::loader::list_documents;
use crate::errors::AppError;
use crate::models::document::DocumentInfo;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Serialize)]
pub struct PresetQuestionsResponse {
    pub questions: PresetQuestions,
}

#[derive(Debug, Serialize)]
pub struct DocumentListResponse {
    pub documents: Vec<DocumentInfo>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /chat
///
/// Answers one recruiter question. A missing or malformed body is treated
/// like a blank question.
pub async fn handle_chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let request = payload
        .map_err(|e| AppError::Validation(format!("invalid chat body: {e}")))?
        .0;

    let response = answer_question(&state, &request.question).await?;
    Ok(Json(ChatResponse { response }))
}

/// GET /preset-questions
pub async fn handle_preset_questions() -> Json<PresetQuestionsResponse> {
    Json(PresetQuestionsResponse {
        questions: PRESET_QUESTIONS,
    })
}

/// GET /documents
///
/// Lists every regular file in the documents directory. Introspection only.
pub async fn handle_list_documents(
    State(state): State<AppState>,
) -> Result<Json<DocumentListResponse>, AppError> {
    let dir = state.config.documents_dir.clone();
    let documents = tokio::task::spawn_blocking(move || list_documents(&dir))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Document listing task failed: {e}")))??;

    Ok(Json(DocumentListResponse { documents }))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        Router,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::errors::{INTERNAL_ERROR_MESSAGE, MISSING_API_KEY_MESSAGE, MISSING_QUESTION_MESSAGE};
    use crate::llm_client::{CompletionClient, LlmError};
    use crate::profile::default_profile;
    use crate::routes::build_router;
    use crate::state::AppState;

    /// Records every call and replies with a canned answer (or fails).
    struct FakeCompletion {
        calls: AtomicUsize,
        reply: Option<String>,
        last_user_message: Mutex<Option<String>>,
    }

    impl FakeCompletion {
        fn replying(text: &str) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                reply: Some(text.to_string()),
                last_user_message: Mutex::new(None),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                reply: None,
                last_user_message: Mutex::new(None),
            })
        }
    }

    #[async_trait]
    impl CompletionClient for FakeCompletion {
        async fn complete(
            &self,
            _system: &str,
            user_message: &str,
            _max_tokens: u32,
        ) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_user_message.lock().unwrap() = Some(user_message.to_string());
            self.reply.clone().ok_or(LlmError::Api {
                status: 529,
                message: "overloaded_error: upstream at /internal/path".to_string(),
            })
        }
    }

    fn test_config(documents_dir: &Path) -> Config {
        Config {
            anthropic_api_key: None,
            documents_dir: documents_dir.to_path_buf(),
            profile_path: None,
            max_output_tokens: 1000,
            port: 0,
            rust_log: "info".to_string(),
        }
    }

    fn app(documents_dir: &Path, llm: Option<Arc<FakeCompletion>>) -> Router {
        build_router(AppState {
            config: test_config(documents_dir),
            profile: Arc::new(default_profile()),
            llm: llm.map(|c| c as Arc<dyn CompletionClient>),
        })
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn chat_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/chat")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_blank_question_rejected_without_llm_call() {
        let dir = tempfile::tempdir().unwrap();
        let llm = FakeCompletion::replying("ciao");
        let (status, body) = send(app(dir.path(), Some(llm.clone())), chat_request(r#"{"question":"   "}"#)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], MISSING_QUESTION_MESSAGE);
        assert_eq!(llm.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_missing_question_field_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = send(app(dir.path(), None), chat_request("{}")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], MISSING_QUESTION_MESSAGE);
    }

    #[tokio::test]
    async fn test_malformed_body_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = send(app(dir.path(), None), chat_request("not json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], MISSING_QUESTION_MESSAGE);
    }

    #[tokio::test]
    async fn test_missing_credential_returns_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = send(
            app(dir.path(), None),
            chat_request(r#"{"question":"Quali sono le tue competenze?"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], MISSING_API_KEY_MESSAGE);
    }

    #[tokio::test]
    async fn test_completion_failure_is_generic() {
        let dir = tempfile::tempdir().unwrap();
        let llm = FakeCompletion::failing();
        let (status, body) = send(
            app(dir.path(), Some(llm.clone())),
            chat_request(r#"{"question":"Chi sei?"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], INTERNAL_ERROR_MESSAGE);
        assert!(!body.to_string().contains("/internal/path"));
        assert_eq!(llm.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_blank_model_answer_is_internal_error() {
        let dir = tempfile::tempdir().unwrap();
        let llm = FakeCompletion::replying("\n\n   \n");
        let (status, body) = send(
            app(dir.path(), Some(llm)),
            chat_request(r#"{"question":"Qual è la tua formazione?"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], INTERNAL_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn test_python_question_gets_portfolio_suggestion() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("cv.txt"), "Sviluppo in Python da 3 anni.").unwrap();
        std::fs::write(dir.path().join("rotto.pdf"), b"garbage").unwrap();
        let llm = FakeCompletion::replying("Uso Python ogni giorno:\n* Flask\n1. Pandas\n\n\n\n");

        let (status, body) = send(
            app(dir.path(), Some(llm.clone())),
            chat_request(r#"{"question":"Quali sono le tue competenze in Python?"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let response = body["response"].as_str().unwrap();
        assert!(response.starts_with("Uso Python ogni giorno:\n- Flask\n- Pandas"));
        assert!(response.contains("**Portfolio suggerito:**"));
        assert!(response.contains(
            "- [Chatbot professionale](https://portfolio.example.com/projects/chatbot)"
        ));
        assert!(!response.contains("**Contatti:**"));

        let sent = llm.last_user_message.lock().unwrap().clone().unwrap();
        assert!(sent.contains("--- DOCUMENTO: cv.txt ---\nSviluppo in Python da 3 anni."));
        assert!(sent.contains("Chatbot professionale"));
    }

    #[tokio::test]
    async fn test_contact_question_appends_contact_block() {
        let dir = tempfile::tempdir().unwrap();
        let llm = FakeCompletion::replying("Volentieri, ecco come contattarmi.");
        let (status, body) = send(
            app(dir.path(), Some(llm)),
            chat_request(r#"{"question":"Posso avere il tuo contatto?"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let response = body["response"].as_str().unwrap();
        let profile = default_profile();
        assert!(response.contains(&profile.contact.email));
        assert!(response.contains(&profile.contact.phone));
        assert!(response.contains(&profile.contact.linkedin_url));
    }

    #[tokio::test]
    async fn test_preset_questions_are_categorized() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = send(app(dir.path(), None), get("/preset-questions")).await;
        assert_eq!(status, StatusCode::OK);
        for key in ["technical", "strengths", "experience", "portfolio"] {
            assert!(!body["questions"][key].as_array().unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn test_documents_lists_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("cv.txt"), "abc").unwrap();
        let (status, body) = send(app(dir.path(), None), get("/documents")).await;

        assert_eq!(status, StatusCode::OK);
        let docs = body["documents"].as_array().unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0]["name"], "cv.txt");
        assert_eq!(docs[0]["size"], 3);
        assert!(docs[0]["modified"].as_f64().unwrap() > 0.0);
    }

    #[tokio::test]
    async fn test_documents_missing_directory_is_empty_list() {
        let (status, body) = send(
            app(Path::new("/nonexistent/documents"), None),
            get("/documents"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["documents"], serde_json::json!([]));
    }
}
