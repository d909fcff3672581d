//! JSON HTTP API.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET`  | `/health` | Health check (assistant name and version) |
//! | `POST` | `/ask` | Offline assistant reply for `{ "question" }` |
//! | `POST` | `/sentiment` | Sentiment score for `{ "text" }` |
//! | `POST` | `/intent` | Intent match plus empathetic reply for `{ "text" }` |
//! | `POST` | `/explain` | Telugu explanation of `{ "text" }` |
//! | `GET`  | `/gita` | Sloka lookup, chapter listing, search or listing |
//! | `GET`  | `/daily` | Verse of the day, optionally `?date=YYYY-MM-DD` |
//!
//! `GET /gita` picks its mode from the query string, first match wins:
//!
//! | Parameters | Result |
//! |------------|--------|
//! | `chapter` + `verse` | One sloka |
//! | `chapter` | All slokas of the chapter |
//! | `search` | Up to 20 slokas matching the term |
//! | (none) / `limit` | First `limit` slokas (default 20, max 100) |
//!
//! # Error Contract
//!
//! ```json
//! { "error": { "code": "bad_request", "message": "Search term must be at least 2 characters" } }
//! ```
//!
//! Error codes: `bad_request` (400), `not_found` (404), `internal` (500),
//! `unavailable` (503, no translation provider answered).
//!
//! # CORS
//!
//! All origins, methods, and headers are permitted for browser clients.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::assistant::{answer, ReplyKind};
use crate::config::Config;
use crate::daily::{verse_of_the_day, DailyVerseState};
use crate::library::{self, LibraryError};
use crate::respond::ResponseMode;
use crate::sentiment::{analyze_sentiment, SentimentScore};
use crate::session::{respond_to, AssistantTurn};
use crate::store::memory::MemoryVerseStore;
use crate::store::VerseStore;
use crate::translate::TeluguExplainer;

const DEFAULT_LIST_LIMIT: usize = 20;
const MAX_LIST_LIMIT: usize = 100;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<dyn VerseStore>,
    pub explainer: Arc<TeluguExplainer>,
    /// Rotates the empathetic opener between requests.
    turns: Arc<AtomicUsize>,
}

impl AppState {
    /// State with an explainer that has no providers; only text that is
    /// already Telugu can be explained until [`AppState::with_explainer`].
    pub fn new(config: Config, store: Arc<dyn VerseStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
            explainer: Arc::new(TeluguExplainer::new(Vec::new())),
            turns: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_explainer(mut self, explainer: TeluguExplainer) -> Self {
        self.explainer = Arc::new(explainer);
        self
    }
}

/// Build the router with CORS applied.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handle_health))
        .route("/ask", post(handle_ask))
        .route("/sentiment", post(handle_sentiment))
        .route("/intent", post(handle_intent))
        .route("/explain", post(handle_explain))
        .route("/gita", get(handle_gita))
        .route("/daily", get(handle_daily))
        .layer(cors)
        .with_state(state)
}

/// Load the library and serve on `[server].bind` until the process exits.
pub async fn run_server(config: &Config) -> anyhow::Result<()> {
    let store = MemoryVerseStore::open(&config.library.path)?;
    let bind_addr = config.server.bind.clone();
    let app = router(AppState::new(config.clone(), Arc::new(store)));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "server listening");
    println!("{} listening on http://{}", config.assistant.name, bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}

// ============ Error response ============

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Serialize)]
struct ErrorDetail {
    code: String,
    message: String,
}

/// Internal error type that converts into an Axum HTTP response.
#[derive(Debug)]
struct AppError {
    status: StatusCode,
    code: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code,
                message: self.message,
            },
        };
        (self.status, Json(body)).into_response()
    }
}

fn bad_request(message: impl Into<String>) -> AppError {
    AppError {
        status: StatusCode::BAD_REQUEST,
        code: "bad_request".to_string(),
        message: message.into(),
    }
}

fn not_found(message: impl Into<String>) -> AppError {
    AppError {
        status: StatusCode::NOT_FOUND,
        code: "not_found".to_string(),
        message: message.into(),
    }
}

impl From<LibraryError> for AppError {
    fn from(err: LibraryError) -> Self {
        let status = match err.code() {
            "bad_request" => StatusCode::BAD_REQUEST,
            "not_found" => StatusCode::NOT_FOUND,
            _ => {
                tracing::error!(error = %err, "library error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        AppError {
            status,
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        LibraryError::Store(err).into()
    }
}

// ============ GET /health ============

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    name: String,
    version: String,
}

async fn handle_health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        name: state.config.assistant.name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============ POST /ask ============

#[derive(Deserialize)]
struct AskRequest {
    #[serde(default)]
    question: String,
}

#[derive(Serialize)]
struct AskResponse {
    reply: String,
    kind: ReplyKind,
    mode: ResponseMode,
}

async fn handle_ask(Json(req): Json<AskRequest>) -> Json<AskResponse> {
    let reply = answer(&req.question);
    Json(AskResponse {
        reply: reply.text,
        kind: reply.kind,
        mode: reply.mode,
    })
}

// ============ POST /sentiment, POST /intent, POST /explain ============

#[derive(Deserialize)]
struct TextRequest {
    text: String,
}

async fn handle_sentiment(Json(req): Json<TextRequest>) -> Json<SentimentScore> {
    Json(analyze_sentiment(&req.text))
}

async fn handle_intent(
    State(state): State<AppState>,
    Json(req): Json<TextRequest>,
) -> Result<Json<AssistantTurn>, AppError> {
    if req.text.trim().is_empty() {
        return Err(bad_request("text must not be empty"));
    }
    let pick = state.turns.fetch_add(1, Ordering::Relaxed);
    Ok(Json(respond_to(&req.text, Local::now().time(), pick)))
}

#[derive(Serialize)]
struct ExplainResponse {
    text: String,
}

async fn handle_explain(
    State(state): State<AppState>,
    Json(req): Json<TextRequest>,
) -> Result<Json<ExplainResponse>, AppError> {
    let text = state.explainer.explain(&req.text).await.map_err(|e| AppError {
        status: StatusCode::SERVICE_UNAVAILABLE,
        code: "unavailable".to_string(),
        message: e.to_string(),
    })?;
    Ok(Json(ExplainResponse { text }))
}

// ============ GET /gita ============

#[derive(Deserialize)]
struct GitaQuery {
    chapter: Option<String>,
    verse: Option<String>,
    search: Option<String>,
    limit: Option<String>,
}

#[derive(Serialize)]
struct DataResponse<T> {
    data: T,
}

#[derive(Serialize)]
struct ListResponse<T> {
    count: usize,
    data: Vec<T>,
}

fn parse_number(raw: &str, err: LibraryError) -> Result<u32, LibraryError> {
    raw.trim().parse::<u32>().map_err(|_| err)
}

async fn handle_gita(
    State(state): State<AppState>,
    Query(q): Query<GitaQuery>,
) -> Result<Response, AppError> {
    let store = state.store.as_ref();

    if let (Some(chapter), Some(verse)) = (&q.chapter, &q.verse) {
        let chapter = parse_number(chapter, LibraryError::InvalidReference)?;
        let verse = parse_number(verse, LibraryError::InvalidReference)?;
        let sloka = library::get_sloka(store, chapter, verse).await?;
        return Ok(Json(DataResponse { data: sloka }).into_response());
    }

    if let Some(chapter) = &q.chapter {
        let chapter = parse_number(chapter, LibraryError::InvalidChapter)?;
        let listing = library::get_chapter(store, chapter).await?;
        return Ok(Json(DataResponse { data: listing }).into_response());
    }

    if let Some(term) = &q.search {
        let hits = library::search_slokas(store, term).await?;
        return Ok(Json(ListResponse {
            count: hits.len(),
            data: hits,
        })
        .into_response());
    }

    let limit = match &q.limit {
        None => DEFAULT_LIST_LIMIT,
        Some(raw) => match raw.trim().parse::<usize>() {
            Ok(n) if n > 0 => n.min(MAX_LIST_LIMIT),
            _ => return Err(bad_request("limit must be a positive integer")),
        },
    };
    let verses = match library::get_all(store, Some(limit)).await {
        Ok(verses) => verses,
        Err(LibraryError::EmptyLibrary) => Vec::new(),
        Err(e) => return Err(e.into()),
    };
    Ok(Json(ListResponse {
        count: verses.len(),
        data: verses,
    })
    .into_response())
}

// ============ GET /daily ============

#[derive(Deserialize)]
struct DailyQuery {
    date: Option<String>,
}

async fn handle_daily(
    State(state): State<AppState>,
    Query(q): Query<DailyQuery>,
) -> Result<Json<DailyVerseState>, AppError> {
    let date = match q.date.as_deref() {
        None => Local::now().date_naive(),
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| bad_request(format!("invalid date '{}': expected YYYY-MM-DD", raw)))?,
    };
    verse_of_the_day(state.store.as_ref(), date)
        .await?
        .map(Json)
        .ok_or_else(|| not_found("No Gita or Bible verses available"))
}
