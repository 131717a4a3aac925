// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod live;

use artsfest_console::{
    Console, ConsoleConfig, ConsoleError, LoadReport, OperatorFeedback, Outcome, SaveStatus,
};
use artsfest_domain::{
    Category, CompetitionCatalog, CompetitionName, DomainError, ResultKey, ResultSet, Tz,
    parse_timezone,
};
use artsfest_persistence::Persistence;
use axum::{
    Json, Router,
    extract::{FromRef, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use live::{LiveEventBroadcaster, LiveFeedback, live_events_handler};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{info, warn};

/// Arts Festival Results Console - HTTP server for curating competitions and results
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Collection the two documents are stored under
    #[arg(long, default_value = artsfest_persistence::DEFAULT_COLLECTION)]
    collection: String,

    /// IANA time zone for upload display dates
    #[arg(long, default_value = "Asia/Kolkata")]
    timezone: String,

    /// How long "saved" is shown before returning to idle, in milliseconds
    #[arg(long, default_value_t = 2000)]
    saved_display_ms: u64,
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// The operator session.
    console: Arc<Mutex<Console<Persistence>>>,
    /// Live event fan-out for `/live`.
    broadcaster: Arc<LiveEventBroadcaster>,
}

impl FromRef<AppState> for Arc<LiveEventBroadcaster> {
    fn from_ref(state: &AppState) -> Self {
        Arc::clone(&state.broadcaster)
    }
}

/// API request for adding a competition.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct AddCompetitionRequest {
    /// The category label, e.g. `LP`.
    category: Option<String>,
    /// The competition name.
    name: String,
}

/// API request for deleting a competition.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct DeleteCompetitionRequest {
    /// The category label.
    category: String,
    /// Zero-based position within the category.
    index: usize,
    /// Whether the operator confirmed the deletion.
    confirmed: bool,
}

/// API request for uploading a result link.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct UploadResultRequest {
    /// The category label.
    category: Option<String>,
    /// The competition name.
    competition: String,
    /// Absolute URL of the results PDF.
    pdf_link: String,
}

/// API request for deleting a result record.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct DeleteResultRequest {
    /// The category label.
    category: String,
    /// The competition name.
    competition: String,
    /// Whether the operator confirmed the deletion.
    confirmed: bool,
}

/// API response for any mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MutationResponse {
    /// Whether the request was accepted.
    success: bool,
    /// True when the target did not exist and nothing changed.
    unchanged: bool,
    /// The save status right after the request.
    status: SaveStatus,
}

/// API response for `GET /state`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StateResponse {
    /// Competitions grouped by category.
    competitions: CompetitionCatalog,
    /// Result records keyed by `Category-Competition`.
    results: ResultSet,
    /// The current save status.
    status: SaveStatus,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// Errors a handler can return.
#[derive(Debug, thiserror::Error)]
enum HttpError {
    /// The request failed validation.
    #[error("{0}")]
    Invalid(#[from] DomainError),
    /// The console rejected the operation.
    #[error("{0}")]
    Rejected(#[from] ConsoleError),
    /// The deletion was not confirmed.
    #[error("Deletion was not confirmed")]
    Declined,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status: StatusCode = match &self {
            Self::Invalid(_) | Self::Rejected(_) => StatusCode::BAD_REQUEST,
            Self::Declined => StatusCode::CONFLICT,
        };
        warn!(status = %status, error = %self, "Request rejected");
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}

/// Parses an optional category label. A blank label means no selection.
fn parse_optional_category(label: Option<&str>) -> Result<Option<Category>, DomainError> {
    match label.map(str::trim) {
        None | Some("") => Ok(None),
        Some(label) => label.parse().map(Some),
    }
}

/// Converts an operation outcome into a response.
///
/// The write is not awaited; its progress is reported over `/live`.
fn outcome_to_response(
    outcome: Outcome,
    status: SaveStatus,
) -> Result<Json<MutationResponse>, HttpError> {
    match outcome {
        Outcome::Committed(_pending) => Ok(Json(MutationResponse {
            success: true,
            unchanged: false,
            status,
        })),
        Outcome::Unchanged => Ok(Json(MutationResponse {
            success: true,
            unchanged: true,
            status,
        })),
        Outcome::Declined => Err(HttpError::Declined),
    }
}

/// Handler for GET `/state` endpoint.
async fn handle_get_state(AxumState(app_state): AxumState<AppState>) -> Json<StateResponse> {
    let console = app_state.console.lock().await;
    Json(StateResponse {
        competitions: console.catalog().clone(),
        results: console.results().clone(),
        status: console.status(),
    })
}

/// Handler for POST `/competitions` endpoint.
async fn handle_add_competition(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<AddCompetitionRequest>,
) -> Result<Json<MutationResponse>, HttpError> {
    info!(category = ?req.category, name = %req.name, "Handling add_competition request");

    let category: Option<Category> = parse_optional_category(req.category.as_deref())?;

    let mut console = app_state.console.lock().await;
    let outcome: Outcome = console.add_competition(category, &req.name)?;
    outcome_to_response(outcome, console.status())
}

/// Handler for POST `/competitions/delete` endpoint.
async fn handle_delete_competition(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<DeleteCompetitionRequest>,
) -> Result<Json<MutationResponse>, HttpError> {
    info!(
        category = %req.category,
        index = req.index,
        confirmed = req.confirmed,
        "Handling delete_competition request"
    );

    let category: Category = req.category.trim().parse()?;

    let mut console = app_state.console.lock().await;
    let outcome: Outcome = console.delete_competition(category, req.index, |_| req.confirmed)?;
    outcome_to_response(outcome, console.status())
}

/// Handler for POST `/results` endpoint.
async fn handle_upload_result(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<UploadResultRequest>,
) -> Result<Json<MutationResponse>, HttpError> {
    info!(
        category = ?req.category,
        competition = %req.competition,
        "Handling upload_result request"
    );

    let category: Option<Category> = parse_optional_category(req.category.as_deref())?;

    let mut console = app_state.console.lock().await;
    let outcome: Outcome = console.upload_result(category, &req.competition, &req.pdf_link)?;
    outcome_to_response(outcome, console.status())
}

/// Handler for POST `/results/delete` endpoint.
async fn handle_delete_result(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<DeleteResultRequest>,
) -> Result<Json<MutationResponse>, HttpError> {
    info!(
        category = %req.category,
        competition = %req.competition,
        confirmed = req.confirmed,
        "Handling delete_result request"
    );

    let category: Category = req.category.trim().parse()?;

    let mut console = app_state.console.lock().await;
    // A blank name can never match a stored key, so there is nothing to delete.
    let Ok(competition) = CompetitionName::new(&req.competition) else {
        return outcome_to_response(Outcome::Unchanged, console.status());
    };
    let key: ResultKey = ResultKey::new(category, competition);
    let outcome: Outcome = console.delete_result(&key, |_| req.confirmed)?;
    outcome_to_response(outcome, console.status())
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/state", get(handle_get_state))
        .route("/competitions", post(handle_add_competition))
        .route("/competitions/delete", post(handle_delete_competition))
        .route("/results", post(handle_upload_result))
        .route("/results/delete", post(handle_delete_result))
        .route("/live", get(live_events_handler))
        .with_state(app_state)
}

/// Creates the shared state around a loaded console session.
async fn create_app_state(
    persistence: Persistence,
    config: ConsoleConfig,
) -> (AppState, LoadReport) {
    let broadcaster: Arc<LiveEventBroadcaster> = Arc::new(LiveEventBroadcaster::new());
    let feedback: Arc<dyn OperatorFeedback> =
        Arc::new(LiveFeedback::new(Arc::clone(&broadcaster)));

    let mut console: Console<Persistence> =
        Console::new(Arc::new(persistence), feedback, config);
    let report: LoadReport = console.load().await;

    let app_state: AppState = AppState {
        console: Arc::new(Mutex::new(console)),
        broadcaster,
    };
    (app_state, report)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Arts Festival Results Console");

    let timezone: Tz = parse_timezone(&args.timezone)?;
    let config: ConsoleConfig = ConsoleConfig {
        saved_display: Duration::from_millis(args.saved_display_ms),
        timezone,
    };

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    }
    .with_collection(args.collection);

    info!(collection = %persistence.collection(), timezone = %timezone, "Loading session");
    let (app_state, report) = create_app_state(persistence, config).await;
    info!(
        competitions = ?report.competitions,
        results = ?report.results,
        "Session ready"
    );

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests;
