//! In-memory implementation of the poll API contract, used by the core
//! crate's integration tests and runnable as a standalone backend.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Poll {
    pub id: u64,
    pub question: String,
    pub created_by: String,
    pub created_at: String,
    pub options: Vec<PollOption>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PollOption {
    pub text: String,
    pub vote_count: u64,
}

#[derive(Debug, Deserialize)]
pub struct PageParams {
    #[serde(default)]
    pub skip: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    10
}

struct AppState {
    users: RwLock<HashMap<String, u64>>,
    polls: Vec<Poll>,
}

type SharedState = Arc<AppState>;

/// Router seeded with `sample_polls` and no registered users.
pub fn app() -> Router {
    app_with_polls(sample_polls())
}

/// Router with a caller-provided poll set, for tests that need control
/// over the data.
pub fn app_with_polls(polls: Vec<Poll>) -> Router {
    let state: SharedState = Arc::new(AppState {
        users: RwLock::new(HashMap::new()),
        polls,
    });
    Router::new()
        .route("/register", post(register))
        .route("/polls", get(list_polls))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Twelve polls, enough for pagination tests to skip past a full page.
pub fn sample_polls() -> Vec<Poll> {
    let questions = [
        "What is your favorite programming language?",
        "Tabs or spaces?",
        "Should we adopt a four-day work week?",
        "Best time for the weekly sync?",
        "Which database should the new service use?",
        "Remote, office or hybrid?",
        "What should we name the release?",
        "Dark mode by default?",
        "Which conference should the team attend?",
        "Coffee or tea for the kitchen order?",
        "Should code review require two approvals?",
        "What goes on the next hack day agenda?",
    ];
    questions
        .iter()
        .enumerate()
        .map(|(i, question)| Poll {
            id: i as u64 + 1,
            question: (*question).to_string(),
            created_by: format!("user_{}", i % 3 + 1),
            created_at: format!("2024-05-{:02}T10:00:00Z", i + 1),
            options: vec![
                PollOption {
                    text: "Yes".to_string(),
                    vote_count: (i as u64 * 7) % 20,
                },
                PollOption {
                    text: "No".to_string(),
                    vote_count: (i as u64 * 3) % 15,
                },
            ],
        })
        .collect()
}

async fn register(
    State(state): State<SharedState>,
    Json(input): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<User>), (StatusCode, Json<Value>)> {
    if input.username.is_empty() || input.password.is_empty() {
        return Err(detail(
            StatusCode::BAD_REQUEST,
            "username and password must not be empty",
        ));
    }
    let mut users = state.users.write().await;
    if users.contains_key(&input.username) {
        return Err(detail(StatusCode::BAD_REQUEST, "username already registered"));
    }
    let id = users.len() as u64 + 1;
    users.insert(input.username.clone(), id);
    Ok((
        StatusCode::CREATED,
        Json(User {
            id,
            username: input.username,
        }),
    ))
}

async fn list_polls(
    State(state): State<SharedState>,
    Query(params): Query<PageParams>,
) -> Json<Vec<Poll>> {
    let polls = state
        .polls
        .iter()
        .skip(params.skip)
        .take(params.limit)
        .cloned()
        .collect();
    Json(polls)
}

/// Error bodies follow the backend's `{"detail": ...}` convention.
fn detail(status: StatusCode, message: &str) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "detail": message })))
}
