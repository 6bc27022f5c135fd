// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared test helpers: an in-process mock signup service.
//!
//! The mock speaks the same wire contract as the real service
//! (`GET /activities`, `POST /activities/{name}/signup`,
//! `POST /activities/{name}/unregister`) and lets tests script failure modes
//! and count fetches.

use activity_board::config::Config;
use activity_board::services::SignupClient;
use activity_board::status::StatusSlot;
use activity_board::ActivityBoard;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Scripted reply for a mutation endpoint.
#[derive(Clone)]
#[allow(dead_code)]
pub enum MutationScript {
    /// 2xx `{message}`, applying the mutation to the stored collection.
    Succeed,
    /// The given status with the given JSON body.
    Fail(u16, Value),
    /// 200 with a body that is not JSON.
    Garbage,
}

pub struct ServiceState {
    /// The JSON object served by `GET /activities`
    pub activities: Mutex<Value>,
    /// Number of `GET /activities` calls seen
    pub fetch_count: AtomicUsize,
    /// When set, `GET /activities` returns a non-JSON 500
    pub fail_fetch: AtomicBool,
    pub signup: Mutex<MutationScript>,
    pub unregister: Mutex<MutationScript>,
}

pub struct MockService {
    pub base_url: String,
    pub state: Arc<ServiceState>,
}

impl MockService {
    #[allow(dead_code)]
    pub fn fetch_count(&self) -> usize {
        self.state.fetch_count.load(Ordering::SeqCst)
    }

    #[allow(dead_code)]
    pub fn set_fail_fetch(&self, fail: bool) {
        self.state.fail_fetch.store(fail, Ordering::SeqCst);
    }

    #[allow(dead_code)]
    pub fn script_signup(&self, script: MutationScript) {
        *self.state.signup.lock().unwrap() = script;
    }

    #[allow(dead_code)]
    pub fn script_unregister(&self, script: MutationScript) {
        *self.state.unregister.lock().unwrap() = script;
    }
}

/// The fixture collection most tests start from.
#[allow(dead_code)]
pub fn sample_activities() -> Value {
    json!({
        "Chess Club": {
            "description": "Learn strategies and compete in tournaments",
            "schedule": "Fridays, 3:30 PM - 5:00 PM",
            "max_participants": 3,
            "participants": ["alice@mergington.edu", "bob@mergington.edu"]
        },
        "Art Class": {
            "description": "Explore painting and drawing",
            "schedule": "Mondays, 3:30 PM - 5:00 PM",
            "max_participants": 10,
            "participants": []
        }
    })
}

/// Spin up the mock service on an ephemeral port.
pub async fn spawn_service(activities: Value) -> MockService {
    let state = Arc::new(ServiceState {
        activities: Mutex::new(activities),
        fetch_count: AtomicUsize::new(0),
        fail_fetch: AtomicBool::new(false),
        signup: Mutex::new(MutationScript::Succeed),
        unregister: Mutex::new(MutationScript::Succeed),
    });

    let app = Router::new()
        .route("/activities", get(get_activities))
        .route("/activities/{name}/signup", post(signup))
        .route("/activities/{name}/unregister", post(unregister))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock service");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve mock service");
    });

    MockService {
        base_url: format!("http://{addr}"),
        state,
    }
}

/// A board wired to the given mock service.
pub fn test_board(service: &MockService) -> ActivityBoard {
    let config = Config::for_service_url(&service.base_url);
    let api = SignupClient::new(&config).expect("build client");
    ActivityBoard::new(api, StatusSlot::new())
}

async fn get_activities(State(state): State<Arc<ServiceState>>) -> Response {
    state.fetch_count.fetch_add(1, Ordering::SeqCst);
    if state.fail_fetch.load(Ordering::SeqCst) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "service down").into_response();
    }
    Json(state.activities.lock().unwrap().clone()).into_response()
}

async fn signup(
    State(state): State<Arc<ServiceState>>,
    Path(name): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let script = state.signup.lock().unwrap().clone();
    mutation_response(&state, &name, params.get("email"), script, true)
}

async fn unregister(
    State(state): State<Arc<ServiceState>>,
    Path(name): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let script = state.unregister.lock().unwrap().clone();
    mutation_response(&state, &name, params.get("email"), script, false)
}

fn mutation_response(
    state: &ServiceState,
    name: &str,
    email: Option<&String>,
    script: MutationScript,
    is_signup: bool,
) -> Response {
    match script {
        MutationScript::Succeed => {
            let email = email.cloned().unwrap_or_default();
            let mut activities = state.activities.lock().unwrap();
            if let Some(roster) = activities
                .get_mut(name)
                .and_then(|a| a.get_mut("participants"))
                .and_then(Value::as_array_mut)
            {
                if is_signup {
                    roster.push(Value::String(email.clone()));
                } else {
                    roster.retain(|p| p.as_str() != Some(email.as_str()));
                }
            }
            let verb = if is_signup { "Signed up" } else { "Unregistered" };
            Json(json!({ "message": format!("{verb} {email} for {name}") })).into_response()
        }
        MutationScript::Fail(status, body) => (
            StatusCode::from_u16(status).expect("valid status code"),
            Json(body),
        )
            .into_response(),
        MutationScript::Garbage => (StatusCode::OK, "definitely not json").into_response(),
    }
}
