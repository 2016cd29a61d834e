//! Test utilities for the service client
//!
//! Provides a loopback axum stub server, a scripted in-memory [`CropApi`], and
//! helpers for building sample records and results.

use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::{header, Method, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::Router;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use cropyield_core::prelude::*;
use cropyield_core::{
    DistrictRecord, PredictedYield, PredictionRequest, PredictionResult, WeatherReport,
};

use crate::api::CropApi;

// ─────────────────────────────────────────────────────────────────
// Sample data
// ─────────────────────────────────────────────────────────────────

/// Creates a district record with the given crop lists.
///
/// # Arguments
/// * `name` - District name
/// * `crops` - Raw semicolon-delimited major crop text
pub fn test_record(name: &str, crops: &str) -> DistrictRecord {
    DistrictRecord {
        name: name.to_string(),
        description: format!("{name} district"),
        major_crops: Some(crops.to_string()),
        fruits: None,
        vegetables: None,
    }
}

/// Creates a complete prediction result
pub fn test_result(production: f64) -> PredictionResult {
    PredictionResult {
        prediction: Some(PredictedYield {
            predicted_production: Some(production),
        }),
        weather: Some(WeatherReport {
            temperature: Some(30.0),
            humidity: Some(70.0),
            rainfall: Some(120.0),
        }),
    }
}

// ─────────────────────────────────────────────────────────────────
// Loopback HTTP stub
// ─────────────────────────────────────────────────────────────────

/// A canned HTTP response
#[derive(Debug, Clone)]
pub struct StubResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
    /// Held back this long before replying
    pub delay: Option<Duration>,
}

impl StubResponse {
    pub fn json(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: "application/json",
            body: body.into(),
            delay: None,
        }
    }

    pub fn text(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: "text/plain",
            body: body.into(),
            delay: None,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

/// A request as seen by [`StubServer`]
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub body: String,
}

impl RecordedRequest {
    pub fn json(&self) -> Option<serde_json::Value> {
        serde_json::from_str(&self.body).ok()
    }
}

#[derive(Clone)]
struct StubState {
    responses: Arc<Vec<StubResponse>>,
    served: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// axum server on a random loopback port.
///
/// Answers every request, whatever the route, with the next scripted
/// response; once the script runs out the last response repeats. Each
/// request is recorded before its reply is sent.
pub struct StubServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    handle: JoinHandle<()>,
}

impl StubServer {
    pub async fn start(responses: Vec<StubResponse>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub listener");
        let addr = listener.local_addr().expect("stub listener address");
        let requests = Arc::new(Mutex::new(Vec::new()));

        let state = StubState {
            responses: Arc::new(responses),
            served: Arc::new(AtomicUsize::new(0)),
            requests: requests.clone(),
        };
        let app = Router::new().fallback(scripted_reply).with_state(state);

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                warn!("Stub server stopped: {}", e);
            }
        });

        Self {
            addr,
            requests,
            handle,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("stub request log").clone()
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn scripted_reply(
    State(state): State<StubState>,
    method: Method,
    uri: Uri,
    body: String,
) -> axum::response::Response {
    state
        .requests
        .lock()
        .expect("stub request log")
        .push(RecordedRequest {
            method: method.to_string(),
            path: uri.path().to_string(),
            body,
        });

    let index = state.served.fetch_add(1, Ordering::SeqCst);
    let response = state
        .responses
        .get(index)
        .or_else(|| state.responses.last())
        .cloned()
        .unwrap_or_else(|| StubResponse::text(404, ""));

    if let Some(delay) = response.delay {
        tokio::time::sleep(delay).await;
    }

    let status = StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        [(header::CONTENT_TYPE, response.content_type)],
        response.body,
    )
        .into_response()
}

// ─────────────────────────────────────────────────────────────────
// Scripted in-memory API
// ─────────────────────────────────────────────────────────────────

/// In-memory [`CropApi`] that replays queued outcomes.
///
/// An empty queue answers with a network error, which keeps a forgotten
/// script from hanging a test.
#[derive(Default)]
pub struct FakeCropApi {
    predictions: Mutex<VecDeque<Result<PredictionResult>>>,
    districts: Mutex<VecDeque<Result<Vec<DistrictRecord>>>>,
    requests: Mutex<Vec<PredictionRequest>>,
    predict_calls: AtomicUsize,
    district_calls: AtomicUsize,
}

impl FakeCropApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prediction(self, outcome: Result<PredictionResult>) -> Self {
        self.push_prediction(outcome);
        self
    }

    pub fn with_districts(self, outcome: Result<Vec<DistrictRecord>>) -> Self {
        self.push_districts(outcome);
        self
    }

    pub fn push_prediction(&self, outcome: Result<PredictionResult>) {
        self.predictions
            .lock()
            .expect("fake prediction queue")
            .push_back(outcome);
    }

    pub fn push_districts(&self, outcome: Result<Vec<DistrictRecord>>) {
        self.districts
            .lock()
            .expect("fake district queue")
            .push_back(outcome);
    }

    pub fn predict_calls(&self) -> usize {
        self.predict_calls.load(Ordering::SeqCst)
    }

    pub fn district_calls(&self) -> usize {
        self.district_calls.load(Ordering::SeqCst)
    }

    /// Every prediction request received, oldest first
    pub fn received_requests(&self) -> Vec<PredictionRequest> {
        self.requests.lock().expect("fake request log").clone()
    }
}

impl CropApi for FakeCropApi {
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult> {
        self.predict_calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .expect("fake request log")
            .push(request.clone());
        self.predictions
            .lock()
            .expect("fake prediction queue")
            .pop_front()
            .unwrap_or_else(|| Err(Error::network("no scripted prediction")))
    }

    async fn list_districts(&self) -> Result<Vec<DistrictRecord>> {
        self.district_calls.fetch_add(1, Ordering::SeqCst);
        self.districts
            .lock()
            .expect("fake district queue")
            .pop_front()
            .unwrap_or_else(|| Err(Error::network("no scripted districts")))
    }
}
