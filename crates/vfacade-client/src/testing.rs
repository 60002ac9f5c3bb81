//! Test utilities for vfacade-client
//!
//! Provides an in-process stand-in for the upstream vehicle service, so the
//! facade can be exercised over real HTTP without network access.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use url::Url;
use vfacade_core::{EndpointTable, UpstreamRequest};

/// Builds the stub's answer for a request: `(http status, JSON body)`
pub type Responder = Arc<dyn Fn(&str, &UpstreamRequest) -> (u16, Value) + Send + Sync>;

/// A request received by the stub
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    /// Request path (e.g. "/getEnergyService/")
    pub path: String,
    /// `Content-Type` header, if any
    pub content_type: Option<String>,
    /// Decoded request body
    pub body: UpstreamRequest,
}

#[derive(Clone)]
struct StubState {
    responder: Responder,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// A stub upstream server that automatically shuts down when dropped
pub struct StubUpstream {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
    handle: Option<tokio::task::JoinHandle<()>>,
}

impl StubUpstream {
    /// Start a stub answering every request through `responder`
    ///
    /// # Example
    ///
    /// ```ignore
    /// use vfacade_client::testing::StubUpstream;
    ///
    /// let stub = StubUpstream::start(|_path, _req| (200, json!({"status": "200", "data": {}}))).await?;
    /// let endpoints = stub.endpoints()?;
    /// ```
    pub async fn start<F>(responder: F) -> std::io::Result<Self>
    where
        F: Fn(&str, &UpstreamRequest) -> (u16, Value) + Send + Sync + 'static,
    {
        // Bind to any available port
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            responder: Arc::new(responder),
            requests: requests.clone(),
        };
        let router = Router::new().fallback(handle_request).with_state(state);

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();

        let handle = tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
                .ok();
        });

        // Give server a moment to start
        tokio::time::sleep(Duration::from_millis(10)).await;

        Ok(Self {
            addr,
            requests,
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
        })
    }

    /// Start a stub that behaves like the real service for the two
    /// reference vehicles (see [`gm_fixture`])
    pub async fn gm() -> std::io::Result<Self> {
        Self::start(gm_fixture).await
    }

    /// Get the base URL of the stub
    pub fn base_url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    /// Endpoint table pointing every resource kind at this stub
    pub fn endpoints(&self) -> Result<EndpointTable, url::ParseError> {
        EndpointTable::from_base(&Url::parse(&self.base_url())?)
    }

    /// Requests received so far, in arrival order
    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().await.clone()
    }

    /// Shutdown the stub gracefully
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for StubUpstream {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

async fn handle_request(
    State(state): State<StubState>,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let Ok(request) = serde_json::from_slice::<UpstreamRequest>(&body) else {
        return (StatusCode::BAD_REQUEST, "malformed request body").into_response();
    };

    let path = uri.path().to_string();
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    state.requests.lock().await.push(RecordedRequest {
        path: path.clone(),
        content_type,
        body: request.clone(),
    });

    let (status, body) = (state.responder)(&path, &request);
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(body)).into_response()
}

/// Vehicle id with a gas engine and four doors
pub const GAS_VEHICLE: &str = "1234";
/// Vehicle id with an electric drive train and two doors
pub const ELECTRIC_VEHICLE: &str = "1235";

fn tagged(type_name: &str, value: &str) -> Value {
    json!({"type": type_name, "value": value})
}

fn not_found(id: &str) -> (u16, Value) {
    (
        200,
        json!({"status": "404", "reason": format!("Vehicle id: {} not found.", id)}),
    )
}

fn door(location: &str, locked: bool) -> Value {
    json!({
        "location": tagged("String", location),
        "locked": tagged("Boolean", if locked { "True" } else { "False" }),
    })
}

/// Canned answers modelled on the real upstream service.
///
/// Unknown vehicles get an internal `"404"` status inside a transport-level
/// 200, exactly like the real service. Engine commands other than
/// `START_VEHICLE`/`STOP_VEHICLE` are rejected with an internal `"400"`.
pub fn gm_fixture(path: &str, request: &UpstreamRequest) -> (u16, Value) {
    let id = request.id.as_str();
    if id != GAS_VEHICLE && id != ELECTRIC_VEHICLE {
        return not_found(id);
    }
    let gas = id == GAS_VEHICLE;

    let data = match path {
        "/getVehicleInfoService/" => {
            if gas {
                json!({
                    "vin": tagged("String", "123123412412"),
                    "color": tagged("String", "Metallic Silver"),
                    "fourDoorSedan": tagged("Boolean", "True"),
                    "twoDoorCoupe": tagged("Boolean", "False"),
                    "driveTrain": tagged("String", "v8"),
                })
            } else {
                json!({
                    "vin": tagged("String", "1235AZ91XP"),
                    "color": tagged("String", "Forest Green"),
                    "fourDoorSedan": tagged("Boolean", "False"),
                    "twoDoorCoupe": tagged("Boolean", "True"),
                    "driveTrain": tagged("String", "electric"),
                })
            }
        }
        "/getSecurityStatusService/" => {
            let doors = if gas {
                vec![
                    door("frontLeft", false),
                    door("frontRight", true),
                    door("backLeft", true),
                    door("backRight", false),
                ]
            } else {
                vec![door("frontLeft", true), door("frontRight", true)]
            };
            json!({"doors": {"type": "Array", "values": doors}})
        }
        "/getEnergyService/" => {
            if gas {
                json!({
                    "tankLevel": tagged("Number", "30.2"),
                    "batteryLevel": tagged("Null", "null"),
                })
            } else {
                json!({
                    "tankLevel": tagged("Null", "null"),
                    "batteryLevel": tagged("Number", "73.2"),
                })
            }
        }
        "/actionEngineService/" => {
            return match request.command.as_deref() {
                Some("START_VEHICLE") | Some("STOP_VEHICLE") => {
                    let status = if gas { "EXECUTED" } else { "FAILED" };
                    (
                        200,
                        json!({"status": "200", "actionResult": {"status": status}}),
                    )
                }
                _ => (200, json!({"status": "400", "reason": "Invalid command"})),
            };
        }
        _ => return (404, json!({"error": "unknown service"})),
    };

    (200, json!({"service": path.trim_matches('/'), "status": "200", "data": data}))
}
