//! In-process stand-in for the UpCloud API.
//!
//! Replies with canned responses keyed by method and path (query included)
//! and records every request it sees.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use client::{ClientConfig, UpCloudClient};
use tokio::net::TcpListener;
use tokio::runtime::Runtime;

pub const USERNAME: &str = "api-user";
pub const PASSWORD: &str = "s3cr3t";
const PREFIX: &str = "/1.3";

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: String,
}

impl Recorded {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

#[derive(Debug, Clone)]
struct Canned {
    status: StatusCode,
    body: String,
    delay: Option<Duration>,
}

#[derive(Default)]
struct FakeApi {
    routes: Mutex<HashMap<(Method, String), Canned>>,
    requests: Mutex<Vec<Recorded>>,
}

pub struct FakeServer {
    api: Arc<FakeApi>,
    addr: SocketAddr,
    _runtime: Runtime,
}

impl FakeServer {
    pub fn start() -> Self {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .unwrap();
        let api = Arc::new(FakeApi::default());
        let listener = runtime
            .block_on(TcpListener::bind("127.0.0.1:0"))
            .unwrap();
        let addr = listener.local_addr().unwrap();

        let app = Router::new().fallback(handle).with_state(Arc::clone(&api));
        runtime.spawn(async move { axum::serve(listener, app).await });

        Self {
            api,
            addr,
            _runtime: runtime,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn client(&self) -> UpCloudClient {
        self.client_with_timeout(Some(Duration::from_secs(5)))
    }

    pub fn client_with_timeout(&self, timeout: Option<Duration>) -> UpCloudClient {
        let config = ClientConfig::new(USERNAME, PASSWORD)
            .timeout(timeout)
            .api_url(self.url());
        UpCloudClient::builder().build(&config).unwrap()
    }

    pub fn reply(&self, method: Method, path: &str, status: u16, body: &str) -> &Self {
        self.insert(method, path, status, body, None)
    }

    pub fn reply_json(&self, method: Method, path: &str, body: &serde_json::Value) -> &Self {
        self.insert(method, path, 200, &body.to_string(), None)
    }

    pub fn reply_slowly(&self, method: Method, path: &str, delay: Duration) -> &Self {
        self.insert(method, path, 200, "{}", Some(delay))
    }

    fn insert(
        &self,
        method: Method,
        path: &str,
        status: u16,
        body: &str,
        delay: Option<Duration>,
    ) -> &Self {
        let canned = Canned {
            status: StatusCode::from_u16(status).unwrap(),
            body: body.to_string(),
            delay,
        };
        self.api
            .routes
            .lock()
            .unwrap()
            .insert((method, format!("{PREFIX}{path}")), canned);
        self
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.api.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Recorded {
        self.requests().pop().unwrap()
    }
}

async fn handle(
    State(api): State<Arc<FakeApi>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let path = uri
        .path_and_query()
        .map_or_else(|| uri.path().to_string(), ToString::to_string);

    api.requests.lock().unwrap().push(Recorded {
        method: method.clone(),
        path: path.clone(),
        headers,
        body,
    });

    let canned = api.routes.lock().unwrap().get(&(method, path)).cloned();
    match canned {
        Some(canned) => {
            if let Some(delay) = canned.delay {
                tokio::time::sleep(delay).await;
            }
            (canned.status, canned.body).into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            r#"{"error":{"error_code":"NOT_FOUND","error_message":"No such route."}}"#,
        )
            .into_response(),
    }
}
