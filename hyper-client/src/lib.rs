use common::client::{AgentRequest, Client};
use hyper::client::HttpConnector;
use hyper::{Body, Method, Request};
use log::{debug, error};

const DEFAULT_AGENT_URL: &str = "http://localhost:8126";

/// Submits payloads to the local trace agent over HTTP/1.
pub struct HyperClient {
    client: hyper::Client<HttpConnector>,
    base_url: String
}

impl HyperClient {
    pub fn new() -> Self {
        Self {
            client: hyper::Client::new(),
            base_url: String::from(DEFAULT_AGENT_URL)
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn uri(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}

impl Default for HyperClient {
    fn default() -> Self {
        Self::new()
    }
}

impl Client for HyperClient {
    fn request(&self, req: AgentRequest) {
        let http_req = Request::builder()
            .method(Method::PUT)
            .uri(self.uri(req.endpoint))
            .header("Content-Type", "application/msgpack")
            .header("X-Datadog-Trace-Count", req.trace_count.to_string())
            .header("Datadog-Meta-Lang", "rust")
            .header("Datadog-Meta-Tracer-Version", env!("CARGO_PKG_VERSION"))
            .body(Body::from(req.body));

        let http_req = match http_req {
            Ok(http_req) => http_req,
            Err(err) => {
                error!("failed to build trace request: {err}");
                return;
            }
        };

        let client = self.client.clone();

        tokio::spawn(async move {
            match client.request(http_req).await {
                Ok(res) => debug!("trace agent responded with {}", res.status()),
                Err(err) => error!("failed to send traces to the agent: {err}")
            }
        });
    }
}
