use std::sync::mpsc::SyncSender;

use log::warn;

/// One assembled payload, addressed to the agent endpoint that understands
/// its format.
#[derive(Debug)]
pub struct AgentRequest {
    pub endpoint: &'static str,
    pub trace_count: u32,
    pub body: Vec<u8>
}

pub trait Client {
    fn request(&self, req: AgentRequest);
}

/// Hands payloads to an in-process consumer over a channel. Used by
/// embedders that manage their own transport, and by tests.
pub struct BufferClient {
    tx: SyncSender<AgentRequest>
}

impl BufferClient {
    pub fn new(tx: SyncSender<AgentRequest>) -> Self {
        Self {
            tx
        }
    }
}

impl Client for BufferClient {
    fn request(&self, req: AgentRequest) {
        if let Err(err) = self.tx.send(req) {
            warn!("payload receiver went away, dropping {} bytes", err.0.body.len());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;

    #[test]
    fn forwards_requests_to_the_receiver() {
        let (tx, rx) = mpsc::sync_channel(1);
        let client = BufferClient::new(tx);

        client.request(AgentRequest {
            endpoint: "/v0.4/traces",
            trace_count: 1,
            body: vec![0x90]
        });

        let received = rx.try_recv().unwrap();

        assert_eq!(received.endpoint, "/v0.4/traces");
        assert_eq!(received.trace_count, 1);
        assert_eq!(received.body, [0x90]);
    }

    #[test]
    fn dropping_the_receiver_does_not_panic() {
        let (tx, rx) = mpsc::sync_channel(1);
        let client = BufferClient::new(tx);

        drop(rx);

        client.request(AgentRequest {
            endpoint: "/v0.4/traces",
            trace_count: 0,
            body: Vec::new()
        });
    }
}
