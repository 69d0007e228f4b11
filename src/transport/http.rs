use tracing::{debug, warn};
use ureq::{Agent, AgentBuilder};

use crate::config::DisplayConfig;
use crate::dispatch::Command;

use super::{Result, Transport, TransportError, to_wire_json};

/// Blocking HTTP transport: one `POST <host>:<port>/events` per command.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    agent: Agent,
    url: String,
}

impl HttpTransport {
    pub fn new(config: &DisplayConfig) -> Self {
        let mut builder = AgentBuilder::new();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        Self {
            agent: builder.build(),
            url: config.display_url(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Transport for HttpTransport {
    fn send(&self, command: &Command) -> Result<bool> {
        let body = to_wire_json(command)?;
        debug!(url = %self.url, bytes = body.len(), "posting pane command");
        let response = self
            .agent
            .post(&self.url)
            .set("Content-Type", "application/text")
            .send_string(&body)
            .map_err(|error| match error {
                ureq::Error::Status(code, _) => TransportError::Status {
                    url: self.url.clone(),
                    code,
                },
                ureq::Error::Transport(transport) => TransportError::Request {
                    url: self.url.clone(),
                    message: transport.to_string(),
                },
            })?;
        match response.into_string() {
            Ok(_) => Ok(true),
            Err(error) => {
                warn!(url = %self.url, %error, "display server reply could not be read");
                Ok(false)
            }
        }
    }
}
