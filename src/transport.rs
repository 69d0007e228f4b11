mod error;
mod http;
mod wire;

#[cfg(test)]
mod tests;

pub use error::{Result, TransportError};
pub use http::HttpTransport;
pub use wire::to_wire_json;

use crate::dispatch::Command;

/// Delivers a pane command to the display server.
///
/// Returns `Ok(true)` when the server answered with a readable body. The
/// server's reply is not interpreted beyond that.
pub trait Transport: Send + Sync {
    fn send(&self, command: &Command) -> Result<bool>;
}
