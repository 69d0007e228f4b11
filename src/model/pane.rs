use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{CoreError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaneKind {
    Image,
    Text,
    Plot,
}

impl PaneKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Text => "text",
            Self::Plot => "plot",
        }
    }
}

impl fmt::Display for PaneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque pane identifier. The server creates a pane the first time it sees an id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PaneId(String);

impl PaneId {
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(CoreError::EmptyPaneId);
        }
        Ok(Self(id))
    }

    /// Fresh `pane_<uuid>` identifier; needs no coordination with the server.
    pub fn generate() -> Self {
        Self(format!("pane_{}", Uuid::new_v4()))
    }

    /// Caller's id when given, otherwise a generated one.
    pub fn resolve(win: Option<&PaneId>) -> Self {
        win.cloned().unwrap_or_else(Self::generate)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PaneId {
    type Error = CoreError;

    fn try_from(id: String) -> Result<Self> {
        Self::new(id)
    }
}

impl From<PaneId> for String {
    fn from(id: PaneId) -> Self {
        id.0
    }
}

impl fmt::Display for PaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
