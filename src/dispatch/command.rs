use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::{PaneId, PaneKind};

pub const PANE_COMMAND: &str = "pane";

/// Wire envelope: `{"command": "pane", "type", "id", "title", "content"}`.
///
/// Field order is part of the wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    pub command: String,
    #[serde(rename = "type")]
    pub kind: PaneKind,
    pub id: PaneId,
    pub title: Option<String>,
    pub content: Value,
}

impl Command {
    pub fn pane(kind: PaneKind, id: PaneId, title: Option<String>, content: Value) -> Self {
        Self {
            command: PANE_COMMAND.to_string(),
            kind,
            id,
            title,
            content,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ImageContent<'a> {
    pub(crate) src: String,
    pub(crate) labels: Option<&'a [String]>,
    pub(crate) width: Option<u32>,
}

#[derive(Debug, Serialize)]
pub(crate) struct FigureContent {
    pub(crate) src: String,
    pub(crate) width: Option<u32>,
}
