use serde_json::Value;
use tracing::{debug, warn};

use crate::config::DisplayConfig;
use crate::encode::{MimeType, encode_data_uri, package};
use crate::model::{ImageBuffer, PaneId, PaneKind};
use crate::normalize::normalize;
use crate::transport::{HttpTransport, Transport};

use super::command::{FigureContent, ImageContent};
use super::{Command, FigureOptions, ImageOptions, PlotData, PlotOptions, Result, TextOptions};

const DEFAULT_TEXT_TITLE: &str = "text";

/// Sends panes to a display server through a [`Transport`].
///
/// Every call resolves a pane id, builds one [`Command`] and issues exactly one
/// request. Nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct Display<T = HttpTransport> {
    transport: T,
}

impl Display<HttpTransport> {
    pub fn new(config: &DisplayConfig) -> Self {
        Self::with_transport(HttpTransport::new(config))
    }

    /// Client for the server named in `~/.display/config.json`, or `localhost:8000`.
    pub fn from_default_config() -> Result<Self> {
        let config = DisplayConfig::load()?;
        Ok(Self::new(&config))
    }
}

impl<T: Transport> Display<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn send(&self, command: &Command) -> Result<bool> {
        Ok(self.transport.send(command)?)
    }

    /// Creates or replaces a pane with arbitrary content.
    pub fn pane(
        &self,
        kind: PaneKind,
        win: Option<&PaneId>,
        title: Option<&str>,
        content: Value,
    ) -> Result<PaneId> {
        let id = PaneId::resolve(win);
        let command = Command::pane(kind, id.clone(), title.map(str::to_string), content);
        debug!(kind = %kind, id = %id, "dispatching pane");
        if !self.send(&command)? {
            warn!(kind = %kind, id = %id, "display server did not acknowledge pane");
        }
        Ok(id)
    }

    pub fn image(&self, buffer: &ImageBuffer, options: &ImageOptions) -> Result<PaneId> {
        let normalized = normalize(buffer, &options.normalize)?;
        let src = encode_data_uri(&normalized, options.encoding)?;
        debug!(
            height = normalized.height(),
            width = normalized.width(),
            encoding = %options.encoding,
            src_len = src.len(),
            "encoded image pane"
        );
        let content = ImageContent {
            src,
            labels: options.labels.as_deref(),
            width: options.width,
        };
        self.pane(
            PaneKind::Image,
            options.win.as_ref(),
            options.title.as_deref(),
            serde_json::to_value(content)?,
        )
    }

    pub fn text(&self, text: &str, options: &TextOptions) -> Result<PaneId> {
        let title = options.title.as_deref().unwrap_or(DEFAULT_TEXT_TITLE);
        self.pane(
            PaneKind::Text,
            options.win.as_ref(),
            Some(title),
            Value::from(text),
        )
    }

    pub fn plot(&self, data: impl Into<PlotData>, options: &PlotOptions) -> Result<PaneId> {
        let data = data.into();
        debug!(rows = data.len(), "plot dataset");
        let content = options.content(data.into_value());
        self.pane(
            PaneKind::Plot,
            options.win.as_ref(),
            options.title.as_deref(),
            Value::Object(content),
        )
    }

    /// Shows an image that is already encoded, such as a PNG rendered by a plotting library.
    pub fn figure(
        &self,
        bytes: &[u8],
        mime_type: MimeType,
        options: &FigureOptions,
    ) -> Result<PaneId> {
        let content = FigureContent {
            src: package(bytes, mime_type),
            width: options.width,
        };
        self.pane(
            PaneKind::Image,
            options.win.as_ref(),
            options.title.as_deref(),
            serde_json::to_value(content)?,
        )
    }
}
