use serde_json::{Map, Value};

use crate::encode::ImageFormat;
use crate::model::PaneId;
use crate::normalize::NormalizeOptions;

/// Options for [`Display::image`](super::Display::image).
///
/// Defaults: JPEG encoding, jet colormap, observed min/max, no clipping, RGB
/// channel order (`to_bgr = false`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageOptions {
    /// Target pane; a fresh id is generated when `None`.
    pub win: Option<PaneId>,
    pub title: Option<String>,
    pub labels: Option<Vec<String>>,
    /// Display width in pixels, left to the server when `None`.
    pub width: Option<u32>,
    pub encoding: ImageFormat,
    pub normalize: NormalizeOptions,
}

/// Options for [`Display::text`](super::Display::text). The title falls back to `"text"`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextOptions {
    pub win: Option<PaneId>,
    pub title: Option<String>,
}

/// Options for [`Display::plot`](super::Display::plot).
///
/// `labels` names the series; the first one is the X axis. `extra` carries any
/// other dygraphs option verbatim into the pane content.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlotOptions {
    pub win: Option<PaneId>,
    pub title: Option<String>,
    pub labels: Option<Vec<String>>,
    pub extra: Map<String, Value>,
}

/// Options for [`Display::figure`](super::Display::figure).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FigureOptions {
    pub win: Option<PaneId>,
    pub title: Option<String>,
    pub width: Option<u32>,
}

impl ImageOptions {
    pub fn in_pane(win: PaneId) -> Self {
        Self {
            win: Some(win),
            ..Self::default()
        }
    }
}

impl TextOptions {
    pub fn in_pane(win: PaneId) -> Self {
        Self {
            win: Some(win),
            ..Self::default()
        }
    }
}

impl PlotOptions {
    pub fn in_pane(win: PaneId) -> Self {
        Self {
            win: Some(win),
            ..Self::default()
        }
    }

    /// Builds the plot content: caller options, then `file`, then `xlabel`; never `win`.
    pub(crate) fn content(&self, file: Value) -> Map<String, Value> {
        let mut content = Map::new();
        if let Some(title) = &self.title {
            content.insert("title".into(), Value::from(title.as_str()));
        }
        if let Some(labels) = &self.labels {
            content.insert("labels".into(), Value::from(labels.clone()));
        }
        for (key, value) in self.extra.iter().filter(|(key, _)| key.as_str() != "win") {
            content.insert(key.clone(), value.clone());
        }
        content.insert("file".into(), file);
        if let Some(first) = self.labels.as_ref().and_then(|labels| labels.first()) {
            content.insert("xlabel".into(), Value::from(first.as_str()));
        }
        content
    }
}
