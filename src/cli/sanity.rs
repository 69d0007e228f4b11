use ndarray::{Array3, s};
use rand::Rng;

use crate::dispatch::{Display, ImageOptions, PlotData, PlotOptions, Result, TextOptions};
use crate::model::{ImageBuffer, PaneId, PaneKind};
use crate::transport::Transport;

fn pane(id: &str) -> Result<PaneId> {
    Ok(PaneId::new(id)?)
}

/// Fills panes `w0`..`w3` so a running server can be checked by eye.
pub(super) fn run_sanity<T: Transport>(display: &Display<T>) -> Result<Vec<(PaneKind, PaneId)>> {
    let mut sent = Vec::with_capacity(4);

    let squares = PlotData::from_rows((0..10_i64).map(|x| [x, x * x]));
    let plot = PlotOptions {
        title: Some("dyplot".into()),
        ..PlotOptions::in_pane(pane("w0")?)
    };
    sent.push((PaneKind::Plot, display.plot(squares, &plot)?));

    let text = TextOptions {
        title: Some("text".into()),
        ..TextOptions::in_pane(pane("w1")?)
    };
    sent.push((PaneKind::Text, display.text("foo", &text)?));

    let mut rng = rand::thread_rng();
    let noise = Array3::from_shape_simple_fn((32, 32, 3), || rng.r#gen::<u8>());
    let noisy = ImageOptions {
        title: Some("random image".into()),
        ..ImageOptions::in_pane(pane("w2")?)
    };
    sent.push((
        PaneKind::Image,
        display.image(&ImageBuffer::from(noise), &noisy)?,
    ));

    let mut red = Array3::<u8>::zeros((32, 32, 3));
    red.slice_mut(s![.., .., 0]).fill(255);
    let solid = ImageOptions {
        title: Some("red image".into()),
        ..ImageOptions::in_pane(pane("w3")?)
    };
    sent.push((PaneKind::Image, display.image(&ImageBuffer::from(red), &solid)?));

    Ok(sent)
}
