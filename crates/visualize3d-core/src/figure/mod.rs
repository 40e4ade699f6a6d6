//! Figure model.
//!
//! A [`Figure`] is a list of traces plus a layout, serialized to the JSON
//! schema Plotly.js consumes. Figures are built by the plotting crate and
//! embedded into pages by the site builder.

mod export;
mod layout;
mod trace;

use std::path::Path;

use serde::Serialize;

use crate::error::Result;

pub use export::{escape_html, plotly_script_tag, HtmlExport, PLOTLY_CDN_URL};
pub use layout::{AspectRatio, Axis, Layout, Legend, Margin, Scene, Title, DEFAULT_SCENE};
pub use trace::{ColorBar, Line, Marker, MarkerColor, MarkerSize, Mode, Scatter3d, Surface, Trace};

/// A named animation frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub name: String,
    pub data: Vec<Trace>,
}

/// A complete figure: traces, layout and optional animation frames.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub frames: Vec<Frame>,
}

impl Figure {
    /// Creates an empty figure.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a trace.
    pub fn add_trace(&mut self, trace: impl Into<Trace>) -> &mut Self {
        self.data.push(trace.into());
        self
    }

    /// Appends several traces in order.
    pub fn add_traces(&mut self, traces: impl IntoIterator<Item = Trace>) -> &mut Self {
        self.data.extend(traces);
        self
    }

    /// Returns the number of traces.
    #[must_use]
    pub fn num_traces(&self) -> usize {
        self.data.len()
    }

    /// Sets the figure title.
    pub fn set_title(&mut self, text: impl Into<String>) -> &mut Self {
        self.layout.title = Some(Title { text: text.into() });
        self
    }

    /// Sets the plot margins.
    pub fn set_margin(&mut self, margin: Margin) -> &mut Self {
        self.layout.margin = Some(margin);
        self
    }

    /// Shows or hides the legend.
    pub fn set_showlegend(&mut self, show: bool) -> &mut Self {
        self.layout.showlegend = Some(show);
        self
    }

    /// Sets (or replaces) the axis configuration of a scene.
    pub fn set_scene(&mut self, id: impl Into<String>, scene: Scene) -> &mut Self {
        self.layout.scenes.insert(id.into(), scene);
        self
    }

    /// Returns the axis configuration of a scene, if set.
    #[must_use]
    pub fn scene(&self, id: &str) -> Option<&Scene> {
        self.layout.scenes.get(id)
    }

    /// Appends an animation frame.
    pub fn add_frame(&mut self, name: impl Into<String>, data: Vec<Trace>) -> &mut Self {
        self.frames.push(Frame {
            name: name.into(),
            data,
        });
        self
    }

    /// Serializes the figure to Plotly JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Renders the figure to HTML.
    pub fn to_html(&self, opts: &HtmlExport) -> Result<String> {
        export::render(self, opts)
    }

    /// Writes the figure as HTML to `path`.
    pub fn write_html(&self, path: impl AsRef<Path>, opts: &HtmlExport) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_html(opts)?)?;
        log::debug!("wrote figure to {}", path.display());
        Ok(())
    }
}
