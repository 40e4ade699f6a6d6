//! HTML export of figures.
//!
//! A figure is rendered as a target `<div>` plus an inline `Plotly.newPlot`
//! call. The Plotly.js bundle itself is either referenced from a CDN or left
//! to the embedding page.

use std::fmt::Write;

use serde::Serialize;

use super::{Figure, Frame, Layout, Trace};
use crate::error::Result;

/// CDN location of the Plotly.js bundle the generated pages load.
pub const PLOTLY_CDN_URL: &str = "https://cdn.plot.ly/plotly-2.25.0.min.js";

/// Options controlling how a figure is turned into HTML.
#[derive(Debug, Clone)]
pub struct HtmlExport {
    /// Emit a `<script>` tag for the Plotly.js bundle.
    pub include_plotlyjs: bool,
    /// Emit a complete document instead of an embeddable fragment.
    pub full_html: bool,
    /// Start animating frames as soon as the plot is drawn.
    pub auto_play: bool,
    /// Id of the element the plot is drawn into.
    pub div_id: String,
    /// Where the Plotly.js bundle is loaded from.
    pub plotly_js_url: String,
}

impl Default for HtmlExport {
    fn default() -> Self {
        Self {
            include_plotlyjs: true,
            full_html: true,
            auto_play: true,
            div_id: "plot".to_string(),
            plotly_js_url: PLOTLY_CDN_URL.to_string(),
        }
    }
}

impl HtmlExport {
    /// Options for a fragment that is embedded in a page which already
    /// loads Plotly.js. Animation does not start on its own.
    pub fn fragment(div_id: impl Into<String>) -> Self {
        Self {
            include_plotlyjs: false,
            full_html: false,
            auto_play: false,
            div_id: div_id.into(),
            ..Self::default()
        }
    }
}

#[derive(Serialize)]
struct PlotConfig {
    responsive: bool,
}

#[derive(Serialize)]
struct PlotSpec<'a> {
    data: &'a [Trace],
    layout: &'a Layout,
    #[serde(skip_serializing_if = "no_frames")]
    frames: &'a [Frame],
    config: PlotConfig,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn no_frames(frames: &&[Frame]) -> bool {
    frames.is_empty()
}

/// Escapes text for use in HTML element content or a quoted attribute.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Returns a `<script>` tag that loads the bundle at `url`.
#[must_use]
pub fn plotly_script_tag(url: &str) -> String {
    format!(
        r#"<script type="text/javascript" src="{}" charset="utf-8"></script>"#,
        escape_html(url)
    )
}

pub(crate) fn render(fig: &Figure, opts: &HtmlExport) -> Result<String> {
    let spec = PlotSpec {
        data: &fig.data,
        layout: &fig.layout,
        frames: &fig.frames,
        config: PlotConfig { responsive: true },
    };
    // "</" inside a JSON string would close the inline script early.
    let spec_json = serde_json::to_string(&spec)?.replace("</", "<\\/");
    let id_js = serde_json::to_string(&opts.div_id)?;
    let id_attr = escape_html(&opts.div_id);

    let mut html = String::with_capacity(spec_json.len() + 512);

    if opts.full_html {
        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\" />\n");
        if let Some(title) = &fig.layout.title {
            let _ = writeln!(html, "<title>{}</title>", escape_html(&title.text));
        }
        if opts.include_plotlyjs {
            html.push_str(&plotly_script_tag(&opts.plotly_js_url));
            html.push('\n');
        }
        html.push_str("</head>\n<body>\n");
    } else if opts.include_plotlyjs {
        html.push_str(&plotly_script_tag(&opts.plotly_js_url));
        html.push('\n');
    }

    let then = if opts.auto_play && !fig.frames.is_empty() {
        format!(".then(function () {{ Plotly.animate({id_js}, null); }})")
    } else {
        String::new()
    };

    let _ = write!(
        html,
        r#"<div>
<div id="{id_attr}" class="plotly-graph-div" style="height:100%; width:100%;"></div>
<script type="text/javascript">
if (document.getElementById({id_js})) {{
    Plotly.newPlot({id_js}, {spec_json}){then};
}}
</script>
</div>"#
    );

    if opts.full_html {
        html.push_str("\n</body>\n</html>\n");
    }

    Ok(html)
}
