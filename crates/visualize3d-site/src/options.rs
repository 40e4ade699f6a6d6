//! Configuration options for generated sites.

use std::path::Path;

use serde::{Deserialize, Serialize};
use visualize3d_core::{Margin, Result, VizError, PLOTLY_CDN_URL};

/// Layout and asset options for [`PlotlyWebsiteBuilder`](crate::PlotlyWebsiteBuilder).
///
/// Missing fields fall back to their defaults when deserializing, so a
/// config file only needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteOptions {
    /// Plotly.js bundle referenced from every object page.
    pub plotly_js_url: String,

    /// Number of plot cells per table row.
    pub plots_per_row: usize,

    /// Fixed width of each table cell, in pixels.
    pub cell_width_px: u32,

    /// Size of embedded video players.
    pub video_width: u32,
    pub video_height: u32,

    /// Margin applied to every registered figure. The top inset leaves room
    /// for the title.
    pub plot_margin: Margin,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            plotly_js_url: PLOTLY_CDN_URL.to_string(),
            plots_per_row: 3,
            cell_width_px: 400,
            video_width: 640,
            video_height: 360,
            plot_margin: Margin::new(5, 5, 40, 5),
        }
    }
}

impl SiteOptions {
    /// Parses options from a JSON string and validates them.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Loads options from a JSON file and validates them.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let options = Self::from_json_str(&text)?;
        log::debug!("loaded site options from {}", path.display());
        Ok(options)
    }

    /// Checks that every value is usable.
    pub fn validate(&self) -> Result<()> {
        if self.plots_per_row == 0 {
            return Err(VizError::InvalidOption(
                "plots_per_row must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let o = SiteOptions::default();
        assert_eq!(o.plots_per_row, 3);
        assert_eq!((o.video_width, o.video_height), (640, 360));
        assert_eq!(o.plot_margin, Margin::new(5, 5, 40, 5));
        assert!(o.validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let o = SiteOptions::from_json_str(r#"{ "plots_per_row": 4 }"#).unwrap();
        assert_eq!(o.plots_per_row, 4);
        assert_eq!(o.cell_width_px, 400);
        assert_eq!(o.plotly_js_url, PLOTLY_CDN_URL);
    }

    #[test]
    fn test_zero_per_row_rejected() {
        let err = SiteOptions::from_json_str(r#"{ "plots_per_row": 0 }"#).unwrap_err();
        assert!(matches!(err, VizError::InvalidOption(_)));
    }

    #[test]
    fn test_json_roundtrip() {
        let o = SiteOptions {
            video_width: 320,
            ..SiteOptions::default()
        };
        let json = serde_json::to_string(&o).unwrap();
        assert_eq!(SiteOptions::from_json_str(&json).unwrap(), o);
    }
}
