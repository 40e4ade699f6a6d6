//! Static website builder.
//!
//! [`PlotlyWebsiteBuilder`] collects figures and videos under categories and
//! writes one page per object plus an index. Every page is rendered in memory
//! before anything is written, so a pairing error leaves no object pages
//! behind.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use visualize3d_core::figure::plotly_script_tag;
use visualize3d_core::{Figure, HtmlExport, Result, VizError};

use crate::grouping::{group_by_object, OrderedMultiMap};
use crate::html::{self, Document, Element};
use crate::options::SiteOptions;

/// A figure registered under a category.
#[derive(Debug, Clone)]
pub struct PlotEntry {
    pub id: String,
    pub figure: Figure,
}

impl PlotEntry {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A video registered under a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoEntry {
    pub id: String,
    /// Path or URL, used verbatim as the video source.
    pub reference: String,
}

impl VideoEntry {
    fn id(&self) -> &str {
        &self.id
    }
}

/// One object page produced by [`PlotlyWebsiteBuilder::write_site`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageInfo {
    pub category: String,
    pub object_id: String,
    pub path: PathBuf,
}

/// What a [`PlotlyWebsiteBuilder::write_site`] call produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSummary {
    /// Object pages in the order they were written.
    pub pages: Vec<PageInfo>,
    pub index: PathBuf,
}

struct RenderedPage {
    category: String,
    object_id: String,
    html: String,
}

/// Accumulates plots and videos and writes them out as a static site.
#[derive(Debug, Clone)]
pub struct PlotlyWebsiteBuilder {
    title: String,
    options: SiteOptions,
    plots: OrderedMultiMap<String, PlotEntry>,
    videos: OrderedMultiMap<String, VideoEntry>,
}

impl PlotlyWebsiteBuilder {
    /// Creates a builder with default options.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_options(title, SiteOptions::default())
    }

    /// Creates a builder with the given options.
    pub fn with_options(title: impl Into<String>, options: SiteOptions) -> Self {
        Self {
            title: title.into(),
            options,
            plots: OrderedMultiMap::new(),
            videos: OrderedMultiMap::new(),
        }
    }

    /// Returns the site title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the options in use.
    pub fn options(&self) -> &SiteOptions {
        &self.options
    }

    /// Registers a figure under `category`. The figure's margins are reset to
    /// the configured inset.
    pub fn register_plot(
        &mut self,
        category: impl Into<String>,
        id: impl Into<String>,
        mut figure: Figure,
    ) {
        let (category, id) = (category.into(), id.into());
        figure.set_margin(self.options.plot_margin);
        log::debug!("registered plot '{id}' under '{category}'");
        self.plots.push(category, PlotEntry { id, figure });
    }

    /// Registers a video shown beneath the plot with the same id.
    pub fn register_video(
        &mut self,
        category: impl Into<String>,
        id: impl Into<String>,
        reference: impl Into<String>,
    ) {
        let (category, id) = (category.into(), id.into());
        log::debug!("registered video '{id}' under '{category}'");
        self.videos.push(
            category,
            VideoEntry {
                id,
                reference: reference.into(),
            },
        );
    }

    /// Returns the plots registered under `category`, in registration order.
    pub fn plots(&self, category: &str) -> &[PlotEntry] {
        self.plots.get(&category.to_string()).unwrap_or_default()
    }

    /// Returns the videos registered under `category`, in registration order.
    pub fn videos(&self, category: &str) -> &[VideoEntry] {
        self.videos.get(&category.to_string()).unwrap_or_default()
    }

    /// Returns the categories in first-registration order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.plots.keys().map(String::as_str)
    }

    /// Writes one `{object_id}.html` per (category, object id) pair plus
    /// `index.html` into `site_dir`, creating it if needed.
    ///
    /// Existing files with the same names are overwritten. An object id that
    /// occurs in several categories ends up with the page of the last one.
    /// Object ids that are empty, contain a path separator or `..`, or equal
    /// `index` are rejected before anything is written.
    pub fn write_site(&self, site_dir: impl AsRef<Path>) -> Result<SiteSummary> {
        let site_dir = site_dir.as_ref();
        fs::create_dir_all(site_dir)?;

        let (pages, index) = self.render()?;

        let mut written: HashMap<&str, &str> = HashMap::new();
        let mut infos = Vec::with_capacity(pages.len());
        for page in &pages {
            if let Some(prev) = written.insert(&page.object_id, &page.category) {
                log::warn!(
                    "object '{}' in category '{}' overwrites the page from category '{}'",
                    page.object_id,
                    page.category,
                    prev
                );
            }
            let path = site_dir.join(format!("{}.html", page.object_id));
            fs::write(&path, &page.html)?;
            log::debug!("wrote {}", path.display());
            infos.push(PageInfo {
                category: page.category.clone(),
                object_id: page.object_id.clone(),
                path,
            });
        }

        let index_path = site_dir.join(format!("{INDEX_STEM}.html"));
        fs::write(&index_path, index)?;

        log::info!(
            "wrote {} object pages and index to {}",
            infos.len(),
            site_dir.display()
        );
        Ok(SiteSummary {
            pages: infos,
            index: index_path,
        })
    }

    /// Renders every object page and the index without touching the disk.
    fn render(&self) -> Result<(Vec<RenderedPage>, String)> {
        self.options.validate()?;

        let mut pages = Vec::new();
        let mut index = Document::new(self.title.clone());

        for (category, plots) in self.plots.iter() {
            let plot_groups = group_by_object(plots, PlotEntry::id);
            let video_groups = group_by_object(self.videos(category), VideoEntry::id);

            for (object_id, videos) in video_groups.iter() {
                if !plot_groups.contains_key(object_id) {
                    return Err(unpaired(category, object_id, videos[0]));
                }
            }

            index.push_body(html::h1(category.clone()));
            for (object_id, object_plots) in plot_groups.iter() {
                check_object_id(category, object_id)?;
                let videos = video_groups.get(object_id).unwrap_or_default();
                let cells = pair_videos(category, object_id, object_plots, videos)?;
                pages.push(RenderedPage {
                    category: category.clone(),
                    object_id: (*object_id).to_string(),
                    html: self.render_object_page(category, object_id, &cells)?,
                });
                index.push_body(html::a(*object_id, format!("./{object_id}.html")));
            }
        }

        // Videos under a category that has no plots at all.
        for (category, videos) in self.videos.iter() {
            if !self.plots.contains_key(category) {
                let video = &videos[0];
                return Err(unpaired(category, video.id(), video));
            }
        }

        Ok((pages, index.render()))
    }

    fn render_object_page(
        &self,
        category: &str,
        object_id: &str,
        cells: &[(&PlotEntry, Option<&VideoEntry>)],
    ) -> Result<String> {
        let opts = &self.options;
        let mut doc = Document::new(format!("{object_id}: {}", self.title));
        doc.push_head(html::Node::Raw(plotly_script_tag(&opts.plotly_js_url)));

        let cell_style = format!(
            "min-width:{w}px;max-width:{w}px",
            w = opts.cell_width_px
        );
        let mut table = Element::new("table");
        for (row, chunk) in cells.chunks(opts.plots_per_row).enumerate() {
            let mut tr = Element::new("tr");
            for (col, (plot, video)) in chunk.iter().enumerate() {
                let div_id = format!("plotly-{}", row * opts.plots_per_row + col);
                let fragment = plot.figure.to_html(&HtmlExport::fragment(div_id))?;
                let mut td = Element::new("td")
                    .attr("style", cell_style.clone())
                    .child(html::h2(plot.id.clone()))
                    .child(Element::new("div").attr("id", plot.id.clone()).raw(fragment));
                if let Some(video) = video {
                    td.push(html::video(
                        &video.reference,
                        opts.video_width,
                        opts.video_height,
                    ));
                }
                tr.push(td);
            }
            table.push(tr);
        }

        doc.push_body(
            Element::new("div")
                .attr("id", category)
                .child(html::h1(format!("{object_id} - {category}")))
                .child(table),
        );
        Ok(doc.render())
    }
}

/// Page file name reserved for the index.
const INDEX_STEM: &str = "index";

/// Rejects object ids that would not map to a file directly inside the
/// site directory, or that would clash with the index page.
fn check_object_id(category: &str, object_id: &str) -> Result<()> {
    let reason = if object_id.is_empty() {
        "empty"
    } else if object_id.contains(['/', '\\']) {
        "contains a path separator"
    } else if object_id.contains("..") {
        "contains '..'"
    } else if object_id == INDEX_STEM {
        "reserved for the index page"
    } else {
        return Ok(());
    };
    Err(VizError::InvalidId {
        category: category.to_string(),
        object_id: object_id.to_string(),
        reason,
    })
}

fn unpaired(category: &str, object_id: &str, video: &VideoEntry) -> VizError {
    VizError::UnpairedVideo {
        category: category.to_string(),
        object_id: object_id.to_string(),
        video_id: video.id.clone(),
    }
}

/// Matches the i-th video of an object with its i-th plot. Plots past the
/// end of the video list get no video.
fn pair_videos<'a>(
    category: &str,
    object_id: &str,
    plots: &[&'a PlotEntry],
    videos: &[&'a VideoEntry],
) -> Result<Vec<(&'a PlotEntry, Option<&'a VideoEntry>)>> {
    for (index, video) in videos.iter().enumerate() {
        match plots.get(index) {
            Some(plot) if plot.id == video.id => {}
            Some(plot) => {
                return Err(VizError::VideoMismatch {
                    category: category.to_string(),
                    object_id: object_id.to_string(),
                    index,
                    plot_id: plot.id.clone(),
                    video_id: video.id.clone(),
                })
            }
            None => return Err(unpaired(category, object_id, video)),
        }
    }
    Ok(plots
        .iter()
        .enumerate()
        .map(|(i, &plot)| (plot, videos.get(i).copied()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use visualize3d_core::{Margin, Scatter3d, DEFAULT_SCENE};

    fn figure() -> Figure {
        let mut fig = Figure::new();
        fig.add_trace(Scatter3d::from_points([Vec3::ZERO, Vec3::ONE], DEFAULT_SCENE));
        fig
    }

    fn plot(id: &str) -> PlotEntry {
        PlotEntry {
            id: id.to_string(),
            figure: figure(),
        }
    }

    fn vid(id: &str) -> VideoEntry {
        VideoEntry {
            id: id.to_string(),
            reference: format!("./{id}.mp4"),
        }
    }

    #[test]
    fn test_register_sets_margin() {
        let mut site = PlotlyWebsiteBuilder::new("t");
        site.register_plot("Show", "1", figure());
        assert_eq!(
            site.plots("Show")[0].figure.layout.margin,
            Some(Margin::new(5, 5, 40, 5))
        );
        assert!(site.plots("Missing").is_empty());
    }

    #[test]
    fn test_pairing_ok_and_short_video_list() {
        let (p1, p2) = (plot("1_a"), plot("1_b"));
        let v1 = vid("1_a");
        let cells = pair_videos("c", "1", &[&p1, &p2], &[&v1]).unwrap();
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].1.map(|v| v.id.as_str()), Some("1_a"));
        assert!(cells[1].1.is_none());
    }

    #[test]
    fn test_pairing_mismatch() {
        let p = plot("5");
        let v = vid("6");
        let err = pair_videos("c", "5", &[&p], &[&v]).unwrap_err();
        match err {
            VizError::VideoMismatch {
                plot_id,
                video_id,
                index,
                ..
            } => {
                assert_eq!((plot_id.as_str(), video_id.as_str(), index), ("5", "6", 0));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_pairing_extra_video() {
        let p = plot("1_a");
        let (v1, v2) = (vid("1_a"), vid("1_b"));
        let err = pair_videos("c", "1", &[&p], &[&v1, &v2]).unwrap_err();
        assert!(matches!(err, VizError::UnpairedVideo { .. }));
    }

    #[test]
    fn test_rows_of_three() {
        let mut site = PlotlyWebsiteBuilder::new("t");
        for i in 0..7 {
            site.register_plot("c", format!("0_{i}"), figure());
        }
        let (pages, _) = site.render().unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].html.matches("<tr>").count(), 3);
        assert_eq!(pages[0].html.matches("<td ").count(), 7);
    }

    #[test]
    fn test_render_is_deterministic() {
        let mut site = PlotlyWebsiteBuilder::new("t");
        site.register_plot("c", "1", figure());
        site.register_plot("c", "2_x", figure());
        let (a, ia) = site.render().unwrap();
        let (b, ib) = site.render().unwrap();
        assert_eq!(ia, ib);
        assert!(a.iter().zip(&b).all(|(x, y)| x.html == y.html));
    }

    #[test]
    fn test_object_id_checks() {
        assert!(check_object_id("c", "7").is_ok());
        assert!(check_object_id("c", "index2").is_ok());
        for bad in ["", "../up", "sub/x", "sub\\x", "..", "a..b", "index"] {
            assert!(
                matches!(check_object_id("c", bad), Err(VizError::InvalidId { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_reserved_index_id_rejected() {
        let mut site = PlotlyWebsiteBuilder::new("t");
        site.register_plot("c", "1", figure());
        site.register_plot("c", "index_a", figure());
        match site.render() {
            Err(VizError::InvalidId { object_id, .. }) => assert_eq!(object_id, "index"),
            _ => panic!("expected an invalid id error"),
        }
    }

    #[test]
    fn test_video_category_without_plots() {
        let mut site = PlotlyWebsiteBuilder::new("t");
        site.register_plot("plots", "1", figure());
        site.register_video("only-videos", "1", "./1.mp4");
        assert!(matches!(
            site.render(),
            Err(VizError::UnpairedVideo { .. })
        ));
    }

    #[test]
    fn test_video_object_without_plots() {
        let mut site = PlotlyWebsiteBuilder::new("t");
        site.register_plot("c", "1", figure());
        site.register_video("c", "2", "./2.mp4");
        match site.render() {
            Err(VizError::UnpairedVideo { object_id, .. }) => assert_eq!(object_id, "2"),
            _ => panic!("expected an unpaired video error"),
        }
    }
}
