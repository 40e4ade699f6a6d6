//! Minimal HTML document tree.
//!
//! Pages are declared as nested [`Element`]s and serialized in one pass.
//! Text and attribute values are escaped; [`Node::Raw`] is inserted verbatim.

use std::fmt::{self, Write};

use visualize3d_core::escape_html;

const VOID_ELEMENTS: [&str; 5] = ["br", "img", "link", "meta", "source"];

/// A node in the document tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    /// Text content, escaped on output.
    Text(String),
    /// Pre-rendered markup, written as is.
    Raw(String),
}

impl From<Element> for Node {
    fn from(e: Element) -> Self {
        Self::Element(e)
    }
}

/// An HTML element with attributes and children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    /// Creates an empty element.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Adds an attribute. An empty value renders as a bare attribute (`controls`).
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Appends a child node.
    #[must_use]
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Appends escaped text.
    #[must_use]
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    /// Appends pre-rendered markup.
    #[must_use]
    pub fn raw(self, html: impl Into<String>) -> Self {
        self.child(Node::Raw(html.into()))
    }

    /// Appends a child node in place.
    pub fn push(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    /// Returns the tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the child nodes.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.tag.as_str())
    }

    fn write_open_tag(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attrs {
            if value.is_empty() {
                let _ = write!(out, " {name}");
            } else {
                let _ = write!(out, " {name}=\"{}\"", escape_html(value));
            }
        }
        out.push('>');
    }

    fn write_into(&self, out: &mut String, depth: usize) {
        indent(out, depth);
        self.write_open_tag(out);
        if self.is_void() {
            out.push('\n');
            return;
        }

        let inline = self.children.iter().all(|c| matches!(c, Node::Text(_)));
        if inline {
            for child in &self.children {
                if let Node::Text(t) = child {
                    out.push_str(&escape_html(t));
                }
            }
        } else {
            out.push('\n');
            for child in &self.children {
                write_node(child, out, depth + 1);
            }
            indent(out, depth);
        }
        let _ = writeln!(out, "</{}>", self.tag);
    }
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

fn write_node(node: &Node, out: &mut String, depth: usize) {
    match node {
        Node::Element(e) => e.write_into(out, depth),
        Node::Text(t) => {
            indent(out, depth);
            out.push_str(&escape_html(t));
            out.push('\n');
        }
        Node::Raw(html) => {
            out.push_str(html);
            out.push('\n');
        }
    }
}

/// `<h1>` with text.
pub fn h1(text: impl Into<String>) -> Element {
    Element::new("h1").text(text)
}

/// `<h2>` with text.
pub fn h2(text: impl Into<String>) -> Element {
    Element::new("h2").text(text)
}

/// `<a>` with text and target.
pub fn a(text: impl Into<String>, href: impl Into<String>) -> Element {
    Element::new("a").attr("href", href).text(text)
}

/// Video player with controls and a single source.
pub fn video(src: &str, width: u32, height: u32) -> Element {
    let mut source = Element::new("source").attr("src", src);
    if let Some(mime) = video_mime(src) {
        source = source.attr("type", mime);
    }
    Element::new("video")
        .attr("width", width.to_string())
        .attr("height", height.to_string())
        .attr("controls", "")
        .child(source)
}

/// Guesses the MIME type of a video from its file extension.
pub fn video_mime(src: &str) -> Option<&'static str> {
    let path = src.split(['?', '#']).next().unwrap_or(src);
    let ext = path.rsplit_once('.')?.1.to_ascii_lowercase();
    match ext.as_str() {
        "mp4" | "m4v" => Some("video/mp4"),
        "webm" => Some("video/webm"),
        "ogg" | "ogv" => Some("video/ogg"),
        _ => None,
    }
}

/// A complete HTML document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    title: String,
    head: Vec<Node>,
    body: Vec<Node>,
}

impl Document {
    /// Creates an empty document with a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            head: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Returns the document title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Appends a node to `<head>`.
    pub fn push_head(&mut self, node: impl Into<Node>) {
        self.head.push(node.into());
    }

    /// Appends a node to `<body>`.
    pub fn push_body(&mut self, node: impl Into<Node>) {
        self.body.push(node.into());
    }

    /// Serializes the document.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(4096);
        out.push_str("<!DOCTYPE html>\n<html>\n  <head>\n");
        let _ = writeln!(out, "    <title>{}</title>", escape_html(&self.title));
        for node in &self.head {
            write_node(node, &mut out, 2);
        }
        out.push_str("  </head>\n  <body>\n");
        for node in &self.body {
            write_node(node, &mut out, 2);
        }
        out.push_str("  </body>\n</html>\n");
        out
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
