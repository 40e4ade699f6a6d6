//! Colors and the qualitative palette used for label coloring.

use std::fmt;

/// Plotly's qualitative "Alphabet" palette.
pub const ALPHABET: [&str; 26] = [
    "#AA0DFE", "#3283FE", "#85660D", "#782AB6", "#565656", "#1C8356", "#16FF32", "#F7E1A0",
    "#E2E2E2", "#1CBE4F", "#C4451C", "#DEA0FD", "#FE00FA", "#325A9B", "#FEAF16", "#F8A19F",
    "#90AD1C", "#F6222E", "#1CFFCE", "#2ED9FF", "#B10DA1", "#C075A6", "#FC1CBF", "#B00068",
    "#FBE426", "#FA0087",
];

/// Returns the palette color for an integer label (`label mod 26`).
///
/// Negative labels wrap around the palette instead of panicking.
#[must_use]
pub fn label_color(label: i64) -> &'static str {
    let len = ALPHABET.len() as i64;
    ALPHABET[label.rem_euclid(len) as usize]
}

/// A single color as understood by the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Color {
    /// 8-bit RGB triple, rendered as `rgb(r, g, b)`.
    Rgb(u8, u8, u8),
    /// Any CSS color: a name (`"red"`) or a hex string (`"#ff0000"`).
    Css(String),
}

impl Color {
    /// Returns the CSS representation of this color.
    #[must_use]
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgb(r, g, b) => write!(f, "rgb({r}, {g}, {b})"),
            Self::Css(s) => f.write_str(s),
        }
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::Rgb(r, g, b)
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        Self::Css(s.to_string())
    }
}

impl From<String> for Color {
    fn from(s: String) -> Self {
        Self::Css(s)
    }
}
