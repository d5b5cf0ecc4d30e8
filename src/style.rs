//! Inline styling markup and summary color configuration.
//!
//! The markup convention is `<fg=COLOR;options=bold>text</>`: a foreground
//! color name, an optional bold flag, closed by `</>`. Sinks without color
//! support render the inner text unchanged.

use owo_colors::AnsiColors;
use serde::{Deserialize, Serialize};

/// One parsed run of markup text: either plain, or styled by an open tag.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub color: Option<AnsiColors>,
    pub bold: bool,
}

impl<'a> Segment<'a> {
    fn plain(text: &'a str) -> Self {
        Self {
            text,
            color: None,
            bold: false,
        }
    }
}

/// Split markup text into styled and plain segments.
///
/// Unterminated tags are not an error: the remainder passes through as plain
/// text, matching the degrade-gracefully contract. Literal `<` outside a
/// `<fg=` opener (as in the `<command>` usage placeholder) is plain text.
pub fn parse_markup(input: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut rest = input;

    while let Some(open) = rest.find("<fg=") {
        let (leading, tagged) = rest.split_at(open);
        if !leading.is_empty() {
            segments.push(Segment::plain(leading));
        }

        let Some(tag_end) = tagged.find('>') else {
            segments.push(Segment::plain(tagged));
            return segments;
        };
        let body_start = tag_end + 1;
        let Some(close) = tagged[body_start..].find("</>") else {
            segments.push(Segment::plain(tagged));
            return segments;
        };

        let attributes = &tagged["<fg=".len()..tag_end];
        let (color_name, options) = match attributes.split_once(';') {
            Some((color, options)) => (color, options),
            None => (attributes, ""),
        };
        segments.push(Segment {
            text: &tagged[body_start..body_start + close],
            color: ansi_color(color_name),
            bold: options
                .split(';')
                .any(|option| option == "options=bold"),
        });

        rest = &tagged[body_start + close + "</>".len()..];
    }

    if !rest.is_empty() {
        segments.push(Segment::plain(rest));
    }
    segments
}

/// Resolve a color name to an ANSI color. Unknown names yield `None` and the
/// text renders unstyled.
pub fn ansi_color(name: &str) -> Option<AnsiColors> {
    match name.to_ascii_lowercase().as_str() {
        "black" => Some(AnsiColors::Black),
        "red" => Some(AnsiColors::Red),
        "green" => Some(AnsiColors::Green),
        "yellow" => Some(AnsiColors::Yellow),
        "blue" => Some(AnsiColors::Blue),
        "magenta" => Some(AnsiColors::Magenta),
        "cyan" => Some(AnsiColors::Cyan),
        "white" => Some(AnsiColors::White),
        _ => None,
    }
}

/// Resolve a color name for table cells.
pub(crate) fn table_color(name: &str) -> Option<comfy_table::Color> {
    match name.to_ascii_lowercase().as_str() {
        "black" => Some(comfy_table::Color::Black),
        "red" => Some(comfy_table::Color::Red),
        "green" => Some(comfy_table::Color::Green),
        "yellow" => Some(comfy_table::Color::Yellow),
        "blue" => Some(comfy_table::Color::Blue),
        "magenta" => Some(comfy_table::Color::Magenta),
        "cyan" => Some(comfy_table::Color::Cyan),
        "white" => Some(comfy_table::Color::White),
        _ => None,
    }
}

/// Colors for the summary chunks. Hosts can deserialize this alongside their
/// own configuration; every field defaults to the canonical scheme.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryStyle {
    /// Application name color in the title banner
    #[serde(default = "default_title_color")]
    pub title_color: String,

    /// Version color in the title banner
    #[serde(default = "default_version_color")]
    pub version_color: String,

    /// Color of the `USAGE:` label
    #[serde(default = "default_usage_color")]
    pub usage_color: String,

    /// Command name color in the table
    #[serde(default = "default_command_color")]
    pub command_color: String,
}

fn default_title_color() -> String {
    "white".to_string()
}

fn default_version_color() -> String {
    "green".to_string()
}

fn default_usage_color() -> String {
    "yellow".to_string()
}

fn default_command_color() -> String {
    "green".to_string()
}

impl Default for SummaryStyle {
    fn default() -> Self {
        Self {
            title_color: default_title_color(),
            version_color: default_version_color(),
            usage_color: default_usage_color(),
            command_color: default_command_color(),
        }
    }
}
