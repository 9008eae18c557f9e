//! Inline markup.
//!
//! The engine marks italic runs with `<i>` and `</i>` and emits no other
//! markup. [`OutputFormat`] converts that convention for consumers.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const ITALIC_OPEN: &str = "<i>";
pub const ITALIC_CLOSE: &str = "</i>";

static ITALIC_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"</?i>").unwrap());

/// `<scheme:...>` autolinks, which Markdown renders without processing escapes.
static AUTOLINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[A-Za-z][A-Za-z0-9+.-]*:[^<>\s]*>").unwrap());

/// Wraps text in italic markers.
pub fn italic(text: &str) -> String {
    format!("{}{}{}", ITALIC_OPEN, text, ITALIC_CLOSE)
}

/// Wraps text in single quotation marks.
pub fn quoted(text: &str) -> String {
    format!("'{}'", text)
}

/// Wraps text in parentheses unless it is already wrapped.
pub fn parens(text: &str) -> String {
    if text.starts_with('(') && text.ends_with(')') {
        text.to_string()
    } else {
        format!("({})", text)
    }
}

/// Wraps text in square brackets unless it is already wrapped.
pub fn brackets(text: &str) -> String {
    if text.starts_with('[') && text.ends_with(']') {
        text.to_string()
    } else {
        format!("[{}]", text)
    }
}

/// Removes italic markers, leaving plain text.
pub fn strip_markup(text: &str) -> String {
    ITALIC_MARKER.replace_all(text, "").into_owned()
}

/// How formatted citations are presented to a consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The engine's own `<i>` markers.
    #[default]
    Markup,
    /// No markup at all.
    Plain,
    /// HTML-escaped text with `<em>` italics.
    Html,
    /// Markdown with `*` italics.
    Markdown,
}

impl OutputFormat {
    /// Converts engine output into this format.
    pub fn render(self, text: &str) -> String {
        match self {
            OutputFormat::Markup => text.to_string(),
            OutputFormat::Plain => strip_markup(text),
            OutputFormat::Html => to_html(text),
            OutputFormat::Markdown => to_markdown(text),
        }
    }
}

fn to_html(text: &str) -> String {
    let mut html = String::with_capacity(text.len());
    let mut last = 0;
    for marker in ITALIC_MARKER.find_iter(text) {
        html.push_str(&escape_html(&text[last..marker.start()]));
        html.push_str(if marker.as_str() == ITALIC_OPEN {
            "<em>"
        } else {
            "</em>"
        });
        last = marker.end();
    }
    html.push_str(&escape_html(&text[last..]));
    html
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn to_markdown(text: &str) -> String {
    let mut markdown = String::with_capacity(text.len());
    let mut last = 0;
    for marker in ITALIC_MARKER.find_iter(text) {
        markdown.push_str(&escape_markdown(&text[last..marker.start()]));
        markdown.push('*');
        last = marker.end();
    }
    markdown.push_str(&escape_markdown(&text[last..]));
    markdown
}

/// Backslash-escapes the characters that would open or close inline Markdown
/// spans. Autolinks are copied as they are.
fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    let mut last = 0;
    for link in AUTOLINK.find_iter(text) {
        push_markdown_escaped(&mut escaped, &text[last..link.start()]);
        escaped.push_str(link.as_str());
        last = link.end();
    }
    push_markdown_escaped(&mut escaped, &text[last..]);
    escaped
}

fn push_markdown_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        if matches!(c, '\\' | '*' | '_' | '`') {
            out.push('\\');
        }
        out.push(c);
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Markup => "markup",
            OutputFormat::Plain => "plain",
            OutputFormat::Html => "html",
            OutputFormat::Markdown => "markdown",
        };
        f.write_str(name)
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "markup" => Ok(OutputFormat::Markup),
            "plain" => Ok(OutputFormat::Plain),
            "html" => Ok(OutputFormat::Html),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}
