//! Turns raw bytes into pre-rendered pager lines
//!
//! ANSI SGR sequences are parsed into styled ratatui spans so that output
//! from colorizing tools keeps its colors. Tabs are expanded to spaces since
//! the terminal backend draws cell by cell.

use ansi_to_tui::IntoText;
use glide_core::{ContentBuffer, Result};
use ratatui::text::{Line, Span, Text};
use tracing::{debug, warn};
use unicode_width::UnicodeWidthChar;

pub type PagerContent = ContentBuffer<Line<'static>>;

#[derive(Debug, Clone, Copy)]
pub struct ContentOptions {
    /// Declared virtual width; measured from the widest line when unset
    pub width: Option<usize>,
    pub tab_width: usize,
}

impl Default for ContentOptions {
    fn default() -> Self {
        Self {
            width: None,
            tab_width: 8,
        }
    }
}

/// Parse raw content into a line buffer
pub fn parse_content(bytes: &[u8], options: ContentOptions) -> Result<PagerContent> {
    let normalized = normalize_newlines(bytes);

    let text = if normalized.is_empty() {
        Text::default()
    } else {
        normalized.into_text().unwrap_or_else(|e| {
            warn!("Failed to parse ANSI sequences ({}), showing raw text", e);
            Text::raw(String::from_utf8_lossy(&normalized).into_owned())
        })
    };

    let lines: Vec<Line<'static>> = text
        .lines
        .into_iter()
        .map(|line| expand_tabs(line, options.tab_width))
        .collect();

    let width = match options.width {
        Some(width) => width,
        None => measure_width(&lines).max(1),
    };
    debug!("Parsed {} lines, virtual width {}", lines.len(), width);

    ContentBuffer::new(lines, width)
}

/// Display width of the widest line
pub fn measure_width(lines: &[Line<'_>]) -> usize {
    lines.iter().map(Line::width).max().unwrap_or(0)
}

/// Strip carriage returns before newlines and a single trailing newline
fn normalize_newlines(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len());
    let mut iter = bytes.iter().peekable();
    while let Some(&b) = iter.next() {
        if b == b'\r' && iter.peek() == Some(&&b'\n') {
            continue;
        }
        out.push(b);
    }
    if out.last() == Some(&b'\n') {
        out.pop();
    }
    out
}

fn expand_tabs(line: Line<'static>, tab_width: usize) -> Line<'static> {
    if tab_width == 0 || !line.spans.iter().any(|s| s.content.contains('\t')) {
        return line;
    }

    let mut column = 0usize;
    let spans = line
        .spans
        .into_iter()
        .map(|span| {
            let mut expanded = String::with_capacity(span.content.len());
            for c in span.content.chars() {
                if c == '\t' {
                    let fill = tab_width - column % tab_width;
                    expanded.extend(std::iter::repeat(' ').take(fill));
                    column += fill;
                } else {
                    expanded.push(c);
                    column += c.width().unwrap_or(0);
                }
            }
            Span::styled(expanded, span.style)
        })
        .collect::<Vec<_>>();

    Line {
        spans,
        style: line.style,
        alignment: line.alignment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::{Color, Style};

    fn plain(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_plain_text_lines() {
        let content = parse_content(b"alpha\nbeta\ngamma\n", ContentOptions::default()).unwrap();
        assert_eq!(content.height(), 3);
        assert_eq!(plain(&content.lines()[1]), "beta");
        assert_eq!(content.width(), 5);
    }

    #[test]
    fn test_crlf_is_normalized() {
        let content = parse_content(b"one\r\ntwo\r\n", ContentOptions::default()).unwrap();
        assert_eq!(content.height(), 2);
        assert_eq!(plain(&content.lines()[0]), "one");
    }

    #[test]
    fn test_declared_width_wins() {
        let options = ContentOptions {
            width: Some(120),
            ..Default::default()
        };
        let content = parse_content(b"short\n", options).unwrap();
        assert_eq!(content.width(), 120);
    }

    #[test]
    fn test_zero_declared_width_rejected() {
        let options = ContentOptions {
            width: Some(0),
            ..Default::default()
        };
        assert!(matches!(
            parse_content(b"text", options),
            Err(glide_core::Error::InvalidWidth(0))
        ));
    }

    #[test]
    fn test_empty_content_gets_minimal_width() {
        let content = parse_content(b"", ContentOptions::default()).unwrap();
        assert!(content.is_empty());
        assert_eq!(content.width(), 1);
    }

    #[test]
    fn test_ansi_colors_become_styles() {
        let content =
            parse_content(b"\x1b[31mred\x1b[0m plain\n", ContentOptions::default()).unwrap();
        let line = &content.lines()[0];
        assert_eq!(plain(line), "red plain");
        let red = line.spans.iter().find(|s| s.content == "red").unwrap();
        assert_eq!(red.style.fg, Some(Color::Red));
        // Escape sequences take no columns
        assert_eq!(content.width(), 9);
    }

    #[test]
    fn test_tabs_expand_to_next_stop() {
        let line = Line::from(vec![
            Span::raw("ab\tc"),
            Span::styled("\td", Style::default().fg(Color::Blue)),
        ]);
        let expanded = expand_tabs(line, 4);
        assert_eq!(plain(&expanded), "ab  c   d");
        assert_eq!(expanded.spans[1].style.fg, Some(Color::Blue));
    }
}
