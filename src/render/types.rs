//! Segment type definitions.
//!
//! A segment is an immutable list of typed lines. Text is produced only when
//! a segment is written out, so tests can inspect content without depending
//! on indentation details.

use std::fmt;
use std::io::{self, Write};

/// Spaces per indentation level in the generated program
pub const INDENT_WIDTH: usize = 4;

/// Which part of the generated program a segment holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// Runtime imports and backend instantiation
    Imports,
    /// Sender and receiver protocol bodies
    Protocols,
    /// The `main` function wiring hosts and protocols together
    Orchestration,
    /// Guard that calls `main` when the program is run directly
    EntryPoint,
}

impl SegmentKind {
    /// Get the string representation of the segment kind
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmentKind::Imports => "imports",
            SegmentKind::Protocols => "protocols",
            SegmentKind::Orchestration => "orchestration",
            SegmentKind::EntryPoint => "entry point",
        }
    }
}

/// One line of generated source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// A statement at the given indentation level
    Code { indent: usize, text: String },
    /// A `#` comment at the given indentation level
    Comment { indent: usize, text: String },
    /// An empty line
    Blank,
}

impl Line {
    pub fn code(indent: usize, text: impl Into<String>) -> Self {
        Line::Code {
            indent,
            text: text.into(),
        }
    }

    pub fn comment(indent: usize, text: impl Into<String>) -> Self {
        Line::Comment {
            indent,
            text: text.into(),
        }
    }

    /// Statement text without indentation, if this is a code line
    pub fn code_text(&self) -> Option<&str> {
        match self {
            Line::Code { text, .. } => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Code { indent, text } => {
                write!(f, "{:width$}{}", "", text, width = indent * INDENT_WIDTH)
            }
            // a comment never spills onto a second line
            Line::Comment { indent, text } => write!(
                f,
                "{:width$}# {}",
                "",
                text.replace(|c: char| c.is_control(), " "),
                width = indent * INDENT_WIDTH
            ),
            Line::Blank => Ok(()),
        }
    }
}

/// An immutable block of generated source produced by one renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    kind: SegmentKind,
    lines: Vec<Line>,
}

impl Segment {
    pub fn new(kind: SegmentKind, lines: Vec<Line>) -> Self {
        Self { kind, lines }
    }

    pub fn kind(&self) -> SegmentKind {
        self.kind
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Statement texts of all code lines, in order
    pub fn code_lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().filter_map(Line::code_text)
    }

    /// Stream the segment as text, one `\n`-terminated line at a time
    pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        for line in &self.lines {
            writeln!(writer, "{}", line)?;
        }
        Ok(())
    }

    /// Render the segment as a string
    pub fn render(&self) -> String {
        self.lines.iter().map(|line| format!("{}\n", line)).collect()
    }
}
