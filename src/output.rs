//! Output sinks: where the rendered summary goes.
//!
//! A sink accepts UTF-8 text. Markup writes carry the inline styling
//! convention from [`crate::style`]; decorated sinks resolve it to ANSI
//! escapes, plain sinks strip it and keep the inner text.

use std::io::{self, Write};

use owo_colors::OwoColorize;

use crate::style::parse_markup;

/// Text sink for the summary renderer.
pub trait OutputSink {
    /// Write text that may contain inline styling markup.
    fn write_markup(&mut self, text: &str) -> io::Result<()>;

    /// Write text verbatim, no markup interpretation.
    fn write_raw(&mut self, text: &str) -> io::Result<()>;

    /// Whether this sink renders styling. Decorated sinks also get styled
    /// table cells.
    fn is_decorated(&self) -> bool;
}

/// Sink for color-capable terminals: markup becomes ANSI escape sequences.
#[derive(Debug)]
pub struct AnsiSink<W: Write> {
    inner: W,
}

impl<W: Write> AnsiSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> OutputSink for AnsiSink<W> {
    fn write_markup(&mut self, text: &str) -> io::Result<()> {
        for segment in parse_markup(text) {
            match (segment.color, segment.bold) {
                (Some(color), true) => {
                    write!(self.inner, "{}", segment.text.color(color).bold())?
                }
                (Some(color), false) => write!(self.inner, "{}", segment.text.color(color))?,
                (None, true) => write!(self.inner, "{}", segment.text.bold())?,
                (None, false) => self.inner.write_all(segment.text.as_bytes())?,
            }
        }
        Ok(())
    }

    fn write_raw(&mut self, text: &str) -> io::Result<()> {
        self.inner.write_all(text.as_bytes())
    }

    fn is_decorated(&self) -> bool {
        true
    }
}

/// Sink for non-color targets (pipes, files, tests): markup tags are
/// stripped, inner text passes through unchanged.
#[derive(Debug)]
pub struct PlainSink<W: Write> {
    inner: W,
}

impl<W: Write> PlainSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> OutputSink for PlainSink<W> {
    fn write_markup(&mut self, text: &str) -> io::Result<()> {
        for segment in parse_markup(text) {
            self.inner.write_all(segment.text.as_bytes())?;
        }
        Ok(())
    }

    fn write_raw(&mut self, text: &str) -> io::Result<()> {
        self.inner.write_all(text.as_bytes())
    }

    fn is_decorated(&self) -> bool {
        false
    }
}
