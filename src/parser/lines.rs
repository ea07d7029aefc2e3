//! Line-oriented input with line numbers for error messages.

use crate::error::{GridError, Result};

/// Placeholder used as the "found" text when the input runs out.
pub const END_OF_INPUT: &str = "end of input";

/// One input line, without its terminator or trailing whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// Line number (1-indexed).
    pub number: usize,
    pub text: &'a str,
}

impl<'a> Line<'a> {
    /// Split a CSV-style data line into exactly `count` trimmed fields.
    pub fn fields(&self, count: usize, what: &str) -> Result<Vec<&'a str>> {
        let fields: Vec<&'a str> = self.text.split(',').map(str::trim).collect();
        if fields.len() != count {
            return Err(GridError::format(
                self.number,
                format!("{} comma-separated {} ({})", count, plural_fields(count), what),
                self.text,
            )
            .with_help(format!(
                "Found {} {} on this line",
                fields.len(),
                plural_fields(fields.len())
            )));
        }
        Ok(fields)
    }

    /// Whether the line holds nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

fn plural_fields(n: usize) -> &'static str {
    if n == 1 {
        "field"
    } else {
        "fields"
    }
}

/// Cursor over the lines of a fully buffered document.
#[derive(Debug)]
pub struct LineCursor<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> LineCursor<'a> {
    /// Split `source` into lines; both `\n` and `\r\n` terminators are accepted.
    pub fn new(source: &'a str) -> Self {
        Self {
            lines: source.lines().collect(),
            pos: 0,
        }
    }

    /// Number of the line the next read will return.
    pub fn line_number(&self) -> usize {
        self.pos + 1
    }

    /// Read the next line, failing with `expected` if the input has run out.
    pub fn next_line(&mut self, expected: &str) -> Result<Line<'a>> {
        let Some(text) = self.lines.get(self.pos) else {
            return Err(GridError::format(self.line_number(), expected, END_OF_INPUT)
                .with_help("The file ends before the declared counts are satisfied"));
        };
        self.pos += 1;
        Ok(Line {
            number: self.pos,
            text: text.trim_end(),
        })
    }

    /// Read a literal label line and check it matches exactly.
    pub fn expect_label(&mut self, label: &str) -> Result<()> {
        let line = self.next_line(label)?;
        if line.text != label {
            return Err(GridError::format(line.number, label, line.text));
        }
        Ok(())
    }

    /// Read a blank separator line.
    pub fn expect_blank(&mut self) -> Result<()> {
        let line = self.next_line("a blank line")?;
        if !line.is_blank() {
            return Err(GridError::format(line.number, "a blank line", line.text)
                .with_help("Sections are separated by exactly one empty line"));
        }
        Ok(())
    }

    /// Check that nothing but blank lines remain.
    pub fn expect_end(&mut self) -> Result<()> {
        while self.pos < self.lines.len() {
            let line = self.next_line(END_OF_INPUT)?;
            if !line.is_blank() {
                return Err(GridError::format(line.number, END_OF_INPUT, line.text)
                    .with_help("The declared count is smaller than the number of data lines"));
            }
        }
        Ok(())
    }
}
