use std::io::Write;

use crate::display::{complexity_badge, format_total_complexity};
use crate::session::FileHighlights;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Terminal,
}

pub trait OutputWriter {
    fn write_highlights(&mut self, result: &FileHighlights) -> anyhow::Result<()>;

    /// Push buffered output to its destination, surfacing write failures.
    fn flush(&mut self) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn flush(&mut self) -> anyhow::Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn write_highlights(&mut self, result: &FileHighlights) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(result)?;
        writeln!(self.writer, "{}", json)?;
        Ok(())
    }
}

/// One line per highlight: `L3:0-L9:1  #ff00004d  Complexity: 12.00`.
pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn flush(&mut self) -> anyhow::Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn write_highlights(&mut self, result: &FileHighlights) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "{}  {} [{}]  {} highlight(s)",
            result.file.display(),
            format_total_complexity(result.total_complexity),
            complexity_badge(result.total_complexity),
            result.highlights.len()
        )?;
        for highlight in &result.highlights {
            let span = highlight.span;
            writeln!(
                self.writer,
                "  L{}:{}-L{}:{}  {}  {}",
                span.start.line + 1,
                span.start.character,
                span.end.line + 1,
                span.end.character,
                highlight.color,
                highlight.hover_text
            )?;
        }
        Ok(())
    }
}

pub fn create_writer<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}
