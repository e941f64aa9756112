use std::io::{self, Write};

use crate::domain::RenderError;
use crate::ports::LineSink;

pub struct WriterSink<W: Write> {
    inner: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }
}

impl WriterSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> LineSink for WriterSink<W> {
    fn write_line(&mut self, line: &str) -> Result<(), RenderError> {
        writeln!(self.inner, "{}", line).map_err(RenderError::sink)
    }
}

#[derive(Default)]
pub struct BufferSink {
    lines: Vec<String>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_string(self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

impl LineSink for BufferSink {
    fn write_line(&mut self, line: &str) -> Result<(), RenderError> {
        self.lines.push(line.to_string());
        Ok(())
    }
}
