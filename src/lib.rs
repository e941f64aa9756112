pub mod domain;
pub mod ports;
pub mod application;
pub mod infrastructure;

use application::RenderReportUseCase;
use domain::{RenderError, Report};
use infrastructure::BufferSink;
use ports::Format;

pub fn render_to_string<F: Format>(report: &Report, format: F) -> Result<String, RenderError> {
    let mut sink = BufferSink::new();
    RenderReportUseCase::new(format).execute(report, &mut sink)?;
    Ok(sink.into_string())
}
