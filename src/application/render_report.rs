use crate::domain::{RenderError, Report};
use crate::ports::{Format, LineSink};

pub struct RenderReportUseCase<F: Format> {
    format: F,
}

impl<F: Format> RenderReportUseCase<F> {
    pub fn new(format: F) -> Self {
        Self { format }
    }

    // Step order is fixed for every format; only step content varies. Any
    // step error aborts the remaining steps, lines already written stay.
    pub fn execute(&self, report: &Report, sink: &mut dyn LineSink) -> Result<(), RenderError> {
        self.format.start(sink)?;
        self.format.head(&report.title, sink)?;
        self.format.body_start(sink)?;
        for text in &report.body {
            self.format.line(text, sink)?;
        }
        self.format.body_end(sink)?;
        self.format.end(sink)?;
        Ok(())
    }
}
