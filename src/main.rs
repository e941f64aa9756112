use std::process::ExitCode;
use reportfmt::application::RenderReportUseCase;
use reportfmt::domain::{RenderError, Report};
use reportfmt::infrastructure::{HtmlFormat, PlainTextFormat, WriterSink};
use reportfmt::ports::LineSink;

fn main() -> ExitCode {
    let report = Report::new(
        "Monthly Earnings Report",
        ["Active Income: 4000", "Passive Income: 400"],
    );

    match render_sample(&report) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(1)
        }
    }
}

fn render_sample(report: &Report) -> Result<(), RenderError> {
    let mut sink = WriterSink::stdout();
    RenderReportUseCase::new(PlainTextFormat::new()).execute(report, &mut sink)?;
    sink.write_line("")?;
    RenderReportUseCase::new(HtmlFormat::new()).execute(report, &mut sink)?;
    Ok(())
}
