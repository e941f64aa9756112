mod render_report;

pub use render_report::RenderReportUseCase;
