use crate::domain::RenderError;
use crate::ports::{Format, LineSink};

pub struct PlainTextFormat;

impl PlainTextFormat {
    pub fn new() -> Self { Self }
}

impl Format for PlainTextFormat {
    fn start(&self, _sink: &mut dyn LineSink) -> Result<(), RenderError> {
        Ok(())
    }

    fn head(&self, title: &str, sink: &mut dyn LineSink) -> Result<(), RenderError> {
        sink.write_line(&format!("***** {} *****", title))
    }

    fn body_start(&self, _sink: &mut dyn LineSink) -> Result<(), RenderError> {
        Ok(())
    }

    fn line(&self, text: &str, sink: &mut dyn LineSink) -> Result<(), RenderError> {
        sink.write_line(text)
    }

    fn body_end(&self, _sink: &mut dyn LineSink) -> Result<(), RenderError> {
        Ok(())
    }

    fn end(&self, _sink: &mut dyn LineSink) -> Result<(), RenderError> {
        Ok(())
    }
}

pub struct HtmlFormat;

impl HtmlFormat {
    pub fn new() -> Self { Self }
}

impl Format for HtmlFormat {
    fn start(&self, sink: &mut dyn LineSink) -> Result<(), RenderError> {
        sink.write_line("<html>")
    }

    fn head(&self, title: &str, sink: &mut dyn LineSink) -> Result<(), RenderError> {
        sink.write_line("  <head>")?;
        sink.write_line(&format!("      <title>{}</title>", title))?;
        sink.write_line("  </head>")
    }

    fn body_start(&self, sink: &mut dyn LineSink) -> Result<(), RenderError> {
        sink.write_line("  <body>")
    }

    fn line(&self, text: &str, sink: &mut dyn LineSink) -> Result<(), RenderError> {
        sink.write_line(&format!("      <p>{}</p>", text))
    }

    fn body_end(&self, sink: &mut dyn LineSink) -> Result<(), RenderError> {
        sink.write_line("  </body>")
    }

    fn end(&self, sink: &mut dyn LineSink) -> Result<(), RenderError> {
        sink.write_line("</html>")
    }
}
