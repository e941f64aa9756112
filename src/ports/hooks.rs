use crate::domain::RenderError;
use crate::ports::{Format, LineSink};

// Hook family: unoverridden steps emit nothing, except `head`, which renders
// the title through the mandatory `line` primitive.
pub trait HookFormat {
    fn start(&self, _sink: &mut dyn LineSink) -> Result<(), RenderError> {
        Ok(())
    }

    fn head(&self, title: &str, sink: &mut dyn LineSink) -> Result<(), RenderError> {
        self.line(title, sink)
    }

    fn body_start(&self, _sink: &mut dyn LineSink) -> Result<(), RenderError> {
        Ok(())
    }

    fn line(&self, text: &str, sink: &mut dyn LineSink) -> Result<(), RenderError>;

    fn body_end(&self, _sink: &mut dyn LineSink) -> Result<(), RenderError> {
        Ok(())
    }

    fn end(&self, _sink: &mut dyn LineSink) -> Result<(), RenderError> {
        Ok(())
    }
}

pub struct Hooked<F>(pub F);

impl<F: HookFormat> Format for Hooked<F> {
    fn start(&self, sink: &mut dyn LineSink) -> Result<(), RenderError> {
        self.0.start(sink)
    }
    fn head(&self, title: &str, sink: &mut dyn LineSink) -> Result<(), RenderError> {
        self.0.head(title, sink)
    }
    fn body_start(&self, sink: &mut dyn LineSink) -> Result<(), RenderError> {
        self.0.body_start(sink)
    }
    fn line(&self, text: &str, sink: &mut dyn LineSink) -> Result<(), RenderError> {
        self.0.line(text, sink)
    }
    fn body_end(&self, sink: &mut dyn LineSink) -> Result<(), RenderError> {
        self.0.body_end(sink)
    }
    fn end(&self, sink: &mut dyn LineSink) -> Result<(), RenderError> {
        self.0.end(sink)
    }
}
