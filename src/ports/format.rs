use crate::domain::{RenderError, Step};
use crate::ports::LineSink;

// Strict family: a step without an override fails at call time naming the
// step. `line` has no default in any family.
pub trait Format {
    fn start(&self, _sink: &mut dyn LineSink) -> Result<(), RenderError> {
        Err(RenderError::unimplemented(Step::Start))
    }

    fn head(&self, _title: &str, _sink: &mut dyn LineSink) -> Result<(), RenderError> {
        Err(RenderError::unimplemented(Step::Head))
    }

    fn body_start(&self, _sink: &mut dyn LineSink) -> Result<(), RenderError> {
        Err(RenderError::unimplemented(Step::BodyStart))
    }

    fn line(&self, text: &str, sink: &mut dyn LineSink) -> Result<(), RenderError>;

    fn body_end(&self, _sink: &mut dyn LineSink) -> Result<(), RenderError> {
        Err(RenderError::unimplemented(Step::BodyEnd))
    }

    fn end(&self, _sink: &mut dyn LineSink) -> Result<(), RenderError> {
        Err(RenderError::unimplemented(Step::End))
    }
}
