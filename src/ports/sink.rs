use crate::domain::RenderError;

pub trait LineSink {
    fn write_line(&mut self, line: &str) -> Result<(), RenderError>;
}
