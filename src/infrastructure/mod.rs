mod format;
mod sink;

pub use format::{HtmlFormat, PlainTextFormat};
pub use sink::{BufferSink, WriterSink};
