mod format;
mod hooks;
mod sink;

pub use format::Format;
pub use hooks::{HookFormat, Hooked};
pub use sink::LineSink;
