mod report;
mod error;

pub use report::Report;
pub use error::{RenderError, Step};
