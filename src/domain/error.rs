use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Start,
    Head,
    BodyStart,
    Line,
    BodyEnd,
    End,
}

impl Step {
    pub fn name(&self) -> &'static str {
        match self {
            Step::Start => "start",
            Step::Head => "head",
            Step::BodyStart => "body_start",
            Step::Line => "line",
            Step::BodyEnd => "body_end",
            Step::End => "end",
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("step `{0}` is not implemented for this format")]
    Unimplemented(Step),
    #[error("sink write failed: {0}")]
    Sink(#[source] std::io::Error),
    #[error("step `{step}` failed: {msg}")]
    Step { step: Step, msg: String },
}

impl RenderError {
    pub fn unimplemented(step: Step) -> Self {
        RenderError::Unimplemented(step)
    }

    pub fn sink(err: std::io::Error) -> Self {
        RenderError::Sink(err)
    }

    pub fn step(step: Step, msg: impl Into<String>) -> Self {
        RenderError::Step { step, msg: msg.into() }
    }
}
