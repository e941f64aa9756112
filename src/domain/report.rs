#[derive(Debug, Clone)]
pub struct Report {
    pub title: String,
    pub body: Vec<String>,
}

impl Report {
    pub fn new(title: impl Into<String>, body: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            title: title.into(),
            body: body.into_iter().map(Into::into).collect(),
        }
    }
}
