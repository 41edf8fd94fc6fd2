/// The named URL processed in one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    name: String,
    url: String,
}

impl Subject {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}
