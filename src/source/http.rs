//! HTTP(S) source, for sheets published as CSV

use crate::error::SourceError;
use crate::source::Source;

pub struct HttpSource {
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn handles(location: &str) -> bool {
        location.starts_with("http://") || location.starts_with("https://")
    }
}

impl Source for HttpSource {
    fn location(&self) -> &str {
        &self.url
    }

    fn read_text(&self) -> Result<String, SourceError> {
        let http_err = |e: ureq::Error| SourceError::Http {
            location: self.url.clone(),
            reason: e.to_string(),
        };
        let response = ureq::get(self.url.as_str()).call().map_err(http_err)?;
        let mut body = response.into_body();
        body.read_to_string().map_err(http_err)
    }
}
