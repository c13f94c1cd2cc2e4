//! Standard input source (`-`)

use std::io::Read;

use crate::error::SourceError;
use crate::source::Source;

pub struct StdinSource;

impl StdinSource {
    pub const LOCATION: &'static str = "-";

    pub fn new() -> Self {
        Self
    }
}

impl Default for StdinSource {
    fn default() -> Self {
        Self::new()
    }
}

impl Source for StdinSource {
    fn location(&self) -> &str {
        Self::LOCATION
    }

    fn display_name(&self) -> &str {
        "stdin"
    }

    fn read_text(&self) -> Result<String, SourceError> {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|source| SourceError::Io {
                location: "stdin".to_string(),
                source,
            })?;
        Ok(text)
    }
}
