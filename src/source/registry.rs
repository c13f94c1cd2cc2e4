//! Source registry
//!
//! Picks the Source implementation for a location string.

use super::{BoxedSource, FileSource, HttpSource, StdinSource};

/// Open a source by location: `-` for stdin, an http(s) URL, or a file path
pub fn open_source(location: &str) -> BoxedSource {
    let location = location.trim();
    if location == StdinSource::LOCATION {
        Box::new(StdinSource::new())
    } else if HttpSource::handles(location) {
        Box::new(HttpSource::new(location))
    } else {
        Box::new(FileSource::new(location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Source;

    #[test]
    fn open_source_by_location() {
        assert_eq!(open_source("-").display_name(), "stdin");
        assert_eq!(
            open_source("https://example.com/a.csv").location(),
            "https://example.com/a.csv"
        );
        assert_eq!(open_source("data/csv/frentes.csv").display_name(), "frentes.csv");
    }
}
