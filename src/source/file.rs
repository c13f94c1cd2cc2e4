//! Local file source

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::SourceError;
use crate::source::Source;

pub struct FileSource {
    location: String,
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            location: path.display().to_string(),
            path,
        }
    }
}

impl Source for FileSource {
    fn location(&self) -> &str {
        &self.location
    }

    fn display_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or(&self.location)
    }

    fn read_text(&self) -> Result<String, SourceError> {
        std::fs::read_to_string(&self.path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => SourceError::NotFound {
                location: self.location.clone(),
            },
            _ => SourceError::Io {
                location: self.location.clone(),
                source,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frentes.csv");
        std::fs::write(&path, "name,value,baseline\n").unwrap();

        let source = FileSource::new(&path);
        assert_eq!(source.display_name(), "frentes.csv");
        assert_eq!(source.read_text().unwrap(), "name,value,baseline\n");
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("absent.csv"));
        assert!(matches!(
            source.read_text(),
            Err(SourceError::NotFound { .. })
        ));
    }

    #[test]
    fn invalid_utf8_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.csv");
        std::fs::write(&path, [0x6e, 0xe3, 0x6f]).unwrap();
        assert!(matches!(
            FileSource::new(&path).read_text(),
            Err(SourceError::Io { .. })
        ));
    }
}
