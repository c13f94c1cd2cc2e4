//! Tabular source abstraction layer
//!
//! Each kind of location (local file, HTTP URL, stdin) implements the Source
//! trait. Reading a source is the only I/O the engine performs; every call
//! reads a fresh snapshot.

pub mod file;
pub mod http;
pub mod loader;
pub mod reader;
pub mod registry;
pub mod stdin;

use crate::error::SourceError;

/// Tabular source trait - implemented by each location kind
pub trait Source: Send + Sync {
    /// Location as given by the caller (path, URL or `-`)
    fn location(&self) -> &str;

    /// Display name for output
    fn display_name(&self) -> &str {
        self.location()
    }

    /// Read the whole source as text
    fn read_text(&self) -> Result<String, SourceError>;
}

/// Box type for dynamic dispatch
pub type BoxedSource = Box<dyn Source>;

pub use file::FileSource;
pub use http::HttpSource;
pub use loader::{
    IngestOptions, IngestReport, SourceStatus, ingest_all, ingest_location, ingest_rows, ingest_source,
    ingest_text,
};
pub use reader::read_rows;
pub use registry::open_source;
pub use stdin::StdinSource;
