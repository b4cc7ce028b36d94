//! RstWriter - renders documents and writes them to sinks and files.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use rst_core::{serialize, Document, Options};

use crate::{Error, Result};

/// Renders documents with a fixed set of options
#[derive(Debug, Clone, Default)]
pub struct RstWriter {
    options: Options,
}

impl RstWriter {
    /// Create a new RstWriter with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an RstWriter with custom options
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    /// Get the current options
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    /// Render a document to a string
    pub fn render(&self, document: &Document) -> String {
        serialize(document, &self.options)
    }

    /// Render a document into any writer
    pub fn write<W: Write>(&self, document: &Document, mut writer: W) -> Result<()> {
        let text = self.render(document);
        writer.write_all(text.as_bytes())?;
        writer.flush()?;
        log::debug!(
            "Wrote document {:?} ({} bytes)",
            document.title(),
            text.len()
        );
        Ok(())
    }

    /// Render a document and save it as UTF-8 at `path`.
    ///
    /// The file is created or truncated. It is closed when this returns,
    /// whether or not the write succeeded.
    pub fn save(&self, document: &Document, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        log::debug!("Saving document {:?} to {}", document.title(), path.display());

        let result = File::create(path).and_then(|file| {
            let mut writer = BufWriter::new(file);
            writer.write_all(self.render(document).as_bytes())?;
            writer.flush()
        });

        result.map_err(|source| {
            log::warn!("Failed to save {}: {}", path.display(), source);
            Error::Save {
                path: path.to_path_buf(),
                source,
            }
        })
    }
}

/// File and sink output directly on a [`Document`], using default options
pub trait DocumentExt {
    /// Save the rendered document at `path`
    fn save(&self, path: impl AsRef<Path>) -> Result<()>;

    /// Write the rendered document into `writer`
    fn write_to<W: Write>(&self, writer: W) -> Result<()>;
}

impl DocumentExt for Document {
    fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        RstWriter::new().save(self, path)
    }

    fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        RstWriter::new().write(self, writer)
    }
}
