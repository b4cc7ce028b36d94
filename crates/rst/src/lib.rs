//! # rst
//!
//! Build structured documents in code and write them out as
//! reStructuredText.
//!
//! ## Design
//!
//! The document tree and the serializer live in `rst-core`; this crate
//! re-exports them and adds the parts that touch the outside world:
//!
//! - **[`RstWriter`]**: renders with a fixed set of [`Options`] and writes the
//!   result to any [`std::io::Write`] sink or to a file
//! - **[`DocumentExt`]**: `save` and `write_to` directly on a [`Document`]
//! - **[`Error`]**: I/O failures from writing, the only errors this crate
//!   reports
//!
//! Rendering itself never fails. Unusual input such as an empty title,
//! depth 0 or ragged table rows is rendered as given.
//!
//! ## Example
//!
//! ```rust
//! use rst::{Document, Paragraph, Section, Table};
//!
//! let mut doc = Document::new("Title of the report");
//! doc.add_child(Paragraph::new("Just another paragraph."));
//! doc.add_child(Section::new("Another", 2));
//!
//! let mut table = Table::new("My friends").with_header(["Name", "Major Project"]);
//! table.add_item(["Ramki", "Python"]);
//! doc.add_child(table);
//!
//! let text = doc.render();
//! assert!(text.contains(".. list-table:: My friends\n"));
//! ```
//!
//! ## Saving
//!
//! ```rust,no_run
//! use rst::{Document, DocumentExt};
//!
//! let doc = Document::new("Notes");
//! doc.save("notes.rst").unwrap();
//! ```

mod service;

pub use rst_core::{
    heading_mark, serialize, serialize_into, BulletList, CodeBlock, Document, Node, OrderedList,
    Options, Paragraph, Section, Table, DEFAULT_HEADING_MARKS,
};
pub use service::{DocumentExt, RstWriter};

use std::path::PathBuf;

/// Error type for rst operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to save {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Write error: {0}")]
    Write(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
