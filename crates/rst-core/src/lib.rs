//! rst-core - document tree and reStructuredText serialization
//!
//! This crate provides the node types used to build a document and the
//! serializer that turns a finished tree into reStructuredText. It is used
//! by the `rst` crate, which adds file output and error reporting on top.
//!
//! # Architecture
//!
//! ```text
//! Document ─┬─ Paragraph
//!           ├─ Section ── (children, rendered with `nested_sections`)
//!           ├─ BulletList / OrderedList
//!           ├─ Table
//!           └─ CodeBlock
//!                         ──serialize──▶ reStructuredText String
//! ```
//!
//! # Example
//!
//! ```rust
//! use rst_core::{Document, OrderedList, Paragraph, Section};
//!
//! let mut doc = Document::new("Title of the report");
//! doc.add_child(Paragraph::new("Just another paragraph."));
//! doc.add_child(Section::new("Another", 2));
//!
//! let mut list = OrderedList::new();
//! list.add_item("Fedora");
//! list.add_item("Debian");
//! doc.add_child(list);
//!
//! let text = doc.render();
//! assert!(text.starts_with("===================\nTitle of the report\n"));
//! assert!(text.ends_with("    1. Fedora\n    2. Debian\n\n"));
//! ```

mod ast;
mod options;
mod serialize;

pub use ast::{BulletList, CodeBlock, Document, Node, OrderedList, Paragraph, Section, Table};
pub use options::{Options, DEFAULT_HEADING_MARKS};
pub use serialize::{heading_mark, serialize, serialize_into};
