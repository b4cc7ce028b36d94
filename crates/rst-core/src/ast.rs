//! Document tree
//!
//! This module defines the nodes a document is built from. The tree is owned
//! top-down: a [`Document`] owns its children, a [`Section`] owns its own,
//! and nothing points back to a parent. Insertion order is render order.

use crate::options::Options;
use crate::serialize::serialize;

/// Root of a document: a title plus an ordered list of nodes
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    title: String,
    children: Vec<Node>,
}

impl Document {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            children: Vec::new(),
        }
    }

    /// Append a node to the end of the document.
    ///
    /// Always succeeds and returns `true`.
    pub fn add_child(&mut self, node: impl Into<Node>) -> bool {
        self.children.push(node.into());
        true
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Render the document with default [`Options`]
    pub fn render(&self) -> String {
        serialize(self, &Options::default())
    }

    /// Render the document with the given [`Options`]
    pub fn render_with(&self, options: &Options) -> String {
        serialize(self, options)
    }
}

/// A node that can appear in a document body
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Free text followed by a blank line
    Paragraph(Paragraph),

    /// Heading with a depth-selected adornment
    Section(Section),

    /// Unordered list of text items
    BulletList(BulletList),

    /// Numbered list of text items, starting at 1
    OrderedList(OrderedList),

    /// `list-table` directive
    Table(Table),

    /// `code-block` directive
    CodeBlock(CodeBlock),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Paragraph {
    text: String,
}

impl Paragraph {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A section heading.
///
/// `depth` starts at 1. Depth 0 is accepted and renders with the last
/// palette entry, underline only.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    title: String,
    depth: usize,
    children: Vec<Node>,
}

impl Section {
    pub fn new(title: impl Into<String>, depth: usize) -> Self {
        Self {
            title: title.into(),
            depth,
            children: Vec::new(),
        }
    }

    /// Append a node under this section.
    ///
    /// The node only appears in output when [`Options::nested_sections`] is
    /// set; depth is not adjusted for nested sections.
    pub fn add_child(&mut self, node: impl Into<Node>) -> bool {
        self.children.push(node.into());
        true
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }
}

impl Default for Section {
    fn default() -> Self {
        Self::new("", 1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BulletList {
    items: Vec<String>,
}

impl BulletList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item(&mut self, text: impl Into<String>) {
        self.items.push(text.into());
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrderedList {
    items: Vec<String>,
}

impl OrderedList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item(&mut self, text: impl Into<String>) {
        self.items.push(text.into());
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A table rendered as a `list-table` directive.
///
/// Rows are not checked against the header's column count.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    title: String,
    header: Option<Vec<String>>,
    width: Option<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the header row. An empty header is treated as no header.
    pub fn with_header<I, S>(mut self, header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.header = Some(header.into_iter().map(Into::into).collect());
        self
    }

    /// Set the raw width directive, e.g. `":widths: 15 10\n"`.
    ///
    /// The text is written as-is after a 4-space indent; no newline is
    /// appended. An empty string is treated as no width.
    pub fn with_width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    /// Append one data row
    pub fn add_item<I, S>(&mut self, row: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// The header row, if one was set and it is non-empty
    pub fn header(&self) -> Option<&[String]> {
        self.header.as_deref().filter(|h| !h.is_empty())
    }

    /// The width directive, if one was set and it is non-empty
    pub fn width(&self) -> Option<&str> {
        self.width.as_deref().filter(|w| !w.is_empty())
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CodeBlock {
    code: String,
    lang: String,
    linenos: bool,
}

impl CodeBlock {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            ..Self::default()
        }
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    pub fn with_linenos(mut self, linenos: bool) -> Self {
        self.linenos = linenos;
        self
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }

    pub fn linenos(&self) -> bool {
        self.linenos
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Node {
                fn from(node: $variant) -> Self {
                    Node::$variant(node)
                }
            }
        )*
    };
}

impl_from_variant!(Paragraph, Section, BulletList, OrderedList, Table, CodeBlock);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_child_keeps_order() {
        let mut doc = Document::new("T");
        assert!(doc.add_child(Paragraph::new("one")));
        assert!(doc.add_child(Section::new("two", 2)));
        assert!(doc.add_child(Paragraph::new("three")));

        assert_eq!(doc.children().len(), 3);
        assert_eq!(doc.children()[0], Node::Paragraph(Paragraph::new("one")));
        assert!(matches!(doc.children()[1], Node::Section(_)));
        assert_eq!(doc.children()[2], Node::Paragraph(Paragraph::new("three")));
    }

    #[test]
    fn test_section_children() {
        let mut sec = Section::new("Outer", 2);
        assert!(sec.add_child(Section::new("Inner", 3)));
        assert_eq!(sec.depth(), 2);
        assert_eq!(sec.children().len(), 1);
    }

    #[test]
    fn test_list_items() {
        let mut list = BulletList::new();
        assert!(list.is_empty());
        list.add_item("Python");
        list.add_item(String::from("Lisp"));
        assert_eq!(list.len(), 2);
        assert_eq!(list.items(), ["Python", "Lisp"]);
    }

    #[test]
    fn test_table_empty_header_and_width_are_absent() {
        let table = Table::new("t")
            .with_header(Vec::<String>::new())
            .with_width("");
        assert_eq!(table.header(), None);
        assert_eq!(table.width(), None);
    }

    #[test]
    fn test_table_rows_keep_their_arity() {
        let mut table = Table::new("Friends").with_header(["Name", "Project"]);
        table.add_item(["Ramki"]);
        table.add_item(["Pradeepto", "Kde", "extra"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0].len(), 1);
        assert_eq!(table.rows()[1].len(), 3);
    }

    #[test]
    fn test_code_block_defaults() {
        let code = CodeBlock::new("print(1)");
        assert_eq!(code.lang(), "");
        assert!(!code.linenos());
    }
}
