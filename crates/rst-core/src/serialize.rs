//! reStructuredText serialization
//!
//! Converts a [`Document`] tree into reStructuredText. Output is exact:
//! every newline and indent emitted here is part of the format contract.

use crate::ast::{BulletList, CodeBlock, Document, Node, OrderedList, Section, Table};
use crate::options::Options;

const INDENT: &str = "    ";

/// Serialize a document to a reStructuredText string
pub fn serialize(document: &Document, options: &Options) -> String {
    let mut output = String::with_capacity(1024);
    serialize_into(document, options, &mut output);
    output
}

/// Serialize a document, appending to an existing buffer
pub fn serialize_into(document: &Document, options: &Options, out: &mut String) {
    serialize_heading(document.title(), 1, options, out);
    serialize_nodes(document.children(), options, out);
}

/// Adornment character for a heading at `depth`.
///
/// Cycles through the palette as `(depth - 1) % 4`. Depth 0 wraps to the
/// last entry.
pub fn heading_mark(depth: usize, options: &Options) -> char {
    options.heading_marks[depth.wrapping_sub(1) % options.heading_marks.len()]
}

fn serialize_nodes(nodes: &[Node], options: &Options, out: &mut String) {
    for node in nodes {
        serialize_node(node, options, out);
    }
}

fn serialize_node(node: &Node, options: &Options, out: &mut String) {
    match node {
        Node::Paragraph(paragraph) => {
            out.push_str(paragraph.text());
            out.push_str("\n\n");
        }

        Node::Section(section) => serialize_section(section, options, out),

        Node::BulletList(list) => serialize_bullet_list(list, out),

        Node::OrderedList(list) => serialize_ordered_list(list, out),

        Node::Table(table) => serialize_table(table, out),

        Node::CodeBlock(code) => serialize_code_block(code, out),
    }
}

fn serialize_heading(title: &str, depth: usize, options: &Options, out: &mut String) {
    let mark = heading_mark(depth, options);
    // Adornment length is counted in chars, not bytes
    let adornment: String = std::iter::repeat(mark).take(title.chars().count()).collect();

    if depth == 1 {
        out.push_str(&adornment);
        out.push('\n');
    } else {
        out.push('\n');
    }
    out.push_str(title);
    out.push('\n');
    out.push_str(&adornment);
    out.push_str("\n\n");
}

fn serialize_section(section: &Section, options: &Options, out: &mut String) {
    serialize_heading(section.title(), section.depth(), options, out);

    if options.nested_sections {
        serialize_nodes(section.children(), options, out);
    }
}

fn serialize_bullet_list(list: &BulletList, out: &mut String) {
    for item in list.items() {
        out.push_str(INDENT);
        out.push_str("* ");
        out.push_str(item);
        out.push('\n');
    }
    out.push('\n');
}

fn serialize_ordered_list(list: &OrderedList, out: &mut String) {
    for (i, item) in list.items().iter().enumerate() {
        out.push_str(INDENT);
        out.push_str(&(i + 1).to_string());
        out.push_str(". ");
        out.push_str(item);
        out.push('\n');
    }
    out.push('\n');
}

fn serialize_table(table: &Table, out: &mut String) {
    out.push_str(".. list-table:: ");
    out.push_str(table.title());
    out.push('\n');

    if let Some(width) = table.width() {
        out.push_str(INDENT);
        out.push_str(width);
    }

    if let Some(header) = table.header() {
        out.push_str(INDENT);
        out.push_str(":header-rows: 1\n\n");
        serialize_table_row(header, out);
    }

    for row in table.rows() {
        serialize_table_row(row, out);
    }
}

fn serialize_table_row(cells: &[String], out: &mut String) {
    for (i, cell) in cells.iter().enumerate() {
        if i == 0 {
            out.push_str("    * -  ");
        } else {
            out.push_str("      -  ");
        }
        out.push_str(cell);
        out.push('\n');
    }
}

fn serialize_code_block(code: &CodeBlock, out: &mut String) {
    out.push_str(".. code-block:: ");
    out.push_str(code.lang());
    out.push('\n');

    if code.linenos() {
        out.push_str(INDENT);
        out.push_str(":linenos:\n\n");
    }

    // split, not lines: a trailing newline yields a final indented empty line
    for (i, line) in code.code().split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(INDENT);
        out.push_str(line);
    }
    out.push('\n');
}
