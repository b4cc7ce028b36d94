//! Configuration options for reStructuredText serialization

/// Heading adornment characters, indexed by `(depth - 1) % 4`
pub const DEFAULT_HEADING_MARKS: [char; 4] = ['=', '-', '+', '#'];

/// Options for reStructuredText serialization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Adornment palette for headings, cycled by depth
    pub heading_marks: [char; 4],

    /// Render a section's own children directly after its heading.
    ///
    /// Off by default: only the children attached to the [`Document`] are
    /// walked, and anything added to a [`Section`] is kept but not emitted.
    /// Depth is never adjusted for nested sections either way.
    ///
    /// [`Document`]: crate::Document
    /// [`Section`]: crate::Section
    pub nested_sections: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            heading_marks: DEFAULT_HEADING_MARKS,
            nested_sections: false,
        }
    }
}

impl Options {
    /// Enable or disable rendering of section children
    pub fn with_nested_sections(mut self, nested: bool) -> Self {
        self.nested_sections = nested;
        self
    }

    /// Replace the heading adornment palette
    pub fn with_heading_marks(mut self, marks: [char; 4]) -> Self {
        self.heading_marks = marks;
        self
    }
}
