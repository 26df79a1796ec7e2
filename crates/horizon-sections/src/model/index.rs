//! Index paths for addressing rows in a sectioned list.
//!
//! An `IndexPath` is the (section, row) pair a host view uses for every
//! per-row query. It carries no reference to the data it addresses.

use std::fmt;

/// Position of one row within a two-level section/row structure.
///
/// # Index Validity
///
/// Index paths should be used immediately and not stored long-term. Every
/// replacement of a binding's sections invalidates all previously obtained
/// paths, even when the new list happens to have the same shape.
///
/// # Example
///
/// ```
/// use horizon_sections::model::IndexPath;
///
/// let path = IndexPath::new(1, 2);
/// assert_eq!(path.section(), 1);
/// assert_eq!(path.row(), 2);
/// assert_eq!(path.to_string(), "[1, 2]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct IndexPath {
    section: usize,
    row: usize,
}

impl IndexPath {
    /// Creates an index path.
    #[inline]
    pub const fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }

    /// The path a host uses when dequeuing a cell to serve as the header of
    /// `section`.
    #[inline]
    pub const fn header(section: usize) -> Self {
        Self { section, row: 0 }
    }

    /// Returns the section position.
    #[inline]
    pub fn section(&self) -> usize {
        self.section
    }

    /// Returns the row position within the section.
    #[inline]
    pub fn row(&self) -> usize {
        self.row
    }

    /// Creates a path to another row in the same section.
    #[inline]
    pub fn sibling(&self, row: usize) -> Self {
        Self::new(self.section, row)
    }
}

impl From<(usize, usize)> for IndexPath {
    fn from((section, row): (usize, usize)) -> Self {
        Self::new(section, row)
    }
}

impl From<IndexPath> for (usize, usize) {
    fn from(path: IndexPath) -> Self {
        (path.section, path.row)
    }
}

impl fmt::Display for IndexPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.section, self.row)
    }
}
