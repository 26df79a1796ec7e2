//! A section: one header identifier plus an ordered run of row identifiers.

use std::ops::{Index, IndexMut};

/// A named group of rows displayed together under one optional header.
///
/// `S` identifies the section and `R` identifies each row. Both are opaque
/// to the binding: only their positions matter.
///
/// # Example
///
/// ```
/// use horizon_sections::model::Section;
///
/// let mut section = Section::new("Author", vec!["AuthorName", "AuthorImage"]);
/// assert_eq!(section[1], "AuthorImage");
///
/// section[1] = "AuthorAge";
/// assert_eq!(section.rows(), &["AuthorName", "AuthorAge"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Section<S, R> {
    info: S,
    rows: Vec<R>,
}

impl<S, R> Section<S, R> {
    /// Creates a section from its identifier and rows.
    pub fn new(info: S, rows: Vec<R>) -> Self {
        Self { info, rows }
    }

    /// Returns the section identifier.
    pub fn info(&self) -> &S {
        &self.info
    }

    /// Returns a mutable reference to the section identifier.
    pub fn info_mut(&mut self) -> &mut S {
        &mut self.info
    }

    /// Returns the row identifiers in display order.
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the section has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the row at `row`, or `None` if out of range.
    pub fn get(&self, row: usize) -> Option<&R> {
        self.rows.get(row)
    }

    /// Returns a mutable reference to the row at `row`, or `None` if out of range.
    pub fn get_mut(&mut self, row: usize) -> Option<&mut R> {
        self.rows.get_mut(row)
    }

    /// Appends a row.
    pub fn push_row(&mut self, row: R) {
        self.rows.push(row);
    }

    /// Iterates over the rows in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.rows.iter()
    }

    /// Splits the section into its identifier and rows.
    pub fn into_parts(self) -> (S, Vec<R>) {
        (self.info, self.rows)
    }
}

impl<S, R> From<(S, Vec<R>)> for Section<S, R> {
    fn from((info, rows): (S, Vec<R>)) -> Self {
        Self::new(info, rows)
    }
}

impl<S, R> Index<usize> for Section<S, R> {
    type Output = R;

    fn index(&self, row: usize) -> &R {
        &self.rows[row]
    }
}

impl<S, R> IndexMut<usize> for Section<S, R> {
    fn index_mut(&mut self, row: usize) -> &mut R {
        &mut self.rows[row]
    }
}

impl<'a, S, R> IntoIterator for &'a Section<S, R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pair() {
        let section: Section<&str, u32> = ("Numbers", vec![1, 2, 3]).into();
        assert_eq!(*section.info(), "Numbers");
        assert_eq!(section.len(), 3);
        assert!(!section.is_empty());
        assert_eq!(section.get(2), Some(&3));
        assert_eq!(section.get(3), None);
    }

    #[test]
    fn test_write_through_index() {
        let mut section = Section::new((), vec!['a', 'b']);
        section[0] = 'z';
        section.push_row('c');
        assert_eq!(section.iter().collect::<String>(), "zbc");
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range_panics() {
        let section = Section::new((), vec![1]);
        let _ = section[1];
    }

    #[test]
    fn test_into_parts() {
        let (info, rows) = Section::new("s", vec![1, 2]).into_parts();
        assert_eq!(info, "s");
        assert_eq!(rows, vec![1, 2]);
    }
}
