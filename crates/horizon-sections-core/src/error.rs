//! Error types for Horizon Sections.
//!
//! Every variant except [`SectionsError::Config`] describes a broken caller
//! contract. The plain binding queries panic with the variant's message; the
//! `try_` variants hand it back instead.

/// Result type alias for Horizon Sections operations.
pub type Result<T> = std::result::Result<T, SectionsError>;

/// Errors that can occur when querying or configuring a binding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SectionsError {
    /// A section position past the end of the section list.
    #[error("section {section} is out of range (section count is {count})")]
    SectionOutOfRange { section: usize, count: usize },

    /// A row position past the end of its section.
    #[error("row {row} is out of range in section {section} (row count is {count})")]
    RowOutOfRange {
        section: usize,
        row: usize,
        count: usize,
    },

    /// The host view was never bound, or has been dropped.
    #[error("no host view is bound to this binding")]
    ViewNotBound,

    /// A callback that the operation cannot run without is unset.
    #[error("required callback '{0}' is not configured")]
    MissingCallback(&'static str),

    /// The host view has no reusable cell registered under the identifier.
    #[error("host view has no reusable cell registered for '{identifier}' (requested at {path})")]
    UnregisteredReuseIdentifier { identifier: String, path: String },

    /// Binding options could not be parsed.
    #[error("invalid binding options: {0}")]
    Config(String),
}

impl SectionsError {
    /// Create an unregistered-identifier error.
    pub fn unregistered(identifier: impl Into<String>, path: impl ToString) -> Self {
        Self::UnregisteredReuseIdentifier {
            identifier: identifier.into(),
            path: path.to_string(),
        }
    }

    /// Returns `true` if the error is a violated precondition rather than bad input.
    pub fn is_contract_violation(&self) -> bool {
        !matches!(self, Self::Config(_))
    }
}
