//! Footer decoration policy: swap in an empty-state view when no rows exist.

/// Chooses the footer decoration after every sections replacement.
///
/// When the total row count across all sections is zero the `empty` view is
/// used; otherwise the `default` view. Either may be absent.
///
/// # Example
///
/// ```
/// use horizon_sections::model::FooterPolicy;
///
/// let policy = FooterPolicy::new()
///     .with_empty_view("Nothing here yet")
///     .with_default_view("End of list");
///
/// assert_eq!(policy.resolve(0), Some("Nothing here yet"));
/// assert_eq!(policy.resolve(5), Some("End of list"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterPolicy<W> {
    empty: Option<W>,
    default: Option<W>,
}

impl<W> Default for FooterPolicy<W> {
    fn default() -> Self {
        Self {
            empty: None,
            default: None,
        }
    }
}

impl<W: Clone> FooterPolicy<W> {
    /// Creates a policy with no footer in either state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the view shown when there are no rows.
    pub fn with_empty_view(mut self, view: W) -> Self {
        self.empty = Some(view);
        self
    }

    /// Sets the view shown when there is at least one row.
    pub fn with_default_view(mut self, view: W) -> Self {
        self.default = Some(view);
        self
    }

    /// Returns the empty-state view.
    pub fn empty_view(&self) -> Option<&W> {
        self.empty.as_ref()
    }

    /// Returns the default view.
    pub fn default_view(&self) -> Option<&W> {
        self.default.as_ref()
    }

    /// Returns `true` if neither state has a view, so the policy never touches the host.
    pub fn is_unset(&self) -> bool {
        self.empty.is_none() && self.default.is_none()
    }

    /// Picks the footer for a list holding `total_rows` rows.
    pub fn resolve(&self, total_rows: usize) -> Option<W> {
        if total_rows == 0 {
            self.empty.clone()
        } else {
            self.default.clone()
        }
    }
}
