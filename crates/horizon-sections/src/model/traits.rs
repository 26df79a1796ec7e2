//! Core traits for the sectioned list binding.
//!
//! These describe both sides of the contract with a list widget:
//!
//! - [`HostView`]: what the binding needs from the widget (cell recycling,
//!   reload, deselection, footer decoration)
//! - [`ListDataSource`]: what the widget asks of its data source (counts,
//!   cells, headers, interaction events)
//! - [`CellHandle`] / [`ModelCell`]: the capability query used for model
//!   injection
//! - [`ReusableRow`]: row identifiers that carry their own reuse identifier

use super::data::ItemData;
use super::index::IndexPath;

/// A cell that can render a generic model.
pub trait ModelCell {
    /// Assigns the model the cell should display.
    fn set_model(&mut self, model: ItemData);

    /// Refreshes the cell's content from its current model.
    ///
    /// Called by the binding right after every `set_model`.
    fn update_ui(&mut self) {}
}

/// A renderable cell handle produced by a host view's recycling pool.
pub trait CellHandle {
    /// Returns the cell as a [`ModelCell`] if it can receive a model.
    ///
    /// The default reports no model support, so model injection is skipped.
    fn as_model_cell(&mut self) -> Option<&mut dyn ModelCell> {
        None
    }
}

/// The list widget a binding drives.
///
/// Implemented by table-like and collection-like widgets alike; the binding
/// only needs the handful of operations below.
///
/// # Example
///
/// ```ignore
/// impl HostView for Table {
///     type Cell = Row;
///     type View = Widget;
///     type Scroll = ScrollOffset;
///
///     fn dequeue_reusable_cell(&self, identifier: &str, path: IndexPath) -> Option<Row> {
///         self.pool.lock().take(identifier, path)
///     }
///
///     fn reload_data(&self) {
///         self.invalidate_all();
///     }
///
///     fn deselect_row(&self, path: IndexPath, animated: bool) {
///         self.selection.lock().remove(&path, animated);
///     }
///
///     fn set_footer_view(&self, view: Option<Widget>) {
///         *self.footer.lock() = view;
///     }
/// }
/// ```
pub trait HostView: Send + Sync {
    /// Recycled cell type.
    type Cell: CellHandle + Into<Self::View>;
    /// General view type used for header and footer decorations.
    type View: Clone + Send + Sync;
    /// Scroll notification payload, passed through untouched.
    type Scroll;

    /// Returns a reusable cell registered under `identifier`.
    ///
    /// `None` means nothing was ever registered under that identifier.
    fn dequeue_reusable_cell(&self, identifier: &str, path: IndexPath) -> Option<Self::Cell>;

    /// Discards all cached layout and queries the data source again.
    fn reload_data(&self);

    /// Removes the selection highlight from a row.
    fn deselect_row(&self, path: IndexPath, animated: bool);

    /// Replaces the footer decoration shown below the last section.
    fn set_footer_view(&self, view: Option<Self::View>);
}

/// The queries a host view issues against its data source.
///
/// [`SectionedListBinding`](super::SectionedListBinding) implements this
/// directly. Screens that own a binding as a field can implement it by
/// forwarding, which keeps screen-specific behavior beside the binding
/// instead of inside it.
pub trait ListDataSource<V: HostView> {
    /// Number of sections.
    fn number_of_sections(&self) -> usize;

    /// Number of rows in `section`.
    fn number_of_rows(&self, section: usize) -> usize;

    /// The configured cell for `path`.
    fn cell_for_row(&self, path: IndexPath) -> V::Cell;

    /// Header title for `section`, if any.
    fn title_for_header(&self, _section: usize) -> Option<String> {
        None
    }

    /// Header view for `section`, if any.
    fn view_for_header(&self, _section: usize) -> Option<V::View> {
        None
    }

    /// The user tapped the row at `path`.
    fn did_select_row(&self, _path: IndexPath) {}

    /// The list scrolled.
    fn did_scroll(&self, _scroll: &V::Scroll) {}

    /// A scroll gesture finished decelerating.
    fn did_end_decelerating(&self, _scroll: &V::Scroll) {}
}

/// Row identifiers that know which reusable cell displays them.
///
/// Use with [`BindingCallbacks::with_reusable_rows`](super::BindingCallbacks::with_reusable_rows).
pub trait ReusableRow {
    /// Identifier of the reusable cell that displays this row.
    fn reuse_identifier(&self) -> &str;
}
