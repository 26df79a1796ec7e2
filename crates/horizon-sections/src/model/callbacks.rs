//! Closure-based configuration for a sectioned list binding.
//!
//! Every slot is optional. An unset slot means "no behavior for that event";
//! only [`BindingCallbacks::cell_reuse_identifier`] is required, and only by
//! cell construction.

use std::fmt;
use std::sync::Arc;

use super::data::ItemData;
use super::traits::{HostView, ReusableRow};

/// Maps a row or section identifier to a reuse identifier.
pub type ReuseIdentifierFn<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// Configures a dequeued cell for an identifier.
pub type ConfigureFn<C, T> = Arc<dyn Fn(&mut C, &T) + Send + Sync>;

/// Extracts the model injected into cells that can receive one.
pub type ModelExtractor<T> = Arc<dyn Fn(&T) -> ItemData + Send + Sync>;

/// Resolves a section header title.
pub type TitleFn<S> = Arc<dyn Fn(&S) -> Option<String> + Send + Sync>;

/// Resolves a section header view.
pub type HeaderViewFn<S, W> = Arc<dyn Fn(&S) -> Option<W> + Send + Sync>;

/// Handles a row selection.
pub type SelectFn<R> = Arc<dyn Fn(&R) + Send + Sync>;

/// Handles a scroll notification.
pub type ScrollFn<E> = Arc<dyn Fn(&E) + Send + Sync>;

/// The named callback slots a binding dispatches through.
///
/// Built once at setup time with the consuming `with_*` methods.
///
/// # Example
///
/// ```ignore
/// let callbacks = BindingCallbacks::<SectionInfo, CellInfo, Table>::new()
///     .with_cell_reuse_identifier(|_| "cell".to_string())
///     .with_configure_cell(|cell, info| cell.set_text(info.as_str()))
///     .with_section_title(|section| Some(section.as_str().to_string()))
///     .with_row_selected(|info| println!("did select: {}", info.as_str()));
/// ```
pub struct BindingCallbacks<S, R, V: HostView> {
    /// Reuse identifier for a row's cell. Required by cell construction.
    pub cell_reuse_identifier: Option<ReuseIdentifierFn<R>>,
    /// Configures a row's cell after model injection.
    pub configure_cell: Option<ConfigureFn<V::Cell, R>>,
    /// Model injected into row cells that can receive one.
    pub cell_model: Option<ModelExtractor<R>>,
    /// Header title for a section.
    pub section_title: Option<TitleFn<S>>,
    /// Explicit header view for a section. Takes priority over header cells.
    pub section_header_view: Option<HeaderViewFn<S, V::View>>,
    /// Reuse identifier for a section's header cell.
    pub section_reuse_identifier: Option<ReuseIdentifierFn<S>>,
    /// Configures a section's header cell after model injection.
    pub configure_section_cell: Option<ConfigureFn<V::Cell, S>>,
    /// Model injected into header cells that can receive one.
    pub section_model: Option<ModelExtractor<S>>,
    /// Row selection handler.
    pub row_selected: Option<SelectFn<R>>,
    /// Scroll handler.
    pub did_scroll: Option<ScrollFn<V::Scroll>>,
    /// Scroll-settled handler.
    pub did_end_decelerating: Option<ScrollFn<V::Scroll>>,
}

impl<S, R, V: HostView> Default for BindingCallbacks<S, R, V> {
    fn default() -> Self {
        Self {
            cell_reuse_identifier: None,
            configure_cell: None,
            cell_model: None,
            section_title: None,
            section_header_view: None,
            section_reuse_identifier: None,
            configure_section_cell: None,
            section_model: None,
            row_selected: None,
            did_scroll: None,
            did_end_decelerating: None,
        }
    }
}

impl<S, R, V: HostView> Clone for BindingCallbacks<S, R, V> {
    fn clone(&self) -> Self {
        Self {
            cell_reuse_identifier: self.cell_reuse_identifier.clone(),
            configure_cell: self.configure_cell.clone(),
            cell_model: self.cell_model.clone(),
            section_title: self.section_title.clone(),
            section_header_view: self.section_header_view.clone(),
            section_reuse_identifier: self.section_reuse_identifier.clone(),
            configure_section_cell: self.configure_section_cell.clone(),
            section_model: self.section_model.clone(),
            row_selected: self.row_selected.clone(),
            did_scroll: self.did_scroll.clone(),
            did_end_decelerating: self.did_end_decelerating.clone(),
        }
    }
}

impl<S, R, V: HostView> BindingCallbacks<S, R, V> {
    /// Creates a configuration with every slot unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the row reuse-identifier resolver.
    pub fn with_cell_reuse_identifier<F>(mut self, f: F) -> Self
    where
        F: Fn(&R) -> String + Send + Sync + 'static,
    {
        self.cell_reuse_identifier = Some(Arc::new(f));
        self
    }

    /// Sets the row cell configurer.
    pub fn with_configure_cell<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut V::Cell, &R) + Send + Sync + 'static,
    {
        self.configure_cell = Some(Arc::new(f));
        self
    }

    /// Sets the row model extractor.
    pub fn with_cell_model<F>(mut self, f: F) -> Self
    where
        F: Fn(&R) -> ItemData + Send + Sync + 'static,
    {
        self.cell_model = Some(Arc::new(f));
        self
    }

    /// Sets the section title resolver.
    pub fn with_section_title<F>(mut self, f: F) -> Self
    where
        F: Fn(&S) -> Option<String> + Send + Sync + 'static,
    {
        self.section_title = Some(Arc::new(f));
        self
    }

    /// Sets the explicit section header view resolver.
    pub fn with_section_header_view<F>(mut self, f: F) -> Self
    where
        F: Fn(&S) -> Option<V::View> + Send + Sync + 'static,
    {
        self.section_header_view = Some(Arc::new(f));
        self
    }

    /// Sets the section header-cell reuse-identifier resolver.
    pub fn with_section_reuse_identifier<F>(mut self, f: F) -> Self
    where
        F: Fn(&S) -> String + Send + Sync + 'static,
    {
        self.section_reuse_identifier = Some(Arc::new(f));
        self
    }

    /// Sets the section header-cell configurer.
    pub fn with_configure_section_cell<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut V::Cell, &S) + Send + Sync + 'static,
    {
        self.configure_section_cell = Some(Arc::new(f));
        self
    }

    /// Sets the section model extractor.
    pub fn with_section_model<F>(mut self, f: F) -> Self
    where
        F: Fn(&S) -> ItemData + Send + Sync + 'static,
    {
        self.section_model = Some(Arc::new(f));
        self
    }

    /// Sets the row selection handler.
    pub fn with_row_selected<F>(mut self, f: F) -> Self
    where
        F: Fn(&R) + Send + Sync + 'static,
    {
        self.row_selected = Some(Arc::new(f));
        self
    }

    /// Sets the scroll handler.
    pub fn with_did_scroll<F>(mut self, f: F) -> Self
    where
        F: Fn(&V::Scroll) + Send + Sync + 'static,
    {
        self.did_scroll = Some(Arc::new(f));
        self
    }

    /// Sets the scroll-settled handler.
    pub fn with_did_end_decelerating<F>(mut self, f: F) -> Self
    where
        F: Fn(&V::Scroll) + Send + Sync + 'static,
    {
        self.did_end_decelerating = Some(Arc::new(f));
        self
    }

    /// Names of the slots that are set, in declaration order.
    pub fn configured_slots(&self) -> Vec<&'static str> {
        let slots = [
            ("cell_reuse_identifier", self.cell_reuse_identifier.is_some()),
            ("configure_cell", self.configure_cell.is_some()),
            ("cell_model", self.cell_model.is_some()),
            ("section_title", self.section_title.is_some()),
            ("section_header_view", self.section_header_view.is_some()),
            ("section_reuse_identifier", self.section_reuse_identifier.is_some()),
            ("configure_section_cell", self.configure_section_cell.is_some()),
            ("section_model", self.section_model.is_some()),
            ("row_selected", self.row_selected.is_some()),
            ("did_scroll", self.did_scroll.is_some()),
            ("did_end_decelerating", self.did_end_decelerating.is_some()),
        ];
        slots
            .into_iter()
            .filter_map(|(name, set)| set.then_some(name))
            .collect()
    }
}

impl<S: 'static, R: ReusableRow + 'static, V: HostView + 'static> BindingCallbacks<S, R, V> {
    /// Resolves row reuse identifiers from the rows themselves.
    pub fn with_reusable_rows(self) -> Self {
        self.with_cell_reuse_identifier(|row: &R| row.reuse_identifier().to_owned())
    }
}

impl<S, R, V: HostView> fmt::Debug for BindingCallbacks<S, R, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BindingCallbacks")
            .field("configured", &self.configured_slots())
            .finish()
    }
}
