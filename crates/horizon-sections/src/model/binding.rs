//! The sectioned list binding.
//!
//! `SectionedListBinding<S, R, V>` owns the sections a host list view
//! displays and answers the host's index-path queries by dispatching to the
//! closures in its [`BindingCallbacks`].
//!
//! # Refresh model
//!
//! Replacing the sections is the only mutation path. Every replacement
//! triggers exactly one full `reload_data` on the host, no diffing, and then
//! re-evaluates the [`FooterPolicy`]. Index paths obtained before a
//! replacement must not be reused after it.
//!
//! # Locking
//!
//! State sits behind `parking_lot` locks so the binding is `Send + Sync`, but
//! no lock is held while a callback or host method runs. Callbacks may read
//! from the binding, and may even replace its sections.

use std::ops::Deref;
use std::sync::{Arc, Weak};

use parking_lot::RwLock;

use horizon_sections_core::logging::targets;
use horizon_sections_core::{PerfSpan, Result, SectionsError, Signal};

use super::callbacks::{BindingCallbacks, ModelExtractor};
use super::footer::FooterPolicy;
use super::index::IndexPath;
use super::options::BindingOptions;
use super::section::Section;
use super::traits::{CellHandle, HostView, ListDataSource};

/// Signals emitted by a binding.
pub struct BindingSignals {
    /// Emitted after each sections replacement (and the host reload it
    /// triggers). Args: the new section count.
    pub sections_replaced: Signal<usize>,

    /// Emitted after the selection callback for a tapped row.
    pub row_selected: Signal<IndexPath>,

    /// Emitted after the footer policy installed a footer.
    /// Args: `true` when the empty-state view was installed.
    pub footer_changed: Signal<bool>,
}

impl Default for BindingSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl BindingSignals {
    /// Creates a new set of binding signals.
    pub fn new() -> Self {
        Self {
            sections_replaced: Signal::new(),
            row_selected: Signal::new(),
            footer_changed: Signal::new(),
        }
    }
}

/// Converts a host list view's delegate queries into closure calls over a
/// list of sections.
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use horizon_sections::model::{BindingCallbacks, Section, SectionedListBinding};
///
/// let binding = SectionedListBinding::new().with_callbacks(
///     BindingCallbacks::new()
///         .with_cell_reuse_identifier(|_| "cell".to_string())
///         .with_configure_cell(|cell: &mut TextCell, row: &&str| cell.text = row.to_string())
///         .with_section_title(|section: &&str| Some(section.to_string())),
/// );
///
/// let table = Arc::new(Table::new());
/// binding.bind_view(&table);
///
/// binding.set_sections(vec![
///     Section::new("OverView", vec!["Name", "Detail", "Time"]),
///     Section::new("Author", vec!["AuthorName", "AuthorImage", "AuthorAge"]),
/// ]);
///
/// assert_eq!(binding.section_count(), 2);
/// assert_eq!(binding.title_for_header(0).as_deref(), Some("OverView"));
/// ```
pub struct SectionedListBinding<S, R, V: HostView> {
    sections: RwLock<Vec<Section<S, R>>>,
    view: RwLock<Weak<V>>,
    callbacks: RwLock<Arc<BindingCallbacks<S, R, V>>>,
    footer: RwLock<FooterPolicy<V::View>>,
    options: RwLock<BindingOptions>,
    signals: BindingSignals,
}

impl<S, R, V> Default for SectionedListBinding<S, R, V>
where
    S: Clone + Send + Sync + 'static,
    R: Clone + Send + Sync + 'static,
    V: HostView + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S, R, V> SectionedListBinding<S, R, V>
where
    S: Clone + Send + Sync + 'static,
    R: Clone + Send + Sync + 'static,
    V: HostView + 'static,
{
    /// Creates an unconfigured binding with no sections and no view.
    pub fn new() -> Self {
        Self {
            sections: RwLock::new(Vec::new()),
            view: RwLock::new(Weak::new()),
            callbacks: RwLock::new(Arc::new(BindingCallbacks::default())),
            footer: RwLock::new(FooterPolicy::default()),
            options: RwLock::new(BindingOptions::default()),
            signals: BindingSignals::new(),
        }
    }

    /// Sets the callbacks at construction time.
    pub fn with_callbacks(self, callbacks: BindingCallbacks<S, R, V>) -> Self {
        self.set_callbacks(callbacks);
        self
    }

    /// Sets the options at construction time.
    pub fn with_options(self, options: BindingOptions) -> Self {
        self.set_options(options);
        self
    }

    /// Sets the footer policy at construction time.
    pub fn with_footer_policy(self, policy: FooterPolicy<V::View>) -> Self {
        self.set_footer_policy(policy);
        self
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Replaces the callback configuration.
    pub fn set_callbacks(&self, callbacks: BindingCallbacks<S, R, V>) {
        tracing::debug!(
            target: targets::BINDING,
            configured = ?callbacks.configured_slots(),
            "callbacks installed"
        );
        *self.callbacks.write() = Arc::new(callbacks);
    }

    /// Returns the current callback configuration.
    pub fn callbacks(&self) -> Arc<BindingCallbacks<S, R, V>> {
        self.callbacks.read().clone()
    }

    /// Replaces the options.
    pub fn set_options(&self, options: BindingOptions) {
        *self.options.write() = options;
    }

    /// Returns the current options.
    pub fn options(&self) -> BindingOptions {
        *self.options.read()
    }

    /// Replaces the footer policy. It takes effect at the next sections
    /// replacement.
    pub fn set_footer_policy(&self, policy: FooterPolicy<V::View>) {
        *self.footer.write() = policy;
    }

    /// Returns the current footer policy.
    pub fn footer_policy(&self) -> FooterPolicy<V::View> {
        self.footer.read().clone()
    }

    /// Returns the signals for this binding.
    pub fn signals(&self) -> &BindingSignals {
        &self.signals
    }

    // =========================================================================
    // Host view
    // =========================================================================

    /// Binds the host view.
    ///
    /// Only a weak reference is kept: the caller owns the view and must keep
    /// it alive for as long as it queries the binding.
    pub fn bind_view(&self, view: &Arc<V>) {
        *self.view.write() = Arc::downgrade(view);
        tracing::debug!(target: targets::BINDING, "host view bound");

        if self.options().reload_on_bind {
            self.reload(view);
        }
    }

    /// Drops the reference to the host view.
    pub fn unbind_view(&self) {
        *self.view.write() = Weak::new();
        tracing::debug!(target: targets::BINDING, "host view unbound");
    }

    /// Returns `true` if a live host view is bound.
    pub fn is_view_bound(&self) -> bool {
        self.view.read().strong_count() > 0
    }

    /// Returns the bound host view.
    pub fn view(&self) -> Result<Arc<V>> {
        self.view.read().upgrade().ok_or(SectionsError::ViewNotBound)
    }

    // =========================================================================
    // Sections
    // =========================================================================

    /// Replaces the sections and reloads the host view.
    ///
    /// Readers never observe a partially replaced list. When no view is bound
    /// the sections are stored and the reload is skipped.
    pub fn set_sections(&self, sections: Vec<Section<S, R>>) {
        let _span = PerfSpan::new("set_sections");
        let section_count = sections.len();
        let total_rows: usize = sections.iter().map(Section::len).sum();

        *self.sections.write() = sections;
        tracing::debug!(
            target: targets::BINDING,
            sections = section_count,
            rows = total_rows,
            "sections replaced"
        );

        match self.view() {
            Ok(view) => self.reload(&view),
            Err(_) => {
                tracing::debug!(target: targets::BINDING, "no host view bound, reload skipped");
            }
        }

        self.signals.sections_replaced.emit(section_count);
    }

    /// Replaces the sections from `(section, rows)` pairs.
    pub fn set_sections_from_pairs<I>(&self, pairs: I)
    where
        I: IntoIterator<Item = (S, Vec<R>)>,
    {
        self.set_sections(pairs.into_iter().map(Section::from).collect());
    }

    /// Rewrites the sections through a closure and reloads.
    ///
    /// The closure edits a copy; the result replaces the current list exactly
    /// like [`set_sections`](Self::set_sections).
    pub fn modify_sections<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&mut Vec<Section<S, R>>) -> T,
    {
        let mut sections = self.sections.read().clone();
        let result = f(&mut sections);
        self.set_sections(sections);
        result
    }

    /// Returns a read guard over the current sections.
    ///
    /// Do not replace the sections while holding the guard.
    pub fn sections(&self) -> impl Deref<Target = Vec<Section<S, R>>> + '_ {
        self.sections.read()
    }

    /// Returns the number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.read().len()
    }

    /// Returns the number of rows in `section`.
    ///
    /// # Panics
    ///
    /// Panics if `section >= section_count()`.
    pub fn row_count(&self, section: usize) -> usize {
        contract(self.try_row_count(section))
    }

    /// Returns the number of rows in `section`, or an error if out of range.
    pub fn try_row_count(&self, section: usize) -> Result<usize> {
        let sections = self.sections.read();
        sections
            .get(section)
            .map(Section::len)
            .ok_or(SectionsError::SectionOutOfRange {
                section,
                count: sections.len(),
            })
    }

    /// Returns the number of rows across all sections.
    pub fn total_row_count(&self) -> usize {
        self.sections.read().iter().map(Section::len).sum()
    }

    /// Returns `true` if no section holds any row.
    pub fn is_empty(&self) -> bool {
        self.total_row_count() == 0
    }

    /// Returns the section identifier at `section`.
    ///
    /// # Panics
    ///
    /// Panics if `section >= section_count()`.
    pub fn section_at(&self, section: usize) -> S {
        contract(self.try_section_at(section))
    }

    /// Returns the section identifier at `section`, or an error if out of range.
    pub fn try_section_at(&self, section: usize) -> Result<S> {
        let sections = self.sections.read();
        sections
            .get(section)
            .map(|s| s.info().clone())
            .ok_or(SectionsError::SectionOutOfRange {
                section,
                count: sections.len(),
            })
    }

    /// Returns the row identifier at `path`.
    ///
    /// # Panics
    ///
    /// Panics if `path` is outside the current sections.
    pub fn row_at(&self, path: IndexPath) -> R {
        contract(self.try_row_at(path))
    }

    /// Returns the row identifier at `path`, or an error if out of range.
    pub fn try_row_at(&self, path: IndexPath) -> Result<R> {
        let sections = self.sections.read();
        let section = sections
            .get(path.section())
            .ok_or(SectionsError::SectionOutOfRange {
                section: path.section(),
                count: sections.len(),
            })?;
        section
            .get(path.row())
            .cloned()
            .ok_or(SectionsError::RowOutOfRange {
                section: path.section(),
                row: path.row(),
                count: section.len(),
            })
    }

    // =========================================================================
    // Cells and headers
    // =========================================================================

    /// Dequeues and configures the cell for `path`.
    ///
    /// The cell comes from the host's pool under the identifier returned by
    /// the row reuse-identifier callback. If a row model extractor is set,
    /// yields a model and the cell can receive one, the model is assigned
    /// first; then the cell configurer runs.
    ///
    /// # Panics
    ///
    /// Panics on a bad path, an unbound view, a missing reuse-identifier
    /// callback, or an identifier the host never registered.
    pub fn cell_at(&self, path: IndexPath) -> V::Cell {
        contract(self.try_cell_at(path))
    }

    /// Fallible form of [`cell_at`](Self::cell_at).
    pub fn try_cell_at(&self, path: IndexPath) -> Result<V::Cell> {
        let row = self.try_row_at(path)?;
        let callbacks = self.callbacks();
        let reuse_identifier = callbacks
            .cell_reuse_identifier
            .as_ref()
            .ok_or(SectionsError::MissingCallback("cell_reuse_identifier"))?;

        let identifier = reuse_identifier(&row);
        let view = self.view()?;
        let mut cell = view
            .dequeue_reusable_cell(&identifier, path)
            .ok_or_else(|| SectionsError::unregistered(identifier.as_str(), path))?;

        let injected = inject_model(&mut cell, callbacks.cell_model.as_ref(), &row);
        if let Some(configure) = &callbacks.configure_cell {
            configure(&mut cell, &row);
        }

        tracing::trace!(
            target: targets::QUERY,
            %path,
            identifier = identifier.as_str(),
            injected,
            "cell configured"
        );
        Ok(cell)
    }

    /// Returns the header title for `section`, or `None` when no title
    /// callback is set.
    ///
    /// # Panics
    ///
    /// Panics if a title callback is set and `section` is out of range.
    pub fn title_for_header(&self, section: usize) -> Option<String> {
        let callbacks = self.callbacks();
        let title = callbacks.section_title.as_ref()?;
        title(&self.section_at(section))
    }

    /// Resolves the header view for `section`.
    ///
    /// Resolution order:
    /// 1. the explicit header-view callback, if set and it returns a view;
    /// 2. a header cell, if a section reuse-identifier callback is set: the
    ///    cell is dequeued at [`IndexPath::header`], receives the section
    ///    model if any, and is passed to the section cell configurer;
    /// 3. no header view.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`cell_at`](Self::cell_at) when a
    /// header cell has to be built.
    pub fn view_for_header(&self, section: usize) -> Option<V::View> {
        contract(self.try_view_for_header(section))
    }

    /// Fallible form of [`view_for_header`](Self::view_for_header).
    pub fn try_view_for_header(&self, section: usize) -> Result<Option<V::View>> {
        let callbacks = self.callbacks();
        if callbacks.section_header_view.is_none() && callbacks.section_reuse_identifier.is_none() {
            return Ok(None);
        }

        let info = self.try_section_at(section)?;

        if let Some(header_view) = &callbacks.section_header_view {
            if let Some(view) = header_view(&info) {
                tracing::trace!(target: targets::QUERY, section, "explicit header view");
                return Ok(Some(view));
            }
        }

        let Some(reuse_identifier) = &callbacks.section_reuse_identifier else {
            return Ok(None);
        };

        let identifier = reuse_identifier(&info);
        let path = IndexPath::header(section);
        let view = self.view()?;
        let mut cell = view
            .dequeue_reusable_cell(&identifier, path)
            .ok_or_else(|| SectionsError::unregistered(identifier.as_str(), path))?;

        let injected = inject_model(&mut cell, callbacks.section_model.as_ref(), &info);
        if let Some(configure) = &callbacks.configure_section_cell {
            configure(&mut cell, &info);
        }

        tracing::trace!(
            target: targets::QUERY,
            section,
            identifier = identifier.as_str(),
            injected,
            "header cell configured"
        );
        Ok(Some(cell.into()))
    }

    // =========================================================================
    // Interaction
    // =========================================================================

    /// Handles a tap on the row at `path`.
    ///
    /// Deselects the row on the host (per [`BindingOptions`]), invokes the
    /// selection callback with the row identifier, then emits
    /// [`BindingSignals::row_selected`].
    ///
    /// # Panics
    ///
    /// Panics on a bad path, or on an unbound view when deselection is on.
    pub fn did_select_row(&self, path: IndexPath) {
        contract(self.try_did_select_row(path))
    }

    /// Fallible form of [`did_select_row`](Self::did_select_row).
    pub fn try_did_select_row(&self, path: IndexPath) -> Result<()> {
        let row = self.try_row_at(path)?;
        let options = self.options();

        if options.deselect_on_select {
            self.view()?.deselect_row(path, options.animate_deselect);
        }

        if let Some(selected) = &self.callbacks().row_selected {
            selected(&row);
        }

        tracing::trace!(target: targets::QUERY, %path, "row selected");
        self.signals.row_selected.emit(path);
        Ok(())
    }

    /// Forwards a scroll notification to the scroll callback.
    pub fn did_scroll(&self, scroll: &V::Scroll) {
        if let Some(handler) = &self.callbacks().did_scroll {
            handler(scroll);
        }
    }

    /// Forwards a scroll-settled notification to its callback.
    pub fn did_end_decelerating(&self, scroll: &V::Scroll) {
        if let Some(handler) = &self.callbacks().did_end_decelerating {
            handler(scroll);
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn reload(&self, view: &V) {
        view.reload_data();
        self.apply_footer(view);
    }

    fn apply_footer(&self, view: &V) {
        let policy = self.footer_policy();
        if policy.is_unset() {
            return;
        }

        let total_rows = self.total_row_count();
        let empty = total_rows == 0 && policy.empty_view().is_some();
        view.set_footer_view(policy.resolve(total_rows));

        tracing::debug!(target: targets::BINDING, total_rows, empty, "footer applied");
        self.signals.footer_changed.emit(empty);
    }
}

impl<S, R, V> ListDataSource<V> for SectionedListBinding<S, R, V>
where
    S: Clone + Send + Sync + 'static,
    R: Clone + Send + Sync + 'static,
    V: HostView + 'static,
{
    fn number_of_sections(&self) -> usize {
        self.section_count()
    }

    fn number_of_rows(&self, section: usize) -> usize {
        self.row_count(section)
    }

    fn cell_for_row(&self, path: IndexPath) -> V::Cell {
        self.cell_at(path)
    }

    fn title_for_header(&self, section: usize) -> Option<String> {
        SectionedListBinding::title_for_header(self, section)
    }

    fn view_for_header(&self, section: usize) -> Option<V::View> {
        SectionedListBinding::view_for_header(self, section)
    }

    fn did_select_row(&self, path: IndexPath) {
        SectionedListBinding::did_select_row(self, path)
    }

    fn did_scroll(&self, scroll: &V::Scroll) {
        SectionedListBinding::did_scroll(self, scroll)
    }

    fn did_end_decelerating(&self, scroll: &V::Scroll) {
        SectionedListBinding::did_end_decelerating(self, scroll)
    }
}

/// Assigns the extracted model to `cell` if it can receive one.
///
/// Returns `true` if a model was assigned.
fn inject_model<C: CellHandle, T>(
    cell: &mut C,
    extractor: Option<&ModelExtractor<T>>,
    value: &T,
) -> bool {
    let Some(extract) = extractor else {
        return false;
    };
    let Some(target) = cell.as_model_cell() else {
        return false;
    };
    let Some(model) = extract(value).into_option() else {
        return false;
    };
    target.set_model(model);
    target.update_ui();
    true
}

/// Unwraps the result of a query whose failure is a caller contract violation.
#[track_caller]
fn contract<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}
