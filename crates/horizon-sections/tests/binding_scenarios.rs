//! Integration tests for `SectionedListBinding` against a recording host view.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use proptest::prelude::*;

use horizon_sections::model::{
    BindingCallbacks, BindingOptions, CellHandle, FooterPolicy, HostView, IndexPath, ItemData,
    ListDataSource, ModelCell, ReusableRow, Section, SectionedListBinding,
};
use horizon_sections::SectionsError;

// =============================================================================
// Recording host view
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
struct TextCell {
    identifier: String,
    path: IndexPath,
    text: String,
    model: Option<String>,
    refreshes: usize,
    accepts_model: bool,
}

impl ModelCell for TextCell {
    fn set_model(&mut self, model: ItemData) {
        self.model = model.as_string().map(str::to_owned);
    }

    fn update_ui(&mut self) {
        self.refreshes += 1;
    }
}

impl CellHandle for TextCell {
    fn as_model_cell(&mut self) -> Option<&mut dyn ModelCell> {
        if self.accepts_model {
            Some(self)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Widget {
    Cell(TextCell),
    Label(String),
}

impl From<TextCell> for Widget {
    fn from(cell: TextCell) -> Self {
        Widget::Cell(cell)
    }
}

#[derive(Default)]
struct RecordingTable {
    /// Registered identifiers, mapped to whether their cells accept models.
    registered: Mutex<HashMap<String, bool>>,
    reloads: AtomicUsize,
    deselected: Mutex<Vec<(IndexPath, bool)>>,
    footer: Mutex<Option<Widget>>,
    footer_sets: AtomicUsize,
}

impl RecordingTable {
    fn with_cells(cells: &[(&str, bool)]) -> Arc<Self> {
        let table = Self::default();
        for (identifier, accepts_model) in cells {
            table
                .registered
                .lock()
                .insert((*identifier).to_string(), *accepts_model);
        }
        Arc::new(table)
    }

    fn reloads(&self) -> usize {
        self.reloads.load(Ordering::SeqCst)
    }

    fn footer(&self) -> Option<Widget> {
        self.footer.lock().clone()
    }

    /// Queries everything a layout pass would, returning the rendered texts.
    fn layout(&self, source: &dyn ListDataSource<RecordingTable>) -> Vec<Vec<String>> {
        (0..source.number_of_sections())
            .map(|s| {
                (0..source.number_of_rows(s))
                    .map(|r| source.cell_for_row(IndexPath::new(s, r)).text)
                    .collect()
            })
            .collect()
    }
}

impl HostView for RecordingTable {
    type Cell = TextCell;
    type View = Widget;
    type Scroll = f32;

    fn dequeue_reusable_cell(&self, identifier: &str, path: IndexPath) -> Option<TextCell> {
        let accepts_model = *self.registered.lock().get(identifier)?;
        Some(TextCell {
            identifier: identifier.to_string(),
            path,
            accepts_model,
            ..Default::default()
        })
    }

    fn reload_data(&self) {
        self.reloads.fetch_add(1, Ordering::SeqCst);
    }

    fn deselect_row(&self, path: IndexPath, animated: bool) {
        self.deselected.lock().push((path, animated));
    }

    fn set_footer_view(&self, view: Option<Widget>) {
        self.footer_sets.fetch_add(1, Ordering::SeqCst);
        *self.footer.lock() = view;
    }
}

type Binding = SectionedListBinding<String, String, RecordingTable>;
type Callbacks = BindingCallbacks<String, String, RecordingTable>;

static_assertions::assert_impl_all!(Binding: Send, Sync);

fn demo_sections() -> Vec<Section<String, String>> {
    let section = |info: &str, rows: &[&str]| {
        Section::new(
            info.to_string(),
            rows.iter().map(|r| r.to_string()).collect(),
        )
    };
    vec![
        section("OverView", &["Name", "Detail", "Time"]),
        section("Author", &["AuthorName", "AuthorImage", "AuthorAge"]),
        section("Footer", &["LikeNumber", "FollowNumber", "Time"]),
    ]
}

fn text_callbacks() -> Callbacks {
    Callbacks::new()
        .with_cell_reuse_identifier(|_| "cell".to_string())
        .with_configure_cell(|cell: &mut TextCell, row: &String| cell.text = row.clone())
        .with_section_title(|section: &String| Some(section.clone()))
}

/// Routes binding logs to the test output; filter with `RUST_LOG`.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn bound(table: &Arc<RecordingTable>) -> Binding {
    let binding = Binding::new().with_callbacks(text_callbacks());
    binding.bind_view(table);
    binding
}

// =============================================================================
// Counting and addressing
// =============================================================================

#[test]
fn test_demo_sections_scenario() {
    init_tracing();
    let table = RecordingTable::with_cells(&[("cell", false)]);
    let binding = bound(&table);

    binding.set_sections(demo_sections());

    assert_eq!(binding.section_count(), 3);
    assert_eq!(binding.row_count(0), 3);
    assert_eq!(binding.row_count(2), 3);
    assert_eq!(binding.row_at(IndexPath::new(1, 1)), "AuthorImage");
    assert_eq!(binding.title_for_header(0).as_deref(), Some("OverView"));

    let cell = binding.cell_at(IndexPath::new(2, 1));
    assert_eq!(cell.text, "FollowNumber");
    assert_eq!(cell.identifier, "cell");
    assert_eq!(cell.path, IndexPath::new(2, 1));
}

#[test]
fn test_layout_pass_renders_every_row_in_order() {
    let table = RecordingTable::with_cells(&[("cell", false)]);
    let binding = bound(&table);
    binding.set_sections(demo_sections());

    let rendered = table.layout(&binding);
    assert_eq!(
        rendered,
        vec![
            vec!["Name", "Detail", "Time"],
            vec!["AuthorName", "AuthorImage", "AuthorAge"],
            vec!["LikeNumber", "FollowNumber", "Time"],
        ]
    );
}

#[test]
fn test_empty_sections_install_empty_footer() {
    let table = RecordingTable::with_cells(&[("cell", false)]);
    let binding = bound(&table);
    binding.set_footer_policy(
        FooterPolicy::new()
            .with_empty_view(Widget::Label("No data".into()))
            .with_default_view(Widget::Label("Footer".into())),
    );

    binding.set_sections(Vec::new());

    assert_eq!(binding.section_count(), 0);
    assert!(binding.is_empty());
    assert_eq!(table.footer(), Some(Widget::Label("No data".into())));
}

#[test]
fn test_sections_without_rows_count_as_empty() {
    let table = RecordingTable::with_cells(&[]);
    let binding = bound(&table);
    binding.set_footer_policy(FooterPolicy::new().with_empty_view(Widget::Label("empty".into())));

    binding.set_sections(vec![Section::new("A".into(), vec![]), Section::new("B".into(), vec![])]);

    assert_eq!(binding.section_count(), 2);
    assert_eq!(binding.row_count(1), 0);
    assert_eq!(table.footer(), Some(Widget::Label("empty".into())));
}

#[test]
fn test_footer_swaps_back_to_default() {
    let table = RecordingTable::with_cells(&[]);
    let binding = bound(&table);
    let flags = Arc::new(Mutex::new(Vec::new()));
    let recv = flags.clone();
    binding
        .signals()
        .footer_changed
        .connect(move |empty| recv.lock().push(*empty));

    binding.set_footer_policy(
        FooterPolicy::new()
            .with_empty_view(Widget::Label("empty".into()))
            .with_default_view(Widget::Label("default".into())),
    );

    binding.set_sections(Vec::new());
    assert_eq!(table.footer(), Some(Widget::Label("empty".into())));

    binding.set_sections(demo_sections());
    assert_eq!(table.footer(), Some(Widget::Label("default".into())));

    binding.set_sections(Vec::new());
    assert_eq!(table.footer(), Some(Widget::Label("empty".into())));

    assert_eq!(*flags.lock(), vec![true, false, true]);
}

#[test]
fn test_unset_footer_policy_leaves_host_footer_alone() {
    let table = RecordingTable::with_cells(&[]);
    let binding = bound(&table);

    binding.set_sections(Vec::new());
    binding.set_sections(demo_sections());

    assert_eq!(table.footer_sets.load(Ordering::SeqCst), 0);
}

// =============================================================================
// Reload
// =============================================================================

#[test]
fn test_every_replacement_reloads_exactly_once() {
    let table = RecordingTable::with_cells(&[]);
    let binding = bound(&table);
    assert_eq!(table.reloads(), 0);

    binding.set_sections(demo_sections());
    assert_eq!(table.reloads(), 1);

    // Same content again: still a full reload, no diffing.
    binding.set_sections(demo_sections());
    assert_eq!(table.reloads(), 2);

    binding.set_sections(Vec::new());
    assert_eq!(table.reloads(), 3);
}

#[test]
fn test_sections_replaced_signal_follows_reload() {
    let table = RecordingTable::with_cells(&[]);
    let binding = bound(&table);
    let seen = Arc::new(Mutex::new(Vec::new()));

    let recv = seen.clone();
    let host = table.clone();
    binding
        .signals()
        .sections_replaced
        .connect(move |count| recv.lock().push((*count, host.reloads())));

    binding.set_sections(demo_sections());
    binding.set_sections(Vec::new());

    assert_eq!(*seen.lock(), vec![(3, 1), (0, 2)]);
}

#[test]
fn test_pairs_and_modify_go_through_replacement() {
    let table = RecordingTable::with_cells(&[("cell", false)]);
    let binding = bound(&table);

    binding.set_sections_from_pairs([
        ("Numbers".to_string(), vec!["One".to_string(), "Two".to_string()]),
        ("Empty".to_string(), vec![]),
    ]);
    assert_eq!(table.reloads(), 1);
    assert_eq!(binding.row_count(0), 2);

    let previous = binding.modify_sections(|sections| {
        let old = std::mem::replace(&mut sections[0][1], "Deux".to_string());
        sections[1].push_row("Zero".to_string());
        old
    });

    assert_eq!(previous, "Two");
    assert_eq!(table.reloads(), 2);
    assert_eq!(binding.row_at(IndexPath::new(0, 1)), "Deux");
    assert_eq!(binding.row_count(1), 1);
    assert_eq!(binding.cell_at(IndexPath::new(1, 0)).text, "Zero");
}

#[test]
fn test_sections_stored_without_view() {
    let binding = Binding::new().with_callbacks(text_callbacks());

    binding.set_sections(demo_sections());

    assert!(!binding.is_view_bound());
    assert_eq!(binding.section_count(), 3);
    assert_eq!(
        binding.try_cell_at(IndexPath::new(0, 0)).unwrap_err(),
        SectionsError::ViewNotBound
    );
}

#[test]
fn test_reload_on_bind() {
    let table = RecordingTable::with_cells(&[]);
    let binding = Binding::new().with_options(BindingOptions::default().with_reload_on_bind(true));
    binding.set_footer_policy(FooterPolicy::new().with_empty_view(Widget::Label("empty".into())));

    binding.bind_view(&table);

    assert_eq!(table.reloads(), 1);
    assert_eq!(table.footer(), Some(Widget::Label("empty".into())));
}

#[test]
fn test_binding_does_not_keep_view_alive() {
    let table = RecordingTable::with_cells(&[("cell", false)]);
    let binding = bound(&table);
    binding.set_sections(demo_sections());
    assert!(binding.is_view_bound());

    drop(table);

    assert!(!binding.is_view_bound());
    assert!(matches!(binding.view(), Err(SectionsError::ViewNotBound)));
}

// =============================================================================
// Model injection
// =============================================================================

#[test]
fn test_model_injected_before_configuration() {
    let table = RecordingTable::with_cells(&[("model", true)]);
    let binding = Binding::new().with_callbacks(
        Callbacks::new()
            .with_cell_reuse_identifier(|_| "model".to_string())
            .with_cell_model(|row: &String| ItemData::from(row.to_uppercase()))
            .with_configure_cell(|cell: &mut TextCell, row: &String| {
                assert_eq!(cell.model.as_deref(), Some(row.to_uppercase().as_str()));
                assert_eq!(cell.refreshes, 1);
                cell.text = row.clone();
            }),
    );
    binding.bind_view(&table);
    binding.set_sections(demo_sections());

    let cell = binding.cell_at(IndexPath::new(1, 2));
    assert_eq!(cell.model.as_deref(), Some("AUTHORAGE"));
    assert_eq!(cell.text, "AuthorAge");
}

#[test]
fn test_absent_model_is_not_assigned() {
    let table = RecordingTable::with_cells(&[("model", true)]);
    let binding = Binding::new().with_callbacks(
        Callbacks::new()
            .with_cell_reuse_identifier(|_| "model".to_string())
            .with_cell_model(|row: &String| {
                if row == "Time" {
                    ItemData::None
                } else {
                    ItemData::from(row.as_str())
                }
            }),
    );
    binding.bind_view(&table);
    binding.set_sections(demo_sections());

    let cell = binding.cell_at(IndexPath::new(0, 2));
    assert_eq!(cell.model, None);
    assert_eq!(cell.refreshes, 0);

    let cell = binding.cell_at(IndexPath::new(0, 1));
    assert_eq!(cell.model.as_deref(), Some("Detail"));
}

#[test]
fn test_model_skipped_for_cells_without_model_support() {
    let table = RecordingTable::with_cells(&[("plain", false)]);
    let extracted = Arc::new(AtomicUsize::new(0));
    let counter = extracted.clone();
    let binding = Binding::new().with_callbacks(
        Callbacks::new()
            .with_cell_reuse_identifier(|_| "plain".to_string())
            .with_cell_model(move |row: &String| {
                counter.fetch_add(1, Ordering::SeqCst);
                ItemData::from(row.as_str())
            }),
    );
    binding.bind_view(&table);
    binding.set_sections(demo_sections());

    let cell = binding.cell_at(IndexPath::new(0, 0));
    assert_eq!(cell.model, None);
    assert_eq!(cell.refreshes, 0);
    assert_eq!(extracted.load(Ordering::SeqCst), 0);
}

#[test]
fn test_reuse_identifier_chooses_cell_kind() {
    let table = RecordingTable::with_cells(&[("plain", false), ("model", true)]);
    let binding = Binding::new().with_callbacks(
        Callbacks::new()
            .with_cell_reuse_identifier(|row: &String| {
                if row.starts_with("Author") {
                    "model".to_string()
                } else {
                    "plain".to_string()
                }
            })
            .with_cell_model(|row: &String| ItemData::from(row.as_str())),
    );
    binding.bind_view(&table);
    binding.set_sections(demo_sections());

    assert_eq!(binding.cell_at(IndexPath::new(0, 0)).model, None);
    assert_eq!(
        binding.cell_at(IndexPath::new(1, 0)).model.as_deref(),
        Some("AuthorName")
    );
}

// =============================================================================
// Headers
// =============================================================================

#[test]
fn test_header_resolution_prefers_explicit_view() {
    let table = RecordingTable::with_cells(&[("header", true)]);
    let binding = Binding::new().with_callbacks(
        Callbacks::new()
            .with_section_header_view(|section: &String| {
                (section == "Author").then(|| Widget::Label(format!("<{section}>")))
            })
            .with_section_reuse_identifier(|_| "header".to_string())
            .with_section_model(|section: &String| ItemData::from(section.as_str()))
            .with_configure_section_cell(|cell: &mut TextCell, section: &String| {
                cell.text = section.to_lowercase();
            }),
    );
    binding.bind_view(&table);
    binding.set_sections(demo_sections());

    assert_eq!(
        binding.view_for_header(1),
        Some(Widget::Label("<Author>".into()))
    );

    match binding.view_for_header(0) {
        Some(Widget::Cell(cell)) => {
            assert_eq!(cell.identifier, "header");
            assert_eq!(cell.path, IndexPath::header(0));
            assert_eq!(cell.model.as_deref(), Some("OverView"));
            assert_eq!(cell.text, "overview");
        }
        other => panic!("expected header cell, got {other:?}"),
    }
}

#[test]
fn test_header_absent_without_callbacks() {
    let table = RecordingTable::with_cells(&[]);
    let binding = Binding::new();
    binding.bind_view(&table);
    binding.set_sections(demo_sections());

    assert_eq!(binding.view_for_header(0), None);
    assert_eq!(binding.title_for_header(0), None);
    // Unset callbacks never index into the sections.
    assert_eq!(binding.view_for_header(99), None);
    assert_eq!(binding.title_for_header(99), None);
}

#[test]
fn test_header_view_callback_returning_none_without_reuse_identifier() {
    let table = RecordingTable::with_cells(&[]);
    let binding = Binding::new()
        .with_callbacks(Callbacks::new().with_section_header_view(|_: &String| None::<Widget>));
    binding.bind_view(&table);
    binding.set_sections(demo_sections());

    assert_eq!(binding.view_for_header(2), None);
}

#[test]
fn test_unregistered_header_identifier() {
    let table = RecordingTable::with_cells(&[]);
    let binding = Binding::new().with_callbacks(
        Callbacks::new().with_section_reuse_identifier(|_| "missing".to_string()),
    );
    binding.bind_view(&table);
    binding.set_sections(demo_sections());

    assert_eq!(
        binding.try_view_for_header(0).unwrap_err(),
        SectionsError::unregistered("missing", IndexPath::header(0))
    );
}

// =============================================================================
// Selection and scrolling
// =============================================================================

#[test]
fn test_selection_invokes_callback_and_deselects_once() {
    let table = RecordingTable::with_cells(&[("cell", false)]);
    let selected = Arc::new(Mutex::new(Vec::new()));
    let recv = selected.clone();
    let binding = Binding::new().with_callbacks(
        text_callbacks().with_row_selected(move |row: &String| recv.lock().push(row.clone())),
    );
    binding.bind_view(&table);
    binding.set_sections(demo_sections());

    let signalled = Arc::new(Mutex::new(Vec::new()));
    let recv = signalled.clone();
    binding
        .signals()
        .row_selected
        .connect(move |path| recv.lock().push(*path));

    binding.did_select_row(IndexPath::new(2, 0));

    assert_eq!(*selected.lock(), vec!["LikeNumber".to_string()]);
    assert_eq!(*table.deselected.lock(), vec![(IndexPath::new(2, 0), true)]);
    assert_eq!(*signalled.lock(), vec![IndexPath::new(2, 0)]);
}

#[test]
fn test_selection_respects_options() {
    let table = RecordingTable::with_cells(&[]);
    let binding = bound(&table);
    binding.set_sections(demo_sections());

    binding.set_options(BindingOptions::default().with_animate_deselect(false));
    binding.did_select_row(IndexPath::new(0, 0));

    binding.set_options(BindingOptions::default().with_deselect_on_select(false));
    binding.did_select_row(IndexPath::new(0, 1));

    assert_eq!(*table.deselected.lock(), vec![(IndexPath::new(0, 0), false)]);
}

#[test]
fn test_selection_callback_may_replace_sections() {
    init_tracing();
    let table = RecordingTable::with_cells(&[("cell", false)]);
    let binding = Arc::new(bound(&table));
    binding.set_sections(demo_sections());

    let weak = Arc::downgrade(&binding);
    binding.set_callbacks(text_callbacks().with_row_selected(move |row: &String| {
        if let Some(binding) = weak.upgrade() {
            binding.set_sections(vec![Section::new("Selected".into(), vec![row.clone()])]);
        }
    }));

    binding.did_select_row(IndexPath::new(1, 1));

    assert_eq!(binding.section_count(), 1);
    assert_eq!(binding.row_at(IndexPath::new(0, 0)), "AuthorImage");
    assert_eq!(table.reloads(), 2);
}

#[test]
fn test_scroll_pass_through() {
    let table = RecordingTable::with_cells(&[]);
    let offsets = Arc::new(Mutex::new(Vec::new()));
    let settled = Arc::new(Mutex::new(Vec::new()));

    let recv_scroll = offsets.clone();
    let recv_settled = settled.clone();
    let binding = Binding::new().with_callbacks(
        Callbacks::new()
            .with_did_scroll(move |offset: &f32| recv_scroll.lock().push(*offset))
            .with_did_end_decelerating(move |offset: &f32| recv_settled.lock().push(*offset)),
    );
    binding.bind_view(&table);

    binding.did_scroll(&10.0);
    binding.did_scroll(&24.5);
    binding.did_end_decelerating(&24.5);

    assert_eq!(*offsets.lock(), vec![10.0, 24.5]);
    assert_eq!(*settled.lock(), vec![24.5]);

    // Unset handlers are a no-op.
    Binding::new().did_scroll(&1.0);
}

// =============================================================================
// Contract violations
// =============================================================================

#[test]
fn test_out_of_range_queries() {
    let table = RecordingTable::with_cells(&[("cell", false)]);
    let binding = bound(&table);
    binding.set_sections(demo_sections());

    assert_eq!(
        binding.try_row_count(3).unwrap_err(),
        SectionsError::SectionOutOfRange {
            section: 3,
            count: 3
        }
    );
    assert_eq!(
        binding.try_row_at(IndexPath::new(1, 3)).unwrap_err(),
        SectionsError::RowOutOfRange {
            section: 1,
            row: 3,
            count: 3
        }
    );
    assert!(binding.try_did_select_row(IndexPath::new(5, 0)).is_err());
    assert!(table.deselected.lock().is_empty());
}

#[test]
#[should_panic(expected = "section 3 is out of range")]
fn test_row_count_out_of_range_panics() {
    let binding = Binding::new();
    binding.set_sections(demo_sections());
    binding.row_count(3);
}

#[test]
#[should_panic(expected = "no reusable cell registered for 'cell'")]
fn test_unregistered_cell_panics() {
    let table = RecordingTable::with_cells(&[]);
    let binding = bound(&table);
    binding.set_sections(demo_sections());
    binding.cell_at(IndexPath::new(0, 0));
}

#[test]
fn test_missing_reuse_identifier_callback() {
    let table = RecordingTable::with_cells(&[("cell", false)]);
    let binding = Binding::new();
    binding.bind_view(&table);
    binding.set_sections(demo_sections());

    assert_eq!(
        binding.try_cell_at(IndexPath::new(0, 0)).unwrap_err(),
        SectionsError::MissingCallback("cell_reuse_identifier")
    );
}

// =============================================================================
// Rows with their own reuse identifiers
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellInfo {
    Name,
    AuthorImage,
}

impl ReusableRow for CellInfo {
    fn reuse_identifier(&self) -> &str {
        match self {
            CellInfo::Name => "text",
            CellInfo::AuthorImage => "image",
        }
    }
}

#[test]
fn test_reusable_rows_resolve_their_own_identifiers() {
    let table = RecordingTable::with_cells(&[("text", false), ("image", false)]);
    let callbacks =
        BindingCallbacks::<&'static str, CellInfo, RecordingTable>::new().with_reusable_rows();
    let binding = SectionedListBinding::new().with_callbacks(callbacks);
    binding.bind_view(&table);
    binding.set_sections_from_pairs([("Author", vec![CellInfo::Name, CellInfo::AuthorImage])]);

    assert_eq!(binding.cell_at(IndexPath::new(0, 0)).identifier, "text");
    assert_eq!(binding.cell_at(IndexPath::new(0, 1)).identifier, "image");
}

// =============================================================================
// Composition: a screen that owns a binding and forwards host queries
// =============================================================================

struct ArticleScreen {
    binding: Binding,
    opened: Mutex<Vec<IndexPath>>,
}

impl ArticleScreen {
    fn new(table: &Arc<RecordingTable>) -> Self {
        let screen = Self {
            binding: bound(table),
            opened: Mutex::new(Vec::new()),
        };
        screen.binding.set_sections(demo_sections());
        screen
    }
}

impl ListDataSource<RecordingTable> for ArticleScreen {
    fn number_of_sections(&self) -> usize {
        self.binding.section_count()
    }

    fn number_of_rows(&self, section: usize) -> usize {
        self.binding.row_count(section)
    }

    fn cell_for_row(&self, path: IndexPath) -> TextCell {
        self.binding.cell_at(path)
    }

    fn title_for_header(&self, section: usize) -> Option<String> {
        self.binding.title_for_header(section)
    }

    fn did_select_row(&self, path: IndexPath) {
        self.opened.lock().push(path);
        self.binding.did_select_row(path);
    }
}

#[test]
fn test_screen_forwards_queries_to_binding() {
    let table = RecordingTable::with_cells(&[("cell", false)]);
    let screen = ArticleScreen::new(&table);
    let source: &dyn ListDataSource<RecordingTable> = &screen;

    assert_eq!(table.layout(source)[1], vec!["AuthorName", "AuthorImage", "AuthorAge"]);
    assert_eq!(source.title_for_header(2).as_deref(), Some("Footer"));
    assert_eq!(source.view_for_header(0), None);

    source.did_select_row(IndexPath::new(0, 2));
    assert_eq!(*screen.opened.lock(), vec![IndexPath::new(0, 2)]);
    assert_eq!(table.deselected.lock().len(), 1);
}

#[test]
fn test_format_tree_lists_current_sections() {
    let binding = Binding::new();
    binding.set_sections(demo_sections());

    let tree = binding.format_tree();
    assert!(tree.starts_with("Sections (3 sections, 9 rows):"));
    assert!(tree.contains("[1, 1] \"AuthorImage\""));
}

// =============================================================================
// Properties
// =============================================================================

fn arb_sections() -> impl Strategy<Value = Vec<Section<u8, u16>>> {
    prop::collection::vec(
        (any::<u8>(), prop::collection::vec(any::<u16>(), 0..8)),
        0..8,
    )
    .prop_map(|pairs| pairs.into_iter().map(Section::from).collect())
}

proptest! {
    #[test]
    fn prop_counts_match_sections(sections in arb_sections()) {
        let table = RecordingTable::with_cells(&[]);
        let binding = SectionedListBinding::<u8, u16, RecordingTable>::new();
        binding.bind_view(&table);

        binding.set_sections(sections.clone());

        prop_assert_eq!(binding.section_count(), sections.len());
        for (s, section) in sections.iter().enumerate() {
            prop_assert_eq!(binding.row_count(s), section.len());
        }
        prop_assert_eq!(table.reloads(), 1);
    }

    #[test]
    fn prop_row_at_is_order_preserving_projection(sections in arb_sections()) {
        let binding = SectionedListBinding::<u8, u16, RecordingTable>::new();
        binding.set_sections(sections.clone());

        for (s, section) in sections.iter().enumerate() {
            prop_assert_eq!(binding.section_at(s), *section.info());
            for (r, row) in section.iter().enumerate() {
                prop_assert_eq!(binding.row_at(IndexPath::new(s, r)), *row);
            }
            prop_assert!(binding.try_row_at(IndexPath::new(s, section.len())).is_err());
        }
    }
}
