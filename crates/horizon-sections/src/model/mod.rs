//! Sectioned data binding for list views.
//!
//! This module turns the delegate-style query protocol of a list widget
//! (section count, rows per section, cell for index path, header title and
//! view, selection and scroll events) into a closure-configured binding over
//! a plain list of sections.
//!
//! # Core Types
//!
//! - `Section`: A section identifier plus its ordered row identifiers
//! - `IndexPath`: A (section, row) position
//! - `SectionedListBinding`: Owns the sections and answers host queries
//! - `BindingCallbacks`: The optional closures the binding dispatches to
//! - `HostView`: What the binding needs from the list widget
//! - `ListDataSource`: What the list widget asks of its data source
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use horizon_sections::model::{BindingCallbacks, IndexPath, SectionedListBinding};
//!
//! let table = Arc::new(Table::new());
//! let binding = SectionedListBinding::new().with_callbacks(
//!     BindingCallbacks::new()
//!         .with_cell_reuse_identifier(|_| "cell".to_string())
//!         .with_configure_cell(|cell: &mut TextCell, row: &CellInfo| cell.text = row.name().into())
//!         .with_section_title(|section: &SectionInfo| Some(section.name().into()))
//!         .with_row_selected(|row: &CellInfo| println!("did select: {}", row.name())),
//! );
//! binding.bind_view(&table);
//!
//! binding.set_sections_from_pairs([
//!     (SectionInfo::OverView, vec![CellInfo::Name, CellInfo::Detail, CellInfo::Time]),
//!     (SectionInfo::Author, vec![CellInfo::AuthorName, CellInfo::AuthorImage]),
//! ]);
//!
//! binding.did_select_row(IndexPath::new(1, 0));
//! ```
//!
//! # Architecture Overview
//!
//! ```text
//! ┌──────────────┐  queries   ┌──────────────────────┐  closures  ┌───────────┐
//! │  Host view   │───────────>│ SectionedListBinding │───────────>│ Callbacks │
//! │  (HostView)  │<───────────│  Vec<Section<S, R>>  │            └───────────┘
//! └──────────────┘  reload,   └──────────────────────┘
//!                   dequeue,             │
//!                   footer               └──> BindingSignals
//! ```

mod binding;
mod callbacks;
mod data;
mod debug;
mod footer;
mod index;
mod options;
mod section;
mod traits;

pub use binding::{BindingSignals, SectionedListBinding};
pub use callbacks::{
    BindingCallbacks, ConfigureFn, HeaderViewFn, ModelExtractor, ReuseIdentifierFn, ScrollFn,
    SelectFn, TitleFn,
};
pub use data::ItemData;
pub use debug::SectionTreeDebug;
pub use footer::FooterPolicy;
pub use index::IndexPath;
pub use options::BindingOptions;
pub use section::Section;
pub use traits::{CellHandle, HostView, ListDataSource, ModelCell, ReusableRow};
