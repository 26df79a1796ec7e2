//! Core systems for Horizon Sections.
//!
//! This crate provides the foundation the binding layer is built on:
//!
//! - **Signal/Slot System**: Type-safe change notification ([`Signal`])
//! - **Errors**: The contract-violation taxonomy ([`SectionsError`])
//! - **Logging**: `tracing` targets, span names and tree formatting options
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_sections_core::Signal;
//!
//! let row_selected = Signal::<(usize, usize)>::new();
//!
//! let conn_id = row_selected.connect(|(section, row)| {
//!     println!("selected [{}, {}]", section, row);
//! });
//!
//! row_selected.emit((2, 0));
//! row_selected.disconnect(conn_id);
//! ```

mod error;
pub mod logging;
pub mod signal;

pub use error::{Result, SectionsError};
pub use logging::{PerfSpan, TreeFormatOptions, TreeStyle};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
