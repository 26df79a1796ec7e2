//! Horizon Sections - closure-configured data binding for sectioned list views.
//!
//! This is the main crate; it re-exports the core crate's signals, errors and
//! logging helpers alongside the [`model`] module.
//!
//! # Example
//!
//! ```
//! use horizon_sections::model::{IndexPath, Section};
//!
//! let sections = vec![
//!     Section::new("OverView", vec!["Name", "Detail", "Time"]),
//!     Section::new("Author", vec!["AuthorName", "AuthorImage", "AuthorAge"]),
//! ];
//! let path = IndexPath::new(1, 1);
//! assert_eq!(sections[path.section()][path.row()], "AuthorImage");
//! ```

pub use horizon_sections_core::*;

pub mod model;
pub mod prelude;
