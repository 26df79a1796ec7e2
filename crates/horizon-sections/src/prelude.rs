//! Prelude module for Horizon Sections.
//!
//! This module re-exports the most commonly used types for convenient importing:
//!
//! ```ignore
//! use horizon_sections::prelude::*;
//! ```

// ============================================================================
// Signal/Slot System and Errors
// ============================================================================

pub use crate::signal::{ConnectionId, Signal};
pub use crate::{Result, SectionsError};

// ============================================================================
// Binding
// ============================================================================

pub use crate::model::{
    BindingCallbacks, BindingOptions, FooterPolicy, IndexPath, ItemData, Section,
    SectionedListBinding,
};

// ============================================================================
// Host View Contract
// ============================================================================

pub use crate::model::{CellHandle, HostView, ListDataSource, ModelCell, ReusableRow};
