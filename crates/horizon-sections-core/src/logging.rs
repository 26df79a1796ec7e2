//! Logging and debugging facilities for Horizon Sections.
//!
//! This module provides:
//! - Target and span names for filtering the crate's `tracing` output
//! - Tree formatting options shared by the section debug views
//! - A performance span guard for timing reloads
//!
//! # Tracing Integration
//!
//! Horizon Sections only emits `tracing` events; install a subscriber in the
//! application to see them:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_sections=debug")
//!     .init();
//! ```

/// Span names used throughout Horizon Sections for tracing.
pub mod span_names {
    /// Sections replacement and reload span.
    pub const RELOAD: &str = "horizon_sections::reload";
    /// Cell and header resolution span.
    pub const RESOLVE: &str = "horizon_sections::resolve";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "horizon_sections_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_sections_core::signal";
    /// Binding lifecycle target (view binding, sections replacement, footer).
    pub const BINDING: &str = "horizon_sections::binding";
    /// Per-query target (cells, headers, selection, scroll).
    pub const QUERY: &str = "horizon_sections::query";
    /// Performance spans.
    pub const PERF: &str = "horizon_sections::perf";
}

/// Style options for tree visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeStyle {
    /// ASCII characters for tree branches.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
    /// Compact dash-prefixed representation.
    Compact,
}

/// Configuration for tree debug output.
#[derive(Debug, Clone)]
pub struct TreeFormatOptions {
    /// The style of tree visualization.
    pub style: TreeStyle,
    /// Whether to prefix every node with its position.
    pub show_positions: bool,
    /// Whether to append child counts to parent nodes.
    pub show_counts: bool,
    /// Maximum number of children listed per parent (None for unlimited).
    pub max_children: Option<usize>,
    /// Indent size for each level.
    pub indent_size: usize,
}

impl Default for TreeFormatOptions {
    fn default() -> Self {
        Self {
            style: TreeStyle::default(),
            show_positions: true,
            show_counts: true,
            max_children: None,
            indent_size: 2,
        }
    }
}

impl TreeFormatOptions {
    /// Create options for minimal output.
    pub fn minimal() -> Self {
        Self {
            show_positions: false,
            show_counts: false,
            ..Default::default()
        }
    }

    /// Sets the tree style.
    pub fn with_style(mut self, style: TreeStyle) -> Self {
        self.style = style;
        self
    }

    /// Limits how many children are listed under each parent.
    pub fn with_max_children(mut self, max: usize) -> Self {
        self.max_children = Some(max);
        self
    }

    /// Build the prefix string for a node at `depth`.
    ///
    /// Depth 0 nodes have no prefix.
    pub fn node_prefix(&self, depth: usize, is_last: bool) -> String {
        if depth == 0 {
            return String::new();
        }

        let (branch, tee, corner) = match self.style {
            TreeStyle::Ascii => ("|", "+--", "`--"),
            TreeStyle::Unicode => ("\u{2502}", "\u{251c}\u{2500}\u{2500}", "\u{2514}\u{2500}\u{2500}"),
            TreeStyle::Compact => ("", "-", "-"),
        };

        let mut prefix = String::new();
        for _ in 0..(depth - 1) {
            prefix.push_str(branch);
            for _ in 0..self.indent_size {
                prefix.push(' ');
            }
        }
        prefix.push_str(if is_last { corner } else { tee });
        prefix.push(' ');
        prefix
    }
}

/// A guard that keeps a tracing span entered until dropped.
///
/// Used to time reloads and other whole-list operations.
#[derive(Debug)]
pub struct PerfSpan {
    _span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: targets::PERF, "perf", operation = name);
        Self {
            _span: span.entered(),
        }
    }
}
