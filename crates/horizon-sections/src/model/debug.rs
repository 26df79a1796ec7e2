//! Tree rendering of section lists for logs and test failures.

use std::fmt::{Debug, Write as FmtWrite};

use horizon_sections_core::TreeFormatOptions;

use super::binding::SectionedListBinding;
use super::section::Section;
use super::traits::HostView;

/// Renders a section list as a tree.
///
/// ```text
/// Sections (2 sections, 3 rows):
/// ├── [0] "OverView" (2 rows)
/// │  ├── [0, 0] "Name"
/// │  └── [0, 1] "Detail"
/// └── [1] "Author" (1 rows)
/// │  └── [1, 0] "AuthorName"
/// ```
#[derive(Debug, Clone, Default)]
pub struct SectionTreeDebug {
    options: TreeFormatOptions,
}

impl SectionTreeDebug {
    /// Create a formatter with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a formatter with custom options.
    pub fn with_options(options: TreeFormatOptions) -> Self {
        Self { options }
    }

    /// Format `sections` as a tree.
    pub fn format<S: Debug, R: Debug>(&self, sections: &[Section<S, R>]) -> String {
        let total_rows: usize = sections.iter().map(Section::len).sum();
        let mut output = String::new();
        let _ = writeln!(
            output,
            "Sections ({} sections, {} rows):",
            sections.len(),
            total_rows
        );

        if sections.is_empty() {
            output.push_str("  (empty)\n");
            return output;
        }

        for (s, section) in sections.iter().enumerate() {
            let last_section = s + 1 == sections.len();
            output.push_str(&self.options.node_prefix(1, last_section));
            if self.options.show_positions {
                let _ = write!(output, "[{s}] ");
            }
            let _ = write!(output, "{:?}", section.info());
            if self.options.show_counts {
                let _ = write!(output, " ({} rows)", section.len());
            }
            output.push('\n');

            let shown = self
                .options
                .max_children
                .map_or(section.len(), |max| max.min(section.len()));
            let hidden = section.len() - shown;

            for (r, row) in section.iter().take(shown).enumerate() {
                let last_row = r + 1 == shown && hidden == 0;
                output.push_str(&self.options.node_prefix(2, last_row));
                if self.options.show_positions {
                    let _ = write!(output, "[{s}, {r}] ");
                }
                let _ = writeln!(output, "{row:?}");
            }

            if hidden > 0 {
                output.push_str(&self.options.node_prefix(2, true));
                let _ = writeln!(output, "... {hidden} more");
            }
        }

        output
    }
}

impl<S, R, V> SectionedListBinding<S, R, V>
where
    S: Clone + Debug + Send + Sync + 'static,
    R: Clone + Debug + Send + Sync + 'static,
    V: HostView + 'static,
{
    /// Renders the current sections with default tree options.
    pub fn format_tree(&self) -> String {
        let sections = self.sections();
        SectionTreeDebug::new().format(sections.as_slice())
    }
}
