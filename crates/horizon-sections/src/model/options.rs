//! Behavior switches for a binding, loadable from TOML.
//!
//! ```
//! use horizon_sections::model::BindingOptions;
//!
//! let options = BindingOptions::from_toml_str(r#"
//! animate_deselect = false
//! reload_on_bind = true
//! "#).unwrap();
//!
//! assert!(options.deselect_on_select);
//! assert!(!options.animate_deselect);
//! assert!(options.reload_on_bind);
//! ```

use serde::{Deserialize, Serialize};

use horizon_sections_core::{Result, SectionsError};

/// Behavior switches for a [`SectionedListBinding`](super::SectionedListBinding).
///
/// Every field has a default, so a partial TOML table is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BindingOptions {
    /// Deselect the tapped row on the host as part of selection handling.
    pub deselect_on_select: bool,
    /// Animate that deselection.
    pub animate_deselect: bool,
    /// Reload the host as soon as a view is bound.
    pub reload_on_bind: bool,
}

impl Default for BindingOptions {
    fn default() -> Self {
        Self {
            deselect_on_select: true,
            animate_deselect: true,
            reload_on_bind: false,
        }
    }
}

impl BindingOptions {
    /// Parses options from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| SectionsError::Config(e.message().to_string()))
    }

    /// Serializes the options to a TOML document.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| SectionsError::Config(e.to_string()))
    }

    /// Sets whether selection deselects the row on the host.
    pub fn with_deselect_on_select(mut self, deselect: bool) -> Self {
        self.deselect_on_select = deselect;
        self
    }

    /// Sets whether deselection is animated.
    pub fn with_animate_deselect(mut self, animate: bool) -> Self {
        self.animate_deselect = animate;
        self
    }

    /// Sets whether binding a view triggers a reload.
    pub fn with_reload_on_bind(mut self, reload: bool) -> Self {
        self.reload_on_bind = reload;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let options = BindingOptions::from_toml_str("").unwrap();
        assert_eq!(options, BindingOptions::default());
    }

    #[test]
    fn test_invalid_document() {
        let err = BindingOptions::from_toml_str("deselect_on_select = \"yes\"").unwrap_err();
        assert!(matches!(err, SectionsError::Config(_)));
        assert!(!err.is_contract_violation());
    }

    #[test]
    fn test_toml_round_trip() {
        let options = BindingOptions::default()
            .with_deselect_on_select(false)
            .with_reload_on_bind(true);
        let text = options.to_toml_string().unwrap();
        assert_eq!(BindingOptions::from_toml_str(&text).unwrap(), options);
    }
}
