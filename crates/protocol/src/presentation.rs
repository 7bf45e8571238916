//! Derived presentation bundle published by the status engine.

use serde::{Deserialize, Serialize};

/// Icon shown when no device icon can be derived at all.
pub const DEFAULT_ICON: &str = "gpm-battery-missing";

/// Ordered, de-duplicated themed-icon fallback list.
///
/// The presentation layer walks the chain and uses the first name that
/// resolves in the active icon theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct IconChain(Vec<String>);

impl IconChain {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a name, skipping it if already present in the chain.
    pub fn push(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.0.iter().any(|existing| *existing == name) {
            self.0.push(name);
        }
    }

    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for IconChain {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut chain = IconChain::new();
        for name in iter {
            chain.push(name);
        }
        chain
    }
}

/// Everything a presentation collaborator needs to render the primary
/// device: panel label, menu text, accessible description, and icon.
///
/// Text fields are always populated; an empty string means "render
/// nothing", never "value missing".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StatusPresentation {
    /// Compact panel label, e.g. `0:25` or `(5%)`.
    pub short_text: String,
    /// Long form for menus, e.g. `Battery (0:25 left)`.
    pub detailed_text: String,
    /// Screen-reader description, includes the percentage when known.
    pub accessible_text: String,
    pub icon: IconChain,
}
